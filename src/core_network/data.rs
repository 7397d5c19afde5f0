use crate::constants::UPLOAD_BUFFER_SIZE;
use crate::core_network::endpoint::DataEndpoint;
use crate::core_network::error::DataChannelError;
use log::{debug, trace};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Opens the active-mode data connection to the endpoint the client advertised.
///
/// Without a deadline this waits as long as the OS lets the connect run.
pub async fn open_data_connection(
    endpoint: &DataEndpoint,
    deadline: Option<Duration>,
) -> Result<TcpStream, DataChannelError> {
    debug!("Opening data connection to {}", endpoint);
    let connect = TcpStream::connect((endpoint.host(), endpoint.port()));

    let result = match deadline {
        Some(limit) => timeout(limit, connect)
            .await
            .map_err(|_| DataChannelError::ConnectTimeout {
                endpoint: endpoint.clone(),
                timeout: limit,
            })?,
        None => connect.await,
    };

    result.map_err(|source| DataChannelError::Connect {
        endpoint: endpoint.clone(),
        source,
    })
}

/// Reads the data channel until the peer closes it and returns every byte.
///
/// The protocol has no length prefix, EOF is the only end marker. `limit` caps
/// the payload size and `deadline` bounds the whole read.
pub async fn read_payload<R>(
    data_stream: &mut R,
    limit: Option<u64>,
    deadline: Option<Duration>,
) -> Result<Vec<u8>, DataChannelError>
where
    R: AsyncRead + Unpin,
{
    match deadline {
        Some(limit_duration) => timeout(limit_duration, read_to_end(data_stream, limit))
            .await
            .map_err(|_| DataChannelError::ReadTimeout(limit_duration))?,
        None => read_to_end(data_stream, limit).await,
    }
}

async fn read_to_end<R>(data_stream: &mut R, limit: Option<u64>) -> Result<Vec<u8>, DataChannelError>
where
    R: AsyncRead + Unpin,
{
    let mut payload = Vec::new();
    let mut buffer = vec![0; UPLOAD_BUFFER_SIZE];

    loop {
        let bytes_read = match data_stream.read(&mut buffer).await {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) => return Err(DataChannelError::Read(e)),
        };

        if let Some(max) = limit {
            if (payload.len() + bytes_read) as u64 > max {
                return Err(DataChannelError::PayloadTooLarge(max));
            }
        }

        payload.extend_from_slice(&buffer[..bytes_read]);
        trace!("Read {} bytes, {} total", bytes_read, payload.len());
    }

    Ok(payload)
}
