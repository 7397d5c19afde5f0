use crate::constants::{OPENING_DATA_CONNECTION, TRANSFER_COMPLETE};
use crate::core_ftpcommand::error::CommandError;
use crate::core_network::data::{open_data_connection, read_payload};
use crate::core_network::error::DataChannelError;
use crate::helpers::send_response;
use crate::server::ServerContext;
use crate::session::Session;
use log::{error, info, warn};
use tokio::io::AsyncWrite;

/// Handles the STOR (Store File) FTP command.
///
/// The whole file is read from the data connection into memory and then
/// handed to the upload sink under the name given by the client. Replies:
///
/// * `501` without a filename, nothing else happens.
/// * `150`, then `425` if the data connection cannot be opened, no endpoint
///   was negotiated or the negotiated one has port 0 or no host, `426` if it breaks before EOF, `552` if the
///   payload exceeds the configured limit.
/// * `550` if the sink rejects the document, `226` once it accepted it.
///
/// The data connection is dropped as soon as the payload has been read,
/// whatever the outcome. Failed uploads are not retried.
///
/// # Arguments
///
/// * `writer` - The control connection the replies go to.
/// * `ctx` - Server context holding the deadlines, the size limit and the sink.
/// * `session` - The client session, read for its data endpoint.
/// * `filename` - Everything after the verb, trimmed at both ends.
///
/// # Returns
///
/// `Err` only when writing a reply fails. Transfer and upload failures are
/// answered on the control connection and leave the session usable.
pub async fn handle_stor_command<W>(
    writer: &mut W,
    ctx: &ServerContext,
    session: &Session,
    filename: Option<String>,
) -> Result<(), std::io::Error>
where
    W: AsyncWrite + Unpin,
{
    let Some(filename) = filename else {
        let e = CommandError::MissingArgument("STOR");
        warn!("[{}] {}", session.peer(), e);
        return send_response(writer, e.to_ftp_response()).await;
    };

    info!("[{}] Receiving {}", session.peer(), filename);
    send_response(writer, OPENING_DATA_CONNECTION).await?;

    let payload = match receive_payload(ctx, session).await {
        Ok(payload) => payload,
        Err(e) => {
            warn!("[{}] STOR {} aborted: {}", session.peer(), filename, e);
            return send_response(writer, e.to_ftp_response()).await;
        }
    };

    info!(
        "[{}] Received {} bytes for {}",
        session.peer(),
        payload.len(),
        filename
    );

    match ctx.sink.upload(&filename, payload).await {
        Ok(()) => send_response(writer, TRANSFER_COMPLETE).await,
        Err(e) => {
            error!(
                "[{}] Failed to upload to Paperless-ngx: filename={} error={}",
                session.peer(),
                filename,
                e
            );
            send_response(writer, e.to_ftp_response()).await
        }
    }
}

async fn receive_payload(
    ctx: &ServerContext,
    session: &Session,
) -> Result<Vec<u8>, DataChannelError> {
    let endpoint = session
        .data_endpoint()
        .ok_or(DataChannelError::NotNegotiated)?;
    if !endpoint.is_dialable() {
        return Err(DataChannelError::Undialable(endpoint.clone()));
    }
    let server = &ctx.config.server;

    let mut data_stream = open_data_connection(endpoint, server.data_deadline()).await?;
    read_payload(&mut data_stream, server.upload_limit(), server.data_deadline()).await
}
