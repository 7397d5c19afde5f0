use crate::constants::{OPENING_DATA_CONNECTION, TRANSFER_COMPLETE};
use crate::core_network::data::open_data_connection;
use crate::helpers::send_response;
use crate::server::ServerContext;
use crate::session::Session;
use log::{debug, warn};
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Handles the LIST FTP command.
///
/// Nothing is ever stored, so the listing is always empty. When a dialable
/// endpoint was negotiated the data connection is still opened and closed
/// right away, since some clients wait for it. An endpoint with port 0 or no
/// host is skipped like a missing one.
///
/// # Arguments
///
/// * `writer` - The control connection the replies go to.
/// * `ctx` - Server context, used for the data deadline.
/// * `session` - The client session, read for its data endpoint.
///
/// # Returns
///
/// `Err` only when writing a reply fails.
pub async fn handle_list_command<W>(
    writer: &mut W,
    ctx: &ServerContext,
    session: &Session,
) -> Result<(), std::io::Error>
where
    W: AsyncWrite + Unpin,
{
    send_response(writer, OPENING_DATA_CONNECTION).await?;

    if let Some(endpoint) = session.data_endpoint().filter(|e| e.is_dialable()) {
        match open_data_connection(endpoint, ctx.config.server.data_deadline()).await {
            Ok(mut data_stream) => {
                if let Err(e) = data_stream.shutdown().await {
                    debug!("[{}] Closing listing connection: {}", session.peer(), e);
                }
            }
            Err(e) => {
                warn!("[{}] LIST failed: {}", session.peer(), e);
                return send_response(writer, e.to_ftp_response()).await;
            }
        }
    }

    send_response(writer, TRANSFER_COMPLETE).await
}
