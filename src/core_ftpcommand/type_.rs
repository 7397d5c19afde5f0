use crate::constants::TYPE_SET;
use crate::helpers::send_response;
use log::debug;
use tokio::io::AsyncWrite;

/// Handles the TYPE FTP command.
///
/// Payloads are relayed byte for byte, so ASCII and binary are treated the
/// same and the requested type is only logged.
pub async fn handle_type_command<W>(
    writer: &mut W,
    transfer_type: Option<&str>,
) -> Result<(), std::io::Error>
where
    W: AsyncWrite + Unpin,
{
    debug!("TYPE {} requested", transfer_type.unwrap_or("<none>"));
    send_response(writer, TYPE_SET).await
}
