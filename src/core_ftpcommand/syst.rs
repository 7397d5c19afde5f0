use crate::constants::SYSTEM_TYPE;
use crate::helpers::send_response;
use tokio::io::AsyncWrite;

/// Handles the SYST (System) FTP command.
pub async fn handle_syst_command<W>(writer: &mut W) -> Result<(), std::io::Error>
where
    W: AsyncWrite + Unpin,
{
    send_response(writer, SYSTEM_TYPE).await
}
