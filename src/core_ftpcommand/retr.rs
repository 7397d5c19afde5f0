use crate::constants::RETRIEVAL_NOT_SUPPORTED;
use crate::helpers::send_response;
use tokio::io::AsyncWrite;

/// Handles the RETR FTP command.
///
/// Files are handed to Paperless-ngx and never kept here, so there is nothing
/// to retrieve.
pub async fn handle_retr_command<W>(writer: &mut W) -> Result<(), std::io::Error>
where
    W: AsyncWrite + Unpin,
{
    send_response(writer, RETRIEVAL_NOT_SUPPORTED).await
}
