use crate::constants::DELETION_NOT_SUPPORTED;
use crate::helpers::send_response;
use tokio::io::AsyncWrite;

// Nothing is stored locally, there is nothing to delete.
pub async fn handle_dele_command<W>(writer: &mut W) -> Result<(), std::io::Error>
where
    W: AsyncWrite + Unpin,
{
    send_response(writer, DELETION_NOT_SUPPORTED).await
}
