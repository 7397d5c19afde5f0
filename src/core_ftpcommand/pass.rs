use crate::constants::LOGGED_IN;
use crate::helpers::send_response;
use tokio::io::AsyncWrite;

// The password is neither checked nor logged.
pub async fn handle_pass_command<W>(writer: &mut W) -> Result<(), std::io::Error>
where
    W: AsyncWrite + Unpin,
{
    send_response(writer, LOGGED_IN).await
}
