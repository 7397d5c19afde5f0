use crate::constants::GOODBYE;
use crate::helpers::send_response;
use crate::session::Session;
use log::info;
use tokio::io::AsyncWrite;

/// Handles the QUIT FTP command.
///
/// The session is closed even if the goodbye cannot be delivered; the
/// connection loop tears the control connection down afterwards.
///
/// # Arguments
///
/// * `writer` - The control connection the goodbye goes to.
/// * `session` - The client session, marked closed.
///
/// # Returns
///
/// Result<(), std::io::Error> indicating the success or failure of the operation.
pub async fn handle_quit_command<W>(writer: &mut W, session: &mut Session) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    info!("[{}] Received QUIT command. Closing connection.", session.peer());
    session.close();
    send_response(writer, GOODBYE).await
}
