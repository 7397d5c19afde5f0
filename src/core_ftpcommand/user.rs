use crate::constants::USER_OKAY;
use crate::helpers::send_response;
use crate::session::Session;
use log::info;
use tokio::io::AsyncWrite;

/// Handles the USER FTP command.
///
/// Any username is accepted and nothing is stored: the server does not
/// authenticate, it only walks the client through the login dialogue.
///
/// # Arguments
///
/// * `writer` - The control connection the reply goes to.
/// * `session` - The client session, used to tag the log line.
/// * `username` - The first argument, logged and then forgotten.
pub async fn handle_user_command<W>(
    writer: &mut W,
    session: &Session,
    username: Option<&str>,
) -> Result<(), std::io::Error>
where
    W: AsyncWrite + Unpin,
{
    info!(
        "[{}] USER {}",
        session.peer(),
        username.unwrap_or("<none>")
    );
    send_response(writer, USER_OKAY).await
}
