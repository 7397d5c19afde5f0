use crate::constants::DIRECTORY_CHANGED;
use crate::helpers::send_response;
use crate::session::Session;
use log::debug;
use tokio::io::AsyncWrite;

/// Handles the CWD FTP command.
///
/// The path is stored verbatim for PWD and never checked against a
/// filesystem. Without an argument the directory stays as it is; both cases
/// answer 250.
///
/// # Arguments
///
/// * `writer` - The control connection the reply goes to.
/// * `session` - The client session holding the working directory.
/// * `path` - Everything after the verb, inner spaces kept.
///
/// # Returns
///
/// Result<(), std::io::Error> indicating the success or failure of the operation.
pub async fn handle_cwd_command<W>(
    writer: &mut W,
    session: &mut Session,
    path: Option<String>,
) -> Result<(), std::io::Error>
where
    W: AsyncWrite + Unpin,
{
    if let Some(path) = path {
        debug!("[{}] Working directory set to {}", session.peer(), path);
        session.set_current_dir(path);
    }
    send_response(writer, DIRECTORY_CHANGED).await
}
