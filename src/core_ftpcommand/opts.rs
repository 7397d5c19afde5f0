use crate::constants::{OK, UTF8_ENABLED};
use crate::helpers::send_response;
use tokio::io::AsyncWrite;

/// Handles the OPTS FTP command.
///
/// `OPTS UTF8` is acknowledged for clients that insist on it; paths are never
/// decoded, so it changes nothing. Other options get a plain 200.
pub async fn handle_opts_command<W>(writer: &mut W, option: Option<&str>) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let response = match option {
        Some(option) if option.eq_ignore_ascii_case("UTF8") => UTF8_ENABLED,
        _ => OK,
    };
    send_response(writer, response).await
}
