use crate::helpers::send_response;
use crate::session::Session;
use tokio::io::AsyncWrite;

pub async fn handle_pwd_command<W>(writer: &mut W, session: &Session) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let response = format!("257 \"{}\" is current directory", session.current_dir());
    send_response(writer, &response).await
}
