use crate::constants::NOT_IMPLEMENTED;
use crate::core_ftpcommand::ftpcommand::{Command, FtpCommand};
use crate::core_ftpcommand::{
    cwd, dele, feat, list, noop, opts, pass, pwd, quit, retr, stor, syst, type_, user,
};
use crate::core_network::port;
use crate::helpers::send_response;
use crate::server::ServerContext;
use crate::session::Session;
use log::{debug, warn};
use tokio::io::AsyncWrite;

/// Dispatches one parsed command and writes its full reply.
///
/// Every verb is valid in every `Ready` session; USER and PASS gate nothing.
/// Command-level failures are answered here and never escape. An `Err` means
/// the control connection itself failed and the session has to end.
pub async fn handle_command<W>(
    writer: &mut W,
    ctx: &ServerContext,
    session: &mut Session,
    command: &Command,
) -> Result<(), std::io::Error>
where
    W: AsyncWrite + Unpin,
{
    let first_arg = command.args().first().map(String::as_str);
    let argument = command.argument().map(str::to_string);

    let kind = match command.kind() {
        Ok(kind) => kind,
        Err(e) => {
            debug!("[{}] {}", session.peer(), e);
            return send_response(writer, e.to_ftp_response()).await;
        }
    };

    match kind {
        FtpCommand::USER => user::handle_user_command(writer, session, first_arg).await,
        FtpCommand::PASS => pass::handle_pass_command(writer).await,
        FtpCommand::SYST => syst::handle_syst_command(writer).await,
        FtpCommand::TYPE => type_::handle_type_command(writer, first_arg).await,
        FtpCommand::PWD => pwd::handle_pwd_command(writer, session).await,
        FtpCommand::CWD => cwd::handle_cwd_command(writer, session, argument).await,
        FtpCommand::PASV => {
            warn!("[{}] PASV requested, only active mode is supported", session.peer());
            send_response(writer, NOT_IMPLEMENTED).await
        }
        FtpCommand::LIST => list::handle_list_command(writer, ctx, session).await,
        FtpCommand::STOR => {
            stor::handle_stor_command(writer, ctx, session, argument).await
        }
        FtpCommand::RETR => retr::handle_retr_command(writer).await,
        FtpCommand::DELE => dele::handle_dele_command(writer).await,
        FtpCommand::QUIT => quit::handle_quit_command(writer, session).await,
        FtpCommand::NOOP => noop::handle_noop_command(writer).await,
        FtpCommand::FEAT => feat::handle_feat_command(writer).await,
        FtpCommand::OPTS => opts::handle_opts_command(writer, first_arg).await,
        FtpCommand::PORT => port::handle_port_command(writer, session, first_arg).await,
        FtpCommand::EPRT => port::handle_eprt_command(writer, session, argument).await,
    }
}
