use crate::constants::{EPRT_SUCCESSFUL, PORT_SUCCESSFUL};
use crate::core_ftpcommand::error::CommandError;
use crate::core_network::endpoint::{parse_eprt_argument, parse_port_argument, DataEndpoint};
use crate::helpers::send_response;
use crate::session::Session;
use log::{info, warn};
use tokio::io::AsyncWrite;

/// Handles the PORT (Active Mode) FTP command.
///
/// Only records where to connect; the connection itself is opened by the
/// next LIST or STOR. Port 0 is recorded like any other port.
///
/// # Arguments
///
/// * `writer` - The control connection the reply goes to.
/// * `session` - The client session whose data endpoint is replaced.
/// * `arg` - The `h1,h2,h3,h4,p1,p2` argument, if any.
///
/// # Returns
///
/// Result<(), std::io::Error> indicating whether the reply could be written.
pub async fn handle_port_command<W>(
    writer: &mut W,
    session: &mut Session,
    arg: Option<&str>,
) -> Result<(), std::io::Error>
where
    W: AsyncWrite + Unpin,
{
    let result = arg
        .ok_or(CommandError::MissingArgument("PORT"))
        .and_then(parse_port_argument);
    negotiate(writer, session, result, PORT_SUCCESSFUL).await
}

/// Handles the EPRT (Extended Port) FTP command, `EPRT |proto|addr|port|`.
///
/// # Arguments
///
/// * `writer` - The control connection the reply goes to.
/// * `session` - The client session whose data endpoint is replaced.
/// * `arg` - Everything after the verb, if anything was sent.
pub async fn handle_eprt_command<W>(
    writer: &mut W,
    session: &mut Session,
    arg: Option<String>,
) -> Result<(), std::io::Error>
where
    W: AsyncWrite + Unpin,
{
    let result = arg
        .ok_or(CommandError::MissingArgument("EPRT"))
        .and_then(|arg| parse_eprt_argument(&arg));
    negotiate(writer, session, result, EPRT_SUCCESSFUL).await
}

// A rejected argument leaves the previous endpoint in place.
async fn negotiate<W>(
    writer: &mut W,
    session: &mut Session,
    result: Result<DataEndpoint, CommandError>,
    success: &str,
) -> Result<(), std::io::Error>
where
    W: AsyncWrite + Unpin,
{
    match result {
        Ok(endpoint) => {
            info!("[{}] Data endpoint set to {}", session.peer(), endpoint);
            session.set_data_endpoint(endpoint);
            send_response(writer, success).await
        }
        Err(e) => {
            warn!("[{}] {}", session.peer(), e);
            send_response(writer, e.to_ftp_response()).await
        }
    }
}
