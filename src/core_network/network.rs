use crate::constants::{ACCEPT_BACKOFF_MILLIS, GREETING, MAX_COMMAND_LINE_LENGTH};
use crate::core_ftpcommand::ftpcommand::Command;
use crate::core_ftpcommand::handlers::handle_command;
use crate::helpers::send_response;
use crate::server::ServerContext;
use crate::session::Session;
use log::{debug, info, warn};
use std::io::{Error, ErrorKind};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;

pub async fn bind(listen_port: u16) -> Result<TcpListener, Error> {
    let listener = TcpListener::bind(("0.0.0.0", listen_port)).await?;
    info!("Server listening on {}", listener.local_addr()?);
    Ok(listener)
}

/// Accepts control connections forever, one task per connection.
///
/// A failed accept is logged and the loop carries on after a short pause.
pub async fn serve(listener: TcpListener, ctx: Arc<ServerContext>) {
    loop {
        let (socket, addr) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("Failed to accept connection: {}", e);
                tokio::time::sleep(Duration::from_millis(ACCEPT_BACKOFF_MILLIS)).await;
                continue;
            }
        };
        info!("New connection from {}", addr);

        let ctx = Arc::clone(&ctx);
        tokio::spawn(async move {
            if let Err(e) = handle_connection(socket, addr, ctx).await {
                warn!("[{}] Connection error: {}", addr, e);
            }
            info!("Connection closed for {}", addr);
        });
    }
}

pub async fn handle_connection(
    socket: TcpStream,
    peer: SocketAddr,
    ctx: Arc<ServerContext>,
) -> Result<(), Error> {
    let (reader, mut writer) = socket.into_split();
    let mut reader = BufReader::new(reader);

    let result = run_session(&mut reader, &mut writer, peer, &ctx).await;
    // The peer may already be gone, a failed shutdown changes nothing.
    let _ = writer.shutdown().await;
    result
}

/// Drives one session from greeting to close.
///
/// Commands are handled strictly one after another: the next line is only
/// read once the previous reply has been written.
pub async fn run_session<R, W>(
    reader: &mut R,
    writer: &mut W,
    peer: SocketAddr,
    ctx: &ServerContext,
) -> Result<(), Error>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut session = Session::new(peer);
    send_response(writer, GREETING).await?;
    session.mark_ready();

    while !session.is_closed() {
        let line = match read_command_line(reader, ctx.config.server.idle_deadline()).await {
            Ok(Some(line)) => line,
            Ok(None) => {
                info!("[{}] Client disconnected", peer);
                break;
            }
            Err(e) => {
                session.close();
                return Err(e);
            }
        };

        let Some(command) = Command::parse(&line) else {
            continue;
        };
        if command.verb() == "PASS" {
            debug!("[{}] FTP command: PASS ****", peer);
        } else {
            debug!("[{}] FTP command: {}", peer, line);
        }

        if let Err(e) = handle_command(writer, ctx, &mut session, &command).await {
            session.close();
            return Err(e);
        }
    }

    session.close();
    debug!("[{}] Session {:?}", peer, session.state());
    Ok(())
}

/// Reads one control line and strips the terminator.
///
/// `Ok(None)` means the peer closed the connection, possibly mid-line. A line
/// longer than the limit or an idle deadline expiring is an error.
pub async fn read_command_line<R>(
    reader: &mut R,
    idle_deadline: Option<Duration>,
) -> Result<Option<String>, Error>
where
    R: AsyncBufRead + Unpin,
{
    let mut buffer = Vec::new();
    let read = async {
        let mut limited = (&mut *reader).take(MAX_COMMAND_LINE_LENGTH);
        limited.read_until(b'\n', &mut buffer).await
    };

    let n = match idle_deadline {
        Some(limit) => timeout(limit, read)
            .await
            .map_err(|_| Error::new(ErrorKind::TimedOut, "idle timeout"))??,
        None => read.await?,
    };

    if n == 0 {
        return Ok(None);
    }
    if buffer.last() != Some(&b'\n') {
        if n as u64 >= MAX_COMMAND_LINE_LENGTH {
            return Err(Error::new(ErrorKind::InvalidData, "command line too long"));
        }
        return Ok(None);
    }

    Ok(Some(String::from_utf8_lossy(&buffer).trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core_upload::sink::testing::RecordingSink;
    use tokio::io::Lines;
    use tokio::net::tcp::OwnedReadHalf;

    async fn start(config: Config) -> (SocketAddr, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let ctx = Arc::new(ServerContext::new(config, sink.clone()));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(serve(listener, ctx));
        (addr, sink)
    }

    struct Client {
        lines: Lines<BufReader<OwnedReadHalf>>,
        writer: tokio::net::tcp::OwnedWriteHalf,
    }

    impl Client {
        async fn connect(addr: SocketAddr) -> Self {
            let (reader, writer) = TcpStream::connect(addr).await.unwrap().into_split();
            let mut client = Self {
                lines: BufReader::new(reader).lines(),
                writer,
            };
            assert_eq!(client.reply().await, "220 Simple FTP Server Ready");
            client
        }

        async fn send(&mut self, line: &str) {
            self.writer
                .write_all(format!("{}\r\n", line).as_bytes())
                .await
                .unwrap();
        }

        async fn reply(&mut self) -> String {
            self.lines.next_line().await.unwrap().unwrap()
        }

        async fn code(&mut self, line: &str) -> String {
            self.send(line).await;
            self.reply().await[..3].to_string()
        }
    }

    #[tokio::test]
    async fn test_read_command_line() {
        let mut input: &[u8] = b"USER scanner\r\nNOOP\r\n\r\nPARTIAL";
        assert_eq!(
            read_command_line(&mut input, None).await.unwrap().as_deref(),
            Some("USER scanner")
        );
        assert_eq!(
            read_command_line(&mut input, None).await.unwrap().as_deref(),
            Some("NOOP")
        );
        assert_eq!(
            read_command_line(&mut input, None).await.unwrap().as_deref(),
            Some("")
        );
        assert_eq!(read_command_line(&mut input, None).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_read_command_line_too_long() {
        let long = vec![b'A'; MAX_COMMAND_LINE_LENGTH as usize + 10];
        let mut input: &[u8] = &long;
        let err = read_command_line(&mut input, None).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[tokio::test]
    async fn test_read_command_line_idle_timeout() {
        let (_client, server) = tokio::io::duplex(64);
        let mut reader = BufReader::new(server);
        let err = read_command_line(&mut reader, Some(Duration::from_millis(50)))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TimedOut);
    }

    #[tokio::test]
    async fn test_scanner_upload_scenario() {
        let (addr, sink) = start(Config::default()).await;

        let data_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let data_port = data_listener.local_addr().unwrap().port();
        let data_peer = tokio::spawn(async move {
            let (mut socket, _) = data_listener.accept().await.unwrap();
            socket.write_all(b"%PDF-1.4...").await.unwrap();
        });

        let mut client = Client::connect(addr).await;
        assert_eq!(client.code("USER a").await, "331");
        assert_eq!(client.code("PASS b").await, "230");
        let port = format!("PORT 127,0,0,1,{},{}", data_port / 256, data_port % 256);
        assert_eq!(client.code(&port).await, "200");
        client.send("STOR scan.pdf").await;
        assert_eq!(client.reply().await, "150 Opening data connection");
        assert_eq!(client.reply().await, "226 Transfer complete");
        data_peer.await.unwrap();

        assert_eq!(
            sink.uploads(),
            vec![("scan.pdf".to_string(), b"%PDF-1.4...".to_vec())]
        );
    }

    #[tokio::test]
    async fn test_blank_lines_are_ignored() {
        let (addr, _sink) = start(Config::default()).await;
        let mut client = Client::connect(addr).await;

        client.writer.write_all(b"\r\n   \r\nNOOP\r\n").await.unwrap();
        assert_eq!(client.reply().await, "200 OK");
    }

    #[tokio::test]
    async fn test_quit_closes_connection() {
        let (addr, _sink) = start(Config::default()).await;
        let mut client = Client::connect(addr).await;

        client.send("QUIT").await;
        assert_eq!(client.reply().await, "221 Goodbye");
        assert_eq!(client.lines.next_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let (addr, _sink) = start(Config::default()).await;
        let mut first = Client::connect(addr).await;
        let mut second = Client::connect(addr).await;

        first.send("CWD /first").await;
        first.reply().await;
        second.send("CWD /second").await;
        second.reply().await;

        first.send("PWD").await;
        assert_eq!(first.reply().await, "257 \"/first\" is current directory");
        second.send("PWD").await;
        assert_eq!(second.reply().await, "257 \"/second\" is current directory");

        // Closing one session leaves the other one alone.
        first.send("QUIT").await;
        first.reply().await;
        assert_eq!(second.code("NOOP").await, "200");
    }

    #[tokio::test]
    async fn test_idle_session_is_dropped() {
        let mut config = Config::default();
        config.server.idle_timeout = Duration::from_millis(100);
        let (addr, _sink) = start(config).await;

        let mut client = Client::connect(addr).await;
        assert_eq!(client.lines.next_line().await.unwrap(), None);
    }
}
