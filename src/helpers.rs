use log::debug;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Sends a single reply line to the client.
///
/// The CRLF terminator is appended here and the whole line goes out in one
/// write. Any error is fatal to the control connection.
pub async fn send_response<W>(writer: &mut W, message: &str) -> Result<(), std::io::Error>
where
    W: AsyncWrite + Unpin,
{
    let line = format!("{}\r\n", message);
    writer.write_all(line.as_bytes()).await?;
    writer.flush().await?;
    debug!("FTP response: {}", message);
    Ok(())
}

/// Sends a multi-line reply: `<code>-<title>`, each entry indented by one
/// space, then `<code> <footer>`.
pub async fn send_multiline_response<W>(
    writer: &mut W,
    code: u16,
    title: &str,
    entries: &[&str],
    footer: &str,
) -> Result<(), std::io::Error>
where
    W: AsyncWrite + Unpin,
{
    send_response(writer, &format!("{}-{}", code, title)).await?;
    for entry in entries {
        send_response(writer, &format!(" {}", entry)).await?;
    }
    send_response(writer, &format!("{} {}", code, footer)).await
}
