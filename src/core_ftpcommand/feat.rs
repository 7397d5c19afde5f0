use crate::constants::FEATURES;
use crate::helpers::send_multiline_response;
use tokio::io::AsyncWrite;

/// Handles the FEAT (Feature) FTP command.
///
/// Responds with the list of supported features.
pub async fn handle_feat_command<W>(writer: &mut W) -> Result<(), std::io::Error>
where
    W: AsyncWrite + Unpin,
{
    send_multiline_response(writer, 211, "Features:", FEATURES, "End").await
}
