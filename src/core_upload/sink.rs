use crate::core_upload::error::UploadError;
use async_trait::async_trait;

/// Destination for completed uploads.
///
/// One instance is shared by every session, so implementations must tolerate
/// concurrent calls. Callers never retry a failed upload.
#[async_trait]
pub trait UploadSink: Send + Sync {
    async fn upload(&self, filename: &str, payload: Vec<u8>) -> Result<(), UploadError>;
}
