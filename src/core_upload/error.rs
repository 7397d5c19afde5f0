// Errors reported by an upload sink.
use crate::constants::UPLOAD_FAILED;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Uploader is misconfigured: {0}")]
    Configuration(String),

    #[error("Failed to send request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Paperless API returned status {status}: {body}")]
    Rejected { status: u16, body: String },
}

impl UploadError {
    pub fn to_ftp_response(&self) -> &'static str {
        UPLOAD_FAILED
    }
}
