// Failures on the data channel. They abort the current transfer only.
use crate::constants::{CANT_OPEN_DATA_CONNECTION, STORAGE_EXCEEDED, TRANSFER_ABORTED};
use crate::core_network::endpoint::DataEndpoint;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataChannelError {
    #[error("No data endpoint negotiated, PORT or EPRT must come first")]
    NotNegotiated,

    #[error("Negotiated endpoint {0} cannot be dialed")]
    Undialable(DataEndpoint),

    #[error("Failed to connect to {endpoint}: {source}")]
    Connect {
        endpoint: DataEndpoint,
        source: std::io::Error,
    },

    #[error("Timed out after {timeout:?} connecting to {endpoint}")]
    ConnectTimeout {
        endpoint: DataEndpoint,
        timeout: Duration,
    },

    #[error("Failed to read from data connection: {0}")]
    Read(#[source] std::io::Error),

    #[error("Timed out after {0:?} reading from data connection")]
    ReadTimeout(Duration),

    #[error("Upload exceeds the {0} byte limit")]
    PayloadTooLarge(u64),
}

impl DataChannelError {
    pub fn to_ftp_response(&self) -> &'static str {
        match self {
            DataChannelError::NotNegotiated
            | DataChannelError::Undialable(_)
            | DataChannelError::Connect { .. }
            | DataChannelError::ConnectTimeout { .. } => CANT_OPEN_DATA_CONNECTION,
            DataChannelError::Read(_) | DataChannelError::ReadTimeout(_) => TRANSFER_ABORTED,
            DataChannelError::PayloadTooLarge(_) => STORAGE_EXCEEDED,
        }
    }
}
