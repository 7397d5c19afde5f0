// Errors raised while interpreting a command line. None of them end the session.
use crate::constants::{NOT_IMPLEMENTED, PROTOCOL_NOT_SUPPORTED, SYNTAX_ERROR};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("{0} requires an argument")]
    MissingArgument(&'static str),

    #[error("Malformed address argument: {0:?}")]
    MalformedAddress(String),

    #[error("Network protocol {0:?} not supported")]
    UnsupportedProtocol(String),

    #[error("Unrecognized command {0:?}")]
    Unrecognized(String),
}

impl CommandError {
    pub fn to_ftp_response(&self) -> &'static str {
        match self {
            CommandError::MissingArgument(_) | CommandError::MalformedAddress(_) => SYNTAX_ERROR,
            CommandError::UnsupportedProtocol(_) => PROTOCOL_NOT_SUPPORTED,
            CommandError::Unrecognized(_) => NOT_IMPLEMENTED,
        }
    }
}
