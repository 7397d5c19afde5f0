pub mod data;
pub mod endpoint;
pub mod error;
pub mod network;
pub mod port;
