use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    name = "scandropd",
    about = "An FTP drop box that relays scanned documents to Paperless-ngx."
)]
pub struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Listen port, overrides FTP_PORT and the configuration file
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Enable verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}
