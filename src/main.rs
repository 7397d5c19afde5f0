mod config;
mod constants;
mod core_cli;
mod core_ftpcommand;
mod core_log;
mod core_network;
mod core_upload;
mod helpers;
mod server;
mod session;

use crate::config::Config;
use crate::core_cli::Cli;
use anyhow::Result;
use clap::Parser;
use log::{error, LevelFilter};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();

    // The log level lives in the configuration, so load it before the logger
    // exists and report any failure right after.
    let config = Config::load(args.config.as_deref()).map(|mut config| {
        if let Some(port) = args.port {
            config.server.listen_port = port;
        }
        config
    });

    let level = match &config {
        _ if args.verbose => LevelFilter::Debug,
        Ok(config) => config.server.log_level,
        Err(_) => LevelFilter::Info,
    };
    core_log::logger::init(level);

    let result: Result<()> = match config {
        Ok(config) => server::run(config).await,
        Err(e) => Err(e.into()),
    };

    let code = match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to run FTP server: {:#}", e);
            ExitCode::FAILURE
        }
    };
    core_log::logger::flush();
    code
}
