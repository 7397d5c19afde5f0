use crate::config::Config;
use crate::core_network::network;
use crate::core_upload::{PaperlessSink, UploadSink};
use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

/// Everything a session needs from the process. Read-only once built.
pub struct ServerContext {
    pub config: Config,
    pub sink: Arc<dyn UploadSink>,
}

impl ServerContext {
    pub fn new(config: Config, sink: Arc<dyn UploadSink>) -> Self {
        Self { config, sink }
    }
}

/// Runs the FTP server until Ctrl-C.
///
/// Building the uploader and binding the port are the only failures that
/// reach the caller; anything after that is handled per connection.
///
/// # Arguments
///
/// * `config` - The loaded and validated configuration.
///
/// # Returns
///
/// `Ok` once a shutdown signal has been received, or the startup error with
/// its context.
pub async fn run(config: Config) -> Result<()> {
    let sink = PaperlessSink::new(&config.paperless)
        .context("Failed to create Paperless-ngx uploader")?;
    let listener = network::bind(config.server.listen_port)
        .await
        .with_context(|| format!("Failed to bind port {}", config.server.listen_port))?;

    info!(
        "Starting FTP server: port={} paperless_url={} log_level={} auth=disabled",
        config.server.listen_port,
        sink.endpoint(),
        config.server.log_level
    );
    if config.server.upload_limit().is_none() {
        info!("No upload size limit configured, uploads are buffered in memory without bound");
    }

    let ctx = Arc::new(ServerContext::new(config, Arc::new(sink)));

    tokio::select! {
        _ = network::serve(listener, ctx) => {}
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for shutdown signal")?;
            info!("Shutdown requested, stopping FTP server");
        }
    }

    Ok(())
}
