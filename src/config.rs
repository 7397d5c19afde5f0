use crate::constants::{
    DEFAULT_DATA_TIMEOUT_SECS, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_LISTEN_PORT,
    DEFAULT_PAPERLESS_URL,
};
use log::{warn, LevelFilter};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid Paperless-ngx URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_port: u16,
    pub log_level: LevelFilter,
    /// Deadline for dialing the data channel and for reading a whole upload. Zero disables it.
    #[serde(with = "humantime_serde")]
    pub data_timeout: Duration,
    /// Deadline for the next command on an idle control connection. Zero disables it.
    #[serde(with = "humantime_serde")]
    pub idle_timeout: Duration,
    /// Largest accepted STOR payload in bytes. Zero means unlimited.
    pub max_upload_size: u64,
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct PaperlessConfig {
    pub url: String,
    pub token: String,
    #[serde(with = "humantime_serde")]
    pub http_timeout: Duration,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub paperless: PaperlessConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_port: DEFAULT_LISTEN_PORT,
            log_level: LevelFilter::Info,
            data_timeout: Duration::from_secs(DEFAULT_DATA_TIMEOUT_SECS),
            idle_timeout: Duration::ZERO,
            max_upload_size: 0,
        }
    }
}

impl Default for PaperlessConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_PAPERLESS_URL),
            token: String::new(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

// The token never reaches the logs.
impl fmt::Debug for PaperlessConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaperlessConfig")
            .field("url", &self.url)
            .field("token", &"<redacted>")
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

impl ServerConfig {
    pub fn data_deadline(&self) -> Option<Duration> {
        non_zero(self.data_timeout)
    }

    pub fn idle_deadline(&self) -> Option<Duration> {
        non_zero(self.idle_timeout)
    }

    pub fn upload_limit(&self) -> Option<u64> {
        (self.max_upload_size > 0).then_some(self.max_upload_size)
    }
}

fn non_zero(duration: Duration) -> Option<Duration> {
    (!duration.is_zero()).then_some(duration)
}

impl Config {
    /// Builds the runtime configuration: defaults, then the optional TOML file,
    /// then environment variables. The result is validated before it is returned.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        let mut config = match path {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        config.apply_env(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Config, ConfigError> {
        let config_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&config_str).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overrides settings from environment variables. Values that fail to parse
    /// are reported and leave the current setting in place.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = parse_var(&lookup, "FTP_PORT", |v| v.parse::<u16>().ok()) {
            self.server.listen_port = port;
        }
        if let Some(url) = parse_var(&lookup, "PAPERLESS_URL", |v| Some(v.to_string())) {
            self.paperless.url = url;
        }
        if let Some(token) = parse_var(&lookup, "PAPERLESS_TOKEN", |v| Some(v.to_string())) {
            self.paperless.token = token;
        }
        if let Some(timeout) = parse_var(&lookup, "HTTP_TIMEOUT", |v| {
            humantime::parse_duration(v).ok()
        }) {
            self.paperless.http_timeout = timeout;
        }
        if let Some(level) = parse_var(&lookup, "LOG_LEVEL", |v| v.parse::<LevelFilter>().ok()) {
            self.server.log_level = level;
        }
        if let Some(timeout) = parse_var(&lookup, "DATA_TIMEOUT", |v| {
            humantime::parse_duration(v).ok()
        }) {
            self.server.data_timeout = timeout;
        }
        if let Some(timeout) = parse_var(&lookup, "IDLE_TIMEOUT", |v| {
            humantime::parse_duration(v).ok()
        }) {
            self.server.idle_timeout = timeout;
        }
        if let Some(size) = parse_var(&lookup, "MAX_UPLOAD_SIZE", |v| v.parse::<u64>().ok()) {
            self.server.max_upload_size = size;
        }
    }

    /// Checks the Paperless-ngx URL. The token is checked by `PaperlessSink::new`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.paperless.url).map_err(|e| ConfigError::InvalidUrl {
            url: self.paperless.url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: self.paperless.url.clone(),
                reason: format!("unsupported scheme {}", url.scheme()),
            });
        }

        Ok(())
    }
}

fn parse_var<T, F, P>(lookup: &F, name: &str, parse: P) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    P: FnOnce(&str) -> Option<T>,
{
    let value = lookup(name)?;
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let parsed = parse(value);
    if parsed.is_none() {
        warn!("Ignoring invalid value for {}: {:?}", name, value);
    }
    parsed
}
