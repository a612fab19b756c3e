use std::{
    net::{IpAddr, SocketAddr},
    path::PathBuf,
    time::Duration,
};

use meetup_events_http::DEFAULT_EVENTS_API_URL;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ASSETS_DIR: &str = "assets";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("MEETUP_HTTP_HOST must be an IP address, got '{0}'")]
    InvalidHost(String),

    #[error("MEETUP_HTTP_PORT must be a valid u16, got '{0}'")]
    InvalidPort(String),

    #[error("MEETUP_UPSTREAM_TIMEOUT_SECS must be a positive number of seconds, got '{0}'")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub events_api_url: String,
    pub http_addr: SocketAddr,
    pub assets_dir: PathBuf,
    pub upstream_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = match var("MEETUP_HTTP_HOST") {
            Some(host) => host
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(host))?,
            None => DEFAULT_HOST
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(DEFAULT_HOST.to_string()))?,
        };

        let port = match var("MEETUP_HTTP_PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(port))?,
            None => DEFAULT_PORT,
        };

        let upstream_timeout = match var("MEETUP_UPSTREAM_TIMEOUT_SECS") {
            Some(secs) => match secs.trim().parse::<u64>() {
                Ok(value) if value > 0 => Some(Duration::from_secs(value)),
                _ => return Err(ConfigError::InvalidTimeout(secs)),
            },
            None => None,
        };

        Ok(Self {
            events_api_url: var("MEETUP_EVENTS_API_URL")
                .unwrap_or_else(|| DEFAULT_EVENTS_API_URL.to_string()),
            http_addr: SocketAddr::new(host, port),
            assets_dir: PathBuf::from(
                var("MEETUP_ASSETS_DIR").unwrap_or_else(|| DEFAULT_ASSETS_DIR.to_string()),
            ),
            upstream_timeout,
        })
    }
}
