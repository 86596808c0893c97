use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::error::ConfigError;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DIST_DIR: &str = "../frontend/dist";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Trunk output directory holding `index.html` and the hashed bundle.
    pub dist_dir: PathBuf,
    pub sentry_dsn: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };
        let bind_addr = match get("BIND_ADDR") {
            Some(value) => value
                .trim()
                .parse::<IpAddr>()
                .map_err(|source| ConfigError::InvalidBindAddr { value, source })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let dist_dir = PathBuf::from(get("DIST_DIR").unwrap_or_else(|| DEFAULT_DIST_DIR.to_string()));
        if !dist_dir.is_dir() {
            return Err(ConfigError::MissingDist(dist_dir));
        }

        Ok(Self {
            bind_addr,
            port,
            dist_dir,
            sentry_dsn: get("SENTRY_DSN"),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
