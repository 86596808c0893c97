use std::net::AddrParseError;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Invalid BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
    #[error("Dist directory not found: {} (run `trunk build` in frontend/ first)", .0.display())]
    MissingDist(PathBuf),
}
