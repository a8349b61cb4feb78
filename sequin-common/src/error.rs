//! Common error types for sequin

use thiserror::Error;

/// Common result type for sequin operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared by sequin crates
#[derive(Error, Debug)]
pub enum Error {
    /// Config file could not be read (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML document could not be parsed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
