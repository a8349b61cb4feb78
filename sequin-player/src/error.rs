//! Error types for sequin-player
//!
//! The sequencing core never fails; these cover startup and serving.

use thiserror::Error;

/// Main error type for sequin-player
#[derive(Error, Debug)]
pub enum Error {
    /// Config file loading errors from the shared helpers
    #[error(transparent)]
    Common(#[from] sequin_common::Error),

    /// HTTP server errors (bind, serve)
    #[error("HTTP server error: {0}")]
    Http(String),
}

/// Convenience Result type using sequin-player Error
pub type Result<T> = std::result::Result<T, Error>;
