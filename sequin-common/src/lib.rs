//! # Sequin Common Library
//!
//! Shared code for the sequin player service and its clients:
//! - Track model and playback mode/state types
//! - API response records
//! - Configuration file discovery and TOML loading
//! - Common error type

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod playback;

pub use error::{Error, Result};
pub use models::Track;
pub use playback::{PlayState, PlaybackMode};
