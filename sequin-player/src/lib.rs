//! # Sequin Player Library (sequin-player)
//!
//! Playback sequencing service.
//!
//! **Purpose:** Hold the loaded playlist, decide which track plays next
//! (sequential, shuffle-bag random, repeat-one), track play/pause, and expose
//! all of it over a small HTTP API.
//!
//! **Architecture:** one lock-guarded [`PlaybackController`] shared by every
//! axum handler; no background tasks.

pub mod api;
pub mod config;
pub mod error;
pub mod playback;

pub use error::{Error, Result};
pub use playback::PlaybackController;
