//! Shared API request/response types

use serde::{Deserialize, Serialize};

use crate::models::Track;
use crate::playback::{PlayState, PlaybackMode};

// ========================================
// Responses
// ========================================

/// Play/pause toggle result: `{"status":"playing"}` or `{"status":"paused"}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StatusResponse {
    pub status: PlayState,
}

/// Echo of the mode string the caller supplied
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModeResponse {
    pub mode: String,
}

/// Loaded playlist in canonical order
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlaylistResponse {
    pub songs: Vec<Track>,
}

/// Consistent view of the whole player, taken under one lock acquisition
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlayerSnapshot {
    /// Index of the current track (0 when the playlist is empty)
    pub current_index: usize,
    /// Current track, absent when the playlist is empty
    pub current: Option<Track>,
    pub mode: PlaybackMode,
    pub state: PlayState,
    pub track_count: usize,
    /// Indices left in the shuffle bag, absent when no bag has been drawn
    pub shuffle_remaining: Option<usize>,
}

/// Health check response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

/// Error body for non-2xx responses
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
