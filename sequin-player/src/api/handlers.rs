//! HTTP request handlers
//!
//! Each handler is one controller call plus a typed JSON response.

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use sequin_common::api::{
    HealthResponse, ModeResponse, PlayerSnapshot, PlaylistResponse, StatusResponse,
};
use sequin_common::{PlayState, Track};
use tracing::{debug, info};

use super::{ApiError, AppState};

// ============================================================================
// Page + Health
// ============================================================================

/// GET / - Player page
///
/// Static markup; the page loads the playlist from `/api/playlist`.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("player_ui.html"))
}

/// GET /health - Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "sequin-player".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Playback Control
// ============================================================================

/// GET /api/next - Advance to the next track
///
/// 404 when the playlist is empty.
pub async fn next(State(state): State<AppState>) -> Result<Json<Track>, ApiError> {
    match state.controller.advance().await {
        Some(track) => Ok(Json(track)),
        None => {
            debug!("Next requested with empty playlist");
            Err(ApiError::EmptyPlaylist)
        }
    }
}

/// GET /api/toggle - Flip play/pause
pub async fn toggle(State(state): State<AppState>) -> Json<StatusResponse> {
    let playing = state.controller.toggle_playing().await;
    Json(StatusResponse {
        status: PlayState::from(playing),
    })
}

/// GET /api/mode?mode=<mode> - Set playback mode
///
/// Any string is accepted and echoed back unchanged. A missing parameter is
/// the empty string; when `mode` is repeated the first value is used.
pub async fn set_mode(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<ModeResponse> {
    let requested = params
        .into_iter()
        .find(|(key, _)| key == "mode")
        .map(|(_, value)| value)
        .unwrap_or_default();

    let mode = state.controller.set_mode(&requested).await;
    info!("Playback mode request: '{}'", mode);
    Json(ModeResponse { mode: requested })
}

// ============================================================================
// Inspection
// ============================================================================

/// GET /api/playlist - Loaded tracks in order
pub async fn get_playlist(State(state): State<AppState>) -> Json<PlaylistResponse> {
    Json(PlaylistResponse {
        songs: state.controller.playlist().await,
    })
}

/// GET /api/state - Current index, mode, play state and shuffle bag size
pub async fn get_state(State(state): State<AppState>) -> Json<PlayerSnapshot> {
    Json(state.controller.snapshot().await)
}
