//! API error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sequin_common::api::ErrorResponse;

/// Errors surfaced by API handlers
#[derive(Debug)]
pub enum ApiError {
    /// `next` called while no tracks are loaded
    EmptyPlaylist,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::EmptyPlaylist => (StatusCode::NOT_FOUND, "No songs available".to_string()),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
