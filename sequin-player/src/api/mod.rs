//! REST API for the player
//!
//! Paths match the bundled browser client:
//! - `GET /api/next`, `GET /api/toggle`, `GET /api/mode?mode=...`
//! - `GET /api/playlist`, `GET /api/state` for inspection
//! - `GET /` player page, `/static/*` optional file serving

pub mod error;
pub mod handlers;

use axum::{routing::get, Router};
use std::future::Future;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{Error, Result};
use crate::playback::PlaybackController;

pub use error::ApiError;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// The one player instance
    pub controller: Arc<PlaybackController>,
}

impl AppState {
    pub fn new(controller: Arc<PlaybackController>) -> Self {
        Self { controller }
    }
}

/// Create the API router
///
/// When `static_dir` is given its contents are served under `/static`.
pub fn create_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut router = Router::new()
        // Player page
        .route("/", get(handlers::index))

        // Health check
        .route("/health", get(handlers::health))

        // Playback control (GET like the browser client; POST for API users)
        .route("/api/next", get(handlers::next).post(handlers::next))
        .route("/api/toggle", get(handlers::toggle).post(handlers::toggle))
        .route("/api/mode", get(handlers::set_mode).post(handlers::set_mode))

        // Inspection
        .route("/api/playlist", get(handlers::get_playlist))
        .route("/api/state", get(handlers::get_state));

    if let Some(dir) = static_dir {
        info!("Serving static files from {}", dir.display());
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    router
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Enable CORS for local access
        .layer(CorsLayer::permissive())
}

/// Bind `addr` and serve `app` until `shutdown` completes
pub async fn serve<F>(addr: SocketAddr, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::Http(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| Error::Http(format!("Server error: {}", e)))?;

    Ok(())
}
