//! sequin player - Main entry point
//!
//! Loads configuration, builds the single playback controller, loads the
//! startup playlist and serves the HTTP API until Ctrl+C / SIGTERM.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter};

use sequin_player::api::{self, AppState};
use sequin_player::config::{log_filter, Config, Overrides};
use sequin_player::PlaybackController;

/// Command-line arguments for sequin-player
#[derive(Parser, Debug)]
#[command(name = "sequin-player")]
#[command(about = "Playback sequencing service")]
#[command(version)]
struct Args {
    /// Port to listen on (overrides config file)
    #[arg(short, long, env = "SEQUIN_PORT")]
    port: Option<u16>,

    /// TOML configuration file
    #[arg(short, long, env = "SEQUIN_CONFIG")]
    config: Option<PathBuf>,

    /// Folder served under /static (overrides config file)
    #[arg(short, long, env = "SEQUIN_STATIC_DIR")]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing before anything logs. RUST_LOG wins; otherwise start
    // at the default level and switch to the config file's level once loaded.
    let env_filter = EnvFilter::try_from_default_env().ok();
    let from_env = env_filter.is_some();
    let (filter, filter_handle) = reload::Layer::new(
        env_filter.unwrap_or_else(|| EnvFilter::new(log_filter("info"))),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = Config::load(Overrides {
        config_file: args.config,
        port: args.port,
        static_dir: args.static_dir,
    })
    .context("Failed to load configuration")?;

    if !from_env {
        filter_handle
            .reload(EnvFilter::new(config.log_filter()))
            .context("Failed to apply configured log level")?;
    }

    info!("Starting sequin player v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize playback controller and load the startup playlist
    let controller = Arc::new(PlaybackController::new());
    controller.replace_playlist(config.playlist.clone()).await;
    info!("Playback controller initialized");

    let app = api::create_router(AppState::new(controller), config.static_dir());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    api::serve(addr, app, shutdown_signal()).await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
