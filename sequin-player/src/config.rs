//! Configuration management for sequin-player
//!
//! # Settings Sources Priority
//!
//! 1. Command-line arguments (--port, --static-dir)
//! 2. Environment variables (SEQUIN_PORT, SEQUIN_STATIC_DIR, SEQUIN_CONFIG)
//! 3. TOML configuration file
//! 4. Built-in defaults (code constants)
//!
//! Arguments and environment are merged by clap in `main.rs`; this module
//! loads the TOML file and applies the overrides on top of it.

use serde::Deserialize;
use sequin_common::config::{load_toml_or_default, resolve_config_file};
use sequin_common::models::demo_playlist;
use sequin_common::Track;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::Result;

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "SEQUIN_CONFIG";

/// Bootstrap configuration loaded from TOML file
///
/// Read once at startup; changes need a restart.
#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Folder served under `/static` (audio files, assets)
    #[serde(default)]
    pub static_dir: Option<PathBuf>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Playlist loaded at startup; the demo playlist when empty
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            static_dir: None,
            logging: LoggingConfig::default(),
            tracks: Vec::new(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error) or a full filter directive
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Command-line / environment overrides
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_file: Option<PathBuf>,
    pub port: Option<u16>,
    pub static_dir: Option<PathBuf>,
}

/// Fully resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub static_dir: Option<PathBuf>,
    pub log_level: String,
    pub playlist: Vec<Track>,
    /// Config file that was read, if any
    pub source: Option<PathBuf>,
    /// Config file that was requested or discovered but does not exist
    pub missing_source: Option<PathBuf>,
}

impl Config {
    /// Locate and read the TOML file, then apply overrides
    pub fn load(overrides: Overrides) -> Result<Self> {
        let requested = resolve_config_file(overrides.config_file.as_deref(), CONFIG_ENV_VAR);
        let toml_config: TomlConfig = load_toml_or_default(requested.as_deref())?;

        let (source, missing_source) = match requested {
            Some(path) if path.exists() => (Some(path), None),
            Some(path) => (None, Some(path)),
            None => (None, None),
        };

        let mut config = Self::resolve(toml_config, overrides, source);
        config.missing_source = missing_source;
        Ok(config)
    }

    /// Merge a parsed TOML config with overrides
    pub fn resolve(toml_config: TomlConfig, overrides: Overrides, source: Option<PathBuf>) -> Self {
        let playlist = if toml_config.tracks.is_empty() {
            demo_playlist()
        } else {
            toml_config.tracks
        };

        Self {
            port: overrides.port.unwrap_or(toml_config.port),
            static_dir: overrides.static_dir.or(toml_config.static_dir),
            log_level: toml_config.logging.level,
            playlist,
            source,
            missing_source: None,
        }
    }

    /// Default tracing filter directive for the configured level
    pub fn log_filter(&self) -> String {
        log_filter(&self.log_level)
    }

    /// Log where each setting came from
    pub fn log_summary(&self) {
        match (&self.source, &self.missing_source) {
            (Some(path), _) => info!("Configuration file: {}", path.display()),
            (None, Some(path)) => warn!(
                "Config file {} not found, using built-in defaults",
                path.display()
            ),
            (None, None) => info!("No configuration file, using built-in defaults"),
        }
        info!("Port: {}", self.port);
        if let Some(dir) = &self.static_dir {
            info!("Static folder: {}", dir.display());
        }
        info!("Startup playlist: {} tracks", self.playlist.len());
    }

    pub fn static_dir(&self) -> Option<&Path> {
        self.static_dir.as_deref()
    }
}

/// Filter directive for a bare level such as "debug"; full directives pass through
pub fn log_filter(level: &str) -> String {
    if level.contains('=') || level.contains(',') {
        level.to_string()
    } else {
        format!(
            "sequin_player={level},sequin_common={level},tower_http={level}",
            level = level
        )
    }
}
