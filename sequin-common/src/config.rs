//! Configuration file discovery and TOML loading
//!
//! Config file resolution priority:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. User config directory (`~/.config/sequin/config.toml` on Linux)
//! 4. System config (`/etc/sequin/config.toml`, Linux only)
//!
//! A missing config file is not an error: callers fall back to built-in
//! defaults.

use crate::Result;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Directory name used under the platform config dir
pub const APP_DIR_NAME: &str = "sequin";

/// Locate the config file to load, if any.
///
/// An explicit path (CLI or environment) is returned even when it does not
/// exist so that the caller can report it; discovered paths are only returned
/// when present on disk.
pub fn resolve_config_file(cli_arg: Option<&Path>, env_var_name: &str) -> Option<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    // Priority 3/4: platform locations
    default_config_candidates()
        .into_iter()
        .find(|candidate| candidate.exists())
}

/// Platform config file locations, most specific first
pub fn default_config_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join(APP_DIR_NAME).join("config.toml"));
    }

    if cfg!(target_os = "linux") {
        candidates.push(PathBuf::from("/etc").join(APP_DIR_NAME).join("config.toml"));
    }

    candidates
}

/// Parse a TOML file into `T`
pub fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    let parsed = toml::from_str(&content)?;
    debug!("Loaded configuration from {}", path.display());
    Ok(parsed)
}

/// Parse a TOML file into `T`, or `T::default()` when the file is absent.
///
/// Parse errors are still reported; only a missing file degrades to defaults.
pub fn load_toml_or_default<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T> {
    match path {
        Some(path) if path.exists() => load_toml(path),
        Some(path) => {
            warn!("Config file {} not found, using defaults", path.display());
            Ok(T::default())
        }
        None => {
            debug!("No config file found, using defaults");
            Ok(T::default())
        }
    }
}
