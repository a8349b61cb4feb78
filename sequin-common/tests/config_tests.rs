//! Unit tests for config file discovery and graceful degradation
//!
//! Tests:
//! - Missing TOML files do not cause errors (defaults are used)
//! - Priority order: CLI argument > environment variable > platform locations
//! - Malformed TOML is reported, not silently ignored
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate SEQUIN_TEST_CONFIG are marked with #[serial].

use serde::Deserialize;
use sequin_common::config::{load_toml, load_toml_or_default, resolve_config_file};
use sequin_common::Error;
use serial_test::serial;
use std::env;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ENV_VAR: &str = "SEQUIN_TEST_CONFIG";

#[derive(Debug, Default, Deserialize, PartialEq)]
struct Sample {
    #[serde(default)]
    port: u16,
    #[serde(default)]
    name: Option<String>,
}

#[test]
#[serial]
fn test_cli_argument_takes_precedence() {
    env::set_var(ENV_VAR, "/tmp/sequin-from-env.toml");

    let cli = PathBuf::from("/tmp/sequin-from-cli.toml");
    let resolved = resolve_config_file(Some(cli.as_path()), ENV_VAR);

    assert_eq!(resolved, Some(cli));

    env::remove_var(ENV_VAR);
}

#[test]
#[serial]
fn test_env_var_used_without_cli_argument() {
    env::set_var(ENV_VAR, "/tmp/sequin-from-env.toml");

    let resolved = resolve_config_file(None, ENV_VAR);
    assert_eq!(resolved, Some(PathBuf::from("/tmp/sequin-from-env.toml")));

    env::remove_var(ENV_VAR);
}

#[test]
#[serial]
fn test_empty_env_var_is_ignored() {
    env::set_var(ENV_VAR, "");

    let resolved = resolve_config_file(None, ENV_VAR);
    assert_ne!(resolved, Some(PathBuf::from("")));

    env::remove_var(ENV_VAR);
}

#[test]
fn test_load_toml_parses_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = 9000\nname = \"demo\"\n").unwrap();

    let sample: Sample = load_toml(&path).unwrap();
    assert_eq!(sample, Sample { port: 9000, name: Some("demo".to_string()) });
}

#[test]
fn test_missing_file_degrades_to_default() {
    let missing = Path::new("/tmp/sequin-definitely-missing-config.toml");

    let sample: Sample = load_toml_or_default(Some(missing)).unwrap();
    assert_eq!(sample, Sample::default());

    let sample: Sample = load_toml_or_default(None).unwrap();
    assert_eq!(sample, Sample::default());
}

#[test]
fn test_malformed_toml_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "port = \"not a number\"\n").unwrap();

    let result: Result<Sample, Error> = load_toml_or_default(Some(path.as_path()));
    assert!(matches!(result, Err(Error::Toml(_))), "got {:?}", result);
}

#[test]
fn test_unreadable_config_is_io_error() {
    // A directory exists but cannot be read as a file
    let dir = TempDir::new().unwrap();

    let result: Result<Sample, Error> = load_toml_or_default(Some(dir.path()));
    assert!(matches!(result, Err(Error::Io(_))), "got {:?}", result);

    let result: Result<Sample, Error> = load_toml(Path::new("/tmp/sequin-missing-for-read.toml"));
    assert!(matches!(result, Err(Error::Io(_))), "got {:?}", result);
}
