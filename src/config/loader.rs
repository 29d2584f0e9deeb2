// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::RunnerOptions;
use crate::errors::{Result, RunnerError};

/// Load runner options from a TOML file at `path`.
///
/// This only performs TOML deserialization; use [`load_and_validate`] to
/// also run the sanity checks.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RunnerOptions> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let options: RunnerOptions = toml::from_str(&contents)?;

    Ok(options)
}

/// Load runner options from path and validate them.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks that `max_buffer` is positive.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<RunnerOptions> {
    let options = load_from_path(&path)?;
    validate(&options)?;
    Ok(options)
}

/// Sanity checks on assembled options, wherever they came from.
pub fn validate(options: &RunnerOptions) -> Result<()> {
    if options.max_buffer == 0 {
        return Err(RunnerError::ConfigError(
            "max_buffer must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

/// Load and validate options from `path` if the file exists; otherwise
/// fall back to built-in defaults.
///
/// Used for the optional project-local `Msbuild.toml`: its absence is not
/// an error, but a present-yet-broken file still fails loudly.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<RunnerOptions> {
    if path.as_ref().is_file() {
        load_and_validate(path)
    } else {
        Ok(RunnerOptions::default())
    }
}

/// Helper to resolve a default config path.
///
/// Currently this just returns `Msbuild.toml` in the current working
/// directory; it exists so a later version can respect an env var or probe
/// multiple locations.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Msbuild.toml")
}
