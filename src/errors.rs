// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to launch build process: {0}")]
    LaunchError(String),

    #[error("Build process exited with code {0}")]
    NonZeroExit(i32),

    #[error("Build output exceeded the maximum buffer size ({0} bytes)")]
    OutputOverflow(usize),

    #[error("Build wrote diagnostics to stderr:\n{0}")]
    StderrOutput(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, RunnerError>;
