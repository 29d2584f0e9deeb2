// src/config/mod.rs

//! Runner configuration: the [`RunnerOptions`] model and TOML loading.

pub mod loader;
pub mod model;

pub use loader::{
    default_config_path, load_and_validate, load_from_path, load_or_default, validate,
};
pub use model::RunnerOptions;
