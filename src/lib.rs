// src/lib.rs

pub mod cli;
pub mod command;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod report;

use tracing::debug;

use crate::cli::{CliArgs, CliCommandBuilder};
use crate::command::CommandBuilder;
use crate::errors::Result;
use crate::exec::{ProcessRunner, TokioLauncher};
use crate::report::TracingLog;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - options (TOML file, then CLI flag overrides)
/// - command construction
/// - the process runner with the production launcher and log sink
pub async fn run(args: CliArgs) -> Result<()> {
    let mut options = match &args.config {
        Some(path) => config::load_and_validate(path)?,
        None => config::load_or_default(config::default_config_path())?,
    };
    args.apply_to(&mut options);
    config::validate(&options)?;

    debug!(?options, "resolved runner options");

    let builder = CliCommandBuilder::new(args.executable.clone(), args.args.clone());
    let file = args.file.clone().unwrap_or_default();
    let command = builder.construct(&file, &options)?;

    let runner = ProcessRunner::new(options, TokioLauncher, TracingLog);
    runner.run(&command).await
}
