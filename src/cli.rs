// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::command::{BuildCommand, CommandBuilder};
use crate::config::RunnerOptions;
use crate::errors::Result;

/// Command-line arguments for `msbuild-runner`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "msbuild-runner",
    version,
    about = "Run an MSBuild invocation and relay its output and status.",
    long_about = None
)]
pub struct CliArgs {
    /// Project or solution file to build. Omitted from the command line
    /// when not given.
    #[arg(value_name = "FILE")]
    pub file: Option<String>,

    /// Build tool executable to launch.
    #[arg(long, value_name = "PATH", default_value = "msbuild")]
    pub executable: String,

    /// Extra arguments passed to the build tool verbatim, after `--`.
    #[arg(last = true, value_name = "ARGS")]
    pub args: Vec<String>,

    /// Path to an options file (TOML). When omitted, built-in defaults
    /// apply.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Do not relay the child's standard output.
    #[arg(long)]
    pub no_stdout: bool,

    /// Do not relay the child's standard error.
    #[arg(long)]
    pub no_stderr: bool,

    /// Print the assembled command line before launching.
    #[arg(long)]
    pub log_command: bool,

    /// Exit non-zero when the build fails instead of swallowing the
    /// failure.
    #[arg(long)]
    pub error_on_fail: bool,

    /// Maximum buffered output size in bytes (shell-execution mode).
    #[arg(long, value_name = "BYTES")]
    pub max_buffer: Option<usize>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `MSBUILD_RUNNER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

impl CliArgs {
    /// Apply flag overrides on top of options loaded from file/defaults.
    pub fn apply_to(&self, options: &mut RunnerOptions) {
        if self.no_stdout {
            options.stdout = false;
        }
        if self.no_stderr {
            options.stderr = false;
        }
        if self.log_command {
            options.log_command = true;
        }
        if self.error_on_fail {
            options.error_on_fail = true;
        }
        if let Some(max_buffer) = self.max_buffer {
            options.max_buffer = max_buffer;
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Command builder backing the CLI: the executable and argument list are
/// taken verbatim from the invocation; no MSBuild flag semantics here.
pub struct CliCommandBuilder {
    executable: String,
    args: Vec<String>,
}

impl CliCommandBuilder {
    pub fn new(executable: String, args: Vec<String>) -> Self {
        Self { executable, args }
    }
}

impl CommandBuilder for CliCommandBuilder {
    fn construct(&self, file: &str, _options: &RunnerOptions) -> Result<BuildCommand> {
        Ok(BuildCommand {
            executable: self.executable.clone(),
            file_path: file.to_string(),
            args: self.args.clone(),
        })
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
