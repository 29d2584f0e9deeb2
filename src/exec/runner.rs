// src/exec/runner.rs

//! The process runner: one build process per run, one completion.

use tracing::{debug, info};

use crate::command::BuildCommand;
use crate::config::RunnerOptions;
use crate::errors::{Result, RunnerError};
use crate::exec::launcher::{ProcessLauncher, ShellOptions};
use crate::report::BuildLog;

/// Execution strategy, chosen once per run from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecStrategy {
    /// Spawn the executable directly with its argument vector; stdin and
    /// stdout inherited, stderr captured for failure detection.
    Direct,
    /// Run the assembled command line through the platform shell with
    /// capped, optionally relayed output.
    Shell,
}

impl ExecStrategy {
    /// Direct launch only when both output streams are relayed; shell
    /// execution for every other combination.
    pub fn select(options: &RunnerOptions) -> Self {
        if options.stdout && options.stderr {
            ExecStrategy::Direct
        } else {
            ExecStrategy::Shell
        }
    }
}

/// Runs a single constructed build command and reports completion exactly
/// once through the returned `Result`.
///
/// `Err` is produced only when the build failed *and* `error_on_fail` is
/// set; a failure with `error_on_fail` unset is logged and resolves `Ok`.
pub struct ProcessRunner<L, B> {
    options: RunnerOptions,
    launcher: L,
    log: B,
}

impl<L: ProcessLauncher, B: BuildLog> ProcessRunner<L, B> {
    pub fn new(options: RunnerOptions, launcher: L, log: B) -> Self {
        Self {
            options,
            launcher,
            log,
        }
    }

    /// Launch the build process and await its completion.
    ///
    /// Log order is part of the contract: the optional command echo comes
    /// before the launch; after termination the captured error (if any) is
    /// logged, then the fixed status marker, and only then does this
    /// resolve.
    pub async fn run(&self, command: &BuildCommand) -> Result<()> {
        if self.options.log_command {
            self.log
                .log(&format!("Using msbuild command: {}", command.log_line()));
        }

        let strategy = ExecStrategy::select(&self.options);
        debug!(?strategy, executable = %command.executable, "starting build process");

        let outcome = match strategy {
            ExecStrategy::Direct => self.run_direct(command).await,
            ExecStrategy::Shell => self.run_shell(command).await,
        };

        match outcome {
            Ok(()) => {
                self.log.success_marker();
                Ok(())
            }
            Err(failure) => {
                // Log the raw captured detail first, then the marker.
                match &failure {
                    RunnerError::StderrOutput(text) => self.log.log(text),
                    other => self.log.log(&other.to_string()),
                }
                self.log.failure_marker();

                if self.options.error_on_fail {
                    Err(failure)
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Direct-launch mode. Failure is keyed off the captured stderr text
    /// being non-empty, not off the exit status. A clean-exit child that
    /// wrote diagnostics to stderr is still classified as failed; this
    /// matches the long-standing behaviour of the tool and is kept as-is.
    async fn run_direct(&self, command: &BuildCommand) -> Result<()> {
        let exit = self.launcher.launch_direct(command).await?;

        info!(exit_code = ?exit.exit_code, "build process exited");

        if exit.stderr_text.is_empty() {
            Ok(())
        } else {
            Err(RunnerError::StderrOutput(exit.stderr_text))
        }
    }

    /// Shell-execution mode. Failure is whatever the launch facility
    /// reports: spawn error, non-zero exit, or output-buffer overflow.
    async fn run_shell(&self, command: &BuildCommand) -> Result<()> {
        let shell_options = ShellOptions {
            max_buffer: self.options.max_buffer,
            pipe_stdout: self.options.stdout,
            pipe_stderr: self.options.stderr,
        };

        self.launcher
            .launch_shell(&command.shell_line(), shell_options)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(stdout: bool, stderr: bool) -> RunnerOptions {
        RunnerOptions {
            stdout,
            stderr,
            ..RunnerOptions::default()
        }
    }

    #[test]
    fn direct_only_when_both_streams_enabled() {
        assert_eq!(ExecStrategy::select(&options(true, true)), ExecStrategy::Direct);
        assert_eq!(ExecStrategy::select(&options(true, false)), ExecStrategy::Shell);
        assert_eq!(ExecStrategy::select(&options(false, true)), ExecStrategy::Shell);
        assert_eq!(ExecStrategy::select(&options(false, false)), ExecStrategy::Shell);
    }
}
