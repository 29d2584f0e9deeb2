use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use msbuild_runner::command::BuildCommand;
use msbuild_runner::errors::{Result, RunnerError};
use msbuild_runner::exec::{DirectExit, ProcessLauncher, ShellOptions};
use msbuild_runner::report::BuildLog;

/// One recorded launch, with everything the runner handed to the facility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchRecord {
    Direct {
        command: BuildCommand,
    },
    Shell {
        command_line: String,
        options: ShellOptions,
    },
}

/// A fake launcher that:
/// - records every launch (mode, command, shell options)
/// - returns a scripted exit instead of starting a real process.
///
/// Unscripted launches report success (empty stderr / clean shell run).
#[derive(Default)]
pub struct FakeLauncher {
    records: Arc<Mutex<Vec<LaunchRecord>>>,
    direct_exit: Mutex<Option<Result<DirectExit>>>,
    shell_exit: Mutex<Option<Result<()>>>,
}

impl FakeLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next direct launch to exit with the given captured
    /// stderr text and exit code.
    pub fn with_direct_exit(self, stderr_text: &str, exit_code: i32) -> Self {
        *self.direct_exit.lock().unwrap() = Some(Ok(DirectExit {
            stderr_text: stderr_text.to_string(),
            exit_code: Some(exit_code),
        }));
        self
    }

    /// Script the next direct launch to fail at spawn time.
    pub fn with_direct_error(self, error: RunnerError) -> Self {
        *self.direct_exit.lock().unwrap() = Some(Err(error));
        self
    }

    /// Script the next shell launch to report the given facility error.
    pub fn with_shell_error(self, error: RunnerError) -> Self {
        *self.shell_exit.lock().unwrap() = Some(Err(error));
        self
    }

    /// Handle for asserting on recorded launches after the run.
    pub fn records(&self) -> Arc<Mutex<Vec<LaunchRecord>>> {
        Arc::clone(&self.records)
    }
}

impl ProcessLauncher for FakeLauncher {
    fn launch_direct<'a>(
        &'a self,
        command: &'a BuildCommand,
    ) -> Pin<Box<dyn Future<Output = Result<DirectExit>> + Send + 'a>> {
        self.records.lock().unwrap().push(LaunchRecord::Direct {
            command: command.clone(),
        });
        let scripted = self.direct_exit.lock().unwrap().take();

        Box::pin(async move {
            scripted.unwrap_or_else(|| {
                Ok(DirectExit {
                    stderr_text: String::new(),
                    exit_code: Some(0),
                })
            })
        })
    }

    fn launch_shell<'a>(
        &'a self,
        command_line: &'a str,
        options: ShellOptions,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        self.records.lock().unwrap().push(LaunchRecord::Shell {
            command_line: command_line.to_string(),
            options,
        });
        let scripted = self.shell_exit.lock().unwrap().take();

        Box::pin(async move { scripted.unwrap_or(Ok(())) })
    }
}

/// A log sink that records every line, so tests can assert on the exact
/// sequence of observable log output.
#[derive(Debug, Clone, Default)]
pub struct RecordingLog {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl BuildLog for RecordingLog {
    fn log(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}
