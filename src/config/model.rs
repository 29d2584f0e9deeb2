// src/config/model.rs

use serde::Deserialize;

/// Runner configuration as read from a TOML file (or assembled from CLI
/// flags):
///
/// ```toml
/// stdout = true
/// stderr = true
/// log_command = false
/// error_on_fail = false
/// max_buffer = 512000
/// ```
///
/// All keys are optional and default to the historical behaviour of the
/// tool: relay both streams, stay quiet about the command line, swallow
/// failures, cap buffered output at 500 KiB.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunnerOptions {
    /// Relay the child's standard output to our own standard output.
    #[serde(default = "default_stdout")]
    pub stdout: bool,

    /// Relay the child's standard error to our own standard error; in
    /// direct-launch mode it is also what failure detection keys off.
    #[serde(default = "default_stderr")]
    pub stderr: bool,

    /// Print the assembled command line before launching.
    #[serde(default)]
    pub log_command: bool,

    /// Propagate a failed build through the completion result. When false,
    /// failures are logged but the run still completes cleanly.
    #[serde(default)]
    pub error_on_fail: bool,

    /// Maximum buffered output size (bytes) in shell-execution mode.
    #[serde(default = "default_max_buffer")]
    pub max_buffer: usize,
}

fn default_stdout() -> bool {
    true
}

fn default_stderr() -> bool {
    true
}

fn default_max_buffer() -> usize {
    500 * 1024
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self {
            stdout: default_stdout(),
            stderr: default_stderr(),
            log_command: false,
            error_on_fail: false,
            max_buffer: default_max_buffer(),
        }
    }
}
