#![allow(dead_code)]

use msbuild_runner::command::BuildCommand;
use msbuild_runner::config::RunnerOptions;

/// Builder for `BuildCommand` to simplify test setup.
pub struct BuildCommandBuilder {
    command: BuildCommand,
}

impl BuildCommandBuilder {
    pub fn new(executable: &str) -> Self {
        Self {
            command: BuildCommand {
                executable: executable.to_string(),
                file_path: String::new(),
                args: Vec::new(),
            },
        }
    }

    pub fn file_path(mut self, path: &str) -> Self {
        self.command.file_path = path.to_string();
        self
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.command.args.push(arg.to_string());
        self
    }

    pub fn build(self) -> BuildCommand {
        self.command
    }
}

/// Builder for `RunnerOptions`.
pub struct RunnerOptionsBuilder {
    options: RunnerOptions,
}

impl RunnerOptionsBuilder {
    pub fn new() -> Self {
        Self {
            options: RunnerOptions::default(),
        }
    }

    pub fn stdout(mut self, val: bool) -> Self {
        self.options.stdout = val;
        self
    }

    pub fn stderr(mut self, val: bool) -> Self {
        self.options.stderr = val;
        self
    }

    pub fn log_command(mut self, val: bool) -> Self {
        self.options.log_command = val;
        self
    }

    pub fn error_on_fail(mut self, val: bool) -> Self {
        self.options.error_on_fail = val;
        self
    }

    pub fn max_buffer(mut self, val: usize) -> Self {
        self.options.max_buffer = val;
        self
    }

    pub fn build(self) -> RunnerOptions {
        self.options
    }
}

impl Default for RunnerOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
