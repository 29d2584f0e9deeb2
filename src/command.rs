// src/command.rs

//! The build command value and the command-builder seam.
//!
//! A [`BuildCommand`] is the triple handed to the process runner: the
//! executable, an optional project file path, and the flag list. It is
//! produced once per task by a [`CommandBuilder`] and never mutated after
//! that.

use crate::config::RunnerOptions;
use crate::errors::Result;

/// A fully constructed build invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    /// Executable to run, e.g. `msbuild` or an absolute path to it.
    pub executable: String,
    /// Project/solution file path. May be empty, in which case it is
    /// omitted from the assembled command line.
    pub file_path: String,
    /// Flag tokens, already formatted for the build tool.
    pub args: Vec<String>,
}

impl BuildCommand {
    /// Assemble the single command-line string used in shell mode.
    ///
    /// Segments are joined by single spaces; an empty `file_path` is left
    /// out entirely, so the result never contains a double space.
    pub fn shell_line(&self) -> String {
        let mut line = self.executable.clone();
        if !self.file_path.is_empty() {
            line.push(' ');
            line.push_str(&self.file_path);
        }
        if !self.args.is_empty() {
            line.push(' ');
            line.push_str(&self.args.join(" "));
        }
        line
    }

    /// The line emitted when `log_command` is enabled. Same shape as
    /// [`shell_line`](Self::shell_line).
    pub fn log_line(&self) -> String {
        self.shell_line()
    }
}

/// Interface of the command-construction collaborator.
///
/// The runner consumes this interface; flag semantics (targets, properties,
/// verbosity, ...) live entirely behind it.
pub trait CommandBuilder {
    /// Construct the command for one build of `file` under `options`.
    fn construct(&self, file: &str, options: &RunnerOptions) -> Result<BuildCommand>;
}
