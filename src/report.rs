// src/report.rs

//! Build reporting seam.
//!
//! The runner talks to a [`BuildLog`] instead of logging directly. This
//! makes the observable log lines (command echo, captured errors, the two
//! fixed status markers) assertable in tests with a recording
//! implementation, while production uses [`TracingLog`].

use colored::Colorize;
use tracing::info;

/// Fixed marker emitted after a successful build.
pub const BUILD_COMPLETE: &str = "Build complete!";

/// Fixed marker emitted after a failed build.
pub const BUILD_FAILED: &str = "Build failed!";

/// Single-line build log sink.
pub trait BuildLog: Send + Sync {
    /// Emit one informational line.
    fn log(&self, line: &str);

    /// Emit the fixed success marker.
    fn success_marker(&self) {
        self.log(BUILD_COMPLETE);
    }

    /// Emit the fixed failure marker.
    fn failure_marker(&self) {
        self.log(BUILD_FAILED);
    }
}

/// Production log sink: lines go through `tracing`, with the two fixed
/// markers colourised (cyan for success, red for failure).
#[derive(Debug, Clone, Default)]
pub struct TracingLog;

impl BuildLog for TracingLog {
    fn log(&self, line: &str) {
        info!("{line}");
    }

    fn success_marker(&self) {
        info!("{}", BUILD_COMPLETE.cyan());
    }

    fn failure_marker(&self) {
        info!("{}", BUILD_FAILED.red());
    }
}
