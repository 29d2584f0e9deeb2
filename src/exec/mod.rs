// src/exec/mod.rs

//! Process execution layer.
//!
//! This module launches the external build process and classifies its
//! outcome, reporting through the crate's [`BuildLog`](crate::report::BuildLog)
//! seam.
//!
//! - [`runner`] owns strategy selection, the two failure heuristics and
//!   the completion contract.
//! - [`launcher`] owns the actual OS process plumbing behind the
//!   [`ProcessLauncher`] trait, so tests can substitute a fake.

pub mod launcher;
pub mod runner;

pub use launcher::{DirectExit, ProcessLauncher, ShellOptions, TokioLauncher};
pub use runner::{ExecStrategy, ProcessRunner};
