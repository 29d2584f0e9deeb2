// src/exec/launcher.rs

//! Pluggable process-launch abstraction.
//!
//! The runner talks to a [`ProcessLauncher`] instead of `tokio::process`
//! directly. This makes it easy to swap in a fake launcher in tests while
//! keeping the production implementation here.
//!
//! - [`TokioLauncher`] is the default implementation. It owns the two OS
//!   launch facilities: a direct spawn with inherited stdio and a piped
//!   stderr channel, and a shell execution with capped, optionally
//!   relayed output.
//! - Tests can provide their own `ProcessLauncher` that records launches
//!   and returns scripted exits without starting real processes.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::{Child, Command};
use tracing::debug;

use crate::command::BuildCommand;
use crate::errors::{Result, RunnerError};

/// Options for a shell-execution launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellOptions {
    /// Per-stream cap on buffered output, in bytes. Exceeding it kills the
    /// child and fails the launch.
    pub max_buffer: usize,
    /// Relay child stdout chunks to our stdout as they arrive.
    pub pipe_stdout: bool,
    /// Relay child stderr chunks to our stderr as they arrive.
    pub pipe_stderr: bool,
}

/// What a direct launch reports once the child has exited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectExit {
    /// Everything the child wrote to its stderr channel, byte for byte
    /// (lossily decoded). Whitespace counts: a bare newline is output.
    pub stderr_text: String,
    /// The child's exit code, if it exited normally.
    pub exit_code: Option<i32>,
}

/// Trait abstracting how build processes are launched.
///
/// Production code uses [`TokioLauncher`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait ProcessLauncher: Send + Sync {
    /// Launch the executable directly with its argument vector, no shell
    /// interpretation. Stdin/stdout are inherited; stderr is captured.
    ///
    /// `Err` means the child could not be spawned or awaited at all.
    fn launch_direct<'a>(
        &'a self,
        command: &'a BuildCommand,
    ) -> Pin<Box<dyn Future<Output = Result<DirectExit>> + Send + 'a>>;

    /// Run a single command-line string through the platform shell.
    ///
    /// `Ok(())` means the facility reported a clean run; `Err` carries the
    /// facility's error (spawn failure, non-zero exit, buffer overflow) —
    /// the single error slot the caller inspects for failure.
    fn launch_shell<'a>(
        &'a self,
        command_line: &'a str,
        options: ShellOptions,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
}

/// Real launcher used in production, backed by `tokio::process`.
#[derive(Debug, Clone, Default)]
pub struct TokioLauncher;

impl ProcessLauncher for TokioLauncher {
    fn launch_direct<'a>(
        &'a self,
        command: &'a BuildCommand,
    ) -> Pin<Box<dyn Future<Output = Result<DirectExit>> + Send + 'a>> {
        Box::pin(launch_direct_inner(command))
    }

    fn launch_shell<'a>(
        &'a self,
        command_line: &'a str,
        options: ShellOptions,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(launch_shell_inner(command_line, options))
    }
}

async fn launch_direct_inner(command: &BuildCommand) -> Result<DirectExit> {
    let mut cmd = Command::new(&command.executable);
    cmd.args(&command.args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = cmd
        .spawn()
        .map_err(|e| RunnerError::LaunchError(format!("{}: {e}", command.executable)))?;

    // Drain stderr off the child while it runs, so its pipe never fills
    // up. Raw bytes, not parsed lines: whitespace-only output still has
    // to register as output, and codepage/localized diagnostics must not
    // truncate the capture mid-stream.
    let stderr = child.stderr.take();
    let collector = tokio::spawn(async move {
        let mut captured: Vec<u8> = Vec::new();
        if let Some(mut stderr) = stderr {
            let mut chunk = [0u8; 8192];
            loop {
                match stderr.read(&mut chunk).await {
                    Ok(0) => break,
                    Ok(n) => captured.extend_from_slice(&chunk[..n]),
                    Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                    Err(e) => {
                        debug!("stderr read error: {e}");
                        break;
                    }
                }
            }
        }
        debug!(bytes = captured.len(), "stderr captured");
        String::from_utf8_lossy(&captured).into_owned()
    });

    let status = child.wait().await?;
    let stderr_text = collector.await.map_err(anyhow::Error::from)?;

    Ok(DirectExit {
        stderr_text,
        exit_code: status.code(),
    })
}

async fn launch_shell_inner(command_line: &str, options: ShellOptions) -> Result<()> {
    // Build a shell command appropriate for the platform.
    let mut cmd = if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command_line);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command_line);
        c
    };

    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = cmd
        .spawn()
        .map_err(|e| RunnerError::LaunchError(format!("shell: {e}")))?;

    let overflowed = drain_with_cap(&mut child, options).await?;
    if overflowed {
        let _ = child.kill().await;
        let _ = child.wait().await;
        return Err(RunnerError::OutputOverflow(options.max_buffer));
    }

    let status = child.wait().await?;
    if !status.success() {
        return Err(RunnerError::NonZeroExit(status.code().unwrap_or(-1)));
    }

    Ok(())
}

/// Drain child stdout/stderr until both hit EOF or either stream exceeds
/// the per-stream cap. Returns whether the cap was exceeded.
async fn drain_with_cap(child: &mut Child, options: ShellOptions) -> Result<bool> {
    let mut out = child
        .stdout
        .take()
        .ok_or_else(|| anyhow::anyhow!("child stdout was not piped"))?;
    let mut err = child
        .stderr
        .take()
        .ok_or_else(|| anyhow::anyhow!("child stderr was not piped"))?;

    let mut our_stdout = tokio::io::stdout();
    let mut our_stderr = tokio::io::stderr();

    let mut out_buf = [0u8; 8192];
    let mut err_buf = [0u8; 8192];
    let mut out_total = 0usize;
    let mut err_total = 0usize;
    let mut out_done = false;
    let mut err_done = false;

    while !(out_done && err_done) {
        tokio::select! {
            n = out.read(&mut out_buf), if !out_done => {
                match n? {
                    0 => out_done = true,
                    n => {
                        out_total += n;
                        if options.pipe_stdout {
                            our_stdout.write_all(&out_buf[..n]).await?;
                            our_stdout.flush().await?;
                        }
                        if out_total > options.max_buffer {
                            return Ok(true);
                        }
                    }
                }
            }
            n = err.read(&mut err_buf), if !err_done => {
                match n? {
                    0 => err_done = true,
                    n => {
                        err_total += n;
                        if options.pipe_stderr {
                            our_stderr.write_all(&err_buf[..n]).await?;
                            our_stderr.flush().await?;
                        }
                        if err_total > options.max_buffer {
                            return Ok(true);
                        }
                    }
                }
            }
        }
    }

    Ok(false)
}
