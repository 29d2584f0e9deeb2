// tests/runner_real_process.rs

//! Runner behaviour over real child processes (Unix shells/binaries).

#![cfg(unix)]

mod common;
use crate::common::init_tracing;

use msbuild_runner::errors::RunnerError;
use msbuild_runner::exec::{ProcessRunner, TokioLauncher};
use msbuild_runner::report::{BUILD_COMPLETE, BUILD_FAILED};
use msbuild_runner_test_utils::builders::{BuildCommandBuilder, RunnerOptionsBuilder};
use msbuild_runner_test_utils::fake_launcher::RecordingLog;
use msbuild_runner_test_utils::with_timeout;

#[tokio::test]
async fn shell_mode_succeeds_on_clean_exit() {
    init_tracing();

    let log = RecordingLog::new();
    let options = RunnerOptionsBuilder::new().stdout(false).stderr(false).build();
    let command = BuildCommandBuilder::new("true").build();

    let runner = ProcessRunner::new(options, TokioLauncher, log.clone());
    with_timeout(runner.run(&command)).await.unwrap();

    assert_eq!(log.lines(), vec![BUILD_COMPLETE]);
}

#[tokio::test]
async fn shell_mode_fails_on_non_zero_exit() {
    init_tracing();

    let log = RecordingLog::new();
    let options = RunnerOptionsBuilder::new()
        .stdout(false)
        .stderr(false)
        .error_on_fail(true)
        .build();
    let command = BuildCommandBuilder::new("false").build();

    let runner = ProcessRunner::new(options, TokioLauncher, log.clone());
    let err = with_timeout(runner.run(&command)).await.unwrap_err();

    assert!(matches!(err, RunnerError::NonZeroExit(1)));
    assert_eq!(log.lines().last().map(String::as_str), Some(BUILD_FAILED));
}

#[tokio::test]
async fn shell_mode_kills_child_on_output_overflow() {
    init_tracing();

    let log = RecordingLog::new();
    let options = RunnerOptionsBuilder::new()
        .stdout(false)
        .stderr(false)
        .max_buffer(1024)
        .error_on_fail(true)
        .build();
    let command = BuildCommandBuilder::new("head")
        .arg("-c")
        .arg("1048576")
        .arg("/dev/zero")
        .build();

    let runner = ProcessRunner::new(options, TokioLauncher, log.clone());
    let err = with_timeout(runner.run(&command)).await.unwrap_err();

    assert!(matches!(err, RunnerError::OutputOverflow(1024)));
}

#[tokio::test]
async fn direct_mode_treats_stderr_text_as_failure_even_on_exit_zero() {
    init_tracing();

    let log = RecordingLog::new();
    let options = RunnerOptionsBuilder::new()
        .stdout(true)
        .stderr(true)
        .error_on_fail(true)
        .build();
    let command = BuildCommandBuilder::new("/bin/sh")
        .arg("-c")
        .arg("echo test 1>&2; exit 0")
        .build();

    let runner = ProcessRunner::new(options, TokioLauncher, log.clone());
    let err = with_timeout(runner.run(&command)).await.unwrap_err();

    match err {
        RunnerError::StderrOutput(text) => assert_eq!(text, "test\n"),
        other => panic!("expected StderrOutput, got {other:?}"),
    }
    assert_eq!(log.lines(), vec!["test\n", BUILD_FAILED]);
}

#[tokio::test]
async fn direct_mode_counts_newline_only_stderr_as_failure() {
    init_tracing();

    // Capture is byte-accurate: a child whose whole stderr output is one
    // blank line still produced output, so the run is a failure.
    let log = RecordingLog::new();
    let options = RunnerOptionsBuilder::new()
        .stdout(true)
        .stderr(true)
        .error_on_fail(true)
        .build();
    let command = BuildCommandBuilder::new("/bin/sh")
        .arg("-c")
        .arg("echo '' 1>&2; exit 0")
        .build();

    let runner = ProcessRunner::new(options, TokioLauncher, log.clone());
    let err = with_timeout(runner.run(&command)).await.unwrap_err();

    match err {
        RunnerError::StderrOutput(text) => assert_eq!(text, "\n"),
        other => panic!("expected StderrOutput, got {other:?}"),
    }
    assert_eq!(log.lines().last().map(String::as_str), Some(BUILD_FAILED));
}

#[tokio::test]
async fn direct_mode_ignores_exit_code_when_stderr_is_silent() {
    init_tracing();

    // Long-standing quirk: a non-zero exit with a silent stderr still
    // counts as success in direct-launch mode.
    let log = RecordingLog::new();
    let options = RunnerOptionsBuilder::new()
        .stdout(true)
        .stderr(true)
        .error_on_fail(true)
        .build();
    let command = BuildCommandBuilder::new("/bin/sh")
        .arg("-c")
        .arg("exit 3")
        .build();

    let runner = ProcessRunner::new(options, TokioLauncher, log.clone());
    with_timeout(runner.run(&command)).await.unwrap();

    assert_eq!(log.lines(), vec![BUILD_COMPLETE]);
}

#[tokio::test]
async fn direct_mode_spawn_failure_is_reported_through_the_run() {
    init_tracing();

    let log = RecordingLog::new();
    let options = RunnerOptionsBuilder::new()
        .stdout(true)
        .stderr(true)
        .error_on_fail(true)
        .build();
    let command = BuildCommandBuilder::new("definitely-not-a-real-binary-xyz").build();

    let runner = ProcessRunner::new(options, TokioLauncher, log.clone());
    let err = with_timeout(runner.run(&command)).await.unwrap_err();

    assert!(matches!(err, RunnerError::LaunchError(_)));
    assert_eq!(log.lines().last().map(String::as_str), Some(BUILD_FAILED));
}
