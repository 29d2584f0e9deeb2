// tests/shell_line_property.rs

//! Property coverage for command-line assembly and strategy selection.

use proptest::prelude::*;

use msbuild_runner::command::BuildCommand;
use msbuild_runner::config::RunnerOptions;
use msbuild_runner::exec::ExecStrategy;

fn token() -> impl Strategy<Value = String> {
    // Space-free tokens, as the command builder hands them over.
    "[A-Za-z0-9/:._-]{1,12}"
}

proptest! {
    #[test]
    fn shell_line_never_contains_double_spaces(
        executable in token(),
        file_path in proptest::option::of(token()),
        args in proptest::collection::vec(token(), 0..6),
    ) {
        let command = BuildCommand {
            executable,
            file_path: file_path.unwrap_or_default(),
            args,
        };

        let line = command.shell_line();
        prop_assert!(!line.contains("  "));
        prop_assert!(!line.ends_with(' '));
        prop_assert!(line.starts_with(&command.executable));
    }

    #[test]
    fn shell_line_is_the_space_joined_segments(
        executable in token(),
        file_path in proptest::option::of(token()),
        args in proptest::collection::vec(token(), 0..6),
    ) {
        let command = BuildCommand {
            executable: executable.clone(),
            file_path: file_path.clone().unwrap_or_default(),
            args: args.clone(),
        };

        let mut segments = vec![executable];
        if let Some(path) = file_path {
            segments.push(path);
        }
        segments.extend(args);

        prop_assert_eq!(command.shell_line(), segments.join(" "));
    }

    #[test]
    fn direct_strategy_iff_both_streams(stdout in any::<bool>(), stderr in any::<bool>()) {
        let options = RunnerOptions {
            stdout,
            stderr,
            ..RunnerOptions::default()
        };

        let expected = if stdout && stderr {
            ExecStrategy::Direct
        } else {
            ExecStrategy::Shell
        };
        prop_assert_eq!(ExecStrategy::select(&options), expected);
    }
}
