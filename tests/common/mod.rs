//! Shared testing utilities for level-gen CLI tests.

use assert_cmd::Command;

pub use level_gen::app::prompts::{FIRST_IMAGE, NEXT_IMAGE, VALID_NAME};

/// Build a command for invoking the compiled `level-gen` binary.
pub fn cli() -> Command {
    let mut cmd = Command::cargo_bin("level-gen").expect("Failed to locate level-gen binary");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run a session fed with `lines` and return its stdout.
pub fn session_stdout(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    let output = cli().write_stdin(input).assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("stdout should be UTF-8")
}

/// Expected stdout made of the given lines, each newline-terminated.
pub fn lines(expected: &[&str]) -> String {
    expected.iter().map(|line| format!("{line}\n")).collect()
}
