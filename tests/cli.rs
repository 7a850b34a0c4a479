use std::io::Write;
use std::process::{Command, Output, Stdio};

use rstest::rstest;

fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_regex-engine"))
        .args(args)
        .env_remove("REGEX_ENGINE_MAX_SCANS")
        .env_remove("REGEX_ENGINE_MAX_DEPTH")
        .env_remove("REGEX_ENGINE_MAX_STEPS")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(stdin.as_bytes()).unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_lines_mode() {
    let output = run(&[], "a|a\r\n\nb|b\ncolou?r|colour\n^a|ba\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "True\nTrue\nTrue\nFalse\n");
}

#[test]
fn test_lines_mode_missing_separator() {
    let output = run(&[], "a|a\nnope\nb|b\n");
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "True\n");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("line 2: expected 'pattern|subject'"), "{}", stderr);
}

#[rstest]
#[case("a+b", "aab\n", Some(0))]
#[case("a+b", "b\n", Some(1))]
#[case("*a", "a\n", Some(1))]
#[case("^$", "", Some(0))]
fn test_single_pattern_mode(#[case] pattern: &str, #[case] stdin: &str, #[case] expected: Option<i32>) {
    assert_eq!(run(&["-E", pattern], stdin).status.code(), expected);
}

#[test]
fn test_bad_limit() {
    let output = Command::new(env!("CARGO_BIN_EXE_regex-engine"))
        .env("REGEX_ENGINE_MAX_STEPS", "lots")
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_usage_error() {
    assert_eq!(run(&["-x"], "").status.code(), Some(2));
}
