use pretty_assertions::assert_eq;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

struct Run {
    code: Option<i32>,
    stdout: String,
}

/// Runs the binary with `args`, feeding `stdin`, against the config file at
/// `config` (which need not exist).
fn run_with_config(config: &Path, args: &[&str], stdin: &str) -> Run {
    let mut child = Command::new(env!("CARGO_BIN_EXE_split-join"))
        .args(args)
        .env("SPLIT_JOIN_CONFIG", config)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // The binary may exit before reading stdin, so a broken pipe is fine.
    let _ = child.stdin.take().unwrap().write_all(stdin.as_bytes());

    let Output { status, stdout, .. } = child.wait_with_output().unwrap();
    Run {
        code: status.code(),
        stdout: String::from_utf8(stdout).unwrap(),
    }
}

fn run(args: &[&str], stdin: &str) -> Run {
    let temp_dir = TempDir::new().unwrap();
    run_with_config(&temp_dir.path().join("missing.toml"), args, stdin)
}

fn run_with_toml(toml: &str, args: &[&str], stdin: &str) -> Run {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.toml");
    std::fs::write(&config, toml).unwrap();
    run_with_config(&config, args, stdin)
}

#[test]
fn wrong_argument_counts_fail() {
    for args in [
        &[][..],
        &[","][..],
        &[",", ":", "a", "b"][..],
        &[",", ":", "a", "b", "c", "d"][..],
    ] {
        let result = run(args, "");
        assert_eq!(result.code, Some(1));
        assert_eq!(
            result.stdout,
            format!("Error: 2 args required, 1 optional: recieved {}\n", args.len())
        );
    }
}

#[test]
fn range_without_colon_fails() {
    let result = run(&[",", "12", "a,b,c"], "");

    assert_eq!(result.code, Some(1));
    assert_eq!(
        result.stdout,
        "Error: invalid value for range_str: delimiter (':') not found\n"
    );
}

#[test]
fn range_with_extra_colon_fails_before_output() {
    let result = run(&[",", "1:2:", "a,b,c"], "");

    assert_eq!(result.code, Some(1));
    assert_eq!(
        result.stdout,
        "Error: invalid value for range_str: more than one occurence of delimiter (':')\n"
    );
}

#[test]
fn non_numeric_endpoint_fails() {
    let result = run(&[",", "one:", "a,b,c"], "");

    assert_eq!(result.code, Some(1));
    assert!(result.stdout.starts_with("Error: invalid value for range_str: 'one'"));
}

#[test]
fn empty_delimiter_fails() {
    let result = run(&["", ":", "a"], "");

    assert_eq!(result.code, Some(1));
    assert_eq!(
        result.stdout,
        "Error: invalid value for split_char: empty string\n"
    );
}

#[test]
fn text_argument_is_processed_per_line() {
    let result = run(&[",", "1:", "a,b,c\nd,e,f\n"], "ignored\n");

    assert_eq!(result.code, Some(0));
    assert_eq!(result.stdout, "b,c\ne,f\n");
}

#[test]
fn stdin_is_processed_per_line() {
    let result = run(&["/", "-1:"], "/usr/bin/env\nrelative/path\n\nfile");

    assert_eq!(result.code, Some(0));
    assert_eq!(result.stdout, "env\npath\n\nfile\n");
}

#[test]
fn negative_range_and_dash_delimiter_are_positional() {
    let result = run(&["-", "-2:-1", "a-b-c"], "");

    assert_eq!(result.code, Some(0));
    assert_eq!(result.stdout, "b\n");
}

#[test]
fn only_first_delimiter_character_is_used() {
    let result = run(&[".x", ":-1", "archive.tar.gz"], "");

    assert_eq!(result.stdout, "archive.tar\n");
}

#[test]
fn empty_selection_prints_empty_line() {
    let result = run(&[",", "2:1", "a,b,c"], "");

    assert_eq!(result.code, Some(0));
    assert_eq!(result.stdout, "\n");
}

#[test]
fn out_of_range_line_aborts_by_default() {
    let result = run(&[",", "-3:", "a,b,c\nx,y\np,q,r"], "");

    assert_eq!(result.code, Some(1));
    assert_eq!(
        result.stdout,
        "a,b,c\nError: line 2: index -3 is out of range: underflow for 2 fields\n"
    );
}

#[test]
fn skip_policy_drops_out_of_range_lines() {
    let result = run_with_toml(
        "on_range_error = \"skip\"\n",
        &[",", ":3"],
        "a,b,c\nx,y\np,q,r\n",
    );

    assert_eq!(result.code, Some(0));
    assert_eq!(result.stdout, "a,b,c\np,q,r\n");
}

#[test]
fn blank_policy_prints_empty_line() {
    let result = run_with_toml(
        "on_range_error = \"blank\"\n",
        &[",", ":3", "a,b,c\nx,y\np,q,r"],
        "",
    );

    assert_eq!(result.code, Some(0));
    assert_eq!(result.stdout, "a,b,c\n\np,q,r\n");
}

#[test]
fn carriage_returns_stripped_when_configured() {
    let result = run_with_toml(
        "strip_carriage_return = true\n",
        &[",", "-1:"],
        "a,b\r\nc,d\r\n",
    );

    assert_eq!(result.stdout, "b\nd\n");
}

#[test]
fn invalid_config_fails() {
    let result = run_with_toml("on_range_error = 3\n", &[",", ":", "a"], "");

    assert_eq!(result.code, Some(1));
    assert!(result.stdout.starts_with("Error: Failed to parse config file at"));
}

#[test]
fn closed_stdout_stops_quietly() {
    let temp_dir = TempDir::new().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_split-join"))
        .args([",", ":"])
        .env("SPLIT_JOIN_CONFIG", temp_dir.path().join("missing.toml"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let mut stdin = child.stdin.take().unwrap();
    let writer = std::thread::spawn(move || {
        for i in 0..500_000 {
            if writeln!(stdin, "{i},x").is_err() {
                break;
            }
        }
    });

    // Read the first line like `head -1`, then hang up.
    let mut first = String::new();
    BufReader::new(child.stdout.take().unwrap())
        .read_line(&mut first)
        .unwrap();
    assert_eq!(first, "0,x\n");

    writer.join().unwrap();
    let Output { status, stderr, .. } = child.wait_with_output().unwrap();
    let stderr = String::from_utf8(stderr).unwrap();

    assert_eq!(status.code(), Some(0));
    assert!(!stderr.contains("panicked"), "{stderr}");
}
