//! End-to-end tests of the `num` binary.

use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = cargo_bin_cmd!("num");
    cmd.arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("transform integers and characters"))
        .stdout(predicate::str::contains("-f-count"))
        .stdout(predicate::str::contains("-precision"));
}

#[test]
fn test_cli_version() {
    let mut cmd = cargo_bin_cmd!("num");
    cmd.arg("-version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("num "));
}

#[test]
fn test_units_from_args() {
    let mut cmd = cargo_bin_cmd!("num");
    cmd.args(["-u", "GB", "10TB", "8EB"])
        .assert()
        .success()
        .stdout("10240\n8589934592\n");
}

#[test]
fn test_custom_float_format() {
    let mut cmd = cargo_bin_cmd!("num");
    cmd.args(["-u", "GB", "-f=%0.4fGB", "10TB"])
        .assert()
        .success()
        .stdout("10240.0000GB\n");
}

#[test]
fn test_all_bases() {
    let mut cmd = cargo_bin_cmd!("num");
    cmd.args(["-x", "-d", "-o", "-b", "255"])
        .assert()
        .success()
        .stdout("0xff 255 0377 0b11111111\n");
}

#[test]
fn test_piped_stdin() {
    let mut cmd = cargo_bin_cmd!("num");
    cmd.args(["-x", "-d", "-u=KB"])
        .write_stdin("2048\n1MB 4kb\n")
        .assert()
        .success()
        .stdout("0x2 2\n0x400 1024\n0x4 4\n");
}

#[test]
fn test_parse_error_is_silent_without_verbose() {
    let mut cmd = cargo_bin_cmd!("num");
    cmd.env_remove("NUM_LOG")
        .args(["not_a_number", "5"])
        .assert()
        .success()
        .stdout("\n5\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_parse_error_logged_with_verbose() {
    let mut cmd = cargo_bin_cmd!("num");
    cmd.env_remove("NUM_LOG")
        .args(["-v", "not_a_number", "5"])
        .assert()
        .success()
        .stdout("\n5\n")
        .stderr(predicate::str::contains("not_a_number"));
}

#[test]
fn test_missing_file_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.txt");
    let mut cmd = cargo_bin_cmd!("num");
    cmd.args(["-file", path.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot open"));
}

#[test]
fn test_unit_flag_with_number_prefix() {
    let mut cmd = cargo_bin_cmd!("num");
    cmd.args(["-u", "10GB", "1TB"])
        .assert()
        .success()
        .stdout("1024\n");
}

#[test]
fn test_unit_flag_without_suffix_means_bytes() {
    let mut cmd = cargo_bin_cmd!("num");
    cmd.args(["-u", "xyz", "1KB"])
        .assert()
        .success()
        .stdout("1024\n");
}

#[test]
fn test_unknown_flag_exits_with_usage_error() {
    let mut cmd = cargo_bin_cmd!("num");
    cmd.arg("-z")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown option"));
}

#[test]
fn test_environment_unit_default() {
    let mut cmd = cargo_bin_cmd!("num");
    cmd.env("NUM_UNIT", "MB")
        .arg("1GB")
        .assert()
        .success()
        .stdout("1024\n");
}

#[test]
fn test_oversized_width_renders_marker() {
    let mut cmd = cargo_bin_cmd!("num");
    cmd.args(["-f", "%99999999999999d", "1", "2"])
        .assert()
        .success()
        .stdout("%!(BADWIDTH)1\n%!(BADWIDTH)2\n");
}

#[test]
fn test_large_precision_renders() {
    let mut cmd = cargo_bin_cmd!("num");
    let output = cmd.args(["-f", "%.70000f", "1"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout.len(), 70_003);
    assert!(output.stdout.starts_with(b"1.000"));
}

#[cfg(unix)]
#[test]
fn test_idle_stdin_pipe_is_empty_input() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_num"))
        .arg("-x")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    // held open for the whole run, never written
    let _stdin = child.stdin.take();

    let start = Instant::now();
    let status = loop {
        if let Some(status) = child.try_wait().unwrap() {
            break status;
        }
        if start.elapsed() > Duration::from_secs(10) {
            child.kill().unwrap();
            panic!("num kept waiting on an idle stdin pipe");
        }
        thread::sleep(Duration::from_millis(20));
    };
    assert!(status.success());
}

#[test]
fn test_stdin_flag_reads_pipe() {
    let mut cmd = cargo_bin_cmd!("num");
    cmd.args(["-stdin", "-x"])
        .write_stdin("255\n")
        .assert()
        .success()
        .stdout("0xff\n");
}
