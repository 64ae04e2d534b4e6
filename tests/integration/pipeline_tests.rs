//! Pipeline tests.
//!
//! Line accounting and input sources through `num_cli::run`.

use std::io::Write;

use num_cli::cli::args::Args;
use num_cli::cli::input::{InputSource, Tokens};
use num_cli::engine;
use num_cli::{run, Config, NumError};

fn config(list: &[&str]) -> Config {
    let args: Vec<String> = list.iter().map(|s| s.to_string()).collect();
    Config::from_args(&Args::parse_from(&args).unwrap()).unwrap()
}

fn output(config: &Config) -> String {
    let mut out = Vec::new();
    run(config, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_line_count_matches_token_count() {
    let cfg = config(&["-x", "1", "oops", "2", "", "0b11"]);
    let out = output(&cfg);
    assert_eq!(out.lines().count(), 5);
    assert_eq!(out, "0x1\n\n0x2\n\n0x3\n");
}

#[test]
fn test_failures_do_not_halt() {
    let cfg = config(&["not_a_number", "7"]);
    let mut out = Vec::new();
    let summary = run(&cfg, &mut out).unwrap();
    assert_eq!(summary.tokens, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(out, b"\n7\n");
}

#[test]
fn test_reads_file_tokens() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "10TB 8EB").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "  512KB").unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let cfg = config(&["-u", "GB", "-file", &path]);
    assert_eq!(output(&cfg), "10240\n8589934592\n0.00048828125\n");
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    let cfg = config(&["-file", path.to_str().unwrap()]);

    let mut out = Vec::new();
    let err = run(&cfg, &mut out).unwrap_err();
    assert!(matches!(err, NumError::Open { .. }));
    assert!(!err.is_recoverable());
    assert!(out.is_empty());
}

#[test]
fn test_character_mode() {
    let cfg = config(&["-c", "-x", "-d", "Hi"]);
    assert_eq!(output(&cfg), "0x48 72 0x69 105\n");
}

#[test]
fn test_character_mode_custom_template() {
    let cfg = config(&["-c", "-f", "%q=%U", "é"]);
    assert_eq!(output(&cfg), "'é'=U+00E9\n");
}

#[test]
fn test_quote_char_flag() {
    let cfg = config(&["-d", "-s", "65", "0x263A"]);
    assert_eq!(output(&cfg), "65 'A'\n9786 '☺'\n");
}

#[test]
fn test_reader_source_through_engine() {
    let cfg = config(&["-o"]);
    assert_eq!(cfg.source, InputSource::Stdin { blocking: false });

    let tokens = Tokens::from_reader(std::io::Cursor::new("8\n9 x\n"), "test".to_string());
    let mut out = Vec::new();
    let summary = engine::run(&cfg, tokens, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "010\n011\n\n");
    assert_eq!(summary.tokens, 3);
}
