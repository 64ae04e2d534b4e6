//! CLI integration tests.
//!
//! Tests for argument parsing and configuration building.

use num_cli::cli::args::Args;
use num_cli::cli::input::InputSource;
use num_cli::{Config, Precision, Unit};

fn parse(list: &[&str]) -> Args {
    let args: Vec<String> = list.iter().map(|s| s.to_string()).collect();
    Args::parse_from(&args).unwrap()
}

#[test]
fn test_default_args() {
    let args = Args::parse_from(&[]).unwrap();
    assert!(!args.hex && !args.decimal && !args.octal && !args.binary);
    assert!(!args.chars);
    assert!(!args.stdin);
    assert!(!args.verbose);
    assert!(args.inputs.is_empty());
}

#[test]
fn test_default_config() {
    let config = Config::from_args(&parse(&[])).unwrap();
    assert_eq!(config.options.template.pattern(), "%v");
    assert_eq!(config.options.target, Unit::B);
    assert_eq!(config.options.precision, Precision::Auto);
    assert_eq!(config.source, InputSource::Stdin { blocking: false });
}

#[test]
fn test_unit_flag_case_insensitive() {
    for value in ["gb", "GB", "Gb", "gB"] {
        let config = Config::from_args(&parse(&["-u", value])).unwrap();
        assert_eq!(config.options.target, Unit::GB);
    }
}

#[test]
fn test_unit_flag_resolves_by_suffix() {
    let config = Config::from_args(&parse(&["-u", "10GB"])).unwrap();
    assert_eq!(config.options.target, Unit::GB);
    let config = Config::from_args(&parse(&["-u", "xyz"])).unwrap();
    assert_eq!(config.options.target, Unit::B);
}

#[test]
fn test_invalid_precision_is_usage_error() {
    let err = Config::from_args(&parse(&["-precision", "exact"])).unwrap_err();
    assert!(err.is_usage());
}

#[test]
fn test_custom_format_overrides_flags() {
    let config = Config::from_args(&parse(&["-x", "-d", "-f", "%q %x"])).unwrap();
    assert_eq!(config.options.template.pattern(), "%q %x");
    assert_eq!(config.options.template.slots(), 2);
}

#[test]
fn test_format_long_name() {
    let config = Config::from_args(&parse(&["-format=%08b"])).unwrap();
    assert_eq!(config.options.template.pattern(), "%08b");
}

#[test]
fn test_empty_format_falls_back_to_flags() {
    let config = Config::from_args(&parse(&["-x", "-f", ""])).unwrap();
    assert_eq!(config.options.template.pattern(), "0x%x");
}

#[test]
fn test_f_count_override() {
    let config = Config::from_args(&parse(&["-f", "%d %d %d", "-f-count", "3"])).unwrap();
    assert_eq!(config.options.template.slots(), 3);
}

#[test]
fn test_invalid_f_count() {
    let args: Vec<String> = vec!["-f-count".to_string(), "many".to_string()];
    let err = Args::parse_from(&args).unwrap_err();
    assert!(err.to_string().contains("Invalid f-count"));
}

#[test]
fn test_source_priority() {
    let config = Config::from_args(&parse(&["-file", "in.txt", "42"])).unwrap();
    assert_eq!(config.source, InputSource::Args(vec!["42".to_string()]));

    let config = Config::from_args(&parse(&["-file", "in.txt"])).unwrap();
    assert_eq!(config.source, InputSource::File("in.txt".into()));

    let config = Config::from_args(&parse(&["-stdin"])).unwrap();
    assert_eq!(config.source, InputSource::Stdin { blocking: true });
}

#[test]
fn test_char_flags_are_distinct() {
    let args = parse(&["-c"]);
    assert!(args.chars);
    assert!(!args.quote_char);

    let args = parse(&["-s"]);
    assert!(args.quote_char);
    assert!(!args.chars);
}

#[test]
fn test_double_dash_flags() {
    let args = parse(&["--x", "--u", "KB", "--stdin", "--v"]);
    assert!(args.hex);
    assert!(args.stdin);
    assert!(args.verbose);
    assert_eq!(args.unit.as_deref(), Some("KB"));
}

#[test]
fn test_help_and_version() {
    assert!(parse(&["-h"]).help);
    assert!(parse(&["--help"]).help);
    assert!(parse(&["-version"]).version);
}
