//! Zero-dependency argument parser for num.
//!
//! Flags take one or two leading dashes and must come before inputs.
//! Values can be given as the next argument or inline with `=`
//! (`-u GB`, `-u=GB`, `--format=%x`). Parsing stops at the first
//! positional argument or at `--`.

use std::env;

use crate::error::{NumError, Result};

/// Parsed command line arguments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    /// Include hexadecimal output
    pub hex: bool,
    /// Include decimal output
    pub decimal: bool,
    /// Include octal output
    pub octal: bool,
    /// Include binary output
    pub binary: bool,
    /// Include the value as a quoted character
    pub quote_char: bool,
    /// Treat inputs as characters
    pub chars: bool,
    /// Target data unit
    pub unit: Option<String>,
    /// Custom printf template
    pub format: Option<String>,
    /// Placeholder count for the custom template
    pub f_count: Option<usize>,
    /// Conversion precision policy
    pub precision: Option<String>,
    /// Input file path
    pub file: Option<String>,
    /// Block on stdin even when it is a terminal
    pub stdin: bool,
    /// Log parse errors to stderr
    pub verbose: bool,
    /// Show help
    pub help: bool,
    /// Show version information
    pub version: bool,
    /// Positional inputs
    pub inputs: Vec<String>,
}

/// Flags that take a value
const VALUE_FLAGS: &[&str] = &["u", "f", "format", "f-count", "precision", "file"];

impl Args {
    /// Parse command line arguments from std::env::args(), with
    /// `NUM_*` environment variables as defaults.
    pub fn parse() -> Result<Self> {
        let args: Vec<String> = env::args().skip(1).collect();
        Self::parse_from_env(&args, |key| env::var(key).ok())
    }

    /// Parse command line arguments from a slice, ignoring the environment
    pub fn parse_from(args: &[String]) -> Result<Self> {
        Self::parse_from_env(args, |_| None)
    }

    /// Parse with environment defaults supplied by `lookup`.
    /// Flags on the command line win over the environment.
    pub fn parse_from_env<F>(args: &[String], lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut result = Args::default();

        if let Some(unit) = lookup("NUM_UNIT") {
            result.unit = Some(unit);
        }
        if let Some(format) = lookup("NUM_FORMAT") {
            result.format = Some(format);
        }
        if let Some(precision) = lookup("NUM_PRECISION") {
            result.precision = Some(precision);
        }
        if let Some(verbose) = lookup("NUM_VERBOSE") {
            result.verbose = parse_bool("NUM_VERBOSE", &verbose)?;
        }

        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];

            if arg == "--" {
                result.inputs.extend(args[i + 1..].iter().cloned());
                break;
            }
            if !is_flag(arg) {
                result.inputs.extend(args[i..].iter().cloned());
                break;
            }

            let body = arg.trim_start_matches('-');
            let (name, inline) = match body.split_once('=') {
                Some((name, value)) => (name, Some(value.to_string())),
                None => (body, None),
            };

            if VALUE_FLAGS.contains(&name) {
                let value = match inline {
                    Some(v) => v,
                    None => {
                        i += 1;
                        args.get(i)
                            .cloned()
                            .ok_or_else(|| NumError::InvalidArgument(format!("-{} requires a value", name)))?
                    }
                };
                result.set_value(name, value)?;
            } else {
                let on = match inline {
                    Some(v) => parse_bool(name, &v)?,
                    None => true,
                };
                result.set_switch(name, on)?;
            }

            i += 1;
        }

        Ok(result)
    }

    fn set_value(&mut self, name: &str, value: String) -> Result<()> {
        match name {
            "u" => self.unit = Some(value),
            "f" | "format" => self.format = Some(value),
            "f-count" => {
                let count = value
                    .parse()
                    .map_err(|_| NumError::InvalidArgument(format!("Invalid f-count value: '{}'", value)))?;
                self.f_count = Some(count);
            }
            "precision" => self.precision = Some(value),
            "file" => self.file = Some(value),
            _ => return Err(NumError::InvalidArgument(format!("Unknown option: '-{}'", name))),
        }
        Ok(())
    }

    fn set_switch(&mut self, name: &str, on: bool) -> Result<()> {
        match name {
            "x" => self.hex = on,
            "d" => self.decimal = on,
            "o" => self.octal = on,
            "b" => self.binary = on,
            "s" => self.quote_char = on,
            "c" => self.chars = on,
            "stdin" => self.stdin = on,
            "v" | "verbose" => self.verbose = on,
            "h" | "help" => self.help = on,
            "V" | "version" => self.version = on,
            _ => return Err(NumError::InvalidArgument(format!("Unknown option: '-{}'", name))),
        }
        Ok(())
    }
}

/// A leading dash marks a flag, unless a digit follows (negative number)
/// or it is a lone `-`.
fn is_flag(arg: &str) -> bool {
    let mut chars = arg.chars();
    chars.next() == Some('-') && matches!(chars.next(), Some(c) if !c.is_ascii_digit())
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "1" | "t" | "true" | "yes" | "on" => Ok(true),
        "0" | "f" | "false" | "no" | "off" => Ok(false),
        _ => Err(NumError::InvalidArgument(format!(
            "Invalid boolean value '{}' for {}",
            value, name
        ))),
    }
}
