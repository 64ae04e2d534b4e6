//! num library
//!
//! Parses integer literals and characters and re-renders them in other
//! bases, data storage units, or a custom printf-style template.
//!
//! - Integer literals in decimal, `0x` hex, `0o`/leading-`0` octal and
//!   `0b` binary, with `_` digit separators
//! - Data units from bytes to exabytes (`10TB`, `512kb`), converted to a
//!   target unit
//! - Output as any mix of hex, decimal, octal, binary and quoted character,
//!   or through a custom template
//!
//! # Example
//!
//! ```
//! use num_cli::{Config, Unit};
//! use num_cli::engine::format_line;
//!
//! let mut config = Config::default();
//! config.options.target = Unit::GB;
//! assert_eq!(format_line("10TB", &config).unwrap(), "10240");
//! ```

pub mod cli;
pub mod data;
pub mod engine;
pub mod error;
pub mod format;
pub mod version;

use std::io::Write;

use tracing::debug;

use cli::args::Args;
use cli::input::InputSource;
use engine::RunSummary;
use format::{FormatOptions, Selector};

pub use data::Unit;
pub use error::{NumError, Result};
pub use format::{Precision, Template, Value};

/// Read-only configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Template, target unit and precision for numeric tokens
    pub options: FormatOptions,
    /// Inputs are characters rather than numbers
    pub chars: bool,
    /// Where tokens come from
    pub source: InputSource,
    /// Log per-token errors
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            options: FormatOptions::default(),
            chars: false,
            source: InputSource::Stdin { blocking: false },
            verbose: false,
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        let target = args.unit.as_deref().map(Unit::from_flag).unwrap_or_default();
        let precision = match args.precision.as_deref() {
            Some(p) => p.parse::<Precision>()?,
            None => Precision::Auto,
        };

        let selector = Selector {
            hex: args.hex,
            decimal: args.decimal,
            octal: args.octal,
            binary: args.binary,
            quote_char: args.quote_char,
            custom: args.format.clone().filter(|f| !f.is_empty()),
            f_count: args.f_count,
        };
        if selector.custom.is_none() && selector.f_count.is_some() {
            debug!("-f-count has no effect without -f");
        }
        let template = selector.template();
        debug!(pattern = template.pattern(), slots = template.slots(), "output template");

        Ok(Config {
            options: FormatOptions {
                template,
                target,
                precision,
            },
            chars: args.chars,
            source: InputSource::select(&args.inputs, args.file.as_deref(), args.stdin),
            verbose: args.verbose,
        })
    }
}

/// Open the configured input and write one line per token to `out`.
///
/// Per-token parse failures are logged and yield empty lines; the returned
/// error is always fatal (input could not be opened or read, or output
/// could not be written).
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<RunSummary> {
    let tokens = config.source.open()?;
    engine::run(config, tokens, out)
}
