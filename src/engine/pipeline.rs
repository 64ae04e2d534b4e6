//! Token pipeline.
//!
//! Formats each token in arrival order and writes exactly one line per
//! token. A token that fails to parse produces an empty line and a warning;
//! only I/O failures stop the run.

use std::io::Write;

use tracing::{debug, warn};

use crate::error::{NumError, Result};
use crate::format::{format_chars, format_token};
use crate::Config;

/// Counts for a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Tokens read, which is also the number of lines written
    pub tokens: u64,
    /// Tokens that produced an empty line because they failed to parse
    pub failed: u64,
}

/// Format a single token according to `config`.
pub fn format_line(token: &str, config: &Config) -> Result<String> {
    if config.chars {
        Ok(format_chars(token, &config.options.template))
    } else {
        format_token(token, &config.options)
    }
}

/// Drive `tokens` through the formatter into `out`.
pub fn run<I, W>(config: &Config, tokens: I, out: &mut W) -> Result<RunSummary>
where
    I: IntoIterator<Item = Result<String>>,
    W: Write,
{
    let mut summary = RunSummary::default();

    for token in tokens {
        let token = token?;
        summary.tokens += 1;

        let line = match format_line(&token, config) {
            Ok(line) => line,
            Err(e) if e.is_recoverable() => {
                warn!("{}", e);
                summary.failed += 1;
                String::new()
            }
            Err(e) => return Err(e),
        };

        writeln!(out, "{}", line).map_err(NumError::Write)?;
    }

    out.flush().map_err(NumError::Write)?;
    debug!(tokens = summary.tokens, failed = summary.failed, "done");
    Ok(summary)
}
