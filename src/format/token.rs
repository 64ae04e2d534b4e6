//! Per-token formatting.

use tracing::trace;

use crate::data::{split_unit, Unit};
use crate::error::{NumError, Result};
use crate::format::convert::{convert, Precision};
use crate::format::literal::parse_int;
use crate::format::printf::Value;
use crate::format::template::Template;

/// Everything needed to format a numeric token.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    pub template: Template,
    pub target: Unit,
    pub precision: Precision,
}

/// Format one numeric token, possibly unit-suffixed, e.g. `10TB` or `0xff`.
pub fn format_token(token: &str, opts: &FormatOptions) -> Result<String> {
    let (literal, source) = split_unit(token);

    let value = parse_int(literal).map_err(|reason| NumError::Parse {
        literal: token.to_string(),
        reason,
    })?;

    let converted = convert(value, source, opts.target, opts.precision);
    trace!(token, %source, target = %opts.target, ?converted, "converted");

    Ok(opts.template.render(converted))
}

/// Format every character of `token` and join the results with a space.
pub fn format_chars(token: &str, template: &Template) -> String {
    token
        .chars()
        .map(|c| template.render(Value::Char(c)))
        .collect::<Vec<_>>()
        .join(" ")
}
