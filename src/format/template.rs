//! Output templates.
//!
//! A template is either derived from the base flags (`-x -d -o -b -s`) or
//! supplied verbatim with `-f`. Either way it is a printf pattern plus the
//! number of value slots it expects; the single formatted value is repeated
//! into every slot.

use crate::format::printf::{sprintf, Value};

/// Base flags and custom-template options, as given on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selector {
    pub hex: bool,
    pub decimal: bool,
    pub octal: bool,
    pub binary: bool,
    /// Append the value rendered as a quoted character
    pub quote_char: bool,
    /// Custom printf pattern; overrides every base flag
    pub custom: Option<String>,
    /// Explicit slot count for the custom pattern
    pub f_count: Option<usize>,
}

impl Selector {
    /// Build the active template.
    pub fn template(&self) -> Template {
        if let Some(ref pattern) = self.custom {
            let slots = self.f_count.unwrap_or_else(|| count_placeholders(pattern));
            return Template {
                pattern: pattern.clone(),
                slots,
            };
        }

        // fixed order: hex, decimal, octal, binary, char
        let parts: Vec<&str> = [
            (self.hex, "0x%x"),
            (self.decimal, "%v"),
            (self.octal, "0%o"),
            (self.binary, "0b%b"),
            (self.quote_char, "%q"),
        ]
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, verb)| *verb)
        .collect();

        if parts.is_empty() {
            return Template {
                pattern: "%v".to_string(),
                slots: 1,
            };
        }

        Template {
            pattern: parts.join(" "),
            slots: parts.len(),
        }
    }
}

/// A printf pattern and the number of values it consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pattern: String,
    slots: usize,
}

impl Template {
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let slots = count_placeholders(&pattern);
        Template { pattern, slots }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Render with `value` repeated into every slot.
    pub fn render(&self, value: Value) -> String {
        let args = vec![value; self.slots];
        sprintf(&self.pattern, &args)
    }
}

impl Default for Template {
    fn default() -> Self {
        Template::new("%v")
    }
}

/// Count value placeholders: every `%` not followed by a second `%`.
/// `%%` is consumed as a pair; a lone trailing `%` still counts.
pub fn count_placeholders(pattern: &str) -> usize {
    let mut count = 0;
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        if c == '%' && chars.next() != Some('%') {
            count += 1;
        }
    }
    count
}
