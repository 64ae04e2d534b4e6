//! Data storage units
//!
//! Binary (1024-based) units from bytes to exabytes, and suffix resolution
//! for tokens such as `10TB` or `512kb`.

use std::fmt;

/// Data storage unit. The multiplier is 1024 raised to the ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Unit {
    #[default]
    B,
    KB,
    MB,
    GB,
    TB,
    PB,
    EB,
}

/// Two-letter units, longest-match order for suffix resolution.
const SUFFIX_ORDER: [Unit; 6] = [Unit::EB, Unit::PB, Unit::TB, Unit::GB, Unit::MB, Unit::KB];

impl Unit {
    pub const ALL: [Unit; 7] = [
        Unit::B,
        Unit::KB,
        Unit::MB,
        Unit::GB,
        Unit::TB,
        Unit::PB,
        Unit::EB,
    ];

    /// Number of bytes in one of this unit
    pub fn multiplier(self) -> i128 {
        1i128 << (10 * self as u32)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Unit::B => "B",
            Unit::KB => "KB",
            Unit::MB => "MB",
            Unit::GB => "GB",
            Unit::TB => "TB",
            Unit::PB => "PB",
            Unit::EB => "EB",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Unit {
    /// Target unit named by `-u`. Resolved by suffix like any token, so
    /// `10GB` names gigabytes and a value with no unit suffix means bytes.
    pub fn from_flag(s: &str) -> Unit {
        resolve_unit(s.trim()).unit
    }
}

/// Result of looking for a unit suffix on a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub unit: Unit,
    /// Trailing bytes to strip before numeric parsing
    pub suffix_len: usize,
}

impl Resolved {
    pub fn multiplier(&self) -> i128 {
        self.unit.multiplier()
    }
}

/// Find the unit suffix of `s`.
///
/// Two-letter units are tried first so `MB` is not read as a trailing `B`.
/// A bare trailing `b` means bytes. No suffix resolves to bytes with
/// nothing to strip.
pub fn resolve_unit(s: &str) -> Resolved {
    let bytes = s.as_bytes();

    for unit in SUFFIX_ORDER {
        if ends_with_ignore_case(bytes, unit.symbol().as_bytes()) {
            return Resolved { unit, suffix_len: 2 };
        }
    }

    if ends_with_ignore_case(bytes, b"b") {
        return Resolved {
            unit: Unit::B,
            suffix_len: 1,
        };
    }

    Resolved {
        unit: Unit::B,
        suffix_len: 0,
    }
}

/// Split a token into its numeric part and its unit.
pub fn split_unit(s: &str) -> (&str, Unit) {
    let resolved = resolve_unit(s);
    (&s[..s.len() - resolved.suffix_len], resolved.unit)
}

fn ends_with_ignore_case(haystack: &[u8], suffix: &[u8]) -> bool {
    haystack.len() >= suffix.len()
        && haystack[haystack.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}
