//! Integer literal parsing.
//!
//! Accepts the usual literal forms: optional sign, `0x`/`0X` hex, `0o`/`0O`
//! or a leading `0` for octal, `0b`/`0B` binary, and plain decimal.
//! Underscores may separate digits, or follow a base prefix.

use crate::error::LiteralError;

/// Parse an integer literal into a signed 64-bit value.
pub fn parse_int(s: &str) -> Result<i64, LiteralError> {
    let (negative, body) = match s.as_bytes().first() {
        Some(b'+') => (false, &s[1..]),
        Some(b'-') => (true, &s[1..]),
        _ => (false, s),
    };
    if body.is_empty() {
        return Err(LiteralError::Empty);
    }

    let magnitude = parse_magnitude(body)?;

    if negative {
        let min = i64::MIN.unsigned_abs();
        if magnitude > min {
            return Err(LiteralError::OutOfRange);
        }
        Ok((magnitude as i64).wrapping_neg())
    } else {
        i64::try_from(magnitude).map_err(|_| LiteralError::OutOfRange)
    }
}

fn parse_magnitude(body: &str) -> Result<u64, LiteralError> {
    let bytes = body.as_bytes();
    let (radix, digits, prefixed) = match bytes {
        [b'0', b'x' | b'X', ..] => (16, &bytes[2..], true),
        [b'0', b'o' | b'O', ..] => (8, &bytes[2..], true),
        [b'0', b'b' | b'B', ..] => (2, &bytes[2..], true),
        [b'0', _, ..] => (8, &bytes[1..], false),
        _ => (10, bytes, false),
    };

    if !underscores_ok(body) {
        return Err(LiteralError::MisplacedUnderscore);
    }

    let mut value: u64 = 0;
    let mut seen_digit = false;
    for &c in digits {
        if c == b'_' {
            continue;
        }
        let d = (c as char).to_digit(radix).ok_or(LiteralError::InvalidDigit)?;
        value = value
            .checked_mul(radix as u64)
            .and_then(|v| v.checked_add(d as u64))
            .ok_or(LiteralError::OutOfRange)?;
        seen_digit = true;
    }

    // "0x" with nothing after the prefix
    if !seen_digit && prefixed {
        return Err(LiteralError::Empty);
    }

    Ok(value)
}

/// Underscores must sit between digits, or directly after a base prefix.
/// A leading `0` octal marker counts as a digit.
fn underscores_ok(body: &str) -> bool {
    let bytes = body.as_bytes();
    // '^' start, '0' digit or prefix, '_' underscore
    let mut saw = '^';
    let mut i = 0;
    let mut hex = false;

    if bytes.len() >= 2
        && bytes[0] == b'0'
        && matches!(bytes[1].to_ascii_lowercase(), b'b' | b'o' | b'x')
    {
        hex = bytes[1].to_ascii_lowercase() == b'x';
        saw = '0';
        i = 2;
    }

    for &c in &bytes[i..] {
        if c.is_ascii_digit() || (hex && c.is_ascii_hexdigit()) {
            saw = '0';
            continue;
        }
        if c == b'_' {
            if saw != '0' {
                return false;
            }
            saw = '_';
            continue;
        }
        if saw == '_' {
            return false;
        }
        saw = '!';
    }
    saw != '_'
}
