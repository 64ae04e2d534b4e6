//! printf-style template rendering.
//!
//! Implements the subset of printf verbs that make sense for a single
//! numeric or character value, with the conventions of Go's `fmt` package:
//! `%v` picks a natural rendering, `%b` is binary, `%q` quotes a character,
//! and malformed directives render inline markers such as `%!d(MISSING)`
//! instead of failing.
//!
//! Supported verbs: `v d x X o O b c q U e E f F g G` and `%%`.
//! Supported flags: `+ - # 0` and space, plus width and `.precision`.
//! A width or precision above one million renders `%!(BADWIDTH)` or
//! `%!(BADPREC)` and the directive is applied without it.
//!
//! `%q` and `%#U` treat a character as printable unless it is a control or
//! whitespace character (space excepted). This is wider than Go's
//! `strconv.IsPrint`, so format characters such as U+200B and unassigned
//! code points are printed raw rather than escaped.

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

/// Largest accepted width or precision.
const MAX_WIDTH: usize = 1_000_000;
/// An f64 has no nonzero decimal digit past this many places.
const MAX_FLOAT_DIGITS: usize = 1100;

/// A value substituted into a template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i128),
    Float(f64),
    Char(char),
}

impl Value {
    fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int64",
            Value::Float(_) => "float64",
            Value::Char(_) => "int32",
        }
    }

    /// Integer view; floats truncate toward zero
    pub fn as_int(&self) -> i128 {
        match *self {
            Value::Int(v) => v,
            Value::Float(f) => f.trunc() as i128,
            Value::Char(c) => c as i128,
        }
    }

    pub fn as_float(&self) -> f64 {
        match *self {
            Value::Int(v) => v as f64,
            Value::Float(f) => f,
            Value::Char(c) => c as u32 as f64,
        }
    }
}

impl fmt::Display for Value {
    /// Same as `%v`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        render(&mut out, 'v', &Directive::default(), *self);
        f.write_str(&out)
    }
}

/// Flags, width and precision of one `%` directive.
#[derive(Debug, Clone, Default)]
struct Directive {
    plus: bool,
    minus: bool,
    sharp: bool,
    zero: bool,
    space: bool,
    width: Option<usize>,
    precision: Option<usize>,
    bad_width: bool,
    bad_precision: bool,
}

/// Render `pattern`, consuming one value per directive.
pub fn sprintf(pattern: &str, args: &[Value]) -> String {
    let mut out = String::with_capacity(pattern.len() + 16);
    let mut chars = pattern.chars().peekable();
    let mut next_arg = 0;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let directive = parse_directive(&mut chars);

        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        if verb == '%' {
            out.push('%');
            continue;
        }
        if directive.bad_width {
            out.push_str("%!(BADWIDTH)");
        }
        if directive.bad_precision {
            out.push_str("%!(BADPREC)");
        }

        match args.get(next_arg) {
            Some(arg) => {
                next_arg += 1;
                render(&mut out, verb, &directive, *arg);
            }
            None => {
                out.push_str("%!");
                out.push(verb);
                out.push_str("(MISSING)");
            }
        }
    }

    if next_arg < args.len() {
        let extra: Vec<String> = args[next_arg..]
            .iter()
            .map(|v| format!("{}={}", v.type_name(), v))
            .collect();
        out.push_str("%!(EXTRA ");
        out.push_str(&extra.join(", "));
        out.push(')');
    }

    out
}

fn parse_directive(chars: &mut Peekable<Chars<'_>>) -> Directive {
    let mut d = Directive::default();

    while let Some(&f) = chars.peek() {
        match f {
            '+' => d.plus = true,
            '-' => d.minus = true,
            '#' => d.sharp = true,
            '0' => d.zero = true,
            ' ' => d.space = true,
            _ => break,
        }
        chars.next();
    }
    // zero padding only applies on the left
    d.zero &= !d.minus;

    d.width = read_number(chars);
    if d.width.is_some_and(|w| w > MAX_WIDTH) {
        d.width = None;
        d.bad_width = true;
    }
    if chars.peek() == Some(&'.') {
        chars.next();
        match read_number(chars).unwrap_or(0) {
            p if p > MAX_WIDTH => d.bad_precision = true,
            p => d.precision = Some(p),
        }
    }
    d
}

fn read_number(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut n: Option<usize> = None;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        n = Some(n.unwrap_or(0).saturating_mul(10).saturating_add(d as usize));
        chars.next();
    }
    n
}

fn render(out: &mut String, verb: char, d: &Directive, value: Value) {
    match verb {
        'v' => match value {
            Value::Float(f) => fmt_float(out, f, 'g', d),
            other => fmt_integer(out, other.as_int(), 10, false, d),
        },
        'd' => fmt_integer(out, value.as_int(), 10, false, d),
        'x' => fmt_integer(out, value.as_int(), 16, false, d),
        'X' => fmt_integer(out, value.as_int(), 16, true, d),
        'o' | 'O' => fmt_octal(out, value.as_int(), verb == 'O', d),
        'b' => fmt_integer(out, value.as_int(), 2, false, d),
        'c' => {
            let c = to_char(value.as_int());
            pad(out, &c.to_string(), d, d.zero);
        }
        'q' => {
            let quoted = quote_char(to_char(value.as_int()), d.plus);
            pad(out, &quoted, d, d.zero);
        }
        'U' => fmt_unicode(out, value.as_int(), d),
        'e' | 'E' | 'f' | 'F' | 'g' | 'G' => fmt_float(out, value.as_float(), verb, d),
        _ => {
            out.push_str("%!");
            out.push(verb);
            out.push('(');
            out.push_str(value.type_name());
            out.push('=');
            out.push_str(&value.to_string());
            out.push(')');
        }
    }
}

/// Pad `body` to the directive width.
fn pad(out: &mut String, body: &str, d: &Directive, zero_fill: bool) {
    let len = body.chars().count();
    let fill = d.width.unwrap_or(0).saturating_sub(len);
    if d.minus {
        out.push_str(body);
        out.extend(std::iter::repeat(' ').take(fill));
    } else {
        let c = if zero_fill { '0' } else { ' ' };
        out.extend(std::iter::repeat(c).take(fill));
        out.push_str(body);
    }
}

fn sign_of(negative: bool, d: &Directive) -> &'static str {
    if negative {
        "-"
    } else if d.plus {
        "+"
    } else if d.space {
        " "
    } else {
        ""
    }
}

fn fmt_integer(out: &mut String, v: i128, radix: u32, upper: bool, d: &Directive) {
    let prefix = match (d.sharp, radix, upper) {
        (true, 16, false) => "0x",
        (true, 16, true) => "0X",
        (true, 2, _) => "0b",
        _ => "",
    };
    write_integer(out, v, radix, upper, prefix, d);
}

fn fmt_octal(out: &mut String, v: i128, always_prefix: bool, d: &Directive) {
    if always_prefix {
        write_integer(out, v, 8, false, "0o", d);
    } else if d.sharp && v != 0 {
        write_integer(out, v, 8, false, "0", d);
    } else {
        write_integer(out, v, 8, false, "", d);
    }
}

fn write_integer(out: &mut String, v: i128, radix: u32, upper: bool, prefix: &str, d: &Directive) {
    let negative = v < 0;
    let mut digits = to_radix(v.unsigned_abs(), radix, upper);

    // Precision is a minimum digit count; zero padding without precision
    // fills the width with digits, then the sign and prefix go in front.
    let min_digits = match d.precision {
        Some(0) if v == 0 => {
            digits.clear();
            0
        }
        Some(p) => p,
        None if d.zero => {
            let w = d.width.unwrap_or(0);
            if negative || d.plus || d.space {
                w.saturating_sub(1)
            } else {
                w
            }
        }
        None => 0,
    };
    if digits.len() < min_digits {
        digits.insert_str(0, &"0".repeat(min_digits - digits.len()));
    }

    let body = format!("{}{}{}", sign_of(negative, d), prefix, digits);
    pad(out, &body, d, false);
}

fn to_radix(mut n: u128, radix: u32, upper: bool) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let table: &[u8; 16] = if upper {
        b"0123456789ABCDEF"
    } else {
        b"0123456789abcdef"
    };
    let mut buf = Vec::with_capacity(128);
    while n > 0 {
        buf.push(table[(n % radix as u128) as usize]);
        n /= radix as u128;
    }
    buf.reverse();
    String::from_utf8_lossy(&buf).into_owned()
}

fn to_char(v: i128) -> char {
    u32::try_from(v)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn is_printable(c: char) -> bool {
    c == ' ' || !(c.is_control() || c.is_whitespace())
}

/// Single-quoted character literal with escapes. `ascii_only` escapes
/// everything outside ASCII.
fn quote_char(c: char, ascii_only: bool) -> String {
    let mut s = String::from("'");
    match c {
        '\'' => s.push_str("\\'"),
        '\\' => s.push_str("\\\\"),
        '\x07' => s.push_str("\\a"),
        '\x08' => s.push_str("\\b"),
        '\x0c' => s.push_str("\\f"),
        '\n' => s.push_str("\\n"),
        '\r' => s.push_str("\\r"),
        '\t' => s.push_str("\\t"),
        '\x0b' => s.push_str("\\v"),
        c if is_printable(c) && (c.is_ascii() || !ascii_only) => s.push(c),
        c if (c as u32) < 0x80 => s.push_str(&format!("\\x{:02x}", c as u32)),
        c if (c as u32) < 0x10000 => s.push_str(&format!("\\u{:04x}", c as u32)),
        c => s.push_str(&format!("\\U{:08x}", c as u32)),
    }
    s.push('\'');
    s
}

fn fmt_unicode(out: &mut String, v: i128, d: &Directive) {
    let code = if v < 0 { v as i64 as u64 as u128 } else { v as u128 };
    let digits = to_radix(code, 16, true);
    let min = d.precision.unwrap_or(4);
    let mut body = format!("U+{}{}", "0".repeat(min.saturating_sub(digits.len())), digits);
    if d.sharp {
        if let Some(c) = u32::try_from(code).ok().and_then(char::from_u32) {
            if is_printable(c) {
                body.push_str(&format!(" '{}'", c));
            }
        }
    }
    pad(out, &body, d, false);
}

fn fmt_float(out: &mut String, x: f64, verb: char, d: &Directive) {
    if !x.is_finite() {
        let body = if x.is_nan() {
            if d.plus { "+NaN" } else if d.space { " NaN" } else { "NaN" }
        } else if x < 0.0 {
            "-Inf"
        } else if d.space && !d.plus {
            " Inf"
        } else {
            "+Inf"
        };
        pad(out, body, d, false);
        return;
    }

    let abs = x.abs();
    let mut num = match verb {
        'e' | 'E' => exp_form(abs, d.precision.unwrap_or(6)),
        'f' | 'F' => fixed_form(abs, d.precision.unwrap_or(6)),
        _ => general_form(abs, d.precision),
    };
    if verb == 'E' || verb == 'G' {
        num = num.to_uppercase();
    }

    let sign = sign_of(x.is_sign_negative(), d);
    if d.zero {
        let fill = d
            .width
            .unwrap_or(0)
            .saturating_sub(sign.len() + num.len());
        out.push_str(sign);
        out.extend(std::iter::repeat('0').take(fill));
        out.push_str(&num);
    } else {
        pad(out, &format!("{}{}", sign, num), d, false);
    }
}

/// `d.ddde±XX` with `decimals` digits after the point
fn exp_form(x: f64, decimals: usize) -> String {
    let shown = decimals.min(MAX_FLOAT_DIGITS);
    let s = format!("{:.*e}", shown, x);
    let (mantissa, exp) = s.split_once('e').unwrap_or((s.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let mut mantissa = mantissa.to_string();
    mantissa.extend(std::iter::repeat('0').take(decimals - shown));
    with_exponent(mantissa, exp)
}

/// `ddd.ddd` with `decimals` digits after the point
fn fixed_form(x: f64, decimals: usize) -> String {
    let shown = decimals.min(MAX_FLOAT_DIGITS);
    let mut s = format!("{:.*}", shown, x);
    s.extend(std::iter::repeat('0').take(decimals - shown));
    s
}

fn with_exponent(mut mantissa: String, exp: i32) -> String {
    let sign = if exp < 0 { '-' } else { '+' };
    mantissa.push_str(&format!("e{}{:02}", sign, exp.abs()));
    mantissa
}

/// Decimal digits (no trailing zeros) and exponent of the leading digit.
fn decimal_digits(x: f64, precision: Option<usize>) -> (Vec<u8>, i32) {
    let s = match precision {
        None => format!("{:e}", x),
        Some(p) => format!("{:.*e}", (p.max(1) - 1).min(MAX_FLOAT_DIGITS), x),
    };
    let (mantissa, exp) = s.split_once('e').unwrap_or((s.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let mut digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    while digits.len() > 1 && digits.last() == Some(&b'0') {
        digits.pop();
    }
    (digits, exp)
}

/// `%g`: exponent form for very large or small magnitudes, plain otherwise.
/// Without a precision the shortest round-tripping digits are used.
fn general_form(x: f64, precision: Option<usize>) -> String {
    if x == 0.0 {
        return "0".to_string();
    }

    let (digits, exp) = decimal_digits(x, precision);
    let nd = digits.len() as i32;
    let dp = exp + 1;

    let mut prec = match precision {
        Some(p) => p.max(1) as i32,
        None => nd,
    };
    let eprec = match precision {
        None => 6,
        Some(_) if prec > nd && nd >= dp => nd,
        Some(_) => prec,
    };

    if exp < -4 || exp >= eprec {
        prec = prec.min(nd);
        let mut mantissa = String::new();
        mantissa.push(digits[0] as char);
        if prec > 1 {
            mantissa.push('.');
            mantissa.extend(digits[1..prec as usize].iter().map(|&b| b as char));
        }
        return with_exponent(mantissa, exp);
    }

    if prec > dp {
        prec = nd;
    }
    fixed_from_digits(&digits, dp, (prec - dp).max(0))
}

fn fixed_from_digits(digits: &[u8], dp: i32, decimals: i32) -> String {
    let digit_at = |i: i32| -> char {
        if i >= 0 && (i as usize) < digits.len() {
            digits[i as usize] as char
        } else {
            '0'
        }
    };

    let mut s = String::new();
    if dp <= 0 {
        s.push('0');
    } else {
        for i in 0..dp {
            s.push(digit_at(i));
        }
    }
    if decimals > 0 {
        s.push('.');
        for i in 0..decimals {
            s.push(digit_at(dp + i));
        }
    }
    s
}
