// Utility functions for the schema module
//
// Numeric literal parsing and canonical number formatting shared by the
// primitive coercers. Both follow the conventions of JSON producers on the
// web: the text forms a browser or Node.js process would emit or accept.

/// Whitespace trimmed around a numeric literal.
///
/// Unicode `White_Space` plus the byte order mark, minus NEL (U+0085).
fn is_literal_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Parses a numeric literal.
///
/// Accepts, after trimming surrounding whitespace:
/// - the empty string (zero)
/// - signed decimal literals with optional fraction and exponent (`-1.5e3`, `.5`, `5.`)
/// - `Infinity` with an optional sign
/// - unsigned `0x`, `0o` and `0b` prefixed integers
///
/// Returns `None` for anything else, including `inf`, `NaN` and digit separators.
pub fn parse_numeric_literal(text: &str) -> Option<f64> {
    let trimmed = text.trim_matches(is_literal_whitespace);
    if trimmed.is_empty() {
        return Some(0.0);
    }

    if let Some(value) = parse_prefixed_integer(trimmed) {
        return Some(value);
    }

    let (negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    if unsigned == "Infinity" {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    if !is_decimal_literal(unsigned) {
        return None;
    }

    // Grammar already checked; the std parser only has to produce the value
    let value: f64 = unsigned.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Parses `0x`/`0o`/`0b` integers. Signs are not allowed on these forms.
fn parse_prefixed_integer(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    match u128::from_str_radix(digits, radix) {
        Ok(value) => Some(value as f64),
        // Too wide for u128, fold into a float instead
        Err(_) => Some(digits.chars().fold(0.0, |acc, c| {
            acc * radix as f64 + c.to_digit(radix).unwrap_or(0) as f64
        })),
    }
}

/// Checks `digits [. digits?] [exp] | . digits [exp]` with no sign.
fn is_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut pos = 0;

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = pos - int_start;

    let mut frac_digits = 0;
    if pos < bytes.len() && bytes[pos] == b'.' {
        pos += 1;
        let frac_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        frac_digits = pos - frac_start;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        pos += 1;
        if pos < bytes.len() && (bytes[pos] == b'+' || bytes[pos] == b'-') {
            pos += 1;
        }
        let exp_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == exp_start {
            return false;
        }
    }

    pos == bytes.len()
}

/// Formats a number as canonical decimal text.
///
/// Integral values print without a fraction (`123`), negative zero prints as
/// `0`, and magnitudes outside `[1e-6, 1e21)` use exponent form with an
/// explicit exponent sign (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_literals() {
        assert_eq!(parse_numeric_literal("-123"), Some(-123.0));
        assert_eq!(parse_numeric_literal("+4.25"), Some(4.25));
        assert_eq!(parse_numeric_literal(".5"), Some(0.5));
        assert_eq!(parse_numeric_literal("5."), Some(5.0));
        assert_eq!(parse_numeric_literal("1e3"), Some(1000.0));
        assert_eq!(parse_numeric_literal("2E-2"), Some(0.02));
        assert_eq!(parse_numeric_literal("  42\n"), Some(42.0));
    }

    #[test]
    fn test_parse_blank_is_zero() {
        assert_eq!(parse_numeric_literal(""), Some(0.0));
        assert_eq!(parse_numeric_literal(" \t "), Some(0.0));
        assert_eq!(parse_numeric_literal("\u{feff}"), Some(0.0));
    }

    #[test]
    fn test_parse_prefixed_integers() {
        assert_eq!(parse_numeric_literal("0x1A"), Some(26.0));
        assert_eq!(parse_numeric_literal("0o17"), Some(15.0));
        assert_eq!(parse_numeric_literal("0B101"), Some(5.0));
        assert_eq!(parse_numeric_literal("-0x1A"), None);
        assert_eq!(parse_numeric_literal("0x"), None);
        assert_eq!(parse_numeric_literal("0x1G"), None);
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(parse_numeric_literal("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_numeric_literal("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_numeric_literal("inf"), None);
        assert_eq!(parse_numeric_literal("infinity"), None);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_numeric_literal("123abc"), None);
        assert_eq!(parse_numeric_literal("NaN"), None);
        assert_eq!(parse_numeric_literal("1_000"), None);
        assert_eq!(parse_numeric_literal("."), None);
        assert_eq!(parse_numeric_literal("1e"), None);
        assert_eq!(parse_numeric_literal("--1"), None);
        assert_eq!(parse_numeric_literal("1 2"), None);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(123.0), "123");
        assert_eq!(format_number(-123.5), "-123.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1e16), "10000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}
