//! FILENAME: string-converter/src/number.rs
//! PURPOSE: Parses loosely formatted numeric text into f64.
//! CONTEXT: Accepts thousands separators ("1,234.56") and accounting-style
//! negatives ("(987.65)"). Parsing reads the longest numeric prefix and
//! ignores whatever follows, so "12px" is 12. Text with no numeric prefix
//! yields NaN rather than an error.

use crate::value::Value;
use once_cell::sync::Lazy;
use regex::Regex;

/// The whole string must be one parenthesized unsigned decimal.
static ACCOUNTING_NEGATIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(([0-9]+(?:\.[0-9]+)?)\)$").unwrap());

/// Converts a value to a number.
///
/// Text goes through `parse_number`. A number is returned as is. Booleans
/// and null have no numeric text form and give NaN.
pub fn string_to_number(value: &Value) -> f64 {
    match value {
        Value::Text(s) => parse_number(s),
        Value::Number(n) => *n,
        Value::Boolean(_) | Value::Null => f64::NAN,
    }
}

/// Parses numeric text after dropping commas and rewriting "(x)" as "-x".
pub fn parse_number(text: &str) -> f64 {
    let without_commas: String = text.chars().filter(|&c| c != ',').collect();

    match ACCOUNTING_NEGATIVE_RE.captures(&without_commas) {
        Some(caps) => {
            let normalized = format!("-{}", &caps[1]);
            log::trace!("parse_number: accounting notation {:?} -> {:?}", text, normalized);
            parse_float_prefix(&normalized)
        }
        None => parse_float_prefix(&without_commas),
    }
}

/// Parses the longest leading float literal of `text`.
///
/// Leading whitespace (see `is_number_whitespace`) is skipped. The literal
/// is an optional sign followed by either "Infinity" or
/// `digits[.digits][(e|E)[+-]digits]`, where one side of the decimal point
/// may be empty. An exponent marker without
/// digits is not part of the literal. Returns NaN when no literal is found.
pub fn parse_float_prefix(text: &str) -> f64 {
    let rest = text.trim_start_matches(is_number_whitespace);
    let bytes = rest.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            i = 1;
            true
        }
        Some(b'+') => {
            i = 1;
            false
        }
        _ => false,
    };

    if rest[i..].starts_with("Infinity") {
        return if negative { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < len && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        frac_digits = j - frac_start;
        if int_digits > 0 || frac_digits > 0 {
            i = j;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if i < len && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    rest[..i].parse::<f64>().unwrap_or(f64::NAN)
}

/// The whitespace that may precede a number: ASCII tab, line feed, vertical
/// tab, form feed, carriage return and space, the Unicode space separators,
/// the line/paragraph separators and the byte order mark. Unlike
/// `char::is_whitespace`, U+0085 (NEL) is not included.
pub(crate) fn is_number_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0b}' | '\u{0c}' | '\r' | ' ' | '\u{a0}' | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}' | '\u{2029}' | '\u{202f}' | '\u{205f}' | '\u{3000}' | '\u{feff}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_basics() {
        assert_eq!(parse_number("123"), 123.0);
        assert_eq!(parse_number("1,234,567"), 1234567.0);
        assert_eq!(parse_number("1,234.56"), 1234.56);
        assert_eq!(parse_number("-123.45"), -123.45);
        assert!(parse_number("abc").is_nan());
        assert!(parse_number("").is_nan());
    }

    #[test]
    fn test_accounting_negatives() {
        assert_eq!(parse_number("(987)"), -987.0);
        assert_eq!(parse_number("(987.65)"), -987.65);
        assert_eq!(parse_number("(1,234.50)"), -1234.5);
    }

    #[test]
    fn test_accounting_requires_whole_match() {
        // anything around the parentheses disables the rewrite
        assert!(parse_number(" (987)").is_nan());
        assert!(parse_number("(987) ").is_nan());
        assert!(parse_number("(-987)").is_nan());
        assert!(parse_number("(987.)").is_nan());
        assert!(parse_number("(.5)").is_nan());
        assert!(parse_number("total (987)").is_nan());
    }

    #[test]
    fn test_prefix_parsing() {
        assert_eq!(parse_float_prefix("12px"), 12.0);
        assert_eq!(parse_float_prefix("  3.5 apples"), 3.5);
        assert_eq!(parse_float_prefix("1.2.3"), 1.2);
        assert_eq!(parse_float_prefix("+7"), 7.0);
        assert_eq!(parse_float_prefix(".5"), 0.5);
        assert_eq!(parse_float_prefix("5."), 5.0);
        assert_eq!(parse_float_prefix("1e3"), 1000.0);
        assert_eq!(parse_float_prefix("2.5E-1x"), 0.25);
        assert_eq!(parse_float_prefix("1e"), 1.0);
        assert_eq!(parse_float_prefix("1e+"), 1.0);
        assert!(parse_float_prefix(".").is_nan());
        assert!(parse_float_prefix("-").is_nan());
        assert!(parse_float_prefix("e5").is_nan());
    }

    #[test]
    fn test_prefix_leading_whitespace() {
        assert_eq!(parse_float_prefix("\t\n 5"), 5.0);
        assert_eq!(parse_float_prefix("\u{a0}5"), 5.0);
        assert_eq!(parse_float_prefix("\u{feff}5"), 5.0);
        assert_eq!(parse_float_prefix("\u{3000}-2"), -2.0);
        assert!(parse_float_prefix("\u{85}5").is_nan());
        assert!(parse_float_prefix("\u{200b}5").is_nan());
    }

    #[test]
    fn test_prefix_infinity() {
        assert_eq!(parse_float_prefix("Infinity"), f64::INFINITY);
        assert_eq!(parse_float_prefix("-Infinityx"), f64::NEG_INFINITY);
        assert!(parse_float_prefix("inf").is_nan());
    }

    #[test]
    fn test_string_to_number_values() {
        assert_eq!(string_to_number(&Value::from("2,000")), 2000.0);
        assert_eq!(string_to_number(&Value::from(42)), 42.0);
        assert!(string_to_number(&Value::from(true)).is_nan());
        assert!(string_to_number(&Value::Null).is_nan());
    }
}
