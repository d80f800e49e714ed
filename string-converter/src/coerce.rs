//! FILENAME: string-converter/src/coerce.rs
//! PURPOSE: Boolean coercion and null detection.
//! CONTEXT: Neither function ever fails. `convert_bool_string` hands back
//! anything it cannot read as a boolean, so callers must check the variant
//! of the result when they need a strict boolean.

use crate::value::Value;

/// Coerces a number or a "true"/"false" string into a boolean.
///
/// - `Number(n)` becomes `Boolean(n > 0)`; zero, negatives and NaN are false.
/// - `Text` matching "true" or "false" (any ASCII case) becomes the boolean.
///   Case folding is ASCII-only, so look-alikes such as "falſe" pass through.
/// - Everything else, including other text, is returned unchanged.
pub fn convert_bool_string(value: Value) -> Value {
    match value {
        Value::Number(n) => Value::Boolean(n > 0.0),
        Value::Text(s) => {
            if s.eq_ignore_ascii_case("true") {
                Value::Boolean(true)
            } else if s.eq_ignore_ascii_case("false") {
                Value::Boolean(false)
            } else {
                log::trace!("convert_bool_string: passing through {:?}", s);
                Value::Text(s)
            }
        }
        other => other,
    }
}

/// Returns true for `Null` and for the text "NULL" in any ASCII case.
pub fn is_null(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Text(s) => s.eq_ignore_ascii_case("null"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_from_text() {
        assert_eq!(convert_bool_string(Value::from("true")), Value::Boolean(true));
        assert_eq!(convert_bool_string(Value::from("TRUE")), Value::Boolean(true));
        assert_eq!(convert_bool_string(Value::from("TrUe")), Value::Boolean(true));
        assert_eq!(convert_bool_string(Value::from("false")), Value::Boolean(false));
        assert_eq!(convert_bool_string(Value::from("FALSE")), Value::Boolean(false));
    }

    #[test]
    fn test_bool_from_number() {
        assert_eq!(convert_bool_string(Value::from(1)), Value::Boolean(true));
        assert_eq!(convert_bool_string(Value::from(100)), Value::Boolean(true));
        assert_eq!(convert_bool_string(Value::from(0.001)), Value::Boolean(true));
        assert_eq!(convert_bool_string(Value::from(0)), Value::Boolean(false));
        assert_eq!(convert_bool_string(Value::from(-1)), Value::Boolean(false));
        assert_eq!(convert_bool_string(Value::Number(f64::NAN)), Value::Boolean(false));
    }

    #[test]
    fn test_bool_passthrough() {
        assert_eq!(
            convert_bool_string(Value::from("not a boolean")),
            Value::from("not a boolean")
        );
        assert_eq!(convert_bool_string(Value::from(" true")), Value::from(" true"));
        assert_eq!(convert_bool_string(Value::from("")), Value::from(""));
        // long s is not folded to 'S'
        assert_eq!(convert_bool_string(Value::from("falſe")), Value::from("falſe"));
        assert_eq!(convert_bool_string(Value::Null), Value::Null);
        assert_eq!(convert_bool_string(Value::from(false)), Value::Boolean(false));
    }

    #[test]
    fn test_bool_idempotent_on_booleans() {
        for input in [Value::from("TRUE"), Value::from(5), Value::from("no")] {
            let once = convert_bool_string(input);
            let twice = convert_bool_string(once.clone());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_is_null() {
        assert!(is_null(&Value::Null));
        assert!(is_null(&Value::from("null")));
        assert!(is_null(&Value::from("Null")));
        assert!(is_null(&Value::from("NULL")));
        assert!(!is_null(&Value::from(0)));
        assert!(!is_null(&Value::from("")));
        assert!(!is_null(&Value::from(" null")));
        assert!(!is_null(&Value::from(false)));
    }
}
