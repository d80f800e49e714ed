//! FILENAME: string-converter/src/text.rs
//! PURPOSE: Space and character removal.
//! CONTEXT: The `Value` entry points pass non-text input through untouched;
//! the `strip_*` functions are the plain `&str` forms they delegate to.

use crate::value::Value;

/// Removes every ASCII space (0x20). Other whitespace is kept.
pub fn strip_spaces(text: &str) -> String {
    text.chars().filter(|&c| c != ' ').collect()
}

/// Removes every occurrence of `character`, keeping the order of the rest.
pub fn strip_character(text: &str, character: char) -> String {
    text.chars().filter(|&c| c != character).collect()
}

/// Removes every space from a text value. Any other value is returned as is.
pub fn remove_space(value: Value) -> Value {
    match value {
        Value::Text(s) => Value::Text(strip_spaces(&s)),
        other => {
            log::trace!("remove_space: passing through non-text {:?}", other);
            other
        }
    }
}

/// Removes every literal occurrence of `character` from a text value.
///
/// If either argument is not text, `value` is returned unchanged. A
/// multi-character `character` is matched as a literal substring and removed
/// until none is left, so "aabb" without "ab" is "". An empty one removes
/// nothing.
pub fn remove_character(value: Value, character: &Value) -> Value {
    let pattern = match character.as_text() {
        Some(p) => p,
        None => {
            log::trace!("remove_character: non-text pattern {:?}", character);
            return value;
        }
    };

    match value {
        Value::Text(s) => {
            if pattern.is_empty() {
                return Value::Text(s);
            }
            // a removal can join its neighbours into a new match
            let mut out = s;
            while out.contains(pattern) {
                out = out.replace(pattern, "");
            }
            Value::Text(out)
        }
        other => {
            log::trace!("remove_character: passing through non-text {:?}", other);
            other
        }
    }
}
