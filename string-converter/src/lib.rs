//! FILENAME: string-converter/src/lib.rs
//! PURPOSE: Library root for the string conversion helpers.
//! CONTEXT: Every function here is a pure transformation of one input value.
//! Dynamically typed inputs are modelled by `Value`; functions that cannot
//! classify their input hand it back unchanged instead of failing.
//!
//! SUPPORTED CONVERSIONS:
//! - Space / character removal: "a b" -> "ab"
//! - Boolean coercion: "TRUE" -> true, 3 -> true, "maybe" -> "maybe"
//! - Null detection: null, "NULL"
//! - Delimiter splitting: "a , b,,c" -> ["a", "b", "c"]
//! - Number parsing: "1,234.56" -> 1234.56, "(987)" -> -987
//! - Column labels: "a" -> 0, "AA" -> 26, 702 -> "aaa"

pub mod coerce;
pub mod error;
pub mod number;
pub mod serial;
pub mod split;
pub mod text;
pub mod value;

// Re-export the public surface at the crate root
pub use coerce::{convert_bool_string, is_null};
pub use error::{ConversionError, Result};
pub use number::{parse_float_prefix, parse_number, string_to_number};
pub use serial::{alpha_to_serial, serial_to_alpha, serial_to_label, LetterCase};
pub use split::{split_by, split_by_colon, split_by_comma, split_by_semicolon, Delimiter};
pub use text::{remove_character, remove_space, strip_character, strip_spaces};
pub use value::Value;
