//! FILENAME: string-converter/src/split.rs
//! PURPOSE: Splits delimited lists such as "a, b ,c" into their items.
//! CONTEXT: Whitespace touching a delimiter is consumed with it. Empty items
//! (leading, trailing or doubled delimiters) are dropped. Whitespace at the
//! ends of the input that does not touch a delimiter is kept. The
//! whitespace set is the one `parse_float_prefix` skips (BOM included, NEL
//! excluded), not the regex crate's Unicode `\s`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Character class mirroring `number::is_number_whitespace`.
const SPACE_CLASS: &str =
    r"[\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

static COMMA_RE: Lazy<Regex> = Lazy::new(|| delimiter_regex(','));
static COLON_RE: Lazy<Regex> = Lazy::new(|| delimiter_regex(':'));
static SEMICOLON_RE: Lazy<Regex> = Lazy::new(|| delimiter_regex(';'));

fn delimiter_regex(delimiter: char) -> Regex {
    Regex::new(&format!("{0}*{1}{0}*", SPACE_CLASS, delimiter)).unwrap()
}

/// The list separators understood by `split_by`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Delimiter {
    Comma,
    Colon,
    Semicolon,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Colon => ':',
            Delimiter::Semicolon => ';',
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Delimiter::Comma => &COMMA_RE,
            Delimiter::Colon => &COLON_RE,
            Delimiter::Semicolon => &SEMICOLON_RE,
        }
    }
}

/// Splits `text` on `delimiter`, dropping empty items.
pub fn split_by(text: &str, delimiter: Delimiter) -> Vec<String> {
    delimiter
        .pattern()
        .split(text)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn split_by_comma(text: &str) -> Vec<String> {
    split_by(text, Delimiter::Comma)
}

pub fn split_by_colon(text: &str) -> Vec<String> {
    split_by(text, Delimiter::Colon)
}

pub fn split_by_semicolon(text: &str) -> Vec<String> {
    split_by(text, Delimiter::Semicolon)
}
