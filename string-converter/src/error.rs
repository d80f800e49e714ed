//! FILENAME: string-converter/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Column label is empty")]
    EmptyLabel,

    #[error("Non-alphabetic character '{character}' at position {position}")]
    NonAlphabetic { character: char, position: usize },

    #[error("Column label is too long to fit a serial number")]
    SerialOverflow,

    #[error("Serial {serial} has no single-letter form (expected 0..=25)")]
    SerialOutOfRange { serial: u64 },
}

pub type Result<T> = std::result::Result<T, ConversionError>;
