//! FILENAME: string-converter/src/serial.rs
//! PURPOSE: Converts between alphabetic labels and 0-based serial numbers.
//! CONTEXT: Labels follow spreadsheet column naming, a bijective base-26
//! system where the letters a..z are the digits 1..26 and there is no zero.
//! "a" = 0, "z" = 25, "aa" = 26, "az" = 51, "ba" = 52, "zz" = 701, "aaa" = 702.
//! Input is case-insensitive; output case is chosen with `LetterCase`.

use crate::error::{ConversionError, Result};
use serde::{Deserialize, Serialize};

/// Case of the letters produced by `serial_to_alpha` and `serial_to_label`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LetterCase {
    #[default]
    Lower,
    Upper,
}

impl LetterCase {
    fn base(self) -> u8 {
        match self {
            LetterCase::Lower => b'a',
            LetterCase::Upper => b'A',
        }
    }
}

/// Converts a label (e.g., "a", "AA", "Bk") to its 0-based serial number.
///
/// # Errors
/// * `EmptyLabel` for "".
/// * `NonAlphabetic` for any character outside A-Z / a-z.
/// * `SerialOverflow` when the label is too long for a u64.
pub fn alpha_to_serial(label: &str) -> Result<u64> {
    if label.is_empty() {
        log::debug!("alpha_to_serial: empty label");
        return Err(ConversionError::EmptyLabel);
    }

    // u128 so that the label of u64::MAX (value 2^64 before the shift) fits
    let mut result: u128 = 0;
    for (position, c) in label.chars().enumerate() {
        if !c.is_ascii_alphabetic() {
            log::debug!("alpha_to_serial: rejected {:?} at {} in {:?}", c, position, label);
            return Err(ConversionError::NonAlphabetic { character: c, position });
        }
        let digit = (c.to_ascii_lowercase() as u128) - ('a' as u128) + 1;
        result = result
            .checked_mul(26)
            .and_then(|r| r.checked_add(digit))
            .ok_or(ConversionError::SerialOverflow)?;
    }

    // result >= 1 here, shift so that "a" is 0
    u64::try_from(result - 1).map_err(|_| ConversionError::SerialOverflow)
}

/// Converts a serial number in 0..=25 to its single letter.
///
/// Multi-letter labels are deliberately out of scope here; use
/// `serial_to_label` for those.
///
/// # Errors
/// `SerialOutOfRange` for serial >= 26.
pub fn serial_to_alpha(serial: u64, case: LetterCase) -> Result<char> {
    if serial >= 26 {
        log::debug!("serial_to_alpha: {} has no single-letter form", serial);
        return Err(ConversionError::SerialOutOfRange { serial });
    }
    Ok((case.base() + serial as u8) as char)
}

/// Converts any serial number to its full label.
/// 0 -> "a", 25 -> "z", 26 -> "aa", 701 -> "zz", 702 -> "aaa".
pub fn serial_to_label(serial: u64, case: LetterCase) -> String {
    let base = case.base();
    let mut letters = Vec::new();
    let mut n = serial;
    loop {
        letters.push(base + (n % 26) as u8);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters.iter().rev().map(|&b| b as char).collect()
}
