//! # Decimal text
//!
//! Conversion between digit sequences and their decimal representation.
use crate::data::number_types::decimal::{Digit, DigitSequence};

/// Read the decimal digits in a text.
///
/// Characters that are not ASCII digits are skipped, so `"1_000"` reads as one thousand and a text
/// without any digits reads as zero. Never fails.
///
/// # Return value
///
/// A normalized sequence.
pub fn parse(text: &str) -> DigitSequence {
    let mut digits = DigitSequence::with_capacity(text.len());
    for character in text.chars().rev() {
        if let Some(value) = character.to_digit(10) {
            digits.push(value as Digit);
        }
    }

    if digits.is_empty() {
        digits.push(0);
    }
    digits.trim_leading_zeros();

    digits
}

/// Write the digits most significant first, without sign or separators.
pub fn format(digits: &DigitSequence) -> String {
    digits.iter()
        .rev()
        .map(|digit| char::from(b'0' + digit))
        .collect()
}
