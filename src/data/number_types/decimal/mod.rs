//! # Decimal integers
//!
//! Integers of any size, stored as a sequence of base 10 digits with the least significant digit
//! first.
use std::cmp::Ordering;

pub use sequence::DigitSequence;

pub mod sequence;
pub mod text;
pub mod unsigned;
pub mod signed;

/// A single decimal digit, always in `0..=9`.
pub type Digit = u8;

/// The base of the representation.
pub const RADIX: Digit = 10;

/// Compare the magnitudes of two normalized digit sequences.
///
/// A longer sequence is larger, because neither sequence has leading zeros. Sequences of equal
/// length are compared starting at the most significant digit.
pub fn cmp_digits(a: &DigitSequence, b: &DigitSequence) -> Ordering {
    debug_assert!(a.is_normalized());
    debug_assert!(b.is_normalized());

    match Ord::cmp(&a.len(), &b.len()) {
        Ordering::Equal => Iterator::cmp(a.iter().rev(), b.iter().rev()),
        other => other,
    }
}
