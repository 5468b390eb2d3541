//! # Digit sequences
//!
//! Storage for the digits of a non-negative integer.
use std::slice;

use crate::data::number_types::decimal::{Digit, RADIX};

/// Decimal digits of a non-negative integer, least significant digit first.
///
/// Index `0` holds the ones, index `1` the tens, and so on. The most significant digit is at the
/// end, so growing the number is a push.
///
/// This type does not maintain any invariant by itself. The number types built on it keep the
/// sequence non-empty and without leading zeros, see `trim_leading_zeros`.
#[derive(Eq, PartialEq, Clone, Debug, Default, Hash)]
pub struct DigitSequence {
    low_to_high: Vec<Digit>,
}

impl DigitSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self { low_to_high: Vec::new() }
    }

    /// Create an empty sequence that can hold `capacity` digits without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { low_to_high: Vec::with_capacity(capacity) }
    }

    /// Append a digit at the most significant end.
    ///
    /// # Arguments
    ///
    /// * `digit`: Value in `0..=9`.
    pub fn push(&mut self, digit: Digit) {
        debug_assert!(digit < RADIX);

        self.low_to_high.push(digit);
    }

    /// The most significant digit, or `0` for an empty sequence.
    pub fn last(&self) -> Digit {
        self.low_to_high.last().copied().unwrap_or(0)
    }

    /// Remove the most significant digit, if there is one.
    pub fn pop_last(&mut self) {
        self.low_to_high.pop();
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.low_to_high.len()
    }

    /// Whether there are no digits at all.
    ///
    /// Only a transient state: zero is `[0]`, not `[]`.
    pub fn is_empty(&self) -> bool {
        self.low_to_high.is_empty()
    }

    /// Iterate from the least significant to the most significant digit.
    pub fn iter(&self) -> Digits<'_> {
        self.low_to_high.iter().copied()
    }

    /// Remove all digits.
    pub fn clear(&mut self) {
        self.low_to_high.clear();
    }

    /// Remove redundant zeros at the most significant end.
    ///
    /// At least one digit is kept, so `[0, 0, 0]` becomes `[0]`.
    pub fn trim_leading_zeros(&mut self) {
        while self.len() > 1 && self.last() == 0 {
            self.pop_last();
        }

        tracing::trace!(digits = self.len(), "trimmed leading zeros");
    }

    /// Whether the sequence satisfies the invariant of the number types.
    ///
    /// Not empty, all values in range, and no zero at the most significant end unless the
    /// sequence is exactly `[0]`.
    pub fn is_normalized(&self) -> bool {
        match self.low_to_high.as_slice() {
            [] => false,
            [single] => *single < RADIX,
            [.., last] => *last != 0 && self.low_to_high.iter().all(|&digit| digit < RADIX),
        }
    }

    /// The digits as a slice, least significant first.
    pub fn as_slice(&self) -> &[Digit] {
        &self.low_to_high
    }
}

/// Iterator over the digits of a `DigitSequence`, least significant first.
pub type Digits<'a> = std::iter::Copied<slice::Iter<'a, Digit>>;

impl From<Vec<Digit>> for DigitSequence {
    /// Take digits ordered least significant first.
    fn from(low_to_high: Vec<Digit>) -> Self {
        debug_assert!(low_to_high.iter().all(|&digit| digit < RADIX));

        Self { low_to_high }
    }
}

impl<'a> IntoIterator for &'a DigitSequence {
    type Item = Digit;
    type IntoIter = Digits<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
