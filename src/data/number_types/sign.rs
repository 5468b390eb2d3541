//! # Signs
use std::cmp::Ordering;
use std::ops::Neg;

/// Sign of a signed integer.
///
/// Zero is considered positive: there is no third variant for it. Types carrying a `Sign` should
/// make sure that a zero value is never paired with `Sign::Negative`.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// `x >= 0`
    Positive,
    /// `x < 0`
    Negative,
}

impl Sign {
    /// Read an optional leading sign character from the text.
    ///
    /// # Return value
    ///
    /// The sign, `Sign::Positive` if there is no sign character, and the remaining text without
    /// the sign character.
    pub fn split(text: &str) -> (Self, &str) {
        if let Some(rest) = text.strip_prefix('-') {
            (Sign::Negative, rest)
        } else if let Some(rest) = text.strip_prefix('+') {
            (Sign::Positive, rest)
        } else {
            (Sign::Positive, text)
        }
    }
}

impl PartialOrd for Sign {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Sign {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Sign::Positive, Sign::Positive) => Ordering::Equal,
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Negative, Sign::Negative) => Ordering::Equal,
        }
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}
