//! # Unsigned decimal integers
//!
//! Addition with carries, subtraction with borrows.
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use itertools::{EitherOrBoth, Itertools};
use num::Zero;

use crate::data::number_types::decimal::{cmp_digits, Digit, DigitSequence, RADIX};
use crate::data::number_types::decimal::text;

/// A big unsigned integer type.
///
/// The digits are always normalized: at least one digit and no leading zeros.
#[derive(Eq, PartialEq, Clone, Debug, Hash)]
pub struct Unsigned {
    digits: DigitSequence,
}

impl Unsigned {
    /// Wrap a digit sequence, removing any leading zeros.
    ///
    /// An empty sequence is read as zero.
    pub fn new(mut digits: DigitSequence) -> Self {
        if digits.is_empty() {
            digits.push(0);
        }
        digits.trim_leading_zeros();

        Self { digits }
    }

    /// The digits, least significant first.
    pub fn digits(&self) -> &DigitSequence {
        &self.digits
    }

    /// Number of decimal digits, `1` for zero.
    pub fn number_of_digits(&self) -> usize {
        self.digits.len()
    }

    /// Subtraction that doesn't require `self >= rhs`.
    ///
    /// # Return value
    ///
    /// `None` if the difference would be negative.
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        match self.cmp(rhs) {
            Ordering::Less => None,
            _ => Some(Self { digits: sub(&self.digits, &rhs.digits) }),
        }
    }
}

/// Add two digit sequences.
///
/// The digits are walked in lockstep starting at the least significant digit, a missing digit
/// counts as zero. The walk continues as long as either side has digits left or a carry remains.
pub fn add(a: &DigitSequence, b: &DigitSequence) -> DigitSequence {
    let mut result = DigitSequence::with_capacity(a.len().max(b.len()) + 1);

    let mut carry = 0;
    for pair in a.iter().zip_longest(b.iter()) {
        let sum = carry + match pair {
            EitherOrBoth::Both(left, right) => left + right,
            EitherOrBoth::Left(digit) | EitherOrBoth::Right(digit) => digit,
        };
        result.push(sum % RADIX);
        carry = sum / RADIX;
    }
    if carry != 0 {
        result.push(carry);
    }
    result.trim_leading_zeros();

    result
}

/// Subtract digit sequence `b` from `a`.
///
/// Requires `a >= b`. This is only checked in debug builds: when it doesn't hold, the result is
/// wrong, not just of the wrong sign.
///
/// The whole of `a` is walked starting at the least significant digit, once `b` runs out its
/// digits count as zero.
pub fn sub(a: &DigitSequence, b: &DigitSequence) -> DigitSequence {
    debug_assert_ne!(cmp_digits(a, b), Ordering::Less);

    let mut result = DigitSequence::with_capacity(a.len());

    let mut borrow = 0;
    let mut subtrahend = b.iter();
    for digit in a.iter() {
        let subtracted = borrow + subtrahend.next().unwrap_or(0);
        let difference = if digit < subtracted {
            borrow = 1;
            digit + RADIX - subtracted
        } else {
            borrow = 0;
            digit - subtracted
        };
        result.push(difference);
    }
    debug_assert_eq!(borrow, 0);
    result.trim_leading_zeros();

    result
}

impl PartialOrd for Unsigned {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Unsigned {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_digits(&self.digits, &other.digits)
    }
}

impl fmt::Display for Unsigned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &text::format(&self.digits))
    }
}

impl From<&str> for Unsigned {
    /// Read the digits in the text, ignoring every other character.
    fn from(text: &str) -> Self {
        Self { digits: text::parse(text) }
    }
}

impl FromStr for Unsigned {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(text))
    }
}

impl From<u64> for Unsigned {
    fn from(mut value: u64) -> Self {
        let mut digits = DigitSequence::new();
        loop {
            digits.push((value % RADIX as u64) as Digit);
            value /= RADIX as u64;
            if value == 0 {
                break;
            }
        }

        Self { digits }
    }
}

impl Add for Unsigned {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add<&Unsigned> for &Unsigned {
    type Output = Unsigned;

    fn add(self, rhs: &Unsigned) -> Self::Output {
        Unsigned { digits: add(&self.digits, &rhs.digits) }
    }
}

impl AddAssign<&Self> for Unsigned {
    fn add_assign(&mut self, rhs: &Self) {
        *self = &*self + rhs;
    }
}

impl AddAssign for Unsigned {
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

impl Sub for Unsigned {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub<&Unsigned> for &Unsigned {
    type Output = Unsigned;

    /// Requires `self >= rhs`, see `checked_sub` otherwise.
    fn sub(self, rhs: &Unsigned) -> Self::Output {
        Unsigned { digits: sub(&self.digits, &rhs.digits) }
    }
}

impl SubAssign<&Self> for Unsigned {
    fn sub_assign(&mut self, rhs: &Self) {
        *self = &*self - rhs;
    }
}

impl SubAssign for Unsigned {
    fn sub_assign(&mut self, rhs: Self) {
        *self -= &rhs;
    }
}

impl Zero for Unsigned {
    fn zero() -> Self {
        Self { digits: DigitSequence::from(vec![0]) }
    }

    fn set_zero(&mut self) {
        self.digits.clear();
        self.digits.push(0);
    }

    fn is_zero(&self) -> bool {
        self.digits.as_slice() == [0]
    }
}
