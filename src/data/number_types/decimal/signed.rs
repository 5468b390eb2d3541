//! # Signed decimal integers
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};

use num::Zero;

use crate::data::number_types::decimal::unsigned::Unsigned;
use crate::data::number_types::sign::Sign;

/// A big signed integer type.
///
/// Zero is always positive.
#[derive(Eq, PartialEq, Clone, Debug, Hash)]
pub struct Signed {
    sign: Sign,
    magnitude: Unsigned,
}

impl Signed {
    /// Combine a sign and a magnitude.
    ///
    /// A negative sign on a zero magnitude is dropped.
    pub fn new(sign: Sign, magnitude: Unsigned) -> Self {
        let sign = if magnitude.is_zero() { Sign::Positive } else { sign };

        Self { sign, magnitude }
    }

    /// Whether the value is positive or negative; zero is positive.
    pub fn signum(&self) -> Sign {
        self.sign
    }

    /// Absolute value.
    pub fn magnitude(&self) -> &Unsigned {
        &self.magnitude
    }

    /// Split into sign and absolute value.
    pub fn into_parts(self) -> (Sign, Unsigned) {
        (self.sign, self.magnitude)
    }

    /// Whether `x < 0`.
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }
}

impl From<&str> for Signed {
    /// Read an optional leading `+` or `-`, followed by the digits of the magnitude.
    ///
    /// Like `Unsigned`, characters that are not digits are skipped.
    fn from(text: &str) -> Self {
        let (sign, digits) = Sign::split(text);

        Self::new(sign, Unsigned::from(digits))
    }
}

impl From<Unsigned> for Signed {
    fn from(magnitude: Unsigned) -> Self {
        Self { sign: Sign::Positive, magnitude }
    }
}

impl From<i64> for Signed {
    fn from(value: i64) -> Self {
        let sign = if value < 0 { Sign::Negative } else { Sign::Positive };

        Self::new(sign, Unsigned::from(value.unsigned_abs()))
    }
}

impl fmt::Display for Signed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.magnitude.to_string();
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

impl PartialOrd for Signed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Signed {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Positive) => self.magnitude.cmp(&other.magnitude),
            (Sign::Negative, Sign::Negative) => other.magnitude.cmp(&self.magnitude),
            (left, right) => left.cmp(&right),
        }
    }
}

impl Neg for Signed {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.sign, self.magnitude)
    }
}

impl Add for Signed {
    type Output = Self;

    /// Add when the signs agree, otherwise subtract the smaller magnitude from the larger one.
    fn add(self, rhs: Self) -> Self::Output {
        if self.sign == rhs.sign {
            tracing::debug!(sign = ?self.sign, "equal signs, adding magnitudes");
            return Self::new(self.sign, self.magnitude + rhs.magnitude);
        }

        match self.magnitude.cmp(&rhs.magnitude) {
            Ordering::Equal => {
                tracing::debug!("opposite signs with equal magnitudes");
                Self::zero()
            },
            Ordering::Greater => {
                tracing::debug!(sign = ?self.sign, "left magnitude is larger, subtracting right");
                Self::new(self.sign, self.magnitude - rhs.magnitude)
            },
            Ordering::Less => {
                tracing::debug!(sign = ?rhs.sign, "right magnitude is larger, subtracting left");
                Self::new(rhs.sign, rhs.magnitude - self.magnitude)
            },
        }
    }
}

impl Sub for Signed {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

impl Zero for Signed {
    fn zero() -> Self {
        Self { sign: Sign::Positive, magnitude: Unsigned::zero() }
    }

    fn set_zero(&mut self) {
        self.sign = Sign::Positive;
        self.magnitude.set_zero();
    }

    fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
}
