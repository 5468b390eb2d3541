//! # Properties
//!
//! Algebraic properties of the decimal number types, checked against native integers where those
//! are wide enough.
use std::cmp::Ordering;

use num::Zero;
use proptest::prelude::*;

use bigsum::data::number_types::decimal::text;
use bigsum::data::number_types::{Signed, Unsigned};

/// Decimal text without leading zeros, up to 80 digits.
fn canonical_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("0".to_string()),
        "[1-9][0-9]{0,79}",
    ]
}

fn unsigned() -> impl Strategy<Value = Unsigned> {
    canonical_text().prop_map(|input| Unsigned::from(input.as_str()))
}

// Parsing the canonical text of a value gives back the same digits
proptest! {
    #[test]
    fn prop_round_trip(input in canonical_text()) {
        let digits = text::parse(&input);
        prop_assert_eq!(text::format(&digits), input);
        prop_assert_eq!(text::parse(&text::format(&digits)), digits);
    }
}

// Addition is commutative and zero is its identity
proptest! {
    #[test]
    fn prop_add_commutative(a in unsigned(), b in unsigned()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn prop_add_identity(a in unsigned()) {
        prop_assert_eq!(&a + &Unsigned::zero(), a);
    }
}

// Subtracting zero or the value itself
proptest! {
    #[test]
    fn prop_sub_identity(a in unsigned()) {
        prop_assert_eq!(&a - &Unsigned::zero(), a.clone());
        prop_assert!((&a - &a).is_zero());
    }

    #[test]
    fn prop_sub_inverts_add(a in unsigned(), b in unsigned()) {
        prop_assert_eq!(&(&a + &b) - &b, a);
    }
}

// Results never carry leading zeros
proptest! {
    #[test]
    fn prop_results_normalized(a in unsigned(), b in unsigned()) {
        prop_assert!((&a + &b).digits().is_normalized());

        let (larger, smaller) = if a >= b { (&a, &b) } else { (&b, &a) };
        prop_assert!((larger - smaller).digits().is_normalized());
    }
}

// Comparison is antisymmetric and reflexive
proptest! {
    #[test]
    fn prop_cmp_consistent(a in unsigned(), b in unsigned()) {
        prop_assert_eq!(a.cmp(&a), Ordering::Equal);
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }
}

// Agreement with native integers
proptest! {
    #[test]
    fn prop_unsigned_matches_u128(a in 0..u64::MAX, b in 0..u64::MAX) {
        let sum = Unsigned::from(a) + Unsigned::from(b);
        prop_assert_eq!(sum.to_string(), (a as u128 + b as u128).to_string());
        prop_assert_eq!(Unsigned::from(a).cmp(&Unsigned::from(b)), a.cmp(&b));
    }

    #[test]
    fn prop_signed_matches_i128(a in any::<i64>(), b in any::<i64>()) {
        let sum = Signed::from(a) + Signed::from(b);
        prop_assert_eq!(sum.to_string(), (a as i128 + b as i128).to_string());

        let difference = Signed::from(a) - Signed::from(b);
        prop_assert_eq!(difference.to_string(), (a as i128 - b as i128).to_string());
    }

    #[test]
    fn prop_signed_text(a in any::<i64>()) {
        prop_assert_eq!(Signed::from(a.to_string().as_str()), Signed::from(a));
        prop_assert_eq!(Signed::from(a).to_string(), a.to_string());
    }
}
