//! # Reading expressions
//!
//! Turning text like `12 - -340` into numbers and an operator, and evaluating it.
pub mod error;
pub mod expression;
