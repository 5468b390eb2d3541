//! # Data structures
//!
//! Number types used to evaluate expressions.
pub mod number_types;
