//! # Number types
//!
//! Arbitrary precision decimal integers and their signs.
pub use decimal::signed::Signed;
pub use decimal::unsigned::Unsigned;
pub use sign::Sign;

pub mod decimal;
pub mod sign;
