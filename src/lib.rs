//! # bigsum
//!
//! Exact addition and subtraction of decimal integers of any length.
//!
//! Numbers are stored as sequences of decimal digits, least significant digit first. The
//! [`data`] module contains the number types and their arithmetic, the [`io`] module reads
//! expressions like `12 - -340` from text.
#![warn(missing_docs)]

pub mod data;
pub mod io;
