//! # Errors
//!
//! Reasons why an expression can't be evaluated.
use thiserror::Error;

/// Errors that can occur while reading an expression.
///
/// Operands themselves never fail to parse: any character that isn't a digit is skipped.
#[derive(Error, Debug, Eq, PartialEq, Clone)]
pub enum Parse {
    /// Not enough tokens to form `<operand> <operator> <operand>`.
    #[error("expected an expression of the form `A + B` or `A - B`, found {found} token(s)")]
    Incomplete {
        /// Number of whitespace separated tokens in the input.
        found: usize,
    },
    /// The operator token is something other than `+` or `-`.
    #[error("only + and - are supported, found \"{0}\"")]
    UnsupportedOperator(String),
}

impl Parse {
    /// Whether the caller should stop silently rather than report this error.
    ///
    /// Incomplete input is not treated as a failure: nothing is printed and the process still
    /// exits successfully.
    pub fn is_abstention(&self) -> bool {
        matches!(self, Parse::Incomplete { .. })
    }
}

/// Result of reading an expression.
pub type ParseResult<T> = Result<T, Parse>;
