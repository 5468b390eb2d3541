//! # Expressions
//!
//! An expression is two operands separated by an operator: `<operand> <operator> <operand>`. The
//! three parts are separated by whitespace, anything after the second operand is ignored.
//!
//! Operands are read leniently, see `Signed::from`. Only the operator can be invalid.
use std::convert::TryFrom;
use std::fmt;

use crate::data::number_types::Signed;
use crate::io::error::{Parse, ParseResult};

/// Number of tokens in an expression.
const TOKENS: usize = 3;

/// Binary operators that can be evaluated.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
}

impl Operator {
    /// Text printed before the result of the operation.
    pub fn label(self) -> &'static str {
        match self {
            Operator::Add => "Sum",
            Operator::Subtract => "Difference",
        }
    }

    /// Apply the operator.
    ///
    /// Subtraction flips the sign of the right operand and adds.
    pub fn apply(self, left: Signed, right: Signed) -> Signed {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
        }
    }
}

impl TryFrom<&str> for Operator {
    type Error = Parse;

    fn try_from(token: &str) -> Result<Self, Self::Error> {
        match token {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            other => Err(Parse::UnsupportedOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
        })
    }
}

/// A parsed, not yet evaluated, expression.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Expression {
    /// Left operand.
    pub left: Signed,
    /// Operation to apply.
    pub operator: Operator,
    /// Right operand.
    pub right: Signed,
}

impl Expression {
    /// Compute the value of the expression.
    pub fn evaluate(self) -> Evaluation {
        let Expression { left, operator, right } = self;
        tracing::debug!(%left, %operator, %right, "evaluating");

        Evaluation { operator, value: operator.apply(left, right) }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator, self.right)
    }
}

/// Outcome of evaluating an expression.
///
/// Displays as the output line, for example `Difference = -7`.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Evaluation {
    /// The operator that was applied, determines the label.
    pub operator: Operator,
    /// The result.
    pub value: Signed,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.operator.label(), self.value)
    }
}

/// Parse an expression from text.
///
/// # Arguments
///
/// * `text`: Input containing at least three whitespace separated tokens.
///
/// # Return value
///
/// The operands and operator.
///
/// # Errors
///
/// `Parse::Incomplete` when there are fewer than three tokens, `Parse::UnsupportedOperator` when
/// the middle token is not `+` or `-`.
pub fn parse(text: &impl AsRef<str>) -> ParseResult<Expression> {
    let tokens = text.as_ref().split_whitespace().take(TOKENS).collect::<Vec<_>>();
    tracing::debug!(?tokens, "tokenized input");

    match tokens[..] {
        [left, operator, right] => {
            let operator = Operator::try_from(operator)?;

            Ok(Expression {
                left: Signed::from(left),
                operator,
                right: Signed::from(right),
            })
        },
        _ => Err(Parse::Incomplete { found: tokens.len() }),
    }
}

/// Parse and evaluate an expression.
///
/// # Errors
///
/// See `parse`.
pub fn evaluate(text: &impl AsRef<str>) -> ParseResult<Evaluation> {
    parse(text).map(Expression::evaluate)
}
