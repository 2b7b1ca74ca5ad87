//! Error types for the formula engine.

use thiserror::Error;

/// Errors raised while turning formula text into an expression tree.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("unmatched \"(\" in {0:?}")]
    UnmatchedOpen(String),

    #[error("unmatched \")\" in {0:?}")]
    UnmatchedClose(String),

    #[error("operator and operand counts do not match")]
    UnbalancedOperators,

    #[error(transparent)]
    Invalid(#[from] InvalidExpression),
}

/// Errors raised when constructing an operation node.
#[derive(Error, Debug)]
pub enum InvalidExpression {
    #[error("unknown operator: {0:?}")]
    UnknownOperator(String),

    #[error("no arguments provided to operator {0:?}")]
    NoArguments(String),
}

/// Errors raised while evaluating an expression against sheet state.
#[derive(Error, Debug)]
pub enum EvalError {
    /// The expression is not reduced to a numeric constant.
    #[error("expression is not a number")]
    NotANumber,

    #[error("unknown identifier: {0}")]
    UnknownIdentifier(String),

    #[error("circular reference involving {0}")]
    CircularReference(String),

    #[error("division by zero")]
    DivisionByZero,
}
