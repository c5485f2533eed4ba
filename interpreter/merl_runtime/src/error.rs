//! The error taxonomy of the evaluator.
//!
//! Errors are flat and tagged; each carries the printed form of the
//! offending value where one exists. The `#[error]` strings are the
//! user-visible messages and tests depend on their stability.

use thiserror::Error;

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, Error>;

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("variable '{0}' is unbound")]
    Unbound(String),
    #[error("'{lhs}' and '{rhs}' do not match")]
    NoMatch { lhs: String, rhs: String },
    #[error("'{0}' is not a number")]
    NotNumber(String),
    #[error("'{0}' is not a boolean")]
    NotBoolean(String),
    #[error("'{0}' is not a string")]
    NotString(String),
    #[error("'{0}' is not a valid name")]
    NotName(String),
    #[error("'{0}' is not a list")]
    NotList(String),
    #[error("'{0}' is not a function")]
    NotFunction(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("no true branch found")]
    NoTrueBranch,
    #[error("arguments do not match the function definition")]
    NoFunBranch,
    #[error("wrong number of arguments")]
    WrongNumberArgs,
    #[error("empty list")]
    EmptyList,
    /// Raised by `exit/1`; carries the printed reason. Caught by
    /// `try/recover` like every other error.
    #[error("exception exit: {0}")]
    Exit(String),
    /// Free-form error: parse errors surfaced through evaluation and the
    /// user-raised `error/1`.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Shorthand for a [`Error::Custom`] with a formatted message.
    pub fn custom(message: impl Into<String>) -> Self {
        Error::Custom(message.into())
    }

    /// The value is not a number.
    #[cold]
    pub fn not_number(value: &Value) -> Self {
        Error::NotNumber(value.to_string())
    }

    /// The value is not a boolean.
    #[cold]
    pub fn not_boolean(value: &Value) -> Self {
        Error::NotBoolean(value.to_string())
    }

    /// The value is not a string.
    #[cold]
    pub fn not_string(value: &Value) -> Self {
        Error::NotString(value.to_string())
    }

    /// The value is not a list.
    #[cold]
    pub fn not_list(value: &Value) -> Self {
        Error::NotList(value.to_string())
    }

    /// The two sides of a match do not unify.
    #[cold]
    pub fn no_match(lhs: impl ToString, rhs: impl ToString) -> Self {
        Error::NoMatch {
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
        }
    }
}
