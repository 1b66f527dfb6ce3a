//! Error types for calculator operations.

use thiserror::Error;

/// Category shared by every calculator error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An argument passed to the constructor or an operation was rejected.
    InvalidArgument,
}

/// Errors raised by [`Calculator`](crate::Calculator).
///
/// Both variants are invalid-argument errors. The message tells the two
/// triggers apart: `"no name"` for construction, `"divisor is zero"` for
/// division.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// The name was absent or its length was outside the accepted range.
    #[error("invalid argument: no name{}", describe_length(.length))]
    NoName { length: Option<usize> },

    /// The divisor was absent or zero.
    #[error("invalid argument: divisor is zero{}", describe_divisor(.divisor))]
    DivisorIsZero { divisor: Option<i32> },
}

impl CalculatorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoName { .. } | Self::DivisorIsZero { .. } => ErrorKind::InvalidArgument,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}

fn describe_length(length: &Option<usize>) -> String {
    match length {
        Some(len) => format!(" (got {len} code units)"),
        None => " (name is missing)".to_string(),
    }
}

fn describe_divisor(divisor: &Option<i32>) -> String {
    match divisor {
        Some(_) => String::new(),
        None => " (divisor is missing)".to_string(),
    }
}

pub type CalculatorResult<T> = Result<T, CalculatorError>;
