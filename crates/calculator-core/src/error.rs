//! Error types for calculator operations.
//!
//! Every variant is a domain failure: an expected condition that the HTTP
//! boundary reports as a client error. The `Display` text of each variant is
//! the exact message returned to callers.

use thiserror::Error;

use crate::operations::Operation;

/// A specialized Result type for calculator operations.
pub type CalcResult<T> = Result<T, CalcError>;

/// How many numeric inputs an operation consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// One input (`num1`).
    Single,
    /// Two inputs (`num1`, `num2`).
    Pair,
}

/// Errors that can occur while validating inputs or evaluating an operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// A required input was absent.
    #[error("{}", missing_input_message(.0))]
    MissingInput(Arity),

    /// An input was present but is not a finite decimal number.
    #[error("{}", invalid_number_message(.0))]
    InvalidNumber(Arity),

    /// The divisor of a division or modulo was exactly zero.
    #[error("{}", zero_divisor_message(.operation))]
    DivisionByZero {
        /// The operation that was attempted.
        operation: Operation,
    },

    /// Square root of a negative number.
    #[error("Cannot calculate square root of a negative number")]
    NegativeRadicand,
}

fn missing_input_message(arity: &Arity) -> &'static str {
    match arity {
        Arity::Single => "Number is required",
        Arity::Pair => "Both numbers are required",
    }
}

fn invalid_number_message(arity: &Arity) -> &'static str {
    match arity {
        Arity::Single => "Invalid input - Parameter must be a number",
        Arity::Pair => "Invalid input - Both parameters must be numbers",
    }
}

fn zero_divisor_message(operation: &Operation) -> &'static str {
    match operation {
        Operation::Modulo => "Modulo by zero is not allowed",
        _ => "Division by zero is not allowed",
    }
}

impl CalcError {
    /// Creates a division-by-zero error for the given operation.
    #[must_use]
    pub fn division_by_zero(operation: Operation) -> Self {
        Self::DivisionByZero { operation }
    }

    /// Returns true for failures caused by malformed or missing input, as
    /// opposed to arithmetic domain violations.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingInput(_) | Self::InvalidNumber(_))
    }
}
