// ============================================================================
// Calculator Errors
// Error types for numeric-string arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing or computing numeric strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CalculatorError {
    /// Divisor (or share total) denotes zero, including negative zero
    InvalidDivisor,
    /// Input does not follow the numeric-string grammar
    MalformedOperand {
        /// The rejected input, verbatim
        input: String,
    },
    /// Value cannot be represented in the requested target type
    OutOfRange,
}

impl CalculatorError {
    pub(crate) fn malformed(input: impl Into<String>) -> Self {
        CalculatorError::MalformedOperand {
            input: input.into(),
        }
    }
}

impl fmt::Display for CalculatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculatorError::InvalidDivisor => {
                write!(f, "invalid divisor: division or modulus by zero")
            },
            CalculatorError::MalformedOperand { input } => {
                write!(f, "malformed operand: {:?} is not a numeric string", input)
            },
            CalculatorError::OutOfRange => {
                write!(f, "out of range: value does not fit the target type")
            },
        }
    }
}

impl std::error::Error for CalculatorError {}

/// Result type alias for calculator operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;
