// ============================================================================
// Numeric Module
// Canonical numeric strings, rounding policy and calculator errors
// ============================================================================
//
// This module provides:
// - NumericString: canonical arbitrary-length decimal parsed from text
// - RoundingMode / FractionClass: the tie-breaking policy shared by backends
// - IntoOperand: boundary conversions from strings, integers, floats, decimals
// - CalculatorError: error types for parsing and arithmetic
//
// Design principles:
// - No floating-point arithmetic
// - Fallible operations return Result (no panics)
// - One normalizing constructor, so equal values have equal representations

mod errors;
mod numeric_string;
mod operand;
mod rounding;

pub use errors::{CalculatorError, CalculatorResult};
pub use numeric_string::NumericString;
pub use operand::IntoOperand;
pub use rounding::{FractionClass, RoundingMode};
