// ============================================================================
// Decimal Calculator Library
// Arbitrary-precision decimal arithmetic over numeric strings with pluggable backends
// ============================================================================

//! # Decimal Calculator
//!
//! Exact decimal arithmetic on canonical numeric strings, computed by one of
//! several interchangeable backends that all produce identical output.
//!
//! ## Features
//!
//! - **Canonical numeric strings**: `"1.50"`, `"01.5"` and `"1.5"` are one value
//! - **Pluggable backends** (big-integer, `bigdecimal`, digit-vector software)
//! - **Exact add, subtract, multiply**; divide and share truncate at a fixed scale
//! - **Nine rounding modes** shared by every backend
//! - **Mixed operands**: strings, integers, floats and `rust_decimal::Decimal`
//!
//! ## Example
//!
//! ```rust
//! use decimal_calculator::prelude::*;
//!
//! // Create an engine on the big-integer backend
//! let engine = CalculatorEngineBuilder::new().big_integer().build().unwrap();
//!
//! assert_eq!(engine.multiply("100", "0.0029").unwrap().to_string(), "0.29");
//! assert_eq!(engine.share(10, 2, 4).unwrap().to_string(), "5");
//! assert_eq!(engine.modulus("-13", "5").unwrap().to_string(), "-3");
//! assert_eq!(engine.round("2.5", RoundingMode::HalfEven).unwrap().to_string(), "2");
//!
//! // Division by zero (or negative zero) is rejected
//! assert_eq!(engine.divide(1, "-0"), Err(CalculatorError::InvalidDivisor));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{BackendKind, CalculatorConfig};
    pub use crate::engine::{
        create_calculator, create_from_config, BigIntegerCalculator, CalculatorEngine,
        CalculatorEngineBuilder, DecimalCalculator, SoftwareCalculator,
    };
    pub use crate::interfaces::{Calculator, DEFAULT_DIVISION_SCALE};
    pub use crate::numeric::{
        CalculatorError, CalculatorResult, IntoOperand, NumericString, RoundingMode,
    };
}
