// ============================================================================
// Engine Module
// Backend strategies, the engine facade and its factory
// ============================================================================

mod big_integer;
mod calculator_engine;
mod decimal;
mod software;

#[cfg(test)]
pub(crate) mod conformance;

pub mod factory;

pub use big_integer::BigIntegerCalculator;
pub use calculator_engine::CalculatorEngine;
pub use decimal::DecimalCalculator;
pub use factory::{create_calculator, create_from_config, CalculatorEngineBuilder};
pub use software::SoftwareCalculator;
