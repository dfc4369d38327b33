// ============================================================================
// Calculator Factory
// Creates calculator backends and engines from configuration
// ============================================================================

use crate::domain::config::{BackendKind, CalculatorConfig};
use crate::engine::{BigIntegerCalculator, CalculatorEngine, DecimalCalculator, SoftwareCalculator};
use crate::interfaces::Calculator;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator engine from configuration
///
/// # Arguments
/// * `config` - Backend choice and division scale
///
/// # Returns
/// * `Result<CalculatorEngine, String>` - Configured engine or validation error
///
/// # Example
/// ```
/// use decimal_calculator::prelude::*;
///
/// let engine = create_from_config(CalculatorConfig::software()).unwrap();
/// assert_eq!(engine.backend_name(), "Software");
/// assert_eq!(engine.add("0.1", "0.2").unwrap().to_string(), "0.3");
/// ```
pub fn create_from_config(config: CalculatorConfig) -> Result<CalculatorEngine, String> {
    let calculator = create_calculator(config.backend, config.division_scale)?;

    Ok(CalculatorEngine::new(calculator))
}

/// Creates the backend for `kind` keeping `division_scale` quotient digits
///
/// # Returns
/// * `Result<Box<dyn Calculator>, String>` - Backend, or the validation error
///   when `division_scale` is outside `1..=MAX_DIVISION_SCALE`
pub fn create_calculator(
    kind: BackendKind,
    division_scale: u32,
) -> Result<Box<dyn Calculator>, String> {
    CalculatorConfig::new(kind)
        .with_division_scale(division_scale)
        .validate()?;

    let calculator: Box<dyn Calculator> = match kind {
        BackendKind::BigInteger => {
            Box::new(BigIntegerCalculator::with_division_scale(division_scale))
        },
        BackendKind::Decimal => Box::new(DecimalCalculator::with_division_scale(division_scale)),
        BackendKind::Software => Box::new(SoftwareCalculator::with_division_scale(division_scale)),
    };

    Ok(calculator)
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating calculator engines with fluent API
///
/// # Example
/// ```
/// use decimal_calculator::prelude::*;
///
/// let engine = CalculatorEngineBuilder::new()
///     .decimal()
///     .with_division_scale(10)
///     .build()
///     .unwrap();
///
/// assert_eq!(engine.divide(1, 3).unwrap().to_string(), "0.3333333333");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalculatorEngineBuilder {
    config: CalculatorConfig,
}

impl CalculatorEngineBuilder {
    /// Create a new builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Backend Configuration
    // ========================================================================

    /// Use the big-integer backend (default)
    pub fn big_integer(mut self) -> Self {
        self.config.backend = BackendKind::BigInteger;
        self
    }

    /// Use the BigDecimal backend
    pub fn decimal(mut self) -> Self {
        self.config.backend = BackendKind::Decimal;
        self
    }

    /// Use the software backend
    pub fn software(mut self) -> Self {
        self.config.backend = BackendKind::Software;
        self
    }

    /// Use the backend named by `kind`
    pub fn backend(mut self, kind: BackendKind) -> Self {
        self.config.backend = kind;
        self
    }

    // ========================================================================
    // Additional Configuration
    // ========================================================================

    /// Set the number of fractional digits kept by divide and share
    pub fn with_division_scale(mut self, division_scale: u32) -> Self {
        self.config.division_scale = division_scale;
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the calculator engine
    pub fn build(self) -> Result<CalculatorEngine, String> {
        create_from_config(self.config)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &CalculatorConfig {
        &self.config
    }
}
