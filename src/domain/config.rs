// ============================================================================
// Calculator Configuration
// Backend choice and division precision, fixed once at construction
// ============================================================================

use crate::interfaces::DEFAULT_DIVISION_SCALE;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest accepted `division_scale`.
pub const MAX_DIVISION_SCALE: u32 = 200;

// ============================================================================
// Backend Kind
// ============================================================================

/// Which computation substrate backs the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BackendKind {
    /// Exact integer arithmetic on operands scaled by a power of ten
    /// (`num-bigint`)
    #[default]
    BigInteger,

    /// Arbitrary-precision decimal library (`bigdecimal`)
    Decimal,

    /// Digit-vector arithmetic with no big-number dependency
    Software,
}

impl BackendKind {
    /// Every backend, in declaration order.
    pub const ALL: [BackendKind; 3] = [
        BackendKind::BigInteger,
        BackendKind::Decimal,
        BackendKind::Software,
    ];
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::BigInteger => write!(f, "BigInteger"),
            BackendKind::Decimal => write!(f, "Decimal"),
            BackendKind::Software => write!(f, "Software"),
        }
    }
}

// ============================================================================
// Complete Calculator Configuration
// ============================================================================

/// Configuration for creating a calculator engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Backend strategy to instantiate
    pub backend: BackendKind,

    /// Fractional digits kept by divide and share (truncated toward zero)
    pub division_scale: u32,
}

impl CalculatorConfig {
    /// Create a new configuration for `backend` with the default division scale
    pub fn new(backend: BackendKind) -> Self {
        Self {
            backend,
            division_scale: DEFAULT_DIVISION_SCALE,
        }
    }

    /// Builder method: Set the division scale
    pub fn with_division_scale(mut self, division_scale: u32) -> Self {
        self.division_scale = division_scale;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.division_scale == 0 {
            return Err("Division scale must be positive".to_string());
        }

        if self.division_scale > MAX_DIVISION_SCALE {
            return Err(format!(
                "Division scale cannot exceed {} digits",
                MAX_DIVISION_SCALE
            ));
        }

        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::new(BackendKind::default())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CalculatorConfig {
    /// Big-integer backend, default division scale
    pub fn big_integer() -> Self {
        Self::new(BackendKind::BigInteger)
    }

    /// BigDecimal backend, default division scale
    pub fn decimal() -> Self {
        Self::new(BackendKind::Decimal)
    }

    /// Dependency-free software backend, default division scale
    pub fn software() -> Self {
        Self::new(BackendKind::Software)
    }
}
