// ============================================================================
// Domain Module
// Configuration types shared by the engine and its factory
// ============================================================================

pub mod config;

pub use config::{BackendKind, CalculatorConfig, MAX_DIVISION_SCALE};
