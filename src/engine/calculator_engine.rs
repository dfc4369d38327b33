// ============================================================================
// Calculator Engine
// Boundary facade: normalizes operands, dispatches to the active backend
// ============================================================================

use crate::interfaces::Calculator;
use crate::numeric::{CalculatorResult, IntoOperand, NumericString, RoundingMode};
use std::cmp::Ordering;
use std::fmt;

/// Stateless calculator with a pluggable backend strategy.
///
/// Operands may be numeric strings, integers, floats or
/// `rust_decimal::Decimal` values; each is converted into a canonical
/// `NumericString` before the backend sees it, so malformed input fails
/// here and never reaches the arithmetic.
///
/// The backend is chosen once, at construction. Every method is a pure
/// function of its arguments, so one engine can be shared across threads.
pub struct CalculatorEngine {
    /// Pluggable arithmetic backend
    calculator: Box<dyn Calculator>,
}

impl CalculatorEngine {
    /// Create a new engine around `calculator`
    pub fn new(calculator: Box<dyn Calculator>) -> Self {
        tracing::debug!(
            backend = calculator.name(),
            division_scale = calculator.division_scale(),
            "calculator engine created"
        );
        Self { calculator }
    }

    /// Name of the active backend
    pub fn backend_name(&self) -> &'static str {
        self.calculator.name()
    }

    /// Fractional digits kept by `divide` and `share`
    pub fn division_scale(&self) -> u32 {
        self.calculator.division_scale()
    }

    /// Borrow the backend directly (operands must already be canonical)
    pub fn calculator(&self) -> &dyn Calculator {
        self.calculator.as_ref()
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Exact sum `a + b`.
    pub fn add(&self, a: impl IntoOperand, b: impl IntoOperand) -> CalculatorResult<NumericString> {
        let (a, b) = (a.into_operand()?, b.into_operand()?);
        tracing::trace!(backend = self.backend_name(), %a, %b, "add");
        Ok(self.calculator.add(&a, &b))
    }

    /// Exact difference `a - b`.
    pub fn subtract(
        &self,
        a: impl IntoOperand,
        b: impl IntoOperand,
    ) -> CalculatorResult<NumericString> {
        let (a, b) = (a.into_operand()?, b.into_operand()?);
        tracing::trace!(backend = self.backend_name(), %a, %b, "subtract");
        Ok(self.calculator.subtract(&a, &b))
    }

    /// Exact product `a × b`.
    pub fn multiply(
        &self,
        a: impl IntoOperand,
        b: impl IntoOperand,
    ) -> CalculatorResult<NumericString> {
        let (a, b) = (a.into_operand()?, b.into_operand()?);
        tracing::trace!(backend = self.backend_name(), %a, %b, "multiply");
        Ok(self.calculator.multiply(&a, &b))
    }

    /// Quotient `a / b`, truncated after `division_scale()` digits.
    ///
    /// # Errors
    /// - `MalformedOperand` if either operand cannot be parsed
    /// - `InvalidDivisor` if `b` is zero or negative zero
    pub fn divide(
        &self,
        a: impl IntoOperand,
        b: impl IntoOperand,
    ) -> CalculatorResult<NumericString> {
        let (a, b) = (a.into_operand()?, b.into_operand()?);
        tracing::trace!(backend = self.backend_name(), %a, %b, "divide");
        self.calculator.divide(&a, &b)
    }

    /// Smallest integer >= `a`.
    pub fn ceil(&self, a: impl IntoOperand) -> CalculatorResult<NumericString> {
        let a = a.into_operand()?;
        tracing::trace!(backend = self.backend_name(), %a, "ceil");
        Ok(self.calculator.ceil(&a))
    }

    /// Largest integer <= `a`.
    pub fn floor(&self, a: impl IntoOperand) -> CalculatorResult<NumericString> {
        let a = a.into_operand()?;
        tracing::trace!(backend = self.backend_name(), %a, "floor");
        Ok(self.calculator.floor(&a))
    }

    /// `|a|`.
    pub fn absolute(&self, a: impl IntoOperand) -> CalculatorResult<NumericString> {
        let a = a.into_operand()?;
        tracing::trace!(backend = self.backend_name(), %a, "absolute");
        Ok(self.calculator.absolute(&a))
    }

    /// Round `a` to an integer with `mode`.
    pub fn round(
        &self,
        a: impl IntoOperand,
        mode: RoundingMode,
    ) -> CalculatorResult<NumericString> {
        let a = a.into_operand()?;
        tracing::trace!(backend = self.backend_name(), %a, %mode, "round");
        Ok(self.calculator.round(&a, mode))
    }

    /// Compare by value (`"1.0"` equals `"1"`).
    pub fn compare(&self, a: impl IntoOperand, b: impl IntoOperand) -> CalculatorResult<Ordering> {
        let (a, b) = (a.into_operand()?, b.into_operand()?);
        tracing::trace!(backend = self.backend_name(), %a, %b, "compare");
        Ok(self.calculator.compare(&a, &b))
    }

    /// Truncated remainder of `a / b`, signed like `a`.
    ///
    /// # Errors
    /// - `MalformedOperand` if either operand cannot be parsed
    /// - `InvalidDivisor` if `b` is zero or negative zero
    pub fn modulus(
        &self,
        a: impl IntoOperand,
        b: impl IntoOperand,
    ) -> CalculatorResult<NumericString> {
        let (a, b) = (a.into_operand()?, b.into_operand()?);
        tracing::trace!(backend = self.backend_name(), %a, %b, "modulus");
        self.calculator.modulus(&a, &b)
    }

    /// `value × ratio / total` in one fused step.
    ///
    /// # Errors
    /// - `MalformedOperand` if any operand cannot be parsed
    /// - `InvalidDivisor` if `total` is zero
    pub fn share(
        &self,
        value: impl IntoOperand,
        ratio: impl IntoOperand,
        total: impl IntoOperand,
    ) -> CalculatorResult<NumericString> {
        let value = value.into_operand()?;
        let ratio = ratio.into_operand()?;
        let total = total.into_operand()?;
        tracing::trace!(backend = self.backend_name(), %value, %ratio, %total, "share");
        self.calculator.share(&value, &ratio, &total)
    }
}

impl fmt::Debug for CalculatorEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalculatorEngine")
            .field("backend", &self.backend_name())
            .field("division_scale", &self.division_scale())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{BigIntegerCalculator, SoftwareCalculator};
    use crate::numeric::CalculatorError;

    fn engine() -> CalculatorEngine {
        CalculatorEngine::new(Box::new(BigIntegerCalculator::new()))
    }

    #[test]
    fn test_mixed_operand_types() {
        let engine = engine();
        assert_eq!(engine.multiply("100", 0.0029).unwrap().to_string(), "0.29");
        assert_eq!(engine.multiply("-1", -1.99).unwrap().to_string(), "1.99");
        assert_eq!(engine.add(10, "5").unwrap().to_string(), "15");
        assert_eq!(
            engine
                .add(rust_decimal::Decimal::new(125, 2), 1u8)
                .unwrap()
                .to_string(),
            "2.25"
        );
        assert_eq!(engine.share(10, 2, 4).unwrap().to_string(), "5");
    }

    #[test]
    fn test_malformed_operands_are_rejected_before_dispatch() {
        let engine = engine();
        assert_eq!(
            engine.add("1e3", "1"),
            Err(CalculatorError::MalformedOperand {
                input: "1e3".to_string()
            })
        );
        assert!(engine.compare("1", "+1").is_err());
        assert!(engine.round("", RoundingMode::HalfUp).is_err());
        assert!(engine.divide(f64::NAN, 1).is_err());
    }

    #[test]
    fn test_malformed_operand_wins_over_zero_divisor() {
        let engine = engine();
        assert!(matches!(
            engine.divide("x", "0"),
            Err(CalculatorError::MalformedOperand { .. })
        ));
    }

    #[test]
    fn test_zero_divisors() {
        let engine = engine();
        for zero in ["0", "-0", "0.0", "-0.0"] {
            assert_eq!(engine.divide(7, zero), Err(CalculatorError::InvalidDivisor));
            assert_eq!(engine.modulus(7, zero), Err(CalculatorError::InvalidDivisor));
        }
        assert_eq!(engine.divide(7, 0), Err(CalculatorError::InvalidDivisor));
        assert_eq!(engine.divide(7, -0.0), Err(CalculatorError::InvalidDivisor));
    }

    #[test]
    fn test_compare_returns_ordering() {
        let engine = engine();
        assert_eq!(engine.compare("1.0", 1).unwrap(), Ordering::Equal);
        assert!(engine.compare("-1000", "1000").unwrap().is_lt());
        assert!(engine.compare(2, "1.99").unwrap().is_gt());
    }

    #[test]
    fn test_backend_accessors() {
        let engine = CalculatorEngine::new(Box::new(SoftwareCalculator::with_division_scale(8)));
        assert_eq!(engine.backend_name(), "Software");
        assert_eq!(engine.division_scale(), 8);
        assert_eq!(engine.calculator().name(), "Software");
        assert_eq!(
            format!("{:?}", engine),
            "CalculatorEngine { backend: \"Software\", division_scale: 8 }"
        );
    }

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CalculatorEngine>();
    }
}
