// ============================================================================
// Calculator Interface
// Defines the arithmetic contract every backend strategy implements
// ============================================================================

use crate::numeric::{CalculatorResult, NumericString, RoundingMode};
use std::cmp::Ordering;

/// Fractional digits kept by `divide` and `share` unless configured otherwise.
pub const DEFAULT_DIVISION_SCALE: u32 = 20;

/// Strategy pattern interface for decimal arithmetic backends
/// Implementations: BigInteger, Decimal (BigDecimal), Software (digit vectors)
///
/// Every implementation must return the same canonical `NumericString` for
/// the same inputs. Operands arrive already normalized; results are built
/// through `NumericString::from_parts`, so canonical form is guaranteed.
///
/// # Thread Safety
/// Implementations are stateless apart from their division scale and must be
/// `Send + Sync`.
pub trait Calculator: Send + Sync {
    /// Exact sum.
    fn add(&self, a: &NumericString, b: &NumericString) -> NumericString;

    /// Exact difference `a - b`.
    fn subtract(&self, a: &NumericString, b: &NumericString) -> NumericString;

    /// Exact product at the combined scale of the operands.
    fn multiply(&self, a: &NumericString, b: &NumericString) -> NumericString;

    /// Quotient `a / b` truncated toward zero after `division_scale()`
    /// fractional digits.
    ///
    /// # Errors
    /// Returns `InvalidDivisor` if `b` is zero (or negative zero).
    fn divide(&self, a: &NumericString, b: &NumericString) -> CalculatorResult<NumericString>;

    /// Smallest integer greater than or equal to `a`.
    fn ceil(&self, a: &NumericString) -> NumericString {
        self.round(a, RoundingMode::Ceiling)
    }

    /// Largest integer less than or equal to `a`.
    fn floor(&self, a: &NumericString) -> NumericString {
        self.round(a, RoundingMode::Floor)
    }

    /// `a` with the sign stripped.
    fn absolute(&self, a: &NumericString) -> NumericString;

    /// Round `a` to an integer using `mode`.
    fn round(&self, a: &NumericString, mode: RoundingMode) -> NumericString;

    /// Value comparison, independent of textual form (`1.0 == 1`).
    fn compare(&self, a: &NumericString, b: &NumericString) -> Ordering;

    /// Truncated-division remainder `a - b * trunc(a / b)`; the sign follows
    /// the dividend `a`.
    ///
    /// # Errors
    /// Returns `InvalidDivisor` if `b` is zero (or negative zero).
    fn modulus(&self, a: &NumericString, b: &NumericString) -> CalculatorResult<NumericString>;

    /// `value * ratio / total` as one exact product followed by one
    /// truncated division, so no intermediate rounding drift accumulates.
    ///
    /// # Errors
    /// Returns `InvalidDivisor` if `total` is zero.
    fn share(
        &self,
        value: &NumericString,
        ratio: &NumericString,
        total: &NumericString,
    ) -> CalculatorResult<NumericString>;

    /// Fractional digits kept by `divide` and `share`.
    fn division_scale(&self) -> u32;

    /// Get the backend name for logging/metrics
    fn name(&self) -> &'static str;
}
