// ============================================================================
// Big-Integer Backend
// Scales operands to a common power of ten and works in exact BigInt space
// ============================================================================

use crate::domain::MAX_DIVISION_SCALE;
use crate::interfaces::{Calculator, DEFAULT_DIVISION_SCALE};
use crate::numeric::{
    CalculatorError, CalculatorResult, FractionClass, NumericString, RoundingMode,
};
use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};
use std::cmp::Ordering;

/// Calculator backed by `num_bigint::BigInt`.
///
/// A value `d × 10^-s` is held as the integer `d`; binary operations first
/// rescale both operands to the larger scale. Quotients rely on `BigInt`
/// division, which truncates toward zero, and remainders take the sign of
/// the dividend.
#[derive(Debug, Clone, Copy)]
pub struct BigIntegerCalculator {
    division_scale: u32,
}

impl BigIntegerCalculator {
    /// Create a calculator keeping `DEFAULT_DIVISION_SCALE` quotient digits.
    pub fn new() -> Self {
        Self::with_division_scale(DEFAULT_DIVISION_SCALE)
    }

    /// Create a calculator keeping `division_scale` quotient digits.
    ///
    /// The scale is clamped to `1..=MAX_DIVISION_SCALE`; use
    /// `create_calculator` to reject out-of-range values instead.
    pub fn with_division_scale(division_scale: u32) -> Self {
        Self {
            division_scale: division_scale.clamp(1, MAX_DIVISION_SCALE),
        }
    }

    /// Quotient of two scaled integers, truncated, at `division_scale`.
    ///
    /// Computes `trunc(num × 10^(num_shift + scale) / (den × 10^den_shift))`.
    fn truncated_quotient(
        &self,
        num: BigInt,
        num_shift: u32,
        den: BigInt,
        den_shift: u32,
    ) -> NumericString {
        let num = num * pow10(num_shift + self.division_scale);
        let den = den * pow10(den_shift);
        from_bigint(&(num / den), self.division_scale)
    }
}

impl Default for BigIntegerCalculator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Scaling Helpers
// ============================================================================

#[inline]
fn pow10(exponent: u32) -> BigInt {
    BigInt::from(10u32).pow(exponent)
}

/// Unscaled signed integer of a numeric string (`-12.05` -> `-1205`).
pub(crate) fn unscaled_bigint(n: &NumericString) -> BigInt {
    // Digits are validated by NumericString, so parsing cannot fail.
    let magnitude = BigInt::parse_bytes(n.unscaled_digits().as_bytes(), 10)
        .unwrap_or_else(BigInt::zero);
    if n.is_negative() {
        -magnitude
    } else {
        magnitude
    }
}

/// Unscaled integer rescaled to `scale` (which must be >= `n.scale()`).
fn scaled_to(n: &NumericString, scale: u32) -> BigInt {
    unscaled_bigint(n) * pow10(scale - n.scale())
}

pub(crate) fn from_bigint(value: &BigInt, scale: u32) -> NumericString {
    NumericString::from_parts(
        value.sign() == Sign::Minus,
        &value.magnitude().to_string(),
        scale,
    )
}

// ============================================================================
// Calculator Implementation
// ============================================================================

impl Calculator for BigIntegerCalculator {
    fn add(&self, a: &NumericString, b: &NumericString) -> NumericString {
        let scale = a.scale().max(b.scale());
        from_bigint(&(scaled_to(a, scale) + scaled_to(b, scale)), scale)
    }

    fn subtract(&self, a: &NumericString, b: &NumericString) -> NumericString {
        let scale = a.scale().max(b.scale());
        from_bigint(&(scaled_to(a, scale) - scaled_to(b, scale)), scale)
    }

    fn multiply(&self, a: &NumericString, b: &NumericString) -> NumericString {
        let product = unscaled_bigint(a) * unscaled_bigint(b);
        from_bigint(&product, a.scale() + b.scale())
    }

    fn divide(&self, a: &NumericString, b: &NumericString) -> CalculatorResult<NumericString> {
        if b.is_zero() {
            return Err(CalculatorError::InvalidDivisor);
        }
        // a / b = (A × 10^sb) / (B × 10^sa)
        Ok(self.truncated_quotient(unscaled_bigint(a), b.scale(), unscaled_bigint(b), a.scale()))
    }

    fn absolute(&self, a: &NumericString) -> NumericString {
        from_bigint(&unscaled_bigint(a).abs(), a.scale())
    }

    fn round(&self, a: &NumericString, mode: RoundingMode) -> NumericString {
        let value = unscaled_bigint(a);
        let unit = pow10(a.scale());

        let truncated = &value / &unit;
        let remainder = (&value % &unit).abs();
        let fraction =
            FractionClass::from_remainder(remainder.is_zero(), (&remainder * 2u32).cmp(&unit));
        let is_odd = !(&truncated % 2u32).is_zero();

        let rounded = if mode.rounds_away_from_zero(a.is_negative(), is_odd, fraction) {
            if a.is_negative() {
                truncated - 1u32
            } else {
                truncated + 1u32
            }
        } else {
            truncated
        };

        from_bigint(&rounded, 0)
    }

    fn compare(&self, a: &NumericString, b: &NumericString) -> Ordering {
        let scale = a.scale().max(b.scale());
        scaled_to(a, scale).cmp(&scaled_to(b, scale))
    }

    fn modulus(&self, a: &NumericString, b: &NumericString) -> CalculatorResult<NumericString> {
        if b.is_zero() {
            return Err(CalculatorError::InvalidDivisor);
        }
        let scale = a.scale().max(b.scale());
        let remainder = scaled_to(a, scale) % scaled_to(b, scale);
        Ok(from_bigint(&remainder, scale))
    }

    fn share(
        &self,
        value: &NumericString,
        ratio: &NumericString,
        total: &NumericString,
    ) -> CalculatorResult<NumericString> {
        if total.is_zero() {
            return Err(CalculatorError::InvalidDivisor);
        }
        // (V × R / 10^(sv+sr)) / (T / 10^st)
        let product = unscaled_bigint(value) * unscaled_bigint(ratio);
        Ok(self.truncated_quotient(
            product,
            total.scale(),
            unscaled_bigint(total),
            value.scale() + ratio.scale(),
        ))
    }

    fn division_scale(&self) -> u32 {
        self.division_scale
    }

    fn name(&self) -> &'static str {
        "BigInteger"
    }
}

// ============================================================================
// Tests
// ============================================================================
