// ============================================================================
// Arbitrary-Precision Decimal Backend
// Delegates arithmetic to bigdecimal::BigDecimal
// ============================================================================

use super::big_integer::{from_bigint, unscaled_bigint};
use crate::domain::MAX_DIVISION_SCALE;
use crate::interfaces::{Calculator, DEFAULT_DIVISION_SCALE};
use crate::numeric::{
    CalculatorError, CalculatorResult, FractionClass, NumericString, RoundingMode,
};
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;

/// Calculator backed by `bigdecimal::BigDecimal`.
///
/// Sums, differences, products, remainders and comparisons are exact in
/// `BigDecimal`. The library's own division rounds at a fixed
/// significant-digit budget, so quotients align both operands to one scale
/// and truncate the ratio of their unscaled integers instead.
#[derive(Debug, Clone, Copy)]
pub struct DecimalCalculator {
    division_scale: u32,
}

impl DecimalCalculator {
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

    /// `num / den` truncated toward zero after `division_scale` digits.
    fn truncated_quotient(&self, num: &BigDecimal, den: &BigDecimal) -> NumericString {
        let negative = num.is_negative() != den.is_negative();

        // |num| × 10^scale, integer-divided by |den|
        let num = num.abs() * BigDecimal::new(BigInt::one(), -i64::from(self.division_scale));
        let den = den.abs();

        // At a shared scale the unscaled integers divide exactly like the
        // values themselves, with truncation instead of library rounding.
        let common = exponent(&num).max(exponent(&den));
        let (num, _) = num.with_scale(common).as_bigint_and_exponent();
        let (den, _) = den.with_scale(common).as_bigint_and_exponent();

        let quotient = num / den;
        let quotient = if negative { -quotient } else { quotient };
        from_bigint(&quotient, self.division_scale)
    }
}

impl Default for DecimalCalculator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Conversion Helpers
// ============================================================================

fn to_decimal(n: &NumericString) -> BigDecimal {
    BigDecimal::new(unscaled_bigint(n), i64::from(n.scale()))
}

#[inline]
fn exponent(d: &BigDecimal) -> i64 {
    d.as_bigint_and_exponent().1
}

fn from_decimal(d: &BigDecimal) -> NumericString {
    let (unscaled, exponent) = d.as_bigint_and_exponent();
    if exponent >= 0 {
        from_bigint(&unscaled, exponent as u32)
    } else {
        // Negative exponent: trailing zeros folded into the exponent (1E+3)
        let shift = BigInt::from(10u32).pow(exponent.unsigned_abs() as u32);
        from_bigint(&(unscaled * shift), 0)
    }
}

// ============================================================================
// Calculator Implementation
// ============================================================================

impl Calculator for DecimalCalculator {
    fn add(&self, a: &NumericString, b: &NumericString) -> NumericString {
        from_decimal(&(to_decimal(a) + to_decimal(b)))
    }

    fn subtract(&self, a: &NumericString, b: &NumericString) -> NumericString {
        from_decimal(&(to_decimal(a) - to_decimal(b)))
    }

    fn multiply(&self, a: &NumericString, b: &NumericString) -> NumericString {
        from_decimal(&(to_decimal(a) * to_decimal(b)))
    }

    fn divide(&self, a: &NumericString, b: &NumericString) -> CalculatorResult<NumericString> {
        if b.is_zero() {
            return Err(CalculatorError::InvalidDivisor);
        }
        Ok(self.truncated_quotient(&to_decimal(a), &to_decimal(b)))
    }

    fn absolute(&self, a: &NumericString) -> NumericString {
        from_decimal(&to_decimal(a).abs())
    }

    fn round(&self, a: &NumericString, mode: RoundingMode) -> NumericString {
        let value = to_decimal(a);
        // with_scale truncates toward zero when reducing scale
        let truncated = value.with_scale(0);
        let fraction = (&value - &truncated).abs();

        let twice = &fraction * &BigDecimal::from(2);
        let class =
            FractionClass::from_remainder(fraction.is_zero(), twice.cmp(&BigDecimal::one()));
        let (whole, _) = truncated.as_bigint_and_exponent();
        let is_odd = !(whole % 2u32).is_zero();

        if mode.rounds_away_from_zero(a.is_negative(), is_odd, class) {
            let step = if a.is_negative() {
                -BigDecimal::one()
            } else {
                BigDecimal::one()
            };
            from_decimal(&(truncated + step))
        } else {
            from_decimal(&truncated)
        }
    }

    fn compare(&self, a: &NumericString, b: &NumericString) -> Ordering {
        to_decimal(a).cmp(&to_decimal(b))
    }

    fn modulus(&self, a: &NumericString, b: &NumericString) -> CalculatorResult<NumericString> {
        if b.is_zero() {
            return Err(CalculatorError::InvalidDivisor);
        }
        // Remainder of magnitudes, then the dividend's sign
        let remainder = to_decimal(a).abs() % to_decimal(b).abs();
        let remainder = if a.is_negative() { -remainder } else { remainder };
        Ok(from_decimal(&remainder))
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
        let product = to_decimal(value) * to_decimal(ratio);
        Ok(self.truncated_quotient(&product, &to_decimal(total)))
    }

    fn division_scale(&self) -> u32 {
        self.division_scale
    }

    fn name(&self) -> &'static str {
        "Decimal"
    }
}

// ============================================================================
// Tests
// ============================================================================
