// ============================================================================
// Operand Conversions
// Normalizes strings, integers, floats and decimals into NumericString
// ============================================================================

use super::errors::{CalculatorError, CalculatorResult};
use super::numeric_string::NumericString;

/// Anything the calculator accepts as an operand.
///
/// Conversion happens once, at the engine boundary, so backends only ever
/// see canonical `NumericString` values.
pub trait IntoOperand {
    /// Convert into a canonical numeric string.
    ///
    /// # Errors
    /// Returns `MalformedOperand` for text outside the numeric-string
    /// grammar and for non-finite floats.
    fn into_operand(self) -> CalculatorResult<NumericString>;
}

impl IntoOperand for NumericString {
    #[inline]
    fn into_operand(self) -> CalculatorResult<NumericString> {
        Ok(self)
    }
}

impl IntoOperand for &NumericString {
    #[inline]
    fn into_operand(self) -> CalculatorResult<NumericString> {
        Ok(self.clone())
    }
}

impl IntoOperand for &str {
    #[inline]
    fn into_operand(self) -> CalculatorResult<NumericString> {
        self.parse()
    }
}

impl IntoOperand for String {
    #[inline]
    fn into_operand(self) -> CalculatorResult<NumericString> {
        self.parse()
    }
}

impl IntoOperand for &String {
    #[inline]
    fn into_operand(self) -> CalculatorResult<NumericString> {
        self.parse()
    }
}

impl IntoOperand for rust_decimal::Decimal {
    #[inline]
    fn into_operand(self) -> CalculatorResult<NumericString> {
        Ok(NumericString::from(self))
    }
}

macro_rules! impl_integer_operand {
    ($($t:ty),*) => {
        $(
            impl IntoOperand for $t {
                #[inline]
                fn into_operand(self) -> CalculatorResult<NumericString> {
                    Ok(NumericString::from(self))
                }
            }
        )*
    };
}

impl_integer_operand!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Floats go through their shortest round-trip text, which Rust prints
// without exponent notation.
macro_rules! impl_float_operand {
    ($($t:ty),*) => {
        $(
            impl IntoOperand for $t {
                fn into_operand(self) -> CalculatorResult<NumericString> {
                    if !self.is_finite() {
                        return Err(CalculatorError::malformed(self.to_string()));
                    }
                    self.to_string().parse()
                }
            }
        )*
    };
}

impl_float_operand!(f32, f64);
