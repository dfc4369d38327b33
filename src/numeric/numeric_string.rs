// ============================================================================
// Numeric String
// Canonical, arbitrary-length decimal value parsed from text
// ============================================================================

use super::errors::CalculatorError;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Canonical decimal quantity backed by its digit string.
///
/// Internally stores the magnitude as an unscaled digit string together with
/// a scale (number of fractional digits), so `-12.05` is
/// `(negative, "1205", 2)`.
///
/// # Canonical Form
/// Every constructor normalizes, so two values are equal exactly when their
/// fields are equal:
/// - no leading zeros in the unscaled digits (`"0"` for zero)
/// - no trailing fractional zeros (`"2.50"` is stored as `2.5`)
/// - zero is never negative (`"-0.0"` is stored as `0`)
///
/// # Grammar
/// `-?(\d+(\.\d*)?|\.\d+)`: an optional minus sign, digits, an optional
/// fractional part. No `+`, no exponent, no surrounding whitespace.
///
/// # Example
/// ```
/// use decimal_calculator::numeric::NumericString;
///
/// let value: NumericString = "-12.50".parse().unwrap();
/// assert_eq!(value.to_string(), "-12.5");
/// assert_eq!(value.scale(), 1);
/// assert!("-0.000".parse::<NumericString>().unwrap().is_zero());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NumericString {
    negative: bool,
    digits: String,
    scale: u32,
}

impl NumericString {
    // ========================================================================
    // Construction
    // ========================================================================

    /// The canonical zero.
    pub fn zero() -> Self {
        Self {
            negative: false,
            digits: String::from("0"),
            scale: 0,
        }
    }

    /// Build a value from a sign, an unscaled ASCII digit string and a scale.
    ///
    /// This is the single normalizing constructor: leading zeros and
    /// trailing fractional zeros are dropped and a zero magnitude loses its
    /// sign. `digits` may be shorter than `scale` (`("5", 3)` is `0.005`).
    ///
    /// `digits` must contain ASCII digits only.
    pub fn from_parts(negative: bool, digits: &str, scale: u32) -> Self {
        debug_assert!(digits.bytes().all(|b| b.is_ascii_digit()));

        let trimmed = digits.trim_start_matches('0');
        let bytes = trimmed.as_bytes();
        let mut end = bytes.len();
        let mut scale = scale;
        while scale > 0 && end > 0 && bytes[end - 1] == b'0' {
            end -= 1;
            scale -= 1;
        }

        if end == 0 {
            return Self::zero();
        }

        Self {
            negative,
            digits: trimmed[..end].to_string(),
            scale,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Check if value is zero (negative zero included).
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits == "0"
    }

    /// Check if value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Check if value has no fractional part.
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.scale == 0
    }

    /// Number of fractional digits in canonical form.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// The magnitude without the decimal point (`"1205"` for `-12.05`).
    #[inline]
    pub fn unscaled_digits(&self) -> &str {
        &self.digits
    }

    /// Digits before the decimal point, `"0"` when the magnitude is below one.
    pub fn integer_digits(&self) -> &str {
        let scale = self.scale as usize;
        if self.digits.len() > scale {
            &self.digits[..self.digits.len() - scale]
        } else {
            "0"
        }
    }

    /// Digits after the decimal point, zero-padded to `scale` characters.
    pub fn fraction_digits(&self) -> Cow<'_, str> {
        let scale = self.scale as usize;
        if self.digits.len() >= scale {
            Cow::Borrowed(&self.digits[self.digits.len() - scale..])
        } else {
            let mut padded = "0".repeat(scale - self.digits.len());
            padded.push_str(&self.digits);
            Cow::Owned(padded)
        }
    }

    /// Value with the sign stripped.
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            ..self.clone()
        }
    }

    /// Value with the sign flipped; zero stays unsigned.
    pub fn negate(&self) -> Self {
        Self {
            negative: !self.negative && !self.is_zero(),
            ..self.clone()
        }
    }

    /// Compare magnitudes, ignoring sign.
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        let (left_int, right_int) = (self.integer_digits(), other.integer_digits());
        left_int
            .len()
            .cmp(&right_int.len())
            .then_with(|| left_int.cmp(right_int))
            // Canonical fractions carry no trailing zeros, so a proper
            // prefix is always the smaller fraction.
            .then_with(|| self.fraction_digits().cmp(&other.fraction_digits()))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for NumericString {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialOrd for NumericString {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NumericString {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
        }
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for NumericString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NumericString({})", self)
    }
}

impl fmt::Display for NumericString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        if self.scale == 0 {
            write!(f, "{}{}", sign, self.digits)
        } else {
            write!(
                f,
                "{}{}.{}",
                sign,
                self.integer_digits(),
                self.fraction_digits()
            )
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for NumericString {
    type Err = CalculatorError;

    /// Parse from a decimal string.
    ///
    /// # Examples
    /// - "123" -> 123
    /// - "-0.0010" -> -0.001
    /// - ".5" -> 0.5
    /// - "-0" -> 0
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (int_str, frac_str) = body.split_once('.').unwrap_or((body, ""));

        if int_str.is_empty() && frac_str.is_empty() {
            return Err(CalculatorError::malformed(s));
        }

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_str) || !all_digits(frac_str) {
            return Err(CalculatorError::malformed(s));
        }

        let scale = u32::try_from(frac_str.len()).map_err(|_| CalculatorError::malformed(s))?;

        let mut digits = String::with_capacity(int_str.len() + frac_str.len());
        digits.push_str(int_str);
        digits.push_str(frac_str);

        Ok(Self::from_parts(negative, &digits, scale))
    }
}

// ============================================================================
// Integer Conversions
// ============================================================================

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumericString {
                fn from(value: $t) -> Self {
                    Self::from_parts(value < 0, &value.unsigned_abs().to_string(), 0)
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumericString {
                fn from(value: $t) -> Self {
                    Self::from_parts(false, &value.to_string(), 0)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl From<rust_decimal::Decimal> for NumericString {
    fn from(d: rust_decimal::Decimal) -> Self {
        let mantissa = d.mantissa();
        Self::from_parts(mantissa < 0, &mantissa.unsigned_abs().to_string(), d.scale())
    }
}

impl TryFrom<&NumericString> for rust_decimal::Decimal {
    type Error = CalculatorError;

    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the value needs more than 96 bits of mantissa
    /// or more than 28 fractional digits.
    fn try_from(value: &NumericString) -> Result<Self, Self::Error> {
        rust_decimal::Decimal::from_str_exact(&value.to_string())
            .map_err(|_| CalculatorError::OutOfRange)
    }
}

// ============================================================================
// Serde (string form)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for NumericString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NumericString {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
