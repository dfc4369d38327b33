// ============================================================================
// Software Backend
// Digit-by-digit decimal arithmetic with no big-number substrate
// ============================================================================

use crate::domain::MAX_DIVISION_SCALE;
use crate::interfaces::{Calculator, DEFAULT_DIVISION_SCALE};
use crate::numeric::{
    CalculatorError, CalculatorResult, FractionClass, NumericString, RoundingMode,
};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::iter;

/// Base-10 digits, most significant first, each in `0..=9`.
type Digits = SmallVec<[u8; 32]>;

/// Calculator built on schoolbook digit arithmetic.
///
/// This is the fallback that works everywhere: operands are expanded to
/// digit vectors aligned on the decimal point, and quotients come from
/// long division. It must agree with the other backends on every output.
#[derive(Debug, Clone, Copy)]
pub struct SoftwareCalculator {
    division_scale: u32,
}

impl SoftwareCalculator {
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

    /// `num × 10^(num_shift + scale) / (den × 10^den_shift)`, truncated.
    fn truncated_quotient(
        &self,
        negative: bool,
        num: Digits,
        num_shift: u32,
        den: Digits,
        den_shift: u32,
    ) -> NumericString {
        let num = shift_left(num, num_shift + self.division_scale);
        let den = shift_left(den, den_shift);
        let (quotient, _) = divmod_digits(&num, &den);
        NumericString::from_parts(negative, &to_text(&quotient), self.division_scale)
    }
}

impl Default for SoftwareCalculator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Digit Vector Helpers
// ============================================================================

fn digits_of(n: &NumericString) -> Digits {
    n.unscaled_digits().bytes().map(|b| b - b'0').collect()
}

/// Append `zeros` zero digits (multiply by 10^zeros).
fn shift_left(mut digits: Digits, zeros: u32) -> Digits {
    digits.extend(iter::repeat(0).take(zeros as usize));
    digits
}

/// Both magnitudes rescaled to the larger of their scales.
fn aligned(a: &NumericString, b: &NumericString) -> (Digits, Digits, u32) {
    let scale = a.scale().max(b.scale());
    (
        shift_left(digits_of(a), scale - a.scale()),
        shift_left(digits_of(b), scale - b.scale()),
        scale,
    )
}

fn to_text(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}

fn trim_leading_zeros(digits: &[u8]) -> &[u8] {
    let start = digits.iter().take_while(|&&d| d == 0).count();
    &digits[start..]
}

fn cmp_digits(a: &[u8], b: &[u8]) -> Ordering {
    let (a, b) = (trim_leading_zeros(a), trim_leading_zeros(b));
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn add_digits(a: &[u8], b: &[u8]) -> Digits {
    let mut sum = Digits::with_capacity(a.len().max(b.len()) + 1);
    let (mut i, mut j) = (a.len(), b.len());
    let mut carry = 0u8;

    while i > 0 || j > 0 || carry > 0 {
        let mut column = carry;
        if i > 0 {
            i -= 1;
            column += a[i];
        }
        if j > 0 {
            j -= 1;
            column += b[j];
        }
        sum.push(column % 10);
        carry = column / 10;
    }

    sum.reverse();
    sum
}

/// `a - b`; requires `a >= b`.
fn sub_digits(a: &[u8], b: &[u8]) -> Digits {
    let b = trim_leading_zeros(b);
    let mut difference = Digits::with_capacity(a.len());
    let mut j = b.len();
    let mut borrow = 0i8;

    for &digit in a.iter().rev() {
        let mut column = digit as i8 - borrow;
        if j > 0 {
            j -= 1;
            column -= b[j] as i8;
        }
        if column < 0 {
            column += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        difference.push(column as u8);
    }
    debug_assert_eq!(borrow, 0, "sub_digits requires a >= b");

    difference.reverse();
    difference
}

fn mul_digits(a: &[u8], b: &[u8]) -> Digits {
    let mut product: Digits = iter::repeat(0).take(a.len() + b.len()).collect();

    for i in (0..a.len()).rev() {
        let mut carry = 0u32;
        for j in (0..b.len()).rev() {
            let cell = u32::from(product[i + j + 1]) + u32::from(a[i]) * u32::from(b[j]) + carry;
            product[i + j + 1] = (cell % 10) as u8;
            carry = cell / 10;
        }
        // Row i has not touched position i yet, so this stays below 10
        product[i] = carry as u8;
    }

    product
}

/// Long division of magnitudes; `den` must be non-zero.
fn divmod_digits(num: &[u8], den: &[u8]) -> (Digits, Digits) {
    let den = trim_leading_zeros(den);
    let mut quotient = Digits::with_capacity(num.len());
    let mut remainder = Digits::new();

    for &digit in num {
        remainder.push(digit);
        let leading = remainder.iter().take_while(|&&d| d == 0).count();
        remainder.drain(..leading);

        let mut count = 0u8;
        while cmp_digits(&remainder, den) != Ordering::Less {
            remainder = sub_digits(&remainder, den);
            count += 1;
        }
        quotient.push(count);
    }

    (quotient, remainder)
}

/// Signed sum of two aligned magnitudes.
fn signed_sum(a_negative: bool, a: &[u8], b_negative: bool, b: &[u8], scale: u32) -> NumericString {
    if a_negative == b_negative {
        return NumericString::from_parts(a_negative, &to_text(&add_digits(a, b)), scale);
    }
    match cmp_digits(a, b) {
        Ordering::Less => NumericString::from_parts(b_negative, &to_text(&sub_digits(b, a)), scale),
        _ => NumericString::from_parts(a_negative, &to_text(&sub_digits(a, b)), scale),
    }
}

// ============================================================================
// Calculator Implementation
// ============================================================================

impl Calculator for SoftwareCalculator {
    fn add(&self, a: &NumericString, b: &NumericString) -> NumericString {
        let (left, right, scale) = aligned(a, b);
        signed_sum(a.is_negative(), &left, b.is_negative(), &right, scale)
    }

    fn subtract(&self, a: &NumericString, b: &NumericString) -> NumericString {
        let (left, right, scale) = aligned(a, b);
        signed_sum(a.is_negative(), &left, !b.is_negative(), &right, scale)
    }

    fn multiply(&self, a: &NumericString, b: &NumericString) -> NumericString {
        let product = mul_digits(&digits_of(a), &digits_of(b));
        NumericString::from_parts(
            a.is_negative() != b.is_negative(),
            &to_text(&product),
            a.scale() + b.scale(),
        )
    }

    fn divide(&self, a: &NumericString, b: &NumericString) -> CalculatorResult<NumericString> {
        if b.is_zero() {
            return Err(CalculatorError::InvalidDivisor);
        }
        Ok(self.truncated_quotient(
            a.is_negative() != b.is_negative(),
            digits_of(a),
            b.scale(),
            digits_of(b),
            a.scale(),
        ))
    }

    fn absolute(&self, a: &NumericString) -> NumericString {
        NumericString::from_parts(false, a.unscaled_digits(), a.scale())
    }

    fn round(&self, a: &NumericString, mode: RoundingMode) -> NumericString {
        let integer = a.integer_digits();
        let fraction = FractionClass::from_digits(&a.fraction_digits());
        let is_odd = integer
            .bytes()
            .last()
            .is_some_and(|d| (d - b'0') % 2 == 1);

        if mode.rounds_away_from_zero(a.is_negative(), is_odd, fraction) {
            let integer: Digits = integer.bytes().map(|b| b - b'0').collect();
            let bumped = add_digits(&integer, &[1]);
            NumericString::from_parts(a.is_negative(), &to_text(&bumped), 0)
        } else {
            NumericString::from_parts(a.is_negative(), integer, 0)
        }
    }

    fn compare(&self, a: &NumericString, b: &NumericString) -> Ordering {
        match (a.is_negative(), b.is_negative()) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (negative, _) => {
                let (left, right, _) = aligned(a, b);
                let magnitude = cmp_digits(&left, &right);
                if negative {
                    magnitude.reverse()
                } else {
                    magnitude
                }
            },
        }
    }

    fn modulus(&self, a: &NumericString, b: &NumericString) -> CalculatorResult<NumericString> {
        if b.is_zero() {
            return Err(CalculatorError::InvalidDivisor);
        }
        let (left, right, scale) = aligned(a, b);
        let (_, remainder) = divmod_digits(&left, &right);
        Ok(NumericString::from_parts(a.is_negative(), &to_text(&remainder), scale))
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
        let product = mul_digits(&digits_of(value), &digits_of(ratio));
        let negative = value.is_negative() ^ ratio.is_negative() ^ total.is_negative();
        Ok(self.truncated_quotient(
            negative,
            product,
            total.scale(),
            digits_of(total),
            value.scale() + ratio.scale(),
        ))
    }

    fn division_scale(&self) -> u32 {
        self.division_scale
    }

    fn name(&self) -> &'static str {
        "Software"
    }
}

// ============================================================================
// Tests
// ============================================================================
