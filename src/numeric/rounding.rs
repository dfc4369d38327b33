// ============================================================================
// Rounding Policy
// Rounding modes and the shared tie-breaking decision used by every backend
// ============================================================================

use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rounding mode applied when reducing a value to an integer.
///
/// The `Half*` modes only differ when the discarded fraction is exactly
/// one half; away from the tie they all round to the nearest integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Tie rounds away from zero (2.5 -> 3, -2.5 -> -3)
    HalfUp,
    /// Tie rounds toward zero (2.5 -> 2, -2.5 -> -2)
    HalfDown,
    /// Tie rounds to the even neighbour (2.5 -> 2, 3.5 -> 4)
    HalfEven,
    /// Tie rounds to the odd neighbour (2.5 -> 3, 3.5 -> 3)
    HalfOdd,
    /// Tie rounds toward +infinity (-2.5 -> -2)
    HalfPositiveInfinity,
    /// Tie rounds toward -infinity (2.5 -> 2)
    HalfNegativeInfinity,
    /// Drop the fraction (toward zero)
    Truncate,
    /// Toward +infinity
    Ceiling,
    /// Toward -infinity
    Floor,
}

/// Where the discarded fraction falls relative to one half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FractionClass {
    /// Nothing is discarded
    Zero,
    /// 0 < fraction < 0.5
    BelowHalf,
    /// fraction == 0.5
    Half,
    /// 0.5 < fraction < 1
    AboveHalf,
}

impl FractionClass {
    /// Classify the fractional digits of a magnitude (`"5"` is a half,
    /// `"4999"` below, `"5001"` above).
    pub fn from_digits(fraction: &str) -> Self {
        let mut digits = fraction.bytes();
        let first = match digits.next() {
            Some(d) => d,
            None => return FractionClass::Zero,
        };
        let rest_is_zero = digits.all(|d| d == b'0');

        match first.cmp(&b'5') {
            Ordering::Less if first == b'0' && rest_is_zero => FractionClass::Zero,
            Ordering::Less => FractionClass::BelowHalf,
            Ordering::Equal if rest_is_zero => FractionClass::Half,
            _ => FractionClass::AboveHalf,
        }
    }

    /// Classify a non-negative remainder `r` of a division by `unit`,
    /// given whether `r` is zero and how `2 * r` compares with `unit`.
    pub fn from_remainder(remainder_is_zero: bool, twice_remainder_vs_unit: Ordering) -> Self {
        if remainder_is_zero {
            return FractionClass::Zero;
        }
        match twice_remainder_vs_unit {
            Ordering::Less => FractionClass::BelowHalf,
            Ordering::Equal => FractionClass::Half,
            Ordering::Greater => FractionClass::AboveHalf,
        }
    }
}

impl RoundingMode {
    /// Every mode, in declaration order.
    pub const ALL: [RoundingMode; 9] = [
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
        RoundingMode::HalfOdd,
        RoundingMode::HalfPositiveInfinity,
        RoundingMode::HalfNegativeInfinity,
        RoundingMode::Truncate,
        RoundingMode::Ceiling,
        RoundingMode::Floor,
    ];

    /// Decide whether the magnitude truncated toward zero must grow by one.
    ///
    /// # Arguments
    /// * `negative` - sign of the value being rounded
    /// * `truncated_is_odd` - parity of the integer magnitude after truncation
    /// * `fraction` - class of the discarded fractional magnitude
    pub fn rounds_away_from_zero(
        self,
        negative: bool,
        truncated_is_odd: bool,
        fraction: FractionClass,
    ) -> bool {
        if fraction == FractionClass::Zero {
            return false;
        }

        let tie = match self {
            RoundingMode::Truncate => return false,
            RoundingMode::Ceiling => return !negative,
            RoundingMode::Floor => return negative,
            RoundingMode::HalfUp => true,
            RoundingMode::HalfDown => false,
            RoundingMode::HalfEven => truncated_is_odd,
            RoundingMode::HalfOdd => !truncated_is_odd,
            RoundingMode::HalfPositiveInfinity => !negative,
            RoundingMode::HalfNegativeInfinity => negative,
        };

        match fraction {
            FractionClass::AboveHalf => true,
            FractionClass::Half => tie,
            FractionClass::BelowHalf | FractionClass::Zero => false,
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundingMode::HalfUp => "half-up",
            RoundingMode::HalfDown => "half-down",
            RoundingMode::HalfEven => "half-even",
            RoundingMode::HalfOdd => "half-odd",
            RoundingMode::HalfPositiveInfinity => "half-positive-infinity",
            RoundingMode::HalfNegativeInfinity => "half-negative-infinity",
            RoundingMode::Truncate => "truncate",
            RoundingMode::Ceiling => "ceiling",
            RoundingMode::Floor => "floor",
        };
        f.write_str(name)
    }
}
