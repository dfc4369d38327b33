// ============================================================================
// Calculator Conformance Suite
// One table-driven test set replayed against every backend
// ============================================================================

/// Expand the shared calculator test-suite for a backend constructor.
///
/// ```ignore
/// crate::engine::conformance::calculator_conformance_tests!(SoftwareCalculator::new());
/// ```
macro_rules! calculator_conformance_tests {
    ($calculator:expr) => {
        mod conformance {
            #[allow(unused_imports)]
            use super::*;
            use $crate::interfaces::Calculator;
            use $crate::numeric::{CalculatorError, NumericString, RoundingMode};
            use std::cmp::Ordering;

            fn calc() -> impl Calculator {
                $calculator
            }

            fn n(s: &str) -> NumericString {
                s.parse().unwrap()
            }

            #[test]
            fn test_adds_two_values() {
                for (a, b, expected) in [
                    ("1", "1", "2"),
                    ("10", "5", "15"),
                    ("0.1", "0.2", "0.3"),
                    ("-1.5", "1.5", "0"),
                    ("99999999999999999999", "1", "100000000000000000000"),
                ] {
                    assert_eq!(calc().add(&n(a), &n(b)).to_string(), expected, "{} + {}", a, b);
                }
            }

            #[test]
            fn test_subtracts_a_value_from_another() {
                for (a, b, expected) in [
                    ("2", "1", "1"),
                    ("10", "5", "5"),
                    ("5", "10", "-5"),
                    ("0.3", "0.1", "0.2"),
                    ("-1", "-1", "0"),
                ] {
                    assert_eq!(
                        calc().subtract(&n(a), &n(b)).to_string(),
                        expected,
                        "{} - {}",
                        a,
                        b
                    );
                }
            }

            #[test]
            fn test_multiplies_a_value_by_another() {
                for (a, b, expected) in [
                    ("1", "1.5", "1.5"),
                    ("10", "1.2500", "12.5"),
                    ("100", "0.29", "29"),
                    ("100", "0.029", "2.9"),
                    ("100", "0.0029", "0.29"),
                    ("1000", "0.29", "290"),
                    ("1000", "0.029", "29"),
                    ("1000", "0.0029", "2.9"),
                    ("2000", "0.0029", "5.8"),
                    ("1", "0.006597", "0.006597"),
                    ("1", "-0.99", "-0.99"),
                    ("1", "-1.99", "-1.99"),
                    ("-1", "-1.99", "1.99"),
                    ("0", "-1.99", "0"),
                ] {
                    assert_eq!(
                        calc().multiply(&n(a), &n(b)).to_string(),
                        expected,
                        "{} * {}",
                        a,
                        b
                    );
                }
            }

            #[test]
            fn test_divides_a_value_by_another() {
                // Quotients are truncated, so every listed digit must match.
                for (a, b, expected) in [
                    ("6", "3", "2"),
                    ("100", "25", "4"),
                    ("2", "4", "0.5"),
                    ("20", "0.5", "40"),
                    ("2", "0.5", "4"),
                    ("181", "17", "10.64705882352941"),
                    ("98", "28", "3.5"),
                    ("98", "25", "3.92"),
                    ("98", "24", "4.083333333333333"),
                    ("1", "5.1555", "0.19396760740956"),
                    ("-500", "110", "-4.54545454545454"),
                    ("1", "-0.99", "-1.0101010101"),
                    ("-1", "-0.99", "1.0101010101"),
                    ("-1", "-1.99", "0.5025125628"),
                ] {
                    let result = calc().divide(&n(a), &n(b)).unwrap().to_string();
                    assert!(
                        result.starts_with(expected),
                        "{} / {} = {}, expected prefix {}",
                        a,
                        b,
                        result,
                        expected
                    );
                }
            }

            #[test]
            fn test_divides_exactly_when_the_quotient_terminates() {
                for (a, b, expected) in [
                    ("6", "3", "2"),
                    ("100", "25", "4"),
                    ("2", "4", "0.5"),
                    ("20", "0.5", "40"),
                    ("2", "0.5", "4"),
                    ("98", "28", "3.5"),
                    ("98", "25", "3.92"),
                    ("0", "7", "0"),
                ] {
                    assert_eq!(calc().divide(&n(a), &n(b)).unwrap().to_string(), expected);
                }
            }

            #[test]
            fn test_division_keeps_a_stable_long_prefix() {
                let result = calc().divide(&n("181"), &n("17")).unwrap().to_string();
                assert!(result.starts_with("10.64705882352941"), "{}", result);

                let third = calc().divide(&n("1"), &n("3")).unwrap();
                assert_eq!(third.scale(), calc().division_scale());
                assert!(third.fraction_digits().bytes().all(|d| d == b'3'));
            }

            #[test]
            fn test_division_truncates_toward_zero() {
                let calc = calc();
                let positive = calc.divide(&n("2"), &n("3")).unwrap();
                let negative = calc.divide(&n("-2"), &n("3")).unwrap();
                assert_eq!(negative, positive.negate());
                assert!(positive.fraction_digits().ends_with('6'));
            }

            #[test]
            fn test_ceils_a_value() {
                for (a, expected) in [("1.2", "2"), ("-1.2", "-1"), ("2.00", "2"), ("-0.5", "0")] {
                    assert_eq!(calc().ceil(&n(a)).to_string(), expected, "ceil({})", a);
                }
            }

            #[test]
            fn test_floors_a_value() {
                for (a, expected) in [("2.7", "2"), ("-2.7", "-3"), ("2.00", "2"), ("0.5", "0")] {
                    assert_eq!(calc().floor(&n(a)).to_string(), expected, "floor({})", a);
                }
            }

            #[test]
            fn test_calculates_the_absolute_value() {
                for (a, expected) in [("2", "2"), ("-2", "2"), ("-0.05", "0.05"), ("-0", "0")] {
                    assert_eq!(calc().absolute(&n(a)).to_string(), expected);
                }
            }

            #[test]
            fn test_shares_a_value() {
                for (value, ratio, total, expected) in [
                    ("10", "2", "4", "5"),
                    ("100", "1", "3", "33.33333333333333333333"),
                    ("7", "5", "5", "7"),
                    ("-10", "1", "4", "-2.5"),
                    ("0.05", "3", "10", "0.015"),
                ] {
                    assert_eq!(
                        calc().share(&n(value), &n(ratio), &n(total)).unwrap().to_string(),
                        expected,
                        "share({}, {}, {})",
                        value,
                        ratio,
                        total
                    );
                }
            }

            #[test]
            fn test_share_fuses_multiply_and_divide() {
                // 1 / 3 * 3 would lose a digit when done in two steps
                let fused = calc().share(&n("1"), &n("3"), &n("3")).unwrap();
                assert_eq!(fused, n("1"));
            }

            #[test]
            fn test_rounds_a_value() {
                use RoundingMode::*;
                let cases = [
                    ("2.5", HalfUp, "3"),
                    ("-2.5", HalfUp, "-3"),
                    ("2.4", HalfUp, "2"),
                    ("12.50", HalfUp, "13"),
                    ("2.5", HalfDown, "2"),
                    ("-2.5", HalfDown, "-2"),
                    ("2.6", HalfDown, "3"),
                    ("2.5", HalfEven, "2"),
                    ("3.5", HalfEven, "4"),
                    ("-2.5", HalfEven, "-2"),
                    ("-3.5", HalfEven, "-4"),
                    ("2.6", HalfEven, "3"),
                    ("2.5", HalfOdd, "3"),
                    ("3.5", HalfOdd, "3"),
                    ("-2.5", HalfOdd, "-3"),
                    ("-3.5", HalfOdd, "-3"),
                    ("2.1", HalfOdd, "2"),
                    ("2.5", HalfPositiveInfinity, "3"),
                    ("-2.5", HalfPositiveInfinity, "-2"),
                    ("-2.6", HalfPositiveInfinity, "-3"),
                    ("2.5", HalfNegativeInfinity, "2"),
                    ("-2.5", HalfNegativeInfinity, "-3"),
                    ("2.6", HalfNegativeInfinity, "3"),
                    ("2.9", Truncate, "2"),
                    ("-2.9", Truncate, "-2"),
                    ("2.1", Ceiling, "3"),
                    ("-2.1", Ceiling, "-2"),
                    ("2.9", Floor, "2"),
                    ("-2.1", Floor, "-3"),
                    ("0.5", HalfEven, "0"),
                    ("-0.5", HalfEven, "0"),
                    ("-0.4", HalfUp, "0"),
                    ("9.5", HalfUp, "10"),
                    ("-9.5", HalfUp, "-10"),
                    ("0.500000000000000000000000001", HalfDown, "1"),
                    ("7", HalfEven, "7"),
                    ("-7", Floor, "-7"),
                ];

                for (value, mode, expected) in cases {
                    assert_eq!(
                        calc().round(&n(value), mode).to_string(),
                        expected,
                        "round({}, {})",
                        value,
                        mode
                    );
                }
            }

            #[test]
            fn test_compares_values_less() {
                for (left, right) in [
                    ("0", "1"),
                    ("0.0005", "1"),
                    ("0.000000000000000000000000005", "1"),
                    ("-1000", "1000"),
                    ("9223372036854775808", "9223372036854775809"),
                    ("-0.51", "-0.5"),
                ] {
                    assert_eq!(calc().compare(&n(left), &n(right)), Ordering::Less);
                    assert_eq!(calc().compare(&n(right), &n(left)), Ordering::Greater);
                }
            }

            #[test]
            fn test_compares_values_equal() {
                for (left, right) in [("1", "1"), ("-1000", "-1000"), ("1.0", "1"), ("-0", "0")] {
                    assert_eq!(calc().compare(&n(left), &n(right)), Ordering::Equal);
                    assert_eq!(calc().compare(&n(right), &n(left)), Ordering::Equal);
                }
            }

            #[test]
            fn test_calculates_the_modulus_of_a_value() {
                for (a, b, expected) in [
                    ("11", "5", "1"),
                    ("9", "3", "0"),
                    ("1006", "10", "6"),
                    ("1007", "10", "7"),
                    ("-13", "-5", "-3"),
                    ("-13", "5", "-3"),
                    ("13", "-5", "3"),
                    ("5.5", "2", "1.5"),
                    ("-5.5", "2", "-1.5"),
                ] {
                    assert_eq!(
                        calc().modulus(&n(a), &n(b)).unwrap().to_string(),
                        expected,
                        "{} mod {}",
                        a,
                        b
                    );
                }
            }

            #[test]
            fn test_refuses_zero_divisors() {
                for zero in ["0", "-0", "0.0", "-0.0", "-0.000"] {
                    assert_eq!(
                        calc().divide(&n("1"), &n(zero)),
                        Err(CalculatorError::InvalidDivisor)
                    );
                    assert_eq!(
                        calc().modulus(&n("1"), &n(zero)),
                        Err(CalculatorError::InvalidDivisor)
                    );
                    assert_eq!(
                        calc().share(&n("1"), &n("1"), &n(zero)),
                        Err(CalculatorError::InvalidDivisor)
                    );
                }
            }

            #[test]
            fn test_results_are_canonical() {
                let calc = calc();
                assert!(!calc.multiply(&n("-1"), &n("0")).is_negative());
                assert_eq!(calc.add(&n("1.25"), &n("1.75")).to_string(), "3");
                assert_eq!(calc.modulus(&n("-10"), &n("5")).unwrap().to_string(), "0");
                assert_eq!(calc.round(&n("-0.2"), RoundingMode::HalfUp).to_string(), "0");
            }
        }
    };
}

pub(crate) use calculator_conformance_tests;
