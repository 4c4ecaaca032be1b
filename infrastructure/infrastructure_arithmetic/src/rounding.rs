//! Exact Rounding Utilities
//!
//! Decimal rounding and integer ratios are computed on exact rationals
//! (`malachite::Rational`) and converted to `f64` once, at the end. This
//! rounds the true binary value of the input: 2.675 is stored as
//! 2.67499999999999982236431605997495353221893310546875, so it rounds to
//! 2.67 and not 2.68. Exact ties go to the even digit.

use entities_numeric::{BigNumber, CalcError, CalcResult};
use malachite::base::num::arithmetic::traits::Pow;
use malachite::base::num::conversion::traits::RoundingFrom;
use malachite::base::rounding_modes::RoundingMode;
use malachite::{Integer, Rational};

/// Above this many places every finite double is already exact.
const MAX_DECIMAL_PLACES: i32 = 323;

/// Below this many places every finite double rounds to zero.
const MIN_DECIMAL_PLACES: i32 = -308;

/// Rounding utilities backed by exact rational arithmetic
pub struct RoundingUtils;

impl RoundingUtils {
    /// Default number of decimal places for [`RoundingUtils::round_to_decimal_default`]
    pub const DEFAULT_PLACES: i32 = 2;

    /// Round a number to a number of decimal places, ties to even
    ///
    /// Negative `places` round to the left of the decimal point
    /// (`-1` rounds to tens). NaN and infinities are returned unchanged;
    /// a rounded magnitude beyond `f64::MAX` saturates to infinity.
    ///
    /// # Examples
    /// ```
    /// use infrastructure_arithmetic::RoundingUtils;
    ///
    /// assert_eq!(RoundingUtils::round_to_decimal(3.14159, 4), 3.1416);
    /// assert_eq!(RoundingUtils::round_to_decimal(2.5, 0), 2.0);
    /// assert_eq!(RoundingUtils::round_to_decimal(1234.0, -2), 1200.0);
    /// ```
    pub fn round_to_decimal(number: f64, places: i32) -> f64 {
        if !number.is_finite() || places > MAX_DECIMAL_PLACES {
            return number;
        }
        if places < MIN_DECIMAL_PLACES {
            return 0.0f64.copysign(number);
        }
        let exact = match Rational::try_from(number) {
            Ok(value) => value,
            Err(_) => return number,
        };

        let scale = Rational::from(Integer::from(10).pow(places.unsigned_abs() as u64));
        let rounded = if places >= 0 {
            let (digits, _) = Integer::rounding_from(&(exact * &scale), RoundingMode::Nearest);
            let (value, _) = f64::rounding_from(&(Rational::from(digits) / scale), RoundingMode::Nearest);
            value
        } else {
            let (digits, _) = Integer::rounding_from(&(exact / &scale), RoundingMode::Nearest);
            let whole = BigNumber::from_integer(digits).times(&BigNumber::from_integer(
                Integer::from(10).pow(places.unsigned_abs() as u64),
            ));
            whole
                .to_f64()
                .unwrap_or_else(|| f64::INFINITY.copysign(number))
        };

        // Keep the sign of values that round to zero (-0.4 -> -0.0).
        if rounded == 0.0 {
            0.0f64.copysign(number)
        } else {
            rounded
        }
    }

    /// Round a number to [`RoundingUtils::DEFAULT_PLACES`] decimal places
    pub fn round_to_decimal_default(number: f64) -> f64 {
        Self::round_to_decimal(number, Self::DEFAULT_PLACES)
    }

    /// Correctly rounded `numerator / denominator`
    ///
    /// # Errors
    /// * `DivisionByZero` - If the denominator is zero
    /// * `Overflow` - If the quotient is too large for a float
    pub fn ratio_to_f64(numerator: &BigNumber, denominator: &BigNumber) -> CalcResult<f64> {
        let whole = numerator
            .div(denominator)
            .ok_or_else(|| CalcError::division_by_zero("Cannot divide by zero"))?;
        if whole.to_f64().is_none() {
            return Err(CalcError::overflow(
                "integer division result too large for a float",
            ));
        }
        let ratio = Rational::from(numerator.as_integer().clone())
            / Rational::from(denominator.as_integer().clone());
        let (value, _) = f64::rounding_from(&ratio, RoundingMode::Nearest);
        // A zero quotient takes the sign of the operands, as float division does.
        if value == 0.0 && numerator.is_negative() != denominator.is_negative() {
            return Ok(-0.0);
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_default_places() {
        assert_eq!(RoundingUtils::round_to_decimal_default(3.14159), 3.14);
        assert_eq!(RoundingUtils::round_to_decimal_default(2.0), 2.0);
    }

    #[test]
    fn test_round_ties_to_even() {
        assert_eq!(RoundingUtils::round_to_decimal(2.5, 0), 2.0);
        assert_eq!(RoundingUtils::round_to_decimal(3.5, 0), 4.0);
        assert_eq!(RoundingUtils::round_to_decimal(0.5, 0), 0.0);
        assert_eq!(RoundingUtils::round_to_decimal(-2.5, 0), -2.0);
        // 0.125 is exact in binary, so this is a true tie
        assert_eq!(RoundingUtils::round_to_decimal(0.125, 2), 0.12);
        assert_eq!(RoundingUtils::round_to_decimal(0.375, 2), 0.38);
    }

    #[test]
    fn test_round_uses_binary_value() {
        assert_eq!(RoundingUtils::round_to_decimal(2.675, 2), 2.67);
        assert_eq!(RoundingUtils::round_to_decimal(1.005, 2), 1.0);
        assert_eq!(RoundingUtils::round_to_decimal(0.1 + 0.2, 2), 0.3);
    }

    #[test]
    fn test_round_negative_places() {
        assert_eq!(RoundingUtils::round_to_decimal(1234.0, -2), 1200.0);
        assert_eq!(RoundingUtils::round_to_decimal(1250.0, -2), 1200.0);
        assert_eq!(RoundingUtils::round_to_decimal(1350.0, -2), 1400.0);
        assert_eq!(RoundingUtils::round_to_decimal(-15.0, -1), -20.0);
    }

    #[test]
    fn test_round_preserves_sign_of_zero() {
        let r = RoundingUtils::round_to_decimal(-0.4, 0);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_negative());
        assert!(RoundingUtils::round_to_decimal(-1e-300, 2).is_sign_negative());
    }

    #[test]
    fn test_round_extreme_places() {
        assert_eq!(RoundingUtils::round_to_decimal(1.5, 400), 1.5);
        assert_eq!(RoundingUtils::round_to_decimal(1e300, -400), 0.0);
        assert_eq!(
            RoundingUtils::round_to_decimal(f64::MAX, -308),
            f64::INFINITY
        );
    }

    #[test]
    fn test_round_non_finite() {
        assert!(RoundingUtils::round_to_decimal(f64::NAN, 2).is_nan());
        assert_eq!(RoundingUtils::round_to_decimal(f64::INFINITY, 2), f64::INFINITY);
        assert_eq!(
            RoundingUtils::round_to_decimal(f64::NEG_INFINITY, -3),
            f64::NEG_INFINITY
        );
    }

    #[test]
    fn test_ratio_to_f64() {
        let seven = BigNumber::from_i64(7);
        let three = BigNumber::from_i64(3);
        assert_eq!(RoundingUtils::ratio_to_f64(&seven, &three), Ok(2.3333333333333335));
        assert_eq!(
            RoundingUtils::ratio_to_f64(&BigNumber::from_i64(-1), &BigNumber::from_i64(4)),
            Ok(-0.25)
        );
    }

    #[test]
    fn test_ratio_to_f64_exact_for_large_operands() {
        // Both operands exceed f64 precision, but the ratio is exactly 1/3.
        let big = BigNumber::from_i64(10).pow(30);
        let num = big.clone();
        let den = big.times(&BigNumber::from_i64(3));
        assert_eq!(RoundingUtils::ratio_to_f64(&num, &den), Ok(1.0 / 3.0));
    }

    #[test]
    fn test_ratio_to_f64_errors() {
        let one = BigNumber::from_i64(1);
        let zero = BigNumber::from_i64(0);
        assert!(matches!(
            RoundingUtils::ratio_to_f64(&one, &zero),
            Err(CalcError::DivisionByZero(_))
        ));

        let huge = BigNumber::from_i64(10).pow(400);
        assert!(matches!(
            RoundingUtils::ratio_to_f64(&huge, &one),
            Err(CalcError::Overflow(_))
        ));
    }
}
