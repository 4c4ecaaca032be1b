//! Math Utilities
//!
//! Provides the arithmetic functions of the calculator: the four basic
//! operations, powers and roots, factorial, gcd/lcm, averages and
//! percentages.
//!
//! Operations that accept either kind of number follow the promotion rule:
//! two integers give an exact integer, any real operand gives a real.

use entities_numeric::{BigNumber, CalcError, CalcResult, Number};

use crate::rounding::RoundingUtils;

/// Math utilities for arithmetic and mathematical operations
pub struct ArithmeticUtils;

impl ArithmeticUtils {
    /// Add two numbers
    ///
    /// # Examples
    /// ```
    /// use entities_numeric::Number;
    /// use infrastructure_arithmetic::ArithmeticUtils;
    ///
    /// assert_eq!(ArithmeticUtils::add(&Number::int(5), &Number::int(3)), Ok(Number::int(8)));
    /// assert_eq!(ArithmeticUtils::add(&Number::real(2.5), &Number::real(1.5)), Ok(Number::real(4.0)));
    /// ```
    pub fn add(a: &Number, b: &Number) -> CalcResult<Number> {
        Self::promote(a, b, BigNumber::plus, |x, y| x + y)
    }

    /// Subtract the second number from the first
    pub fn subtract(a: &Number, b: &Number) -> CalcResult<Number> {
        Self::promote(a, b, BigNumber::minus, |x, y| x - y)
    }

    /// Multiply two numbers
    pub fn multiply(a: &Number, b: &Number) -> CalcResult<Number> {
        Self::promote(a, b, BigNumber::times, |x, y| x * y)
    }

    /// Divide the first number by the second, always producing a float
    ///
    /// Two integers are divided exactly and rounded once, so the quotient is
    /// correct even when the operands are beyond float precision.
    ///
    /// # Errors
    /// * `DivisionByZero` - If `b` is zero
    /// * `Overflow` - If an operand or the quotient does not fit a float
    ///
    /// # Examples
    /// ```
    /// use entities_numeric::Number;
    /// use infrastructure_arithmetic::ArithmeticUtils;
    ///
    /// assert_eq!(ArithmeticUtils::divide(&Number::int(10), &Number::int(2)), Ok(5.0));
    /// assert!(ArithmeticUtils::divide(&Number::int(10), &Number::int(0)).is_err());
    /// ```
    pub fn divide(a: &Number, b: &Number) -> CalcResult<f64> {
        Self::checked_quotient(a, b, "Cannot divide by zero")
    }

    /// Raise `base` to the power `exponent`
    ///
    /// An integer base with a non-negative integer exponent gives an exact
    /// integer; every other combination is computed in floating point.
    ///
    /// # Errors
    /// * `DivisionByZero` - Zero raised to a negative power
    /// * `InvalidArgument` - Negative base raised to a fractional power
    /// * `Overflow` - Result out of float range, or an integer exponent
    ///   too large to evaluate
    pub fn power(base: &Number, exponent: &Number) -> CalcResult<Number> {
        if let (Number::Integer(b), Number::Integer(e)) = (base, exponent) {
            if !e.is_negative() {
                let e = e
                    .to_u64()
                    .ok_or_else(|| CalcError::overflow("exponent too large"))?;
                return Ok(Number::Integer(b.pow(e)));
            }
        }

        let x = base.to_f64()?;
        let y = exponent.to_f64()?;
        if x == 0.0 && y < 0.0 {
            return Err(CalcError::division_by_zero(
                "0.0 cannot be raised to a negative power",
            ));
        }
        if x < 0.0 && x.is_finite() && y.is_finite() && y.fract() != 0.0 {
            return Err(CalcError::invalid_argument(
                "negative number cannot be raised to a fractional power",
            ));
        }
        let result = x.powf(y);
        if result.is_infinite() && x.is_finite() && y.is_finite() {
            return Err(CalcError::overflow("Numerical result out of range"));
        }
        Ok(Number::Real(result))
    }

    /// Calculate the non-negative square root
    ///
    /// # Errors
    /// * `InvalidArgument` - If `number` is negative
    /// * `Overflow` - If an integer argument does not fit a float
    pub fn square_root(number: &Number) -> CalcResult<f64> {
        if number.is_negative() {
            return Err(CalcError::invalid_argument(
                "Cannot calculate square root of negative number",
            ));
        }
        Ok(number.to_f64()?.sqrt())
    }

    /// Calculate n! exactly
    ///
    /// `factorial(0)` and `factorial(1)` are both 1.
    ///
    /// # Errors
    /// * `InvalidArgument` - If `n` is negative
    ///
    /// # Examples
    /// ```
    /// use infrastructure_arithmetic::ArithmeticUtils;
    ///
    /// assert_eq!(ArithmeticUtils::factorial(5).unwrap().to_i64(), Some(120));
    /// assert!(ArithmeticUtils::factorial(-1).is_err());
    /// ```
    pub fn factorial(n: i64) -> CalcResult<BigNumber> {
        if n < 0 {
            return Err(CalcError::invalid_argument(
                "Factorial is not defined for negative numbers",
            ));
        }
        Ok(BigNumber::factorial(n as u64))
    }

    /// Calculate greatest common divisor
    ///
    /// Always non-negative; `gcd(0, 0)` is 0.
    pub fn gcd(a: &BigNumber, b: &BigNumber) -> BigNumber {
        a.gcd(b)
    }

    /// Calculate least common multiple
    ///
    /// `|a * b| / gcd(a, b)`, or 0 when either operand is 0.
    pub fn lcm(a: &BigNumber, b: &BigNumber) -> BigNumber {
        a.lcm(b)
    }

    /// Calculate the arithmetic mean of a sequence of numbers
    ///
    /// The sum follows the promotion rule, so an all-integer sequence is
    /// summed exactly before the single division.
    ///
    /// # Errors
    /// * `InvalidArgument` - If `numbers` is empty
    pub fn average(numbers: &[Number]) -> CalcResult<f64> {
        if numbers.is_empty() {
            return Err(CalcError::invalid_argument(
                "Cannot calculate average of empty list",
            ));
        }
        let total = numbers
            .iter()
            .try_fold(Number::int(0), |acc, n| Self::add(&acc, n))?;
        Self::divide(&total, &Number::from(numbers.len() as u64))
    }

    /// Calculate `part / total` as a decimal fraction
    ///
    /// Multiply by 100 for a percentage.
    ///
    /// # Errors
    /// * `DivisionByZero` - If `total` is zero
    pub fn percentage(part: &Number, total: &Number) -> CalcResult<f64> {
        Self::checked_quotient(part, total, "Total cannot be zero")
    }

    fn checked_quotient(a: &Number, b: &Number, zero_message: &str) -> CalcResult<f64> {
        if b.is_zero() {
            return Err(CalcError::division_by_zero(zero_message));
        }
        match (a, b) {
            (Number::Integer(x), Number::Integer(y)) => RoundingUtils::ratio_to_f64(x, y),
            _ => Ok(a.to_f64()? / b.to_f64()?),
        }
    }

    fn promote(
        a: &Number,
        b: &Number,
        int_op: impl FnOnce(&BigNumber, &BigNumber) -> BigNumber,
        real_op: impl FnOnce(f64, f64) -> f64,
    ) -> CalcResult<Number> {
        match (a, b) {
            (Number::Integer(x), Number::Integer(y)) => Ok(Number::Integer(int_op(x, y))),
            _ => Ok(Number::Real(real_op(a.to_f64()?, b.to_f64()?))),
        }
    }
}
