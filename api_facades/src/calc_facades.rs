//! Arithmetic Facades
//!
//! Free functions over anything convertible to [`Number`] or [`BigNumber`],
//! so callers can pass plain literals: `calc::add(5, 3)`, `calc::add(2.5, 1.5)`.

use entities_numeric::{BigNumber, CalcResult, Number};
use infrastructure_arithmetic::{ArithmeticUtils, RoundingUtils};

/// Decimal places used by [`round_to_decimal_default`]
pub const DEFAULT_DECIMAL_PLACES: i32 = RoundingUtils::DEFAULT_PLACES;

/// Add two numbers
pub fn add(a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Number> {
    ArithmeticUtils::add(&a.into(), &b.into())
}

/// Subtract the second number from the first number
pub fn subtract(a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Number> {
    ArithmeticUtils::subtract(&a.into(), &b.into())
}

/// Multiply two numbers
pub fn multiply(a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Number> {
    ArithmeticUtils::multiply(&a.into(), &b.into())
}

/// Divide the first number by the second number
pub fn divide(a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<f64> {
    ArithmeticUtils::divide(&a.into(), &b.into())
}

/// Raise a number to a power
pub fn power(base: impl Into<Number>, exponent: impl Into<Number>) -> CalcResult<Number> {
    ArithmeticUtils::power(&base.into(), &exponent.into())
}

/// Calculate the square root of a number
pub fn square_root(number: impl Into<Number>) -> CalcResult<f64> {
    ArithmeticUtils::square_root(&number.into())
}

/// Calculate the factorial of a non-negative integer
pub fn factorial(n: i64) -> CalcResult<BigNumber> {
    ArithmeticUtils::factorial(n)
}

/// Calculate the greatest common divisor of two integers
pub fn gcd(a: impl Into<BigNumber>, b: impl Into<BigNumber>) -> BigNumber {
    ArithmeticUtils::gcd(&a.into(), &b.into())
}

/// Calculate the least common multiple of two integers
pub fn lcm(a: impl Into<BigNumber>, b: impl Into<BigNumber>) -> BigNumber {
    ArithmeticUtils::lcm(&a.into(), &b.into())
}

/// Calculate the average (arithmetic mean) of a list of numbers
pub fn average<N>(numbers: &[N]) -> CalcResult<f64>
where
    N: Clone + Into<Number>,
{
    let numbers: Vec<Number> = numbers.iter().cloned().map(Into::into).collect();
    ArithmeticUtils::average(&numbers)
}

/// Calculate what fraction `part` is of `total`
pub fn percentage(part: impl Into<Number>, total: impl Into<Number>) -> CalcResult<f64> {
    ArithmeticUtils::percentage(&part.into(), &total.into())
}

/// Round a number to a specified number of decimal places
pub fn round_to_decimal(number: f64, decimal_places: i32) -> f64 {
    RoundingUtils::round_to_decimal(number, decimal_places)
}

/// Round a number to [`DEFAULT_DECIMAL_PLACES`] decimal places
pub fn round_to_decimal_default(number: f64) -> f64 {
    RoundingUtils::round_to_decimal_default(number)
}
