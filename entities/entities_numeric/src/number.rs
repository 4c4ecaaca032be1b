//! Integer/Real Numbers
//!
//! `Number` is the value every arithmetic function takes and returns when it
//! accepts either kind of operand. Integers are exact and unbounded; reals
//! are IEEE-754 doubles.
//!
//! Promotion rule: an operation on two integers yields an integer, an
//! operation with at least one real operand yields a real.

use crate::big::BigNumber;
use crate::error::{CalcError, CalcResult};

/// An exact integer or an approximate real number
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    /// Exact, arbitrary precision integer
    Integer(BigNumber),
    /// Double precision floating-point value
    Real(f64),
}

impl Number {
    /// Create an integer number from i64
    pub fn int(value: i64) -> Self {
        Number::Integer(BigNumber::from_i64(value))
    }

    /// Create a real number
    pub fn real(value: f64) -> Self {
        Number::Real(value)
    }

    /// Check whether this is the integer variant
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Check whether the value equals zero (`0`, `0.0` or `-0.0`)
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Integer(i) => i.is_zero(),
            Number::Real(r) => *r == 0.0,
        }
    }

    /// Check whether the value is strictly below zero
    pub fn is_negative(&self) -> bool {
        match self {
            Number::Integer(i) => i.is_negative(),
            Number::Real(r) => *r < 0.0,
        }
    }

    /// Borrow the integer payload, if any
    pub fn as_integer(&self) -> Option<&BigNumber> {
        match self {
            Number::Integer(i) => Some(i),
            Number::Real(_) => None,
        }
    }

    /// Convert to f64
    ///
    /// # Errors
    /// `Overflow` if an integer is too large to be represented as a float.
    pub fn to_f64(&self) -> CalcResult<f64> {
        match self {
            Number::Integer(i) => i
                .to_f64()
                .ok_or_else(|| CalcError::overflow("int too large to convert to float")),
            Number::Real(r) => Ok(*r),
        }
    }
}

/// Integers print as plain digits; reals always keep a fractional part or
/// exponent so the two kinds stay distinguishable (`4` vs `4.0`).
impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Real(r) => write!(f, "{:?}", r),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::int(value as i64)
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number::Integer(BigNumber::from_u64(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Real(value)
    }
}

impl From<BigNumber> for Number {
    fn from(value: BigNumber) -> Self {
        Number::Integer(value)
    }
}

/// Parses integers exactly and everything else as a float.
impl std::str::FromStr for Number {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(i) = trimmed.parse::<BigNumber>() {
            return Ok(Number::Integer(i));
        }
        trimmed
            .parse::<f64>()
            .map(Number::Real)
            .map_err(|_| format!("invalid number: {:?}", s))
    }
}
