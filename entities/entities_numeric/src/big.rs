//! Big Number Operations
//!
//! Provides arbitrary precision integer operations.
//!
//! This module uses the `malachite` crate for arbitrary-precision arithmetic,
//! so integer results (sums, products, powers, factorials) are exact no
//! matter how large they grow.

use malachite::base::num::arithmetic::traits::{Abs, Pow};
use malachite::Integer;

/// Big number representation using malachite's Integer
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BigNumber {
    value: Integer,
}

impl BigNumber {
    /// Create a new big number from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create from Integer (for advanced use)
    pub fn from_integer(value: Integer) -> Self {
        Self { value }
    }

    /// Get the internal Integer value (for advanced use)
    pub fn as_integer(&self) -> &Integer {
        &self.value
    }

    /// Consume the big number and return the internal Integer
    pub fn into_integer(self) -> Integer {
        self.value
    }

    /// Convert to i64
    ///
    /// Returns None if the value is out of range
    pub fn to_i64(&self) -> Option<i64> {
        self.value.to_string().parse::<i64>().ok()
    }

    /// Convert to u64
    ///
    /// Returns None if the value is negative or out of range
    pub fn to_u64(&self) -> Option<u64> {
        self.value.to_string().parse::<u64>().ok()
    }

    /// Convert to f64, rounding to the nearest representable value
    ///
    /// Returns None if the magnitude is too large to represent as a finite f64
    pub fn to_f64(&self) -> Option<f64> {
        // Decimal parsing is correctly rounded and saturates to infinity.
        let parsed = self.value.to_string().parse::<f64>().ok()?;
        if parsed.is_finite() {
            Some(parsed)
        } else {
            None
        }
    }

    /// Check if the number is zero
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Check if the number is strictly negative
    pub fn is_negative(&self) -> bool {
        self.value < 0
    }

    /// Add two big numbers: x + y
    pub fn plus(&self, other: &Self) -> Self {
        Self {
            value: &self.value + &other.value,
        }
    }

    /// Subtract two big numbers: x - y
    pub fn minus(&self, other: &Self) -> Self {
        Self {
            value: &self.value - &other.value,
        }
    }

    /// Multiply two big numbers: x * y
    pub fn times(&self, other: &Self) -> Self {
        Self {
            value: &self.value * &other.value,
        }
    }

    /// Truncating division: x / y
    ///
    /// Returns None if dividing by zero
    pub fn div(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        Some(Self {
            value: &self.value / &other.value,
        })
    }

    /// Remainder of division: x % y (sign follows the dividend)
    ///
    /// Returns None if dividing by zero
    pub fn rem(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        Some(Self {
            value: &self.value % &other.value,
        })
    }

    /// Absolute value: |x|
    pub fn abs(&self) -> Self {
        Self {
            value: self.value.clone().abs(),
        }
    }

    /// Raise to a non-negative power: x ^ exp
    ///
    /// `0 ^ 0` is 1.
    pub fn pow(&self, exponent: u64) -> Self {
        Self {
            value: self.value.clone().pow(exponent),
        }
    }

    /// Greatest common divisor (Euclid), always non-negative
    ///
    /// `gcd(0, 0)` is 0 and `gcd(x, 0)` is `|x|`.
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.value.clone();
        let mut b = other.value.clone();
        while b != 0 {
            let r = &a % &b;
            a = b;
            b = r;
        }
        Self { value: a.abs() }
    }

    /// Least common multiple, always non-negative
    ///
    /// Zero when either operand is zero, including `lcm(0, 0)`.
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::from_i64(0);
        }
        let g = self.gcd(other);
        // g divides both operands, so dividing first keeps the product small.
        Self {
            value: (&self.value / &g.value * &other.value).abs(),
        }
    }

    /// Factorial of a non-negative integer: n!
    pub fn factorial(n: u64) -> Self {
        let mut result = Integer::from(1);
        for i in 2..=n {
            result *= Integer::from(i);
        }
        Self { value: result }
    }
}

impl std::fmt::Display for BigNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<i64> for BigNumber {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for BigNumber {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<i32> for BigNumber {
    fn from(value: i32) -> Self {
        Self::from_i64(value as i64)
    }
}

impl From<u32> for BigNumber {
    fn from(value: u32) -> Self {
        Self::from_u64(value as u64)
    }
}

impl From<Integer> for BigNumber {
    fn from(value: Integer) -> Self {
        Self::from_integer(value)
    }
}

impl std::str::FromStr for BigNumber {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<Integer>()
            .map(Self::from_integer)
            .map_err(|_| format!("invalid integer literal: {:?}", s))
    }
}
