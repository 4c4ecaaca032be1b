//! Infrastructure Layer: Arithmetic
//!
//! Provides the arithmetic functions over integer/real numbers and the
//! exact decimal rounding they rely on.
//! Depends on Entities layer only (dependencies flow inward).

pub mod math;
pub mod rounding;

pub use math::ArithmeticUtils;
pub use rounding::RoundingUtils;
