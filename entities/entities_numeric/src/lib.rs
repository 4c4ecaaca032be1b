//! Entities Layer: Numeric Values
//!
//! Provides the value types shared by the arithmetic functions:
//! - Arbitrary precision integers
//! - Tagged integer/real numbers with promotion rules
//! - Calculation errors
//!
//! Depends on nothing else in the workspace.

pub mod big;
pub mod error;
pub mod number;

pub use big::BigNumber;
pub use error::{CalcError, CalcResult};
pub use number::Number;
