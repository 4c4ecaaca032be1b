//! API Facades Layer
//!
//! Provides the public face of the package: two groups of free functions,
//! [`calc`] for arithmetic and [`utility`] for strings and system probes.
//!
//! All facades call underlying Rust modules from inner layers and only
//! adapt argument types (`impl Into<Number>`, `impl AsRef<Path>`, ...).
//!
//! ```
//! use demoprogram::{calc, utility, Number};
//!
//! assert_eq!(calc::add(5, 3).unwrap(), Number::int(8));
//! assert_eq!(calc::gcd(48, 18).to_i64(), Some(6));
//! assert_eq!(utility::format_bytes(1536), "1.5 KB");
//! ```

pub mod calc_facades;
pub mod utility_facades;

pub use calc_facades as calc;
pub use utility_facades as utility;

pub use entities_numeric::{BigNumber, CalcError, CalcResult, Number};
pub use infrastructure_text::SystemInfo;

/// Package version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package author
pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_metadata() {
        assert_eq!(VERSION, "1.0.0");
        assert_eq!(AUTHOR, "Demo Author");
    }
}
