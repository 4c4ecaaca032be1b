//! Integration tests for infrastructure_arithmetic crate
//!
//! These tests check the algebraic laws the arithmetic functions must obey,
//! plus end-to-end calculations mixing integers and reals.

use entities_numeric::{BigNumber, CalcError, Number};
use infrastructure_arithmetic::*;
use proptest::prelude::*;

#[test]
fn test_calculation_chain() {
    // (10 + 3) * 2 / 4 == 6.5
    let sum = ArithmeticUtils::add(&Number::int(10), &Number::int(3)).unwrap();
    let doubled = ArithmeticUtils::multiply(&sum, &Number::int(2)).unwrap();
    assert_eq!(doubled, Number::int(26));
    assert_eq!(ArithmeticUtils::divide(&doubled, &Number::int(4)), Ok(6.5));
}

#[test]
fn test_error_kinds() {
    assert!(matches!(
        ArithmeticUtils::divide(&Number::int(10), &Number::int(0)),
        Err(CalcError::DivisionByZero(_))
    ));
    assert!(matches!(
        ArithmeticUtils::square_root(&Number::int(-4)),
        Err(CalcError::InvalidArgument(_))
    ));
    assert!(matches!(
        ArithmeticUtils::factorial(-1),
        Err(CalcError::InvalidArgument(_))
    ));
    assert!(matches!(
        ArithmeticUtils::average(&[]),
        Err(CalcError::InvalidArgument(_))
    ));
    assert!(matches!(
        ArithmeticUtils::percentage(&Number::int(5), &Number::real(0.0)),
        Err(CalcError::DivisionByZero(_))
    ));
}

#[test]
fn test_large_factorial_is_exact() {
    let f = ArithmeticUtils::factorial(30).unwrap();
    assert_eq!(f.to_string(), "265252859812191058636308480000000");
}

#[test]
fn test_rounding_literals() {
    assert_eq!(RoundingUtils::round_to_decimal(3.14159, 2), 3.14);
    assert_eq!(RoundingUtils::round_to_decimal(3.14159, 4), 3.1416);
    assert_eq!(RoundingUtils::round_to_decimal(2.5, 0), 2.0);
    assert_eq!(RoundingUtils::round_to_decimal(2.675, 2), 2.67);
}

proptest! {
    #[test]
    fn proptest_gcd_times_lcm_is_abs_product(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(a != 0 || b != 0);
        let a = BigNumber::from_i64(a);
        let b = BigNumber::from_i64(b);
        let gcd = ArithmeticUtils::gcd(&a, &b);
        let lcm = ArithmeticUtils::lcm(&a, &b);
        prop_assert!(!gcd.is_negative());
        prop_assert!(!lcm.is_negative());
        prop_assert_eq!(gcd.times(&lcm), a.times(&b).abs());
    }

    #[test]
    fn proptest_factorial_recurrence(n in 1i64..200) {
        let current = ArithmeticUtils::factorial(n).unwrap();
        let previous = ArithmeticUtils::factorial(n - 1).unwrap();
        prop_assert_eq!(current, previous.times(&BigNumber::from_i64(n)));
    }

    #[test]
    fn proptest_average_is_sum_over_len(values in prop::collection::vec(-1.0e6f64..1.0e6, 1..50)) {
        let numbers: Vec<Number> = values.iter().copied().map(Number::real).collect();
        let expected = values.iter().sum::<f64>() / values.len() as f64;
        let actual = ArithmeticUtils::average(&numbers).unwrap();
        prop_assert!((actual - expected).abs() <= 1e-9 * expected.abs().max(1.0));
    }

    #[test]
    fn proptest_integer_average_matches_exact_mean(values in prop::collection::vec(-1_000_000i64..1_000_000, 1..50)) {
        let numbers: Vec<Number> = values.iter().copied().map(Number::int).collect();
        let expected = values.iter().sum::<i64>() as f64 / values.len() as f64;
        prop_assert_eq!(ArithmeticUtils::average(&numbers).unwrap(), expected);
    }

    #[test]
    fn proptest_rounding_is_idempotent(x in -1.0e12f64..1.0e12, places in 0i32..8) {
        let once = RoundingUtils::round_to_decimal(x, places);
        prop_assert_eq!(RoundingUtils::round_to_decimal(once, places), once);
    }
}
