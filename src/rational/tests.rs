use num_bigint::{BigInt, BigUint};
use num_integer::Integer as _;
use num_traits::One;

use super::{Rational, RationalError, integer_nth_root, integer_pow};

fn rat(num: i64, den: i64) -> Rational {
    Rational::new(BigInt::from(num), BigInt::from(den)).unwrap()
}

#[test]
fn test_construction_normalizes() {
    let r = rat(4, 8);
    assert_eq!(*r.numer(), BigInt::from(1));
    assert_eq!(*r.denom(), BigUint::from(2u32));

    let r = rat(3, -6);
    assert_eq!(*r.numer(), BigInt::from(-1));
    assert_eq!(*r.denom(), BigUint::from(2u32));

    let r = rat(-2, -4);
    assert_eq!(*r.numer(), BigInt::from(1));
    assert_eq!(*r.denom(), BigUint::from(2u32));

    let r = rat(0, 7);
    assert!(r.is_zero());
    assert!(r.denom().is_one());
}

#[test]
fn test_zero_denominator_rejected() {
    let result = Rational::new(BigInt::from(1), BigInt::from(0));
    assert_eq!(result, Err(RationalError::DivisionByZero));
}

#[test]
fn test_arithmetic() {
    let a = rat(1, 2);
    let b = rat(1, 3);
    assert_eq!(&a + &b, rat(5, 6));
    assert_eq!(&a - &b, rat(1, 6));
    assert_eq!(&a * &b, rat(1, 6));
    assert_eq!(-&a, rat(-1, 2));
    assert_eq!(a.checked_div(&b).unwrap(), rat(3, 2));
}

#[test]
fn test_mul_div_round_trip() {
    let cases = [(3, 7, 5, 11), (-2, 9, 4, 3), (0, 1, -8, 5)];
    for (an, ad, bn, bd) in cases {
        let a = rat(an, ad);
        let b = rat(bn, bd);
        let product = &a * &b;
        assert_eq!(product.checked_div(&b).unwrap(), a);
    }
}

#[test]
fn test_results_stay_reduced() {
    let a = rat(2, 6);
    let b = rat(4, 6);
    for value in [&a + &b, &a - &b, &a * &b, a.checked_div(&b).unwrap()] {
        assert!(value.numer().magnitude().gcd(value.denom()).is_one());
        assert!(*value.denom() > BigUint::from(0u32));
    }
}

#[test]
fn test_division_by_zero() {
    let a = rat(1, 2);
    let zero = rat(0, 1);
    assert_eq!(a.checked_div(&zero), Err(RationalError::DivisionByZero));
    assert_eq!(zero.recip(), Err(RationalError::DivisionByZero));
}

#[test]
fn test_recip() {
    assert_eq!(rat(3, 4).recip().unwrap(), rat(4, 3));
    assert_eq!(rat(-2, 5).recip().unwrap(), rat(-5, 2));
}

#[test]
fn test_comparisons() {
    assert!(rat(1, 2) < rat(2, 3));
    assert!(rat(-1, 2) < rat(1, 3));
    assert!(rat(7, 7) == rat(1, 1));
}

#[test]
fn test_integer_comparisons_are_exact() {
    assert!(rat(4, 2) == 2);
    assert!(rat(5, 2) != 2);
    assert!(rat(5, 2) > 2);
    assert!(rat(5, 2) < 3);
    assert!(rat(-7, 3) < 0);
}

#[test]
fn test_integer_pow() {
    let pow = |b: i64, e: u32| integer_pow(&BigInt::from(b), &BigUint::from(e));
    assert_eq!(pow(2, 10), BigInt::from(1024));
    assert_eq!(pow(3, 0), BigInt::from(1));
    assert_eq!(pow(0, 0), BigInt::from(1));
    assert_eq!(pow(0, 5), BigInt::from(0));
    assert_eq!(pow(-1, 101), BigInt::from(-1));
    assert_eq!(pow(-1, 100), BigInt::from(1));
    assert_eq!(pow(-3, 3), BigInt::from(-27));
}

#[test]
fn test_integer_nth_root_exact() {
    let root = |m: i64, n: u32| integer_nth_root(&BigInt::from(m), &BigUint::from(n));
    assert_eq!(root(64, 2), Some(BigInt::from(8)));
    assert_eq!(root(64, 3), Some(BigInt::from(4)));
    assert_eq!(root(64, 6), Some(BigInt::from(2)));
    assert_eq!(root(1, 7), Some(BigInt::from(1)));
    assert_eq!(root(0, 2), Some(BigInt::from(0)));
    assert_eq!(root(-27, 3), Some(BigInt::from(-3)));
    assert_eq!(root(5, 1), Some(BigInt::from(5)));
}

#[test]
fn test_integer_nth_root_rejects_inexact() {
    let root = |m: i64, n: u32| integer_nth_root(&BigInt::from(m), &BigUint::from(n));
    assert_eq!(root(2, 2), None);
    assert_eq!(root(63, 2), None);
    assert_eq!(root(65, 3), None);
    assert_eq!(root(-4, 2), None);
    assert_eq!(root(-8, 2), None);
}

#[test]
fn test_nth_root_round_trips_large_values() {
    let big = integer_pow(&BigInt::from(123_456_789), &BigUint::from(5u32));
    assert_eq!(
        integer_nth_root(&big, &BigUint::from(5u32)),
        Some(BigInt::from(123_456_789))
    );
}

#[test]
fn test_display() {
    assert_eq!(rat(3, 1).to_string(), "3");
    assert_eq!(rat(-3, 4).to_string(), "-3/4");
}
