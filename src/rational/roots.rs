use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, Zero};

/// Binary exponentiation over big integers.
///
/// Bases `0`, `1` and `-1` short-circuit so the arbitrarily large exponents
/// those bases admit stay cheap.
pub fn integer_pow(base: &BigInt, exp: &BigUint) -> BigInt {
    if base.is_zero() {
        return if exp.is_zero() {
            BigInt::one()
        } else {
            BigInt::zero()
        };
    }
    if base.is_one() {
        return BigInt::one();
    }
    if *base == BigInt::from(-1) {
        return if exp.bit(0) {
            BigInt::from(-1)
        } else {
            BigInt::one()
        };
    }

    let mut result = BigInt::one();
    for i in (0..exp.bits()).rev() {
        result = &result * &result;
        if exp.bit(i) {
            result *= base;
        }
    }
    result
}

/// Exact integer `n`-th root of `m`.
///
/// Returns `Some(r)` only when `r^n == m` exactly; a value that is not a
/// perfect `n`-th power yields `None`, never an approximation. Odd degrees
/// admit negative inputs by recursing on the magnitude.
pub fn integer_nth_root(m: &BigInt, n: &BigUint) -> Option<BigInt> {
    if n.is_one() {
        return Some(m.clone());
    }
    if m.is_negative() {
        if !n.bit(0) {
            return None;
        }
        return integer_nth_root(&-m, n).map(|r| -r);
    }
    if m.is_zero() || m.is_one() {
        return Some(m.clone());
    }

    // Newton iteration from an over-estimate: the iterate decreases
    // monotonically, so termination is the first non-decreasing step.
    let n_int = BigInt::from(n.clone());
    let n_minus_one = n - 1u32;
    let n_minus_one_int = BigInt::from(n_minus_one.clone());
    let step =
        |x: &BigInt| -> BigInt { (&n_minus_one_int * x + m / integer_pow(x, &n_minus_one)) / &n_int };

    let mut current = BigInt::one();
    let mut next = step(&current);
    loop {
        current = next;
        next = step(&current);
        if current <= next {
            break;
        }
    }

    if integer_pow(&current, n) == *m {
        Some(current)
    } else {
        None
    }
}
