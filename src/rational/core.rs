use std::fmt;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer as _;
use num_traits::{One, Signed, Zero};

use crate::rational::errors::RationalError;

/// An exact rational number, always in lowest terms.
///
/// The denominator is always positive and the numerator carries the sign.
/// Values are never mutated after construction; every arithmetic operation
/// allocates a fresh normalized result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    pub(crate) num: BigInt,
    pub(crate) den: BigUint,
}

impl Rational {
    /// Build a rational from a signed numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns `RationalError::DivisionByZero` when `den` is zero.
    pub fn new(num: BigInt, den: BigInt) -> Result<Self, RationalError> {
        if den.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        let num = if den.is_negative() { -num } else { num };
        Ok(Self::normalized(num, den.magnitude().clone()))
    }

    /// Reduce `num/den` to lowest terms. The denominator must be nonzero.
    pub(crate) fn normalized(num: BigInt, den: BigUint) -> Self {
        debug_assert!(!den.is_zero());
        let g = num.magnitude().gcd(&den);
        if g.is_one() {
            return Self { num, den };
        }
        Self {
            num: num / BigInt::from(g.clone()),
            den: den / g,
        }
    }

    pub fn from_integer(n: impl Into<BigInt>) -> Self {
        Self {
            num: n.into(),
            den: BigUint::one(),
        }
    }

    pub fn numer(&self) -> &BigInt {
        &self.num
    }

    pub fn denom(&self) -> &BigUint {
        &self.den
    }

    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    pub fn is_negative(&self) -> bool {
        self.num.is_negative()
    }

    pub(crate) fn den_int(&self) -> BigInt {
        BigInt::from(self.den.clone())
    }

    /// Multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Returns `RationalError::DivisionByZero` when the value is zero.
    pub fn recip(&self) -> Result<Self, RationalError> {
        if self.num.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        let num = if self.num.is_negative() {
            -self.den_int()
        } else {
            self.den_int()
        };
        // A value in lowest terms stays in lowest terms when flipped.
        Ok(Self {
            num,
            den: self.num.magnitude().clone(),
        })
    }

    /// Exact division.
    ///
    /// # Errors
    ///
    /// Returns `RationalError::DivisionByZero` when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, RationalError> {
        let inv = rhs.recip()?;
        Ok(self * &inv)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.den.is_one() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}
