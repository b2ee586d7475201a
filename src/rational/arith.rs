use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_traits::One;

use crate::rational::core::Rational;

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        let num = &self.num * rhs.den_int() + &rhs.num * self.den_int();
        Rational::normalized(num, &self.den * &rhs.den)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Rational {
        let num = &self.num * rhs.den_int() - &rhs.num * self.den_int();
        Rational::normalized(num, &self.den * &rhs.den)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        Rational::normalized(&self.num * &rhs.num, &self.den * &rhs.den)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        // Negation preserves lowest terms.
        Rational {
            num: -&self.num,
            den: self.den.clone(),
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        // Denominators are positive, so cross-multiplication preserves order.
        Some((&self.num * other.den_int()).cmp(&(&other.num * self.den_int())))
    }
}

/// Comparisons against plain integers lift the integer into the exact
/// representation; nothing here ever narrows to a float.
impl PartialEq<i64> for Rational {
    fn eq(&self, other: &i64) -> bool {
        self.den.is_one() && self.num == BigInt::from(*other)
    }
}

impl PartialOrd<i64> for Rational {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.num.cmp(&(BigInt::from(*other) * self.den_int())))
    }
}
