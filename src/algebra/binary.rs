use num_bigint::{BigInt, BigUint};

use crate::algebra::expr::{Expr, OpTag};
use crate::algebra::render::{bracket_for_base, bracket_for_mul};
use crate::rational::{Rational, integer_nth_root, integer_pow};

/// Exponent numerators and denominators beyond this are pruned unless the
/// base is a unit, keeping exact root extraction bounded.
const MAX_EXPONENT_MAGNITUDE: u32 = 100;

/// The binary operators the search applies, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
}

pub const BINARY_OPS: [BinaryOp; 5] = [
    BinaryOp::Add,
    BinaryOp::Subtract,
    BinaryOp::Multiply,
    BinaryOp::Divide,
    BinaryOp::Exponentiate,
];

impl BinaryOp {
    /// Build the canonical expression for this operator over two operands.
    ///
    /// `None` means the application is pruned: the same value is reachable
    /// at equal or lower cost through a canonical alternate derivation. A
    /// pruned branch is normal control flow, not an error.
    pub fn build(self, left: &Expr, right: &Expr) -> Option<Expr> {
        match self {
            BinaryOp::Add => add(left, right),
            BinaryOp::Subtract => sub(left, right),
            BinaryOp::Multiply => mul(left, right),
            BinaryOp::Divide => div(left, right),
            BinaryOp::Exponentiate => pow(left, right),
        }
    }
}

fn add(l: &Expr, r: &Expr) -> Option<Expr> {
    // Sums associate left; a trailing negation belongs to a subtraction.
    if matches!(r.tag, OpTag::Add | OpTag::Subtract | OpTag::Negate) {
        return None;
    }
    Some(Expr::build(
        OpTag::Add,
        l.ops + r.ops + 1,
        format!("{} + {}", l.text, r.text),
        &l.value + &r.value,
        l.span.join(r.span),
    ))
}

fn sub(l: &Expr, r: &Expr) -> Option<Expr> {
    if matches!(r.tag, OpTag::Add | OpTag::Subtract | OpTag::Negate) {
        return None;
    }
    // a + 0 is the canonical identity form.
    if r.value.is_zero() {
        return None;
    }
    Some(Expr::build(
        OpTag::Subtract,
        l.ops + r.ops + 1,
        format!("{} - {}", l.text, r.text),
        &l.value - &r.value,
        l.span.join(r.span),
    ))
}

fn mul(l: &Expr, r: &Expr) -> Option<Expr> {
    // The sign of a product sits outside it: -(a x b), never (-a) x b.
    if l.tag == OpTag::Negate || r.tag == OpTag::Negate {
        return None;
    }
    // Products associate left, and (a x b) / c covers a x (b / c).
    if matches!(r.tag, OpTag::Multiply | OpTag::Divide) {
        return None;
    }
    // sqrt(a x b) covers sqrt(a) x sqrt(b).
    if l.tag == OpTag::SquareRoot && r.tag == OpTag::SquareRoot {
        return None;
    }
    // Only the simplest zero-multiplication survives.
    if l.value.is_zero() && !r.is_plain_number() {
        return None;
    }
    if r.value.is_zero() && !l.is_plain_number() {
        return None;
    }
    // 0! and 1! never multiply; the factorial-free form is cheaper.
    if l.tag == OpTag::Factorial && l.value == 1 {
        return None;
    }
    if r.tag == OpTag::Factorial && r.value == 1 {
        return None;
    }
    // 2 + 2 is the canonical four.
    if l.value == 2 && r.value == 2 {
        return None;
    }
    Some(Expr::build(
        OpTag::Multiply,
        l.ops + r.ops + 1,
        format!("{} \\times {}", bracket_for_mul(l), bracket_for_mul(r)),
        &l.value * &r.value,
        l.span.join(r.span),
    ))
}

fn div(l: &Expr, r: &Expr) -> Option<Expr> {
    if l.tag == OpTag::Negate || r.tag == OpTag::Negate {
        return None;
    }
    // a / (b x c) covers (a / b) / c, and (a / b) x c covers a / (b / c).
    if l.tag == OpTag::Divide || r.tag == OpTag::Divide {
        return None;
    }
    // sqrt(a / b) covers sqrt(a) / sqrt(b).
    if l.tag == OpTag::SquareRoot && r.tag == OpTag::SquareRoot {
        return None;
    }
    if r.value.is_zero() {
        return None;
    }
    // 0 x a covers 0 / a.
    if l.value.is_zero() {
        return None;
    }
    // Unit divisors take the multiply form.
    if r.value == 1 || r.value == -1 {
        return None;
    }
    let value = l.value.checked_div(&r.value).ok()?;
    Some(Expr::build(
        OpTag::Divide,
        l.ops + r.ops + 1,
        format!("\\frac{{{}}}{{{}}}", l.text, r.text),
        value,
        l.span.join(r.span),
    ))
}

fn pow(l: &Expr, r: &Expr) -> Option<Expr> {
    // (a^b)^c and sqrt(a)^b renest into a single exponent.
    if matches!(l.tag, OpTag::Exponentiate | OpTag::SquareRoot) {
        return None;
    }
    let base_is_unit = l.value == 1 || l.value == -1;
    if !base_is_unit {
        let limit = BigUint::from(MAX_EXPONENT_MAGNITUDE);
        if *r.value.numer().magnitude() > limit || *r.value.denom() > limit {
            return None;
        }
    }
    // x^1 is x.
    if r.value == 1 {
        return None;
    }
    if l.value == 1 && !r.is_plain_number() {
        return None;
    }
    if r.value.is_zero() && !l.is_plain_number() {
        return None;
    }
    if l.value.is_zero() && !r.value.is_zero() {
        return None;
    }

    let base = if r.value.is_negative() {
        l.value.recip().ok()?
    } else {
        l.value.clone()
    };
    let exp_num = r.value.numer().magnitude();
    let exp_den = r.value.denom();
    let root_num = integer_nth_root(base.numer(), exp_den)?;
    let root_den = integer_nth_root(&BigInt::from(base.denom().clone()), exp_den)?;
    let value = Rational::new(
        integer_pow(&root_num, exp_num),
        integer_pow(&root_den, exp_num),
    )
    .ok()?;

    Some(Expr::build(
        OpTag::Exponentiate,
        l.ops + r.ops + 1,
        format!("{}^{{{}}}", bracket_for_base(l), r.text),
        value,
        l.span.join(r.span),
    ))
}
