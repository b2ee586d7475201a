use num_bigint::{BigInt, BigUint};
use num_traits::ToPrimitive;

use crate::algebra::expr::{Expr, OpTag};
use crate::algebra::render::{bracket_for_factorial, bracket_for_negate};
use crate::rational::{Rational, integer_nth_root};

/// 0! through 20!; anything larger is pruned before it is computed.
const FACTORIALS: [u64; 21] = [
    1,
    1,
    2,
    6,
    24,
    120,
    720,
    5_040,
    40_320,
    362_880,
    3_628_800,
    39_916_800,
    479_001_600,
    6_227_020_800,
    87_178_291_200,
    1_307_674_368_000,
    20_922_789_888_000,
    355_687_428_096_000,
    6_402_373_705_728_000,
    121_645_100_408_832_000,
    2_432_902_008_176_640_000,
];

/// The unary operators the search closes every result under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Factorial,
    Negate,
    SquareRoot,
}

pub const UNARY_OPS: [UnaryOp; 3] = [UnaryOp::Factorial, UnaryOp::Negate, UnaryOp::SquareRoot];

impl UnaryOp {
    /// Build the canonical expression for this operator, or prune.
    pub fn build(self, operand: &Expr) -> Option<Expr> {
        match self {
            UnaryOp::Factorial => factorial(operand),
            UnaryOp::Negate => negate(operand),
            UnaryOp::SquareRoot => square_root(operand),
        }
    }
}

fn factorial(x: &Expr) -> Option<Expr> {
    if !x.value.is_integer() || x.value.is_negative() {
        return None;
    }
    // The bare literal beats 1!.
    if x.value == 1 {
        return None;
    }
    if x.value > 20 {
        return None;
    }
    let n = x.value.numer().to_u64()?;
    Some(Expr::build(
        OpTag::Factorial,
        x.ops + 1,
        format!("{}!", bracket_for_factorial(x)),
        Rational::from_integer(FACTORIALS[n as usize]),
        x.span,
    ))
}

fn negate(x: &Expr) -> Option<Expr> {
    // The sign distributes at construction: never wrap a sum, and never
    // stack negations.
    if matches!(x.tag, OpTag::Add | OpTag::Subtract | OpTag::Negate) {
        return None;
    }
    Some(Expr::build(
        OpTag::Negate,
        x.ops + 1,
        format!("-{}", bracket_for_negate(x)),
        -&x.value,
        x.span,
    ))
}

fn square_root(x: &Expr) -> Option<Expr> {
    let two = BigUint::from(2u32);
    let root_num = integer_nth_root(x.value.numer(), &two)?;
    let root_den = integer_nth_root(&BigInt::from(x.value.denom().clone()), &two)?;
    let value = Rational::new(root_num, root_den).ok()?;
    Some(Expr::build(
        OpTag::SquareRoot,
        x.ops + 1,
        format!("\\sqrt{{{}}}", x.text),
        value,
        x.span,
    ))
}
