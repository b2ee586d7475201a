use crate::algebra::expr::{Expr, OpTag};

fn wrapped(text: &str) -> String {
    format!("\\left({text}\\right)")
}

/// Multiplication operands bracket anything binding looser than a product.
pub(crate) fn bracket_for_mul(expr: &Expr) -> String {
    match expr.tag {
        OpTag::Add | OpTag::Subtract | OpTag::Negate => wrapped(&expr.text),
        _ => expr.text.clone(),
    }
}

/// Exponentiation bases bracket everything that is not self-delimiting.
pub(crate) fn bracket_for_base(expr: &Expr) -> String {
    match expr.tag {
        OpTag::Number | OpTag::Divide | OpTag::SquareRoot => expr.text.clone(),
        _ => wrapped(&expr.text),
    }
}

pub(crate) fn bracket_for_negate(expr: &Expr) -> String {
    match expr.tag {
        OpTag::Add | OpTag::Subtract | OpTag::Multiply => wrapped(&expr.text),
        _ => expr.text.clone(),
    }
}

pub(crate) fn bracket_for_factorial(expr: &Expr) -> String {
    match expr.tag {
        OpTag::Number => expr.text.clone(),
        _ => wrapped(&expr.text),
    }
}
