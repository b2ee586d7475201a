use std::collections::HashMap;

use crate::algebra::{BinaryOp, Expr, Span, UnaryOp};
use crate::rational::Rational;

/// Value- and span-keyed store of the best-known derivation.
///
/// One instance lives per operand list. Once a value over a digit span has
/// been reached, an equal-or-worse alternate derivation with a different
/// rendering is rejected after a single hash lookup; a derivation with the
/// identical rendering re-registers idempotently. This is what bounds the
/// otherwise exponential operator-application search.
#[derive(Debug, Default)]
pub struct PruningCache {
    best: HashMap<(Rational, Span), Expr>,
}

impl PruningCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a literal operand without passing through an operator.
    pub fn register_number(&mut self, expr: &Expr) {
        self.best
            .insert((expr.value().clone(), expr.span()), expr.clone());
    }

    /// Apply a binary operator through the cache.
    pub fn apply_binary(&mut self, op: BinaryOp, left: &Expr, right: &Expr) -> Option<Expr> {
        let expr = op.build(left, right)?;
        self.admit(expr)
    }

    /// Apply a unary operator through the cache.
    pub fn apply_unary(&mut self, op: UnaryOp, operand: &Expr) -> Option<Expr> {
        let expr = op.build(operand)?;
        self.admit(expr)
    }

    fn admit(&mut self, expr: Expr) -> Option<Expr> {
        let key = (expr.value().clone(), expr.span());
        if let Some(existing) = self.best.get(&key)
            && existing.ops() <= expr.ops()
            && existing.text() != expr.text()
        {
            return None;
        }
        self.best.insert(key, expr.clone());
        Some(expr)
    }

    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}
