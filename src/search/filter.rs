use std::collections::HashMap;

use log::debug;
use num_bigint::BigInt;
use num_traits::Signed;

use crate::algebra::Expr;

/// A reachable positive integer paired with the canonical expression that
/// produces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub value: BigInt,
    pub ops: u32,
    pub expression: String,
}

/// Keeps only integer-valued, strictly positive results, remembering per
/// integer the first-seen fewest-operations expression.
#[derive(Debug, Default)]
pub struct SolutionFilter {
    best: HashMap<BigInt, u32>,
}

impl SolutionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a raw search result.
    ///
    /// Returns `Some` only when the expression introduces its integer or
    /// strictly improves on the best known operation count; ties keep the
    /// first-seen expression.
    pub fn offer(&mut self, expr: &Expr) -> Option<Solution> {
        if !expr.value().is_integer() {
            return None;
        }
        let value = expr.value().numer();
        if !value.is_positive() {
            return None;
        }
        if let Some(&ops) = self.best.get(value)
            && ops <= expr.ops()
        {
            return None;
        }
        self.best.insert(value.clone(), expr.ops());
        debug!(
            "New best for {}: {} ({} ops)",
            value,
            expr.text(),
            expr.ops()
        );
        Some(Solution {
            value: value.clone(),
            ops: expr.ops(),
            expression: expr.text().to_string(),
        })
    }
}
