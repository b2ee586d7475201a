//! annum - Find arithmetic expressions over a digit string
//!
//! Given a string of digits (typically a year), this library searches every
//! way to split the digits into numeric literals and combine them, in order,
//! with arithmetic operators, reporting for each reachable positive integer
//! the fewest-operations expression that produces it. All arithmetic is
//! exact big-rational; algebraically redundant expressions are pruned at
//! construction so one canonical derivation per equivalence class survives.

pub mod algebra;
pub mod cli;
pub mod enumerate;
pub mod rational;
pub mod search;

// Re-export the main public API
pub use algebra::{Expr, OpTag, Span};
pub use enumerate::{InputError, OperandLists, validate_digit_string};
pub use rational::{Rational, RationalError};
pub use search::{SearchEvent, SearchHandle, SearchError, Solution, run_search, spawn};

use std::collections::HashMap;

use num_bigint::BigInt;

/// Run a complete search in the calling thread and return the final best
/// solution per integer, sorted by value.
///
/// This is a blocking convenience over [`run_search`]; use [`spawn`] to
/// stream solutions from a background worker instead.
///
/// # Errors
///
/// Returns an error if the digit string contains non-digit characters.
///
/// # Examples
///
/// ```
/// let solutions = annum::collect_solutions("11").unwrap();
/// assert!(solutions.iter().any(|s| s.expression == "1 + 1"));
/// ```
pub fn collect_solutions(digits: &str) -> Result<Vec<Solution>, SearchError> {
    let mut best: HashMap<BigInt, Solution> = HashMap::new();
    run_search(digits, |event| {
        if let SearchEvent::Solution(solution) = event {
            best.insert(solution.value.clone(), solution);
        }
        true
    })?;

    let mut solutions: Vec<Solution> = best.into_values().collect();
    solutions.sort_by(|a, b| a.value.cmp(&b.value));
    Ok(solutions)
}
