use log::info;

use crate::enumerate::OperandLists;
use crate::search::errors::SearchError;
use crate::search::filter::{Solution, SolutionFilter};
use crate::search::solver::ExprStream;

/// One message in the output stream of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// A new or improved expression for a positive integer. A later event
    /// may supersede an earlier one for the same integer.
    Solution(Solution),
    /// The terminal message, emitted exactly once after every operand list
    /// has been exhausted.
    Done,
}

/// Run the complete search for one digit string, pushing events into
/// `sink` as they are found.
///
/// Every operand list gets a fresh pruning cache and solver; the solution
/// filter spans the whole input. A sink returning `false` abandons the
/// search wholesale — all engine state is scoped to this invocation and is
/// simply dropped.
///
/// # Errors
///
/// Returns an error when the digit string contains non-digit characters.
pub fn run_search(
    digits: &str,
    mut sink: impl FnMut(SearchEvent) -> bool,
) -> Result<(), SearchError> {
    info!("Starting search over digit string '{}'", digits);
    let lists = OperandLists::new(digits)?;

    let mut filter = SolutionFilter::new();
    for operands in lists {
        for expr in ExprStream::new(operands) {
            if let Some(solution) = filter.offer(&expr)
                && !sink(SearchEvent::Solution(solution))
            {
                info!("Consumer gone; abandoning search for '{}'", digits);
                return Ok(());
            }
        }
    }

    info!("Search complete for '{}'", digits);
    sink(SearchEvent::Done);
    Ok(())
}
