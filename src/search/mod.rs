//! The memoizing search engine: pruning cache, interval solver, solution
//! filtering and the background worker

mod cache;
mod core;
mod errors;
mod filter;
mod solver;
mod worker;

pub use cache::PruningCache;
pub use self::core::{SearchEvent, run_search};
pub use errors::SearchError;
pub use filter::{Solution, SolutionFilter};
pub use solver::ExprStream;
pub use worker::{SearchHandle, spawn};
