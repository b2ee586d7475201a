use thiserror::Error;

use crate::enumerate::InputError;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),
    #[error("Failed to start search worker: {0}")]
    Worker(#[from] std::io::Error),
}
