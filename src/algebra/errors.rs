use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgebraError {
    #[error("Invalid numeric literal: {0}")]
    InvalidLiteral(String),
}
