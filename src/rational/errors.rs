use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RationalError {
    #[error("Division by zero")]
    DivisionByZero,
}
