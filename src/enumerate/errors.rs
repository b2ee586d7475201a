use thiserror::Error;

/// Errors raised while validating or enumerating the input digit string
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Digit string must contain only digits: {0}")]
    InvalidDigitString(String),
}
