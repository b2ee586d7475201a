//! Digit-string validation, partition and operand-list enumeration

mod errors;
mod literals;
mod lists;
mod partitions;
mod validation;

pub use errors::InputError;
pub use literals::piece_readings;
pub use lists::OperandLists;
pub use partitions::Partitions;
pub use validation::validate_digit_string;

#[cfg(test)]
mod tests;
