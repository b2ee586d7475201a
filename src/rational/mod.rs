//! Exact arbitrary-precision rational arithmetic

mod arith;
mod core;
mod errors;
mod roots;

pub use self::core::Rational;
pub use errors::RationalError;
pub use roots::{integer_nth_root, integer_pow};

#[cfg(test)]
mod tests;
