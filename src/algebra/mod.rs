//! Expression records and the canonicalizing operator algebra

mod binary;
mod errors;
mod expr;
mod render;
mod unary;

pub use binary::{BINARY_OPS, BinaryOp};
pub use errors::AlgebraError;
pub use expr::{Expr, OpTag, Span};
pub use unary::{UNARY_OPS, UnaryOp};
