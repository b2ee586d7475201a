use num_bigint::{BigInt, BigUint};

use crate::algebra::errors::AlgebraError;
use crate::rational::Rational;

/// Which operator produced an expression. Drives the canonicalization rules
/// and the bracketing decisions; no child pointers are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpTag {
    Number,
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
    Factorial,
    Negate,
    SquareRoot,
}

/// The `[start, end)` range of input digit positions an expression was
/// derived from. Used purely as a cache-partitioning key, never for
/// evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The enclosing range of two adjacent spans.
    pub fn join(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// A sub-expression as a flat immutable record: an operator tag, the number
/// of operator applications used so far, the rendered text, the exact value
/// and the originating digit span.
#[derive(Debug, Clone)]
pub struct Expr {
    pub(crate) tag: OpTag,
    pub(crate) ops: u32,
    pub(crate) text: String,
    pub(crate) value: Rational,
    pub(crate) span: Span,
}

impl Expr {
    pub(crate) fn build(tag: OpTag, ops: u32, text: String, value: Rational, span: Span) -> Self {
        Self {
            tag,
            ops,
            text,
            value,
            span,
        }
    }

    /// Parse a digit-and-optional-decimal-point literal into a
    /// zero-operation expression. No floating point is involved: the digits
    /// become a numerator over a power of ten.
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::InvalidLiteral` when `text` is not of the form
    /// `<digits>` or `<digits>.<digits>`.
    pub fn number(text: &str, span: Span) -> Result<Self, AlgebraError> {
        let value = parse_decimal(text)
            .ok_or_else(|| AlgebraError::InvalidLiteral(text.to_string()))?;
        Ok(Self {
            tag: OpTag::Number,
            ops: 0,
            text: text.to_string(),
            value,
            span,
        })
    }

    pub fn tag(&self) -> OpTag {
        self.tag
    }

    /// Number of operator applications used to build this node from leaves.
    pub fn ops(&self) -> u32 {
        self.ops
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> &Rational {
        &self.value
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// A literal that could not be written more simply: an undotted integer,
    /// or a decimal forced by its leading zero.
    pub fn is_plain_number(&self) -> bool {
        if self.tag != OpTag::Number {
            return false;
        }
        if self.text.contains('.') {
            self.text.starts_with('0')
        } else {
            true
        }
    }
}

fn parse_decimal(text: &str) -> Option<Rational> {
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (text, ""),
    };
    if int_part.is_empty() {
        return None;
    }
    if text.contains('.') && frac_part.is_empty() {
        return None;
    }
    if !int_part.chars().chain(frac_part.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    let digits = format!("{int_part}{frac_part}");
    let num = BigInt::parse_bytes(digits.as_bytes(), 10)?;
    let den = BigUint::from(10u32).pow(frac_part.len() as u32);
    Some(Rational::normalized(num, den))
}
