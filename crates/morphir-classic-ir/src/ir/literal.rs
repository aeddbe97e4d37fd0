//! Literal constants that can appear in patterns and values.

use super::decimal::Decimal;
use crate::error::Result;

/// Closed set of literal kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Bool(bool),
    Char(char),
    String(String),
    /// 64-bit signed integer
    WholeNumber(i64),
    Float(f64),
    /// Arbitrary-precision decimal, compared numerically
    Decimal(Decimal),
}

impl Literal {
    pub fn bool(value: bool) -> Self {
        Literal::Bool(value)
    }

    pub fn char(value: char) -> Self {
        Literal::Char(value)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Literal::String(value.into())
    }

    pub fn whole_number(value: i64) -> Self {
        Literal::WholeNumber(value)
    }

    pub fn float(value: f64) -> Self {
        Literal::Float(value)
    }

    /// Create a decimal literal from its textual form.
    pub fn decimal(text: &str) -> Result<Self> {
        Decimal::parse(text).map(Literal::Decimal)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Literal::Bool(_) => "BoolLiteral",
            Literal::Char(_) => "CharLiteral",
            Literal::String(_) => "StringLiteral",
            Literal::WholeNumber(_) => "WholeNumberLiteral",
            Literal::Float(_) => "FloatLiteral",
            Literal::Decimal(_) => "DecimalLiteral",
        }
    }
}
