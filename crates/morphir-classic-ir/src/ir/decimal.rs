//! Arbitrary-precision decimal values as carried by decimal literals.

use crate::error::{Error, Result};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A decimal number kept in its textual form.
///
/// The text is validated on construction and preserved exactly. The codec
/// writes this text as the decimal's string form instead of re-rendering a
/// normalized one, so `"-12.500"` is read and written back as `"-12.500"`.
/// Equality is numeric: `1.50`, `1.5` and `15e-1` are equal, as are `0` and
/// `-0.00`.
#[derive(Clone)]
pub struct Decimal {
    text: String,
    normalized: Normalized,
}

/// Sign, significant digits without leading or trailing zeros, and the
/// power of ten applied to them. Zero has no digits and no sign.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Normalized {
    negative: bool,
    digits: String,
    exponent: i64,
}

impl Decimal {
    pub fn parse(text: &str) -> Result<Self> {
        let normalized = normalize(text).ok_or_else(|| Error::InvalidDecimal(text.to_string()))?;
        Ok(Self {
            text: text.to_string(),
            normalized,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_zero(&self) -> bool {
        self.normalized.digits.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.normalized.negative
    }
}

fn normalize(text: &str) -> Option<Normalized> {
    let (negative, rest) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (mantissa, exponent) = match rest.find(['e', 'E']) {
        Some(at) => (&rest[..at], parse_exponent(&rest[at + 1..])?),
        None => (rest, 0),
    };

    let (integer, fraction) = match mantissa.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (mantissa, ""),
    };
    if integer.is_empty() && fraction.is_empty() {
        return None;
    }
    if !integer.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let all_digits = format!("{integer}{fraction}");
    let significant = all_digits.trim_start_matches('0');
    let trimmed = significant.trim_end_matches('0');
    let trailing = (significant.len() - trimmed.len()) as i64;
    let exponent = exponent
        .checked_sub(fraction.len() as i64)?
        .checked_add(trailing)?;

    if trimmed.is_empty() {
        return Some(Normalized {
            negative: false,
            digits: String::new(),
            exponent: 0,
        });
    }

    Some(Normalized {
        negative,
        digits: trimmed.to_string(),
        exponent,
    })
}

fn parse_exponent(text: &str) -> Option<i64> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for Decimal {}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Decimal").field(&self.text).finish()
    }
}

impl std::str::FromStr for Decimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Decimal::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn dec(text: &str) -> Decimal {
        Decimal::parse(text).unwrap()
    }

    #[rstest]
    #[case("1.50", "1.5")]
    #[case("15e-1", "1.5")]
    #[case("0.00", "-0")]
    #[case("+12", "12.000")]
    #[case("1200", "1.2E3")]
    #[case(".5", "0.5")]
    fn test_numeric_equality(#[case] left: &str, #[case] right: &str) {
        assert_eq!(dec(left), dec(right));
    }

    #[rstest]
    #[case("1.5", "1.05")]
    #[case("-1", "1")]
    #[case("10", "1")]
    fn test_numeric_inequality(#[case] left: &str, #[case] right: &str) {
        assert_ne!(dec(left), dec(right));
    }

    #[rstest]
    #[case("")]
    #[case("-")]
    #[case(".")]
    #[case("1.2.3")]
    #[case("1e")]
    #[case("abc")]
    #[case("1_000")]
    fn test_rejects_malformed(#[case] text: &str) {
        assert!(matches!(Decimal::parse(text), Err(Error::InvalidDecimal(_))));
    }

    #[test]
    fn test_preserves_text() {
        assert_eq!(dec("1.50").to_string(), "1.50");
        assert!(dec("-0.0").is_zero());
        assert!(!dec("-0.0").is_negative());
    }
}
