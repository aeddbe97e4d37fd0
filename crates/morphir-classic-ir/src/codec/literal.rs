use serde_json::{Number, Value as Json};

use super::json::{from_bytes, kind_of, string, to_bytes, tuple};
use super::options::Options;
use super::tags::{self, literal as tag};
use crate::error::{Error, Result, ResultExt};
use crate::ir::{Decimal, Literal};

pub fn literal_to_json(options: &Options, literal: &Literal) -> Result<Json> {
    let version = options.format_version;
    let (tag, value) = match literal {
        Literal::Bool(b) => (tag::BOOL, Json::Bool(*b)),
        Literal::Char(c) => (tag::CHAR, Json::String(c.to_string())),
        Literal::String(s) => (tag::STRING, Json::String(s.clone())),
        Literal::WholeNumber(n) => (tag::WHOLE_NUMBER, Json::from(*n)),
        Literal::Float(f) => {
            let number = Number::from_f64(*f).ok_or_else(|| Error::InvalidFormat {
                expected: "finite float",
                found: f.to_string(),
            })?;
            (tag::FLOAT, Json::Number(number))
        }
        Literal::Decimal(d) => (tag::DECIMAL, Json::String(d.to_string())),
    };
    Ok(Json::Array(vec![Json::from(tag.spell(version)), value]))
}

pub fn literal_from_json(options: &Options, json: &Json) -> Result<Literal> {
    let items = tuple(json, "Literal", 2)?;
    let raw_tag = string(&items[0], "Literal tag")?;
    let kind = tags::resolve("Literal", tag::ALL, options.format_version, raw_tag)?;
    let value = &items[1];
    let literal = match kind {
        "BoolLiteral" => match value {
            Json::Bool(b) => Literal::Bool(*b),
            other => return Err(unexpected("bool", other)).context(raw_tag),
        },
        "CharLiteral" => {
            let text = string(value, "single-character string").context(raw_tag)?;
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Literal::Char(c),
                _ => return Err(Error::InvalidChar(text.to_string())).context(raw_tag),
            }
        }
        "StringLiteral" => Literal::String(string(value, "string").context(raw_tag)?.to_string()),
        "WholeNumberLiteral" => match value.as_i64() {
            Some(n) => Literal::WholeNumber(n),
            None => return Err(unexpected("whole number", value)).context(raw_tag),
        },
        "FloatLiteral" => match value.as_f64() {
            Some(f) => Literal::Float(f),
            None => return Err(unexpected("float", value)).context(raw_tag),
        },
        "DecimalLiteral" => {
            let text = string(value, "decimal string").context(raw_tag)?;
            Literal::Decimal(Decimal::parse(text).context(raw_tag)?)
        }
        other => {
            return Err(Error::UnknownKind {
                entity: "Literal",
                tag: other.to_string(),
            });
        }
    };
    Ok(literal)
}

fn unexpected(expected: &'static str, found: &Json) -> Error {
    match found {
        Json::Null => Error::Null { expected },
        other => Error::UnexpectedShape {
            expected,
            found: kind_of(other),
        },
    }
}

pub fn encode_literal(options: &Options, literal: &Literal) -> Result<Vec<u8>> {
    to_bytes(options, &literal_to_json(options, literal)?)
}

pub fn decode_literal(options: &Options, bytes: &[u8]) -> Result<Literal> {
    literal_from_json(options, &from_bytes(options, bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::FormatVersion;
    use rstest::rstest;
    use serde_json::json;

    fn options(version: FormatVersion) -> Options {
        Options::new(version)
    }

    #[rstest]
    #[case(Literal::bool(true), json!(["bool_literal", true]), json!(["BoolLiteral", true]))]
    #[case(Literal::char('x'), json!(["char_literal", "x"]), json!(["CharLiteral", "x"]))]
    #[case(Literal::string("hi"), json!(["string_literal", "hi"]), json!(["StringLiteral", "hi"]))]
    #[case(Literal::whole_number(-4), json!(["int_literal", -4]), json!(["WholeNumberLiteral", -4]))]
    #[case(Literal::float(1.5), json!(["float_literal", 1.5]), json!(["FloatLiteral", 1.5]))]
    #[case(
        Literal::decimal("12.50").unwrap(),
        json!(["decimal_literal", "12.50"]),
        json!(["DecimalLiteral", "12.50"])
    )]
    fn test_literal_wire_shapes(#[case] literal: Literal, #[case] v1: Json, #[case] v3: Json) {
        assert_eq!(literal_to_json(&options(FormatVersion::V1), &literal).unwrap(), v1);
        assert_eq!(literal_to_json(&options(FormatVersion::V3), &literal).unwrap(), v3);
        assert_eq!(literal_from_json(&options(FormatVersion::V1), &v1).unwrap(), literal);
        assert_eq!(literal_from_json(&options(FormatVersion::V2), &v3).unwrap(), literal);
        assert!(literal_from_json(&options(FormatVersion::V1), &v3).is_err());
        assert!(literal_from_json(&options(FormatVersion::V3), &v1).is_err());
    }

    #[test]
    fn test_char_literal_must_be_one_character() {
        let err = literal_from_json(&Options::default(), &json!(["CharLiteral", "ab"])).unwrap_err();
        assert!(matches!(err.root(), Error::InvalidChar(s) if s == "ab"));
    }

    #[test]
    fn test_literal_array_length() {
        let err = literal_from_json(&Options::default(), &json!(["BoolLiteral", true, 1])).unwrap_err();
        assert_eq!(err.to_string(), "Literal expects 2 elements, got 3");
    }

    #[test]
    fn test_nan_cannot_be_encoded() {
        assert!(literal_to_json(&Options::default(), &Literal::float(f64::NAN)).is_err());
    }

    #[test]
    fn test_decimal_text_is_written_back_verbatim() {
        let wire = json!(["DecimalLiteral", "-12.500"]);
        let decoded = literal_from_json(&Options::default(), &wire).unwrap();
        assert_eq!(decoded, Literal::decimal("-12.5").unwrap());
        assert_eq!(literal_to_json(&Options::default(), &decoded).unwrap(), wire);
    }
}
