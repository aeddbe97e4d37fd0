//! Shape checks over `serde_json::Value` shared by every decoder.

use serde::Deserialize;
use serde_json::{Map, Value as Json};

use super::options::Options;
use crate::error::{Error, Result};

pub(crate) fn kind_of(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

pub(crate) fn array<'a>(json: &'a Json, expected: &'static str) -> Result<&'a [Json]> {
    match json {
        Json::Array(items) => Ok(items),
        Json::Null => Err(Error::Null { expected }),
        other => Err(Error::UnexpectedShape {
            expected,
            found: kind_of(other),
        }),
    }
}

/// An array of exactly `len` elements.
pub(crate) fn tuple<'a>(json: &'a Json, entity: &'static str, len: usize) -> Result<&'a [Json]> {
    let items = array(json, entity)?;
    expect_len(entity, items, len)?;
    Ok(items)
}

pub(crate) fn expect_len(entity: &'static str, items: &[Json], expected: usize) -> Result<()> {
    if items.len() == expected {
        Ok(())
    } else {
        Err(Error::LengthMismatch {
            entity,
            expected,
            actual: items.len(),
        })
    }
}

pub(crate) fn object<'a>(json: &'a Json, expected: &'static str) -> Result<&'a Map<String, Json>> {
    match json {
        Json::Object(map) => Ok(map),
        Json::Null => Err(Error::Null { expected }),
        other => Err(Error::UnexpectedShape {
            expected,
            found: kind_of(other),
        }),
    }
}

pub(crate) fn key<'a>(
    map: &'a Map<String, Json>,
    entity: &'static str,
    key: &'static str,
) -> Result<&'a Json> {
    map.get(key).ok_or(Error::MissingKey { entity, key })
}

pub(crate) fn string<'a>(json: &'a Json, expected: &'static str) -> Result<&'a str> {
    match json {
        Json::String(s) => Ok(s),
        Json::Null => Err(Error::Null { expected }),
        other => Err(Error::UnexpectedShape {
            expected,
            found: kind_of(other),
        }),
    }
}

/// Splits `[tag, ...]` into the tag and the whole array.
pub(crate) fn tagged<'a>(json: &'a Json, entity: &'static str) -> Result<(&'a str, &'a [Json])> {
    let items = array(json, entity)?;
    let tag = items.first().ok_or(Error::LengthMismatch {
        entity,
        expected: 1,
        actual: 0,
    })?;
    Ok((string(tag, "tag string")?, items))
}

/// Fails once a tree is nested deeper than the configured limit.
pub(crate) fn check_depth(options: &Options, depth: usize) -> Result<()> {
    if depth > options.max_depth {
        Err(Error::DepthLimitExceeded {
            limit: options.max_depth,
        })
    } else {
        Ok(())
    }
}

/// Array and object levels a single tree level may take on the wire. Let
/// bindings, record fields and value definitions wrap their payload in
/// several containers.
const WIRE_LEVELS_PER_DEPTH: usize = 8;

/// Containers around the outermost tree, up to a full distribution document.
const WIRE_ENVELOPE: usize = 32;

/// Deepest array/object nesting a document may have under `options`.
///
/// Encoding and decoding enforce the same bound, so anything the encoder
/// writes can be read back.
pub(crate) fn wire_nesting_limit(options: &Options) -> usize {
    options
        .max_depth
        .saturating_mul(WIRE_LEVELS_PER_DEPTH)
        .saturating_add(WIRE_ENVELOPE)
}

/// Fails once the JSON text nests arrays and objects deeper than `limit`.
/// Brackets inside strings are ignored.
fn check_nesting(options: &Options, bytes: &[u8]) -> Result<()> {
    let limit = wire_nesting_limit(options);
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for &byte in bytes {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                if depth > limit {
                    return Err(Error::DepthLimitExceeded {
                        limit: options.max_depth,
                    }
                    .context(format!("JSON nesting deeper than {limit}")));
                }
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

pub(crate) fn to_bytes(options: &Options, json: &Json) -> Result<Vec<u8>> {
    let bytes = serde_json::to_vec(json)?;
    check_nesting(options, &bytes)?;
    Ok(bytes)
}

/// Parses a document whose nesting is bounded by [`wire_nesting_limit`]
/// rather than serde_json's fixed recursion limit. The parser runs on a
/// growable stack.
pub(crate) fn from_bytes(options: &Options, bytes: &[u8]) -> Result<Json> {
    check_nesting(options, bytes)?;
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    deserializer.disable_recursion_limit();
    let json = Json::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_is_reported_with_expectation() {
        let err = array(&json!(null), "Type").unwrap_err();
        assert_eq!(err.to_string(), "expected Type, got null");
    }

    #[test]
    fn test_length_mismatch_names_both_counts() {
        let err = tuple(&json!([1, 2, 3]), "QName", 2).unwrap_err();
        assert_eq!(err.to_string(), "QName expects 2 elements, got 3");
    }

    #[test]
    fn test_tagged_requires_string_tag() {
        assert_eq!(tagged(&json!(["Unit", {}]), "Type").unwrap().0, "Unit");
        assert!(tagged(&json!([]), "Type").is_err());
        assert!(tagged(&json!([1, {}]), "Type").is_err());
    }

    #[test]
    fn test_missing_key() {
        let value = json!({"name": []});
        let map = object(&value, "Field").unwrap();
        let err = key(map, "Field", "tpe").unwrap_err();
        assert_eq!(err.to_string(), "Field: missing field 'tpe'");
    }

    #[test]
    fn test_nesting_follows_max_depth() {
        let options = Options::default().with_max_depth(1);
        let limit = wire_nesting_limit(&options);
        assert_eq!(limit, 40);

        let fits = format!("{}{}", "[".repeat(limit), "]".repeat(limit));
        assert!(from_bytes(&options, fits.as_bytes()).is_ok());

        let deep = format!("{}{}", "[".repeat(limit + 1), "]".repeat(limit + 1));
        let err = from_bytes(&options, deep.as_bytes()).unwrap_err();
        assert!(matches!(err.root(), Error::DepthLimitExceeded { limit: 1 }));
        let err = to_bytes(&options, &serde_json::from_str(&deep).unwrap()).unwrap_err();
        assert!(matches!(err.root(), Error::DepthLimitExceeded { limit: 1 }));
    }

    #[test]
    fn test_brackets_inside_strings_do_not_count() {
        let options = Options::default().with_max_depth(1);
        let text = format!("[\"{}\\\"\"]", "[{".repeat(100));
        let expected = json!([format!("{}\"", "[{".repeat(100))]);
        assert_eq!(from_bytes(&options, text.as_bytes()).unwrap(), expected);
    }

    #[test]
    fn test_hostile_nesting_is_rejected_before_parsing() {
        let hostile = "[".repeat(100_000);
        let err = from_bytes(&Options::default(), hostile.as_bytes()).unwrap_err();
        assert!(matches!(err.root(), Error::DepthLimitExceeded { .. }));
        assert!(from_bytes(&Options::default(), b"[] []").is_err());
    }
}
