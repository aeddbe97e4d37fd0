//! Patterns: `[tag, attributes, ...payload]`.

use serde_json::Value as Json;

use super::attributes::AttributeCodec;
use super::json::{array, check_depth, expect_len, from_bytes, tagged, to_bytes};
use super::literal::{literal_from_json, literal_to_json};
use super::naming::{fqname_from_json, fqname_to_json, name_from_json, name_to_json};
use super::options::Options;
use super::tags::{self, pattern as tag};
use super::types::header;
use crate::error::{Result, ResultExt};
use crate::ir::Pattern;

pub fn pattern_to_json<A>(
    options: &Options,
    attrs: &AttributeCodec<A>,
    pattern: &Pattern<A>,
) -> Result<Json> {
    write_pattern(options, attrs, pattern, 1)
}

pub fn pattern_from_json<A>(
    options: &Options,
    attrs: &AttributeCodec<A>,
    json: &Json,
) -> Result<Pattern<A>> {
    read_pattern(options, attrs, json, 1)
}

pub fn encode_pattern<A>(
    options: &Options,
    attrs: &AttributeCodec<A>,
    pattern: &Pattern<A>,
) -> Result<Vec<u8>> {
    to_bytes(options, &pattern_to_json(options, attrs, pattern)?)
}

pub fn decode_pattern<A>(
    options: &Options,
    attrs: &AttributeCodec<A>,
    bytes: &[u8],
) -> Result<Pattern<A>> {
    pattern_from_json(options, attrs, &from_bytes(options, bytes)?)
}

pub(crate) fn write_pattern<A>(
    options: &Options,
    attrs: &AttributeCodec<A>,
    pattern: &Pattern<A>,
    depth: usize,
) -> Result<Json> {
    check_depth(options, depth)?;
    let list = |patterns: &[Pattern<A>]| -> Result<Json> {
        patterns
            .iter()
            .map(|p| write_pattern(options, attrs, p, depth + 1))
            .collect::<Result<Vec<_>>>()
            .map(Json::Array)
    };

    let items = match pattern {
        Pattern::Wildcard(a) => header(options, attrs, tag::WILDCARD, a)?,
        Pattern::As(a, subject, name) => {
            let mut items = header(options, attrs, tag::AS, a)?;
            items.push(write_pattern(options, attrs, subject, depth + 1).context("AsPattern subject")?);
            items.push(name_to_json(name));
            items
        }
        Pattern::Tuple(a, elements) => {
            let mut items = header(options, attrs, tag::TUPLE, a)?;
            items.push(list(elements.as_slice()).context("TuplePattern elements")?);
            items
        }
        Pattern::Constructor(a, name, args) => {
            let mut items = header(options, attrs, tag::CONSTRUCTOR, a)?;
            items.push(fqname_to_json(name));
            items.push(list(args.as_slice()).context("ConstructorPattern arguments")?);
            items
        }
        Pattern::EmptyList(a) => header(options, attrs, tag::EMPTY_LIST, a)?,
        Pattern::HeadTail(a, head, tail) => {
            let mut items = header(options, attrs, tag::HEAD_TAIL, a)?;
            items.push(write_pattern(options, attrs, head, depth + 1).context("HeadTailPattern head")?);
            items.push(write_pattern(options, attrs, tail, depth + 1).context("HeadTailPattern tail")?);
            items
        }
        Pattern::Literal(a, literal) => {
            let mut items = header(options, attrs, tag::LITERAL, a)?;
            items.push(literal_to_json(options, literal).context("LiteralPattern")?);
            items
        }
        Pattern::Unit(a) => header(options, attrs, tag::UNIT, a)?,
    };
    Ok(Json::Array(items))
}

pub(crate) fn read_pattern<A>(
    options: &Options,
    attrs: &AttributeCodec<A>,
    json: &Json,
    depth: usize,
) -> Result<Pattern<A>> {
    check_depth(options, depth)?;
    let (raw_tag, items) = tagged(json, "Pattern")?;
    let kind = tags::resolve("Pattern", tag::ALL, options.format_version, raw_tag)?;
    let expected = match kind {
        "AsPattern" | "ConstructorPattern" | "HeadTailPattern" => 4,
        "TuplePattern" | "LiteralPattern" => 3,
        _ => 2,
    };
    expect_len(kind, items, expected)?;
    let a = attrs.decode(&items[1]).with_context(|| format!("{kind} attributes"))?;

    let list = |json: &Json| -> Result<Vec<Pattern<A>>> {
        array(json, "list of patterns")?
            .iter()
            .enumerate()
            .map(|(i, p)| read_pattern(options, attrs, p, depth + 1).with_context(|| format!("[{i}]")))
            .collect()
    };
    let nested = |json: &Json, context: &'static str| {
        read_pattern(options, attrs, json, depth + 1).context(context)
    };

    let pattern = match kind {
        "WildcardPattern" => Pattern::Wildcard(a),
        "AsPattern" => Pattern::as_pattern(
            a,
            nested(&items[2], "AsPattern subject")?,
            name_from_json(&items[3]).context("AsPattern name")?,
        ),
        "TuplePattern" => Pattern::Tuple(a, list(&items[2]).context("TuplePattern elements")?),
        "ConstructorPattern" => Pattern::Constructor(
            a,
            fqname_from_json(&items[2]).context("ConstructorPattern name")?,
            list(&items[3]).context("ConstructorPattern arguments")?,
        ),
        "EmptyListPattern" => Pattern::EmptyList(a),
        "HeadTailPattern" => Pattern::head_tail(
            a,
            nested(&items[2], "HeadTailPattern head")?,
            nested(&items[3], "HeadTailPattern tail")?,
        ),
        "LiteralPattern" => Pattern::Literal(
            a,
            literal_from_json(options, &items[2]).context("LiteralPattern")?,
        ),
        _ => Pattern::Unit(a),
    };
    Ok(pattern)
}
