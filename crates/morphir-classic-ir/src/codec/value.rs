//! Value expressions, value specifications and value definitions.
//!
//! Values carry two attribute codecs: `ta` for the types embedded in
//! definitions and `va` for value and pattern nodes.

use serde_json::{Map, Value as Json};

use super::attributes::AttributeCodec;
use super::json::{array, check_depth, expect_len, from_bytes, key, object, tagged, to_bytes, tuple};
use super::literal::{literal_from_json, literal_to_json};
use super::naming::{fqname_from_json, fqname_to_json, name_from_json, name_to_json};
use super::options::Options;
use super::pattern::{read_pattern, write_pattern};
use super::tags::{self, value as tag};
use super::types::{header, read_type, write_type};
use crate::error::{Result, ResultExt};
use crate::ir::{Pattern, Value, ValueDefinition, ValueSpecification};
use crate::naming::Name;

pub fn value_to_json<TA, VA>(
    options: &Options,
    ta: &AttributeCodec<TA>,
    va: &AttributeCodec<VA>,
    value: &Value<TA, VA>,
) -> Result<Json> {
    Writer { options, ta, va }.value(value, 1)
}

pub fn value_from_json<TA, VA>(
    options: &Options,
    ta: &AttributeCodec<TA>,
    va: &AttributeCodec<VA>,
    json: &Json,
) -> Result<Value<TA, VA>> {
    Reader { options, ta, va }.value(json, 1)
}

pub fn value_definition_to_json<TA, VA>(
    options: &Options,
    ta: &AttributeCodec<TA>,
    va: &AttributeCodec<VA>,
    definition: &ValueDefinition<TA, VA>,
) -> Result<Json> {
    Writer { options, ta, va }.definition(definition, 1)
}

pub fn value_definition_from_json<TA, VA>(
    options: &Options,
    ta: &AttributeCodec<TA>,
    va: &AttributeCodec<VA>,
    json: &Json,
) -> Result<ValueDefinition<TA, VA>> {
    Reader { options, ta, va }.definition(json, 1)
}

/// `{"inputs": [[name, type], ...], "output": type}`
pub fn value_specification_to_json<TA>(
    options: &Options,
    ta: &AttributeCodec<TA>,
    spec: &ValueSpecification<TA>,
) -> Result<Json> {
    let inputs = spec
        .inputs
        .iter()
        .map(|(name, tpe)| {
            let tpe = write_type(options, ta, tpe, 1).with_context(|| format!("input '{name}'"))?;
            Ok(Json::Array(vec![name_to_json(name), tpe]))
        })
        .collect::<Result<Vec<_>>>()?;
    let mut map = Map::new();
    map.insert("inputs".into(), Json::Array(inputs));
    map.insert("output".into(), write_type(options, ta, &spec.output, 1).context("output")?);
    Ok(Json::Object(map))
}

pub fn value_specification_from_json<TA>(
    options: &Options,
    ta: &AttributeCodec<TA>,
    json: &Json,
) -> Result<ValueSpecification<TA>> {
    const ENTITY: &str = "ValueSpecification";
    let map = object(json, ENTITY)?;
    let inputs = array(key(map, ENTITY, "inputs")?, "inputs")?
        .iter()
        .enumerate()
        .map(|(i, input)| {
            let pair = tuple(input, "input", 2).with_context(|| format!("inputs[{i}]"))?;
            let name = name_from_json(&pair[0]).with_context(|| format!("inputs[{i}]"))?;
            let tpe = read_type(options, ta, &pair[1], 1).with_context(|| format!("input '{name}'"))?;
            Ok((name, tpe))
        })
        .collect::<Result<Vec<_>>>()?;
    let output = read_type(options, ta, key(map, ENTITY, "output")?, 1).context("output")?;
    Ok(ValueSpecification::new(inputs, output))
}

pub fn encode_value<TA, VA>(
    options: &Options,
    ta: &AttributeCodec<TA>,
    va: &AttributeCodec<VA>,
    value: &Value<TA, VA>,
) -> Result<Vec<u8>> {
    to_bytes(options, &value_to_json(options, ta, va, value)?)
}

pub fn decode_value<TA, VA>(
    options: &Options,
    ta: &AttributeCodec<TA>,
    va: &AttributeCodec<VA>,
    bytes: &[u8],
) -> Result<Value<TA, VA>> {
    value_from_json(options, ta, va, &from_bytes(options, bytes)?)
}

pub fn encode_value_definition<TA, VA>(
    options: &Options,
    ta: &AttributeCodec<TA>,
    va: &AttributeCodec<VA>,
    definition: &ValueDefinition<TA, VA>,
) -> Result<Vec<u8>> {
    to_bytes(options, &value_definition_to_json(options, ta, va, definition)?)
}

pub fn decode_value_definition<TA, VA>(
    options: &Options,
    ta: &AttributeCodec<TA>,
    va: &AttributeCodec<VA>,
    bytes: &[u8],
) -> Result<ValueDefinition<TA, VA>> {
    value_definition_from_json(options, ta, va, &from_bytes(options, bytes)?)
}

pub fn encode_value_specification<TA>(
    options: &Options,
    ta: &AttributeCodec<TA>,
    spec: &ValueSpecification<TA>,
) -> Result<Vec<u8>> {
    to_bytes(options, &value_specification_to_json(options, ta, spec)?)
}

pub fn decode_value_specification<TA>(
    options: &Options,
    ta: &AttributeCodec<TA>,
    bytes: &[u8],
) -> Result<ValueSpecification<TA>> {
    value_specification_from_json(options, ta, &from_bytes(options, bytes)?)
}

struct Writer<'a, TA, VA> {
    options: &'a Options,
    ta: &'a AttributeCodec<TA>,
    va: &'a AttributeCodec<VA>,
}

impl<TA, VA> Writer<'_, TA, VA> {
    fn values(&self, values: &[Value<TA, VA>], depth: usize) -> Result<Json> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| self.value(v, depth).with_context(|| format!("[{i}]")))
            .collect::<Result<Vec<_>>>()
            .map(Json::Array)
    }

    fn named(&self, entries: &[(Name, Value<TA, VA>)], depth: usize) -> Result<Json> {
        entries
            .iter()
            .map(|(name, v)| {
                let v = self.value(v, depth).with_context(|| format!("'{name}'"))?;
                Ok(Json::Array(vec![name_to_json(name), v]))
            })
            .collect::<Result<Vec<_>>>()
            .map(Json::Array)
    }

    fn pattern(&self, pattern: &Pattern<VA>, depth: usize) -> Result<Json> {
        write_pattern(self.options, self.va, pattern, depth)
    }

    fn value(&self, value: &Value<TA, VA>, depth: usize) -> Result<Json> {
        check_depth(self.options, depth)?;
        let next = depth + 1;
        let head = |tag: tags::Tag, a: &VA| header(self.options, self.va, tag, a);

        let items = match value {
            Value::Literal(a, literal) => {
                let mut items = head(tag::LITERAL, a)?;
                items.push(literal_to_json(self.options, literal).context("Literal")?);
                items
            }
            Value::Constructor(a, name) => {
                let mut items = head(tag::CONSTRUCTOR, a)?;
                items.push(fqname_to_json(name));
                items
            }
            Value::Tuple(a, elements) => {
                let mut items = head(tag::TUPLE, a)?;
                items.push(self.values(elements, next).context("Tuple elements")?);
                items
            }
            Value::List(a, elements) => {
                let mut items = head(tag::LIST, a)?;
                items.push(self.values(elements, next).context("List elements")?);
                items
            }
            Value::Record(a, fields) => {
                let mut items = head(tag::RECORD, a)?;
                items.push(self.named(fields, next).context("Record fields")?);
                items
            }
            Value::Variable(a, name) => {
                let mut items = head(tag::VARIABLE, a)?;
                items.push(name_to_json(name));
                items
            }
            Value::Reference(a, name) => {
                let mut items = head(tag::REFERENCE, a)?;
                items.push(fqname_to_json(name));
                items
            }
            Value::Field(a, subject, name) => {
                let mut items = head(tag::FIELD, a)?;
                items.push(self.value(subject, next).context("Field subject")?);
                items.push(name_to_json(name));
                items
            }
            Value::FieldFunction(a, name) => {
                let mut items = head(tag::FIELD_FUNCTION, a)?;
                items.push(name_to_json(name));
                items
            }
            Value::Apply(a, function, argument) => {
                let mut items = head(tag::APPLY, a)?;
                items.push(self.value(function, next).context("Apply function")?);
                items.push(self.value(argument, next).context("Apply argument")?);
                items
            }
            Value::Lambda(a, pattern, body) => {
                let mut items = head(tag::LAMBDA, a)?;
                items.push(self.pattern(pattern, next).context("Lambda pattern")?);
                items.push(self.value(body, next).context("Lambda body")?);
                items
            }
            Value::LetDefinition(a, name, definition, in_value) => {
                let mut items = head(tag::LET_DEFINITION, a)?;
                items.push(name_to_json(name));
                items.push(
                    self.definition(definition, next)
                        .with_context(|| format!("LetDefinition '{name}'"))?,
                );
                items.push(self.value(in_value, next).context("LetDefinition in")?);
                items
            }
            Value::LetRecursion(a, definitions, in_value) => {
                let mut items = head(tag::LET_RECURSION, a)?;
                let definitions = definitions
                    .iter()
                    .map(|(name, definition)| {
                        let definition = self
                            .definition(definition, next)
                            .with_context(|| format!("LetRecursion '{name}'"))?;
                        Ok(Json::Array(vec![name_to_json(name), definition]))
                    })
                    .collect::<Result<Vec<_>>>()?;
                items.push(Json::Array(definitions));
                items.push(self.value(in_value, next).context("LetRecursion in")?);
                items
            }
            Value::Destructure(a, pattern, value, in_value) => {
                let mut items = head(tag::DESTRUCTURE, a)?;
                items.push(self.pattern(pattern, next).context("Destructure pattern")?);
                items.push(self.value(value, next).context("Destructure value")?);
                items.push(self.value(in_value, next).context("Destructure in")?);
                items
            }
            Value::IfThenElse(a, condition, then_branch, else_branch) => {
                let mut items = head(tag::IF_THEN_ELSE, a)?;
                items.push(self.value(condition, next).context("IfThenElse condition")?);
                items.push(self.value(then_branch, next).context("IfThenElse then")?);
                items.push(self.value(else_branch, next).context("IfThenElse else")?);
                items
            }
            Value::PatternMatch(a, subject, cases) => {
                let mut items = head(tag::PATTERN_MATCH, a)?;
                items.push(self.value(subject, next).context("PatternMatch subject")?);
                let cases = cases
                    .iter()
                    .enumerate()
                    .map(|(i, (pattern, body))| {
                        let case = || -> Result<Json> {
                            let pattern = self.pattern(pattern, next)?;
                            let body = self.value(body, next)?;
                            Ok(Json::Array(vec![pattern, body]))
                        };
                        case().with_context(|| format!("PatternMatch case [{i}]"))
                    })
                    .collect::<Result<Vec<_>>>()?;
                items.push(Json::Array(cases));
                items
            }
            Value::UpdateRecord(a, subject, fields) => {
                let mut items = head(tag::UPDATE_RECORD, a)?;
                items.push(self.value(subject, next).context("UpdateRecord subject")?);
                items.push(self.named(fields, next).context("UpdateRecord fields")?);
                items
            }
            Value::Unit(a) => head(tag::UNIT, a)?,
        };
        Ok(Json::Array(items))
    }

    /// `{"inputTypes": [[name, va, type], ...], "outputType": type, "body": value}`
    fn definition(&self, definition: &ValueDefinition<TA, VA>, depth: usize) -> Result<Json> {
        let inputs = definition
            .input_types
            .iter()
            .map(|(name, a, tpe)| {
                let a = self.va.encode(a).with_context(|| format!("input '{name}' attributes"))?;
                let tpe = write_type(self.options, self.ta, tpe, 1)
                    .with_context(|| format!("input '{name}'"))?;
                Ok(Json::Array(vec![name_to_json(name), a, tpe]))
            })
            .collect::<Result<Vec<_>>>()?;
        let mut map = Map::new();
        map.insert("inputTypes".into(), Json::Array(inputs));
        map.insert(
            "outputType".into(),
            write_type(self.options, self.ta, &definition.output_type, 1).context("outputType")?,
        );
        map.insert("body".into(), self.value(&definition.body, depth).context("body")?);
        Ok(Json::Object(map))
    }
}

struct Reader<'a, TA, VA> {
    options: &'a Options,
    ta: &'a AttributeCodec<TA>,
    va: &'a AttributeCodec<VA>,
}

impl<TA, VA> Reader<'_, TA, VA> {
    fn values(&self, json: &Json, depth: usize) -> Result<Vec<Value<TA, VA>>> {
        array(json, "list of values")?
            .iter()
            .enumerate()
            .map(|(i, v)| self.value(v, depth).with_context(|| format!("[{i}]")))
            .collect()
    }

    fn named(&self, json: &Json, depth: usize) -> Result<Vec<(Name, Value<TA, VA>)>> {
        array(json, "list of named values")?
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let pair = tuple(entry, "named value", 2).with_context(|| format!("[{i}]"))?;
                let name = name_from_json(&pair[0]).with_context(|| format!("[{i}]"))?;
                let value = self.value(&pair[1], depth).with_context(|| format!("'{name}'"))?;
                Ok((name, value))
            })
            .collect()
    }

    fn pattern(&self, json: &Json, depth: usize) -> Result<Pattern<VA>> {
        read_pattern(self.options, self.va, json, depth)
    }

    fn value(&self, json: &Json, depth: usize) -> Result<Value<TA, VA>> {
        check_depth(self.options, depth)?;
        let (raw_tag, items) = tagged(json, "Value")?;
        let kind = tags::resolve("Value", tag::ALL, self.options.format_version, raw_tag)?;
        let expected = match kind {
            "Unit" => 2,
            "Field" | "Apply" | "Lambda" | "LetRecursion" | "PatternMatch" | "UpdateRecord" => 4,
            "LetDefinition" | "Destructure" | "IfThenElse" => 5,
            _ => 3,
        };
        expect_len(kind, items, expected)?;
        let a = self
            .va
            .decode(&items[1])
            .with_context(|| format!("{kind} attributes"))?;
        let next = depth + 1;
        let boxed = |json: &Json, context: &'static str| -> Result<Box<Value<TA, VA>>> {
            self.value(json, next).context(context).map(Box::new)
        };

        let value = match kind {
            "Literal" => Value::Literal(a, literal_from_json(self.options, &items[2]).context(kind)?),
            "Constructor" => Value::Constructor(a, fqname_from_json(&items[2]).context(kind)?),
            "Tuple" => Value::Tuple(a, self.values(&items[2], next).context("Tuple elements")?),
            "List" => Value::List(a, self.values(&items[2], next).context("List elements")?),
            "Record" => Value::Record(a, self.named(&items[2], next).context("Record fields")?),
            "Variable" => Value::Variable(a, name_from_json(&items[2]).context(kind)?),
            "Reference" => Value::Reference(a, fqname_from_json(&items[2]).context(kind)?),
            "Field" => Value::Field(
                a,
                boxed(&items[2], "Field subject")?,
                name_from_json(&items[3]).context("Field name")?,
            ),
            "FieldFunction" => Value::FieldFunction(a, name_from_json(&items[2]).context(kind)?),
            "Apply" => Value::Apply(
                a,
                boxed(&items[2], "Apply function")?,
                boxed(&items[3], "Apply argument")?,
            ),
            "Lambda" => Value::Lambda(
                a,
                self.pattern(&items[2], next).context("Lambda pattern")?,
                boxed(&items[3], "Lambda body")?,
            ),
            "LetDefinition" => {
                let name = name_from_json(&items[2]).context("LetDefinition name")?;
                let definition = self
                    .definition(&items[3], next)
                    .with_context(|| format!("LetDefinition '{name}'"))?;
                Value::LetDefinition(
                    a,
                    name,
                    Box::new(definition),
                    boxed(&items[4], "LetDefinition in")?,
                )
            }
            "LetRecursion" => {
                let definitions = array(&items[2], "list of definitions")?
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| {
                        let pair = tuple(entry, "named definition", 2)
                            .with_context(|| format!("LetRecursion [{i}]"))?;
                        let name = name_from_json(&pair[0])
                            .with_context(|| format!("LetRecursion [{i}]"))?;
                        let definition = self
                            .definition(&pair[1], next)
                            .with_context(|| format!("LetRecursion '{name}'"))?;
                        Ok((name, definition))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Value::LetRecursion(a, definitions, boxed(&items[3], "LetRecursion in")?)
            }
            "Destructure" => Value::Destructure(
                a,
                self.pattern(&items[2], next).context("Destructure pattern")?,
                boxed(&items[3], "Destructure value")?,
                boxed(&items[4], "Destructure in")?,
            ),
            "IfThenElse" => Value::IfThenElse(
                a,
                boxed(&items[2], "IfThenElse condition")?,
                boxed(&items[3], "IfThenElse then")?,
                boxed(&items[4], "IfThenElse else")?,
            ),
            "PatternMatch" => {
                let subject = boxed(&items[2], "PatternMatch subject")?;
                let cases = array(&items[3], "list of cases")?
                    .iter()
                    .enumerate()
                    .map(|(i, case)| {
                        let read_case = || -> Result<(Pattern<VA>, Value<TA, VA>)> {
                            let pair = tuple(case, "case", 2)?;
                            let pattern = self.pattern(&pair[0], next)?;
                            let body = self.value(&pair[1], next)?;
                            Ok((pattern, body))
                        };
                        read_case().with_context(|| format!("PatternMatch case [{i}]"))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Value::PatternMatch(a, subject, cases)
            }
            "UpdateRecord" => Value::UpdateRecord(
                a,
                boxed(&items[2], "UpdateRecord subject")?,
                self.named(&items[3], next).context("UpdateRecord fields")?,
            ),
            _ => Value::Unit(a),
        };
        Ok(value)
    }

    fn definition(&self, json: &Json, depth: usize) -> Result<ValueDefinition<TA, VA>> {
        const ENTITY: &str = "ValueDefinition";
        let map = object(json, ENTITY)?;
        let input_types = array(key(map, ENTITY, "inputTypes")?, "inputTypes")?
            .iter()
            .enumerate()
            .map(|(i, input)| {
                let triple = tuple(input, "input", 3).with_context(|| format!("inputTypes[{i}]"))?;
                let name = name_from_json(&triple[0]).with_context(|| format!("inputTypes[{i}]"))?;
                let a = self
                    .va
                    .decode(&triple[1])
                    .with_context(|| format!("input '{name}' attributes"))?;
                let tpe = read_type(self.options, self.ta, &triple[2], 1)
                    .with_context(|| format!("input '{name}'"))?;
                Ok((name, a, tpe))
            })
            .collect::<Result<Vec<_>>>()?;
        let output_type = read_type(self.options, self.ta, key(map, ENTITY, "outputType")?, 1)
            .context("outputType")?;
        let body = self.value(key(map, ENTITY, "body")?, depth).context("body")?;
        Ok(ValueDefinition::new(input_types, output_type, body))
    }
}
