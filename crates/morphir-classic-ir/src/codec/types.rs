//! Type expressions: `[tag, attributes, ...payload]`.

use serde_json::{Map, Value as Json};

use super::attributes::AttributeCodec;
use super::json::{array, check_depth, expect_len, from_bytes, key, object, to_bytes, tagged, tuple};
use super::naming::{fqname_from_json, fqname_to_json, name_from_json, name_to_json};
use super::options::Options;
use super::tags::{self, types as tag};
use crate::error::{Result, ResultExt};
use crate::ir::{Field, Type};

pub fn type_to_json<A>(options: &Options, attrs: &AttributeCodec<A>, tpe: &Type<A>) -> Result<Json> {
    write_type(options, attrs, tpe, 1)
}

pub fn type_from_json<A>(options: &Options, attrs: &AttributeCodec<A>, json: &Json) -> Result<Type<A>> {
    read_type(options, attrs, json, 1)
}

pub fn encode_type<A>(
    options: &Options,
    attrs: &AttributeCodec<A>,
    tpe: &Type<A>,
) -> Result<Vec<u8>> {
    to_bytes(options, &type_to_json(options, attrs, tpe)?)
}

pub fn decode_type<A>(
    options: &Options,
    attrs: &AttributeCodec<A>,
    bytes: &[u8],
) -> Result<Type<A>> {
    type_from_json(options, attrs, &from_bytes(options, bytes)?)
}

pub(crate) fn header<A>(options: &Options, attrs: &AttributeCodec<A>, tag: tags::Tag, a: &A) -> Result<Vec<Json>> {
    let attributes = attrs.encode(a).context("attributes")?;
    Ok(vec![Json::from(tag.spell(options.format_version)), attributes])
}

pub(crate) fn write_type<A>(
    options: &Options,
    attrs: &AttributeCodec<A>,
    tpe: &Type<A>,
    depth: usize,
) -> Result<Json> {
    check_depth(options, depth)?;
    let list = |types: &[Type<A>]| -> Result<Json> {
        types
            .iter()
            .map(|t| write_type(options, attrs, t, depth + 1))
            .collect::<Result<Vec<_>>>()
            .map(Json::Array)
    };
    let fields = |fields: &[Field<A>]| -> Result<Json> {
        fields
            .iter()
            .map(|f| write_field(options, attrs, f, depth + 1))
            .collect::<Result<Vec<_>>>()
            .map(Json::Array)
    };

    let items = match tpe {
        Type::Variable(a, name) => {
            let mut items = header(options, attrs, tag::VARIABLE, a)?;
            items.push(name_to_json(name));
            items
        }
        Type::Reference(a, name, args) => {
            let mut items = header(options, attrs, tag::REFERENCE, a)?;
            items.push(fqname_to_json(name));
            items.push(list(args.as_slice()).context("Reference arguments")?);
            items
        }
        Type::Tuple(a, elements) => {
            let mut items = header(options, attrs, tag::TUPLE, a)?;
            items.push(list(elements.as_slice()).context("Tuple elements")?);
            items
        }
        Type::Record(a, fs) => {
            let mut items = header(options, attrs, tag::RECORD, a)?;
            items.push(fields(fs.as_slice()).context("Record fields")?);
            items
        }
        Type::ExtensibleRecord(a, variable, fs) => {
            let mut items = header(options, attrs, tag::EXTENSIBLE_RECORD, a)?;
            items.push(name_to_json(variable));
            items.push(fields(fs.as_slice()).context("ExtensibleRecord fields")?);
            items
        }
        Type::Function(a, argument, result) => {
            let mut items = header(options, attrs, tag::FUNCTION, a)?;
            items.push(write_type(options, attrs, argument, depth + 1).context("Function argument")?);
            items.push(write_type(options, attrs, result, depth + 1).context("Function result")?);
            items
        }
        Type::Unit(a) => header(options, attrs, tag::UNIT, a)?,
    };
    Ok(Json::Array(items))
}

/// Version 1: `[name, tpe]`. Later: `{"name": name, "tpe": tpe}`.
fn write_field<A>(
    options: &Options,
    attrs: &AttributeCodec<A>,
    field: &Field<A>,
    depth: usize,
) -> Result<Json> {
    let name = name_to_json(&field.name);
    let tpe = write_type(options, attrs, &field.tpe, depth)
        .with_context(|| format!("field '{}'", field.name))?;
    if options.format_version.is_v1() {
        Ok(Json::Array(vec![name, tpe]))
    } else {
        let mut map = Map::new();
        map.insert("name".into(), name);
        map.insert("tpe".into(), tpe);
        Ok(Json::Object(map))
    }
}

pub(crate) fn read_type<A>(
    options: &Options,
    attrs: &AttributeCodec<A>,
    json: &Json,
    depth: usize,
) -> Result<Type<A>> {
    check_depth(options, depth)?;
    let (raw_tag, items) = tagged(json, "Type")?;
    let kind = tags::resolve("Type", tag::ALL, options.format_version, raw_tag)?;
    let expected = match kind {
        "Variable" | "Tuple" | "Record" => 3,
        "Reference" | "ExtensibleRecord" | "Function" => 4,
        _ => 2,
    };
    expect_len(kind, items, expected)?;
    let a = attrs.decode(&items[1]).with_context(|| format!("{kind} attributes"))?;

    let list = |json: &Json| -> Result<Vec<Type<A>>> {
        array(json, "list of types")?
            .iter()
            .enumerate()
            .map(|(i, t)| read_type(options, attrs, t, depth + 1).with_context(|| format!("[{i}]")))
            .collect()
    };
    let fields = |json: &Json| -> Result<Vec<Field<A>>> {
        array(json, "list of fields")?
            .iter()
            .enumerate()
            .map(|(i, f)| read_field(options, attrs, f, depth + 1).with_context(|| format!("[{i}]")))
            .collect()
    };

    let tpe = match kind {
        "Variable" => Type::Variable(a, name_from_json(&items[2]).context("Variable name")?),
        "Reference" => Type::Reference(
            a,
            fqname_from_json(&items[2]).context("Reference name")?,
            list(&items[3]).context("Reference arguments")?,
        ),
        "Tuple" => Type::Tuple(a, list(&items[2]).context("Tuple elements")?),
        "Record" => Type::Record(a, fields(&items[2]).context("Record fields")?),
        "ExtensibleRecord" => Type::ExtensibleRecord(
            a,
            name_from_json(&items[2]).context("ExtensibleRecord variable")?,
            fields(&items[3]).context("ExtensibleRecord fields")?,
        ),
        "Function" => Type::function(
            a,
            read_type(options, attrs, &items[2], depth + 1).context("Function argument")?,
            read_type(options, attrs, &items[3], depth + 1).context("Function result")?,
        ),
        _ => Type::Unit(a),
    };
    Ok(tpe)
}

fn read_field<A>(
    options: &Options,
    attrs: &AttributeCodec<A>,
    json: &Json,
    depth: usize,
) -> Result<Field<A>> {
    let (name, tpe) = if options.format_version.is_v1() {
        let items = tuple(json, "Field", 2)?;
        (&items[0], &items[1])
    } else {
        let map = object(json, "Field")?;
        (key(map, "Field", "name")?, key(map, "Field", "tpe")?)
    };
    let name = name_from_json(name).context("Field name")?;
    let tpe = read_type(options, attrs, tpe, depth)
        .with_context(|| format!("field '{name}'"))?;
    Ok(Field::new(name, tpe))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::FormatVersion;
    use crate::error::Error;
    use crate::naming::{FQName, Name};
    use serde_json::json;

    fn unit() -> AttributeCodec<()> {
        AttributeCodec::unit()
    }

    fn sample() -> Type<()> {
        // { name : String, tags : List a } -> ()
        Type::function(
            (),
            Type::Record(
                (),
                vec![
                    Field::new(
                        Name::parse("name"),
                        Type::Reference((), FQName::parse("Morphir.SDK:String:string").unwrap(), vec![]),
                    ),
                    Field::new(
                        Name::parse("tags"),
                        Type::Reference(
                            (),
                            FQName::parse("Morphir.SDK:List:list").unwrap(),
                            vec![Type::Variable((), Name::parse("a"))],
                        ),
                    ),
                ],
            ),
            Type::Unit(()),
        )
    }

    #[test]
    fn test_v1_and_v3_field_shapes() {
        let record = Type::Record((), vec![Field::new(Name::parse("x"), Type::Unit(()))]);
        assert_eq!(
            type_to_json(&Options::new(FormatVersion::V1), &unit(), &record).unwrap(),
            json!(["record", {}, [[["x"], ["unit", {}]]]])
        );
        assert_eq!(
            type_to_json(&Options::new(FormatVersion::V3), &unit(), &record).unwrap(),
            json!(["Record", {}, [{"name": ["x"], "tpe": ["Unit", {}]}]])
        );
    }

    #[test]
    fn test_round_trip_every_version() {
        for version in [FormatVersion::V1, FormatVersion::V2, FormatVersion::V3] {
            let options = Options::new(version);
            let json = type_to_json(&options, &unit(), &sample()).unwrap();
            assert_eq!(type_from_json(&options, &unit(), &json).unwrap(), sample());
        }
    }

    #[test]
    fn test_length_mismatch_names_variant() {
        let err = type_from_json(&Options::default(), &unit(), &json!(["Variable", {}, ["a"], 1]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Variable expects 3 elements, got 4");
    }

    #[test]
    fn test_breadcrumbs_point_at_failing_node() {
        let json = json!(["Function", {}, ["Unit", {}], ["Tuple", {}, [["Unit", {}], null]]]);
        let err = type_from_json(&Options::default(), &unit(), &json).unwrap_err();
        assert_eq!(err.trail(), vec!["Function result", "Tuple elements", "[1]"]);
        assert!(matches!(err.root(), Error::Null { expected: "Type" }));
    }

    #[test]
    fn test_depth_limit() {
        let mut tpe = Type::Unit(());
        for _ in 0..10 {
            tpe = Type::Tuple((), vec![tpe]);
        }
        let options = Options::default().with_max_depth(5);
        let err = type_to_json(&options, &unit(), &tpe).unwrap_err();
        assert!(matches!(err.root(), Error::DepthLimitExceeded { limit: 5 }));

        let json = type_to_json(&Options::default(), &unit(), &tpe).unwrap();
        let err = type_from_json(&options, &unit(), &json).unwrap_err();
        assert!(matches!(err.root(), Error::DepthLimitExceeded { limit: 5 }));
    }

    #[test]
    fn test_missing_attribute_decoder() {
        let encode_only: AttributeCodec<()> = AttributeCodec::encode_only(|_| Ok(json!({})));
        let err = type_from_json(&Options::default(), &encode_only, &json!(["Unit", {}])).unwrap_err();
        assert!(matches!(err.root(), Error::MissingAttributeCodec("decoder")));
    }
}
