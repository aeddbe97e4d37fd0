//! Module specifications and definitions.
//!
//! `{"types": [[name, entry], ...], "values": [[name, entry], ...], "doc": string|null}`
//! where a specification entry is `Documented(spec)` and a definition entry
//! is `AccessControlled(Documented(def))`.

use serde_json::{Map, Value as Json};

use super::attributes::AttributeCodec;
use super::json::{array, from_bytes, key, object, string, to_bytes, tuple};
use super::naming::{name_from_json, name_to_json};
use super::options::Options;
use super::type_definition::{
    type_definition_from_json, type_definition_to_json, type_specification_from_json,
    type_specification_to_json,
};
use super::value::{
    value_definition_from_json, value_definition_to_json, value_specification_from_json,
    value_specification_to_json,
};
use super::wrappers::{
    access_controlled_from_json, access_controlled_to_json, documented_from_json,
    documented_to_json,
};
use crate::error::{Result, ResultExt};
use crate::ir::{ModuleDefinition, ModuleSpecification};
use crate::naming::Name;
use tracing::{debug, debug_span};

fn entries_to_json<T>(
    entries: &[(Name, T)],
    entry_to_json: impl Fn(&T) -> Result<Json>,
) -> Result<Json> {
    entries
        .iter()
        .map(|(name, entry)| {
            let entry = entry_to_json(entry).with_context(|| format!("'{name}'"))?;
            Ok(Json::Array(vec![name_to_json(name), entry]))
        })
        .collect::<Result<Vec<_>>>()
        .map(Json::Array)
}

fn entries_from_json<T>(
    json: &Json,
    expected: &'static str,
    entry_from_json: impl Fn(&Json) -> Result<T>,
) -> Result<Vec<(Name, T)>> {
    array(json, expected)?
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let pair = tuple(entry, "named entry", 2).with_context(|| format!("[{i}]"))?;
            let name = name_from_json(&pair[0]).with_context(|| format!("[{i}]"))?;
            let entry = entry_from_json(&pair[1]).with_context(|| format!("'{name}'"))?;
            Ok((name, entry))
        })
        .collect()
}

fn module_object(types: Json, values: Json, doc: &Option<String>) -> Json {
    let mut map = Map::new();
    map.insert("types".into(), types);
    map.insert("values".into(), values);
    map.insert("doc".into(), doc.clone().map_or(Json::Null, Json::String));
    Json::Object(map)
}

/// A missing `doc` key reads the same as `null`.
fn doc_from_json(map: &Map<String, Json>) -> Result<Option<String>> {
    match map.get("doc") {
        None | Some(Json::Null) => Ok(None),
        Some(doc) => string(doc, "doc string").map(|doc| Some(doc.to_string())),
    }
}

pub fn module_specification_to_json<TA>(
    options: &Options,
    ta: &AttributeCodec<TA>,
    spec: &ModuleSpecification<TA>,
) -> Result<Json> {
    let types = entries_to_json(&spec.types, |documented| {
        documented_to_json(documented, |s| type_specification_to_json(options, ta, s))
    })
    .context("types")?;
    let values = entries_to_json(&spec.values, |documented| {
        documented_to_json(documented, |s| value_specification_to_json(options, ta, s))
    })
    .context("values")?;
    Ok(module_object(types, values, &spec.doc))
}

pub fn module_specification_from_json<TA>(
    options: &Options,
    ta: &AttributeCodec<TA>,
    json: &Json,
) -> Result<ModuleSpecification<TA>> {
    const ENTITY: &str = "ModuleSpecification";
    let map = object(json, ENTITY)?;
    let types = entries_from_json(key(map, ENTITY, "types")?, "list of types", |entry| {
        documented_from_json(entry, |s| type_specification_from_json(options, ta, s))
    })
    .context("types")?;
    let values = entries_from_json(key(map, ENTITY, "values")?, "list of values", |entry| {
        documented_from_json(entry, |s| value_specification_from_json(options, ta, s))
    })
    .context("values")?;
    Ok(ModuleSpecification {
        types,
        values,
        doc: doc_from_json(map)?,
    })
}

pub fn module_definition_to_json<TA, VA>(
    options: &Options,
    ta: &AttributeCodec<TA>,
    va: &AttributeCodec<VA>,
    definition: &ModuleDefinition<TA, VA>,
) -> Result<Json> {
    let types = entries_to_json(&definition.types, |entry| {
        access_controlled_to_json(options, entry, |documented| {
            documented_to_json(documented, |d| type_definition_to_json(options, ta, d))
        })
    })
    .context("types")?;
    let values = entries_to_json(&definition.values, |entry| {
        access_controlled_to_json(options, entry, |documented| {
            documented_to_json(documented, |d| value_definition_to_json(options, ta, va, d))
        })
    })
    .context("values")?;
    Ok(module_object(types, values, &definition.doc))
}

pub fn module_definition_from_json<TA, VA>(
    options: &Options,
    ta: &AttributeCodec<TA>,
    va: &AttributeCodec<VA>,
    json: &Json,
) -> Result<ModuleDefinition<TA, VA>> {
    const ENTITY: &str = "ModuleDefinition";
    let map = object(json, ENTITY)?;
    let types = entries_from_json(key(map, ENTITY, "types")?, "list of types", |entry| {
        access_controlled_from_json(options, entry, |documented| {
            documented_from_json(documented, |d| type_definition_from_json(options, ta, d))
        })
    })
    .context("types")?;
    let values = entries_from_json(key(map, ENTITY, "values")?, "list of values", |entry| {
        access_controlled_from_json(options, entry, |documented| {
            documented_from_json(documented, |d| value_definition_from_json(options, ta, va, d))
        })
    })
    .context("values")?;
    Ok(ModuleDefinition {
        types,
        values,
        doc: doc_from_json(map)?,
    })
}

pub fn encode_module_specification<TA>(
    options: &Options,
    ta: &AttributeCodec<TA>,
    spec: &ModuleSpecification<TA>,
) -> Result<Vec<u8>> {
    let _span = debug_span!("encode", entity = "ModuleSpecification", format_version = %options.format_version).entered();
    to_bytes(options, &module_specification_to_json(options, ta, spec)?)
}

pub fn decode_module_specification<TA>(
    options: &Options,
    ta: &AttributeCodec<TA>,
    bytes: &[u8],
) -> Result<ModuleSpecification<TA>> {
    let _span = debug_span!("decode", entity = "ModuleSpecification", format_version = %options.format_version).entered();
    module_specification_from_json(options, ta, &from_bytes(options, bytes)?)
        .inspect_err(|err| debug!("Failed to decode module specification: {}", err))
}

pub fn encode_module_definition<TA, VA>(
    options: &Options,
    ta: &AttributeCodec<TA>,
    va: &AttributeCodec<VA>,
    definition: &ModuleDefinition<TA, VA>,
) -> Result<Vec<u8>> {
    let _span = debug_span!("encode", entity = "ModuleDefinition", format_version = %options.format_version).entered();
    to_bytes(options, &module_definition_to_json(options, ta, va, definition)?)
}

pub fn decode_module_definition<TA, VA>(
    options: &Options,
    ta: &AttributeCodec<TA>,
    va: &AttributeCodec<VA>,
    bytes: &[u8],
) -> Result<ModuleDefinition<TA, VA>> {
    let _span = debug_span!("decode", entity = "ModuleDefinition", format_version = %options.format_version).entered();
    module_definition_from_json(options, ta, va, &from_bytes(options, bytes)?)
        .inspect_err(|err| debug!("Failed to decode module definition: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::FormatVersion;
    use crate::ir::{
        AccessControlled, Constructor, Documented, Type, TypeDefinition, TypeSpecification,
        Value, ValueDefinition, ValueSpecification,
    };
    use rstest::rstest;
    use serde_json::json;

    fn unit() -> AttributeCodec<()> {
        AttributeCodec::unit()
    }

    fn definition() -> ModuleDefinition<(), ()> {
        ModuleDefinition {
            types: vec![(
                Name::parse("Flag"),
                AccessControlled::public(Documented::new(
                    "On or off",
                    TypeDefinition::Custom(
                        vec![],
                        AccessControlled::private(vec![
                            Constructor::new(Name::parse("On"), vec![]),
                            Constructor::new(Name::parse("Off"), vec![]),
                        ]),
                    ),
                )),
            )],
            values: vec![(
                Name::parse("off"),
                AccessControlled::private(Documented::undocumented(ValueDefinition::new(
                    vec![],
                    Type::Unit(()),
                    Value::Unit(()),
                ))),
            )],
            doc: Some("Flags".into()),
        }
    }

    #[rstest]
    #[case(FormatVersion::V1)]
    #[case(FormatVersion::V2)]
    #[case(FormatVersion::V3)]
    fn test_definition_round_trip(#[case] version: FormatVersion) {
        let options = Options::new(version);
        let bytes = encode_module_definition(&options, &unit(), &unit(), &definition()).unwrap();
        assert_eq!(
            decode_module_definition(&options, &unit(), &unit(), &bytes).unwrap(),
            definition()
        );
    }

    #[test]
    fn test_specification_shape() {
        let spec: ModuleSpecification<()> = ModuleSpecification {
            types: vec![(
                Name::parse("Id"),
                Documented::undocumented(TypeSpecification::Opaque(vec![])),
            )],
            values: vec![(
                Name::parse("zero"),
                Documented::undocumented(ValueSpecification::new(vec![], Type::Unit(()))),
            )],
            doc: None,
        };
        let json = module_specification_to_json(&Options::default(), &unit(), &spec).unwrap();
        assert_eq!(
            json,
            json!({
                "types": [[["id"], {"doc": "", "value": ["OpaqueTypeSpecification", []]}]],
                "values": [[["zero"], {"doc": "", "value": {"inputs": [], "output": ["Unit", {}]}}]],
                "doc": null
            })
        );
        assert_eq!(module_specification_from_json(&Options::default(), &unit(), &json).unwrap(), spec);
    }

    #[test]
    fn test_missing_doc_reads_as_none() {
        let spec = module_specification_from_json(
            &Options::default(),
            &unit(),
            &json!({"types": [], "values": []}),
        )
        .unwrap();
        assert_eq!(spec, ModuleSpecification::default());
    }

    #[test]
    fn test_breadcrumbs_name_the_entry() {
        let json = json!({
            "types": [],
            "values": [[["broken"], {"access": "Public", "value": {"doc": "", "value": null}}]],
            "doc": null
        });
        let err = module_definition_from_json(&Options::default(), &unit(), &unit(), &json).unwrap_err();
        assert_eq!(
            err.trail(),
            vec!["values", "'broken'", "AccessControlled value", "Documented value"]
        );
    }

    #[test]
    fn test_private_constructors_become_opaque_in_specification() {
        let spec = definition().to_specification();
        assert_eq!(spec.types[0].1.value, TypeSpecification::Opaque(vec![]));
        assert!(spec.values.is_empty());
    }
}
