//! Type specifications and definitions: `[tag, typeParams, ...payload]`.

use serde_json::{Map, Value as Json};

use super::attributes::AttributeCodec;
use super::json::{array, expect_len, from_bytes, key, object, tagged, to_bytes, tuple};
use super::naming::{fqname_from_json, fqname_to_json, name_from_json, name_to_json};
use super::options::Options;
use super::tags::{self, type_definition as def_tag, type_specification as spec_tag};
use super::types::{read_type, write_type};
use super::wrappers::{access_controlled_from_json, access_controlled_to_json};
use crate::error::{Result, ResultExt};
use crate::ir::{Constructor, DerivedTypeSpecificationDetails, TypeDefinition, TypeSpecification};
use crate::naming::Name;

fn params_to_json(params: &[Name]) -> Json {
    Json::Array(params.iter().map(name_to_json).collect())
}

fn params_from_json(json: &Json) -> Result<Vec<Name>> {
    array(json, "type parameters")?
        .iter()
        .enumerate()
        .map(|(i, name)| name_from_json(name).with_context(|| format!("type parameter [{i}]")))
        .collect()
}

/// `[[ctorName, [[argName, argType], ...]], ...]`
pub fn constructors_to_json<A>(
    options: &Options,
    attrs: &AttributeCodec<A>,
    constructors: &[Constructor<A>],
) -> Result<Json> {
    constructors
        .iter()
        .map(|ctor| {
            let args = ctor
                .args
                .iter()
                .map(|(name, tpe)| {
                    Ok(Json::Array(vec![
                        name_to_json(name),
                        write_type(options, attrs, tpe, 1)?,
                    ]))
                })
                .collect::<Result<Vec<_>>>()
                .with_context(|| format!("constructor '{}'", ctor.name))?;
            Ok(Json::Array(vec![name_to_json(&ctor.name), Json::Array(args)]))
        })
        .collect::<Result<Vec<_>>>()
        .map(Json::Array)
}

pub fn constructors_from_json<A>(
    options: &Options,
    attrs: &AttributeCodec<A>,
    json: &Json,
) -> Result<Vec<Constructor<A>>> {
    array(json, "constructors")?
        .iter()
        .enumerate()
        .map(|(i, ctor)| {
            let items = tuple(ctor, "Constructor", 2)?;
            let name = name_from_json(&items[0]).context("Constructor name")?;
            let constructor = array(&items[1], "constructor arguments")?
                .iter()
                .enumerate()
                .map(|(j, arg)| {
                    let pair = tuple(arg, "constructor argument", 2)?;
                    let arg_name = name_from_json(&pair[0]).with_context(|| format!("argument [{j}] name"))?;
                    let arg_type = read_type(options, attrs, &pair[1], 1)
                        .with_context(|| format!("argument '{arg_name}'"))?;
                    Ok((arg_name, arg_type))
                })
                .collect::<Result<Vec<_>>>()
                .with_context(|| format!("constructor '{name}' argument list"))
                .map(|args| Constructor::new(name, args));
            constructor.with_context(|| format!("constructors[{i}]"))
        })
        .collect()
}

pub fn type_specification_to_json<A>(
    options: &Options,
    attrs: &AttributeCodec<A>,
    spec: &TypeSpecification<A>,
) -> Result<Json> {
    let version = options.format_version;
    let tag = |tag: tags::Tag| Json::from(tag.spell(version));
    let items = match spec {
        TypeSpecification::TypeAlias(params, tpe) => vec![
            tag(spec_tag::TYPE_ALIAS),
            params_to_json(params),
            write_type(options, attrs, tpe, 1).context("TypeAliasSpecification type")?,
        ],
        TypeSpecification::Opaque(params) => vec![tag(spec_tag::OPAQUE), params_to_json(params)],
        TypeSpecification::Custom(params, ctors) => vec![
            tag(spec_tag::CUSTOM),
            params_to_json(params),
            constructors_to_json(options, attrs, ctors).context("CustomTypeSpecification")?,
        ],
        TypeSpecification::Derived(params, details) => {
            let mut map = Map::new();
            map.insert(
                "baseType".into(),
                write_type(options, attrs, &details.base_type, 1).context("baseType")?,
            );
            map.insert("fromBaseType".into(), fqname_to_json(&details.from_base_type));
            map.insert("toBaseType".into(), fqname_to_json(&details.to_base_type));
            vec![tag(spec_tag::DERIVED), params_to_json(params), Json::Object(map)]
        }
    };
    Ok(Json::Array(items))
}

pub fn type_specification_from_json<A>(
    options: &Options,
    attrs: &AttributeCodec<A>,
    json: &Json,
) -> Result<TypeSpecification<A>> {
    let (raw_tag, items) = tagged(json, "TypeSpecification")?;
    let kind = tags::resolve("TypeSpecification", spec_tag::ALL, options.format_version, raw_tag)?;
    expect_len(kind, items, if kind == "OpaqueTypeSpecification" { 2 } else { 3 })?;
    let params = params_from_json(&items[1]).context(kind)?;

    let spec = match kind {
        "TypeAliasSpecification" => TypeSpecification::TypeAlias(
            params,
            read_type(options, attrs, &items[2], 1).context(kind)?,
        ),
        "OpaqueTypeSpecification" => TypeSpecification::Opaque(params),
        "CustomTypeSpecification" => TypeSpecification::Custom(
            params,
            constructors_from_json(options, attrs, &items[2]).context(kind)?,
        ),
        _ => TypeSpecification::Derived(
            params,
            derived_details_from_json(options, attrs, &items[2]).context(kind)?,
        ),
    };
    Ok(spec)
}

fn derived_details_from_json<A>(
    options: &Options,
    attrs: &AttributeCodec<A>,
    json: &Json,
) -> Result<DerivedTypeSpecificationDetails<A>> {
    const ENTITY: &str = "derived type details";
    let map = object(json, ENTITY)?;
    let base_type = read_type(options, attrs, key(map, ENTITY, "baseType")?, 1).context("baseType")?;
    let from_base_type = fqname_from_json(key(map, ENTITY, "fromBaseType")?).context("fromBaseType")?;
    let to_base_type = fqname_from_json(key(map, ENTITY, "toBaseType")?).context("toBaseType")?;
    Ok(DerivedTypeSpecificationDetails {
        base_type,
        from_base_type,
        to_base_type,
    })
}

pub fn type_definition_to_json<A>(
    options: &Options,
    attrs: &AttributeCodec<A>,
    definition: &TypeDefinition<A>,
) -> Result<Json> {
    let version = options.format_version;
    let items = match definition {
        TypeDefinition::TypeAlias(params, tpe) => vec![
            Json::from(def_tag::TYPE_ALIAS.spell(version)),
            params_to_json(params),
            write_type(options, attrs, tpe, 1).context("TypeAliasDefinition type")?,
        ],
        TypeDefinition::Custom(params, ctors) => vec![
            Json::from(def_tag::CUSTOM.spell(version)),
            params_to_json(params),
            access_controlled_to_json(options, ctors, |ctors| {
                constructors_to_json(options, attrs, ctors)
            })
            .context("CustomTypeDefinition")?,
        ],
    };
    Ok(Json::Array(items))
}

pub fn type_definition_from_json<A>(
    options: &Options,
    attrs: &AttributeCodec<A>,
    json: &Json,
) -> Result<TypeDefinition<A>> {
    let (raw_tag, items) = tagged(json, "TypeDefinition")?;
    let kind = tags::resolve("TypeDefinition", def_tag::ALL, options.format_version, raw_tag)?;
    expect_len(kind, items, 3)?;
    let params = params_from_json(&items[1]).context(kind)?;

    let definition = match kind {
        "TypeAliasDefinition" => TypeDefinition::TypeAlias(
            params,
            read_type(options, attrs, &items[2], 1).context(kind)?,
        ),
        _ => TypeDefinition::Custom(
            params,
            access_controlled_from_json(options, &items[2], |json| {
                constructors_from_json(options, attrs, json)
            })
            .context(kind)?,
        ),
    };
    Ok(definition)
}

pub fn encode_type_specification<A>(
    options: &Options,
    attrs: &AttributeCodec<A>,
    spec: &TypeSpecification<A>,
) -> Result<Vec<u8>> {
    to_bytes(options, &type_specification_to_json(options, attrs, spec)?)
}

pub fn decode_type_specification<A>(
    options: &Options,
    attrs: &AttributeCodec<A>,
    bytes: &[u8],
) -> Result<TypeSpecification<A>> {
    type_specification_from_json(options, attrs, &from_bytes(options, bytes)?)
}

pub fn encode_type_definition<A>(
    options: &Options,
    attrs: &AttributeCodec<A>,
    definition: &TypeDefinition<A>,
) -> Result<Vec<u8>> {
    to_bytes(options, &type_definition_to_json(options, attrs, definition)?)
}

pub fn decode_type_definition<A>(
    options: &Options,
    attrs: &AttributeCodec<A>,
    bytes: &[u8],
) -> Result<TypeDefinition<A>> {
    type_definition_from_json(options, attrs, &from_bytes(options, bytes)?)
}
