//! Package specifications and definitions: `{"modules": [[path, module], ...]}`.

use serde_json::{Map, Value as Json};
use tracing::{debug, debug_span};

use super::attributes::AttributeCodec;
use super::json::{array, from_bytes, key, object, to_bytes, tuple};
use super::module::{
    module_definition_from_json, module_definition_to_json, module_specification_from_json,
    module_specification_to_json,
};
use super::naming::{path_from_json, path_to_json};
use super::options::Options;
use super::wrappers::{access_controlled_from_json, access_controlled_to_json};
use crate::error::{Result, ResultExt};
use crate::ir::{PackageDefinition, PackageSpecification};
use crate::naming::Path;

fn modules_to_json<T>(
    modules: &[(Path, T)],
    module_to_json: impl Fn(&T) -> Result<Json>,
) -> Result<Json> {
    let modules = modules
        .iter()
        .map(|(path, module)| {
            let module = module_to_json(module).with_context(|| format!("module {path}"))?;
            Ok(Json::Array(vec![path_to_json(path), module]))
        })
        .collect::<Result<Vec<_>>>()?;
    let mut map = Map::new();
    map.insert("modules".into(), Json::Array(modules));
    Ok(Json::Object(map))
}

fn modules_from_json<T>(
    json: &Json,
    entity: &'static str,
    module_from_json: impl Fn(&Json) -> Result<T>,
) -> Result<Vec<(Path, T)>> {
    let map = object(json, entity)?;
    array(key(map, entity, "modules")?, "list of modules")?
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let pair = tuple(entry, "module entry", 2).with_context(|| format!("modules[{i}]"))?;
            let path = path_from_json(&pair[0]).with_context(|| format!("modules[{i}]"))?;
            debug!("Decoding module {}", path);
            let module = module_from_json(&pair[1]).with_context(|| format!("module {path}"))?;
            Ok((path, module))
        })
        .collect()
}

pub fn package_specification_to_json<TA>(
    options: &Options,
    ta: &AttributeCodec<TA>,
    spec: &PackageSpecification<TA>,
) -> Result<Json> {
    modules_to_json(&spec.modules, |module| {
        module_specification_to_json(options, ta, module)
    })
}

pub fn package_specification_from_json<TA>(
    options: &Options,
    ta: &AttributeCodec<TA>,
    json: &Json,
) -> Result<PackageSpecification<TA>> {
    let modules = modules_from_json(json, "PackageSpecification", |module| {
        module_specification_from_json(options, ta, module)
    })?;
    Ok(PackageSpecification { modules })
}

pub fn package_definition_to_json<TA, VA>(
    options: &Options,
    ta: &AttributeCodec<TA>,
    va: &AttributeCodec<VA>,
    definition: &PackageDefinition<TA, VA>,
) -> Result<Json> {
    modules_to_json(&definition.modules, |module| {
        access_controlled_to_json(options, module, |m| {
            module_definition_to_json(options, ta, va, m)
        })
    })
}

pub fn package_definition_from_json<TA, VA>(
    options: &Options,
    ta: &AttributeCodec<TA>,
    va: &AttributeCodec<VA>,
    json: &Json,
) -> Result<PackageDefinition<TA, VA>> {
    let modules = modules_from_json(json, "PackageDefinition", |module| {
        access_controlled_from_json(options, module, |m| {
            module_definition_from_json(options, ta, va, m)
        })
    })?;
    Ok(PackageDefinition { modules })
}

pub fn encode_package_specification<TA>(
    options: &Options,
    ta: &AttributeCodec<TA>,
    spec: &PackageSpecification<TA>,
) -> Result<Vec<u8>> {
    let _span = debug_span!("encode", entity = "PackageSpecification", format_version = %options.format_version).entered();
    to_bytes(options, &package_specification_to_json(options, ta, spec)?)
}

pub fn decode_package_specification<TA>(
    options: &Options,
    ta: &AttributeCodec<TA>,
    bytes: &[u8],
) -> Result<PackageSpecification<TA>> {
    let _span = debug_span!("decode", entity = "PackageSpecification", format_version = %options.format_version).entered();
    package_specification_from_json(options, ta, &from_bytes(options, bytes)?)
        .inspect_err(|err| debug!("Failed to decode package specification: {}", err))
}

pub fn encode_package_definition<TA, VA>(
    options: &Options,
    ta: &AttributeCodec<TA>,
    va: &AttributeCodec<VA>,
    definition: &PackageDefinition<TA, VA>,
) -> Result<Vec<u8>> {
    let _span = debug_span!("encode", entity = "PackageDefinition", format_version = %options.format_version).entered();
    to_bytes(options, &package_definition_to_json(options, ta, va, definition)?)
}

pub fn decode_package_definition<TA, VA>(
    options: &Options,
    ta: &AttributeCodec<TA>,
    va: &AttributeCodec<VA>,
    bytes: &[u8],
) -> Result<PackageDefinition<TA, VA>> {
    let _span = debug_span!("decode", entity = "PackageDefinition", format_version = %options.format_version).entered();
    package_definition_from_json(options, ta, va, &from_bytes(options, bytes)?)
        .inspect_err(|err| debug!("Failed to decode package definition: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::FormatVersion;
    use crate::ir::{AccessControlled, ModuleDefinition, ModuleSpecification};
    use serde_json::json;

    #[test]
    fn test_specification_shape() {
        let spec: PackageSpecification<()> = PackageSpecification {
            modules: vec![(Path::parse("Morphir.SDK.List"), ModuleSpecification::default())],
        };
        let json = package_specification_to_json(&Options::default(), &AttributeCodec::unit(), &spec).unwrap();
        assert_eq!(
            json,
            json!({"modules": [[[["morphir"], ["s", "d", "k"], ["list"]], {"types": [], "values": [], "doc": null}]]})
        );
    }

    #[test]
    fn test_definition_v1_wraps_modules_in_access_pairs() {
        let definition: PackageDefinition<(), ()> = PackageDefinition {
            modules: vec![(Path::parse("Api"), AccessControlled::public(ModuleDefinition::default()))],
        };
        let options = Options::new(FormatVersion::V1);
        let unit = AttributeCodec::unit();
        let json = package_definition_to_json(&options, &unit, &unit, &definition).unwrap();
        assert_eq!(json["modules"][0][1][0], json!("public"));
        assert_eq!(package_definition_from_json(&options, &unit, &unit, &json).unwrap(), definition);
    }

    #[test]
    fn test_missing_modules_key() {
        let err = package_specification_from_json(&Options::default(), &AttributeCodec::<()>::unit(), &json!({}))
            .unwrap_err();
        assert_eq!(err.to_string(), "PackageSpecification: missing field 'modules'");
    }
}
