//! Library distributions and the versioned distribution document.
//!
//! A library is `["Library", packagePath, [[dependencyPath, packageSpec], ...], packageDef]`.
//! The document wrapping it is `{"formatVersion": n, "distribution": library}`.

use serde_json::{Map, Value as Json};
use tracing::{debug, debug_span, info};

use super::attributes::AttributeCodec;
use super::json::{array, from_bytes, kind_of, key, object, tagged, expect_len, to_bytes, tuple};
use super::naming::{path_from_json, path_to_json};
use super::options::{FormatVersion, Options};
use super::package::{
    package_definition_from_json, package_definition_to_json, package_specification_from_json,
    package_specification_to_json,
};
use super::types::{type_from_json, type_to_json};
use crate::error::{Error, Result, ResultExt};
use crate::ir::{Distribution, Type, VersionedDistribution};

const LIBRARY: &str = "Library";

/// Value attributes of a library: the inferred type of each value node.
fn inferred_type_codec(options: &Options) -> AttributeCodec<Type<()>> {
    let options = *options;
    AttributeCodec::new(
        move |tpe| type_to_json(&options, &AttributeCodec::unit(), tpe),
        move |json| type_from_json(&options, &AttributeCodec::unit(), json),
    )
}

pub fn distribution_to_json(options: &Options, distribution: &Distribution) -> Result<Json> {
    let Distribution::Library(package_path, dependencies, definition) = distribution;
    let unit = AttributeCodec::unit();
    let dependencies = dependencies
        .iter()
        .map(|(path, spec)| {
            let spec = package_specification_to_json(options, &unit, spec)
                .with_context(|| format!("dependency {path}"))?;
            Ok(Json::Array(vec![path_to_json(path), spec]))
        })
        .collect::<Result<Vec<_>>>()?;
    let definition =
        package_definition_to_json(options, &unit, &inferred_type_codec(options), definition)
            .with_context(|| format!("package {package_path}"))?;
    Ok(Json::Array(vec![
        Json::from(LIBRARY),
        path_to_json(package_path),
        Json::Array(dependencies),
        definition,
    ]))
}

pub fn distribution_from_json(options: &Options, json: &Json) -> Result<Distribution> {
    let (tag, items) = tagged(json, "Distribution")?;
    if tag != LIBRARY && tag != "library" {
        return Err(Error::UnknownKind {
            entity: "Distribution",
            tag: tag.to_string(),
        });
    }
    expect_len(LIBRARY, items, 4)?;
    let package_path = path_from_json(&items[1]).context("Library package name")?;
    let unit = AttributeCodec::unit();
    let dependencies = array(&items[2], "list of dependencies")
        .context("Library dependencies")?
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let pair = tuple(entry, "dependency", 2).with_context(|| format!("dependencies[{i}]"))?;
            let path = path_from_json(&pair[0]).with_context(|| format!("dependencies[{i}]"))?;
            let spec = package_specification_from_json(options, &unit, &pair[1])
                .with_context(|| format!("dependency {path}"))?;
            Ok((path, spec))
        })
        .collect::<Result<Vec<_>>>()?;
    let definition =
        package_definition_from_json(options, &unit, &inferred_type_codec(options), &items[3])
            .with_context(|| format!("package {package_path}"))?;
    Ok(Distribution::Library(package_path, dependencies, definition))
}

pub fn encode_distribution(options: &Options, distribution: &Distribution) -> Result<Vec<u8>> {
    let _span = debug_span!("encode", entity = "Distribution", format_version = %options.format_version).entered();
    to_bytes(options, &distribution_to_json(options, distribution)?)
}

pub fn decode_distribution(options: &Options, bytes: &[u8]) -> Result<Distribution> {
    let _span = debug_span!("decode", entity = "Distribution", format_version = %options.format_version).entered();
    distribution_from_json(options, &from_bytes(options, bytes)?)
        .inspect_err(|err| debug!("Failed to decode distribution: {}", err))
}

/// Wraps the distribution in a document stamped with `options.format_version`.
pub fn versioned_distribution_to_json(options: &Options, distribution: &Distribution) -> Result<Json> {
    let mut map = Map::new();
    map.insert("formatVersion".into(), Json::from(options.format_version.as_u32()));
    map.insert(
        "distribution".into(),
        distribution_to_json(options, distribution).context("distribution")?,
    );
    Ok(Json::Object(map))
}

/// Reads `formatVersion` and decodes the body with that version's rules.
///
/// Only `options.max_depth` is taken from `options`; the format version
/// always comes from the document.
pub fn versioned_distribution_from_json(options: &Options, json: &Json) -> Result<VersionedDistribution> {
    const ENTITY: &str = "VersionedDistribution";
    let map = object(json, ENTITY)?;
    let format_version = match key(map, ENTITY, "formatVersion")? {
        Json::Number(n) => n.as_u64().ok_or_else(|| Error::InvalidFormat {
            expected: "non-negative integer",
            found: n.to_string(),
        })?,
        other => {
            return Err(Error::UnexpectedShape {
                expected: "formatVersion number",
                found: kind_of(other),
            });
        }
    };
    let format_version = FormatVersion::try_from(format_version)?;
    let options = Options {
        format_version,
        ..*options
    };
    let distribution =
        distribution_from_json(&options, key(map, ENTITY, "distribution")?).context("distribution")?;
    Ok(VersionedDistribution::new(format_version, distribution))
}

pub fn encode_versioned_distribution(options: &Options, distribution: &Distribution) -> Result<Vec<u8>> {
    let _span = debug_span!("encode", entity = "VersionedDistribution", format_version = %options.format_version).entered();
    let bytes = to_bytes(options, &versioned_distribution_to_json(options, distribution)?)?;
    info!(
        "Encoded distribution {} ({} bytes)",
        distribution.package_path(),
        bytes.len()
    );
    Ok(bytes)
}

pub fn decode_versioned_distribution(options: &Options, bytes: &[u8]) -> Result<VersionedDistribution> {
    let _span = debug_span!("decode", entity = "VersionedDistribution").entered();
    let versioned = versioned_distribution_from_json(options, &from_bytes(options, bytes)?)
        .inspect_err(|err| debug!("Failed to decode distribution document: {}", err))?;
    info!(
        "Decoded distribution {} (format version {})",
        versioned.distribution.package_path(),
        versioned.format_version
    );
    Ok(versioned)
}
