//! Access control and documentation wrappers.
//!
//! Both take a closure for the wrapped value so they compose with every
//! other entity codec.

use serde_json::{Map, Value as Json};

use super::json::{key, object, string, tuple};
use super::options::Options;
use super::tags::{self, access as tag};
use crate::error::{Result, ResultExt};
use crate::ir::{Access, AccessControlled, Documented};

fn access_tag(access: Access) -> tags::Tag {
    match access {
        Access::Public => tag::PUBLIC,
        Access::Private => tag::PRIVATE,
    }
}

/// Version 1: `["public", value]`. Later: `{"access": "Public", "value": value}`.
pub fn access_controlled_to_json<T>(
    options: &Options,
    access_controlled: &AccessControlled<T>,
    value_to_json: impl FnOnce(&T) -> Result<Json>,
) -> Result<Json> {
    let version = options.format_version;
    let access = Json::from(access_tag(access_controlled.access).spell(version));
    let value = value_to_json(&access_controlled.value)?;
    if version.is_v1() {
        Ok(Json::Array(vec![access, value]))
    } else {
        let mut map = Map::new();
        map.insert("access".into(), access);
        map.insert("value".into(), value);
        Ok(Json::Object(map))
    }
}

pub fn access_controlled_from_json<T>(
    options: &Options,
    json: &Json,
    value_from_json: impl FnOnce(&Json) -> Result<T>,
) -> Result<AccessControlled<T>> {
    let version = options.format_version;
    let (access, value) = if version.is_v1() {
        let items = tuple(json, "AccessControlled", 2)?;
        (&items[0], &items[1])
    } else {
        let map = object(json, "AccessControlled")?;
        (
            key(map, "AccessControlled", "access")?,
            key(map, "AccessControlled", "value")?,
        )
    };
    let access = match tags::resolve(
        "Access",
        tag::ALL,
        version,
        string(access, "access string")?,
    )? {
        "Public" => Access::Public,
        _ => Access::Private,
    };
    let value = value_from_json(value).context("AccessControlled value")?;
    Ok(AccessControlled::new(access, value))
}

/// `{"doc": doc, "value": value}` in every version.
pub fn documented_to_json<T>(
    documented: &Documented<T>,
    value_to_json: impl FnOnce(&T) -> Result<Json>,
) -> Result<Json> {
    let mut map = Map::new();
    map.insert("doc".into(), Json::String(documented.doc.clone()));
    map.insert("value".into(), value_to_json(&documented.value)?);
    Ok(Json::Object(map))
}

pub fn documented_from_json<T>(
    json: &Json,
    value_from_json: impl FnOnce(&Json) -> Result<T>,
) -> Result<Documented<T>> {
    let map = object(json, "Documented")?;
    let doc = string(key(map, "Documented", "doc")?, "doc string").context("Documented doc")?;
    let value = value_from_json(key(map, "Documented", "value")?).context("Documented value")?;
    Ok(Documented::new(doc, value))
}
