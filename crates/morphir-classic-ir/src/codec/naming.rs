//! Names and paths. Their wire form is the same in every format version.

use serde_json::Value as Json;

use super::json::{array, from_bytes, string, to_bytes, tuple};
use super::options::Options;
use crate::error::{Result, ResultExt};
use crate::naming::{FQName, Name, NodePath, Path, QName};

pub fn name_to_json(name: &Name) -> Json {
    Json::Array(name.parts().map(Json::from).collect())
}

pub fn name_from_json(json: &Json) -> Result<Name> {
    let words = array(json, "Name")?;
    let words = words
        .iter()
        .enumerate()
        .map(|(i, word)| string(word, "Name word").with_context(|| format!("Name[{i}]")))
        .collect::<Result<Vec<_>>>()?;
    Ok(Name::from_parts(words))
}

pub fn path_to_json(path: &Path) -> Json {
    Json::Array(path.parts().iter().map(name_to_json).collect())
}

pub fn path_from_json(json: &Json) -> Result<Path> {
    let names = array(json, "Path")?
        .iter()
        .enumerate()
        .map(|(i, name)| name_from_json(name).with_context(|| format!("Path[{i}]")))
        .collect::<Result<Vec<_>>>()?;
    Ok(Path::from_parts(names))
}

pub fn qname_to_json(qname: &QName) -> Json {
    Json::Array(vec![
        path_to_json(qname.module_path()),
        name_to_json(qname.local_name()),
    ])
}

pub fn qname_from_json(json: &Json) -> Result<QName> {
    let items = tuple(json, "QName", 2)?;
    let module_path = path_from_json(&items[0]).context("QName module path")?;
    let local_name = name_from_json(&items[1]).context("QName local name")?;
    Ok(QName::new(module_path, local_name))
}

pub fn fqname_to_json(fqname: &FQName) -> Json {
    Json::Array(vec![
        path_to_json(fqname.package_path()),
        path_to_json(fqname.module_path()),
        name_to_json(fqname.local_name()),
    ])
}

pub fn fqname_from_json(json: &Json) -> Result<FQName> {
    let items = tuple(json, "FQName", 3)?;
    let package_path = path_from_json(&items[0]).context("FQName package path")?;
    let module_path = path_from_json(&items[1]).context("FQName module path")?;
    let local_name = name_from_json(&items[2]).context("FQName local name")?;
    Ok(FQName::new(package_path, module_path, local_name))
}

/// NodePath is the only entity written as a flat string.
pub fn node_path_to_json(node_path: &NodePath) -> Json {
    Json::String(node_path.to_string())
}

pub fn node_path_from_json(json: &Json) -> Result<NodePath> {
    NodePath::parse(string(json, "NodePath")?)
}

pub fn encode_name(options: &Options, name: &Name) -> Result<Vec<u8>> {
    to_bytes(options, &name_to_json(name))
}

pub fn decode_name(options: &Options, bytes: &[u8]) -> Result<Name> {
    name_from_json(&from_bytes(options, bytes)?)
}

pub fn encode_path(options: &Options, path: &Path) -> Result<Vec<u8>> {
    to_bytes(options, &path_to_json(path))
}

pub fn decode_path(options: &Options, bytes: &[u8]) -> Result<Path> {
    path_from_json(&from_bytes(options, bytes)?)
}

pub fn encode_qname(options: &Options, qname: &QName) -> Result<Vec<u8>> {
    to_bytes(options, &qname_to_json(qname))
}

pub fn decode_qname(options: &Options, bytes: &[u8]) -> Result<QName> {
    qname_from_json(&from_bytes(options, bytes)?)
}

pub fn encode_fqname(options: &Options, fqname: &FQName) -> Result<Vec<u8>> {
    to_bytes(options, &fqname_to_json(fqname))
}

pub fn decode_fqname(options: &Options, bytes: &[u8]) -> Result<FQName> {
    fqname_from_json(&from_bytes(options, bytes)?)
}

pub fn encode_node_path(options: &Options, node_path: &NodePath) -> Result<Vec<u8>> {
    to_bytes(options, &node_path_to_json(node_path))
}

pub fn decode_node_path(options: &Options, bytes: &[u8]) -> Result<NodePath> {
    node_path_from_json(&from_bytes(options, bytes)?)
}
