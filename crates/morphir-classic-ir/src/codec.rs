//! Versioned JSON codec for the classic IR.
//!
//! Every entity has a `*_to_json`/`*_from_json` pair working on
//! [`serde_json::Value`] and an `encode_*`/`decode_*` pair working on bytes.
//! All of them take [`Options`], which selects one of the three historical
//! wire formats. Decoding is strict: a payload written under another format
//! version fails instead of being reinterpreted.
//!
//! Tree attributes are opaque to the codec and go through an
//! [`AttributeCodec`] supplied by the caller.

pub mod attributes;
pub mod distribution;
mod json;
pub mod literal;
pub mod module;
pub mod naming;
pub mod options;
pub mod package;
pub mod pattern;
mod tags;
pub mod type_definition;
pub mod types;
pub mod value;
pub mod wrappers;

pub use attributes::AttributeCodec;
pub use distribution::{
    decode_distribution, decode_versioned_distribution, distribution_from_json,
    distribution_to_json, encode_distribution, encode_versioned_distribution,
    versioned_distribution_from_json, versioned_distribution_to_json,
};
pub use literal::{decode_literal, encode_literal, literal_from_json, literal_to_json};
pub use module::{
    decode_module_definition, decode_module_specification, encode_module_definition,
    encode_module_specification, module_definition_from_json, module_definition_to_json,
    module_specification_from_json, module_specification_to_json,
};
pub use naming::{
    decode_fqname, decode_name, decode_node_path, decode_path, decode_qname, encode_fqname,
    encode_name, encode_node_path, encode_path, encode_qname,
};
pub use options::{FormatVersion, Options};
pub use package::{
    decode_package_definition, decode_package_specification, encode_package_definition,
    encode_package_specification, package_definition_from_json, package_definition_to_json,
    package_specification_from_json, package_specification_to_json,
};
pub use pattern::{decode_pattern, encode_pattern, pattern_from_json, pattern_to_json};
pub use type_definition::{
    decode_type_definition, decode_type_specification, encode_type_definition,
    encode_type_specification, type_definition_from_json, type_definition_to_json,
    type_specification_from_json, type_specification_to_json,
};
pub use types::{decode_type, encode_type, type_from_json, type_to_json};
pub use value::{
    decode_value, decode_value_definition, decode_value_specification, encode_value,
    encode_value_definition, encode_value_specification, value_definition_from_json,
    value_definition_to_json, value_from_json, value_specification_from_json,
    value_specification_to_json, value_to_json,
};
pub use wrappers::{
    access_controlled_from_json, access_controlled_to_json, documented_from_json,
    documented_to_json,
};
