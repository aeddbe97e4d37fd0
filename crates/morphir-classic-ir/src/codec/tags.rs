//! Variant tags for every tagged entity, per format version.

use super::options::FormatVersion;
use crate::error::{Error, Result};

/// One variant's spellings. `name` is the v2/v3 tag and doubles as the
/// canonical kind returned by [`resolve`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct Tag {
    v1: &'static str,
    v1_alias: Option<&'static str>,
    name: &'static str,
}

impl Tag {
    const fn new(v1: &'static str, name: &'static str) -> Self {
        Self {
            v1,
            v1_alias: None,
            name,
        }
    }

    pub(crate) fn spell(&self, version: FormatVersion) -> &'static str {
        if version.is_v1() { self.v1 } else { self.name }
    }

    fn accepts(&self, version: FormatVersion, tag: &str) -> bool {
        if version.is_v1() {
            tag == self.v1 || self.v1_alias == Some(tag)
        } else {
            tag == self.name
        }
    }
}

/// Canonical kind for `tag` under `version`, or `UnknownKind`.
pub(crate) fn resolve(
    entity: &'static str,
    family: &[Tag],
    version: FormatVersion,
    tag: &str,
) -> Result<&'static str> {
    family
        .iter()
        .find(|candidate| candidate.accepts(version, tag))
        .map(|candidate| candidate.name)
        .ok_or_else(|| Error::UnknownKind {
            entity,
            tag: tag.to_string(),
        })
}

pub(crate) mod literal {
    use super::Tag;

    pub(crate) const BOOL: Tag = Tag::new("bool_literal", "BoolLiteral");
    pub(crate) const CHAR: Tag = Tag::new("char_literal", "CharLiteral");
    pub(crate) const STRING: Tag = Tag::new("string_literal", "StringLiteral");
    pub(crate) const WHOLE_NUMBER: Tag = Tag::new("int_literal", "WholeNumberLiteral");
    pub(crate) const FLOAT: Tag = Tag::new("float_literal", "FloatLiteral");
    pub(crate) const DECIMAL: Tag = Tag::new("decimal_literal", "DecimalLiteral");

    pub(crate) const ALL: &[Tag] = &[BOOL, CHAR, STRING, WHOLE_NUMBER, FLOAT, DECIMAL];
}

pub(crate) mod access {
    use super::Tag;

    pub(crate) const PUBLIC: Tag = Tag::new("public", "Public");
    pub(crate) const PRIVATE: Tag = Tag::new("private", "Private");

    pub(crate) const ALL: &[Tag] = &[PUBLIC, PRIVATE];
}

pub(crate) mod types {
    use super::Tag;

    pub(crate) const VARIABLE: Tag = Tag::new("variable", "Variable");
    pub(crate) const REFERENCE: Tag = Tag::new("reference", "Reference");
    pub(crate) const TUPLE: Tag = Tag::new("tuple", "Tuple");
    pub(crate) const RECORD: Tag = Tag::new("record", "Record");
    pub(crate) const EXTENSIBLE_RECORD: Tag = Tag::new("extensible_record", "ExtensibleRecord");
    pub(crate) const FUNCTION: Tag = Tag::new("function", "Function");
    pub(crate) const UNIT: Tag = Tag::new("unit", "Unit");

    pub(crate) const ALL: &[Tag] = &[
        VARIABLE,
        REFERENCE,
        TUPLE,
        RECORD,
        EXTENSIBLE_RECORD,
        FUNCTION,
        UNIT,
    ];
}

pub(crate) mod type_specification {
    use super::Tag;

    pub(crate) const TYPE_ALIAS: Tag = Tag::new("type_alias_specification", "TypeAliasSpecification");
    pub(crate) const OPAQUE: Tag = Tag::new("opaque_type_specification", "OpaqueTypeSpecification");
    pub(crate) const CUSTOM: Tag = Tag::new("custom_type_specification", "CustomTypeSpecification");
    /// Version 1 writers emit the PascalCase spelling for this variant while
    /// older readers expect snake_case, so version 1 accepts both.
    pub(crate) const DERIVED: Tag = Tag {
        v1: "DerivedTypeSpecification",
        v1_alias: Some("derived_type_specification"),
        name: "DerivedTypeSpecification",
    };

    pub(crate) const ALL: &[Tag] = &[TYPE_ALIAS, OPAQUE, CUSTOM, DERIVED];
}

pub(crate) mod type_definition {
    use super::Tag;

    pub(crate) const TYPE_ALIAS: Tag = Tag::new("type_alias_definition", "TypeAliasDefinition");
    pub(crate) const CUSTOM: Tag = Tag::new("custom_type_definition", "CustomTypeDefinition");

    pub(crate) const ALL: &[Tag] = &[TYPE_ALIAS, CUSTOM];
}

pub(crate) mod pattern {
    use super::Tag;

    pub(crate) const WILDCARD: Tag = Tag::new("wildcard_pattern", "WildcardPattern");
    pub(crate) const AS: Tag = Tag::new("as_pattern", "AsPattern");
    pub(crate) const TUPLE: Tag = Tag::new("tuple_pattern", "TuplePattern");
    pub(crate) const CONSTRUCTOR: Tag = Tag::new("constructor_pattern", "ConstructorPattern");
    pub(crate) const EMPTY_LIST: Tag = Tag::new("empty_list_pattern", "EmptyListPattern");
    pub(crate) const HEAD_TAIL: Tag = Tag::new("head_tail_pattern", "HeadTailPattern");
    pub(crate) const LITERAL: Tag = Tag::new("literal_pattern", "LiteralPattern");
    pub(crate) const UNIT: Tag = Tag::new("unit_pattern", "UnitPattern");

    pub(crate) const ALL: &[Tag] = &[
        WILDCARD,
        AS,
        TUPLE,
        CONSTRUCTOR,
        EMPTY_LIST,
        HEAD_TAIL,
        LITERAL,
        UNIT,
    ];
}

pub(crate) mod value {
    use super::Tag;

    pub(crate) const LITERAL: Tag = Tag::new("literal", "Literal");
    pub(crate) const CONSTRUCTOR: Tag = Tag::new("constructor", "Constructor");
    pub(crate) const TUPLE: Tag = Tag::new("tuple", "Tuple");
    pub(crate) const LIST: Tag = Tag::new("list", "List");
    pub(crate) const RECORD: Tag = Tag::new("record", "Record");
    pub(crate) const VARIABLE: Tag = Tag::new("variable", "Variable");
    pub(crate) const REFERENCE: Tag = Tag::new("reference", "Reference");
    pub(crate) const FIELD: Tag = Tag::new("field", "Field");
    pub(crate) const FIELD_FUNCTION: Tag = Tag::new("field_function", "FieldFunction");
    pub(crate) const APPLY: Tag = Tag::new("apply", "Apply");
    pub(crate) const LAMBDA: Tag = Tag::new("lambda", "Lambda");
    pub(crate) const LET_DEFINITION: Tag = Tag::new("let_definition", "LetDefinition");
    pub(crate) const LET_RECURSION: Tag = Tag::new("let_recursion", "LetRecursion");
    pub(crate) const DESTRUCTURE: Tag = Tag::new("destructure", "Destructure");
    pub(crate) const IF_THEN_ELSE: Tag = Tag::new("if_then_else", "IfThenElse");
    pub(crate) const PATTERN_MATCH: Tag = Tag::new("pattern_match", "PatternMatch");
    pub(crate) const UPDATE_RECORD: Tag = Tag::new("update_record", "UpdateRecord");
    pub(crate) const UNIT: Tag = Tag::new("unit", "Unit");

    pub(crate) const ALL: &[Tag] = &[
        LITERAL,
        CONSTRUCTOR,
        TUPLE,
        LIST,
        RECORD,
        VARIABLE,
        REFERENCE,
        FIELD,
        FIELD_FUNCTION,
        APPLY,
        LAMBDA,
        LET_DEFINITION,
        LET_RECURSION,
        DESTRUCTURE,
        IF_THEN_ELSE,
        PATTERN_MATCH,
        UPDATE_RECORD,
        UNIT,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FormatVersion::V1, "custom_type_definition")]
    #[case(FormatVersion::V2, "CustomTypeDefinition")]
    #[case(FormatVersion::V3, "CustomTypeDefinition")]
    fn test_spelling_follows_version(#[case] version: FormatVersion, #[case] expected: &str) {
        assert_eq!(type_definition::CUSTOM.spell(version), expected);
        assert_eq!(
            resolve("TypeDefinition", type_definition::ALL, version, expected).unwrap(),
            "CustomTypeDefinition"
        );
    }

    #[test]
    fn test_other_version_spelling_is_unknown() {
        let err = resolve("Type", types::ALL, FormatVersion::V1, "Variable").unwrap_err();
        assert_eq!(err.to_string(), "unknown Type kind: \"Variable\"");
        assert!(resolve("Type", types::ALL, FormatVersion::V3, "variable").is_err());
    }

    #[rstest]
    #[case("DerivedTypeSpecification")]
    #[case("derived_type_specification")]
    fn test_v1_derived_accepts_both_spellings(#[case] tag: &str) {
        let kind = resolve("TypeSpecification", type_specification::ALL, FormatVersion::V1, tag);
        assert_eq!(kind.unwrap(), "DerivedTypeSpecification");
    }

    #[test]
    fn test_v1_derived_writes_pascal_case() {
        assert_eq!(
            type_specification::DERIVED.spell(FormatVersion::V1),
            "DerivedTypeSpecification"
        );
        assert!(
            resolve(
                "TypeSpecification",
                type_specification::ALL,
                FormatVersion::V3,
                "derived_type_specification"
            )
            .is_err()
        );
    }
}
