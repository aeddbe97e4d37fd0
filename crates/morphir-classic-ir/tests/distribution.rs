mod common;

use common::init_tracing;
use morphir_classic_ir::codec::{self, FormatVersion, Options};
use morphir_classic_ir::ir::{Distribution, Type, TypeDefinition, TypeSpecification, Value};
use morphir_classic_ir::{Error, Name, Path, QualifiedModuleName};

const V3_DOCUMENT: &str = r#"{
    "formatVersion": 3,
    "distribution": [
        "Library",
        [["my"], ["pkg"]],
        [
            [
                [["morphir"], ["s", "d", "k"]],
                {
                    "modules": [
                        [
                            [["basics"]],
                            {
                                "types": [
                                    [["int"], {"doc": "", "value": ["OpaqueTypeSpecification", []]}]
                                ],
                                "values": [],
                                "doc": null
                            }
                        ]
                    ]
                }
            ]
        ],
        {
            "modules": [
                [
                    [["orders"]],
                    {
                        "access": "Public",
                        "value": {
                            "types": [
                                [
                                    ["quantity"],
                                    {
                                        "access": "Public",
                                        "value": {
                                            "doc": "How many",
                                            "value": [
                                                "TypeAliasDefinition",
                                                [],
                                                ["Reference", {}, [[["morphir"], ["s", "d", "k"]], [["basics"]], ["int"]], []]
                                            ]
                                        }
                                    }
                                ],
                                [
                                    ["secret"],
                                    {
                                        "access": "Public",
                                        "value": {
                                            "doc": "",
                                            "value": [
                                                "CustomTypeDefinition",
                                                [],
                                                {"access": "Private", "value": [[["secret"], []]]}
                                            ]
                                        }
                                    }
                                ]
                            ],
                            "values": [
                                [
                                    ["none"],
                                    {
                                        "access": "Private",
                                        "value": {
                                            "doc": "",
                                            "value": {
                                                "inputTypes": [],
                                                "outputType": ["Unit", {}],
                                                "body": ["Unit", ["Unit", {}]]
                                            }
                                        }
                                    }
                                ]
                            ],
                            "doc": "Order handling"
                        }
                    }
                ]
            ]
        }
    ]
}"#;

#[test]
fn test_decode_v3_document() -> anyhow::Result<()> {
    init_tracing();
    let versioned = codec::decode_versioned_distribution(&Options::default(), V3_DOCUMENT.as_bytes())?;
    assert_eq!(versioned.format_version, FormatVersion::V3);

    let distribution = &versioned.distribution;
    assert_eq!(distribution.package_path(), &Path::parse("My.Pkg"));
    assert_eq!(distribution.dependencies().len(), 1);

    let orders = distribution
        .definition()
        .lookup_module(&Path::parse("Orders"))
        .expect("orders module");
    assert_eq!(orders.doc.as_deref(), Some("Order handling"));
    assert!(matches!(
        orders.lookup_type(&Name::parse("quantity")),
        Some(TypeDefinition::TypeAlias(..))
    ));
    let none = orders.lookup_value(&Name::parse("none")).expect("none value");
    assert_eq!(none.body, Value::Unit(Type::Unit(())));
    Ok(())
}

#[test]
fn test_module_lookup_across_packages() -> anyhow::Result<()> {
    let versioned = codec::decode_versioned_distribution(&Options::default(), V3_DOCUMENT.as_bytes())?;
    let distribution = versioned.distribution;

    let own = distribution
        .lookup_module_specification(&QualifiedModuleName::new(
            Path::parse("My.Pkg"),
            Path::parse("Orders"),
        ))
        .expect("own module");
    // private constructors make the type opaque, private values disappear
    assert_eq!(
        own.lookup_type(&Name::parse("secret")),
        Some(&TypeSpecification::Opaque(vec![]))
    );
    assert!(own.lookup_value(&Name::parse("none")).is_none());

    let dependency = distribution
        .lookup_module_specification(&QualifiedModuleName::new(
            Path::parse("Morphir.SDK"),
            Path::parse("Basics"),
        ))
        .expect("dependency module");
    assert!(dependency.lookup_type(&Name::parse("int")).is_some());

    assert!(distribution
        .lookup_module_specification(&QualifiedModuleName::new(
            Path::parse("Other"),
            Path::parse("Basics"),
        ))
        .is_none());
    Ok(())
}

#[test]
fn test_re_encode_in_every_version() -> anyhow::Result<()> {
    init_tracing();
    let original = codec::decode_versioned_distribution(&Options::default(), V3_DOCUMENT.as_bytes())?;
    for version in [FormatVersion::V1, FormatVersion::V2, FormatVersion::V3] {
        let bytes = codec::encode_versioned_distribution(&Options::new(version), &original.distribution)?;
        let decoded = codec::decode_versioned_distribution(&Options::default(), &bytes)?;
        assert_eq!(decoded.format_version, version);
        assert_eq!(decoded.distribution, original.distribution);
    }
    Ok(())
}

#[test]
fn test_v1_document_uses_snake_case() -> anyhow::Result<()> {
    let original = codec::decode_versioned_distribution(&Options::default(), V3_DOCUMENT.as_bytes())?;
    let bytes = codec::encode_versioned_distribution(&Options::new(FormatVersion::V1), &original.distribution)?;
    let text = String::from_utf8(bytes)?;
    assert!(text.contains(r#""formatVersion":1"#));
    assert!(text.contains(r#""type_alias_definition""#));
    assert!(text.contains(r#"["private",[[["secret"],[]]]]"#));
    assert!(!text.contains("TypeAliasDefinition"));
    Ok(())
}

#[test]
fn test_failure_points_into_the_document() {
    let broken = V3_DOCUMENT.replace(r#""outputType": ["Unit", {}]"#, r#""outputType": ["Unit"]"#);
    let err = codec::decode_versioned_distribution(&Options::default(), broken.as_bytes()).unwrap_err();
    assert_eq!(
        err.trail(),
        vec![
            "distribution",
            "package My.Pkg",
            "module Orders",
            "AccessControlled value",
            "values",
            "'none'",
            "AccessControlled value",
            "Documented value",
            "outputType",
        ]
    );
    assert!(matches!(
        err.root(),
        Error::LengthMismatch { entity: "Unit", expected: 2, actual: 1 }
    ));
}

#[test]
fn test_missing_format_version() {
    let err = codec::decode_versioned_distribution(&Options::default(), br#"{"distribution": []}"#).unwrap_err();
    assert!(matches!(
        err.root(),
        Error::MissingKey { key: "formatVersion", .. }
    ));
}

#[test]
fn test_library_accessors() {
    let distribution = Distribution::Library(Path::parse("Empty"), vec![], Default::default());
    assert!(distribution.dependencies().is_empty());
    assert!(distribution.definition().modules.is_empty());
}
