use morphir_classic_ir::codec::{self, Options};
use morphir_classic_ir::{Error, FQName, Name, NodePath, Path, QName, QualifiedModuleName};
use rstest::rstest;

#[rstest]
#[case("fooBar_baz 123", &["foo", "bar", "baz", "123"])]
#[case("ValueInUSD", &["value", "in", "u", "s", "d"])]
#[case("__x__", &["x"])]
#[case("a1b2", &["a", "1", "b", "2"])]
fn test_name_fragments(#[case] input: &str, #[case] expected: &[&str]) {
    let name = Name::parse(input);
    assert_eq!(name.to_parts(), expected);
    assert!(name.parts().all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())));
}

#[test]
fn test_human_words_acronym() {
    let name = Name::from_parts(["value", "in", "u", "s", "d"]);
    assert_eq!(name.to_human_words(), vec!["value", "in", "USD"]);
}

#[rstest]
#[case("Morphir.SDK:Basics:int")]
#[case("My.Pkg:Orders.Line:lineItemId")]
fn test_fqname_string_round_trip(#[case] text: &str) -> anyhow::Result<()> {
    let fqname = FQName::parse(text)?;
    assert_eq!(FQName::parse(&fqname.to_string())?, fqname);
    assert_eq!(fqname.to_string().parse::<FQName>()?, fqname);
    Ok(())
}

#[test]
fn test_fqname_requires_three_parts() {
    let err = FQName::parse("Basics:int").unwrap_err();
    assert!(matches!(err, Error::InvalidFormat { .. }));
    assert_eq!(
        err.to_string(),
        "expected 'PackagePath:ModulePath:localName', got \"Basics:int\""
    );
    assert!(QName::parse("Morphir.SDK:Basics:int").is_err());
}

#[test]
fn test_node_path_conversions() -> anyhow::Result<()> {
    let fqname = FQName::parse("Morphir.SDK:List:map")?;
    let node = NodePath::from_fqname(&fqname);
    assert_eq!(node.to_fqname()?, fqname);

    let nested = node.with_segment(Name::parse("lambda"));
    assert!(nested.to_fqname().is_err());
    assert!(nested.to_qualified_module_name().is_err());
    assert!(node.to_qualified_module_name().is_err());

    let module = QualifiedModuleName::new(Path::parse("Morphir.SDK"), Path::parse("List"));
    let module_node = NodePath::from_module(&module);
    assert_eq!(module_node.to_qualified_module_name()?, module);
    assert!(module_node.to_fqname().is_err());
    Ok(())
}

#[test]
fn test_node_path_string_form() -> anyhow::Result<()> {
    let node = NodePath::parse("Morphir.SDK:List:map")?;
    assert_eq!(node.local_name(), Some(&Name::parse("map")));
    assert_eq!(NodePath::parse(&node.to_string())?, node);
    assert!(NodePath::parse("Morphir").is_err());

    let bytes = codec::encode_node_path(&Options::default(), &node)?;
    assert_eq!(codec::decode_node_path(&Options::default(), &bytes)?, node);
    Ok(())
}

#[test]
fn test_path_wire_form() -> anyhow::Result<()> {
    let path = Path::parse("Morphir.SDK");
    let bytes = codec::encode_path(&Options::default(), &path)?;
    assert_eq!(bytes, br#"[["morphir"],["s","d","k"]]"#);
    assert_eq!(codec::decode_path(&Options::default(), &bytes)?, path);
    Ok(())
}
