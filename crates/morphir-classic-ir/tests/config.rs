mod common;

use common::init_tracing;
use morphir_classic_ir::codec::{self, FormatVersion, Options};
use morphir_classic_ir::config::CodecConfig;
use morphir_classic_ir::ir::{Distribution, Type};
use morphir_classic_ir::{Error, Path};
use std::fs;

#[test]
fn test_configured_options_drive_the_codec() -> anyhow::Result<()> {
    init_tracing();
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("morphir.toml");
    fs::write(
        &config_path,
        r#"
[project]
name = "My.Pkg"

[ir]
format_version = 1
"#,
    )?;

    let options = Options::try_from(&CodecConfig::load(&config_path)?)?;
    assert_eq!(options.format_version, FormatVersion::V1);

    let distribution = Distribution::Library(Path::parse("My.Pkg"), vec![], Default::default());
    let ir_path = dir.path().join("morphir-ir.json");
    fs::write(&ir_path, codec::encode_versioned_distribution(&options, &distribution)?)?;

    let versioned = codec::decode_versioned_distribution(&Options::default(), &fs::read(&ir_path)?)?;
    assert_eq!(versioned.format_version, FormatVersion::V1);
    assert_eq!(versioned.distribution, distribution);
    Ok(())
}

#[test]
fn test_depth_limit_from_config() -> anyhow::Result<()> {
    let options = CodecConfig::from_toml_str("[ir]\nmax_depth = 3\n")?.to_options()?;
    let mut tpe = Type::Unit(());
    for _ in 0..3 {
        tpe = Type::Tuple((), vec![tpe]);
    }
    let err = codec::encode_type(&options, &codec::AttributeCodec::unit(), &tpe).unwrap_err();
    assert!(matches!(err.root(), Error::DepthLimitExceeded { limit: 3 }));
    Ok(())
}
