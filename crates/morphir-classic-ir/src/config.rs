//! Codec configuration
//!
//! Reads the `[ir]` section of a `morphir.toml`. Every other section is
//! ignored, so the project's own configuration file can be passed as is.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::codec::{FormatVersion, Options};
use crate::error::{Error, Result};

/// Root of the configuration file, as far as the codec is concerned.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CodecConfig {
    /// IR format settings
    #[serde(default)]
    pub ir: Option<IrSection>,
}

/// [ir] section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrSection {
    /// IR format version
    #[serde(default = "default_format_version")]
    pub format_version: u32,
    /// Deepest tree nesting the codec accepts
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_format_version() -> u32 {
    FormatVersion::LATEST.as_u32()
}

fn default_max_depth() -> usize {
    Options::DEFAULT_MAX_DEPTH
}

impl Default for IrSection {
    fn default() -> Self {
        Self {
            format_version: default_format_version(),
            max_depth: default_max_depth(),
        }
    }
}

impl CodecConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file path
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading codec configuration from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)
            .map_err(|err| err.context(format!("{}", path.display())))?;
        info!("Loaded codec configuration from {:?}", path);
        Ok(config)
    }

    /// Codec options for this configuration. A missing `[ir]` section gives
    /// the defaults.
    pub fn to_options(&self) -> Result<Options> {
        let section = self.ir.clone().unwrap_or_default();
        let version = FormatVersion::try_from(section.format_version)?;
        if section.max_depth == 0 {
            return Err(Error::InvalidFormat {
                expected: "max_depth of at least 1",
                found: section.max_depth.to_string(),
            });
        }
        debug!(
            "Codec options: format version {}, max depth {}",
            version, section.max_depth
        );
        Ok(Options::new(version).with_max_depth(section.max_depth))
    }
}

impl TryFrom<&CodecConfig> for Options {
    type Error = Error;

    fn try_from(config: &CodecConfig) -> Result<Self> {
        config.to_options()
    }
}
