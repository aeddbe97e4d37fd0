use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Wire format revision.
///
/// Version 1 spells tags in snake_case and wraps access control in a
/// two-element array. Versions 2 and 3 use PascalCase tags and objects.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub enum FormatVersion {
    V1,
    V2,
    #[default]
    V3,
}

impl FormatVersion {
    pub const LATEST: FormatVersion = FormatVersion::V3;

    pub fn as_u32(self) -> u32 {
        match self {
            FormatVersion::V1 => 1,
            FormatVersion::V2 => 2,
            FormatVersion::V3 => 3,
        }
    }

    pub(crate) fn is_v1(self) -> bool {
        self == FormatVersion::V1
    }
}

impl TryFrom<u32> for FormatVersion {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::try_from(u64::from(value))
    }
}

impl TryFrom<u64> for FormatVersion {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self> {
        match value {
            1 => Ok(FormatVersion::V1),
            2 => Ok(FormatVersion::V2),
            3 => Ok(FormatVersion::V3),
            other => Err(Error::UnsupportedFormatVersion(other)),
        }
    }
}

impl From<FormatVersion> for u32 {
    fn from(version: FormatVersion) -> Self {
        version.as_u32()
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

/// Codec settings shared by every encode and decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub format_version: FormatVersion,
    /// Deepest type, pattern or value nesting accepted.
    pub max_depth: usize,
}

impl Options {
    pub const DEFAULT_MAX_DEPTH: usize = 512;

    pub fn new(format_version: FormatVersion) -> Self {
        Self {
            format_version,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new(FormatVersion::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, FormatVersion::V1)]
    #[case(2, FormatVersion::V2)]
    #[case(3, FormatVersion::V3)]
    fn test_version_from_number(#[case] number: u32, #[case] expected: FormatVersion) {
        assert_eq!(FormatVersion::try_from(number).unwrap(), expected);
        assert_eq!(expected.as_u32(), number);
    }

    #[rstest]
    #[case(0)]
    #[case(4)]
    fn test_unsupported_version(#[case] number: u32) {
        let err = FormatVersion::try_from(number).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormatVersion(n) if n == u64::from(number)));
    }

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.format_version, FormatVersion::V3);
        assert_eq!(options.max_depth, 512);
        assert_eq!(Options::new(FormatVersion::V1).with_max_depth(8).max_depth, 8);
    }

    #[test]
    fn test_serde_as_integer() {
        assert_eq!(serde_json::to_string(&FormatVersion::V2).unwrap(), "2");
        assert!(serde_json::from_str::<FormatVersion>("7").is_err());
    }
}
