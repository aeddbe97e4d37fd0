use super::{Name, Path};
use crate::error::{Error, Result};
use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A name qualified by its module: `[modulePath, localName]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    module_path: Path,
    local_name: Name,
}

impl QName {
    pub fn new(module_path: Path, local_name: Name) -> Self {
        Self {
            module_path,
            local_name,
        }
    }

    pub fn module_path(&self) -> &Path {
        &self.module_path
    }

    pub fn local_name(&self) -> &Name {
        &self.local_name
    }

    /// Parse `ModulePath:localName`.
    pub fn parse(s: &str) -> Result<Self> {
        match s.split(':').collect::<Vec<_>>().as_slice() {
            [module, local] => Ok(Self::new(Path::parse(module), Name::parse(local))),
            _ => Err(Error::InvalidFormat {
                expected: "ModulePath:localName",
                found: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.module_path, self.local_name.to_camel_case())
    }
}

impl std::str::FromStr for QName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        QName::parse(s)
    }
}

impl Serialize for QName {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.module_path)?;
        tuple.serialize_element(&self.local_name)?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for QName {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct QNameVisitor;

        impl<'de> Visitor<'de> for QNameVisitor {
            type Value = QName;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a 2-element array [module_path, local_name]")
            }

            fn visit_seq<V>(self, mut seq: V) -> std::result::Result<Self::Value, V::Error>
            where
                V: SeqAccess<'de>,
            {
                let module_path = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let local_name = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;

                if seq.next_element::<IgnoredAny>()?.is_some() {
                    return Err(de::Error::custom("Expected end of QName array"));
                }

                Ok(QName::new(module_path, local_name))
            }
        }

        deserializer.deserialize_seq(QNameVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qname_string_roundtrip() {
        let qname = QName::parse("Morphir.SDK:listOf").unwrap();
        assert_eq!(qname.local_name(), &Name::from_parts(["list", "of"]));
        assert_eq!(qname.to_string(), "Morphir.SDK:listOf");
    }

    #[test]
    fn test_qname_rejects_wrong_arity() {
        let err = QName::parse("a:b:c").unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected 'ModulePath:localName', got \"a:b:c\""
        );
    }
}
