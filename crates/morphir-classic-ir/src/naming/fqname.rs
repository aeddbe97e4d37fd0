use super::{Name, Path, QName};
use crate::error::{Error, Result};
use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Fully qualified name: package path, module path and local name.
///
/// Serialized as `[packagePath, modulePath, localName]`. The canonical string
/// form is `Morphir.SDK:List:map`, TitleCase paths and a camelCase local name,
/// and [`FQName::parse`] reads it back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FQName {
    package_path: Path,
    module_path: Path,
    local_name: Name,
}

impl FQName {
    pub fn new(package_path: Path, module_path: Path, local_name: Name) -> Self {
        Self {
            package_path,
            module_path,
            local_name,
        }
    }

    pub fn from_qname(package_path: Path, qname: QName) -> Self {
        Self::new(
            package_path,
            qname.module_path().clone(),
            qname.local_name().clone(),
        )
    }

    pub fn package_path(&self) -> &Path {
        &self.package_path
    }

    pub fn module_path(&self) -> &Path {
        &self.module_path
    }

    pub fn local_name(&self) -> &Name {
        &self.local_name
    }

    pub fn to_qname(&self) -> QName {
        QName::new(self.module_path.clone(), self.local_name.clone())
    }

    /// Parse `PackagePath:ModulePath:localName`.
    pub fn parse(s: &str) -> Result<Self> {
        match s.split(':').collect::<Vec<_>>().as_slice() {
            [package, module, local] => Ok(Self::new(
                Path::parse(package),
                Path::parse(module),
                Name::parse(local),
            )),
            _ => Err(Error::InvalidFormat {
                expected: "PackagePath:ModulePath:localName",
                found: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for FQName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.package_path,
            self.module_path,
            self.local_name.to_camel_case()
        )
    }
}

impl std::str::FromStr for FQName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FQName::parse(s)
    }
}

impl Serialize for FQName {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.package_path)?;
        tuple.serialize_element(&self.module_path)?;
        tuple.serialize_element(&self.local_name)?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for FQName {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FQNameVisitor;

        impl<'de> Visitor<'de> for FQNameVisitor {
            type Value = FQName;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a 3-element array [package_path, module_path, local_name]")
            }

            fn visit_seq<V>(self, mut seq: V) -> std::result::Result<Self::Value, V::Error>
            where
                V: SeqAccess<'de>,
            {
                let package_path = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let module_path = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                let local_name = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(2, &self))?;

                if seq.next_element::<IgnoredAny>()?.is_some() {
                    return Err(de::Error::custom("Expected end of FQName array"));
                }

                Ok(FQName::new(package_path, module_path, local_name))
            }
        }

        deserializer.deserialize_seq(FQNameVisitor)
    }
}
