//! Addresses for any node in the IR: a module, a top-level declaration, or
//! something nested inside a declaration such as a record field.

use super::{FQName, Name, Path};
use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A module identified by its package and module paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedModuleName {
    package_path: Path,
    module_path: Path,
}

impl QualifiedModuleName {
    pub fn new(package_path: Path, module_path: Path) -> Self {
        Self {
            package_path,
            module_path,
        }
    }

    pub fn package_path(&self) -> &Path {
        &self.package_path
    }

    pub fn module_path(&self) -> &Path {
        &self.module_path
    }
}

impl fmt::Display for QualifiedModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.package_path, self.module_path)
    }
}

/// `[packagePath, modulePath]`, the same layout as the first two elements of
/// an FQName.
impl Serialize for QualifiedModuleName {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (&self.package_path, &self.module_path).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for QualifiedModuleName {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (package_path, module_path) = <(Path, Path)>::deserialize(deserializer)?;
        Ok(Self::new(package_path, module_path))
    }
}

/// Address of a node in the IR.
///
/// | form          | local name | segments | string                          |
/// |---------------|------------|----------|---------------------------------|
/// | module        | none       | empty    | `My.Pkg:My.Mod`                 |
/// | declaration   | some       | empty    | `My.Pkg:My.Mod:myType`          |
/// | nested node   | some       | non-empty| `My.Pkg:My.Mod:myType:fieldName`|
///
/// Unlike every other identifier, a node path travels on the wire as a single
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodePath {
    package_path: Path,
    module_path: Path,
    local_name: Option<Name>,
    segments: Vec<Name>,
}

impl NodePath {
    /// Build from parts. Segments without a local name have nothing to hang
    /// off and are dropped.
    pub fn from_parts(
        package_path: Path,
        module_path: Path,
        local_name: Option<Name>,
        segments: impl IntoIterator<Item = Name>,
    ) -> Self {
        let segments = match local_name {
            Some(_) => segments.into_iter().collect(),
            None => Vec::new(),
        };
        Self {
            package_path,
            module_path,
            local_name,
            segments,
        }
    }

    pub fn from_fqname(fqname: &FQName) -> Self {
        Self::from_parts(
            fqname.package_path().clone(),
            fqname.module_path().clone(),
            Some(fqname.local_name().clone()),
            [],
        )
    }

    pub fn from_module(module: &QualifiedModuleName) -> Self {
        Self::from_parts(
            module.package_path().clone(),
            module.module_path().clone(),
            None,
            [],
        )
    }

    /// Address of a child node one level below this one.
    ///
    /// On a module-level path the segment becomes the local name.
    pub fn with_segment(&self, segment: Name) -> Self {
        let mut child = self.clone();
        match child.local_name {
            Some(_) => child.segments.push(segment),
            None => child.local_name = Some(segment),
        }
        child
    }

    pub fn package_path(&self) -> &Path {
        &self.package_path
    }

    pub fn module_path(&self) -> &Path {
        &self.module_path
    }

    pub fn local_name(&self) -> Option<&Name> {
        self.local_name.as_ref()
    }

    pub fn segments(&self) -> &[Name] {
        &self.segments
    }

    pub fn is_module(&self) -> bool {
        self.local_name.is_none()
    }

    pub fn to_fqname(&self) -> Result<FQName> {
        let local_name = self.local_name.as_ref().ok_or(Error::InvalidNodePath(
            "cannot convert module-level path to FQName",
        ))?;
        if !self.segments.is_empty() {
            return Err(Error::InvalidNodePath(
                "cannot convert nested path to FQName",
            ));
        }
        Ok(FQName::new(
            self.package_path.clone(),
            self.module_path.clone(),
            local_name.clone(),
        ))
    }

    pub fn to_qualified_module_name(&self) -> Result<QualifiedModuleName> {
        if self.local_name.is_some() {
            return Err(Error::InvalidNodePath(
                "cannot convert path with local name to QualifiedModuleName",
            ));
        }
        if !self.segments.is_empty() {
            return Err(Error::InvalidNodePath(
                "cannot convert nested path to QualifiedModuleName",
            ));
        }
        Ok(QualifiedModuleName::new(
            self.package_path.clone(),
            self.module_path.clone(),
        ))
    }

    /// Parse the colon-joined string form. Two parts address a module, three a
    /// declaration, more a nested node.
    pub fn parse(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            [package, module] => Ok(Self::from_parts(
                Path::parse(package),
                Path::parse(module),
                None,
                [],
            )),
            [package, module, local, segments @ ..] => Ok(Self::from_parts(
                Path::parse(package),
                Path::parse(module),
                Some(Name::parse(local)),
                segments.iter().map(|s| Name::parse(s)),
            )),
            _ => Err(Error::InvalidFormat {
                expected: "PackageName:ModuleName",
                found: s.to_string(),
            }),
        }
    }
}

impl From<&FQName> for NodePath {
    fn from(fqname: &FQName) -> Self {
        NodePath::from_fqname(fqname)
    }
}

impl From<&QualifiedModuleName> for NodePath {
    fn from(module: &QualifiedModuleName) -> Self {
        NodePath::from_module(module)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.package_path, self.module_path)?;
        for name in self.local_name.iter().chain(&self.segments) {
            write!(f, ":{}", name.to_camel_case())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for NodePath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        NodePath::parse(s)
    }
}

impl Serialize for NodePath {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NodePath {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NodePath::parse(&s).map_err(serde::de::Error::custom)
    }
}
