use super::name::Name;
use serde::de::{SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A module or package route: a list of Names, serialized as
/// `[["morphir"], ["s", "d", "k"]]`.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    names: Vec<Name>,
}

impl Path {
    pub fn from_parts(names: impl IntoIterator<Item = Name>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }

    /// Split text on runs of characters that are neither word characters nor
    /// whitespace, so `Morphir.SDK` and `morphir/sdk` both give two names.
    ///
    /// Segments that contain no words are skipped.
    pub fn parse(text: &str) -> Self {
        let names = text
            .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c.is_ascii_whitespace()))
            .map(Name::parse)
            .filter(|name| !name.is_empty())
            .collect();
        Self { names }
    }

    pub fn parts(&self) -> &[Name] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Render each name with `name_to_string` and join with `separator`.
    pub fn to_string_with(&self, name_to_string: impl Fn(&Name) -> String, separator: &str) -> String {
        self.names
            .iter()
            .map(name_to_string)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// True when `prefix` is a leading run of this path. The empty path is a
    /// prefix of every path.
    pub fn has_prefix(&self, prefix: &Path) -> bool {
        self.names.starts_with(&prefix.names)
    }

    pub fn is_prefix_of(&self, other: &Path) -> bool {
        other.has_prefix(self)
    }
}

impl std::str::FromStr for Path {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Path::parse(s))
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Path::parse(s)
    }
}

impl fmt::Display for Path {
    /// TitleCase names joined by `.`, e.g. `Morphir.SDK`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(Name::to_title_case, "."))
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Path").field(&self.names).finish()
    }
}

impl Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(&self.names)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PathVisitor;

        impl<'de> Visitor<'de> for PathVisitor {
            type Value = Path;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an array of Name arrays [[\"word1\"], [\"word2\"]]")
            }

            fn visit_seq<V>(self, mut seq: V) -> Result<Self::Value, V::Error>
            where
                V: SeqAccess<'de>,
            {
                let mut names = Vec::new();
                while let Some(name) = seq.next_element::<Name>()? {
                    names.push(name);
                }
                Ok(Path { names })
            }
        }

        deserializer.deserialize_seq(PathVisitor)
    }
}
