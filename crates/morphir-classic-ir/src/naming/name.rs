//! Name: the word list every identifier in the IR is built from.

use super::interner::{Word, intern, resolve};
use serde::de::{SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An identifier stored as lowercase words, serialized as `["word1", "word2"]`.
///
/// The same name renders as `valueInUSD`, `ValueInUSD` or `value_in_USD`
/// depending on the target convention.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Name {
    words: Vec<Word>,
}

impl Name {
    /// Build a name from already split words. Empty words are dropped.
    pub fn from_parts<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: parts
                .into_iter()
                .filter(|w| !w.as_ref().is_empty())
                .map(|w| intern(w.as_ref()))
                .collect(),
        }
    }

    /// Split arbitrary text into words.
    ///
    /// Words are maximal runs of `[A-Za-z][a-z]*` or `[0-9]+`; everything else
    /// separates words and each word is lowercased.
    pub fn parse(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut words = Vec::new();
        let mut i = 0;

        while i < bytes.len() {
            let start = i;
            if bytes[i].is_ascii_alphabetic() {
                i += 1;
                while i < bytes.len() && bytes[i].is_ascii_lowercase() {
                    i += 1;
                }
            } else if bytes[i].is_ascii_digit() {
                i += 1;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
            } else {
                i += 1;
                continue;
            }
            words.push(intern(&text[start..i].to_ascii_lowercase()));
        }

        Self { words }
    }

    /// The words of this name.
    pub fn parts(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.words.iter().map(|w| resolve(*w))
    }

    pub fn to_parts(&self) -> Vec<String> {
        self.parts().map(str::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// `["value","in","u","s","d"]` renders as `ValueInUSD`.
    pub fn to_title_case(&self) -> String {
        self.parts().map(capitalize).collect()
    }

    /// `["value","in","u","s","d"]` renders as `valueInUSD`.
    pub fn to_camel_case(&self) -> String {
        let mut parts = self.parts();
        let mut out = parts.next().map(str::to_string).unwrap_or_default();
        for part in parts {
            out.push_str(&capitalize(part));
        }
        out
    }

    /// Words for display, with runs of single letters joined into one
    /// uppercase abbreviation: `["value","in","u","s","d"]` gives
    /// `["value","in","USD"]`.
    ///
    /// A one-word name is returned unchanged, even a single letter.
    pub fn to_human_words(&self) -> Vec<String> {
        if self.words.len() <= 1 {
            return self.to_parts();
        }

        let mut out = Vec::with_capacity(self.words.len());
        let mut abbreviation = String::new();
        for part in self.parts() {
            if part.chars().count() == 1 {
                abbreviation.push_str(part);
                continue;
            }
            if !abbreviation.is_empty() {
                out.push(std::mem::take(&mut abbreviation).to_uppercase());
            }
            out.push(part.to_string());
        }
        if !abbreviation.is_empty() {
            out.push(abbreviation.to_uppercase());
        }
        out
    }

    /// Human words with the first word capitalized.
    pub fn to_human_words_title(&self) -> Vec<String> {
        let mut words = self.to_human_words();
        if let Some(first) = words.first_mut() {
            *first = capitalize(first);
        }
        words
    }

    /// `["value","in","u","s","d"]` renders as `value_in_USD`.
    pub fn to_snake_case(&self) -> String {
        self.to_human_words().join("_")
    }
}

pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl std::str::FromStr for Name {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Name::parse(s))
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Name::parse(s)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_camel_case())
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Name").field(&self.to_parts()).finish()
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.parts())
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NameVisitor;

        impl<'de> Visitor<'de> for NameVisitor {
            type Value = Name;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an array of strings [\"word1\", \"word2\"]")
            }

            fn visit_seq<V>(self, mut seq: V) -> Result<Self::Value, V::Error>
            where
                V: SeqAccess<'de>,
            {
                let mut words = Vec::new();
                while let Some(word) = seq.next_element::<String>()? {
                    words.push(word);
                }
                Ok(Name::from_parts(words))
            }
        }

        deserializer.deserialize_seq(NameVisitor)
    }
}
