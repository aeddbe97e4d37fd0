//! Documentation wrapper.

/// A value paired with its doc string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Documented<A> {
    pub doc: String,
    pub value: A,
}

impl<A> Documented<A> {
    pub fn new(doc: impl Into<String>, value: A) -> Self {
        Self {
            doc: doc.into(),
            value,
        }
    }

    /// Documented value with an empty doc string.
    pub fn undocumented(value: A) -> Self {
        Self::new(String::new(), value)
    }

    pub fn map<B, F: FnOnce(A) -> B>(self, f: F) -> Documented<B> {
        Documented {
            doc: self.doc,
            value: f(self.value),
        }
    }
}
