//! Error types for the classic IR model and its codec.
//!
//! Every decode step wraps the error it receives with the entity or field it
//! was working on, so a failure deep inside a distribution reads as a trail
//! from the document root down to the malformed node.

use thiserror::Error;

/// Result type alias for classic IR operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for classic IR operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("expected {expected}, got null")]
    Null { expected: &'static str },

    #[error("expected {expected}, got {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },

    #[error("{entity} expects {expected} elements, got {actual}")]
    LengthMismatch {
        entity: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{entity}: missing field '{key}'")]
    MissingKey {
        entity: &'static str,
        key: &'static str,
    },

    #[error("unknown {entity} kind: {tag:?}")]
    UnknownKind { entity: &'static str, tag: String },

    #[error("expected '{expected}', got {found:?}")]
    InvalidFormat {
        expected: &'static str,
        found: String,
    },

    #[error("NodePath: {0}")]
    InvalidNodePath(&'static str),

    #[error("invalid decimal literal {0:?}")]
    InvalidDecimal(String),

    #[error("expected a single character, got {0:?}")]
    InvalidChar(String),

    #[error("attribute {0} is not configured")]
    MissingAttributeCodec(&'static str),

    #[error("attribute codec error: {0}")]
    Attribute(String),

    #[error("nesting depth exceeds the limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    #[error("unsupported format version: {0}")]
    UnsupportedFormatVersion(u64),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap this error with one more breadcrumb.
    pub fn context(self, context: impl Into<String>) -> Self {
        Error::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping every `Context` layer.
    pub fn root(&self) -> &Error {
        let mut current = self;
        while let Error::Context { source, .. } = current {
            current = source.as_ref();
        }
        current
    }

    /// Breadcrumbs from the outermost context to the innermost.
    pub fn trail(&self) -> Vec<&str> {
        let mut trail = Vec::new();
        let mut current = self;
        while let Error::Context { context, source } = current {
            trail.push(context.as_str());
            current = source.as_ref();
        }
        trail
    }

    pub fn is_unknown_kind(&self) -> bool {
        matches!(self.root(), Error::UnknownKind { .. })
    }
}

/// Adds breadcrumb helpers to `Result`.
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(context))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|e| e.context(f()))
    }
}
