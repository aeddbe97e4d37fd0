//! Pluggable encoders and decoders for tree attributes.
//!
//! The codec never interprets attributes. Callers hand it an
//! [`AttributeCodec`] that maps their attribute type to and from JSON.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value as Json;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};

type EncodeFn<A> = Arc<dyn Fn(&A) -> Result<Json> + Send + Sync>;
type DecodeFn<A> = Arc<dyn Fn(&Json) -> Result<A> + Send + Sync>;

pub struct AttributeCodec<A> {
    encode: Option<EncodeFn<A>>,
    decode: Option<DecodeFn<A>>,
}

impl<A> AttributeCodec<A> {
    pub fn new<E, D>(encode: E, decode: D) -> Self
    where
        E: Fn(&A) -> Result<Json> + Send + Sync + 'static,
        D: Fn(&Json) -> Result<A> + Send + Sync + 'static,
    {
        Self {
            encode: Some(Arc::new(encode)),
            decode: Some(Arc::new(decode)),
        }
    }

    /// A codec that can only encode. Decoding fails with
    /// [`Error::MissingAttributeCodec`].
    pub fn encode_only<E>(encode: E) -> Self
    where
        E: Fn(&A) -> Result<Json> + Send + Sync + 'static,
    {
        Self {
            encode: Some(Arc::new(encode)),
            decode: None,
        }
    }

    /// A codec that can only decode.
    pub fn decode_only<D>(decode: D) -> Self
    where
        D: Fn(&Json) -> Result<A> + Send + Sync + 'static,
    {
        Self {
            encode: None,
            decode: Some(Arc::new(decode)),
        }
    }

    pub fn encode(&self, attrs: &A) -> Result<Json> {
        let encode = self
            .encode
            .as_ref()
            .ok_or(Error::MissingAttributeCodec("encoder"))?;
        encode(attrs)
    }

    pub fn decode(&self, json: &Json) -> Result<A> {
        let decode = self
            .decode
            .as_ref()
            .ok_or(Error::MissingAttributeCodec("decoder"))?;
        decode(json)
    }
}

impl AttributeCodec<()> {
    /// Unit attributes: encoded as `{}`, decoded from `{}` or `[]`.
    pub fn unit() -> Self {
        Self::new(
            |_| Ok(Json::Object(serde_json::Map::new())),
            |json| match json {
                Json::Object(map) if map.is_empty() => Ok(()),
                Json::Array(items) if items.is_empty() => Ok(()),
                Json::Null => Err(Error::Null {
                    expected: "unit attributes",
                }),
                other => Err(Error::Attribute(format!(
                    "expected empty object for unit attributes, got {other}"
                ))),
            },
        )
    }
}

impl<A> AttributeCodec<A>
where
    A: Serialize + DeserializeOwned + 'static,
{
    /// Attributes with their own serde representation.
    pub fn serde() -> Self {
        Self::new(
            |attrs| serde_json::to_value(attrs).map_err(Error::from),
            |json| serde_json::from_value(json.clone()).map_err(Error::from),
        )
    }
}

impl<A> Clone for AttributeCodec<A> {
    fn clone(&self) -> Self {
        Self {
            encode: self.encode.clone(),
            decode: self.decode.clone(),
        }
    }
}

impl<A> fmt::Debug for AttributeCodec<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeCodec")
            .field("encode", &self.encode.is_some())
            .field("decode", &self.decode.is_some())
            .finish()
    }
}
