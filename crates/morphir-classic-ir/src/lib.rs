//! Classic Morphir IR.
//!
//! The IR tree for modules, types and values ([`ir`]), the identifiers that
//! address it ([`naming`]), a JSON codec for the three historical wire
//! formats ([`codec`]) and a visitor framework over type and pattern trees
//! ([`traversal`]).
//!
//! ```
//! use morphir_classic_ir::codec::{self, AttributeCodec, FormatVersion, Options};
//! use morphir_classic_ir::ir::Type;
//! use morphir_classic_ir::naming::FQName;
//!
//! let int = Type::Reference((), FQName::parse("Morphir.SDK:Basics:int")?, vec![]);
//! let options = Options::new(FormatVersion::V3);
//! let bytes = codec::encode_type(&options, &AttributeCodec::unit(), &int)?;
//! assert_eq!(codec::decode_type(&options, &AttributeCodec::unit(), &bytes)?, int);
//! # Ok::<(), morphir_classic_ir::Error>(())
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod ir;
pub mod naming;
pub mod traversal;

pub use error::{Error, Result, ResultExt};
pub use naming::{FQName, Name, NodePath, Path, QName, QualifiedModuleName};
