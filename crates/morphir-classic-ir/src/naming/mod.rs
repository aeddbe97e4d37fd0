//! Identifier primitives: names, paths and the qualified forms built on them.

pub mod fqname;
pub mod interner;
pub mod name;
pub mod node_path;
pub mod path;
pub mod qname;

pub use fqname::FQName;
pub use interner::{Word, intern, resolve};
pub use name::Name;
pub use node_path::{NodePath, QualifiedModuleName};
pub use path::Path;
pub use qname::QName;
