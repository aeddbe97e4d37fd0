//! The classic IR tree.
//!
//! Types and values carry generic attributes. Module, package and
//! distribution structures keep their entries as ordered pairs so the wire
//! order survives a round trip.

// Core types
pub mod access;
pub mod decimal;
pub mod documented;
pub mod literal;
pub mod pattern;
pub mod type_definition;
pub mod types;
pub mod value;

// Structure types
pub mod distribution;
pub mod module;
pub mod package;

pub use access::{Access, AccessControlled};
pub use decimal::Decimal;
pub use distribution::{Distribution, VersionedDistribution};
pub use documented::Documented;
pub use literal::Literal;
pub use module::{
    ModuleDefinition, ModuleSpecification, ModuleTypeDefinition, ModuleTypeSpecification,
    ModuleValueDefinition, ModuleValueSpecification,
};
pub use package::{PackageDefinition, PackageSpecification};
pub use pattern::Pattern;
pub use type_definition::{
    Constructor, DerivedTypeSpecificationDetails, TypeDefinition, TypeSpecification,
};
pub use types::{Field, Type};
pub use value::{Value, ValueDefinition, ValueSpecification};
