//! Module specifications and definitions.
//!
//! Entries are kept as ordered `(name, entry)` pairs. Lookup is by name and
//! does not depend on order, but order is preserved for serialization.

use super::access::AccessControlled;
use super::documented::Documented;
use super::type_definition::{TypeDefinition, TypeSpecification};
use super::value::{ValueDefinition, ValueSpecification};
use crate::naming::Name;

pub type ModuleTypeSpecification<TA> = (Name, Documented<TypeSpecification<TA>>);
pub type ModuleValueSpecification<TA> = (Name, Documented<ValueSpecification<TA>>);
pub type ModuleTypeDefinition<TA> = (Name, AccessControlled<Documented<TypeDefinition<TA>>>);
pub type ModuleValueDefinition<TA, VA> =
    (Name, AccessControlled<Documented<ValueDefinition<TA, VA>>>);

/// The public interface of a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSpecification<TA> {
    pub types: Vec<ModuleTypeSpecification<TA>>,
    pub values: Vec<ModuleValueSpecification<TA>>,
    pub doc: Option<String>,
}

/// The full implementation of a module.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleDefinition<TA, VA> {
    pub types: Vec<ModuleTypeDefinition<TA>>,
    pub values: Vec<ModuleValueDefinition<TA, VA>>,
    pub doc: Option<String>,
}

impl<TA> Default for ModuleSpecification<TA> {
    fn default() -> Self {
        Self {
            types: Vec::new(),
            values: Vec::new(),
            doc: None,
        }
    }
}

impl<TA, VA> Default for ModuleDefinition<TA, VA> {
    fn default() -> Self {
        Self {
            types: Vec::new(),
            values: Vec::new(),
            doc: None,
        }
    }
}

fn lookup<'a, T>(entries: &'a [(Name, T)], name: &Name) -> Option<&'a T> {
    entries
        .iter()
        .find_map(|(entry_name, entry)| (entry_name == name).then_some(entry))
}

impl<TA> ModuleSpecification<TA> {
    pub fn lookup_type(&self, name: &Name) -> Option<&TypeSpecification<TA>> {
        lookup(&self.types, name).map(|documented| &documented.value)
    }

    pub fn lookup_value(&self, name: &Name) -> Option<&ValueSpecification<TA>> {
        lookup(&self.values, name).map(|documented| &documented.value)
    }

    pub fn equal_with(
        &self,
        other: &ModuleSpecification<TA>,
        ta_eq: &impl Fn(&TA, &TA) -> bool,
    ) -> bool {
        self.doc == other.doc
            && self.types.len() == other.types.len()
            && self.types.iter().zip(&other.types).all(|((ln, l), (rn, r))| {
                ln == rn && l.doc == r.doc && l.value.equal_with(&r.value, ta_eq)
            })
            && self.values.len() == other.values.len()
            && self.values.iter().zip(&other.values).all(|((ln, l), (rn, r))| {
                ln == rn && l.doc == r.doc && l.value.equal_with(&r.value, ta_eq)
            })
    }
}

impl<TA, VA> ModuleDefinition<TA, VA> {
    /// Type definition by name, regardless of its access.
    pub fn lookup_type(&self, name: &Name) -> Option<&TypeDefinition<TA>> {
        lookup(&self.types, name).map(|entry| &entry.value.value)
    }

    /// Value definition by name, regardless of its access.
    pub fn lookup_value(&self, name: &Name) -> Option<&ValueDefinition<TA, VA>> {
        lookup(&self.values, name).map(|entry| &entry.value.value)
    }

    pub fn equal_with(
        &self,
        other: &ModuleDefinition<TA, VA>,
        ta_eq: &impl Fn(&TA, &TA) -> bool,
        va_eq: &impl Fn(&VA, &VA) -> bool,
    ) -> bool {
        self.doc == other.doc
            && self.types.len() == other.types.len()
            && self.types.iter().zip(&other.types).all(|((ln, l), (rn, r))| {
                ln == rn
                    && l.access == r.access
                    && l.value.doc == r.value.doc
                    && l.value.value.equal_with(&r.value.value, ta_eq)
            })
            && self.values.len() == other.values.len()
            && self.values.iter().zip(&other.values).all(|((ln, l), (rn, r))| {
                ln == rn
                    && l.access == r.access
                    && l.value.doc == r.value.doc
                    && l.value.value.equal_with(&r.value.value, ta_eq, va_eq)
            })
    }
}

impl<TA: Clone, VA> ModuleDefinition<TA, VA> {
    /// The interface other modules see: public types and values only.
    pub fn to_specification(&self) -> ModuleSpecification<TA> {
        let types = self
            .types
            .iter()
            .filter_map(|(name, entry)| {
                entry.with_public_access().map(|documented| {
                    (
                        name.clone(),
                        Documented::new(documented.doc.clone(), documented.value.to_specification()),
                    )
                })
            })
            .collect();
        let values = self
            .values
            .iter()
            .filter_map(|(name, entry)| {
                entry.with_public_access().map(|documented| {
                    (
                        name.clone(),
                        Documented::new(documented.doc.clone(), documented.value.to_specification()),
                    )
                })
            })
            .collect();
        ModuleSpecification {
            types,
            values,
            doc: self.doc.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::type_definition::Constructor;
    use crate::ir::types::Type;
    use crate::ir::value::Value;

    fn module() -> ModuleDefinition<(), ()> {
        let custom = |name: &str, access| {
            (
                Name::parse(name),
                AccessControlled::public(Documented::new(
                    "",
                    TypeDefinition::Custom(
                        vec![],
                        AccessControlled::new(
                            access,
                            vec![Constructor::new(Name::parse(name), vec![])],
                        ),
                    ),
                )),
            )
        };
        let value = |name: &str| {
            Documented::new(
                format!("{name} doc"),
                ValueDefinition::new(vec![], Type::Unit(()), Value::Unit(())),
            )
        };
        ModuleDefinition {
            types: vec![
                custom("Open", crate::ir::access::Access::Public),
                custom("Sealed", crate::ir::access::Access::Private),
                (
                    Name::parse("Hidden"),
                    AccessControlled::private(Documented::undocumented(TypeDefinition::TypeAlias(
                        vec![],
                        Type::Unit(()),
                    ))),
                ),
            ],
            values: vec![
                (Name::parse("exported"), AccessControlled::public(value("exported"))),
                (Name::parse("helper"), AccessControlled::private(value("helper"))),
            ],
            doc: Some("Module doc".into()),
        }
    }

    #[test]
    fn test_lookup_ignores_access() {
        let module = module();
        assert!(module.lookup_type(&Name::parse("Hidden")).is_some());
        assert!(module.lookup_value(&Name::parse("helper")).is_some());
        assert!(module.lookup_value(&Name::parse("missing")).is_none());
    }

    #[test]
    fn test_specification_keeps_public_entries() {
        let spec = module().to_specification();
        assert_eq!(spec.types.len(), 2);
        assert_eq!(spec.values.len(), 1);
        assert_eq!(spec.doc.as_deref(), Some("Module doc"));
        assert_eq!(
            spec.lookup_type(&Name::parse("Sealed")).map(TypeSpecification::kind),
            Some("OpaqueTypeSpecification")
        );
        assert!(spec.lookup_value(&Name::parse("exported")).is_some());
        assert!(spec.lookup_type(&Name::parse("Hidden")).is_none());
    }
}
