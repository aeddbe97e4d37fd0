//! Type declarations: the exported view (specification) and the full
//! implementation (definition).

use super::access::AccessControlled;
use super::types::{Type, all_equal};
use crate::naming::{FQName, Name};

/// A custom type constructor: `Just value` has name `just` and one argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor<A> {
    pub name: Name,
    pub args: Vec<(Name, Type<A>)>,
}

impl<A> Constructor<A> {
    pub fn new(name: Name, args: Vec<(Name, Type<A>)>) -> Self {
        Self { name, args }
    }

    pub fn equal_with(&self, other: &Constructor<A>, attr_eq: &impl Fn(&A, &A) -> bool) -> bool {
        self.name == other.name
            && all_equal(&self.args, &other.args, |(ln, lt), (rn, rt)| {
                ln == rn && lt.equal_with(rt, attr_eq)
            })
    }
}

fn constructors_equal<A>(
    left: &[Constructor<A>],
    right: &[Constructor<A>],
    attr_eq: &impl Fn(&A, &A) -> bool,
) -> bool {
    all_equal(left, right, |l, r| l.equal_with(r, attr_eq))
}

/// How a derived type maps to and from its base type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedTypeSpecificationDetails<A> {
    pub base_type: Type<A>,
    pub from_base_type: FQName,
    pub to_base_type: FQName,
}

/// The exported view of a type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSpecification<A> {
    TypeAlias(Vec<Name>, Type<A>),
    Opaque(Vec<Name>),
    Custom(Vec<Name>, Vec<Constructor<A>>),
    Derived(Vec<Name>, DerivedTypeSpecificationDetails<A>),
}

impl<A> TypeSpecification<A> {
    pub fn type_params(&self) -> &[Name] {
        match self {
            TypeSpecification::TypeAlias(params, _)
            | TypeSpecification::Opaque(params)
            | TypeSpecification::Custom(params, _)
            | TypeSpecification::Derived(params, _) => params,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TypeSpecification::TypeAlias(..) => "TypeAliasSpecification",
            TypeSpecification::Opaque(..) => "OpaqueTypeSpecification",
            TypeSpecification::Custom(..) => "CustomTypeSpecification",
            TypeSpecification::Derived(..) => "DerivedTypeSpecification",
        }
    }

    pub fn equal_with(&self, other: &TypeSpecification<A>, attr_eq: &impl Fn(&A, &A) -> bool) -> bool {
        if self.type_params() != other.type_params() {
            return false;
        }
        match (self, other) {
            (TypeSpecification::TypeAlias(_, l), TypeSpecification::TypeAlias(_, r)) => {
                l.equal_with(r, attr_eq)
            }
            (TypeSpecification::Opaque(_), TypeSpecification::Opaque(_)) => true,
            (TypeSpecification::Custom(_, l), TypeSpecification::Custom(_, r)) => {
                constructors_equal(l, r, attr_eq)
            }
            (TypeSpecification::Derived(_, l), TypeSpecification::Derived(_, r)) => {
                l.from_base_type == r.from_base_type
                    && l.to_base_type == r.to_base_type
                    && l.base_type.equal_with(&r.base_type, attr_eq)
            }
            _ => false,
        }
    }
}

/// The full implementation of a type declaration.
///
/// Unlike the specification, a custom type definition controls access to its
/// constructor list: private constructors make the type opaque to other
/// packages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDefinition<A> {
    TypeAlias(Vec<Name>, Type<A>),
    Custom(Vec<Name>, AccessControlled<Vec<Constructor<A>>>),
}

impl<A> TypeDefinition<A> {
    pub fn type_params(&self) -> &[Name] {
        match self {
            TypeDefinition::TypeAlias(params, _) | TypeDefinition::Custom(params, _) => params,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TypeDefinition::TypeAlias(..) => "TypeAliasDefinition",
            TypeDefinition::Custom(..) => "CustomTypeDefinition",
        }
    }

    pub fn equal_with(&self, other: &TypeDefinition<A>, attr_eq: &impl Fn(&A, &A) -> bool) -> bool {
        if self.type_params() != other.type_params() {
            return false;
        }
        match (self, other) {
            (TypeDefinition::TypeAlias(_, l), TypeDefinition::TypeAlias(_, r)) => {
                l.equal_with(r, attr_eq)
            }
            (TypeDefinition::Custom(_, l), TypeDefinition::Custom(_, r)) => {
                l.access == r.access && constructors_equal(&l.value, &r.value, attr_eq)
            }
            _ => false,
        }
    }
}

impl<A: Clone> TypeDefinition<A> {
    /// What other packages see of this type.
    pub fn to_specification(&self) -> TypeSpecification<A> {
        match self {
            TypeDefinition::TypeAlias(params, tpe) => {
                TypeSpecification::TypeAlias(params.clone(), tpe.clone())
            }
            TypeDefinition::Custom(params, constructors) => {
                match constructors.with_public_access() {
                    Some(ctors) => TypeSpecification::Custom(params.clone(), ctors.clone()),
                    None => TypeSpecification::Opaque(params.clone()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::access::Access;

    fn maybe(access: Access) -> TypeDefinition<()> {
        TypeDefinition::Custom(
            vec![Name::parse("a")],
            AccessControlled::new(
                access,
                vec![
                    Constructor::new(
                        Name::parse("Just"),
                        vec![(Name::parse("value"), Type::Variable((), Name::parse("a")))],
                    ),
                    Constructor::new(Name::parse("Nothing"), vec![]),
                ],
            ),
        )
    }

    #[test]
    fn test_private_constructors_become_opaque() {
        let public = maybe(Access::Public).to_specification();
        assert_eq!(public.kind(), "CustomTypeSpecification");

        let private = maybe(Access::Private).to_specification();
        assert_eq!(private, TypeSpecification::Opaque(vec![Name::parse("a")]));
    }

    #[test]
    fn test_definition_equality_checks_access() {
        let public = maybe(Access::Public);
        assert!(public.equal_with(&maybe(Access::Public), &|_, _| true));
        assert!(!public.equal_with(&maybe(Access::Private), &|_, _| true));
    }
}
