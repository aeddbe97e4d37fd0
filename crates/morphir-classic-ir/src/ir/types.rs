//! The type algebra.
//!
//! Every node carries an attribute of type `A`, which the IR itself never
//! interprets (source locations, inferred information, or `()` when unused).

use crate::naming::{FQName, Name};

/// Type expression with generic attributes.
///
/// `PartialEq` compares attributes too. The comparison that ignores
/// attributes is [`Type::eq_ignoring_attributes`]; [`Type::equal_with`]
/// takes a custom attribute comparison.
///
/// ```
/// use morphir_classic_ir::ir::Type;
///
/// let located = Type::Tuple(3, vec![Type::Unit(4)]);
/// let elsewhere = Type::Tuple(9, vec![Type::Unit(1)]);
/// assert_ne!(located, elsewhere);
/// assert!(located.eq_ignoring_attributes(&elsewhere));
/// assert!(!located.equal_with(&elsewhere, &|a, b| a == b));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type<A> {
    Variable(A, Name),
    Reference(A, FQName, Vec<Type<A>>),
    Tuple(A, Vec<Type<A>>),
    Record(A, Vec<Field<A>>),
    ExtensibleRecord(A, Name, Vec<Field<A>>),
    Function(A, Box<Type<A>>, Box<Type<A>>),
    Unit(A),
}

/// A named record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<A> {
    pub name: Name,
    pub tpe: Type<A>,
}

impl<A> Field<A> {
    pub fn new(name: Name, tpe: Type<A>) -> Self {
        Self { name, tpe }
    }

    pub fn equal_with(&self, other: &Field<A>, attr_eq: &impl Fn(&A, &A) -> bool) -> bool {
        self.name == other.name && self.tpe.equal_with(&other.tpe, attr_eq)
    }
}

impl<A> Type<A> {
    pub fn function(attrs: A, argument: Type<A>, result: Type<A>) -> Self {
        Type::Function(attrs, Box::new(argument), Box::new(result))
    }

    /// The attribute attached to this node.
    pub fn attributes(&self) -> &A {
        match self {
            Type::Variable(a, _)
            | Type::Reference(a, _, _)
            | Type::Tuple(a, _)
            | Type::Record(a, _)
            | Type::ExtensibleRecord(a, _, _)
            | Type::Function(a, _, _)
            | Type::Unit(a) => a,
        }
    }

    /// The v2/v3 wire tag of this variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Type::Variable(..) => "Variable",
            Type::Reference(..) => "Reference",
            Type::Tuple(..) => "Tuple",
            Type::Record(..) => "Record",
            Type::ExtensibleRecord(..) => "ExtensibleRecord",
            Type::Function(..) => "Function",
            Type::Unit(..) => "Unit",
        }
    }

    /// Structural equality with a caller-supplied attribute comparison.
    ///
    /// Field order is significant and nodes of different variants are never
    /// equal.
    pub fn equal_with(&self, other: &Type<A>, attr_eq: &impl Fn(&A, &A) -> bool) -> bool {
        if !attr_eq(self.attributes(), other.attributes()) {
            return false;
        }
        match (self, other) {
            (Type::Variable(_, l), Type::Variable(_, r)) => l == r,
            (Type::Reference(_, lname, largs), Type::Reference(_, rname, rargs)) => {
                lname == rname && all_equal(largs, rargs, |l, r| l.equal_with(r, attr_eq))
            }
            (Type::Tuple(_, l), Type::Tuple(_, r)) => {
                all_equal(l, r, |l, r| l.equal_with(r, attr_eq))
            }
            (Type::Record(_, l), Type::Record(_, r)) => {
                all_equal(l, r, |l, r| l.equal_with(r, attr_eq))
            }
            (Type::ExtensibleRecord(_, lvar, l), Type::ExtensibleRecord(_, rvar, r)) => {
                lvar == rvar && all_equal(l, r, |l, r| l.equal_with(r, attr_eq))
            }
            (Type::Function(_, larg, lres), Type::Function(_, rarg, rres)) => {
                larg.equal_with(rarg, attr_eq) && lres.equal_with(rres, attr_eq)
            }
            (Type::Unit(_), Type::Unit(_)) => true,
            _ => false,
        }
    }

    pub fn eq_ignoring_attributes(&self, other: &Type<A>) -> bool {
        self.equal_with(other, &|_, _| true)
    }

    /// Rebuild the tree with every attribute transformed by `f`.
    pub fn map_attributes<B>(&self, f: &impl Fn(&A) -> B) -> Type<B> {
        let fields = |fields: &[Field<A>]| -> Vec<Field<B>> {
            fields
                .iter()
                .map(|field| Field::new(field.name.clone(), field.tpe.map_attributes(f)))
                .collect()
        };
        match self {
            Type::Variable(a, name) => Type::Variable(f(a), name.clone()),
            Type::Reference(a, name, args) => Type::Reference(
                f(a),
                name.clone(),
                args.iter().map(|t| t.map_attributes(f)).collect(),
            ),
            Type::Tuple(a, elements) => {
                Type::Tuple(f(a), elements.iter().map(|t| t.map_attributes(f)).collect())
            }
            Type::Record(a, fs) => Type::Record(f(a), fields(fs.as_slice())),
            Type::ExtensibleRecord(a, var, fs) => {
                Type::ExtensibleRecord(f(a), var.clone(), fields(fs.as_slice()))
            }
            Type::Function(a, arg, res) => {
                Type::function(f(a), arg.map_attributes(f), res.map_attributes(f))
            }
            Type::Unit(a) => Type::Unit(f(a)),
        }
    }
}

pub(crate) fn all_equal<T>(left: &[T], right: &[T], eq: impl Fn(&T, &T) -> bool) -> bool {
    left.len() == right.len() && left.iter().zip(right).all(|(l, r)| eq(l, r))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(a: u32, name: &str) -> Type<u32> {
        Type::Variable(a, Name::parse(name))
    }

    fn record(a: u32, fields: &[(&str, Type<u32>)]) -> Type<u32> {
        Type::Record(
            a,
            fields
                .iter()
                .map(|(n, t)| Field::new(Name::parse(n), t.clone()))
                .collect(),
        )
    }

    #[test]
    fn test_attribute_predicate_is_applied_at_every_node() {
        let left = Type::function(1, var(2, "a"), var(3, "b"));
        let right = Type::function(1, var(2, "a"), var(99, "b"));
        assert!(!left.equal_with(&right, &|l, r| l == r));
        assert!(left.eq_ignoring_attributes(&right));
        assert_ne!(left, right);
    }

    #[test]
    fn test_field_order_is_significant() {
        let ab = record(0, &[("a", Type::Unit(0)), ("b", Type::Unit(0))]);
        let ba = record(0, &[("b", Type::Unit(0)), ("a", Type::Unit(0))]);
        assert!(!ab.eq_ignoring_attributes(&ba));
        assert!(ab.eq_ignoring_attributes(&ab.clone()));
    }

    #[test]
    fn test_different_variants_never_equal() {
        assert!(!Type::Unit(0).eq_ignoring_attributes(&Type::Tuple(0, vec![])));
        assert!(!record(0, &[]).eq_ignoring_attributes(&Type::ExtensibleRecord(
            0,
            Name::parse("r"),
            vec![]
        )));
    }

    #[test]
    fn test_map_attributes_preserves_shape() {
        let tpe = Type::function(1, var(2, "a"), record(3, &[("x", var(4, "b"))]));
        let mapped = tpe.map_attributes(&|a| a.to_string());
        assert_eq!(mapped.attributes(), "1");
        assert!(mapped.equal_with(&tpe.map_attributes(&|a| a.to_string()), &|l, r| l == r));
        assert_eq!(mapped.kind(), "Function");
    }
}
