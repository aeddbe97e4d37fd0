//! Patterns used by lambdas, destructuring lets and pattern matches.

use super::literal::Literal;
use super::types::all_equal;
use crate::naming::{FQName, Name};

/// Pattern with generic attributes.
///
/// There is no variable pattern: binding a name is `As(Wildcard, name)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern<A> {
    Wildcard(A),
    As(A, Box<Pattern<A>>, Name),
    Tuple(A, Vec<Pattern<A>>),
    Constructor(A, FQName, Vec<Pattern<A>>),
    EmptyList(A),
    HeadTail(A, Box<Pattern<A>>, Box<Pattern<A>>),
    Literal(A, Literal),
    Unit(A),
}

impl<A> Pattern<A> {
    pub fn as_pattern(attrs: A, subject: Pattern<A>, name: Name) -> Self {
        Pattern::As(attrs, Box::new(subject), name)
    }

    pub fn head_tail(attrs: A, head: Pattern<A>, tail: Pattern<A>) -> Self {
        Pattern::HeadTail(attrs, Box::new(head), Box::new(tail))
    }

    pub fn attributes(&self) -> &A {
        match self {
            Pattern::Wildcard(a)
            | Pattern::As(a, _, _)
            | Pattern::Tuple(a, _)
            | Pattern::Constructor(a, _, _)
            | Pattern::EmptyList(a)
            | Pattern::HeadTail(a, _, _)
            | Pattern::Literal(a, _)
            | Pattern::Unit(a) => a,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Pattern::Wildcard(..) => "WildcardPattern",
            Pattern::As(..) => "AsPattern",
            Pattern::Tuple(..) => "TuplePattern",
            Pattern::Constructor(..) => "ConstructorPattern",
            Pattern::EmptyList(..) => "EmptyListPattern",
            Pattern::HeadTail(..) => "HeadTailPattern",
            Pattern::Literal(..) => "LiteralPattern",
            Pattern::Unit(..) => "UnitPattern",
        }
    }

    pub fn equal_with(&self, other: &Pattern<A>, attr_eq: &impl Fn(&A, &A) -> bool) -> bool {
        if !attr_eq(self.attributes(), other.attributes()) {
            return false;
        }
        match (self, other) {
            (Pattern::Wildcard(_), Pattern::Wildcard(_))
            | (Pattern::EmptyList(_), Pattern::EmptyList(_))
            | (Pattern::Unit(_), Pattern::Unit(_)) => true,
            (Pattern::As(_, l, lname), Pattern::As(_, r, rname)) => {
                lname == rname && l.equal_with(r, attr_eq)
            }
            (Pattern::Tuple(_, l), Pattern::Tuple(_, r)) => {
                all_equal(l, r, |l, r| l.equal_with(r, attr_eq))
            }
            (Pattern::Constructor(_, lname, l), Pattern::Constructor(_, rname, r)) => {
                lname == rname && all_equal(l, r, |l, r| l.equal_with(r, attr_eq))
            }
            (Pattern::HeadTail(_, lh, lt), Pattern::HeadTail(_, rh, rt)) => {
                lh.equal_with(rh, attr_eq) && lt.equal_with(rt, attr_eq)
            }
            (Pattern::Literal(_, l), Pattern::Literal(_, r)) => l == r,
            _ => false,
        }
    }

    pub fn eq_ignoring_attributes(&self, other: &Pattern<A>) -> bool {
        self.equal_with(other, &|_, _| true)
    }
}
