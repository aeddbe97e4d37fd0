//! Small analyses built on the walkers.

use super::visitor::{PatternVisitor, TypeVisitor, VisitAction};
use super::walker::{walk_pattern, walk_type};
use crate::ir::{Field, Pattern, Type};
use crate::naming::{FQName, Name};

struct TypeVariables;

impl<A> TypeVisitor<A, Vec<Name>> for TypeVariables {
    fn enter_variable(
        &mut self,
        mut found: Vec<Name>,
        _attrs: &A,
        name: &Name,
    ) -> (Vec<Name>, VisitAction) {
        if !found.contains(name) {
            found.push(name.clone());
        }
        (found, VisitAction::Continue)
    }

    fn enter_extensible_record(
        &mut self,
        mut found: Vec<Name>,
        _attrs: &A,
        variable: &Name,
        _fields: &[Field<A>],
    ) -> (Vec<Name>, VisitAction) {
        if !found.contains(variable) {
            found.push(variable.clone());
        }
        (found, VisitAction::Continue)
    }
}

/// Type variables in first-occurrence order, including the row variable of
/// extensible records.
pub fn collect_type_variables<A>(tpe: &Type<A>) -> Vec<Name> {
    walk_type(tpe, &mut TypeVariables, Vec::new()).0
}

struct References;

impl<A> TypeVisitor<A, Vec<FQName>> for References {
    fn enter_reference(
        &mut self,
        mut found: Vec<FQName>,
        _attrs: &A,
        name: &FQName,
        _args: &[Type<A>],
    ) -> (Vec<FQName>, VisitAction) {
        if !found.contains(name) {
            found.push(name.clone());
        }
        (found, VisitAction::Continue)
    }
}

/// Referenced type names in first-occurrence order.
pub fn collect_references<A>(tpe: &Type<A>) -> Vec<FQName> {
    walk_type(tpe, &mut References, Vec::new()).0
}

struct BoundNames;

impl<A> PatternVisitor<A, Vec<Name>> for BoundNames {
    fn enter_as(
        &mut self,
        mut names: Vec<Name>,
        _attrs: &A,
        _subject: &Pattern<A>,
        name: &Name,
    ) -> (Vec<Name>, VisitAction) {
        names.push(name.clone());
        (names, VisitAction::Continue)
    }
}

/// Names bound by `As` patterns, outermost first.
pub fn pattern_variables<A>(pattern: &Pattern<A>) -> Vec<Name> {
    walk_pattern(pattern, &mut BoundNames, Vec::new()).0
}
