use crate::ir::{Field, Literal, Pattern, Type};
use crate::naming::{FQName, Name};

/// What the walker does after an enter hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisitAction {
    /// Visit the children, then call the exit hooks.
    #[default]
    Continue,
    /// Do not visit the children and do not call the matching exit hook.
    /// Siblings are still visited.
    SkipChildren,
    /// Abort the whole walk.
    Stop,
}

/// Hooks called by [`walk_type`](super::walk_type).
///
/// Every hook has a no-op default, so implementors override only what they
/// need. State is threaded by value through every call.
///
/// For each node the walker calls `enter_type`, the variant's enter hook,
/// the children, the variant's exit hook and finally `exit_type`.
#[allow(unused_variables)]
pub trait TypeVisitor<A, S> {
    fn enter_type(&mut self, state: S, node: &Type<A>) -> (S, VisitAction) {
        (state, VisitAction::Continue)
    }

    fn exit_type(&mut self, state: S, node: &Type<A>) -> S {
        state
    }

    fn enter_variable(&mut self, state: S, attrs: &A, name: &Name) -> (S, VisitAction) {
        (state, VisitAction::Continue)
    }

    fn exit_variable(&mut self, state: S, attrs: &A, name: &Name) -> S {
        state
    }

    fn enter_reference(
        &mut self,
        state: S,
        attrs: &A,
        name: &FQName,
        args: &[Type<A>],
    ) -> (S, VisitAction) {
        (state, VisitAction::Continue)
    }

    fn exit_reference(&mut self, state: S, attrs: &A, name: &FQName, args: &[Type<A>]) -> S {
        state
    }

    fn enter_tuple(&mut self, state: S, attrs: &A, elements: &[Type<A>]) -> (S, VisitAction) {
        (state, VisitAction::Continue)
    }

    fn exit_tuple(&mut self, state: S, attrs: &A, elements: &[Type<A>]) -> S {
        state
    }

    fn enter_record(&mut self, state: S, attrs: &A, fields: &[Field<A>]) -> (S, VisitAction) {
        (state, VisitAction::Continue)
    }

    fn exit_record(&mut self, state: S, attrs: &A, fields: &[Field<A>]) -> S {
        state
    }

    fn enter_extensible_record(
        &mut self,
        state: S,
        attrs: &A,
        variable: &Name,
        fields: &[Field<A>],
    ) -> (S, VisitAction) {
        (state, VisitAction::Continue)
    }

    fn exit_extensible_record(
        &mut self,
        state: S,
        attrs: &A,
        variable: &Name,
        fields: &[Field<A>],
    ) -> S {
        state
    }

    fn enter_function(
        &mut self,
        state: S,
        attrs: &A,
        argument: &Type<A>,
        result: &Type<A>,
    ) -> (S, VisitAction) {
        (state, VisitAction::Continue)
    }

    fn exit_function(&mut self, state: S, attrs: &A, argument: &Type<A>, result: &Type<A>) -> S {
        state
    }

    fn enter_unit(&mut self, state: S, attrs: &A) -> (S, VisitAction) {
        (state, VisitAction::Continue)
    }

    fn exit_unit(&mut self, state: S, attrs: &A) -> S {
        state
    }
}

/// Hooks called by [`walk_pattern`](super::walk_pattern).
///
/// Same contract as [`TypeVisitor`]: `enter_pattern`, the variant's enter
/// hook, children, the variant's exit hook, `exit_pattern`.
#[allow(unused_variables)]
pub trait PatternVisitor<A, S> {
    fn enter_pattern(&mut self, state: S, node: &Pattern<A>) -> (S, VisitAction) {
        (state, VisitAction::Continue)
    }

    fn exit_pattern(&mut self, state: S, node: &Pattern<A>) -> S {
        state
    }

    fn enter_wildcard(&mut self, state: S, attrs: &A) -> (S, VisitAction) {
        (state, VisitAction::Continue)
    }

    fn exit_wildcard(&mut self, state: S, attrs: &A) -> S {
        state
    }

    fn enter_as(
        &mut self,
        state: S,
        attrs: &A,
        subject: &Pattern<A>,
        name: &Name,
    ) -> (S, VisitAction) {
        (state, VisitAction::Continue)
    }

    fn exit_as(&mut self, state: S, attrs: &A, subject: &Pattern<A>, name: &Name) -> S {
        state
    }

    fn enter_tuple(&mut self, state: S, attrs: &A, elements: &[Pattern<A>]) -> (S, VisitAction) {
        (state, VisitAction::Continue)
    }

    fn exit_tuple(&mut self, state: S, attrs: &A, elements: &[Pattern<A>]) -> S {
        state
    }

    fn enter_constructor(
        &mut self,
        state: S,
        attrs: &A,
        name: &FQName,
        args: &[Pattern<A>],
    ) -> (S, VisitAction) {
        (state, VisitAction::Continue)
    }

    fn exit_constructor(&mut self, state: S, attrs: &A, name: &FQName, args: &[Pattern<A>]) -> S {
        state
    }

    fn enter_empty_list(&mut self, state: S, attrs: &A) -> (S, VisitAction) {
        (state, VisitAction::Continue)
    }

    fn exit_empty_list(&mut self, state: S, attrs: &A) -> S {
        state
    }

    fn enter_head_tail(
        &mut self,
        state: S,
        attrs: &A,
        head: &Pattern<A>,
        tail: &Pattern<A>,
    ) -> (S, VisitAction) {
        (state, VisitAction::Continue)
    }

    fn exit_head_tail(&mut self, state: S, attrs: &A, head: &Pattern<A>, tail: &Pattern<A>) -> S {
        state
    }

    fn enter_literal(&mut self, state: S, attrs: &A, literal: &Literal) -> (S, VisitAction) {
        (state, VisitAction::Continue)
    }

    fn exit_literal(&mut self, state: S, attrs: &A, literal: &Literal) -> S {
        state
    }

    fn enter_unit(&mut self, state: S, attrs: &A) -> (S, VisitAction) {
        (state, VisitAction::Continue)
    }

    fn exit_unit(&mut self, state: S, attrs: &A) -> S {
        state
    }
}
