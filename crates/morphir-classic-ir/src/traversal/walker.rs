use std::ops::ControlFlow;

use super::visitor::{PatternVisitor, TypeVisitor, VisitAction};
use crate::ir::{Pattern, Type};

/// Walk a type tree depth first.
///
/// Children are visited in declaration order: reference arguments, tuple
/// elements, record fields, then function argument before result. Returns
/// the final state and `false` if a hook asked to stop.
pub fn walk_type<A, S, V>(tpe: &Type<A>, visitor: &mut V, state: S) -> (S, bool)
where
    V: TypeVisitor<A, S> + ?Sized,
{
    match visit_type(visitor, state, tpe) {
        ControlFlow::Continue(state) => (state, true),
        ControlFlow::Break(state) => (state, false),
    }
}

/// Walk a pattern tree depth first.
///
/// As patterns visit their subject, head-tail patterns the head before the
/// tail, tuples and constructors their elements in order.
pub fn walk_pattern<A, S, V>(pattern: &Pattern<A>, visitor: &mut V, state: S) -> (S, bool)
where
    V: PatternVisitor<A, S> + ?Sized,
{
    match visit_pattern(visitor, state, pattern) {
        ControlFlow::Continue(state) => (state, true),
        ControlFlow::Break(state) => (state, false),
    }
}

/// `Continue((state, descend))` unless the hook asked to stop.
fn enter<S>((state, action): (S, VisitAction)) -> ControlFlow<S, (S, bool)> {
    match action {
        VisitAction::Continue => ControlFlow::Continue((state, true)),
        VisitAction::SkipChildren => ControlFlow::Continue((state, false)),
        VisitAction::Stop => ControlFlow::Break(state),
    }
}

fn visit_type<A, S, V>(visitor: &mut V, state: S, tpe: &Type<A>) -> ControlFlow<S, S>
where
    V: TypeVisitor<A, S> + ?Sized,
{
    let (state, descend) = enter(visitor.enter_type(state, tpe))?;
    if !descend {
        return ControlFlow::Continue(state);
    }

    let state = match tpe {
        Type::Variable(a, name) => {
            let (state, descend) = enter(visitor.enter_variable(state, a, name))?;
            if descend {
                visitor.exit_variable(state, a, name)
            } else {
                state
            }
        }
        Type::Reference(a, name, args) => {
            let (mut state, descend) = enter(visitor.enter_reference(state, a, name, args))?;
            if descend {
                for arg in args {
                    state = visit_type(visitor, state, arg)?;
                }
                state = visitor.exit_reference(state, a, name, args);
            }
            state
        }
        Type::Tuple(a, elements) => {
            let (mut state, descend) = enter(visitor.enter_tuple(state, a, elements))?;
            if descend {
                for element in elements {
                    state = visit_type(visitor, state, element)?;
                }
                state = visitor.exit_tuple(state, a, elements);
            }
            state
        }
        Type::Record(a, fields) => {
            let (mut state, descend) = enter(visitor.enter_record(state, a, fields))?;
            if descend {
                for field in fields {
                    state = visit_type(visitor, state, &field.tpe)?;
                }
                state = visitor.exit_record(state, a, fields);
            }
            state
        }
        Type::ExtensibleRecord(a, variable, fields) => {
            let (mut state, descend) =
                enter(visitor.enter_extensible_record(state, a, variable, fields))?;
            if descend {
                for field in fields {
                    state = visit_type(visitor, state, &field.tpe)?;
                }
                state = visitor.exit_extensible_record(state, a, variable, fields);
            }
            state
        }
        Type::Function(a, argument, result) => {
            let (mut state, descend) = enter(visitor.enter_function(state, a, argument, result))?;
            if descend {
                state = visit_type(visitor, state, argument)?;
                state = visit_type(visitor, state, result)?;
                state = visitor.exit_function(state, a, argument, result);
            }
            state
        }
        Type::Unit(a) => {
            let (state, descend) = enter(visitor.enter_unit(state, a))?;
            if descend {
                visitor.exit_unit(state, a)
            } else {
                state
            }
        }
    };

    ControlFlow::Continue(visitor.exit_type(state, tpe))
}

fn visit_pattern<A, S, V>(visitor: &mut V, state: S, pattern: &Pattern<A>) -> ControlFlow<S, S>
where
    V: PatternVisitor<A, S> + ?Sized,
{
    let (state, descend) = enter(visitor.enter_pattern(state, pattern))?;
    if !descend {
        return ControlFlow::Continue(state);
    }

    let state = match pattern {
        Pattern::Wildcard(a) => {
            let (state, descend) = enter(visitor.enter_wildcard(state, a))?;
            if descend {
                visitor.exit_wildcard(state, a)
            } else {
                state
            }
        }
        Pattern::As(a, subject, name) => {
            let (mut state, descend) = enter(visitor.enter_as(state, a, subject, name))?;
            if descend {
                state = visit_pattern(visitor, state, subject)?;
                state = visitor.exit_as(state, a, subject, name);
            }
            state
        }
        Pattern::Tuple(a, elements) => {
            let (mut state, descend) = enter(visitor.enter_tuple(state, a, elements))?;
            if descend {
                for element in elements {
                    state = visit_pattern(visitor, state, element)?;
                }
                state = visitor.exit_tuple(state, a, elements);
            }
            state
        }
        Pattern::Constructor(a, name, args) => {
            let (mut state, descend) = enter(visitor.enter_constructor(state, a, name, args))?;
            if descend {
                for arg in args {
                    state = visit_pattern(visitor, state, arg)?;
                }
                state = visitor.exit_constructor(state, a, name, args);
            }
            state
        }
        Pattern::EmptyList(a) => {
            let (state, descend) = enter(visitor.enter_empty_list(state, a))?;
            if descend {
                visitor.exit_empty_list(state, a)
            } else {
                state
            }
        }
        Pattern::HeadTail(a, head, tail) => {
            let (mut state, descend) = enter(visitor.enter_head_tail(state, a, head, tail))?;
            if descend {
                state = visit_pattern(visitor, state, head)?;
                state = visit_pattern(visitor, state, tail)?;
                state = visitor.exit_head_tail(state, a, head, tail);
            }
            state
        }
        Pattern::Literal(a, literal) => {
            let (state, descend) = enter(visitor.enter_literal(state, a, literal))?;
            if descend {
                visitor.exit_literal(state, a, literal)
            } else {
                state
            }
        }
        Pattern::Unit(a) => {
            let (state, descend) = enter(visitor.enter_unit(state, a))?;
            if descend {
                visitor.exit_unit(state, a)
            } else {
                state
            }
        }
    };

    ControlFlow::Continue(visitor.exit_pattern(state, pattern))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Field;
    use crate::naming::{FQName, Name};

    /// Records enter/exit events as strings.
    struct Trace {
        stop_at: Option<&'static str>,
        skip_at: Option<&'static str>,
    }

    impl Trace {
        fn action(&self, label: &str) -> VisitAction {
            if self.stop_at == Some(label) {
                VisitAction::Stop
            } else if self.skip_at == Some(label) {
                VisitAction::SkipChildren
            } else {
                VisitAction::Continue
            }
        }
    }

    impl TypeVisitor<(), Vec<String>> for Trace {
        fn enter_variable(
            &mut self,
            mut state: Vec<String>,
            _: &(),
            name: &Name,
        ) -> (Vec<String>, VisitAction) {
            let label = name.to_camel_case();
            state.push(format!("enter {label}"));
            let action = self.action(&label);
            (state, action)
        }

        fn exit_variable(&mut self, mut state: Vec<String>, _: &(), name: &Name) -> Vec<String> {
            state.push(format!("exit {}", name.to_camel_case()));
            state
        }

        fn enter_function(
            &mut self,
            mut state: Vec<String>,
            _: &(),
            _: &Type<()>,
            _: &Type<()>,
        ) -> (Vec<String>, VisitAction) {
            state.push("enter fn".into());
            let action = self.action("fn");
            (state, action)
        }

        fn exit_function(
            &mut self,
            mut state: Vec<String>,
            _: &(),
            _: &Type<()>,
            _: &Type<()>,
        ) -> Vec<String> {
            state.push("exit fn".into());
            state
        }

        fn enter_tuple(
            &mut self,
            mut state: Vec<String>,
            _: &(),
            _: &[Type<()>],
        ) -> (Vec<String>, VisitAction) {
            state.push("enter tuple".into());
            let action = self.action("tuple");
            (state, action)
        }

        fn exit_tuple(&mut self, mut state: Vec<String>, _: &(), _: &[Type<()>]) -> Vec<String> {
            state.push("exit tuple".into());
            state
        }
    }

    fn var(name: &str) -> Type<()> {
        Type::Variable((), Name::parse(name))
    }

    // (a -> (b, c)) -> d
    fn sample() -> Type<()> {
        Type::function(
            (),
            Type::function((), var("a"), Type::Tuple((), vec![var("b"), var("c")])),
            var("d"),
        )
    }

    fn walk(stop_at: Option<&'static str>, skip_at: Option<&'static str>) -> (Vec<String>, bool) {
        walk_type(&sample(), &mut Trace { stop_at, skip_at }, Vec::new())
    }

    #[test]
    fn test_continue_visits_in_pre_and_post_order() {
        let (events, completed) = walk(None, None);
        assert!(completed);
        assert_eq!(
            events,
            [
                "enter fn", "enter fn", "enter a", "exit a", "enter tuple", "enter b", "exit b",
                "enter c", "exit c", "exit tuple", "exit fn", "enter d", "exit d", "exit fn"
            ]
        );
    }

    #[test]
    fn test_stop_aborts_without_pending_exits() {
        let (events, completed) = walk(Some("b"), None);
        assert!(!completed);
        assert_eq!(events, ["enter fn", "enter fn", "enter a", "exit a", "enter tuple", "enter b"]);
    }

    #[test]
    fn test_skip_children_keeps_siblings() {
        let (events, completed) = walk(None, Some("tuple"));
        assert!(completed);
        assert_eq!(
            events,
            ["enter fn", "enter fn", "enter a", "exit a", "enter tuple", "exit fn", "enter d", "exit d", "exit fn"]
        );
    }

    struct Generic {
        skip_generic: bool,
    }

    impl TypeVisitor<(), Vec<&'static str>> for Generic {
        fn enter_type(
            &mut self,
            mut state: Vec<&'static str>,
            _: &Type<()>,
        ) -> (Vec<&'static str>, VisitAction) {
            state.push("enter type");
            let action = if self.skip_generic {
                VisitAction::SkipChildren
            } else {
                VisitAction::Continue
            };
            (state, action)
        }

        fn exit_type(&mut self, mut state: Vec<&'static str>, _: &Type<()>) -> Vec<&'static str> {
            state.push("exit type");
            state
        }

        fn enter_record(
            &mut self,
            mut state: Vec<&'static str>,
            _: &(),
            _: &[Field<()>],
        ) -> (Vec<&'static str>, VisitAction) {
            state.push("enter record");
            (state, VisitAction::SkipChildren)
        }

        fn exit_record(&mut self, mut state: Vec<&'static str>, _: &(), _: &[Field<()>]) -> Vec<&'static str> {
            state.push("exit record");
            state
        }
    }

    #[test]
    fn test_generic_hooks_wrap_specific_hooks() {
        let record = Type::Record((), vec![Field::new(Name::parse("x"), Type::Unit(()))]);

        let (events, completed) = walk_type(&record, &mut Generic { skip_generic: false }, vec![]);
        assert!(completed);
        assert_eq!(events, ["enter type", "enter record", "exit type"]);

        let (events, completed) = walk_type(&record, &mut Generic { skip_generic: true }, vec![]);
        assert!(completed);
        assert_eq!(events, ["enter type"]);
    }

    struct CountPatterns {
        stop_after: usize,
    }

    impl PatternVisitor<(), usize> for CountPatterns {
        fn enter_pattern(&mut self, count: usize, _: &Pattern<()>) -> (usize, VisitAction) {
            let count = count + 1;
            if count == self.stop_after {
                (count, VisitAction::Stop)
            } else {
                (count, VisitAction::Continue)
            }
        }
    }

    #[test]
    fn test_pattern_stop_at_kth_node() {
        // Just (x :: rest)
        let pattern = Pattern::Constructor(
            (),
            FQName::parse("Morphir.SDK:Maybe:just").unwrap(),
            vec![Pattern::head_tail(
                (),
                Pattern::as_pattern((), Pattern::Wildcard(()), Name::parse("x")),
                Pattern::as_pattern((), Pattern::Wildcard(()), Name::parse("rest")),
            )],
        );

        assert_eq!(walk_pattern(&pattern, &mut CountPatterns { stop_after: 100 }, 0), (6, true));
        assert_eq!(walk_pattern(&pattern, &mut CountPatterns { stop_after: 3 }, 0), (3, false));
    }
}
