//! Visitor framework over type and pattern trees.

pub mod collect;
pub mod visitor;
pub mod walker;

pub use collect::{collect_references, collect_type_variables, pattern_variables};
pub use visitor::{PatternVisitor, TypeVisitor, VisitAction};
pub use walker::{walk_pattern, walk_type};
