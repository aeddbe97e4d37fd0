//! Value expressions, value signatures and value definitions.
//!
//! `TA` is the attribute carried by types inside values, `VA` the attribute
//! carried by value and pattern nodes.

use super::literal::Literal;
use super::pattern::Pattern;
use super::types::{Type, all_equal};
use crate::naming::{FQName, Name};

#[derive(Debug, Clone, PartialEq)]
pub enum Value<TA, VA> {
    Literal(VA, Literal),
    Constructor(VA, FQName),
    Tuple(VA, Vec<Value<TA, VA>>),
    List(VA, Vec<Value<TA, VA>>),
    Record(VA, Vec<(Name, Value<TA, VA>)>),
    Variable(VA, Name),
    Reference(VA, FQName),
    Field(VA, Box<Value<TA, VA>>, Name),
    FieldFunction(VA, Name),
    Apply(VA, Box<Value<TA, VA>>, Box<Value<TA, VA>>),
    Lambda(VA, Pattern<VA>, Box<Value<TA, VA>>),
    LetDefinition(VA, Name, Box<ValueDefinition<TA, VA>>, Box<Value<TA, VA>>),
    LetRecursion(VA, Vec<(Name, ValueDefinition<TA, VA>)>, Box<Value<TA, VA>>),
    Destructure(VA, Pattern<VA>, Box<Value<TA, VA>>, Box<Value<TA, VA>>),
    IfThenElse(
        VA,
        Box<Value<TA, VA>>,
        Box<Value<TA, VA>>,
        Box<Value<TA, VA>>,
    ),
    PatternMatch(VA, Box<Value<TA, VA>>, Vec<(Pattern<VA>, Value<TA, VA>)>),
    UpdateRecord(VA, Box<Value<TA, VA>>, Vec<(Name, Value<TA, VA>)>),
    Unit(VA),
}

/// The externally visible signature of a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSpecification<TA> {
    pub inputs: Vec<(Name, Type<TA>)>,
    pub output: Type<TA>,
}

/// A value implementation: typed inputs, output type and body.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueDefinition<TA, VA> {
    pub input_types: Vec<(Name, VA, Type<TA>)>,
    pub output_type: Type<TA>,
    pub body: Value<TA, VA>,
}

impl<TA> ValueSpecification<TA> {
    pub fn new(inputs: Vec<(Name, Type<TA>)>, output: Type<TA>) -> Self {
        Self { inputs, output }
    }

    pub fn equal_with(&self, other: &ValueSpecification<TA>, ta_eq: &impl Fn(&TA, &TA) -> bool) -> bool {
        all_equal(&self.inputs, &other.inputs, |(ln, lt), (rn, rt)| {
            ln == rn && lt.equal_with(rt, ta_eq)
        }) && self.output.equal_with(&other.output, ta_eq)
    }
}

impl<TA, VA> ValueDefinition<TA, VA> {
    pub fn new(
        input_types: Vec<(Name, VA, Type<TA>)>,
        output_type: Type<TA>,
        body: Value<TA, VA>,
    ) -> Self {
        Self {
            input_types,
            output_type,
            body,
        }
    }

    pub fn equal_with(
        &self,
        other: &ValueDefinition<TA, VA>,
        ta_eq: &impl Fn(&TA, &TA) -> bool,
        va_eq: &impl Fn(&VA, &VA) -> bool,
    ) -> bool {
        all_equal(&self.input_types, &other.input_types, |(ln, la, lt), (rn, ra, rt)| {
            ln == rn && va_eq(la, ra) && lt.equal_with(rt, ta_eq)
        }) && self.output_type.equal_with(&other.output_type, ta_eq)
            && self.body.equal_with(&other.body, ta_eq, va_eq)
    }
}

impl<TA: Clone, VA> ValueDefinition<TA, VA> {
    /// The signature of this definition, dropping value attributes.
    pub fn to_specification(&self) -> ValueSpecification<TA> {
        ValueSpecification::new(
            self.input_types
                .iter()
                .map(|(name, _, tpe)| (name.clone(), tpe.clone()))
                .collect(),
            self.output_type.clone(),
        )
    }
}

impl<TA, VA> Value<TA, VA> {
    pub fn apply(attrs: VA, function: Value<TA, VA>, argument: Value<TA, VA>) -> Self {
        Value::Apply(attrs, Box::new(function), Box::new(argument))
    }

    pub fn attributes(&self) -> &VA {
        match self {
            Value::Literal(a, _)
            | Value::Constructor(a, _)
            | Value::Tuple(a, _)
            | Value::List(a, _)
            | Value::Record(a, _)
            | Value::Variable(a, _)
            | Value::Reference(a, _)
            | Value::Field(a, _, _)
            | Value::FieldFunction(a, _)
            | Value::Apply(a, _, _)
            | Value::Lambda(a, _, _)
            | Value::LetDefinition(a, _, _, _)
            | Value::LetRecursion(a, _, _)
            | Value::Destructure(a, _, _, _)
            | Value::IfThenElse(a, _, _, _)
            | Value::PatternMatch(a, _, _)
            | Value::UpdateRecord(a, _, _)
            | Value::Unit(a) => a,
        }
    }

    /// The v2/v3 wire tag of this variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Literal(..) => "Literal",
            Value::Constructor(..) => "Constructor",
            Value::Tuple(..) => "Tuple",
            Value::List(..) => "List",
            Value::Record(..) => "Record",
            Value::Variable(..) => "Variable",
            Value::Reference(..) => "Reference",
            Value::Field(..) => "Field",
            Value::FieldFunction(..) => "FieldFunction",
            Value::Apply(..) => "Apply",
            Value::Lambda(..) => "Lambda",
            Value::LetDefinition(..) => "LetDefinition",
            Value::LetRecursion(..) => "LetRecursion",
            Value::Destructure(..) => "Destructure",
            Value::IfThenElse(..) => "IfThenElse",
            Value::PatternMatch(..) => "PatternMatch",
            Value::UpdateRecord(..) => "UpdateRecord",
            Value::Unit(..) => "Unit",
        }
    }

    pub fn equal_with(
        &self,
        other: &Value<TA, VA>,
        ta_eq: &impl Fn(&TA, &TA) -> bool,
        va_eq: &impl Fn(&VA, &VA) -> bool,
    ) -> bool {
        if !va_eq(self.attributes(), other.attributes()) {
            return false;
        }
        let values = |l: &[Value<TA, VA>], r: &[Value<TA, VA>]| {
            all_equal(l, r, |l, r| l.equal_with(r, ta_eq, va_eq))
        };
        let named = |l: &[(Name, Value<TA, VA>)], r: &[(Name, Value<TA, VA>)]| {
            all_equal(l, r, |(ln, lv), (rn, rv)| {
                ln == rn && lv.equal_with(rv, ta_eq, va_eq)
            })
        };
        match (self, other) {
            (Value::Literal(_, l), Value::Literal(_, r)) => l == r,
            (Value::Constructor(_, l), Value::Constructor(_, r))
            | (Value::Reference(_, l), Value::Reference(_, r)) => l == r,
            (Value::Tuple(_, l), Value::Tuple(_, r)) | (Value::List(_, l), Value::List(_, r)) => {
                values(l, r)
            }
            (Value::Record(_, l), Value::Record(_, r)) => named(l, r),
            (Value::Variable(_, l), Value::Variable(_, r))
            | (Value::FieldFunction(_, l), Value::FieldFunction(_, r)) => l == r,
            (Value::Field(_, ls, ln), Value::Field(_, rs, rn)) => {
                ln == rn && ls.equal_with(rs, ta_eq, va_eq)
            }
            (Value::Apply(_, lf, la), Value::Apply(_, rf, ra)) => {
                lf.equal_with(rf, ta_eq, va_eq) && la.equal_with(ra, ta_eq, va_eq)
            }
            (Value::Lambda(_, lp, lb), Value::Lambda(_, rp, rb)) => {
                lp.equal_with(rp, va_eq) && lb.equal_with(rb, ta_eq, va_eq)
            }
            (Value::LetDefinition(_, ln, ld, li), Value::LetDefinition(_, rn, rd, ri)) => {
                ln == rn && ld.equal_with(rd, ta_eq, va_eq) && li.equal_with(ri, ta_eq, va_eq)
            }
            (Value::LetRecursion(_, ld, li), Value::LetRecursion(_, rd, ri)) => {
                all_equal(ld, rd, |(ln, l), (rn, r)| {
                    ln == rn && l.equal_with(r, ta_eq, va_eq)
                }) && li.equal_with(ri, ta_eq, va_eq)
            }
            (Value::Destructure(_, lp, lv, li), Value::Destructure(_, rp, rv, ri)) => {
                lp.equal_with(rp, va_eq)
                    && lv.equal_with(rv, ta_eq, va_eq)
                    && li.equal_with(ri, ta_eq, va_eq)
            }
            (Value::IfThenElse(_, lc, lt, le), Value::IfThenElse(_, rc, rt, re)) => {
                lc.equal_with(rc, ta_eq, va_eq)
                    && lt.equal_with(rt, ta_eq, va_eq)
                    && le.equal_with(re, ta_eq, va_eq)
            }
            (Value::PatternMatch(_, ls, lc), Value::PatternMatch(_, rs, rc)) => {
                ls.equal_with(rs, ta_eq, va_eq)
                    && all_equal(lc, rc, |(lp, lb), (rp, rb)| {
                        lp.equal_with(rp, va_eq) && lb.equal_with(rb, ta_eq, va_eq)
                    })
            }
            (Value::UpdateRecord(_, ls, lf), Value::UpdateRecord(_, rs, rf)) => {
                ls.equal_with(rs, ta_eq, va_eq) && named(lf, rf)
            }
            (Value::Unit(_), Value::Unit(_)) => true,
            _ => false,
        }
    }
}
