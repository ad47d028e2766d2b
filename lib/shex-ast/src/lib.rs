#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]

mod error;
mod model;

pub use error::SchemaError;
pub use model::{
    Annotation, Cardinality, NodeConstraint, NodeKind, NumericFacet, Schema, Shape, ShapeDecl,
    ShapeExpr, ShapeLabel, StringFacet, TripleConstraint, TripleExpr, ValueSetValue,
};
