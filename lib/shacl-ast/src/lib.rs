#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]

mod error;
mod facets;
mod model;
mod path;
pub mod reader;
pub mod vocab;

pub use error::ShaclParseError;
pub use facets::{Facets, NodeKind, QualifiedShape};
pub use model::{NodeShape, ShapeId, ShapesGraph, Target};
pub use path::PropertyPath;
