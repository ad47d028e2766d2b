#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]

mod context;
mod convert;
mod error;
mod logic;
mod paths;
mod prune;
mod value;

pub use context::Warning;
pub use convert::{shacl_to_shex, Conversion};
pub use error::ConversionError;

// Re-export the two sides of the translation for convenience
pub use shacl_ast;
pub use shex_ast;
