//! Property path translation.
//!
//! ShEx triple constraints can express a forward or inverse predicate and
//! nothing else, so only predicate and inverse paths translate faithfully.
//! One-or-more paths are approximated by a one-level unrolling (see
//! [`TranslatedPath::repeat`]). The remaining forms degrade to a
//! representative predicate with an annotation recording the original path,
//! or fail with an error the caller recovers from by skipping the property.

use oxrdf::{vocab::rdfs, Literal};
use shacl_ast::{vocab, PropertyPath};
use shex_ast::Annotation;

use crate::error::ConversionError;

/// A property path mapped onto what a triple constraint can carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TranslatedPath {
    /// The predicate the triple constraint matches on.
    pub(crate) predicate: oxrdf::NamedNode,
    /// Whether the constraint is inverse.
    pub(crate) inverse: bool,
    /// One-or-more path: the assembler wraps the value expression in a
    /// one-level unrolling of the repetition.
    pub(crate) repeat: bool,
    /// Annotations recording constructs that were not fully preserved.
    pub(crate) annotations: Vec<Annotation>,
}

/// Translates a SHACL property path.
pub(crate) fn translate(path: &PropertyPath) -> Result<TranslatedPath, ConversionError> {
    match path {
        PropertyPath::Predicate(p) => Ok(TranslatedPath {
            predicate: p.clone(),
            inverse: false,
            repeat: false,
            annotations: Vec::new(),
        }),

        PropertyPath::Inverse(inner) => {
            let mut translated = translate(inner)?;
            translated.inverse = !translated.inverse;
            Ok(translated)
        }

        PropertyPath::OneOrMore(inner) => {
            let mut translated = translate(inner)?;
            translated.repeat = true;
            translated.annotations.push(Annotation::new(
                rdfs::COMMENT,
                Literal::new_simple_literal(format!(
                    "one-level unrolling of the one-or-more path {path}"
                )),
            ));
            Ok(translated)
        }

        PropertyPath::ZeroOrMore(inner) | PropertyPath::ZeroOrOne(inner) => {
            let mut translated = translate(inner)?;
            translated.annotations.push(original_path(path));
            Ok(translated)
        }

        PropertyPath::Alternative(paths) | PropertyPath::Sequence(paths) => {
            // Best-effort representative: the first component that resolves
            // to a usable predicate.
            let mut translated = paths
                .iter()
                .find_map(|p| translate(p).ok())
                .ok_or_else(|| ConversionError::unsupported("property path", path.to_string()))?;
            translated.annotations.push(original_path(path));
            Ok(translated)
        }
    }
}

fn original_path(path: &PropertyPath) -> Annotation {
    Annotation::new(
        vocab::PATH,
        Literal::new_simple_literal(path.to_string()),
    )
}
