//! Error types for reading shapes graphs.

use oxrdf::Term;

/// Error type for reading SHACL shapes from RDF graphs.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ShaclParseError {
    /// Invalid shape definition.
    #[error("Invalid shape definition for {shape}: {message}")]
    InvalidShape {
        /// The offending shape term.
        shape: Box<Term>,
        /// What was wrong with it.
        message: String,
    },

    /// Invalid property path.
    #[error("Invalid property path in shape {shape}: {message}")]
    InvalidPropertyPath {
        /// The offending path term.
        shape: Box<Term>,
        /// What was wrong with it.
        message: String,
    },

    /// Invalid RDF list.
    #[error("Invalid RDF list in shape {shape}: {message}")]
    InvalidRdfList {
        /// The shape the list belongs to.
        shape: Box<Term>,
        /// What was wrong with it.
        message: String,
    },

    /// Circular RDF list detected.
    #[error("Circular RDF list detected at node {node}")]
    CircularList {
        /// The list node where the cycle closed.
        node: Box<Term>,
    },
}

impl ShaclParseError {
    /// Creates an invalid shape error.
    pub fn invalid_shape(shape: impl Into<Term>, message: impl Into<String>) -> Self {
        Self::InvalidShape {
            shape: Box::new(shape.into()),
            message: message.into(),
        }
    }

    /// Creates an invalid property path error.
    pub fn invalid_property_path(shape: impl Into<Term>, message: impl Into<String>) -> Self {
        Self::InvalidPropertyPath {
            shape: Box::new(shape.into()),
            message: message.into(),
        }
    }

    /// Creates an invalid RDF list error.
    pub fn invalid_rdf_list(shape: impl Into<Term>, message: impl Into<String>) -> Self {
        Self::InvalidRdfList {
            shape: Box::new(shape.into()),
            message: message.into(),
        }
    }

    /// Creates a circular list error.
    pub fn circular_list(node: impl Into<Term>) -> Self {
        Self::CircularList {
            node: Box::new(node.into()),
        }
    }
}
