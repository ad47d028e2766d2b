//! Error types for schema conversion.

use shacl_ast::ShaclParseError;

/// Main error type for SHACL to ShEx conversion.
///
/// Only [`ConversionError::InvalidInput`] ever reaches the caller of
/// [`shacl_to_shex`](crate::shacl_to_shex): unsupported constructs are
/// recovered per property or shape and reported through the warning list.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConversionError {
    /// The input is not a usable shapes graph; the whole conversion fails.
    #[error(transparent)]
    InvalidInput(#[from] ShaclParseError),

    /// A SHACL construct has no ShEx representation.
    #[error("Unsupported SHACL construct ({construct}): {detail}")]
    Unsupported {
        /// Kind of construct, e.g. `"property path"`.
        construct: &'static str,
        /// The construct that could not be represented.
        detail: String,
    },

    /// Internal inconsistency during conversion.
    #[error("Conversion failure: {detail}")]
    Failure {
        /// What went wrong.
        detail: String,
    },
}

impl ConversionError {
    /// Creates an unsupported construct error.
    pub fn unsupported(construct: &'static str, detail: impl Into<String>) -> Self {
        Self::Unsupported {
            construct,
            detail: detail.into(),
        }
    }

    /// Creates an internal failure error.
    pub fn failure(detail: impl Into<String>) -> Self {
        Self::Failure {
            detail: detail.into(),
        }
    }
}
