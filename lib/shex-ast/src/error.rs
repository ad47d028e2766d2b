//! Error types for schema construction.

/// Error type for building schema values.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// Cardinality with a maximum below its minimum.
    #[error("Invalid cardinality: min={min}, max={max}")]
    InvalidCardinality {
        /// Requested minimum.
        min: u32,
        /// Requested (bounded) maximum.
        max: u32,
    },
}

impl SchemaError {
    /// Creates an invalid cardinality error.
    pub fn invalid_cardinality(min: u32, max: u32) -> Self {
        Self::InvalidCardinality { min, max }
    }
}
