//! Import functionality
//!
//! Parses the ECS flat field catalogue (`ecs_flat.yml`) into the in-memory
//! flattened schema consumed by the converter.

pub mod ecs;

/// Error during import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Parse error: {0}")]
    ParseError(String),
    /// The `normalize` key is required but possibly empty; a field without it
    /// is malformed input, not a field with default cardinality
    #[error("Field '{field}' is missing the 'normalize' key")]
    MissingNormalize { field: String },
    #[error("IO error: {0}")]
    IoError(String),
}

// Re-export for convenience
pub use ecs::EcsFlatImporter;
