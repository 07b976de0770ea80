//! Export functionality
//!
//! Serializes the assembled Avro schema document and validates it before
//! anything reaches a caller or the filesystem.

pub mod avro;

/// Result of an export operation
#[derive(Debug)]
pub struct ExportResult {
    /// Exported content
    pub content: String,
    /// Format identifier
    pub format: String,
}

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Conversion error: {0}")]
    ConversionError(#[from] crate::convert::ConvertError),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("IO error: {0}")]
    IoError(String),
}

// Re-export for convenience
pub use avro::AvroExporter;
