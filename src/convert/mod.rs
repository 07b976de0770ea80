//! Conversion core
//!
//! Maps ECS field types onto Avro type expressions and assembles the
//! top-level record schema:
//! - `TypeMapper` - per-field type resolution (lookup table + wrapping rules)
//! - `SchemaAssembler` - whole-catalogue iteration and record construction

pub mod assembler;
pub mod type_mapper;

use thiserror::Error;

/// Error during conversion
///
/// Any conversion error aborts the whole run; no partial schema document is
/// ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// A field declares an ECS type with no Avro mapping
    #[error("Unknown ECS type '{source_type}'")]
    UnknownType { source_type: String },
}

// Re-export for convenience
pub use assembler::SchemaAssembler;
pub use type_mapper::TypeMapper;
