//! Schema assembly
//!
//! Walks the flattened catalogue and builds the single top-level Avro record
//! the converter emits.

use crate::convert::{ConvertError, TypeMapper};
use crate::models::{AvroField, AvroRecordSchema, FlattenedSchema};
use tracing::info;

/// Assembles the full Avro record schema from a flattened ECS catalogue
///
/// Fields are emitted in catalogue iteration order, one per entry, with no
/// sorting, filtering, or deduplication; field-name uniqueness is assumed
/// from the input. Resolution failures propagate unchanged and abort the
/// whole conversion.
#[derive(Debug, Default)]
pub struct SchemaAssembler;

impl SchemaAssembler {
    /// Create a new SchemaAssembler
    pub fn new() -> Self {
        Self
    }

    /// Assemble the output schema document
    ///
    /// Each run uses a fresh `TypeMapper`, so the first-occurrence handling
    /// of named composites is scoped to this document.
    pub fn assemble(&self, schema: &FlattenedSchema) -> Result<AvroRecordSchema, ConvertError> {
        let mut mapper = TypeMapper::new();
        let mut fields = Vec::with_capacity(schema.len());

        for definition in schema.values() {
            let field_type = mapper.resolve(
                &definition.source_type,
                definition.cardinality,
                definition.required,
            )?;
            fields.push(AvroField {
                name: definition.name.clone(),
                doc: definition.description.clone(),
                field_type,
            });
        }

        info!("Assembled Avro schema with {} fields", fields.len());
        Ok(AvroRecordSchema::new(fields))
    }
}
