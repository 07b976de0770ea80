//! Avro exporter
//!
//! Runs the conversion core over an imported catalogue and emits the
//! pretty-printed `.avsc` document. Validation happens here, before the
//! content is returned: a document the Avro parser rejects never reaches a
//! caller, and `export_to_file` touches the filesystem only after validation
//! has passed.

use crate::convert::SchemaAssembler;
use crate::export::{ExportError, ExportResult};
use crate::models::FlattenedSchema;
use crate::validation::validate_avro_internal;
use std::path::Path;
use tracing::info;

/// Exporter for the Avro `.avsc` schema format
#[derive(Debug, Default)]
pub struct AvroExporter;

impl AvroExporter {
    /// Create a new AvroExporter
    pub fn new() -> Self {
        Self
    }

    /// Convert a flattened catalogue into validated `.avsc` content
    ///
    /// # Example
    ///
    /// ```rust
    /// use ecs_avro_converter::export::avro::AvroExporter;
    /// use ecs_avro_converter::import::ecs::EcsFlatImporter;
    ///
    /// let yaml = r#"
    /// agent.name:
    ///   dashed_name: agent_name
    ///   description: Custom name of the agent.
    ///   type: keyword
    ///   normalize: []
    /// "#;
    /// let schema = EcsFlatImporter::new().import(yaml).unwrap();
    /// let result = AvroExporter::new().export(&schema).unwrap();
    /// assert_eq!(result.format, "avro");
    /// ```
    pub fn export(&self, schema: &FlattenedSchema) -> Result<ExportResult, ExportError> {
        let document = SchemaAssembler::new().assemble(schema)?;

        let content = serde_json::to_string_pretty(&document).map_err(|e| {
            ExportError::SerializationError(format!("Failed to serialize AVRO schema: {}", e))
        })?;

        validate_avro_internal(&content).map_err(ExportError::ValidationError)?;

        Ok(ExportResult {
            content,
            format: "avro".to_string(),
        })
    }

    /// Export and write the `.avsc` document to disk
    ///
    /// The output file is only created once the content has passed
    /// validation, so a failed conversion never leaves a partial artifact.
    pub fn export_to_file(
        &self,
        schema: &FlattenedSchema,
        path: &Path,
    ) -> Result<(), ExportError> {
        let result = self.export(schema)?;
        std::fs::write(path, &result.content).map_err(|e| {
            ExportError::IoError(format!("Failed to write {}: {}", path.display(), e))
        })?;
        info!("Wrote AVRO schema to {}", path.display());
        Ok(())
    }
}
