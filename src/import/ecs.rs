//! ECS flat field catalogue importer
//!
//! The catalogue is a YAML mapping from dotted field path to field metadata.
//! Document order is preserved; it determines the field order of the produced
//! Avro schema.

use crate::import::ImportError;
use crate::models::{Cardinality, FieldDefinition, FlattenedSchema};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Catalogue entry as it appears in `ecs_flat.yml`
///
/// Only the keys the conversion needs are modelled; the catalogue carries
/// many more, which serde skips.
#[derive(Debug, Deserialize)]
struct RawField {
    dashed_name: String,
    description: String,
    #[serde(rename = "type")]
    field_type: String,
    normalize: Option<Vec<String>>,
    #[serde(default)]
    required: bool,
}

/// Importer for the ECS flat field catalogue
#[derive(Debug, Default)]
pub struct EcsFlatImporter;

impl EcsFlatImporter {
    /// Create a new EcsFlatImporter
    pub fn new() -> Self {
        Self
    }

    /// Parse catalogue YAML content into a flattened schema
    ///
    /// Cardinality comes from the `normalize` modifier list: an "array"
    /// token selects array cardinality. The key must be present (an empty
    /// list is fine); a field without it fails the whole import.
    pub fn import(&self, content: &str) -> Result<FlattenedSchema, ImportError> {
        let raw: IndexMap<String, RawField> = serde_yaml::from_str(content).map_err(|e| {
            ImportError::ParseError(format!("Failed to parse ECS flat YAML: {}", e))
        })?;

        let mut schema = FlattenedSchema::with_capacity(raw.len());
        for (key, field) in raw {
            let normalize = field
                .normalize
                .ok_or_else(|| ImportError::MissingNormalize { field: key.clone() })?;
            let cardinality = if normalize.iter().any(|token| token == "array") {
                Cardinality::Array
            } else {
                Cardinality::Single
            };

            schema.insert(
                key,
                FieldDefinition {
                    name: field.dashed_name,
                    description: field.description,
                    source_type: field.field_type,
                    cardinality,
                    required: field.required,
                },
            );
        }

        info!("Imported {} fields from ECS flat catalogue", schema.len());
        Ok(schema)
    }

    /// Load and parse a catalogue file from disk
    pub fn import_file(&self, path: &Path) -> Result<FlattenedSchema, ImportError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ImportError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        self.import(&content)
    }
}
