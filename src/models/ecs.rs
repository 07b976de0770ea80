//! ECS flat field catalogue models

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Whether a field holds a single value or an array of values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    Single,
    Array,
}

/// One entry from the ECS flat field catalogue
///
/// Sourced entirely from the input document and never mutated afterwards.
///
/// # Example
///
/// ```rust
/// use ecs_avro_converter::models::{Cardinality, FieldDefinition};
///
/// let field = FieldDefinition {
///     name: "agent_name".to_string(),
///     description: "Custom name of the agent.".to_string(),
///     source_type: "keyword".to_string(),
///     cardinality: Cardinality::Single,
///     required: false,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name used in the output schema (`dashed_name` in the catalogue)
    pub name: String,
    /// Field documentation, emitted as the Avro `doc` attribute
    pub description: String,
    /// Declared ECS type name (e.g. "keyword", "geo_point")
    pub source_type: String,
    /// Single value or array of values
    pub cardinality: Cardinality,
    /// Whether the field is mandatory (default: false)
    #[serde(default)]
    pub required: bool,
}

/// The flattened field catalogue, keyed by dotted field path
///
/// Insertion order determines output field order.
pub type FlattenedSchema = IndexMap<String, FieldDefinition>;
