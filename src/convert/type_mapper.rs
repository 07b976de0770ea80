//! ECS type resolution
//!
//! Owns the fixed lookup table from ECS type name to Avro type expression
//! and applies the cardinality/optionality wrapping rules.

use crate::convert::ConvertError;
use crate::models::avro::{AvroRecordField, SCHEMA_NAMESPACE};
use crate::models::{AvroType, Cardinality};
use std::collections::HashSet;

/// Resolves a single ECS field type into an Avro type expression
///
/// Avro forbids declaring the same named type twice in one document, so
/// named composite types (currently only `GeoPoint`) are emitted inline on
/// first use and as a fully-qualified reference afterwards. The mapper
/// carries that first-use state, which is scoped to one conversion run:
/// create a fresh mapper per document.
#[derive(Debug, Default)]
pub struct TypeMapper {
    seen_composites: HashSet<&'static str>,
}

impl TypeMapper {
    /// Create a new TypeMapper with no composites seen yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve an ECS type name plus cardinality and requiredness into an
    /// Avro type expression
    ///
    /// Wrapping order: base type, then array (if the cardinality is array),
    /// then the `["null", ...]` union (if the field is not required). The
    /// union always wraps the array, never its element type.
    pub fn resolve(
        &mut self,
        source_type: &str,
        cardinality: Cardinality,
        required: bool,
    ) -> Result<AvroType, ConvertError> {
        let base = self.base_type(source_type)?;

        let wrapped = match cardinality {
            Cardinality::Array => base.array(),
            Cardinality::Single => base,
        };

        if required {
            Ok(wrapped)
        } else {
            Ok(wrapped.nullable())
        }
    }

    fn base_type(&mut self, source_type: &str) -> Result<AvroType, ConvertError> {
        let base = match source_type {
            "keyword" | "date" | "ip" | "flattened" | "nested" | "match_only_text"
            | "constant_keyword" | "wildcard" => AvroType::Primitive("string"),
            "long" => AvroType::Primitive("long"),
            "double" => AvroType::Primitive("double"),
            "float" | "scaled_float" => AvroType::Primitive("float"),
            "boolean" => AvroType::Primitive("boolean"),
            "geo_point" => self.named_composite("GeoPoint", geo_point_record),
            "object" => AvroType::Map {
                values: "string",
                default: serde_json::json!({}),
            },
            _ => {
                return Err(ConvertError::UnknownType {
                    source_type: source_type.to_string(),
                });
            }
        };
        Ok(base)
    }

    /// First occurrence gets the inline definition, every later occurrence a
    /// fully-qualified reference to it
    fn named_composite(&mut self, name: &'static str, definition: fn() -> AvroType) -> AvroType {
        if self.seen_composites.insert(name) {
            definition()
        } else {
            AvroType::Reference(format!("{}.{}", SCHEMA_NAMESPACE, name))
        }
    }
}

/// The `GeoPoint` composite: a lon/lat pair of single-precision floats
fn geo_point_record() -> AvroType {
    AvroType::Record {
        name: "GeoPoint",
        fields: vec![
            AvroRecordField {
                name: "lon",
                field_type: "float",
            },
            AvroRecordField {
                name: "lat",
                field_type: "float",
            },
        ],
    }
}
