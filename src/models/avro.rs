//! Avro schema models
//!
//! A tagged representation of the Avro type expressions the converter can
//! produce. Serializing any of these yields the exact JSON shape the Avro
//! specification expects for that expression, so the whole document can be
//! emitted with `serde_json`.

use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::Serialize;

/// Name of the top-level record in the produced schema
pub const SCHEMA_NAME: &str = "ElasticCommonSchemaRecord";

/// Namespace of the produced schema
pub const SCHEMA_NAMESPACE: &str = "io.github.cloventt.ecs";

/// An Avro type expression
#[derive(Debug, Clone, PartialEq)]
pub enum AvroType {
    /// A primitive type name ("string", "long", "double", "float", "boolean")
    Primitive(&'static str),
    /// An inline named record definition
    Record {
        name: &'static str,
        fields: Vec<AvroRecordField>,
    },
    /// A string-keyed map with a declared default value
    Map {
        values: &'static str,
        default: serde_json::Value,
    },
    /// A fully-qualified reference to a previously defined named type
    Reference(String),
    /// An array of the inner type
    Array(Box<AvroType>),
    /// A union of "null" and the inner type
    Nullable(Box<AvroType>),
}

impl AvroType {
    /// Wrap this type in an array-of expression
    pub fn array(self) -> AvroType {
        AvroType::Array(Box::new(self))
    }

    /// Wrap this type in a `["null", ...]` union
    pub fn nullable(self) -> AvroType {
        AvroType::Nullable(Box::new(self))
    }
}

impl Serialize for AvroType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AvroType::Primitive(name) => serializer.serialize_str(name),
            AvroType::Reference(name) => serializer.serialize_str(name),
            AvroType::Record { name, fields } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "record")?;
                map.serialize_entry("name", name)?;
                map.serialize_entry("fields", fields)?;
                map.end()
            }
            AvroType::Map { values, default } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "map")?;
                map.serialize_entry("values", values)?;
                map.serialize_entry("default", default)?;
                map.end()
            }
            AvroType::Array(items) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "array")?;
                map.serialize_entry("items", items)?;
                map.end()
            }
            AvroType::Nullable(inner) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element("null")?;
                seq.serialize_element(inner)?;
                seq.end()
            }
        }
    }
}

/// A sub-field of an inline record definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvroRecordField {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub field_type: &'static str,
}

/// One field of the produced top-level record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvroField {
    /// Field name (from the catalogue's `dashed_name`)
    pub name: String,
    /// Field documentation (from the catalogue's `description`)
    pub doc: String,
    /// Resolved Avro type expression
    #[serde(rename = "type")]
    pub field_type: AvroType,
}

/// The produced top-level Avro record schema
///
/// Serializes as
/// `{"type": "record", "name": ..., "namespace": ..., "fields": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvroRecordSchema {
    #[serde(rename = "type")]
    pub schema_type: &'static str,
    pub name: &'static str,
    pub namespace: &'static str,
    pub fields: Vec<AvroField>,
}

impl AvroRecordSchema {
    /// Create a schema document with the fixed record name and namespace
    pub fn new(fields: Vec<AvroField>) -> Self {
        Self {
            schema_type: "record",
            name: SCHEMA_NAME,
            namespace: SCHEMA_NAMESPACE,
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_primitive_serializes_as_bare_string() {
        let value = serde_json::to_value(AvroType::Primitive("string")).unwrap();
        assert_eq!(value, json!("string"));
    }

    #[test]
    fn test_nullable_array_shape() {
        let value =
            serde_json::to_value(AvroType::Primitive("long").array().nullable()).unwrap();
        assert_eq!(value, json!(["null", {"type": "array", "items": "long"}]));
    }

    #[test]
    fn test_map_carries_default() {
        let value = serde_json::to_value(AvroType::Map {
            values: "string",
            default: json!({}),
        })
        .unwrap();
        assert_eq!(
            value,
            json!({"type": "map", "values": "string", "default": {}})
        );
    }

    #[test]
    fn test_record_schema_header() {
        let value = serde_json::to_value(AvroRecordSchema::new(Vec::new())).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "record",
                "name": "ElasticCommonSchemaRecord",
                "namespace": "io.github.cloventt.ecs",
                "fields": []
            })
        );
    }
}
