//! Avro schema validation helpers
//!
//! The acceptance contract for the converter's output: the produced document
//! must parse under the Avro format's own parser before it is handed to a
//! caller or written to disk.

use apache_avro::Schema;

/// Validate AVRO schema content against the AVRO specification
///
/// Returns a string error for use by both CLI and export modules.
pub fn validate_avro_internal(content: &str) -> Result<(), String> {
    // Parse as JSON first for a clearer error on malformed documents
    let _value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| format!("Failed to parse AVRO JSON: {}", e))?;

    Schema::parse_str(content).map_err(|e| format!("Invalid AVRO schema: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_minimal_record() {
        let schema = r#"
        {
            "type": "record",
            "name": "Minimal",
            "fields": [{ "name": "id", "type": "long" }]
        }
        "#;
        assert!(validate_avro_internal(schema).is_ok());
    }

    #[test]
    fn test_rejects_non_json() {
        let err = validate_avro_internal("not json at all").unwrap_err();
        assert!(err.contains("Failed to parse AVRO JSON"));
    }

    #[test]
    fn test_rejects_duplicate_named_type() {
        // Declaring the same named record twice is the exact failure mode the
        // type mapper's reference rewriting exists to avoid
        let schema = r#"
        {
            "type": "record",
            "name": "Outer",
            "fields": [
                { "name": "a", "type": { "type": "record", "name": "P",
                    "fields": [{ "name": "x", "type": "float" }] } },
                { "name": "b", "type": { "type": "record", "name": "P",
                    "fields": [{ "name": "x", "type": "float" }] } }
            ]
        }
        "#;
        assert!(validate_avro_internal(schema).is_err());
    }
}
