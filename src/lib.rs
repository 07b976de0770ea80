//! ECS to Avro converter
//!
//! Converts the Elastic Common Schema (ECS) flat field catalogue into an
//! Apache Avro schema:
//! - Import: parse the `ecs_flat.yml` field catalogue
//! - Convert: map ECS field types onto Avro type expressions
//! - Export: emit the `.avsc` document, validated against the Avro parser
//!
//! The produced schema is a single record named `ElasticCommonSchemaRecord`
//! in the `io.github.cloventt.ecs` namespace, with one field per catalogue
//! entry, in catalogue order.

pub mod convert;
pub mod export;
pub mod import;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use convert::{ConvertError, SchemaAssembler, TypeMapper};
pub use export::{AvroExporter, ExportError, ExportResult};
pub use import::{EcsFlatImporter, ImportError};

// Re-export models
pub use models::{
    AvroField, AvroRecordSchema, AvroType, Cardinality, FieldDefinition, FlattenedSchema,
};

pub use validation::validate_avro_internal;
