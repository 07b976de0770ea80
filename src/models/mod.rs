//! Models module for the converter
//!
//! Defines the data structures on both sides of the conversion:
//! the ECS flat field catalogue (input) and the Avro schema document (output).

pub mod avro;
pub mod ecs;

pub use avro::{AvroField, AvroRecordSchema, AvroType, SCHEMA_NAME, SCHEMA_NAMESPACE};
pub use ecs::{Cardinality, FieldDefinition, FlattenedSchema};
