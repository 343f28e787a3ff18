//! # folio-schema
//!
//! JSON Schema generation, validation, and registry for Folio.
//!
//! This crate provides:
//! - `SchemaRegistry`: central store of all JSON Schemas in the system
//! - Validation of raw content collections before they are deserialized
//! - Schema export for external tooling (`folio schema` command)
//!
//! ## Architecture
//!
//! Entity types are defined in `folio-core` with `#[derive(JsonSchema)]`.
//! This crate imports those types and provides the registry, validation, and
//! export layer. `folio-store` validates every source file against the
//! collection schema before deserializing it.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
