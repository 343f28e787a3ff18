//! Central schema registry for all Folio types.
//!
//! The `SchemaRegistry` builds JSON Schemas from folio-core types at construction
//! time using [`schemars::schema_for!`] and provides validation via `jsonschema`.
//!
//! Collection schemas are registered under the collection's name
//! (`"projects"`, `"case_studies"`) and describe the whole file: an array of
//! records, or a single object for `"profile"`.

use std::collections::HashMap;

use schemars::schema_for;

use folio_core::entities::{CaseStudy, Design, Experience, Profile, Project, Skill, Tag};
use folio_core::enums::CollectionName;
use folio_core::responses::{CheckResponse, StatsResponse};

use crate::error::SchemaError;

/// Central store of all JSON Schemas in the Folio system.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a new registry containing every collection, entity, and response
    /// schema.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. This is not expected in practice because `schemars` always
    /// produces valid JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Collections (6), keyed by CollectionName::as_str ---
        register!(schemas, CollectionName::Profile.as_str(), Profile);
        register!(schemas, CollectionName::Experiences.as_str(), Vec<Experience>);
        register!(schemas, CollectionName::Skills.as_str(), Vec<Skill>);
        register!(schemas, CollectionName::Projects.as_str(), Vec<Project>);
        register!(schemas, CollectionName::CaseStudies.as_str(), Vec<CaseStudy>);
        register!(schemas, CollectionName::Designs.as_str(), Vec<Design>);

        // --- Single records (6) ---
        register!(schemas, "experience", Experience);
        register!(schemas, "skill", Skill);
        register!(schemas, "project", Project);
        register!(schemas, "case_study", CaseStudy);
        register!(schemas, "design", Design);
        register!(schemas, "tag", Tag);

        // --- CLI response types (2) ---
        register!(schemas, "check_response", CheckResponse);
        register!(schemas, "stats_response", StatsResponse);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// Validate the parsed contents of a collection's source file.
    ///
    /// # Errors
    ///
    /// Same as [`validate`](Self::validate).
    pub fn validate_collection(
        &self,
        collection: CollectionName,
        instance: &serde_json::Value,
    ) -> Result<(), SchemaError> {
        self.validate(collection.as_str(), instance)
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
