//! Content loading error types for folio-store.

use folio_core::enums::CollectionName;
use folio_schema::SchemaError;
use thiserror::Error;

/// Errors from loading a content collection. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum ContentLoadError {
    /// The backing source does not exist.
    #[error("Content source for '{collection}' not found at {location}")]
    Missing {
        collection: CollectionName,
        location: String,
    },

    /// The backing source exists but could not be read.
    #[error("Failed to read '{collection}' from {location}: {source}")]
    Io {
        collection: CollectionName,
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// The source is not JSON, or not the JSON shape of the entity type.
    #[error("Malformed JSON in '{collection}': {source}")]
    Malformed {
        collection: CollectionName,
        #[source]
        source: serde_json::Error,
    },

    /// The source failed JSON Schema validation.
    #[error("'{collection}' failed schema validation: {}", errors.join("; "))]
    Schema {
        collection: CollectionName,
        errors: Vec<String>,
    },

    /// The source parsed but breaks a content invariant (duplicate id, bad
    /// slug, end date before start date, ...).
    #[error("Invalid '{collection}' content: {reason}")]
    Invalid {
        collection: CollectionName,
        reason: String,
    },
}

impl ContentLoadError {
    /// Collection the failure belongs to.
    #[must_use]
    pub const fn collection(&self) -> CollectionName {
        match self {
            Self::Missing { collection, .. }
            | Self::Io { collection, .. }
            | Self::Malformed { collection, .. }
            | Self::Schema { collection, .. }
            | Self::Invalid { collection, .. } => *collection,
        }
    }

    pub(crate) fn from_schema(collection: CollectionName, error: SchemaError) -> Self {
        let errors = match error {
            SchemaError::ValidationFailed { errors } => errors,
            other => vec![other.to_string()],
        };
        Self::Schema { collection, errors }
    }
}
