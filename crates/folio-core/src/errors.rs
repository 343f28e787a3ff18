//! Cross-cutting error types for Folio.
//!
//! Domain-specific errors (e.g., `ContentLoadError`, `QueryError`) are defined
//! in their respective crates. `anyhow` is only used where all crate errors
//! converge in `folio-cli`.

use thiserror::Error;

/// Errors raised while parsing core value types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A string did not name any variant of a classification enum.
    #[error("Unknown {kind} value: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    /// A date string was not in any accepted format.
    #[error("Invalid date '{value}': expected YYYY, YYYY-MM, YYYY-MM-DD or RFC 3339")]
    InvalidDate { value: String },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dates::ContentDate;
    use crate::enums::ProjectType;

    #[test]
    fn parse_failures_map_to_core_errors() {
        let err = "GAME".parse::<ProjectType>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown ProjectType value: 'GAME'");

        let err = ContentDate::parse("yesterday").unwrap_err();
        assert!(matches!(err, CoreError::InvalidDate { ref value } if value == "yesterday"));
    }
}
