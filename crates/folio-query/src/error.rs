//! Query error types for folio-query.
//!
//! Every variant becomes one entry of a response's `errors` list. Messages
//! follow GraphQL conventions so existing clients can show them unchanged.

/// Errors from parsing or executing a query document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The document is not valid query syntax, or uses unsupported syntax.
    #[error("Syntax Error: {message} ({line}:{column})")]
    Syntax {
        message: String,
        line: usize,
        column: usize,
    },

    /// No runnable operation: unknown operation name, ambiguous document,
    /// or a mutation or subscription.
    #[error("{0}")]
    Operation(String),

    /// A variable is undefined, missing, or has the wrong kind of value.
    #[error("Variable \"${name}\" {message}")]
    Variable { name: String, message: String },

    /// The selection names a field the type does not have.
    #[error("Cannot query field \"{field}\" on type \"{parent}\".")]
    UnknownField {
        parent: &'static str,
        field: String,
        path: Vec<String>,
    },

    /// A field argument is unknown, missing, or has the wrong kind of value.
    #[error("{message}")]
    Argument { message: String, path: Vec<String> },

    /// An object field without a sub-selection, or a scalar with one.
    #[error("{message}")]
    Selection { message: String, path: Vec<String> },

    /// A resolved value could not be converted to JSON.
    #[error("Failed to serialize result: {0}")]
    Serialize(String),
}

impl QueryError {
    /// Response path of the field the error belongs to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&[String]> {
        match self {
            Self::UnknownField { path, .. }
            | Self::Argument { path, .. }
            | Self::Selection { path, .. } => Some(path),
            Self::Syntax { .. }
            | Self::Operation(_)
            | Self::Variable { .. }
            | Self::Serialize(_) => None,
        }
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialize(error.to_string())
    }
}
