//! Error types shared by the schema loader and the validation checks.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// The check that produced a [`ValidationIssue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    Document,
    Schema,
    Connections,
    Triggers,
    Positions,
    Expressions,
}

impl std::fmt::Display for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Check::Document => write!(f, "Document"),
            Check::Schema => write!(f, "Schema"),
            Check::Connections => write!(f, "Connections"),
            Check::Triggers => write!(f, "Triggers"),
            Check::Positions => write!(f, "Positions"),
            Check::Expressions => write!(f, "Expressions"),
        }
    }
}

/// A single recoverable problem found while validating one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub check: Check,
    pub message: String,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl ValidationIssue {
    pub fn new(check: Check, message: impl Into<String>) -> Self {
        ValidationIssue {
            check,
            message: message.into(),
        }
    }

    pub fn document(message: impl Into<String>) -> Self {
        Self::new(Check::Document, message)
    }

    pub fn schema(message: impl Into<String>) -> Self {
        Self::new(Check::Schema, message)
    }
}

/// Failure to build a [`Schema`](crate::schema::Schema). Without a schema
/// there is no validator, so these never appear in a `ValidationResult`.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Schema file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Schema file '{}' could not be read: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in schema '{origin}': {reason}")]
    Malformed { origin: String, reason: String },

    #[error("Schema '{origin}' is not a valid JSON Schema: {reason}")]
    Invalid { origin: String, reason: String },
}
