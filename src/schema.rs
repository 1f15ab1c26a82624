//! Structural schema loading and conformance checking.
//!
//! A [`Schema`] is read and compiled once, then shared read-only by every
//! validation call. Remote `$ref`s are never fetched: the validator runs
//! offline, so only references internal to the schema document resolve.

use std::io;
use std::path::Path;

use jsonschema::{Retrieve, Uri, Validator};
use serde_json::Value;

use crate::error::{SchemaError, ValidationIssue};

/// Where the schema is looked up when no path is configured.
pub const DEFAULT_SCHEMA_PATH: &str = "validation/workflow-schema.json";

struct OfflineRetriever;

impl Retrieve for OfflineRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        Err(format!(
            "external schema reference '{}' cannot be resolved offline",
            uri.as_str()
        )
        .into())
    }
}

/// A compiled structural schema for workflow documents.
pub struct Schema {
    origin: String,
    validator: Validator,
}

impl std::fmt::Debug for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema")
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

impl Schema {
    /// Load the schema from [`DEFAULT_SCHEMA_PATH`].
    pub fn load_default() -> Result<Self, SchemaError> {
        Self::load(DEFAULT_SCHEMA_PATH)
    }

    /// Read, parse and compile the schema stored at `path`.
    ///
    /// # Errors
    ///
    /// `NotFound` if nothing exists at `path`, `Unreadable` for any other
    /// I/O failure, `Malformed` if the file is not JSON and `Invalid` if it
    /// is JSON but not a JSON Schema.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SchemaError::NotFound {
                path: path.to_path_buf(),
            },
            _ => SchemaError::Unreadable {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let schema = Self::from_json(path.display().to_string(), &content)?;
        tracing::info!(path = %path.display(), "loaded workflow schema");
        Ok(schema)
    }

    /// Parse and compile a schema held in memory. `origin` only labels errors.
    pub fn from_json(origin: impl Into<String>, json: &str) -> Result<Self, SchemaError> {
        let origin = origin.into();
        let raw: Value = serde_json::from_str(json).map_err(|e| SchemaError::Malformed {
            origin: origin.clone(),
            reason: e.to_string(),
        })?;
        Self::from_value(origin, raw)
    }

    /// Compile an already parsed schema document.
    pub fn from_value(origin: impl Into<String>, raw: Value) -> Result<Self, SchemaError> {
        let origin = origin.into();
        let mut opts = jsonschema::options();
        opts.with_retriever(OfflineRetriever);
        let validator = opts.build(&raw).map_err(|e| SchemaError::Invalid {
            origin: origin.clone(),
            reason: e.to_string(),
        })?;

        Ok(Schema { origin, validator })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Check `document` against the schema. Stops at the first violation,
    /// so the result holds at most one issue.
    pub fn check(&self, document: &Value) -> Vec<ValidationIssue> {
        match self.validator.iter_errors(document).next() {
            Some(violation) => {
                vec![ValidationIssue::schema(format!("Schema validation error: {violation}"))]
            }
            None => Vec::new(),
        }
    }
}
