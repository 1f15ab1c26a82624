//! Parse phase: JSON text → raw document → typed workflow view.

pub mod types;

pub use types::*;

use serde::Deserialize;
use serde_json::Value;

use crate::error::ValidationIssue;

/// Deserialize workflow JSON into an untyped document, keeping key order.
pub fn parse_document(json: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(json)
}

/// Build the typed view the logical checks run over.
pub fn workflow_view(document: &Value) -> Result<Workflow, ValidationIssue> {
    if !document.is_object() {
        return Err(ValidationIssue::document(
            "Unexpected error: workflow document must be a JSON object",
        ));
    }
    Workflow::deserialize(document).map_err(|e| {
        ValidationIssue::document(format!("Unexpected error: unsupported workflow structure: {e}"))
    })
}
