//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::error::ValidationIssue;
use crate::schema::Schema;
use crate::validate::{self, ValidationResult, WorkflowValidator};

/// Validate workflow JSON against a schema passed as JSON.
/// Returns `{status: "checked", is_valid, errors}` or `{status: "fatal", message}`.
#[wasm_bindgen]
pub fn validate_workflow(workflow_json: &str, schema_json: &str) -> JsValue {
    let result = validate_workflow_inner(workflow_json, schema_json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_workflow_inner(workflow_json: &str, schema_json: &str) -> ValidateOutcome {
    let schema = match Schema::from_json("inline schema", schema_json) {
        Ok(s) => s,
        Err(e) => {
            return ValidateOutcome::Fatal {
                message: e.to_string(),
            };
        }
    };

    let validator = WorkflowValidator::new(schema);
    ValidateOutcome::from(validator.validate_str(workflow_json))
}

/// Run only the logical checks (connections, triggers, positions,
/// expressions). No schema is involved.
#[wasm_bindgen]
pub fn check_workflow(workflow_json: &str) -> JsValue {
    let result = check_workflow_inner(workflow_json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn check_workflow_inner(workflow_json: &str) -> ValidateOutcome {
    let errors = match crate::parse::parse_document(workflow_json) {
        Ok(document) => match crate::parse::workflow_view(&document) {
            Ok(workflow) => validate::check_workflow(&workflow),
            Err(issue) => vec![issue],
        },
        Err(e) => vec![ValidationIssue::document(format!("Invalid JSON: {e}"))],
    };
    ValidateOutcome::from(ValidationResult::from_errors(errors))
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(Debug, serde::Serialize)]
struct ErrorDto {
    check: String,
    message: String,
}

impl From<ValidationIssue> for ErrorDto {
    fn from(e: ValidationIssue) -> Self {
        ErrorDto {
            check: e.check.to_string(),
            message: e.message,
        }
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(tag = "status")]
enum ValidateOutcome {
    #[serde(rename = "checked")]
    Checked {
        is_valid: bool,
        errors: Vec<ErrorDto>,
    },
    #[serde(rename = "fatal")]
    Fatal { message: String },
}

impl From<ValidationResult> for ValidateOutcome {
    fn from(result: ValidationResult) -> Self {
        ValidateOutcome::Checked {
            is_valid: result.is_valid,
            errors: result.errors.into_iter().map(ErrorDto::from).collect(),
        }
    }
}
