//! Validation orchestrator.
//!
//! Runs the schema check followed by the four logical checks and collects
//! every issue. Reporting order is fixed: schema, connections, triggers,
//! positions, expressions.

pub mod connections;
pub mod expressions;
pub mod layout;
pub mod triggers;

use std::io;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::{Check, SchemaError, ValidationIssue};
use crate::parse::{self, Workflow};
use crate::schema::Schema;

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<ValidationIssue>) -> Self {
        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Error messages in reporting order.
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }
}

/// Run the four logical checks against the typed view of a workflow.
pub fn check_workflow(workflow: &Workflow) -> Vec<ValidationIssue> {
    let mut errors = Vec::new();

    run_check(Check::Connections, &mut errors, || connections::check_connections(workflow));
    run_check(Check::Triggers, &mut errors, || triggers::check_triggers(workflow));
    run_check(Check::Positions, &mut errors, || layout::check_positions(workflow));
    run_check(Check::Expressions, &mut errors, || expressions::check_expressions(workflow));

    errors
}

fn run_check(
    check: Check,
    errors: &mut Vec<ValidationIssue>,
    run: impl FnOnce() -> Vec<ValidationIssue>,
) {
    let found = run();
    tracing::debug!(%check, errors = found.len(), "check finished");
    errors.extend(found);
}

/// The validation engine. Owns the compiled schema; holds no other state,
/// so one instance can validate any number of documents.
#[derive(Debug)]
pub struct WorkflowValidator {
    schema: Schema,
}

impl WorkflowValidator {
    pub fn new(schema: Schema) -> Self {
        WorkflowValidator { schema }
    }

    /// Build a validator from the schema stored at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        Schema::load(path).map(Self::new)
    }

    /// Validate a parsed document. Never fails; every problem becomes an issue.
    pub fn validate(&self, document: &Value) -> ValidationResult {
        let mut errors = Vec::new();
        run_check(Check::Schema, &mut errors, || self.schema.check(document));

        match parse::workflow_view(document) {
            Ok(workflow) => errors.extend(check_workflow(&workflow)),
            Err(issue) => errors.push(issue),
        }

        let result = ValidationResult::from_errors(errors);
        tracing::info!(
            is_valid = result.is_valid,
            errors = result.errors.len(),
            "workflow validated"
        );
        result
    }

    /// Validate workflow JSON held in memory.
    pub fn validate_str(&self, json: &str) -> ValidationResult {
        match parse::parse_document(json) {
            Ok(document) => self.validate(&document),
            Err(e) => ValidationResult::from_errors(vec![ValidationIssue::document(format!(
                "Invalid JSON: {e}"
            ))]),
        }
    }

    /// Read and validate a workflow file. Read and parse failures are
    /// reported as issues rather than returned as errors.
    pub fn validate_file(&self, path: impl AsRef<Path>) -> ValidationResult {
        let path = path.as_ref();
        let issue = match std::fs::read_to_string(path) {
            Ok(content) => match parse::parse_document(&content) {
                Ok(document) => return self.validate(&document),
                Err(e) => format!("Invalid JSON in file: {e}"),
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                format!("File not found: {}", path.display())
            }
            Err(e) => format!("Unexpected error: {e}"),
        };

        tracing::warn!(path = %path.display(), "{issue}");
        ValidationResult::from_errors(vec![ValidationIssue::document(issue)])
    }
}
