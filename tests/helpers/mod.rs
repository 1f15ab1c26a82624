#![allow(dead_code)]

use serde_json::{Value, json};
use workflow_validator::parse::{self, Workflow};
use workflow_validator::{Schema, WorkflowValidator};

// =============================================================================
// Document builders
// =============================================================================

/// A node with a name, type and position and no parameters.
pub fn node(name: &str, node_type: &str, x: f64, y: f64) -> Value {
    json!({ "name": name, "type": node_type, "position": [x, y] })
}

pub fn node_with_parameters(
    name: &str,
    node_type: &str,
    x: f64,
    y: f64,
    parameters: Value,
) -> Value {
    json!({ "name": name, "type": node_type, "position": [x, y], "parameters": parameters })
}

/// A single `main` connection from `source` to `target`.
pub fn main_link(source: &str, target: &str) -> (String, Value) {
    (
        source.to_string(),
        json!({ "main": [[{ "node": target, "type": "main", "index": 0 }]] }),
    )
}

pub fn document(nodes: Vec<Value>, links: Vec<(String, Value)>) -> Value {
    let connections: serde_json::Map<String, Value> = links.into_iter().collect();
    json!({ "nodes": nodes, "connections": connections })
}

pub fn workflow(nodes: Vec<Value>, links: Vec<(String, Value)>) -> Workflow {
    parse::workflow_view(&document(nodes, links)).expect("builder documents are objects")
}

pub fn messages(issues: &[workflow_validator::ValidationIssue]) -> Vec<&str> {
    issues.iter().map(|i| i.message.as_str()).collect()
}

// =============================================================================
// Validators
// =============================================================================

pub fn schema_path() -> String {
    format!("{}/validation/workflow-schema.json", env!("CARGO_MANIFEST_DIR"))
}

/// Validator backed by the shipped workflow schema.
pub fn shipped_validator() -> WorkflowValidator {
    WorkflowValidator::from_path(schema_path()).expect("shipped schema should load")
}

/// Validator whose schema accepts any document.
pub fn permissive_validator() -> WorkflowValidator {
    WorkflowValidator::new(Schema::from_json("permissive", "{}").expect("empty schema compiles"))
}

pub fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

pub const MANUAL: &str = "n8n-nodes-base.manualTrigger";
pub const WEBHOOK: &str = "n8n-nodes-base.webhook";
pub const SET: &str = "n8n-nodes-base.set";
