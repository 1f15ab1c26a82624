//! Expression delimiter balance in node parameters.
//!
//! This is a counting heuristic, not an expression parser: a string that
//! contains both markers is malformed when the number of openers differs
//! from the number of closers. Nesting and pairing are not checked.

use serde_json::Value;

use crate::error::{Check, ValidationIssue};
use crate::parse::types::Workflow;

const EXPRESSION_OPEN: &str = "={{";
const EXPRESSION_CLOSE: &str = "}}";

pub fn check_expressions(workflow: &Workflow) -> Vec<ValidationIssue> {
    let mut errors = Vec::new();
    for node in &workflow.nodes {
        let root = format!("Node '{}' parameters", node.display_name());
        walk(&node.parameters, &root, &mut errors);
    }
    errors
}

/// True unless `text` holds both markers in unequal numbers.
pub fn is_balanced(text: &str) -> bool {
    if !text.contains(EXPRESSION_OPEN) || !text.contains(EXPRESSION_CLOSE) {
        return true;
    }
    text.matches(EXPRESSION_OPEN).count() == text.matches(EXPRESSION_CLOSE).count()
}

fn walk(value: &Value, path: &str, errors: &mut Vec<ValidationIssue>) {
    match value {
        Value::String(text) => {
            if !is_balanced(text) {
                errors.push(ValidationIssue::new(
                    Check::Expressions,
                    format!("Malformed expression at {}: {}", path, text),
                ));
            }
        }
        Value::Object(map) => {
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                walk(child, &child_path, errors);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                walk(child, &format!("{path}[{i}]"), errors);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn walk_root(value: Value) -> Vec<String> {
        let mut errors = Vec::new();
        walk(&value, "", &mut errors);
        errors.into_iter().map(|e| e.message).collect()
    }

    #[test]
    fn balanced_and_marker_free_strings_pass() {
        assert!(is_balanced("={{ $json.x }}"));
        assert!(is_balanced("={{ $json.a }} and ={{ $json.b }}"));
        assert!(is_balanced("plain text"));
        assert!(is_balanced("={{ never closed"));
        assert!(is_balanced("closed only }}"));
    }

    #[test]
    fn unequal_marker_counts_fail() {
        assert!(!is_balanced("={{ $json.a ={{ $json.b }}"));
        assert!(!is_balanced("={{ $json.a }} }}"));
    }

    #[test]
    fn markers_are_counted_without_overlap() {
        // "}}}" holds a single closer
        assert!(is_balanced("={{ x }}}"));
        assert!(!is_balanced("={{ x }}}}"));
    }

    #[test]
    fn empty_root_path_uses_bare_keys() {
        let errors = walk_root(json!({"url": "={{ a ={{ b }}"}));
        assert_eq!(errors, vec!["Malformed expression at url: ={{ a ={{ b }}"]);
    }

    #[test]
    fn nested_paths_use_dots_and_indices() {
        let errors = walk_root(json!({
            "options": {"headers": [{"value": "ok"}, {"value": "={{ }} }}"}]}
        }));
        assert_eq!(
            errors,
            vec!["Malformed expression at options.headers[1].value: ={{ }} }}"]
        );
    }

    #[test]
    fn scalars_other_than_strings_are_ignored() {
        assert!(walk_root(json!({"n": 1, "b": true, "z": null})).is_empty());
    }
}
