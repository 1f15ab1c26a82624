//! Trigger node presence and cardinality.

use crate::error::{Check, ValidationIssue};
use crate::parse::types::Workflow;

pub fn check_triggers(workflow: &Workflow) -> Vec<ValidationIssue> {
    let mut errors = Vec::new();

    let trigger_count = workflow.nodes.iter().filter(|n| n.is_trigger()).count();
    if trigger_count == 0 {
        errors.push(ValidationIssue::new(
            Check::Triggers,
            "Workflow must have at least one trigger node",
        ));
    }

    // Advisory, but it still fails the document.
    let manual_count = workflow.nodes.iter().filter(|n| n.is_manual_trigger()).count();
    if manual_count > 1 {
        errors.push(ValidationIssue::new(
            Check::Triggers,
            "Multiple manual trigger nodes found - consider using only one",
        ));
    }

    errors
}
