//! Referential integrity of the connection graph.

use std::collections::HashSet;

use crate::error::{Check, ValidationIssue};
use crate::parse::types::{Connection, Workflow};

/// Every connection source and target must name a declared node.
///
/// An unknown source is reported once and its targets are not inspected.
/// Connections without a target are skipped.
pub fn check_connections(workflow: &Workflow) -> Vec<ValidationIssue> {
    let mut errors = Vec::new();
    let names = workflow.node_names();

    for (source, groups) in workflow.connections.iter() {
        if !names.contains(source) {
            errors.push(ValidationIssue::new(
                Check::Connections,
                format!("Connection source node '{}' does not exist", source),
            ));
            continue;
        }

        for (_, slots) in groups.iter() {
            for slot in slots {
                check_targets(source, slot, &names, &mut errors);
            }
        }
    }

    errors
}

fn check_targets(
    source: &str,
    slot: &[Connection],
    names: &HashSet<&str>,
    errors: &mut Vec<ValidationIssue>,
) {
    for target in slot.iter().filter_map(Connection::target) {
        if !names.contains(&*target) {
            errors.push(ValidationIssue::new(
                Check::Connections,
                format!(
                    "Connection target node '{}' does not exist (referenced from '{}')",
                    target, source
                ),
            ));
        }
    }
}
