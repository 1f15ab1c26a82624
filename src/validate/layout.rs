//! Node position validity and overlap detection.

use std::borrow::Cow;

use serde_json::Value;

use crate::error::{Check, ValidationIssue};
use crate::parse::types::Workflow;

/// Nodes closer than this on both axes are reported as overlapping.
pub const MIN_NODE_SPACING: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PositionFault {
    Arity,
    NonNumeric,
}

fn coordinates(position: &Value) -> Result<(f64, f64), PositionFault> {
    let Value::Array(items) = position else {
        return Err(PositionFault::Arity);
    };
    let [x, y] = items.as_slice() else {
        return Err(PositionFault::Arity);
    };
    match (x.as_f64(), y.as_f64()) {
        (Some(x), Some(y)) => Ok((x, y)),
        _ => Err(PositionFault::NonNumeric),
    }
}

/// Validate every position, then compare each valid node against the valid
/// nodes after it so each unordered pair is reported at most once.
pub fn check_positions(workflow: &Workflow) -> Vec<ValidationIssue> {
    let mut errors = Vec::new();
    let mut placed: Vec<(f64, f64, Cow<'_, str>)> = Vec::new();

    for node in &workflow.nodes {
        match coordinates(&node.position) {
            Ok((x, y)) => placed.push((x, y, node.display_name())),
            Err(PositionFault::Arity) => errors.push(ValidationIssue::new(
                Check::Positions,
                format!("Node '{}' has invalid position format", node.display_name()),
            )),
            Err(PositionFault::NonNumeric) => errors.push(ValidationIssue::new(
                Check::Positions,
                format!("Node '{}' has non-numeric position values", node.display_name()),
            )),
        }
    }

    for (i, (x1, y1, first)) in placed.iter().enumerate() {
        for (x2, y2, second) in &placed[i + 1..] {
            if (x1 - x2).abs() < MIN_NODE_SPACING && (y1 - y2).abs() < MIN_NODE_SPACING {
                errors.push(ValidationIssue::new(
                    Check::Positions,
                    format!("Nodes '{}' and '{}' may be too close together", first, second),
                ));
            }
        }
    }

    errors
}
