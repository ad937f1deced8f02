//! Node readiness evaluation.

use crate::severity::{CheckResult, Finding};
use crate::snapshot::NodeSnapshot;

/// Evaluate node readiness.
///
/// Every `Ready` condition that is not `True` produces one critical finding
/// formatted as `"<node>, <reason>, <message>"`. Findings follow node order,
/// then condition order within a node. A node whose `Ready` status is
/// `Unknown` counts as not ready.
#[must_use]
pub fn evaluate_nodes(nodes: &[NodeSnapshot]) -> CheckResult {
    CheckResult::from_findings(nodes.iter().flat_map(|node| {
        node.conditions
            .iter()
            .filter(|c| c.is_failed_readiness())
            .map(move |c| Finding::critical(format!("{}, {}, {}", node.name, c.reason, c.message)))
    }))
}
