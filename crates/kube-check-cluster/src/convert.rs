//! Conversion from Kubernetes API objects to core snapshots.

use k8s_openapi::api::core::v1::{Node, NodeCondition, Pod, PodCondition};
use kube_check_core::{Condition, ConditionStatus, NodeSnapshot, PodSnapshot};

/// Build a node snapshot from an API object.
#[must_use]
pub fn node_snapshot(node: &Node) -> NodeSnapshot {
    let conditions = node
        .status
        .as_ref()
        .and_then(|s| s.conditions.as_ref())
        .map(|conditions| conditions.iter().map(node_condition).collect())
        .unwrap_or_default();

    NodeSnapshot::new(node.metadata.name.clone().unwrap_or_default(), conditions)
}

/// Build a pod snapshot from an API object.
#[must_use]
pub fn pod_snapshot(pod: &Pod) -> PodSnapshot {
    let status = pod.status.as_ref();

    let conditions = status
        .and_then(|s| s.conditions.as_ref())
        .map(|conditions| conditions.iter().map(pod_condition).collect())
        .unwrap_or_default();

    let start_time = status.and_then(|s| s.start_time.as_ref()).map(|t| t.0);

    PodSnapshot::new(
        pod.metadata.name.clone().unwrap_or_default(),
        conditions,
        start_time,
    )
}

fn node_condition(c: &NodeCondition) -> Condition {
    condition(&c.type_, &c.status, c.reason.as_deref(), c.message.as_deref())
}

fn pod_condition(c: &PodCondition) -> Condition {
    condition(&c.type_, &c.status, c.reason.as_deref(), c.message.as_deref())
}

fn condition(type_: &str, status: &str, reason: Option<&str>, message: Option<&str>) -> Condition {
    Condition::new(type_, ConditionStatus::from_k8s_status(status))
        .with_reason(reason.unwrap_or_default())
        .with_message(message.unwrap_or_default())
}
