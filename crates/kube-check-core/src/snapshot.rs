//! Point-in-time views of cluster resources.
//!
//! Snapshots are built by the cluster client for a single invocation and
//! are never modified afterwards.

use chrono::{DateTime, Utc};

/// Condition type that signals whether a node or pod is ready.
pub const READY_CONDITION: &str = "Ready";

/// Tri-state status of a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConditionStatus {
    /// The condition holds.
    True,
    /// The condition does not hold.
    False,
    /// The control plane cannot tell.
    #[default]
    Unknown,
}

impl ConditionStatus {
    /// Parse a condition status from its Kubernetes text form.
    ///
    /// Anything other than `"True"` or `"False"` is `Unknown`.
    #[must_use]
    pub fn from_k8s_status(status: &str) -> Self {
        match status {
            "True" => Self::True,
            "False" => Self::False,
            _ => Self::Unknown,
        }
    }

    /// Whether the status is exactly `True`.
    #[must_use]
    pub const fn is_true(self) -> bool {
        matches!(self, Self::True)
    }
}

/// A named health signal attached to a node or pod.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    /// Condition type, e.g. `Ready`.
    pub type_: String,
    /// Current status.
    pub status: ConditionStatus,
    /// Short machine-readable reason; empty when not reported.
    pub reason: String,
    /// Free-form explanation; empty when not reported.
    pub message: String,
}

impl Condition {
    /// Create a condition with an empty reason and message.
    #[must_use]
    pub fn new(type_: impl Into<String>, status: ConditionStatus) -> Self {
        Self {
            type_: type_.into(),
            status,
            reason: String::new(),
            message: String::new(),
        }
    }

    /// Set the reason.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// Set the message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// True for a `Ready` condition whose status is anything but `True`.
    #[must_use]
    pub fn is_failed_readiness(&self) -> bool {
        self.type_ == READY_CONDITION && !self.status.is_true()
    }
}

/// A cluster node at the moment of the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSnapshot {
    /// Node name.
    pub name: String,
    /// Conditions in the order the control plane reported them.
    pub conditions: Vec<Condition>,
}

impl NodeSnapshot {
    /// Create a node snapshot.
    #[must_use]
    pub fn new(name: impl Into<String>, conditions: Vec<Condition>) -> Self {
        Self {
            name: name.into(),
            conditions,
        }
    }
}

/// A pod at the moment of the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodSnapshot {
    /// Pod name.
    pub name: String,
    /// Conditions in the order the control plane reported them.
    pub conditions: Vec<Condition>,
    /// When the pod was started, if it has been.
    pub start_time: Option<DateTime<Utc>>,
}

impl PodSnapshot {
    /// Create a pod snapshot.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        conditions: Vec<Condition>,
        start_time: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            name: name.into(),
            conditions,
            start_time,
        }
    }

    /// Whether any `Ready` condition on this pod is not `True`.
    #[must_use]
    pub fn has_failed_readiness(&self) -> bool {
        self.conditions.iter().any(Condition::is_failed_readiness)
    }
}
