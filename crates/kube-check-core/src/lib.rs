//! Core health evaluation for kube-check.
//!
//! This crate holds the decision logic of the check and nothing else:
//!
//! - **Snapshots**: read-only views of nodes and pods as reported by the
//!   control plane ([`NodeSnapshot`], [`PodSnapshot`], [`Condition`])
//! - **Evaluators**: pure functions that turn a snapshot list into a
//!   [`CheckResult`] ([`evaluate_nodes`], [`evaluate_pods`])
//! - **Severity model**: the ordered [`Severity`] scale and its worse-of
//!   combinator
//! - **Reporting**: the mapping from a result to the monitoring plugin
//!   output ([`Report`])
//!
//! Nothing here performs I/O. Fetching snapshots lives in
//! `kube-check-cluster`, printing and exiting lives in the `check_kube` binary.
//!
//! # Example
//!
//! ```
//! use kube_check_core::{evaluate_nodes, Condition, ConditionStatus, NodeSnapshot, Report};
//!
//! let nodes = vec![NodeSnapshot::new(
//!     "node1",
//!     vec![Condition::new("Ready", ConditionStatus::False)
//!         .with_reason("KubeletNotReady")
//!         .with_message("runtime not ready")],
//! )];
//!
//! let report = Report::from_result(&evaluate_nodes(&nodes));
//! assert_eq!(report.text(), "node1, KubeletNotReady, runtime not ready");
//! assert_eq!(report.exit_code(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod node;
pub mod pod;
pub mod report;
pub mod severity;
pub mod snapshot;

pub use node::evaluate_nodes;
pub use pod::{evaluate_pods, DEFAULT_GRACE_PERIOD};
pub use report::Report;
pub use severity::{CheckResult, Finding, Severity};
pub use snapshot::{Condition, ConditionStatus, NodeSnapshot, PodSnapshot, READY_CONDITION};
