//! End-to-end scenarios from snapshot to plugin output.

use chrono::{DateTime, TimeDelta, Utc};
use kube_check_core::{
    evaluate_nodes, evaluate_pods, Condition, ConditionStatus, NodeSnapshot, PodSnapshot, Report,
    DEFAULT_GRACE_PERIOD,
};

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

#[test]
fn not_ready_node_is_critical() {
    let nodes = vec![NodeSnapshot::new(
        "node1",
        vec![Condition::new("Ready", ConditionStatus::False)
            .with_reason("KubeletNotReady")
            .with_message("runtime not ready")],
    )];

    let report = Report::from_result(&evaluate_nodes(&nodes));

    assert_eq!(report.text(), "node1, KubeletNotReady, runtime not ready");
    assert_eq!(report.exit_code(), 2);
}

#[test]
fn ready_node_is_ok() {
    let nodes = vec![NodeSnapshot::new(
        "node1",
        vec![Condition::new("Ready", ConditionStatus::True)],
    )];

    let report = Report::from_result(&evaluate_nodes(&nodes));

    assert_eq!(report.text(), "OK");
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn mixed_pods_report_both_lines() {
    let established = Some(now() - TimeDelta::hours(1));
    let pods = vec![
        PodSnapshot::new(
            "api-0",
            vec![Condition::new("Ready", ConditionStatus::False)],
            established,
        ),
        PodSnapshot::new(
            "api-1",
            vec![Condition::new("Ready", ConditionStatus::False)],
            established,
        ),
        PodSnapshot::new(
            "worker-0",
            vec![Condition::new("Ready", ConditionStatus::True)],
            Some(now() - TimeDelta::minutes(1)),
        ),
        PodSnapshot::new(
            "worker-1",
            vec![Condition::new("Ready", ConditionStatus::True)],
            established,
        ),
        PodSnapshot::new(
            "worker-2",
            vec![Condition::new("Ready", ConditionStatus::True)],
            established,
        ),
    ];

    let report = Report::from_result(&evaluate_pods(&pods, now(), DEFAULT_GRACE_PERIOD));

    assert_eq!(
        report.text(),
        "1 pods recently started.\n2 pods not in READY status."
    );
    assert_eq!(report.exit_code(), 2);
}

#[test]
fn empty_pod_list_is_ok() {
    let report = Report::from_result(&evaluate_pods(&[], now(), DEFAULT_GRACE_PERIOD));
    assert_eq!(report.text(), "OK");
    assert_eq!(report.exit_code(), 0);
}
