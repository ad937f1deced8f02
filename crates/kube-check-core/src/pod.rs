//! Pod readiness and start-up evaluation.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

use crate::severity::{CheckResult, Finding};
use crate::snapshot::PodSnapshot;

/// How long after starting a pod is still reported as recently started.
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_secs(5 * 60);

/// Evaluate pod readiness.
///
/// Two counts are taken over `pods`:
///
/// - pods started less than `grace_period` before `now` (a warning)
/// - pods with a `Ready` condition that is not `True` (critical)
///
/// Each non-zero count yields one line, the recently-started line first.
/// A pod with no start time is never counted as recently started, and a
/// pod exactly `grace_period` old is not either.
#[must_use]
pub fn evaluate_pods(pods: &[PodSnapshot], now: DateTime<Utc>, grace_period: Duration) -> CheckResult {
    let grace = TimeDelta::from_std(grace_period).unwrap_or(TimeDelta::MAX);

    let recently_started = pods
        .iter()
        .filter(|pod| {
            pod.start_time
                .is_some_and(|started| now.signed_duration_since(started) < grace)
        })
        .count();
    let not_ready = pods.iter().filter(|pod| pod.has_failed_readiness()).count();

    let mut findings = Vec::with_capacity(2);
    if recently_started > 0 {
        findings.push(Finding::warning(format!(
            "{recently_started} pods recently started."
        )));
    }
    if not_ready > 0 {
        findings.push(Finding::critical(format!(
            "{not_ready} pods not in READY status."
        )));
    }

    CheckResult::from_findings(findings)
}
