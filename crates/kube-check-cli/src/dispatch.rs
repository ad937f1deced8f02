//! Wires the cluster client, the evaluators and the report together.

use std::time::Duration;

use chrono::{DateTime, Utc};
use kube_check_cluster::{ClusterClient, ClusterConfig, ClusterError, KubeClusterClient};
use kube_check_core::{evaluate_nodes, evaluate_pods, CheckResult, Report};
use tracing::{debug, info, warn};

/// A single check invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Node readiness.
    Node,
    /// Pod readiness and recent starts.
    Pod {
        /// How long a started pod is reported as recently started.
        grace_period: Duration,
    },
}

/// Connect to the cluster and run one check.
///
/// Invalid settings and connection failures come back as an `UNKNOWN`
/// report; this never fails.
pub async fn check_cluster(config: &ClusterConfig, check: Check) -> Report {
    debug!(?config, ?check, "Running check");

    match KubeClusterClient::connect(config).await {
        Ok(client) => run_check(&client, check, Utc::now()).await,
        Err(e) => {
            warn!(error = %e, "Failed to set up Kubernetes client");
            failure_report(e)
        }
    }
}

/// Run one check against `client`, evaluating pod ages relative to `now`.
///
/// A listing failure short-circuits to an `UNKNOWN` report without running
/// the evaluator.
pub async fn run_check<C>(client: &C, check: Check, now: DateTime<Utc>) -> Report
where
    C: ClusterClient + ?Sized,
{
    let result = match check {
        Check::Node => client.list_nodes().await.map(|nodes| evaluate_nodes(&nodes)),
        Check::Pod { grace_period } => client
            .list_pods()
            .await
            .map(|pods| evaluate_pods(&pods, now, grace_period)),
    };

    match result {
        Ok(result) => {
            log_result(check, &result);
            Report::from_result(&result)
        }
        Err(e) => {
            warn!(error = %e, ?check, "Failed to list cluster resources");
            failure_report(e)
        }
    }
}

/// Report a client error with its whole cause chain, so the transport
/// detail (e.g. `Connection refused`) reaches the plugin output.
fn failure_report(e: ClusterError) -> Report {
    Report::connectivity_failure(format!("{:#}", anyhow::Error::from(e)))
}

fn log_result(check: Check, result: &CheckResult) {
    info!(
        ?check,
        severity = %result.severity(),
        findings = result.messages().len(),
        "Check evaluated"
    );
}
