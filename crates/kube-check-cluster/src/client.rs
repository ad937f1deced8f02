//! Control plane client.
//!
//! This module provides the `ClusterClient` trait and `KubeClusterClient`,
//! which lists nodes and pods cluster-wide through the Kubernetes API.

use async_trait::async_trait;
use k8s_openapi::api::core::v1::{Node, Pod};
use kube::api::{Api, ListParams};
use kube::Client;
use tracing::{debug, info};

use kube_check_core::{NodeSnapshot, PodSnapshot};

use crate::config::ClusterConfig;
use crate::convert::{node_snapshot, pod_snapshot};
use crate::Result;

/// Source of node and pod snapshots.
///
/// Listings are always unfiltered: every node, and every pod in every
/// namespace.
#[async_trait]
pub trait ClusterClient: Send + Sync {
    /// List all nodes in the cluster.
    ///
    /// # Errors
    ///
    /// Returns an error if the control plane cannot be reached or rejects
    /// the request.
    async fn list_nodes(&self) -> Result<Vec<NodeSnapshot>>;

    /// List all pods in all namespaces.
    ///
    /// # Errors
    ///
    /// Returns an error if the control plane cannot be reached or rejects
    /// the request.
    async fn list_pods(&self) -> Result<Vec<PodSnapshot>>;
}

/// Kubernetes-backed cluster client.
pub struct KubeClusterClient {
    client: Client,
}

impl KubeClusterClient {
    /// Connect using the given settings.
    ///
    /// No request is made yet; connection problems surface on the first
    /// listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid or no configuration
    /// could be discovered.
    pub async fn connect(config: &ClusterConfig) -> Result<Self> {
        let kube_config = config.to_kube_config().await?;

        debug!(
            cluster_url = %kube_config.cluster_url,
            accept_invalid_certs = kube_config.accept_invalid_certs,
            "Building Kubernetes client"
        );

        let client = Client::try_from(kube_config)?;
        Ok(Self { client })
    }

    /// Create a cluster client from a pre-configured `kube` client.
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn nodes_api(&self) -> Api<Node> {
        Api::all(self.client.clone())
    }

    fn pods_api(&self) -> Api<Pod> {
        Api::all(self.client.clone())
    }
}

#[async_trait]
impl ClusterClient for KubeClusterClient {
    async fn list_nodes(&self) -> Result<Vec<NodeSnapshot>> {
        let nodes = self.nodes_api().list(&ListParams::default()).await?;
        info!(node_count = nodes.items.len(), "Listed nodes");

        Ok(nodes.items.iter().map(node_snapshot).collect())
    }

    async fn list_pods(&self) -> Result<Vec<PodSnapshot>> {
        let pods = self.pods_api().list(&ListParams::default()).await?;
        info!(pod_count = pods.items.len(), "Listed pods");

        Ok(pods.items.iter().map(pod_snapshot).collect())
    }
}

/// A mock cluster client for testing without a real Kubernetes cluster.
#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    use super::*;
    use crate::ClusterError;
    use parking_lot::Mutex;

    /// A mock client that serves fixed snapshots or a fixed failure.
    #[derive(Default)]
    pub struct MockClusterClient {
        nodes: Vec<NodeSnapshot>,
        pods: Vec<PodSnapshot>,
        failure: Option<String>,
        calls: Mutex<Vec<&'static str>>,
    }

    impl MockClusterClient {
        /// Create an empty mock client.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Serve these nodes.
        #[must_use]
        pub fn with_nodes(mut self, nodes: Vec<NodeSnapshot>) -> Self {
            self.nodes = nodes;
            self
        }

        /// Serve these pods.
        #[must_use]
        pub fn with_pods(mut self, pods: Vec<PodSnapshot>) -> Self {
            self.pods = pods;
            self
        }

        /// Fail every listing with a connectivity error.
        #[must_use]
        pub fn failing(detail: impl Into<String>) -> Self {
            Self {
                failure: Some(detail.into()),
                ..Self::default()
            }
        }

        /// Listings requested so far, in order (`"nodes"` or `"pods"`).
        #[must_use]
        pub fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().clone()
        }

        fn record(&self, call: &'static str) -> Result<()> {
            self.calls.lock().push(call);
            match &self.failure {
                Some(detail) => Err(ClusterError::Connectivity(detail.clone())),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl ClusterClient for MockClusterClient {
        async fn list_nodes(&self) -> Result<Vec<NodeSnapshot>> {
            self.record("nodes")?;
            Ok(self.nodes.clone())
        }

        async fn list_pods(&self) -> Result<Vec<PodSnapshot>> {
            self.record("pods")?;
            Ok(self.pods.clone())
        }
    }
}
