//! Kubernetes control plane access for kube-check.
//!
//! This crate fetches node and pod snapshots for the core evaluators.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                check_kube CLI                 │
//! └───────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌───────────────────────────────────────────────┐
//! │              KubeClusterClient                │
//! │  ┌───────────────┐      ┌──────────────────┐  │
//! │  │ ClusterConfig │      │ Snapshot convert │  │
//! │  └───────────────┘      └──────────────────┘  │
//! └───────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌───────────────────────────────────────────────┐
//! │            Kubernetes API Server              │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use kube_check_cluster::{ClusterClient, ClusterConfig, KubeClusterClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClusterConfig::new()
//!     .with_api_endpoint("https://10.0.0.1:6443")
//!     .with_basic_auth("admin", "secret");
//! let client = KubeClusterClient::connect(&config).await?;
//!
//! for node in client.list_nodes().await? {
//!     println!("{}: {} conditions", node.name, node.conditions.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Testing
//!
//! Enable the `test-utils` feature for a mock client:
//!
//! ```ignore
//! use kube_check_cluster::{ClusterClient, MockClusterClient};
//!
//! # async fn example() {
//! let client = MockClusterClient::failing("connection refused");
//! assert!(client.list_nodes().await.is_err());
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod client;
pub mod config;
pub mod convert;
pub mod error;

pub use client::{ClusterClient, KubeClusterClient};
pub use config::ClusterConfig;
pub use error::{ClusterError, Result};

#[cfg(any(test, feature = "test-utils"))]
pub use client::mock::MockClusterClient;
