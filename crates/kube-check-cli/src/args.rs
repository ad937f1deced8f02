//! Command-line surface of `check_kube`.

use std::time::Duration;

use clap::{Parser, Subcommand};
use kube_check_cluster::ClusterConfig;
use kube_check_core::DEFAULT_GRACE_PERIOD;

use crate::dispatch::Check;

/// Monitoring check to verify Kubernetes resources status.
#[derive(Parser, Debug)]
#[command(name = "check_kube")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Kubernetes API endpoint. Kubeconfig / in-cluster discovery is used
    /// when omitted.
    #[arg(long, env = "KUBE_API_ENDPOINT", global = true)]
    pub api_endpoint: Option<String>,

    /// Kubernetes API username.
    #[arg(long, env = "KUBE_USERNAME", global = true)]
    pub username: Option<String>,

    /// Kubernetes API password.
    #[arg(long, env = "KUBE_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Skip TLS certificate verification.
    #[arg(long, env = "KUBE_SKIP_TLS_VERIFY", global = true)]
    pub skip_tls_verify: bool,

    /// Enable debug logging on stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Which resource to check.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Check node status.
    #[command(visible_alias = "n")]
    Node,

    /// Check pod status.
    #[command(visible_alias = "p")]
    Pod {
        /// Seconds after start during which a pod counts as recently started.
        #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_GRACE_PERIOD.as_secs())]
        grace_period: u64,
    },
}

impl Args {
    /// Connection settings from the global options.
    #[must_use]
    pub fn cluster_config(&self) -> ClusterConfig {
        let mut config = ClusterConfig::new().with_skip_tls_verify(self.skip_tls_verify);
        if let Some(endpoint) = &self.api_endpoint {
            config = config.with_api_endpoint(endpoint.clone());
        }
        if let Some(username) = &self.username {
            config = config.with_username(username.clone());
        }
        if let Some(password) = &self.password {
            config = config.with_password(password.clone());
        }
        config
    }

    /// The check selected by the subcommand.
    #[must_use]
    pub const fn check(&self) -> Check {
        match self.command {
            Command::Node => Check::Node,
            Command::Pod { grace_period } => Check::Pod {
                grace_period: Duration::from_secs(grace_period),
            },
        }
    }
}
