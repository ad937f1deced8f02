//! Error types for the cluster client crate.

use thiserror::Error;

/// Errors raised while talking to the control plane.
///
/// Every variant means the check could not obtain a snapshot; callers
/// report them all the same way.
#[derive(Error, Debug)]
pub enum ClusterError {
    /// Client configuration was rejected before connecting.
    #[error("invalid client configuration: {0}")]
    Config(String),

    /// No kubeconfig or in-cluster environment could be loaded.
    #[error(transparent)]
    InferConfig(#[from] kube::config::InferConfigError),

    /// Kubernetes transport or API error.
    #[error(transparent)]
    Kube(#[from] kube::Error),

    /// The control plane could not be reached.
    #[error("{0}")]
    Connectivity(String),
}

/// A specialized Result type for cluster client operations.
pub type Result<T> = std::result::Result<T, ClusterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connectivity_displays_detail_only() {
        let err = ClusterError::Connectivity("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn config_error_names_the_problem() {
        let err = ClusterError::Config("bad endpoint".to_string());
        assert_eq!(err.to_string(), "invalid client configuration: bad endpoint");
    }
}
