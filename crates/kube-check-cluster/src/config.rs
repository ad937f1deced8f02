//! Connection settings for the control plane.

use std::time::Duration;

use tracing::debug;

use crate::{ClusterError, Result};

/// Connection settings, built once from validated input before any client
/// exists.
#[derive(Clone, Default)]
pub struct ClusterConfig {
    api_endpoint: Option<String>,
    username: Option<String>,
    password: Option<String>,
    skip_tls_verify: bool,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
}

impl ClusterConfig {
    const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
    const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(30);

    /// Settings that rely entirely on kubeconfig or in-cluster discovery.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Talk to this API server instead of the discovered one.
    #[must_use]
    pub fn with_api_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = Some(endpoint.into());
        self
    }

    /// Authenticate with HTTP basic auth.
    #[must_use]
    pub fn with_basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Set only the username, leaving any password unset.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set only the password.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Accept any server certificate.
    #[must_use]
    pub const fn with_skip_tls_verify(mut self, skip: bool) -> Self {
        self.skip_tls_verify = skip;
        self
    }

    /// Override the TCP connect timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Override the response read timeout.
    #[must_use]
    pub const fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Explicit API endpoint, if any.
    #[must_use]
    pub fn api_endpoint(&self) -> Option<&str> {
        self.api_endpoint.as_deref()
    }

    /// Basic-auth username, if any.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Whether certificate verification is disabled.
    #[must_use]
    pub const fn skip_tls_verify(&self) -> bool {
        self.skip_tls_verify
    }

    /// Effective connect timeout.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout.unwrap_or(Self::DEFAULT_CONNECT_TIMEOUT)
    }

    /// Effective read timeout.
    #[must_use]
    pub fn read_timeout(&self) -> Duration {
        self.read_timeout.unwrap_or(Self::DEFAULT_READ_TIMEOUT)
    }

    /// Check the settings for mistakes that would only surface as confusing
    /// connection errors later.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not an absolute `http`/`https`
    /// URL, or if a password is given without a username.
    pub fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.api_endpoint {
            parse_endpoint(endpoint)?;
        }
        if self.password.is_some() && self.username.is_none() {
            return Err(ClusterError::Config(
                "a password was given without a username".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve these settings into a `kube` client configuration.
    ///
    /// With an explicit endpoint the configuration is built from it alone.
    /// Otherwise the usual kubeconfig / in-cluster discovery runs and the
    /// explicit credentials and TLS flag are applied on top.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or discovery finds nothing.
    pub async fn to_kube_config(&self) -> Result<kube::Config> {
        self.validate()?;

        let mut config = match &self.api_endpoint {
            Some(endpoint) => kube::Config::new(parse_endpoint(endpoint)?),
            None => {
                debug!("No API endpoint given, inferring client configuration");
                kube::Config::infer().await?
            }
        };

        if let Some(username) = &self.username {
            config.auth_info.username = Some(username.clone());
        }
        if let Some(password) = &self.password {
            config.auth_info.password = Some(password.clone().into());
        }
        if self.skip_tls_verify {
            config.accept_invalid_certs = true;
        }
        config.connect_timeout = Some(self.connect_timeout());
        config.read_timeout = Some(self.read_timeout());

        Ok(config)
    }
}

impl std::fmt::Debug for ClusterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClusterConfig")
            .field("api_endpoint", &self.api_endpoint)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("skip_tls_verify", &self.skip_tls_verify)
            .field("connect_timeout", &self.connect_timeout())
            .field("read_timeout", &self.read_timeout())
            .finish()
    }
}

fn parse_endpoint(endpoint: &str) -> Result<http::Uri> {
    let uri: http::Uri = endpoint
        .parse()
        .map_err(|e| ClusterError::Config(format!("invalid API endpoint {endpoint:?}: {e}")))?;

    match uri.scheme_str() {
        Some("http" | "https") if uri.authority().is_some() => Ok(uri),
        _ => Err(ClusterError::Config(format!(
            "API endpoint {endpoint:?} must be an absolute http(s) URL"
        ))),
    }
}
