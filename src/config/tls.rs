//! TLS configuration for the management API connection.

use std::path::PathBuf;

/// Configuration for TLS connections.
///
/// By default the SDK trusts the platform root certificates, which is what
/// the public App ID endpoints need. A custom CA is useful when the
/// management API is reached through a private endpoint or a corporate
/// proxy.
///
/// ## Example
///
/// ```rust
/// use appid::TlsConfig;
///
/// let config = TlsConfig::builder()
///     .ca_cert_file("/etc/ssl/private-endpoint-ca.crt")
///     .build();
/// assert!(config.has_custom_ca());
/// ```
#[derive(Debug, Clone, Default, bon::Builder)]
pub struct TlsConfig {
    /// Custom CA certificate file path.
    #[builder(into)]
    pub ca_cert_file: Option<PathBuf>,

    /// Custom CA certificate PEM data.
    #[builder(into)]
    pub ca_cert_pem: Option<String>,

    /// Whether to skip certificate verification and allow plain HTTP.
    ///
    /// **WARNING**: only for local development against a fake server.
    #[builder(default = false)]
    pub skip_verification: bool,
}

impl TlsConfig {
    /// Creates an insecure TLS config that skips verification.
    pub fn insecure() -> Self {
        Self::builder().skip_verification(true).build()
    }

    /// Returns `true` if a custom CA is configured.
    pub fn has_custom_ca(&self) -> bool {
        self.ca_cert_file.is_some() || self.ca_cert_pem.is_some()
    }
}
