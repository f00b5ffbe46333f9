//! Client builder with typestate pattern.

use std::{marker::PhantomData, time::Duration};

use crate::{Client, auth::Credentials, config::TlsConfig};
#[cfg(feature = "rest")]
use crate::{Error, transport::RestTransport};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Marker type: URL not yet provided.
pub struct NoUrl;

/// Marker type: URL has been provided.
pub struct HasUrl;

/// Marker type: Credentials not yet provided.
pub struct NoCredentials;

/// Marker type: Credentials have been provided.
pub struct HasCredentials;

/// Builder for creating [`Client`] instances.
///
/// Uses the typestate pattern to ensure the management URL and
/// credentials are provided at compile time.
///
/// ## Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use appid::{BearerCredentialsConfig, Client};
///
/// # fn main() -> Result<(), appid::Error> {
/// let client = Client::builder()
///     .url("https://us-south.appid.cloud.ibm.com")
///     .credentials(BearerCredentialsConfig::new("iam-access-token"))
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder<UrlState, CredentialsState> {
    url: Option<String>,
    credentials: Option<Credentials>,
    tls_config: TlsConfig,
    timeout: Option<Duration>,
    _url_state: PhantomData<UrlState>,
    _credentials_state: PhantomData<CredentialsState>,
}

impl ClientBuilder<NoUrl, NoCredentials> {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self {
            url: None,
            credentials: None,
            tls_config: TlsConfig::default(),
            timeout: None,
            _url_state: PhantomData,
            _credentials_state: PhantomData,
        }
    }
}

impl Default for ClientBuilder<NoUrl, NoCredentials> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> ClientBuilder<NoUrl, C> {
    /// Sets the regional management API URL, e.g.
    /// `https://us-south.appid.cloud.ibm.com`.
    pub fn url(self, url: impl Into<String>) -> ClientBuilder<HasUrl, C> {
        ClientBuilder {
            url: Some(url.into()),
            credentials: self.credentials,
            tls_config: self.tls_config,
            timeout: self.timeout,
            _url_state: PhantomData,
            _credentials_state: PhantomData,
        }
    }
}

impl<U> ClientBuilder<U, NoCredentials> {
    /// Sets the authentication credentials.
    ///
    /// Accepts a [`BearerCredentialsConfig`](crate::BearerCredentialsConfig)
    /// holding an IAM access token, or any
    /// [`CredentialsProvider`](crate::CredentialsProvider) via
    /// [`Credentials::provider`].
    pub fn credentials(
        self,
        credentials: impl Into<Credentials>,
    ) -> ClientBuilder<U, HasCredentials> {
        ClientBuilder {
            url: self.url,
            credentials: Some(credentials.into()),
            tls_config: self.tls_config,
            timeout: self.timeout,
            _url_state: PhantomData,
            _credentials_state: PhantomData,
        }
    }
}

impl<U, C> ClientBuilder<U, C> {
    /// Sets the TLS configuration.
    #[must_use]
    pub fn tls_config(mut self, config: TlsConfig) -> Self {
        self.tls_config = config;
        self
    }

    /// Disables TLS certificate verification and allows HTTP connections.
    ///
    /// **WARNING**: only for local development against a fake server.
    #[must_use]
    pub fn insecure(mut self) -> Self {
        self.tls_config.skip_verification = true;
        self
    }

    /// Sets the per-request timeout. Defaults to 30 seconds.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(feature = "rest")]
impl ClientBuilder<HasUrl, HasCredentials> {
    /// Builds the client on top of a [`RestTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Configuration`](crate::ErrorKind::Configuration)
    /// if the URL is invalid, carries a query or fragment, is not HTTPS while
    /// [`insecure`](Self::insecure) is off, or the TLS settings cannot be
    /// loaded.
    pub fn build(self) -> Result<Client, Error> {
        let url = self.url.ok_or_else(|| Error::configuration("URL is required"))?;

        let parsed_url = url::Url::parse(&url)
            .map_err(|e| Error::configuration(format!("invalid URL: {}", e)).with_source(e))?;

        if parsed_url.query().is_some() || parsed_url.fragment().is_some() {
            return Err(Error::configuration("URL must not contain a query or fragment"));
        }

        if parsed_url.scheme() != "https" && !self.tls_config.skip_verification {
            return Err(Error::configuration(
                "HTTPS is required. Use .insecure() for development with HTTP.",
            ));
        }

        let credentials =
            self.credentials.ok_or_else(|| Error::configuration("credentials are required"))?;
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);

        let transport = RestTransport::new(&parsed_url, credentials, &self.tls_config, timeout)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(url = %url, timeout_ms = timeout.as_millis() as u64, "app id client built");

        Ok(Client::with_transport(url, std::sync::Arc::new(transport)))
    }
}
