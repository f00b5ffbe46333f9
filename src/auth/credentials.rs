//! Credentials types for App ID authentication.

use std::fmt;
use std::sync::Arc;

use super::CredentialsProvider;
use crate::Error;

/// Bearer token credentials configuration.
///
/// Holds a pre-obtained IAM access token. The token is not refreshed; supply
/// a [`CredentialsProvider`] when tokens must be rotated during the
/// lifetime of a client.
///
/// ## Example
///
/// ```rust
/// use appid::BearerCredentialsConfig;
///
/// let config = BearerCredentialsConfig::new("eyJraWQiOiIyMDIz...");
/// assert!(!format!("{:?}", config).contains("eyJ"));
/// ```
#[derive(Clone)]
pub struct BearerCredentialsConfig {
    token: Arc<str>,
}

impl BearerCredentialsConfig {
    /// Creates a new bearer credentials configuration.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Arc::from(token.into()),
        }
    }

    /// Returns the bearer token.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for BearerCredentialsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerCredentialsConfig")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl<S: Into<String>> From<S> for BearerCredentialsConfig {
    fn from(token: S) -> Self {
        Self::new(token)
    }
}

/// Authentication credentials for the App ID SDK.
///
/// - `Bearer`: a fixed IAM access token
/// - `Provider`: a [`CredentialsProvider`] consulted before every request
#[derive(Clone)]
pub enum Credentials {
    /// Direct bearer token.
    Bearer(BearerCredentialsConfig),

    /// Token obtained from a provider on each request.
    Provider(Arc<dyn CredentialsProvider>),
}

impl Credentials {
    /// Creates provider-backed credentials.
    pub fn provider(provider: impl CredentialsProvider + 'static) -> Self {
        Credentials::Provider(Arc::new(provider))
    }

    /// Returns `true` if this is bearer token authentication.
    pub fn is_bearer(&self) -> bool {
        matches!(self, Credentials::Bearer(_))
    }

    /// Returns `true` if tokens come from a provider.
    pub fn is_provider(&self) -> bool {
        matches!(self, Credentials::Provider(_))
    }

    /// Returns the bearer config if applicable.
    pub fn as_bearer(&self) -> Option<&BearerCredentialsConfig> {
        match self {
            Credentials::Bearer(config) => Some(config),
            Credentials::Provider(_) => None,
        }
    }

    /// Resolves the token to send with the next request.
    pub(crate) async fn token(&self) -> Result<String, Error> {
        let token = match self {
            Credentials::Bearer(config) => config.token().to_string(),
            Credentials::Provider(provider) => provider.get_token().await?,
        };

        if token.is_empty() {
            return Err(Error::unauthorized("credentials produced an empty token"));
        }
        Ok(token)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Bearer(config) => f.debug_tuple("Bearer").field(config).finish(),
            Credentials::Provider(_) => f.debug_tuple("Provider").field(&"..").finish(),
        }
    }
}

impl From<BearerCredentialsConfig> for Credentials {
    fn from(config: BearerCredentialsConfig) -> Self {
        Credentials::Bearer(config)
    }
}

impl From<Arc<dyn CredentialsProvider>> for Credentials {
    fn from(provider: Arc<dyn CredentialsProvider>) -> Self {
        Credentials::Provider(provider)
    }
}
