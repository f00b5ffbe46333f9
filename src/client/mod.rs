//! Client types for the App ID management API.
//!
//! The SDK uses a hierarchical client structure:
//! - [`Client`]: top-level client, owns the transport
//! - [`TenantClient`]: tenant-scoped entry point to the resource clients
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use appid::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let client = Client::builder()
//!     .url("https://us-south.appid.cloud.ibm.com")
//!     .credentials(BearerCredentialsConfig::new("iam-access-token"))
//!     .build()?;
//!
//! let tenant = client.tenant("074c2fb3-62b5-451d-a7c3-cf4efdc3266f");
//! for app in tenant.applications().list().await? {
//!     println!("{} ({})", app.name, app.client_id);
//! }
//! # Ok(())
//! # }
//! ```

mod builder;
mod inner;

pub use builder::{ClientBuilder, DEFAULT_TIMEOUT, HasCredentials, HasUrl, NoCredentials, NoUrl};

use std::sync::Arc;

use crate::management::{
    ApplicationsClient, CloudDirectoryUsersClient, ConfigClient, IdpsClient, RolesClient,
};
use crate::transport::TransportClient;

/// The App ID management SDK client.
///
/// Create one with [`Client::builder()`], [`Client::from_env()`] or
/// [`Client::with_transport()`], then select a tenant with
/// [`Client::tenant()`].
///
/// `Client` is `Clone` and thread-safe; clones share one transport.
#[derive(Clone)]
pub struct Client {
    inner: Arc<inner::ClientInner>,
}

impl Client {
    /// Creates a new client builder.
    pub fn builder() -> ClientBuilder<NoUrl, NoCredentials> {
        ClientBuilder::new()
    }

    /// Creates a client that sends every request through `transport`.
    ///
    /// `url` is informational; the transport decides where requests go.
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use appid::Client;
    /// use appid::testing::InMemoryAppId;
    ///
    /// let client = Client::with_transport("mock://appid", Arc::new(InMemoryAppId::new()));
    /// assert_eq!(client.transport_name(), "in-memory");
    /// ```
    pub fn with_transport(url: impl Into<String>, transport: Arc<dyn TransportClient>) -> Self {
        Self {
            inner: Arc::new(inner::ClientInner {
                url: url.into(),
                transport,
            }),
        }
    }

    /// Creates a client from the `APPID_*` environment variables.
    ///
    /// See [`EnvConfig`](crate::EnvConfig) for the variables read.
    #[cfg(feature = "rest")]
    pub fn from_env() -> Result<Self, crate::Error> {
        Self::from_env_config(crate::config::EnvConfig::from_env()?)
    }

    /// Creates a client from an already loaded [`EnvConfig`](crate::EnvConfig).
    #[cfg(feature = "rest")]
    pub fn from_env_config(config: crate::config::EnvConfig) -> Result<Self, crate::Error> {
        let mut builder = Self::builder()
            .url(config.url)
            .credentials(crate::auth::BearerCredentialsConfig::new(config.iam_token));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if config.insecure {
            builder = builder.insecure();
        }
        builder.build()
    }

    /// Returns a tenant-scoped client.
    ///
    /// The tenant ID is validated when a request is made; an empty ID fails
    /// with [`ErrorKind::Validation`](crate::ErrorKind::Validation).
    pub fn tenant(&self, tenant_id: impl Into<String>) -> TenantClient {
        TenantClient {
            client: self.clone(),
            tenant_id: tenant_id.into(),
        }
    }

    /// Returns the base URL of the client.
    pub fn url(&self) -> &str {
        &self.inner.url
    }

    /// Returns the name of the underlying transport.
    pub fn transport_name(&self) -> &'static str {
        self.inner.transport.name()
    }

    /// Returns a reference to the inner client.
    pub(crate) fn inner(&self) -> &inner::ClientInner {
        &self.inner
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("url", &self.inner.url)
            .field("transport", &self.inner.transport.name())
            .finish()
    }
}

/// A tenant-scoped client.
///
/// Hands out the per-resource clients, all bound to the same tenant.
#[derive(Clone)]
pub struct TenantClient {
    client: Client,
    tenant_id: String,
}

impl TenantClient {
    /// Returns the applications client.
    pub fn applications(&self) -> ApplicationsClient {
        ApplicationsClient::new(self.client.clone(), self.tenant_id.clone())
    }

    /// Returns the roles client.
    pub fn roles(&self) -> RolesClient {
        RolesClient::new(self.client.clone(), self.tenant_id.clone())
    }

    /// Returns the tenant configuration client.
    pub fn config(&self) -> ConfigClient {
        ConfigClient::new(self.client.clone(), self.tenant_id.clone())
    }

    /// Returns the identity providers client.
    pub fn idps(&self) -> IdpsClient {
        IdpsClient::new(self.client.clone(), self.tenant_id.clone())
    }

    /// Returns the Cloud Directory users client.
    pub fn cloud_directory_users(&self) -> CloudDirectoryUsersClient {
        CloudDirectoryUsersClient::new(self.client.clone(), self.tenant_id.clone())
    }

    /// Returns the tenant ID.
    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    /// Returns the underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl std::fmt::Debug for TenantClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TenantClient")
            .field("tenant_id", &self.tenant_id)
            .finish_non_exhaustive()
    }
}
