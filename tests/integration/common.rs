//! Common test harness for App ID Rust SDK integration tests.
//!
//! Provides fixtures over the in-memory service and a wiremock server.

use std::sync::{Arc, Once};

use anyhow::{Context, Result};
use appid::testing::{InMemoryAppId, MockTransport};
use appid::{BearerCredentialsConfig, Client, TenantClient};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;
use wiremock::MockServer;

/// Environment variable naming the tenant used by the live tests.
pub const ENV_TENANT_ID: &str = "APPID_TENANT_ID";

static TRACING: Once = Once::new();

/// Installs a test-friendly subscriber once per process.
///
/// Honors `RUST_LOG`; silent by default.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// A fresh in-memory service with a random tenant.
pub struct InMemoryFixture {
    pub fake: InMemoryAppId,
    pub client: Client,
    pub tenant_id: String,
}

impl InMemoryFixture {
    pub fn new() -> Self {
        init_tracing();
        let fake = InMemoryAppId::new();
        let client = Client::with_transport("mock://appid", Arc::new(fake.clone()));
        Self {
            fake,
            client,
            tenant_id: Uuid::new_v4().to_string(),
        }
    }

    pub fn tenant(&self) -> TenantClient {
        self.client.tenant(self.tenant_id.clone())
    }
}

/// A wiremock server plus a REST client pointed at it.
pub struct WireFixture {
    pub server: MockServer,
    pub client: Client,
}

impl WireFixture {
    pub async fn start() -> Result<Self> {
        init_tracing();
        let server = MockServer::start().await;
        let client = Client::builder()
            .url(server.uri())
            .insecure()
            .credentials(BearerCredentialsConfig::new("test-iam-token"))
            .build()
            .context("failed to build client for wiremock server")?;
        Ok(Self { server, client })
    }

    pub fn tenant(&self, tenant_id: &str) -> TenantClient {
        self.client.tenant(tenant_id)
    }
}

/// A client over a scripted transport.
#[allow(dead_code)]
pub fn mock_client(mock: &MockTransport) -> Client {
    init_tracing();
    mock.client()
}

/// Returns a client and tenant for the live environment, or `None` when the
/// environment is not configured.
pub fn live_tenant() -> Result<Option<TenantClient>> {
    let Ok(tenant_id) = std::env::var(ENV_TENANT_ID) else {
        return Ok(None);
    };
    if std::env::var(appid::config::ENV_URL).is_err() {
        return Ok(None);
    }
    init_tracing();
    let client = Client::from_env().context("failed to build client from environment")?;
    Ok(Some(client.tenant(tenant_id)))
}
