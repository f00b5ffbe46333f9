//! Lists the applications of a tenant with their scopes and roles.
//!
//! # Running
//!
//! ```bash
//! export APPID_MANAGEMENT_URL="https://us-south.appid.cloud.ibm.com"
//! export APPID_IAM_TOKEN="$(ibmcloud iam oauth-tokens --output json | jq -r .iam_token | cut -d' ' -f2)"
//! export APPID_TENANT_ID="074c2fb3-62b5-451d-a7c3-cf4efdc3266f"
//!
//! RUST_LOG=appid=debug cargo run -p appid-demos --bin list_applications
//! ```

use anyhow::{Context, Result};
use appid::Client;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let tenant_id = std::env::var("APPID_TENANT_ID").context("APPID_TENANT_ID must be set")?;
    let client = Client::from_env().context("failed to configure client")?;
    let tenant = client.tenant(tenant_id);
    let apps = tenant.applications();

    for app in apps.list().await? {
        println!("{} ({}) [{}]", app.name, app.client_id, app.application_type);

        let scopes = apps.list_scopes(&app.client_id).await?;
        if !scopes.is_empty() {
            println!("  scopes: {}", scopes.join(", "));
        }

        for role in apps.list_roles(&app.client_id).await? {
            println!("  role: {} ({})", role.name, role.id);
        }
    }

    Ok(())
}
