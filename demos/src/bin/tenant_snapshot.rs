//! Prints a JSON snapshot of a tenant's configuration and identity providers.
//!
//! Uses the same environment as `list_applications`. Secrets returned by the
//! service are printed as-is, so keep the output private.
//!
//! ```bash
//! cargo run -p appid-demos --bin tenant_snapshot > snapshot.json
//! ```

use anyhow::{Context, Result};
use appid::management::PageOptions;
use appid::{Client, ErrorKind};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let tenant_id = std::env::var("APPID_TENANT_ID").context("APPID_TENANT_ID must be set")?;
    let client = Client::from_env().context("failed to configure client")?;
    let tenant = client.tenant(tenant_id);
    let config = tenant.config();
    let idps = tenant.idps();

    // Custom IdP is absent on most tenants.
    let custom_idp = match idps.get_custom_idp().await {
        Ok(idp) => Some(idp),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => return Err(e.into()),
    };

    let users = tenant
        .cloud_directory_users()
        .list(Some(PageOptions::new(1).with_count(1)))
        .await?;

    let snapshot = serde_json::json!({
        "tenantId": tenant.tenant_id(),
        "tokens": config.get_token_config().await?,
        "redirectUris": config.get_redirect_uris().await?,
        "usersProfile": config.get_users_profile_config().await?,
        "themeText": config.get_theme_text().await?,
        "themeColors": config.get_theme_colors().await?,
        "auditStatus": config.get_audit_status().await?,
        "mfa": config.get_mfa_config().await?,
        "sso": config.get_sso_config().await?,
        "rateLimit": config.get_rate_limit().await?,
        "idps": {
            "facebook": idps.get_facebook_idp().await?,
            "google": idps.get_google_idp().await?,
            "saml": idps.get_saml_idp().await?,
            "cloudDirectory": idps.get_cloud_directory_idp().await?,
            "custom": custom_idp,
        },
        "cloudDirectoryUsers": users.total_results,
    });

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
