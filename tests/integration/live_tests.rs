//! Read-only checks against a real App ID tenant.
//!
//! Skipped unless `APPID_MANAGEMENT_URL`, `APPID_IAM_TOKEN` and
//! `APPID_TENANT_ID` are set.

use anyhow::{Context, Result};
use appid::management::PageOptions;

use crate::common::live_tenant;

#[tokio::test]
async fn test_live_read_only_calls() -> Result<()> {
    let Some(tenant) = live_tenant()? else {
        eprintln!("skipping live tests: environment not configured");
        return Ok(());
    };

    let apps = tenant
        .applications()
        .list()
        .await
        .context("failed to list applications")?;
    println!("{} applications", apps.len());

    let roles = tenant.roles().list().await.context("failed to list roles")?;
    println!("{} roles", roles.len());

    tenant
        .config()
        .get_token_config()
        .await
        .context("failed to read token configuration")?;

    let page = tenant
        .cloud_directory_users()
        .list(Some(PageOptions::new(1).with_count(5)))
        .await
        .context("failed to list users")?;
    assert!(page.resources.len() <= 5);

    Ok(())
}
