//! Environment-based client configuration.

use std::time::Duration;

use crate::Error;

/// Environment variable holding the management API base URL.
pub const ENV_URL: &str = "APPID_MANAGEMENT_URL";

/// Environment variable holding the IAM access token.
pub const ENV_IAM_TOKEN: &str = "APPID_IAM_TOKEN";

/// Environment variable holding the request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "APPID_TIMEOUT_SECS";

/// Environment variable enabling insecure (plain HTTP / unverified TLS) mode.
pub const ENV_INSECURE: &str = "APPID_INSECURE";

/// Client settings read from the process environment.
///
/// | Variable               | Required | Meaning                              |
/// |------------------------|----------|--------------------------------------|
/// | `APPID_MANAGEMENT_URL` | yes      | e.g. `https://us-south.appid.cloud.ibm.com` |
/// | `APPID_IAM_TOKEN`      | yes      | IAM access token sent as bearer      |
/// | `APPID_TIMEOUT_SECS`   | no       | per-request timeout                  |
/// | `APPID_INSECURE`       | no       | `1` or `true` for local fakes        |
#[derive(Clone)]
pub struct EnvConfig {
    /// Management API base URL.
    pub url: String,
    /// IAM access token.
    pub iam_token: String,
    /// Per-request timeout, if set.
    pub timeout: Option<Duration>,
    /// Whether insecure mode was requested.
    pub insecure: bool,
}

impl EnvConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary lookup function.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| {
                    Error::configuration(format!("environment variable {} not set", key))
                })
        };

        let url = required(ENV_URL)?;
        let iam_token = required(ENV_IAM_TOKEN)?;

        let timeout = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    Error::configuration(format!(
                        "{} must be a whole number of seconds, got {:?}",
                        ENV_TIMEOUT_SECS, raw
                    ))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let insecure = lookup(ENV_INSECURE)
            .map(|raw| matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            url,
            iam_token,
            timeout,
            insecure,
        })
    }
}

impl std::fmt::Debug for EnvConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvConfig")
            .field("url", &self.url)
            .field("iam_token", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .field("insecure", &self.insecure)
            .finish()
    }
}
