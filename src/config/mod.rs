//! Configuration types for the App ID SDK.
//!
//! - [`TlsConfig`]: TLS settings for the REST transport
//! - [`EnvConfig`]: settings read from `APPID_*` environment variables

mod env;
mod tls;

pub use env::{ENV_INSECURE, ENV_IAM_TOKEN, ENV_TIMEOUT_SECS, ENV_URL, EnvConfig};
pub use tls::TlsConfig;
