//! # App ID Rust SDK
//!
//! Rust SDK for the IBM Cloud App ID management API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use appid::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::builder()
//!         .url("https://us-south.appid.cloud.ibm.com")
//!         .credentials(BearerCredentialsConfig::new("iam-access-token"))
//!         .build()?;
//!
//!     let tenant = client.tenant("074c2fb3-62b5-451d-a7c3-cf4efdc3266f");
//!
//!     let app = tenant
//!         .applications()
//!         .create("my-app", ApplicationType::SinglePageApp)
//!         .await?;
//!     println!("registered {}", app.client_id);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Key Concepts
//!
//! - **Client Hierarchy**: `Client` → `TenantClient` → resource clients
//!   (`applications()`, `roles()`, `config()`, `idps()`, `cloud_directory_users()`)
//! - **One request per call**: every operation issues exactly one HTTP
//!   request; there is no retry, caching or pagination loop
//! - **Encoding**: identifiers are percent-encoded exactly once, so IDs
//!   containing `/`, `?` or `#` are safe to pass as-is
//! - **Errors**: `NotFound`, `Validation` or a transport kind, see [`ErrorKind`]
//!
//! ## Features
//!
//! - `rest` (default): Enable the reqwest-based HTTPS transport
//! - `rustls` (default): Use rustls for TLS
//! - `native-tls`: Use native TLS (OpenSSL on Linux, Secure Transport on macOS)
//! - `tracing` (default): Emit `tracing` spans and events

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod management;

// Transport layer
pub mod transport;

// Testing utilities
pub mod testing;

#[cfg(feature = "rest")]
mod user_agent;

// Prelude for convenient imports
pub mod prelude;

// Re-export main types at crate root for convenience
pub use client::{Client, ClientBuilder, TenantClient};
pub use error::{Error, ErrorKind, Result};

// Re-export auth types
pub use auth::{BearerCredentialsConfig, Credentials, CredentialsFuture, CredentialsProvider};

// Re-export config types
pub use config::{EnvConfig, TlsConfig};
