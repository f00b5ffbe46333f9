//! Integration tests for the App ID Rust SDK.
//!
//! The suite drives the public API end to end against two backends:
//!
//! - `wiremock`: the real REST transport talking to a local HTTP server,
//!   for wire shapes, encoding and error mapping
//! - `InMemoryAppId`: the in-memory service, for stateful behavior
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test integration
//!
//! # With SDK logs
//! RUST_LOG=appid=debug cargo test --test integration -- --nocapture
//! ```
//!
//! # Live Environment
//!
//! `live_tests` runs read-only calls against a real tenant when these are
//! set, and is skipped otherwise:
//!
//! - `APPID_MANAGEMENT_URL`, `APPID_IAM_TOKEN`: see `appid::EnvConfig`
//! - `APPID_TENANT_ID`: the tenant to read

mod applications_tests;
mod common;
mod config_tests;
mod live_tests;
mod properties_tests;
mod roles_tests;
mod users_tests;
