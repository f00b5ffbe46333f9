//! User-Agent header sent with every management API request.
//!
//! App ID support can tell SDK traffic and versions apart by this string.

use std::sync::OnceLock;

const SDK_NAME: &str = "appid-rust";
const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");
const RUST_VERSION: &str = env!("CARGO_PKG_RUST_VERSION");

static USER_AGENT: OnceLock<String> = OnceLock::new();

/// Returns the User-Agent string, computed once.
///
/// Format: `appid-rust/0.1.0 (linux/x86_64; rust/1.92)`
pub fn user_agent() -> &'static str {
    USER_AGENT.get_or_init(|| {
        let os = match std::env::consts::OS {
            "macos" => "darwin",
            os => os,
        };
        format!(
            "{SDK_NAME}/{SDK_VERSION} ({os}/{arch}; rust/{RUST_VERSION})",
            arch = std::env::consts::ARCH,
        )
    })
}
