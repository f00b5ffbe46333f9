//! Error types for the App ID SDK.
//!
//! Every operation returns [`Result<T>`], whose error carries an
//! [`ErrorKind`]. The management API distinguishes three families:
//!
//! - [`ErrorKind::NotFound`]: the tenant or resource does not exist
//! - [`ErrorKind::Validation`]: App ID rejected the payload
//! - transport kinds ([`ErrorKind::is_transport`]): everything else that
//!   went wrong between the SDK and the service
//!
//! Errors from the transport are surfaced unchanged; the SDK never retries.
//!
//! ```rust,ignore
//! match client.tenant("abc123").roles().get("role_1").await {
//!     Ok(role) => println!("{}", role.name),
//!     Err(e) if e.is_not_found() => println!("no such role"),
//!     Err(e) => return Err(e),
//! }
//! ```

#[allow(clippy::module_inception)]
mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// A specialized `Result` type for App ID operations.
pub type Result<T> = std::result::Result<T, Error>;
