//! Authentication for the App ID management API.
//!
//! The management API expects an IBM Cloud IAM access token as a bearer
//! token. Obtaining and refreshing that token is the caller's concern; the
//! SDK only attaches it to each request.
//!
//! - [`BearerCredentialsConfig`]: a fixed IAM access token
//! - [`CredentialsProvider`]: a source asked for a token before every request
//! - [`Credentials`]: either of the above, accepted by the client builder
//!
//! ```rust,ignore
//! use appid::{BearerCredentialsConfig, Client};
//!
//! let client = Client::builder()
//!     .url("https://us-south.appid.cloud.ibm.com")
//!     .credentials(BearerCredentialsConfig::new(iam_token))
//!     .build()?;
//! ```

mod credentials;
mod provider;

pub use credentials::{BearerCredentialsConfig, Credentials};
pub use provider::{CredentialsFuture, CredentialsProvider};
