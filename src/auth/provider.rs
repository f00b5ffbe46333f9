//! Credentials provider trait for dynamic token sources.

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::Error;

/// A type alias for the boxed future returned by credentials providers.
pub type CredentialsFuture<'a> = BoxFuture<'a, Result<String, Error>>;

/// Trait for providing IAM access tokens dynamically.
///
/// The SDK calls [`get_token`](Self::get_token) before every request and
/// sends the result as a bearer token. Caching and refreshing the token is
/// left to the implementation.
///
/// ## Object Safety
///
/// This trait is object-safe and can be used as `Arc<dyn CredentialsProvider>`.
///
/// ## Example: Environment Variable Provider
///
/// ```rust
/// use appid::CredentialsProvider;
///
/// struct EnvTokenProvider {
///     env_var: String,
/// }
///
/// impl CredentialsProvider for EnvTokenProvider {
///     fn get_token(&self) -> appid::auth::CredentialsFuture<'_> {
///         let env_var = self.env_var.clone();
///         Box::pin(async move {
///             std::env::var(&env_var).map_err(|_| {
///                 appid::Error::configuration(format!("environment variable {} not set", env_var))
///             })
///         })
///     }
/// }
/// ```
pub trait CredentialsProvider: Send + Sync {
    /// Returns a future that resolves to a bearer token.
    ///
    /// # Errors
    ///
    /// Return an error if the token cannot be obtained. The SDK propagates
    /// it to the caller without sending the request.
    fn get_token(&self) -> CredentialsFuture<'_>;
}

impl<T: CredentialsProvider + ?Sized> CredentialsProvider for Arc<T> {
    fn get_token(&self) -> CredentialsFuture<'_> {
        (**self).get_token()
    }
}

impl<T: CredentialsProvider + ?Sized> CredentialsProvider for Box<T> {
    fn get_token(&self) -> CredentialsFuture<'_> {
        (**self).get_token()
    }
}
