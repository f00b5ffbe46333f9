//! Error kind enumeration for categorizing SDK errors.

/// Categorization of SDK errors.
///
/// This enum provides a stable interface for matching on error types. The
/// App ID management API surfaces three families of failure:
///
/// | Family        | `ErrorKind`                                             |
/// |---------------|---------------------------------------------------------|
/// | not found     | `NotFound`                                              |
/// | validation    | `Validation`                                            |
/// | transport     | everything for which [`is_transport`](Self::is_transport) is `true` |
///
/// `Configuration` is raised locally before any request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The tenant or resource does not exist.
    ///
    /// HTTP: 404 Not Found
    #[error("not found")]
    NotFound,

    /// The payload or an identifier was rejected.
    ///
    /// HTTP: 400 Bad Request, 422 Unprocessable Entity. Also raised
    /// locally when a required identifier is empty.
    #[error("validation error")]
    Validation,

    /// The IAM token is missing, malformed, or expired.
    ///
    /// HTTP: 401 Unauthorized
    #[error("unauthorized")]
    Unauthorized,

    /// The token is valid but lacks access to the tenant.
    ///
    /// HTTP: 403 Forbidden
    #[error("forbidden")]
    Forbidden,

    /// Conflict with existing resource state.
    ///
    /// HTTP: 409 Conflict
    #[error("conflict")]
    Conflict,

    /// Rate limit exceeded.
    ///
    /// HTTP: 429 Too Many Requests. See `Error::retry_after()`.
    #[error("rate limited")]
    RateLimited,

    /// Service temporarily unavailable.
    ///
    /// HTTP: 502 Bad Gateway, 503 Service Unavailable
    #[error("service unavailable")]
    Unavailable,

    /// Request timed out.
    ///
    /// HTTP: 504 Gateway Timeout or client-side timeout
    #[error("timeout")]
    Timeout,

    /// Internal server error.
    ///
    /// HTTP: 500 Internal Server Error
    #[error("internal error")]
    Internal,

    /// Connection error (DNS, TLS handshake, network unreachable).
    #[error("connection error")]
    Connection,

    /// Transport layer error that fits no more specific category.
    #[error("transport error")]
    Transport,

    /// The response body could not be decoded.
    #[error("invalid response")]
    InvalidResponse,

    /// Configuration error (invalid URL, missing credentials).
    #[error("configuration error")]
    Configuration,
}

impl ErrorKind {
    /// Returns `true` if this kind belongs to the transport family, i.e.
    /// the request failed for reasons other than a missing resource or a
    /// rejected payload.
    ///
    /// # Example
    ///
    /// ```rust
    /// use appid::ErrorKind;
    ///
    /// assert!(ErrorKind::Unauthorized.is_transport());
    /// assert!(!ErrorKind::NotFound.is_transport());
    /// assert!(!ErrorKind::Validation.is_transport());
    /// ```
    #[inline]
    pub fn is_transport(&self) -> bool {
        !matches!(
            self,
            ErrorKind::NotFound | ErrorKind::Validation | ErrorKind::Configuration
        )
    }

    /// Returns `true` if this error kind is generally safe to retry.
    ///
    /// The SDK never retries on its own; this is a hint for callers.
    #[inline]
    pub fn is_retriable(&self) -> bool {
        matches!(
            self,
            ErrorKind::Unavailable
                | ErrorKind::Timeout
                | ErrorKind::RateLimited
                | ErrorKind::Connection
        )
    }

    /// Returns the default HTTP status code for this error kind.
    #[inline]
    pub fn http_status_code(&self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::Validation => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::Conflict => 409,
            ErrorKind::RateLimited => 429,
            ErrorKind::Internal | ErrorKind::Configuration => 500,
            ErrorKind::Unavailable => 503,
            ErrorKind::Timeout => 504,
            ErrorKind::Connection | ErrorKind::Transport | ErrorKind::InvalidResponse => 502,
        }
    }

    /// Creates an `ErrorKind` from an HTTP status code.
    ///
    /// Only meaningful for non-2xx statuses; anything unrecognized maps to
    /// [`ErrorKind::Transport`].
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 | 422 => ErrorKind::Validation,
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            409 => ErrorKind::Conflict,
            429 => ErrorKind::RateLimited,
            500 => ErrorKind::Internal,
            502 | 503 => ErrorKind::Unavailable,
            504 => ErrorKind::Timeout,
            _ => ErrorKind::Transport,
        }
    }
}
