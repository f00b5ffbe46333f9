//! Transport trait definitions and request/response types.

use std::fmt;
use std::time::Duration;

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::Error;

/// HTTP methods used by the management API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl Method {
    /// Returns the method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The representation the caller expects back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// A JSON document (`Accept: application/json`).
    #[default]
    Json,
    /// Raw text such as SAML metadata XML (`Accept: */*`).
    Text,
}

/// A single request handed to a [`TransportClient`].
///
/// `path` is already percent-encoded (see
/// [`ManagementPath`](crate::management::ManagementPath)); transports must
/// send it as-is, without decoding or re-encoding. Query pairs are raw and
/// encoded by the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    /// HTTP method.
    pub method: Method,
    /// Percent-encoded absolute path, e.g. `/management/v4/abc123/roles`.
    pub path: String,
    /// Raw (unencoded) query pairs, in order.
    pub query: Vec<(String, String)>,
    /// JSON request body.
    pub body: Option<serde_json::Value>,
    /// Expected response representation.
    pub format: ResponseFormat,
}

impl TransportRequest {
    /// Creates a request without query or body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            format: ResponseFormat::Json,
        }
    }

    /// Appends a query pair.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets the expected response representation.
    #[must_use]
    pub fn with_format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }

    /// Returns the value of the first query pair named `key`.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A raw response returned by a [`TransportClient`].
///
/// Transports return responses for every HTTP status; the client turns
/// non-2xx statuses into [`Error`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw body bytes.
    pub body: Bytes,
    /// Server-assigned request ID, if the response carried one.
    pub request_id: Option<String>,
    /// `Retry-After` hint, if the response carried one.
    pub retry_after: Option<Duration>,
}

impl TransportResponse {
    /// Creates a response with the given status and body.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
            request_id: None,
            retry_after: None,
        }
    }

    /// Creates a response whose body is the given JSON document.
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self::new(status, body.to_string())
    }

    /// Creates an empty `204 No Content` response.
    pub fn no_content() -> Self {
        Self::new(204, Bytes::new())
    }

    /// Sets the request ID.
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decodes the body as JSON.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_slice(&self.body).map_err(|e| {
            Error::invalid_response(format!("failed to parse response: {}", e)).with_source(e)
        })
    }

    /// Returns the body as UTF-8 text.
    pub fn text(&self) -> Result<String, Error> {
        String::from_utf8(self.body.to_vec()).map_err(|e| {
            Error::invalid_response(format!("response is not valid UTF-8: {}", e)).with_source(e)
        })
    }

    /// Converts a non-2xx response into an [`Error`].
    pub fn into_error(self) -> Error {
        let body = String::from_utf8_lossy(&self.body);
        let mut err = Error::from_status(self.status, &body);
        if let Some(request_id) = self.request_id {
            err = err.with_request_id(request_id);
        }
        if let Some(retry_after) = self.retry_after {
            err = err.with_retry_after(retry_after);
        }
        err
    }
}

/// The HTTP collaborator every resource client delegates to.
///
/// Implementations own authentication, TLS, timeouts and connection
/// handling. They must return `Ok` for any HTTP status the service
/// answered with and `Err` only when no response was obtained.
///
/// The SDK ships [`RestTransport`](crate::transport::RestTransport) (feature
/// `rest`) plus the fakes in [`testing`](crate::testing).
#[async_trait::async_trait]
pub trait TransportClient: Send + Sync {
    /// Sends one request and returns the raw response.
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, Error>;

    /// Short name for diagnostics, e.g. `"rest"`.
    fn name(&self) -> &'static str;
}
