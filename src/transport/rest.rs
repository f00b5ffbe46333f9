//! REST transport implementation using reqwest.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, RETRY_AFTER};
use url::Url;

use crate::Error;
use crate::auth::Credentials;
use crate::config::TlsConfig;
use crate::error::ErrorKind;
use crate::transport::traits::{
    Method, ResponseFormat, TransportClient, TransportRequest, TransportResponse,
};
use crate::user_agent;

/// Response headers that may carry a request ID, in order of preference.
const REQUEST_ID_HEADERS: [&str; 2] = ["x-request-id", "x-correlation-id"];

/// REST transport using reqwest.
///
/// Attaches the bearer token from the configured [`Credentials`] to every
/// request and returns the raw response for the client to interpret.
#[derive(Clone)]
pub struct RestTransport {
    client: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl std::fmt::Debug for RestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestTransport")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl RestTransport {
    /// Creates a new REST transport.
    ///
    /// `base_url` is the regional management endpoint, e.g.
    /// `https://us-south.appid.cloud.ibm.com`. A path prefix is kept, so
    /// the API may be reached through a proxy mounted below `/`.
    pub fn new(
        base_url: &Url,
        credentials: Credentials,
        tls_config: &TlsConfig,
        timeout: Duration,
    ) -> Result<Self, Error> {
        let mut client_builder = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent::user_agent());

        #[cfg(any(feature = "rustls", feature = "native-tls"))]
        {
            if tls_config.skip_verification {
                client_builder = client_builder.danger_accept_invalid_certs(true);
            }

            if let Some(ref ca_cert_file) = tls_config.ca_cert_file {
                let cert_pem = std::fs::read(ca_cert_file).map_err(|e| {
                    Error::new(
                        ErrorKind::Configuration,
                        format!("Failed to read certificate {:?}: {}", ca_cert_file, e),
                    )
                })?;
                let cert = reqwest::Certificate::from_pem(&cert_pem).map_err(|e| {
                    Error::new(
                        ErrorKind::Configuration,
                        format!("Invalid certificate {:?}: {}", ca_cert_file, e),
                    )
                })?;
                client_builder = client_builder.add_root_certificate(cert);
            }

            if let Some(ref ca_cert_pem) = tls_config.ca_cert_pem {
                let cert = reqwest::Certificate::from_pem(ca_cert_pem.as_bytes()).map_err(|e| {
                    Error::new(
                        ErrorKind::Configuration,
                        format!("Invalid CA certificate PEM: {}", e),
                    )
                })?;
                client_builder = client_builder.add_root_certificate(cert);
            }
        }
        #[cfg(not(any(feature = "rustls", feature = "native-tls")))]
        let _ = tls_config;

        let client = client_builder.build().map_err(|e| {
            Error::new(
                ErrorKind::Configuration,
                format!("Failed to create HTTP client: {}", e),
            )
        })?;

        Ok(Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the full URL for a request.
    ///
    /// The path is appended verbatim so its percent-encoding survives.
    fn build_url(&self, request: &TransportRequest) -> Result<Url, Error> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, request.path))
            .map_err(|e| Error::configuration(format!("Invalid URL path: {}", e)).with_source(e))?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }
        Ok(url)
    }

    /// Builds request headers, resolving the bearer token.
    async fn build_headers(&self, request: &TransportRequest) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        let accept = match request.format {
            ResponseFormat::Json => HeaderValue::from_static("application/json"),
            ResponseFormat::Text => HeaderValue::from_static("*/*"),
        };
        headers.insert(ACCEPT, accept);
        if request.body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        let token = self.credentials.token().await?;
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| Error::new(ErrorKind::Unauthorized, "Invalid auth token format"))?,
        );

        Ok(headers)
    }
}

#[async_trait::async_trait]
impl TransportClient for RestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, Error> {
        let url = self.build_url(&request)?;
        let headers = self.build_headers(&request).await?;

        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        #[cfg(feature = "tracing")]
        let started = std::time::Instant::now();

        let mut builder = self.client.request(method, url).headers(headers);
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let request_id = REQUEST_ID_HEADERS.iter().find_map(|name| {
            response
                .headers()
                .get(*name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        });
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs);

        let body = response.bytes().await.map_err(map_reqwest_error)?;

        #[cfg(feature = "tracing")]
        {
            let elapsed_ms = started.elapsed().as_millis() as u64;
            if (200..300).contains(&status) {
                tracing::debug!(
                    method = %request.method,
                    path = %request.path,
                    status,
                    elapsed_ms,
                    "app id request completed"
                );
            } else {
                tracing::warn!(
                    method = %request.method,
                    path = %request.path,
                    status,
                    elapsed_ms,
                    request_id = request_id.as_deref().unwrap_or("-"),
                    "app id request failed"
                );
            }
        }

        Ok(TransportResponse {
            status,
            body,
            request_id,
            retry_after,
        })
    }

    fn name(&self) -> &'static str {
        "rest"
    }
}

/// Maps reqwest errors to SDK errors.
fn map_reqwest_error(e: reqwest::Error) -> Error {
    let kind = if e.is_timeout() {
        ErrorKind::Timeout
    } else if e.is_connect() {
        ErrorKind::Connection
    } else if e.is_decode() || e.is_body() {
        ErrorKind::InvalidResponse
    } else {
        ErrorKind::Transport
    };
    Error::new(kind, format!("HTTP request failed: {}", e)).with_source(e)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::auth::BearerCredentialsConfig;
    use crate::management::ManagementPath;

    fn transport(base: &str) -> RestTransport {
        RestTransport::new(
            &Url::parse(base).unwrap(),
            BearerCredentialsConfig::new("token").into(),
            &TlsConfig::default(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_build_url_preserves_encoding() {
        let rest = transport("https://us-south.appid.cloud.ibm.com");
        let request = TransportRequest::new(
            Method::Get,
            "/management/v4/a%2Fb/applications/c%3Fd%23e",
        );
        let url = rest.build_url(&request).unwrap();
        assert_eq!(url.path(), "/management/v4/a%2Fb/applications/c%3Fd%23e");
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());
    }

    #[test]
    fn test_build_url_keeps_prefix() {
        let rest = transport("https://proxy.example.com/appid/");
        let request = TransportRequest::new(Method::Get, "/management/v4/t/roles");
        let url = rest.build_url(&request).unwrap();
        assert_eq!(url.path(), "/appid/management/v4/t/roles");
    }

    #[test_case("..." ; "three dots")]
    #[test_case(".a" ; "leading dot")]
    #[test_case("a/.." ; "embedded parent")]
    #[test_case("./x" ; "embedded current")]
    #[test_case("%2E%2E" ; "encoded parent")]
    fn test_build_url_never_resolves_ids(id: &str) {
        let rest = transport("https://us-south.appid.cloud.ibm.com");
        let path = ManagementPath::tenant("t")
            .unwrap()
            .segment("applications")
            .id("client id", id)
            .unwrap()
            .segment("roles");
        let url = rest
            .build_url(&TransportRequest::new(Method::Get, path.as_str()))
            .unwrap();
        assert_eq!(url.path(), path.as_str());
    }

    #[test]
    fn test_dot_segment_ids_never_reach_url() {
        for id in [".", ".."] {
            let err = ManagementPath::tenant("t")
                .unwrap()
                .segment("roles")
                .id("role id", id)
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation);
        }
        let rest = transport("https://us-south.appid.cloud.ibm.com");
        let url = rest
            .build_url(&TransportRequest::new(Method::Delete, "/management/v4/t/roles/.."))
            .unwrap();
        // What the transport would send had the id been accepted.
        assert_eq!(url.path(), "/management/v4/t/");
    }

    #[test]
    fn test_build_url_encodes_query() {
        let rest = transport("https://us-south.appid.cloud.ibm.com");
        let request = TransportRequest::new(Method::Get, "/management/v4/t/cloud_directory/Users")
            .with_query("startIndex", "0")
            .with_query("query", "a&b c");
        let url = rest.build_url(&request).unwrap();
        assert_eq!(url.query(), Some("startIndex=0&query=a%26b+c"));
    }

    #[tokio::test]
    async fn test_headers_for_json_body() {
        let rest = transport("https://us-south.appid.cloud.ibm.com");
        let request = TransportRequest::new(Method::Post, "/management/v4/t/roles")
            .with_body(serde_json::json!({"name": "admin"}));
        let headers = rest.build_headers(&request).await.unwrap();
        assert_eq!(headers[ACCEPT], "application/json");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[AUTHORIZATION], "Bearer token");
    }

    #[tokio::test]
    async fn test_headers_for_text() {
        let rest = transport("https://us-south.appid.cloud.ibm.com");
        let request = TransportRequest::new(Method::Get, "/management/v4/t/config/saml_metadata")
            .with_format(ResponseFormat::Text);
        let headers = rest.build_headers(&request).await.unwrap();
        assert_eq!(headers[ACCEPT], "*/*");
        assert!(headers.get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_debug_hides_credentials() {
        let rest = transport("https://us-south.appid.cloud.ibm.com");
        let debug = format!("{:?}", rest);
        assert!(debug.contains("us-south"));
        assert!(!debug.contains("token"));
    }
}
