//! Internal client implementation.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::Error;
use crate::management::ManagementPath;
use crate::transport::{
    Method, ResponseFormat, TransportClient, TransportRequest, TransportResponse,
};

pub(crate) struct ClientInner {
    /// The management API base URL.
    pub url: String,

    /// Transport every request is sent through.
    pub transport: Arc<dyn TransportClient>,
}

impl ClientInner {
    /// Sends a request and turns non-2xx responses into errors.
    pub(crate) async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, Error> {
        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(response.into_error())
        }
    }

    /// Makes a GET request and decodes the JSON response.
    pub(crate) async fn get<R>(&self, path: &ManagementPath) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        self.get_with_query(path, Vec::new()).await
    }

    /// Makes a GET request with query pairs and decodes the JSON response.
    pub(crate) async fn get_with_query<R>(
        &self,
        path: &ManagementPath,
        query: Vec<(String, String)>,
    ) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let mut request = TransportRequest::new(Method::Get, path.as_str());
        request.query = query;
        self.execute(request).await?.decode()
    }

    /// Makes a GET request and returns the raw body text.
    pub(crate) async fn get_text(&self, path: &ManagementPath) -> Result<String, Error> {
        let request =
            TransportRequest::new(Method::Get, path.as_str()).with_format(ResponseFormat::Text);
        self.execute(request).await?.text()
    }

    /// Makes a POST request and decodes the JSON response.
    pub(crate) async fn post<T, R>(&self, path: &ManagementPath, body: &T) -> Result<R, Error>
    where
        T: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let request = TransportRequest::new(Method::Post, path.as_str()).with_body(to_body(body)?);
        self.execute(request).await?.decode()
    }

    /// Makes a PUT request and decodes the JSON response.
    pub(crate) async fn put<T, R>(&self, path: &ManagementPath, body: &T) -> Result<R, Error>
    where
        T: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let request = TransportRequest::new(Method::Put, path.as_str()).with_body(to_body(body)?);
        self.execute(request).await?.decode()
    }

    /// Makes a PUT request and ignores the response body.
    pub(crate) async fn put_discard<T>(&self, path: &ManagementPath, body: &T) -> Result<(), Error>
    where
        T: Serialize + Sync + ?Sized,
    {
        let request = TransportRequest::new(Method::Put, path.as_str()).with_body(to_body(body)?);
        self.execute(request).await.map(|_| ())
    }

    /// Makes a DELETE request.
    pub(crate) async fn delete(&self, path: &ManagementPath) -> Result<(), Error> {
        let request = TransportRequest::new(Method::Delete, path.as_str());
        self.execute(request).await.map(|_| ())
    }
}

fn to_body<T>(body: &T) -> Result<serde_json::Value, Error>
where
    T: Serialize + ?Sized,
{
    serde_json::to_value(body).map_err(|e| {
        Error::validation(format!("failed to serialize request body: {}", e)).with_source(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::testing::MockTransport;

    fn inner(mock: &MockTransport) -> ClientInner {
        ClientInner {
            url: "mock://appid".to_string(),
            transport: Arc::new(mock.clone()),
        }
    }

    fn roles_path() -> ManagementPath {
        ManagementPath::tenant("t1").unwrap().segment("roles")
    }

    #[tokio::test]
    async fn test_get_decodes() {
        let mock = MockTransport::new().with_json(
            Method::Get,
            "/management/v4/t1/roles",
            200,
            serde_json::json!({"roles": []}),
        );
        let value: serde_json::Value = inner(&mock).get(&roles_path()).await.unwrap();
        assert_eq!(value, serde_json::json!({"roles": []}));
    }

    #[tokio::test]
    async fn test_non_success_becomes_error() {
        let mock = MockTransport::new().with_response(
            Method::Get,
            "/management/v4/t1/roles",
            TransportResponse::json(404, &serde_json::json!({"message": "tenant not found"}))
                .with_request_id("req_9"),
        );
        let err = inner(&mock)
            .get::<serde_json::Value>(&roles_path())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), "tenant not found");
        assert_eq!(err.request_id(), Some("req_9"));
    }

    #[tokio::test]
    async fn test_post_sends_body() {
        let mock = MockTransport::new().with_json(
            Method::Post,
            "/management/v4/t1/roles",
            201,
            serde_json::json!({"id": "r1", "name": "admin"}),
        );
        let body = serde_json::json!({"name": "admin"});
        let _: serde_json::Value = inner(&mock).post(&roles_path(), &body).await.unwrap();
        let request = mock.last_request().unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.body, Some(body));
    }

    #[tokio::test]
    async fn test_put_discard_ignores_empty_body() {
        let mock = MockTransport::new().with_response(
            Method::Put,
            "/management/v4/t1/roles",
            TransportResponse::no_content(),
        );
        inner(&mock)
            .put_discard(&roles_path(), &serde_json::json!({}))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_get_text_requests_text() {
        let mock = MockTransport::new().with_response(
            Method::Get,
            "/management/v4/t1/config/saml_metadata",
            TransportResponse::new(200, "<EntityDescriptor/>"),
        );
        let path = ManagementPath::tenant("t1")
            .unwrap()
            .segments(&["config", "saml_metadata"]);
        let text = inner(&mock).get_text(&path).await.unwrap();
        assert_eq!(text, "<EntityDescriptor/>");
        assert_eq!(mock.last_request().unwrap().format, ResponseFormat::Text);
    }

    #[tokio::test]
    async fn test_transport_error_passes_through() {
        let mock = MockTransport::new().with_failure(
            Method::Delete,
            "/management/v4/t1/roles",
            || Error::connection("connection refused").with_request_id("req-7"),
        );
        let err = inner(&mock).delete(&roles_path()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Connection);
        assert!(err.is_transport());
        assert_eq!(err.request_id(), Some("req-7"));
    }
}
