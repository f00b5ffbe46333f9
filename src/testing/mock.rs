//! Scripted transport for unit tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::client::Client;
use crate::transport::{Method, TransportClient, TransportRequest, TransportResponse};
use crate::Error;

/// A transport that answers from scripted routes and records every request.
///
/// Routes are matched on method and exact (encoded) path; the most recently
/// registered route wins. Unmatched requests get a `404` JSON response.
/// Clones share the same routes and request log.
///
/// ```rust
/// use appid::testing::MockTransport;
/// use appid::transport::Method;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let mock = MockTransport::new().with_json(
///     Method::Get,
///     "/management/v4/abc123/roles",
///     200,
///     serde_json::json!({"roles": [{"id": "r1", "name": "admin"}]}),
/// );
///
/// let roles = mock.client().tenant("abc123").roles().list().await.unwrap();
/// assert_eq!(roles[0].name, "admin");
/// assert_eq!(mock.request_count(), 1);
/// # });
/// ```
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<MockState>,
}

#[derive(Default)]
struct MockState {
    routes: Mutex<Vec<Route>>,
    requests: Mutex<Vec<TransportRequest>>,
    request_count: AtomicU64,
}

struct Route {
    method: Method,
    path: String,
    reply: Reply,
}

type ErrorFactory = Box<dyn Fn() -> Error + Send + Sync>;

enum Reply {
    Response(TransportResponse),
    Failure(ErrorFactory),
}

impl MockTransport {
    /// Creates a mock with no routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `method path` with `response`.
    #[must_use]
    pub fn with_response(
        self,
        method: Method,
        path: impl Into<String>,
        response: TransportResponse,
    ) -> Self {
        self.push(method, path.into(), Reply::Response(response));
        self
    }

    /// Answers `method path` with a JSON body and the given status.
    #[must_use]
    pub fn with_json(
        self,
        method: Method,
        path: impl Into<String>,
        status: u16,
        body: serde_json::Value,
    ) -> Self {
        self.with_response(method, path, TransportResponse::json(status, &body))
    }

    /// Fails `method path` without a response, as a broken connection would.
    ///
    /// `make_error` runs once per matching request, so the returned error
    /// keeps its status, request ID, retry hint and source intact.
    #[must_use]
    pub fn with_failure<F>(self, method: Method, path: impl Into<String>, make_error: F) -> Self
    where
        F: Fn() -> Error + Send + Sync + 'static,
    {
        self.push(method, path.into(), Reply::Failure(Box::new(make_error)));
        self
    }

    /// Returns every request received so far, oldest first.
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.state.requests.lock().clone()
    }

    /// Returns the most recent request.
    pub fn last_request(&self) -> Option<TransportRequest> {
        self.state.requests.lock().last().cloned()
    }

    /// Returns the number of requests received.
    pub fn request_count(&self) -> u64 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// Returns a [`Client`] backed by this mock.
    pub fn client(&self) -> Client {
        Client::with_transport("mock://appid", Arc::new(self.clone()))
    }

    fn push(&self, method: Method, path: String, reply: Reply) {
        self.state.routes.lock().push(Route {
            method,
            path,
            reply,
        });
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("routes", &self.state.routes.lock().len())
            .field("request_count", &self.request_count())
            .finish()
    }
}

#[async_trait::async_trait]
impl TransportClient for MockTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, Error> {
        self.state.request_count.fetch_add(1, Ordering::Relaxed);
        self.state.requests.lock().push(request.clone());

        let routes = self.state.routes.lock();
        let route = routes
            .iter()
            .rev()
            .find(|route| route.method == request.method && route.path == request.path);

        match route.map(|route| &route.reply) {
            Some(Reply::Response(response)) => Ok(response.clone()),
            Some(Reply::Failure(make_error)) => Err(make_error()),
            None => Ok(TransportResponse::json(
                404,
                &serde_json::json!({
                    "message": format!("no mock response for {} {}", request.method, request.path)
                }),
            )),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
