//! Stub member backend served with hyper.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::header::{HeaderMap, AUTHORIZATION, CONTENT_TYPE};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use member_admin_core::config::AdminConfig;

/// How long the `slow` member takes to answer. Longer than any timeout a
/// client would commonly default to.
pub const SLOW_RESPONSE_DELAY: Duration = Duration::from_millis(5500);

/// Request as seen by the stub.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is JSON")
    }
}

#[derive(Clone, Copy)]
enum Route {
    Collection,
    Member,
}

pub struct StubState {
    router: matchit::Router<Route>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl StubState {
    fn new() -> Self {
        let mut router = matchit::Router::new();
        router
            .insert("/admin/members", Route::Collection)
            .expect("Failed to insert /admin/members route");
        router
            .insert("/admin/members/{id}", Route::Member)
            .expect("Failed to insert /admin/members/{id} route");
        Self {
            router,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Canned backend behaviour keyed by member id:
    /// `jane`, `bob` succeed, `slow` succeeds late, `self` is forbidden,
    /// `broken` fails.
    fn respond(&self, method: &Method, path: &str) -> (StatusCode, String) {
        let matched = match self.router.at(path) {
            Ok(matched) => matched,
            Err(_) => return (StatusCode::NOT_FOUND, String::new()),
        };
        let id = matched.params.get("id");
        match *matched.value {
            Route::Collection if method == Method::GET => (
                StatusCode::OK,
                serde_json::json!([
                    {"id": "jane", "name": "Jane Doe", "email": "jane@x.com",
                     "phoneNumber": "5551234567", "role": "USER"},
                    {"id": "bob", "name": "Bob", "email": "bob@x.com", "role": "ADMIN"},
                    {"name": "No Id"}
                ])
                .to_string(),
            ),
            Route::Collection => (StatusCode::METHOD_NOT_ALLOWED, String::new()),
            Route::Member => match id {
                Some("jane") if method == Method::GET => (
                    StatusCode::OK,
                    serde_json::json!({"id": "jane", "name": "Jane Doe", "email": "jane@x.com",
                                       "phoneNumber": "5551234567", "role": "USER"})
                    .to_string(),
                ),
                Some("jane") | Some("bob") | Some("slow") if method == Method::PUT => {
                    (StatusCode::OK, "{}".to_string())
                }
                Some("jane") | Some("bob") if method == Method::DELETE => {
                    (StatusCode::NO_CONTENT, String::new())
                }
                Some("self") => (
                    StatusCode::FORBIDDEN,
                    r#"{"message": "You cannot modify your own account"}"#.to_string(),
                ),
                Some("broken") => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    r#"{"error": "database unavailable"}"#.to_string(),
                ),
                _ => (StatusCode::NOT_FOUND, String::new()),
            },
        }
    }
}

/// Running stub server.
pub struct StubServer {
    pub addr: SocketAddr,
    pub state: Arc<StubState>,
}

impl StubServer {
    pub fn config(&self) -> AdminConfig {
        AdminConfig {
            base_url: format!("http://{}", self.addr),
            request_timeout_ms: Some(2000),
            use_system_proxy: false,
            ..Default::default()
        }
    }
}

/// Starts the stub on an ephemeral port.
pub async fn spawn_stub() -> StubServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = Arc::new(StubState::new());

    let shared = Arc::clone(&state);
    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let state = Arc::clone(&shared);
            tokio::spawn(async move {
                let service = service_fn(move |req| handle_request(req, Arc::clone(&state)));
                if let Err(err) = http1::Builder::new()
                    .serve_connection(TokioIo::new(stream), service)
                    .await
                {
                    eprintln!("Error serving connection: {}", err);
                }
            });
        }
    });

    StubServer { addr, state }
}

/// Address with nothing listening on it.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

async fn handle_request(
    req: Request<Incoming>,
    state: Arc<StubState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let authorization = header_value(req.headers(), AUTHORIZATION);
    let content_type = header_value(req.headers(), CONTENT_TYPE);
    let body = req
        .into_body()
        .collect()
        .await
        .map(|collected| collected.to_bytes().to_vec())
        .unwrap_or_default();

    if path.ends_with("/slow") {
        tokio::time::sleep(SLOW_RESPONSE_DELAY).await;
    }
    let (status, response_body) = state.respond(&method, &path);
    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        path,
        authorization,
        content_type,
        body,
    });

    let response = Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(Full::new(Bytes::from(response_body)))
        .unwrap();
    Ok(response)
}

fn header_value(headers: &HeaderMap, name: hyper::header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
