//! Throwaway session backend for tests that exercise real HTTP.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::header::{CACHE_CONTROL, COOKIE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use crate::config::SessionApiTimeouts;
use crate::services::session_api::SessionApi;

pub const VALID_COOKIE: &str = "SESSION=valid-token";

/// Headers the backend saw on one session request.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub cookie: Option<String>,
    pub cache_control: Option<String>,
}

#[derive(Clone, Default)]
struct BackendState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockSessionBackend {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockSessionBackend {
    /// Session endpoint answering 200 for [`VALID_COOKIE`], 401 otherwise.
    pub fn session_endpoint(&self) -> String {
        format!("http://{}/api/auth/session", self.addr)
    }

    /// Session endpoint answering 200 with a non-JSON body.
    pub fn malformed_endpoint(&self) -> String {
        format!("http://{}/malformed/auth/session", self.addr)
    }

    pub fn api(&self) -> SessionApi {
        SessionApi::new(self.session_endpoint(), test_timeouts()).unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn test_timeouts() -> SessionApiTimeouts {
    SessionApiTimeouts { request_secs: 5, connect_secs: 1 }
}

pub fn session_json() -> serde_json::Value {
    serde_json::json!({
        "userId": "7d3f4c1a-2b6e-4f0a-9c8d-1e2f3a4b5c6d",
        "email": "grace@example.com",
        "name": "Grace Hopper",
        "roles": ["ADMIN"],
        "companyId": "c0ffee00-0000-4000-8000-000000000001"
    })
}

pub async fn spawn_backend() -> MockSessionBackend {
    let state = BackendState::default();
    let requests = state.requests.clone();
    let app = Router::new()
        .route("/api/auth/session", get(session))
        .route("/malformed/auth/session", get(malformed))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockSessionBackend { addr, requests }
}

fn header_string(headers: &HeaderMap, name: axum::http::HeaderName) -> Option<String> {
    headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned)
}

async fn session(State(state): State<BackendState>, headers: HeaderMap) -> Response {
    let cookie = header_string(&headers, COOKIE);
    state.requests.lock().unwrap().push(RecordedRequest {
        cookie: cookie.clone(),
        cache_control: header_string(&headers, CACHE_CONTROL),
    });

    let authenticated = cookie.is_some_and(|c| c.split("; ").any(|pair| pair == VALID_COOKIE));
    if !authenticated {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    axum::Json(session_json()).into_response()
}

async fn malformed() -> &'static str {
    "<html>sign in</html>"
}
