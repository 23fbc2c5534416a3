#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;

use harpal_client::{ApiClient, Session};

/// One request as the mock backend saw it.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<serde_json::Value>,
}

#[derive(Clone, Default)]
struct MockState {
    routes: Arc<HashMap<(Method, String), (u16, String)>>,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

/// In-process stand-in for the REST backend.
///
/// Answers canned `(status, body)` pairs keyed by method and path and
/// records every request. Unknown routes answer 404 with an empty body.
pub struct MockBackend {
    pub base_url: String,
    state: MockState,
}

pub struct MockBuilder {
    routes: HashMap<(Method, String), (u16, String)>,
}

impl MockBuilder {
    pub fn route(mut self, method: Method, path: &str, status: u16, body: &str) -> Self {
        self.routes
            .insert((method, path.to_string()), (status, body.to_string()));
        self
    }

    pub fn json(self, method: Method, path: &str, status: u16, body: serde_json::Value) -> Self {
        self.route(method, path, status, &body.to_string())
    }

    pub async fn start(self) -> MockBackend {
        let state = MockState {
            routes: Arc::new(self.routes),
            seen: Arc::default(),
        };
        let app = Router::new()
            .fallback(answer)
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        MockBackend {
            base_url: format!("http://{addr}/api"),
            state,
        }
    }
}

impl MockBackend {
    pub fn builder() -> MockBuilder {
        MockBuilder {
            routes: HashMap::new(),
        }
    }

    pub fn client(&self, session: Session) -> ApiClient {
        ApiClient::new(self.base_url.clone(), session)
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.state.seen.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> SeenRequest {
        self.requests().pop().expect("no request reached the mock backend")
    }
}

async fn answer(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header = |name: axum::http::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let path = uri.path().to_string();
    state.seen.lock().unwrap().push(SeenRequest {
        method: method.clone(),
        path: path.clone(),
        authorization: header(AUTHORIZATION),
        content_type: header(CONTENT_TYPE),
        body: serde_json::from_slice(&body).ok(),
    });

    match state.routes.get(&(method, path)) {
        Some((status, body)) => (
            StatusCode::from_u16(*status).unwrap(),
            [(CONTENT_TYPE, "application/json")],
            body.clone(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// A base URL nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api")
}
