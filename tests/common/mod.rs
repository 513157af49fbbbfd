//! In-process stand-in for the Portainer API used by the integration tests.

#![allow(dead_code)]

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use portainer_control_lib::proxy::config::Credentials;
use portainer_control_lib::proxy::upstream::UpstreamClient;
use portainer_control_lib::proxy::AuthenticatedProxy;
use std::sync::{Arc, Mutex};
use url::Url;

pub const ENDPOINT_ID: &str = "1";

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub body: String,
}

/// Canned responses for each downstream route
#[derive(Debug, Clone)]
pub struct Behavior {
    pub auth: (u16, String),
    pub list: (u16, String),
    pub action: (u16, String),
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            auth: (200, r#"{"jwt":"abc"}"#.to_string()),
            list: (200, "[]".to_string()),
            action: (204, String::new()),
        }
    }
}

struct FakeState {
    behavior: Behavior,
    calls: Mutex<Vec<RecordedCall>>,
}

pub struct FakePortainer {
    pub base_url: Url,
    state: Arc<FakeState>,
    handle: tokio::task::JoinHandle<()>,
}

impl FakePortainer {
    pub async fn start(behavior: Behavior) -> Self {
        let state = Arc::new(FakeState {
            behavior,
            calls: Mutex::new(Vec::new()),
        });
        let app = Router::new().fallback(respond).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: Url::parse(&format!("http://{}", addr)).unwrap(),
            state,
            handle,
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.calls.lock().unwrap().clone()
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            base_url: self.base_url.clone(),
            username: "admin".to_string(),
            password: "s3cret".to_string(),
            endpoint_id: ENDPOINT_ID.to_string(),
        }
    }

    pub fn proxy(&self) -> AuthenticatedProxy {
        let upstream = UpstreamClient::new(test_client(), self.base_url.clone());
        AuthenticatedProxy::new(upstream, self.credentials())
    }
}

impl Drop for FakePortainer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn respond(
    State(state): State<Arc<FakeState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    state.calls.lock().unwrap().push(RecordedCall {
        method,
        path: path.clone(),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&body).to_string(),
    });

    let behavior = &state.behavior;
    let (status, body) = if path == "/api/auth" {
        &behavior.auth
    } else if path.ends_with("/containers/json") {
        &behavior.list
    } else {
        &behavior.action
    };

    let status = StatusCode::from_u16(*status).unwrap();
    if status == StatusCode::NO_CONTENT {
        status.into_response()
    } else {
        (status, body.clone()).into_response()
    }
}

pub fn action_path(container_id: &str, operation: &str) -> String {
    format!(
        "/api/endpoints/{}/docker/containers/{}/{}",
        ENDPOINT_ID, container_id, operation
    )
}

/// Direct client; ambient HTTP_PROXY settings must not catch loopback traffic
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
