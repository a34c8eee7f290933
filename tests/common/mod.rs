//! Local GraphQL stand-in shared by the integration tests.
#![allow(dead_code)]

use axum::{extract::State, http::HeaderMap, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

pub struct MockState {
    pub status: StatusCode,
    pub body: String,
    pub requests: Mutex<Vec<(HeaderMap, Value)>>,
}

async fn graphql(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(request): Json<Value>,
) -> (StatusCode, String) {
    state.requests.lock().unwrap().push((headers, request));
    (state.status, state.body.clone())
}

/// Serve `body` with `status` at `/graphql` on an ephemeral port.
pub async fn serve(status: StatusCode, body: Value) -> (String, Arc<MockState>) {
    let state = Arc::new(MockState {
        status,
        body: body.to_string(),
        requests: Mutex::new(Vec::new()),
    });
    let app = Router::new()
        .route("/graphql", post(graphql))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/graphql", addr), state)
}

pub fn tree_response(entries: Value) -> Value {
    json!({ "data": { "repository": { "object": { "entries": entries } } } })
}
