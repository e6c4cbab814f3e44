#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use plotline_api::auth::jwt::{generate_access_token, JwtConfig};
use plotline_api::config::ServerConfig;
use plotline_api::router::build_app_router;
use plotline_api::state::AppState;
use plotline_core::store::memory::MemoryStore;
use plotline_core::types::DbId;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 1,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router over an in-memory store.
///
/// Uses [`build_app_router`] so tests exercise the production middleware
/// stack.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Mint a valid access token for `user_id`, signed with the test secret.
pub fn token_for(user_id: DbId) -> String {
    generate_access_token(user_id, &test_config().jwt).expect("token generation should succeed")
}

/// How a request authenticates.
#[derive(Clone, Copy)]
pub enum Credential<'a> {
    None,
    Cookie(&'a str),
    Bearer(&'a str),
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    credential: Credential<'_>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    builder = match credential {
        Credential::None => builder,
        Credential::Cookie(token) => builder.header(COOKIE, format!("auth={token}")),
        Credential::Bearer(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
    };
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str, credential: Credential<'_>) -> Response {
    send(app, Method::GET, uri, credential, None).await
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    credential: Credential<'_>,
    body: serde_json::Value,
) -> Response {
    send(app, Method::POST, uri, credential, Some(body)).await
}

pub async fn delete_json(
    app: &Router,
    uri: &str,
    credential: Credential<'_>,
    body: serde_json::Value,
) -> Response {
    send(app, Method::DELETE, uri, credential, Some(body)).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
