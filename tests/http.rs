//! Router behaviour that needs no live database: the pool points at a closed port.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::time::Duration;
use tower::ServiceExt;
use users_api::store::connect_lazy;
use users_api::{app, AppState, DatabaseConfig, ServerConfig};

fn unreachable_app() -> Router {
    let database = DatabaseConfig {
        host: "127.0.0.1".into(),
        port: 1,
        ..DatabaseConfig::default()
    };
    let server = ServerConfig {
        acquire_timeout: Duration::from_secs(1),
        ..ServerConfig::default()
    };
    let pool = connect_lazy(&database, &server);
    app(AppState::new(pool))
}

async fn send(router: Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = router.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn health_does_not_touch_database() {
    let (status, body) = send(unreachable_app(), "GET", "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn ready_reports_unavailable_database() {
    let (status, body) = send(unreachable_app(), "GET", "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["database"], "unavailable");
}

#[tokio::test]
async fn list_users_without_database_is_500() {
    let (status, body) = send(unreachable_app(), "GET", "/users").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "database_error");
}

#[tokio::test]
async fn create_user_missing_email_is_client_error() {
    let (status, _) = send(unreachable_app(), "POST", "/users?name=Alice").await;
    assert!(status.is_client_error(), "got {}", status);
}

#[tokio::test]
async fn create_user_missing_both_params_is_client_error() {
    let (status, _) = send(unreachable_app(), "POST", "/users").await;
    assert!(status.is_client_error(), "got {}", status);
}

#[tokio::test]
async fn unknown_path_is_json_404() {
    let (status, body) = send(unreachable_app(), "GET", "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn version_reports_crate_name() {
    let (status, body) = send(unreachable_app(), "GET", "/version").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "users-api");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (status, body) = send(unreachable_app(), "GET", "/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/users"]["post"].is_object());
}
