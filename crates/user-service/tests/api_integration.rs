//! Integration tests for the user service HTTP API.

use std::sync::OnceLock;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::UserId;
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceExt;
use user_service::dataset::UserRecord;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

fn get_metrics_handle() -> PrometheusHandle {
    METRICS_HANDLE
        .get_or_init(|| {
            common::telemetry::install_metrics_recorder()
                .expect("failed to install Prometheus recorder")
        })
        .clone()
}

fn records() -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: UserId::new("u1"),
            username: "alice".to_string(),
            password: "correctpw".to_string(),
            full_name: Some("Alice Anderson".to_string()),
        },
        UserRecord {
            id: UserId::new("u2"),
            username: "bob".to_string(),
            password: "hunter2".to_string(),
            full_name: None,
        },
    ]
}

fn setup() -> axum::Router {
    let state = user_service::create_default_state(records());
    user_service::create_app(state, get_metrics_handle())
}

fn login_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/login")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn assert_json_detail(response: axum::response::Response, status: StatusCode) {
    assert_eq!(response.status(), status);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );
    assert!(read_json(response).await["detail"].is_string());
}

#[tokio::test]
async fn test_health_check() {
    let response = setup()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["status"], "ok");
}

#[tokio::test]
async fn test_login_success_returns_user_id() {
    let response = setup()
        .oneshot(login_request(serde_json::json!({
            "username": "alice",
            "password": "correctpw"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        serde_json::json!({ "user_id": "u1" })
    );
}

#[tokio::test]
async fn test_login_wrong_password_is_401() {
    let response = setup()
        .oneshot(login_request(serde_json::json!({
            "username": "alice",
            "password": "wrong"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        read_json(response).await["detail"],
        "Invalid username or password"
    );
}

#[tokio::test]
async fn test_login_unknown_user_gives_same_response_as_wrong_password() {
    let app = setup();

    let unknown = app
        .clone()
        .oneshot(login_request(serde_json::json!({
            "username": "mallory",
            "password": "correctpw"
        })))
        .await
        .unwrap();
    let wrong = app
        .oneshot(login_request(serde_json::json!({
            "username": "bob",
            "password": "nope"
        })))
        .await
        .unwrap();

    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(read_json(unknown).await, read_json(wrong).await);
}

#[tokio::test]
async fn test_login_missing_field_is_rejected_before_lookup() {
    let response = setup()
        .oneshot(login_request(serde_json::json!({ "username": "alice" })))
        .await
        .unwrap();

    assert_json_detail(response, StatusCode::UNPROCESSABLE_ENTITY).await;
}

#[tokio::test]
async fn test_login_malformed_body_is_json_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/login")
        .header("content-type", "application/json")
        .body(Body::from("{\"username\": "))
        .unwrap();
    let response = setup().oneshot(request).await.unwrap();

    assert_json_detail(response, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn test_get_user_returns_profile_without_password() {
    let response = setup()
        .oneshot(
            Request::builder()
                .uri("/user/u1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        serde_json::json!({
            "id": "u1",
            "username": "alice",
            "full_name": "Alice Anderson"
        })
    );
}

#[tokio::test]
async fn test_get_user_without_full_name() {
    let response = setup()
        .oneshot(
            Request::builder()
                .uri("/user/u2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["username"], "bob");
    assert!(json["full_name"].is_null());
    assert!(json.get("password").is_none());
}

#[tokio::test]
async fn test_get_unknown_user_is_404() {
    let response = setup()
        .oneshot(
            Request::builder()
                .uri("/user/u404")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_json(response).await["detail"], "User not found");
}

#[tokio::test]
async fn test_empty_dataset_rejects_everything() {
    let state = user_service::create_default_state(Vec::new());
    let app = user_service::create_app(state, get_metrics_handle());

    let login = app
        .clone()
        .oneshot(login_request(serde_json::json!({
            "username": "alice",
            "password": "correctpw"
        })))
        .await
        .unwrap();
    assert_eq!(login.status(), StatusCode::UNAUTHORIZED);

    let lookup = app
        .oneshot(
            Request::builder()
                .uri("/user/u1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(lookup.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_metrics_count_logins() {
    let app = setup();

    app.clone()
        .oneshot(login_request(serde_json::json!({
            "username": "alice",
            "password": "correctpw"
        })))
        .await
        .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("user_logins_total"));
}
