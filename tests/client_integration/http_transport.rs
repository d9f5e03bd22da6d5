use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{
    Form, Json, Router,
    extract::Query,
    http::{HeaderMap, StatusCode, header},
    routing::{get, post},
};
use serde_json::{Value, json};
use sisense_client::{
    Client, ClientConfig, ClientError, HttpTransport, RequestOptions, TransportError, v1,
};

use super::support::spawn_mock_api;

async fn login(Form(fields): Form<HashMap<String, String>>) -> (StatusCode, Json<Value>) {
    let valid = fields.get("username").map(String::as_str) == Some("admin")
        && fields.get("password").map(String::as_str) == Some("secret");
    if !valid {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"success": false, "message": "invalid credentials"})),
        );
    }

    (
        StatusCode::OK,
        Json(json!({"success": true, "access_token": "mock-token"})),
    )
}

async fn echo(headers: HeaderMap, Query(query): Query<HashMap<String, String>>) -> Json<Value> {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    Json(json!({
        "authorization": authorization,
        "query": query,
    }))
}

fn mock_routes() -> Router {
    Router::new()
        .route("/api/v1/authentication/login", post(login))
        .route(
            "/api/v1/users",
            get(echo).post(|Json(body): Json<Value>| async move {
                (StatusCode::CREATED, Json(json!({"created": body})))
            }),
        )
        .route(
            "/api/v1/users/{id}",
            axum::routing::delete(|| async { StatusCode::NO_CONTENT }),
        )
        .route(
            "/api/v1/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route(
            "/api/v1/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Json(json!({}))
            }),
        )
}

fn http_client(base_url: String) -> Client {
    let transport = HttpTransport::with_timeout(Duration::from_secs(5))
        .expect("http transport should build");
    Client::with_transport(base_url, ClientConfig::default(), Arc::new(transport))
}

#[tokio::test]
async fn login_and_bearer_round_trip_over_http() {
    let api = spawn_mock_api(mock_routes()).await;
    let mut client = http_client(api.base_url());

    client
        .authenticate("admin", "secret")
        .await
        .expect("login should succeed");
    assert_eq!(client.access_token(), "mock-token");

    let users = client
        .resolve_as::<v1::Users>("users")
        .expect("users should resolve");
    let payload = users
        .all(&[("limit", "2")])
        .await
        .expect("user list should load");

    assert_eq!(payload["authorization"], "Bearer mock-token");
    assert_eq!(payload["query"]["limit"], "2");

    api.stop().await;
}

#[tokio::test]
async fn json_body_and_empty_responses_over_http() {
    let api = spawn_mock_api(mock_routes()).await;
    let mut client = http_client(api.base_url());

    let users = client
        .resolve_as::<v1::Users>("users")
        .expect("users should resolve");
    let created = users
        .create(json!({"email": "ada@example.com"}))
        .await
        .expect("create should succeed");
    assert_eq!(created["created"]["email"], "ada@example.com");

    let deleted = users.delete("42").await.expect("delete should succeed");
    assert_eq!(deleted, Value::Null);

    api.stop().await;
}

#[tokio::test]
async fn error_status_is_a_transport_error() {
    let api = spawn_mock_api(mock_routes()).await;
    let mut client = http_client(api.base_url());

    let error = client
        .get("/api/v1/broken", RequestOptions::new())
        .await
        .expect_err("500 should fail");
    match error {
        ClientError::Transport(TransportError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected error: {other}"),
    }

    let error = client
        .authenticate("admin", "wrong")
        .await
        .expect_err("bad password should fail");
    assert!(matches!(
        error,
        ClientError::Transport(TransportError::Status { status: 401, .. })
    ));
    assert_eq!(client.access_token(), "");

    api.stop().await;
}

#[tokio::test]
async fn per_request_timeout_surfaces_as_http_error() {
    let api = spawn_mock_api(mock_routes()).await;
    let client = http_client(api.base_url());

    let error = client
        .get(
            "/api/v1/slow",
            RequestOptions::new().timeout(Duration::from_millis(100)),
        )
        .await
        .expect_err("slow endpoint should time out");
    assert!(matches!(
        error,
        ClientError::Transport(TransportError::Http(ref inner)) if inner.is_timeout()
    ));

    api.stop().await;
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    let api = spawn_mock_api(mock_routes()).await;
    let base_url = api.base_url();
    api.stop().await;

    let client = http_client(base_url);
    let error = client
        .get("/api/v1/users", RequestOptions::new())
        .await
        .expect_err("closed port should fail");
    assert!(matches!(
        error,
        ClientError::Transport(TransportError::Http(_))
    ));
}
