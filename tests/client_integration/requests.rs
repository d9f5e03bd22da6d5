use std::time::Duration;

use serde_json::{Value, json};
use sisense_client::{ClientConfig, ClientError, HttpMethod, RequestOptions};

use super::support::{BASE_URL, stub_client};

#[tokio::test]
async fn no_token_means_no_authorization_header() {
    let (client, stub) = stub_client(ClientConfig::default());

    client
        .get("/x", RequestOptions::new())
        .await
        .expect("get should succeed");

    let request = stub.last_request();
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.url, format!("{BASE_URL}/x"));
    assert!(request.options.headers.is_empty());
}

#[tokio::test]
async fn token_is_sent_as_bearer_header() {
    let (mut client, stub) = stub_client(ClientConfig::default());
    client.use_access_token("A");

    client
        .get("/x", RequestOptions::new())
        .await
        .expect("get should succeed");

    assert_eq!(
        stub.last_request().options.header_value("Authorization"),
        Some("Bearer A")
    );
}

#[tokio::test]
async fn caller_authorization_header_wins() {
    let (client, stub) = stub_client(ClientConfig::default().with_access_token("A"));

    client
        .get(
            "/x",
            RequestOptions::new().header("Authorization", "Bearer caller"),
        )
        .await
        .expect("get should succeed");

    let request = stub.last_request();
    assert_eq!(request.options.headers.len(), 1);
    assert_eq!(
        request.options.header_value("Authorization"),
        Some("Bearer caller")
    );
}

#[tokio::test]
async fn verb_helpers_map_to_methods() {
    let (client, stub) = stub_client(ClientConfig::default());

    client
        .get("/a", RequestOptions::new())
        .await
        .expect("get should succeed");
    client
        .post("/a", RequestOptions::new())
        .await
        .expect("post should succeed");
    client
        .put("/a", RequestOptions::new())
        .await
        .expect("put should succeed");
    client
        .patch("/a", RequestOptions::new())
        .await
        .expect("patch should succeed");
    client
        .delete("/a", RequestOptions::new())
        .await
        .expect("delete should succeed");

    let methods: Vec<HttpMethod> = stub
        .requests()
        .iter()
        .map(|request| request.method)
        .collect();
    assert_eq!(
        methods,
        vec![
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Patch,
            HttpMethod::Delete,
        ]
    );
}

#[tokio::test]
async fn options_pass_through_unchanged() {
    let (client, stub) = stub_client(ClientConfig::default());
    let options = RequestOptions::new()
        .header("Accept", "application/json")
        .query("fields", "name")
        .json(json!({"name": "Analysts"}))
        .timeout(Duration::from_secs(5));

    client
        .run_request("/api/v1/groups", HttpMethod::Post, options.clone())
        .await
        .expect("request should succeed");

    assert_eq!(stub.last_request().options, options);
}

#[tokio::test]
async fn response_body_keeps_structure_and_key_order() {
    let (client, stub) = stub_client(ClientConfig::default());
    stub.respond(HttpMethod::Get, "/ordered", r#"{"b":[1,2,3],"a":1}"#);

    let value = client
        .get("/ordered", RequestOptions::new())
        .await
        .expect("get should succeed");

    assert_eq!(value, json!({"a": 1, "b": [1, 2, 3]}));
    let keys: Vec<&String> = value
        .as_object()
        .expect("object expected")
        .keys()
        .collect();
    assert_eq!(keys, vec!["b", "a"]);
}

#[tokio::test]
async fn scalar_and_array_bodies_decode() {
    let (client, stub) = stub_client(ClientConfig::default());
    stub.respond(HttpMethod::Get, "/count", "42");
    stub.respond(HttpMethod::Get, "/list", r#"[{"id":1},null]"#);

    let count = client
        .get("/count", RequestOptions::new())
        .await
        .expect("scalar should decode");
    assert_eq!(count, json!(42));

    let list = client
        .get("/list", RequestOptions::new())
        .await
        .expect("array should decode");
    assert_eq!(list.as_array().map(Vec::len), Some(2));
    assert_eq!(list[1], Value::Null);
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let (client, stub) = stub_client(ClientConfig::default());
    stub.respond(HttpMethod::Get, "/broken", "<html>oops</html>");

    let error = client
        .get("/broken", RequestOptions::new())
        .await
        .expect_err("html should not decode");
    assert!(matches!(error, ClientError::Decode(_)));
}
