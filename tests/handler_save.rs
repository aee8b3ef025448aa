mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_save_with_custom_alias() {
    let server = common::test_server().await;

    let response = server
        .post("/api/v1/urls")
        .json(&json!({ "url": "https://example.com", "alias": "ex1" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["alias"], "ex1");
}

#[tokio::test]
async fn test_save_generates_alias_when_omitted() {
    let server = common::test_server().await;

    let response = server
        .post("/api/v1/urls")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["status"], "ok");

    let alias = body["alias"].as_str().unwrap();
    assert_eq!(alias.len(), 8);
    assert!(
        alias
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    );
}

#[tokio::test]
async fn test_save_duplicate_alias_conflict() {
    let server = common::test_server().await;

    let first = server
        .post("/api/v1/urls")
        .json(&json!({ "url": "https://example.com", "alias": "ex1" }))
        .await;
    first.assert_status_ok();

    let second = server
        .post("/api/v1/urls")
        .json(&json!({ "url": "https://other.com", "alias": "ex1" }))
        .await;

    second.assert_status_ok();

    let body = second.json::<Value>();
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"], "url already exists");

    // The original mapping must survive the rejected save.
    let redirect = server.get("/ex1").await;
    assert_eq!(
        redirect.header("location").to_str().unwrap(),
        "https://example.com"
    );
}

#[tokio::test]
async fn test_save_empty_url_rejected() {
    let server = common::test_server().await;

    let response = server
        .post("/api/v1/urls")
        .json(&json!({ "url": "" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"], "url is required");
}

#[tokio::test]
async fn test_save_empty_alias_falls_back_to_generation() {
    let server = common::test_server().await;

    let response = server
        .post("/api/v1/urls")
        .json(&json!({ "url": "https://example.com", "alias": "" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["alias"].as_str().unwrap().len(), 8);
}
