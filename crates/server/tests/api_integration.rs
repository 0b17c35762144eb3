//! Integration tests for the HTTP surface
//!
//! Requests are driven through the full router (middleware included) with
//! `tower::ServiceExt::oneshot`, so no socket is bound.

use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use server::error::ErrorResponse;
use server::{build_router, ServerConfig, ServerState};
use tower::ServiceExt;

struct TestResponse {
    status: StatusCode,
    content_type: Option<String>,
    request_id: Option<String>,
    body: Bytes,
}

impl TestResponse {
    fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).expect("utf-8 body")
    }

    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("json body")
    }
}

fn create_test_state(config: ServerConfig) -> Arc<ServerState> {
    Arc::new(ServerState::new(config))
}

fn create_app() -> (Router, Arc<ServerState>) {
    let state = create_test_state(ServerConfig::default());
    (build_router(state.clone()), state)
}

async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let request_id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    TestResponse {
        status,
        content_type,
        request_id,
        body,
    }
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

fn post_form(uri: &str, body: &'static str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .expect("valid request")
}

async fn report(app: &Router, body: Value) -> TestResponse {
    send(app, post_json("/report", body)).await
}

async fn search(app: &Router, body: Value) -> Value {
    let response = send(app, post_json("/search", body)).await;
    assert_eq!(response.status, StatusCode::OK);
    response.json()
}

#[tokio::test]
async fn test_report_then_search_by_id() {
    let (app, _) = create_app();

    let response = report(
        &app,
        json!({"id": 1, "description": "Lost wallet", "tags": "brown,leather"}),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "Item reported successfully");
    assert!(response
        .content_type
        .as_deref()
        .is_some_and(|ct| ct.starts_with("text/plain")));

    let found = search(&app, json!({"id": 1})).await;
    assert_eq!(
        found,
        json!({"results": [{"id": 1, "description": "Lost wallet", "tags": "brown,leather"}]})
    );
}

#[tokio::test]
async fn test_search_by_description_keeps_order() {
    let (app, _) = create_app();
    report(&app, json!({"id": 2, "description": "Blue umbrella"})).await;
    report(&app, json!({"id": 3, "description": "Red umbrella"})).await;

    let found = search(&app, json!({"description": "umbrella"})).await;
    assert_eq!(
        found,
        json!({"results": [
            {"id": 2, "description": "Blue umbrella"},
            {"id": 3, "description": "Red umbrella"}
        ]})
    );
}

#[tokio::test]
async fn test_missing_id_is_rejected() {
    let (app, state) = create_app();

    let response = report(&app, json!({"description": "No id here"})).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Missing required fields");
    assert!(state.registry.is_empty());
}

#[tokio::test]
async fn test_empty_registry_returns_empty_results() {
    let (app, _) = create_app();
    assert_eq!(search(&app, json!({})).await, json!({"results": []}));
}

#[tokio::test]
async fn test_falsy_required_fields_are_rejected() {
    let (app, state) = create_app();
    report(&app, json!({"id": 7, "description": "Keys"})).await;

    for body in [
        json!({"id": 0, "description": "zero"}),
        json!({"id": "", "description": "empty"}),
        json!({"id": null, "description": "null"}),
        json!({"id": false, "description": "false"}),
        json!({"id": 8, "description": ""}),
        json!({"id": 8}),
        json!([1, 2, 3]),
    ] {
        let response = report(&app, body.clone()).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(response.text(), "Missing required fields");
    }
    assert_eq!(state.registry.len(), 1);
}

#[tokio::test]
async fn test_extra_fields_round_trip() {
    let (app, _) = create_app();
    let item = json!({
        "id": 101,
        "description": "Test Lost Item - Black Wallet",
        "location": "Terminal A, Gate 5",
        "date": "2025-08-29",
        "isLost": true,
        "reportedBy": "John Doe",
        "contactInfo": "john.doe@example.com",
        "tags": "wallet, black, leather",
        "notes": "Contains ID cards and credit cards"
    });
    assert_eq!(report(&app, item.clone()).await.status, StatusCode::OK);

    let by_text = search(&app, json!({"description": "wallet"})).await;
    assert_eq!(by_text, json!({"results": [item.clone()]}));

    let by_string_id = search(&app, json!({"id": "101"})).await;
    assert_eq!(by_string_id, json!({"results": [item]}));
}

#[tokio::test]
async fn test_search_matches_tags_and_ignores_case() {
    let (app, _) = create_app();
    report(&app, json!({"id": 1, "description": "Passport", "tags": "Blue Cover"})).await;
    report(&app, json!({"id": 2, "description": "Phone charger"})).await;

    let found = search(&app, json!({"description": "blue cover"})).await;
    assert_eq!(found["results"].as_array().map(Vec::len), Some(1));
    assert_eq!(found["results"][0]["id"], json!(1));

    let none = search(&app, json!({"description": "laptop"})).await;
    assert_eq!(none, json!({"results": []}));
}

#[tokio::test]
async fn test_search_without_criteria_returns_all() {
    let (app, _) = create_app();
    report(&app, json!({"id": 1, "description": "Scarf"})).await;
    report(&app, json!({"id": 1, "description": "Scarf again"})).await;

    let found = search(&app, json!({"tags": "ignored"})).await;
    assert_eq!(found["results"].as_array().map(Vec::len), Some(2));

    let repeat = search(&app, json!({"tags": "ignored"})).await;
    assert_eq!(found, repeat);
}

#[tokio::test]
async fn test_invalid_json_is_rejected_by_extractor() {
    let (app, state) = create_app();
    let request = Request::post("/report")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("This is not valid JSON"))
        .expect("valid request");

    let response = send(&app, request).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(state.registry.is_empty());
}

#[tokio::test]
async fn test_form_report_is_searchable_by_numeric_id() {
    let (app, _) = create_app();
    let request = post_form(
        "/test_report",
        "id=42&description=Grey+backpack&isLost=true&location=Gate+3",
    );

    let response = send(&app, request).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "Test item reported successfully");

    let found = search(&app, json!({"id": 42})).await;
    assert_eq!(
        found,
        json!({"results": [{
            "id": 42,
            "description": "Grey backpack",
            "isLost": true,
            "location": "Gate 3"
        }]})
    );
}

#[tokio::test]
async fn test_form_report_requires_fields() {
    let (app, state) = create_app();
    let request = post_form("/test_report", "id=&description=Umbrella");

    let response = send(&app, request).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Missing required fields");
    assert!(state.registry.is_empty());
}

#[tokio::test]
async fn test_form_report_keeps_leading_zero_id_text() {
    let (app, _) = create_app();

    let response = send(&app, post_form("/test_report", "id=007&description=Bond+case")).await;
    assert_eq!(response.status, StatusCode::OK);

    let found = search(&app, json!({"id": "007"})).await;
    assert_eq!(
        found,
        json!({"results": [{"id": "007", "description": "Bond case"}]})
    );
    assert_eq!(search(&app, json!({"id": 7})).await, json!({"results": []}));
}

#[tokio::test]
async fn test_form_report_accepts_zero_id() {
    let (app, state) = create_app();

    let response = send(&app, post_form("/test_report", "id=0&description=Zero+tag")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "Test item reported successfully");
    assert_eq!(state.registry.len(), 1);

    let found = search(&app, json!({"id": "0"})).await;
    assert_eq!(
        found,
        json!({"results": [{"id": 0, "description": "Zero tag"}]})
    );
}

#[tokio::test]
async fn test_health_reports_item_count() {
    let (app, _) = create_app();
    report(&app, json!({"id": 1, "description": "Gloves"})).await;

    let request = Request::get("/health").body(Body::empty()).expect("valid request");
    let response = send(&app, request).await;
    assert_eq!(response.status, StatusCode::OK);

    let body = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "lostfound-server");
    assert_eq!(body["items"], 1);
}

#[tokio::test]
async fn test_request_id_generated_and_propagated() {
    let (app, _) = create_app();

    let generated = send(
        &app,
        Request::get("/health").body(Body::empty()).expect("valid request"),
    )
    .await;
    let id = generated.request_id.expect("request id header");
    assert_eq!(id.len(), 36);

    let propagated = send(
        &app,
        Request::get("/health")
            .header("x-request-id", "trace-abc")
            .body(Body::empty())
            .expect("valid request"),
    )
    .await;
    assert_eq!(propagated.request_id.as_deref(), Some("trace-abc"));
}

#[tokio::test]
async fn test_static_files_and_not_found() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("index.html"), "<h1>Lost &amp; Found</h1>").expect("write");

    let config = ServerConfig {
        static_dir: dir.path().to_path_buf(),
        ..ServerConfig::default()
    };
    let app = build_router(create_test_state(config));

    let index = send(
        &app,
        Request::get("/index.html").body(Body::empty()).expect("valid request"),
    )
    .await;
    assert_eq!(index.status, StatusCode::OK);
    assert_eq!(index.text(), "<h1>Lost &amp; Found</h1>");
    assert!(index
        .content_type
        .as_deref()
        .is_some_and(|ct| ct.starts_with("text/html")));

    let missing = send(
        &app,
        Request::get("/missing.css").body(Body::empty()).expect("valid request"),
    )
    .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    let error: ErrorResponse = serde_json::from_slice(&missing.body).expect("error body");
    assert_eq!(error.error.code, "NOT_FOUND");
    assert_eq!(error.error.message, "Not found");
}

#[tokio::test]
async fn test_default_static_dir_does_not_expose_working_directory() {
    // Integration tests run from the package root, where Cargo.toml exists.
    assert!(std::path::Path::new("Cargo.toml").exists());
    let (app, _) = create_app();

    let response = send(
        &app,
        Request::get("/Cargo.toml").body(Body::empty()).expect("valid request"),
    )
    .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
