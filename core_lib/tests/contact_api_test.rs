use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use greenloop_core::{
    create_app, create_app_with_config, ensure_schema, get_database_pool, AppConfig, AppState,
    DatabaseManager,
    config::DatabaseConfig,
    error::{SERVER_ERROR_MESSAGE, VALIDATION_FAILED_MESSAGE},
    handlers::{contact::SUBMIT_SUCCESS_MESSAGE, health::ROOT_MESSAGE},
};
use serde_json::{json, Value};
use std::collections::HashSet;
use tempfile::NamedTempFile;
use tower::ServiceExt;
use uuid::Uuid;

struct TestApp {
    app: Router,
    state: AppState,
    _db_file: NamedTempFile,
}

async fn setup_test_app() -> TestApp {
    let db_file = NamedTempFile::new().unwrap();
    let config = DatabaseConfig {
        url: format!("sqlite:{}", db_file.path().display()),
        ..DatabaseConfig::default()
    };

    let pool = get_database_pool(&config).await.unwrap();
    ensure_schema(&pool).await.unwrap();

    let state = AppState::with_database(DatabaseManager::new(pool));
    TestApp {
        app: create_app(state.clone()),
        state,
        _db_file: db_file,
    }
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn sarah_payload() -> Value {
    json!({
        "name": "Sarah Johnson",
        "email": "sarah.johnson@greentech.com",
        "organization": "GreenTech Solutions",
        "interest": "Partnership opportunities",
        "message": "I'm interested in exploring partnership opportunities for sustainable packaging..."
    })
}

fn validation_reasons(body: &Value) -> Vec<String> {
    body["errors"]["validation"]
        .as_array()
        .expect("validation reasons present")
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_valid_submission_with_all_fields() {
    let test = setup_test_app().await;

    let (status, body) = send(&test.app, Method::POST, "/api/contact", Some(sarah_payload())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], SUBMIT_SUCCESS_MESSAGE);
    let id = body["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert!(Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn test_valid_submission_with_required_fields_only() {
    let test = setup_test_app().await;

    let payload = json!({
        "name": "Mike Chen",
        "email": "mike.chen@example.org",
        "message": "Just wanted to say I love what you're doing."
    });
    let (status, body) = send(&test.app, Method::POST, "/api/contact", Some(payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_short_name_is_rejected() {
    let test = setup_test_app().await;

    let payload = json!({
        "name": "A",
        "email": "test@example.com",
        "message": "This message should be long enough."
    });
    let (status, body) = send(&test.app, Method::POST, "/api/contact", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], VALIDATION_FAILED_MESSAGE);
    assert_eq!(
        validation_reasons(&body),
        vec!["Name must be at least 2 characters long"]
    );
}

#[tokio::test]
async fn test_invalid_interest_is_rejected() {
    let test = setup_test_app().await;

    let mut payload = sarah_payload();
    payload["interest"] = json!("Invalid Interest Option");
    let (status, body) = send(&test.app, Method::POST, "/api/contact", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let reasons = validation_reasons(&body);
    assert_eq!(reasons.len(), 1);
    assert!(reasons[0].starts_with("Interest must be one of:"));
}

#[tokio::test]
async fn test_invalid_email_is_rejected() {
    let test = setup_test_app().await;

    let mut payload = sarah_payload();
    payload["email"] = json!("invalid-email");
    let (status, body) = send(&test.app, Method::POST, "/api/contact", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(validation_reasons(&body), vec!["Email must be a valid email address"]);

    let mut payload = sarah_payload();
    payload["email"] = json!("sarah@greentech..com");
    let (status, _) = send(&test.app, Method::POST, "/api/contact", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut payload = sarah_payload();
    payload["email"] = json!("o'brien@example.com");
    let (status, body) = send(&test.app, Method::POST, "/api/contact", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_boundary_lengths() {
    let test = setup_test_app().await;

    let cases = [
        ("name", 1, false),
        ("name", 2, true),
        ("name", 100, true),
        ("name", 101, false),
        ("message", 9, false),
        ("message", 10, true),
        ("message", 1000, true),
        ("message", 1001, false),
    ];

    for (field, len, accepted) in cases {
        let mut payload = sarah_payload();
        payload[field] = json!("x".repeat(len));
        let (status, _) = send(&test.app, Method::POST, "/api/contact", Some(payload)).await;

        let expected = if accepted { StatusCode::OK } else { StatusCode::BAD_REQUEST };
        assert_eq!(status, expected, "{} of {} chars", field, len);
    }
}

#[tokio::test]
async fn test_empty_payload_reports_required_fields() {
    let test = setup_test_app().await;

    let (status, body) = send(&test.app, Method::POST, "/api/contact", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(
        validation_reasons(&body),
        vec!["Email is required", "Message is required", "Name is required"]
    );
}

#[tokio::test]
async fn test_malformed_body_is_rejected_before_validation() {
    let test = setup_test_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": \"Sarah"))
        .unwrap();
    let response = test.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], false);
    assert!(body.get("errors").is_none());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .body(Body::from(sarah_payload().to_string()))
        .unwrap();
    let response = test.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut payload = sarah_payload();
    payload["name"] = json!(42);
    let (status, body) = send(&test.app, Method::POST, "/api/contact", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("errors").is_none());

    let (_, listed) = send(&test.app, Method::GET, "/api/contact", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_submission_round_trips_through_list() {
    let test = setup_test_app().await;

    let payload = json!({
        "name": "   Priya Patel  ",
        "email": "priya@example.com",
        "organization": "  Compost Collective ",
        "interest": "Research collaboration",
        "message": "\n  We'd like to share our findings on home composting.  "
    });
    let (_, created) = send(&test.app, Method::POST, "/api/contact", Some(payload)).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, listed) = send(&test.app, Method::GET, "/api/contact", None).await;
    assert_eq!(status, StatusCode::OK);

    let submissions = listed.as_array().unwrap();
    assert_eq!(submissions.len(), 1);
    let stored = &submissions[0];
    assert_eq!(stored["id"], id);
    assert_eq!(stored["name"], "Priya Patel");
    assert_eq!(stored["email"], "priya@example.com");
    assert_eq!(stored["organization"], "Compost Collective");
    assert_eq!(stored["interest"], "Research collaboration");
    assert_eq!(stored["message"], "We'd like to share our findings on home composting.");
    assert_eq!(stored["status"], "new");
    assert!(stored["submitted_at"].is_string());
}

#[tokio::test]
async fn test_list_is_newest_first_and_idempotent() {
    let test = setup_test_app().await;

    let mut ids = HashSet::new();
    for i in 0..5 {
        let mut payload = sarah_payload();
        payload["name"] = json!(format!("Sender {}", i));
        let (status, body) = send(&test.app, Method::POST, "/api/contact", Some(payload)).await;
        assert_eq!(status, StatusCode::OK);
        ids.insert(body["id"].as_str().unwrap().to_string());
    }
    assert_eq!(ids.len(), 5);

    let (_, first) = send(&test.app, Method::GET, "/api/contact", None).await;
    let (_, second) = send(&test.app, Method::GET, "/api/contact", None).await;
    assert_eq!(first, second);

    let timestamps: Vec<chrono::DateTime<chrono::Utc>> = first
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["submitted_at"].as_str().unwrap().parse().unwrap())
        .collect();
    assert_eq!(timestamps.len(), 5);
    assert!(timestamps.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[tokio::test]
async fn test_list_is_capped_at_one_hundred() {
    let test = setup_test_app().await;

    for i in 0..105 {
        let mut payload = sarah_payload();
        payload["name"] = json!(format!("Bulk sender {}", i));
        let (status, _) = send(&test.app, Method::POST, "/api/contact", Some(payload)).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, listed) = send(&test.app, Method::GET, "/api/contact", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 100);
}

#[tokio::test]
async fn test_storage_failure_returns_generic_error() {
    let test = setup_test_app().await;
    test.state.db_manager.as_ref().unwrap().close().await;

    let (status, body) = send(&test.app, Method::POST, "/api/contact", Some(sarah_payload())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false, "message": SERVER_ERROR_MESSAGE }));

    let (status, body) = send(&test.app, Method::GET, "/api/contact", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);

    // validation still wins over storage
    let (status, _) = send(&test.app, Method::POST, "/api/contact", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_status_checks() {
    let test = setup_test_app().await;

    let (status, listed) = send(&test.app, Method::GET, "/api/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));

    let (status, created) = send(
        &test.app,
        Method::POST,
        "/api/status",
        Some(json!({ "client_name": "uptime-probe" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["client_name"], "uptime-probe");
    assert!(Uuid::parse_str(created["id"].as_str().unwrap()).is_ok());
    assert!(created["timestamp"].is_string());

    send(&test.app, Method::POST, "/api/status", Some(json!({ "client_name": "second" }))).await;

    let (_, listed) = send(&test.app, Method::GET, "/api/status", None).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0], created);
    assert_eq!(listed[1]["client_name"], "second");

    let (status, _) = send(&test.app, Method::POST, "/api/status", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_root_health_and_fallback() {
    let test = setup_test_app().await;

    let (status, body) = send(&test.app, Method::GET, "/api/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], ROOT_MESSAGE);

    let (status, body) = send(&test.app, Method::GET, "/api", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], ROOT_MESSAGE);

    let (status, body) = send(&test.app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "healthy");

    let (status, body) = send(&test.app, Method::GET, "/api/unknown", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);

    test.state.db_manager.as_ref().unwrap().close().await;
    let (status, body) = send(&test.app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["database"], "unhealthy");
}

async fn preflight(app: &Router, origin: &str) -> axum::http::HeaderMap {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/contact")
        .header("origin", origin)
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap();

    app.clone().oneshot(request).await.unwrap().headers().clone()
}

#[tokio::test]
async fn test_cors_wildcard_allows_any_origin() {
    let test = setup_test_app().await;

    let headers = preflight(&test.app, "https://anywhere.example").await;
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert!(headers.get("access-control-allow-credentials").is_none());
}

#[tokio::test]
async fn test_cors_origin_list_with_custom_prefix() {
    let test = setup_test_app().await;

    let mut config = AppConfig::default();
    config.server.api_prefix = "/v1".to_string();
    config.cors.allowed_origins = vec!["https://greenloop.example".to_string()];
    let app = create_app_with_config(test.state.clone(), &config);

    let headers = preflight(&app, "https://greenloop.example").await;
    assert_eq!(headers["access-control-allow-origin"], "https://greenloop.example");
    assert_eq!(headers["access-control-allow-credentials"], "true");

    let headers = preflight(&app, "https://elsewhere.example").await;
    assert!(headers.get("access-control-allow-origin").is_none());

    let (status, body) = send(&app, Method::POST, "/v1/contact", Some(sarah_payload())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = send(&app, Method::GET, "/api/contact", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
