//! Router-level tests driving the full middleware stack

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use jsjudge::{
    catalog::ProblemCatalog,
    config::{CatalogConfig, Config, JudgeConfig, ServerConfig},
    handlers,
    middleware::REQUEST_ID_HEADER,
    state::AppState,
};

fn app() -> Router {
    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "off".to_string(),
        },
        judge: JudgeConfig::default(),
        catalog: CatalogConfig::default(),
    };
    handlers::create_router(AppState::new(ProblemCatalog::builtin(), config))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health_reports_version() {
    let (status, body) = send(get("/api/v1/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["problems"], 1);
    assert_eq!(body["time_budget_ms"], 1000);
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let response = app().oneshot(get("/api/v1/health")).await.unwrap();
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));
}

#[tokio::test]
async fn test_judge_grades_every_case() {
    let (status, body) = send(post(
        "/api/v1/judge",
        json!({
            "source": "function twoSum(a, b) { return a + b; }",
            "entry_point_name": "twoSum",
            "test_cases": [
                { "input": [7, 2], "expected": 9 },
                { "input": [0, 10], "expected": 10 }
            ]
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["passed"], 2);
    assert_eq!(body["total"], 2);
    assert_eq!(body["results"][0]["output"], 9);
    assert_eq!(body["results"][1]["passed"], true);
    assert_eq!(body["logs"], json!([]));
    assert_eq!(body["logs_truncated"], false);
}

#[tokio::test]
async fn test_judge_uses_default_entry_point() {
    let (status, body) = send(post(
        "/api/v1/judge",
        json!({
            "source": "function solution(s) { console.log('got', s); return s.length; }",
            "test_cases": [{ "input": ["abc"], "expected": 3 }]
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["passed"], 1);
    assert_eq!(body["logs"], json!(["got abc"]));
}

#[tokio::test]
async fn test_judge_reports_total_failure_in_body() {
    let (status, body) = send(post(
        "/api/v1/judge",
        json!({
            "source": "function add(a, b) { return a + b; }",
            "entry_point_name": "twoSum",
            "test_cases": [{ "input": [1, 2], "expected": 3 }]
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "ENTRY_POINT_MISSING");
    assert!(body["error"].as_str().unwrap().contains("twoSum"));
    assert!(body.get("results").is_none());
}

#[tokio::test]
async fn test_judge_rejects_invalid_entry_point_name() {
    let (status, body) = send(post(
        "/api/v1/judge",
        json!({
            "source": "function f() {}",
            "entry_point_name": "f(); globalThis",
            "test_cases": []
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_judge_rejects_empty_source() {
    let (status, body) = send(post(
        "/api/v1/judge",
        json!({ "source": "", "test_cases": [] }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_run_returns_value_and_logs() {
    let (status, body) = send(post(
        "/api/v1/run",
        json!({ "code": "console.log('computing'); return [1, 2].map(x => x * 2);" }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], json!([2, 4]));
    assert_eq!(body["logs"], json!(["computing"]));
}

#[tokio::test]
async fn test_run_returns_error_on_throw() {
    let (status, body) = send(post(
        "/api/v1/run",
        json!({ "code": "null.foo;" }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "RUNTIME_ERROR");
    assert!(body["error"].as_str().unwrap().starts_with("TypeError"));
}

#[tokio::test]
async fn test_problems_hide_test_cases() {
    let (status, body) = send(get("/api/v1/problems")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["problems"][0]["id"], "two-sum");

    let (status, body) = send(get("/api/v1/problems/two-sum")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entry_point_name"], "twoSum");
    assert_eq!(body["test_case_count"], 4);
    assert!(body.get("test_cases").is_none());
}

#[tokio::test]
async fn test_unknown_problem_is_not_found() {
    let (status, body) = send(get("/api/v1/problems/does-not-exist")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_submission_to_catalog_problem() {
    let (status, body) = send(post(
        "/api/v1/problems/two-sum/submissions",
        json!({ "source": "function twoSum(a, b) { return a + b; }" }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["problem_id"], "two-sum");
    assert_eq!(body["accepted"], true);
    assert_eq!(body["report"]["passed"], 4);

    let (status, body) = send(post(
        "/api/v1/problems/two-sum/submissions",
        json!({ "source": "function twoSum(a, b) { return a * b; }" }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["accepted"], false);
}
