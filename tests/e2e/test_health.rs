use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;

#[tokio::test]
async fn it_should_return_ok_for_health_check() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);

    // Health endpoint returns plain text
    let body = String::from_utf8(response.body_bytes.clone()).unwrap();
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn it_should_report_store_in_ready_status() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("ready"));
    assert_eq!(body.get("store").and_then(|v| v.as_str()), Some("connected"));
}

#[tokio::test]
async fn it_should_include_request_id_in_responses() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.client.get("/health").await.unwrap();
    response.assert_header_exists("x-request-id");

    let response = ctx.client.get("/api/settings").await.unwrap();
    response.assert_header_exists("x-request-id");
}

#[tokio::test]
async fn it_should_keep_caller_request_id() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .get_with_header("/health", "x-request-id", "trace-1234")
        .await
        .unwrap();

    assert_eq!(
        response.header("x-request-id").map(String::as_str),
        Some("trace-1234")
    );
}
