use crate::e2e::helpers;

use helpers::assertions::assert_usage_response;
use helpers::TestContext;
use hyper::StatusCode;
use serde_json::json;

#[tokio::test]
async fn it_should_start_anonymous_with_one_download() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.client.get("/api/me").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();
    assert_eq!(
        body.pointer("/identity/kind").and_then(|v| v.as_str()),
        Some("anonymous")
    );
    assert_usage_response(&body["usage"], "anon", 0, 1);
}

#[tokio::test]
async fn it_should_log_in_with_free_plan() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.client.post_empty("/auth/login").await.unwrap();
    response.assert_status(StatusCode::OK);
    let account = response.body();
    assert_eq!(account.get("plan").and_then(|v| v.as_str()), Some("free"));
    assert!(account
        .get("id")
        .and_then(|v| v.as_str())
        .is_some_and(|id| id.starts_with("usr_")));

    let usage = ctx.client.get("/api/usage").await.unwrap();
    usage.assert_status(StatusCode::OK);
    assert_usage_response(usage.body(), "free", 0, 3);
}

#[tokio::test]
async fn it_should_change_plan_for_logged_in_account() {
    let ctx = TestContext::new().await.unwrap();
    ctx.client.post_empty("/auth/login").await.unwrap();

    let response = ctx
        .client
        .post("/api/me/plan", &json!({ "plan": "pro" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body().get("plan").and_then(|v| v.as_str()), Some("pro"));

    let me = ctx.client.get("/api/me").await.unwrap();
    assert_usage_response(&me.body()["usage"], "pro", 0, 450);
}

#[tokio::test]
async fn it_should_require_login_to_change_plan() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post("/api/me/plan", &json!({ "plan": "vip" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn it_should_return_to_anonymous_after_logout() {
    let ctx = TestContext::new().await.unwrap();
    ctx.client.post_empty("/auth/login").await.unwrap();

    let response = ctx.client.post_empty("/auth/logout").await.unwrap();
    response.assert_status(StatusCode::NO_CONTENT);

    let me = ctx.client.get("/api/me").await.unwrap();
    assert_eq!(
        me.body().pointer("/identity/kind").and_then(|v| v.as_str()),
        Some("anonymous")
    );
}
