use crate::e2e::helpers;

use chrono::Duration;
use helpers::assertions::{assert_item_status, assert_usage_response};
use helpers::fixtures::{resolve_request, PRIVATE_LINK, SORA_LINK};
use helpers::{eventually, TestContext};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

async fn wait_until_complete(ctx: &TestContext, index: usize) {
    eventually("download to complete", || async {
        let response = ctx.client.get("/api/downloads").await.unwrap();
        response
            .body()
            .pointer(&format!("/items/{}/status", index))
            .and_then(|v| v.as_str())
            == Some("complete")
    })
    .await;
}

#[tokio::test]
async fn it_should_resolve_a_link_into_idle_downloads() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post("/api/videos/resolve", &resolve_request(SORA_LINK))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let session = response.body();
    assert_eq!(
        session.pointer("/video/title").and_then(|v| v.as_str()),
        Some("Tokyo Walk")
    );
    assert_item_status(session, 0, "idle");
    assert_item_status(session, 1, "idle");
    assert_eq!(session.pointer("/items/0/progress").and_then(|v| v.as_f64()), Some(0.0));
}

#[tokio::test]
async fn it_should_reject_unsupported_links() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post("/api/videos/resolve", &resolve_request("https://example.com/page"))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("valid Sora link");
}

#[tokio::test]
async fn it_should_ask_for_verification_before_resolving() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post("/api/videos/resolve", &json!({ "url": SORA_LINK }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::PRECONDITION_REQUIRED)
        .assert_error_message("security check");
}

#[tokio::test]
async fn it_should_pass_backend_errors_through_verbatim() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post("/api/videos/resolve", &resolve_request(PRIVATE_LINK))
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_GATEWAY);
    assert_eq!(
        response.body().get("message").and_then(|v| v.as_str()),
        Some("This video is private")
    );
}

#[tokio::test]
async fn it_should_run_an_anonymous_download_to_completion() {
    let ctx = TestContext::new().await.unwrap();
    ctx.client
        .post("/api/videos/resolve", &resolve_request(SORA_LINK))
        .await
        .unwrap();

    let response = ctx.client.post_empty("/api/downloads/0").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.body(),
        &json!({ "outcome": "started", "index": 0, "remaining": 0 })
    );

    wait_until_complete(&ctx, 0).await;

    let session = ctx.client.get("/api/downloads").await.unwrap();
    let item = &session.body()["items"][0];
    assert_eq!(item["progress"].as_f64(), Some(100.0));
    assert_eq!(
        item.pointer("/saveTarget/filename").and_then(|v| v.as_str()),
        Some("SaveSora_c29yYTEw.mp4")
    );
    assert_eq!(ctx.handoff.delivered().await.len(), 1);

    let usage = ctx.client.get("/api/usage").await.unwrap();
    assert_usage_response(usage.body(), "anon", 1, 1);
}

#[tokio::test]
async fn it_should_block_anonymous_second_download() {
    let ctx = TestContext::new().await.unwrap();
    ctx.client
        .post("/api/videos/resolve", &resolve_request(SORA_LINK))
        .await
        .unwrap();
    ctx.client.post_empty("/api/downloads/0").await.unwrap();

    let response = ctx.client.post_empty("/api/downloads/1").await.unwrap();

    response
        .assert_status(StatusCode::PAYMENT_REQUIRED)
        .assert_error_message("Log in");

    let session = ctx.client.get("/api/downloads").await.unwrap();
    assert_item_status(session.body(), 1, "idle");
}

#[tokio::test]
async fn it_should_suggest_upgrade_when_free_plan_is_used_up() {
    let ctx = TestContext::new().await.unwrap();
    ctx.client.post_empty("/auth/login").await.unwrap();

    for _ in 0..3 {
        ctx.client
            .post("/api/videos/resolve", &resolve_request(SORA_LINK))
            .await
            .unwrap();
        ctx.client
            .post_empty("/api/downloads/0")
            .await
            .unwrap()
            .assert_status(StatusCode::OK);
    }

    ctx.client
        .post_empty("/api/downloads/1")
        .await
        .unwrap()
        .assert_status(StatusCode::PAYMENT_REQUIRED)
        .assert_error_message("Upgrade");
}

#[tokio::test]
async fn it_should_not_charge_for_retriggering_a_download() {
    let ctx = TestContext::new().await.unwrap();
    ctx.client.post_empty("/auth/login").await.unwrap();
    ctx.client
        .post("/api/videos/resolve", &resolve_request(SORA_LINK))
        .await
        .unwrap();

    ctx.client.post_empty("/api/downloads/1").await.unwrap();
    wait_until_complete(&ctx, 1).await;

    let response = ctx.client.post_empty("/api/downloads/1").await.unwrap();
    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.body().get("outcome").and_then(|v| v.as_str()),
        Some("already_complete")
    );

    let usage = ctx.client.get("/api/usage").await.unwrap();
    assert_usage_response(usage.body(), "free", 1, 3);
    assert_eq!(ctx.handoff.delivered().await.len(), 1);
}

#[tokio::test]
async fn it_should_restore_quota_on_the_next_day() {
    let ctx = TestContext::new().await.unwrap();
    ctx.client
        .post("/api/videos/resolve", &resolve_request(SORA_LINK))
        .await
        .unwrap();
    ctx.client.post_empty("/api/downloads/0").await.unwrap();

    ctx.clock.advance(Duration::days(1));

    let usage = ctx.client.get("/api/usage").await.unwrap();
    assert_usage_response(usage.body(), "anon", 0, 1);

    ctx.client
        .post_empty("/api/downloads/1")
        .await
        .unwrap()
        .assert_status(StatusCode::OK);
}

#[tokio::test]
async fn it_should_forget_results_after_reset() {
    let ctx = TestContext::new().await.unwrap();
    ctx.client
        .post("/api/videos/resolve", &resolve_request(SORA_LINK))
        .await
        .unwrap();

    ctx.client
        .post_empty("/api/downloads/reset")
        .await
        .unwrap()
        .assert_status(StatusCode::NO_CONTENT);

    ctx.client
        .get("/api/downloads")
        .await
        .unwrap()
        .assert_status(StatusCode::NOT_FOUND);
    ctx.client
        .post_empty("/api/downloads/0")
        .await
        .unwrap()
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn it_should_reject_unknown_download_positions() {
    let ctx = TestContext::new().await.unwrap();
    ctx.client
        .post("/api/videos/resolve", &resolve_request(SORA_LINK))
        .await
        .unwrap();

    ctx.client
        .post_empty("/api/downloads/7")
        .await
        .unwrap()
        .assert_status(StatusCode::NOT_FOUND);
}
