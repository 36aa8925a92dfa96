// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use pinyin_press::application::commands::posts::CreatePostCommand;
use pinyin_press::application::ports::{ClockPort, SlugGeneratorPort};
use pinyin_press::application::services::{ApplicationServices, SlugPolicy};
use pinyin_press::domain::post::{PostReadRepository, PostWriteRepository};
use pinyin_press::infrastructure::slug::TransliteratingSlugGenerator;
use serde_json::Value;
use std::sync::Arc;

/// 本番と同じスラグ生成器とインメモリストアでサービスを組み立てる
pub fn build_services(
    store: Arc<mocks::InMemoryPostStore>,
    policy: SlugPolicy,
) -> Arc<ApplicationServices> {
    build_services_with(
        store.clone(),
        store,
        Arc::new(mocks::FixedClock),
        policy,
    )
}

pub fn build_services_with(
    write_repo: Arc<dyn PostWriteRepository>,
    read_repo: Arc<dyn PostReadRepository>,
    clock: Arc<ClockPort>,
    policy: SlugPolicy,
) -> Arc<ApplicationServices> {
    let slugger: Arc<SlugGeneratorPort> = Arc::new(TransliteratingSlugGenerator);
    Arc::new(ApplicationServices::new(
        write_repo, read_repo, clock, slugger, policy,
    ))
}

pub fn make_test_router(store: Arc<mocks::InMemoryPostStore>) -> axum::Router {
    let services = build_services(store, SlugPolicy::default());
    let state = pinyin_press::presentation::http::state::HttpState { services };
    pinyin_press::presentation::http::routes::build_router(state)
}

pub fn command(title: &str) -> CreatePostCommand {
    CreatePostCommand::builder()
        .title(title)
        .content("Some markdown content")
        .build()
        .expect("valid command")
}

pub fn json_post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
