#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use database::{MemoryStorage, Storage};
use http_body_util::BodyExt;
use mailer::{Notifier, RecordingMailer};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;
use web_server::{build_router, AppState};

pub const ADMIN_EMAIL: &str = "admin@talkingpills.com";

pub struct TestApp {
    pub router: Router,
    pub storage: Arc<MemoryStorage>,
    pub mailer: Arc<RecordingMailer>,
}

pub fn assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../assets")
}

pub fn app() -> TestApp {
    app_with_mailer(RecordingMailer::new())
}

pub fn app_with_mailer(mailer: RecordingMailer) -> TestApp {
    let storage = Arc::new(MemoryStorage::new());
    let mailer = Arc::new(mailer);
    let router = router_with(storage.clone(), mailer.clone());
    TestApp {
        router,
        storage,
        mailer,
    }
}

pub fn router_with(storage: Arc<dyn Storage>, mailer: Arc<RecordingMailer>) -> Router {
    let state = Arc::new(AppState {
        storage,
        notifier: Notifier::new(mailer, ADMIN_EMAIL).unwrap(),
    });
    build_router(state, &assets_dir())
}

pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn post_raw(router: &Router, path: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, text) = send(router, request).await;
    (status, serde_json::from_str(&text).unwrap_or(Value::Null))
}

pub async fn post_json(router: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    post_raw(router, path, &body.to_string()).await
}

pub async fn get(router: &Router, path: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    send(router, request).await
}
