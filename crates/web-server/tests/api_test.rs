mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use common::{app, app_with_mailer, post_json, post_raw, router_with, ADMIN_EMAIL};
use core_types::{
    DemoRequest, EarlyAccessSignup, InvestorRequest, NewDemoRequest, NewEarlyAccessSignup,
    NewInvestorRequest,
};
use database::{DbError, Storage};
use mailer::RecordingMailer;
use serde_json::{json, Value};
use std::sync::Arc;

fn demo_body() -> Value {
    json!({
        "orgName": "Acme Health",
        "fullName": "John Doe",
        "workEmail": "john@acme.com",
        "role": "Clinical Director",
        "orgType": "Pharmacy",
        "phone": "+15551234567"
    })
}

fn investor_body() -> Value {
    json!({
        "firstName": "Jane",
        "lastName": "Smith",
        "email": "jane@venture.com",
        "firmName": "Acme Ventures",
        "role": "Partner",
        "investorTypes": ["VC", "Angel"],
        "checkSize": "$250k to $1M",
        "stageFocus": "Seed"
    })
}

/// A backend that is always down.
struct UnavailableStorage;

#[async_trait]
impl Storage for UnavailableStorage {
    async fn create_early_access_signup(
        &self,
        _signup: &NewEarlyAccessSignup,
    ) -> Result<EarlyAccessSignup, DbError> {
        Err(DbError::ConnectionConfigError("database is down".to_string()))
    }

    async fn find_early_access_by_email(
        &self,
        _email: &str,
    ) -> Result<Option<EarlyAccessSignup>, DbError> {
        Err(DbError::ConnectionConfigError("database is down".to_string()))
    }

    async fn create_demo_request(&self, _request: &NewDemoRequest) -> Result<DemoRequest, DbError> {
        Err(DbError::ConnectionConfigError("database is down".to_string()))
    }

    async fn create_investor_request(
        &self,
        _request: &NewInvestorRequest,
    ) -> Result<InvestorRequest, DbError> {
        Err(DbError::ConnectionConfigError("database is down".to_string()))
    }
}

/// Sees no existing signup, then loses the insert to a concurrent request.
struct RaceLostStorage;

#[async_trait]
impl Storage for RaceLostStorage {
    async fn create_early_access_signup(
        &self,
        _signup: &NewEarlyAccessSignup,
    ) -> Result<EarlyAccessSignup, DbError> {
        Err(DbError::Duplicate)
    }

    async fn find_early_access_by_email(
        &self,
        _email: &str,
    ) -> Result<Option<EarlyAccessSignup>, DbError> {
        Ok(None)
    }

    async fn create_demo_request(&self, _request: &NewDemoRequest) -> Result<DemoRequest, DbError> {
        Err(DbError::ConnectionConfigError("not used".to_string()))
    }

    async fn create_investor_request(
        &self,
        _request: &NewInvestorRequest,
    ) -> Result<InvestorRequest, DbError> {
        Err(DbError::ConnectionConfigError("not used".to_string()))
    }
}

// --- Demo requests ---

#[tokio::test]
async fn test_demo_request_persists_and_notifies_admin() {
    let app = app();

    let (status, body) = post_json(&app.router, "/api/demo-request", demo_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert!(body["message"].is_string());

    let rows = app.storage.demo_requests().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].org_name, "Acme Health");
    assert_eq!(rows[0].full_name, "John Doe");
    assert_eq!(rows[0].work_email, "john@acme.com");
    assert_eq!(rows[0].phone, "+15551234567");

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, ADMIN_EMAIL);
    assert!(sent[0].subject.contains("John Doe"));
    assert!(sent[0].text.contains("Acme Health"));
}

#[tokio::test]
async fn test_demo_request_missing_field_is_rejected() {
    let app = app();
    let mut body = demo_body();
    body.as_object_mut().unwrap().remove("role");

    let (status, body) = post_json(&app.router, "/api/demo-request", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], json!("role"));
    assert_eq!(body["message"], json!("Role is required"));
    assert!(app.storage.demo_requests().await.is_empty());
    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn test_demo_request_invalid_email_is_rejected() {
    let app = app();
    let mut body = demo_body();
    body["workEmail"] = json!("john-at-acme");

    let (status, body) = post_json(&app.router, "/api/demo-request", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], json!("workEmail"));
    assert_eq!(body["message"], json!("Invalid email address"));
    assert!(app.storage.demo_requests().await.is_empty());
}

#[tokio::test]
async fn test_demo_request_reports_phone_before_other_fields() {
    let app = app();
    let mut body = demo_body();
    body["orgType"] = json!("");
    body["phone"] = json!("call me");

    let (status, body) = post_json(&app.router, "/api/demo-request", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], json!("phone"));
    assert_eq!(body["message"], json!("Invalid phone number"));
}

#[tokio::test]
async fn test_demo_request_missing_phone_keeps_field_order() {
    let app = app();

    let (status, body) =
        post_json(&app.router, "/api/demo-request", json!({ "fullName": "John Doe" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], json!("orgName"));
    assert_eq!(body["message"], json!("Organization name is required"));
}

#[tokio::test]
async fn test_demo_request_mail_failure_keeps_row() {
    let app = app_with_mailer(RecordingMailer::failing());

    let (status, body) = post_json(&app.router, "/api/demo-request", demo_body()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Internal server error" }));
    // The insert is not rolled back.
    assert_eq!(app.storage.demo_requests().await.len(), 1);
}

#[tokio::test]
async fn test_demo_request_storage_failure_sends_no_email() {
    let mailer = Arc::new(RecordingMailer::new());
    let router = router_with(Arc::new(UnavailableStorage), mailer.clone());

    let (status, body) = post_json(&router, "/api/demo-request", demo_body()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], json!("Internal server error"));
    assert!(mailer.sent().is_empty());
}

// --- Early access ---

#[tokio::test]
async fn test_early_access_signup_persists_and_notifies_admin() {
    let app = app();

    let (status, body) =
        post_json(&app.router, "/api/early-access", json!({ "email": "a@b.co" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let rows = app.storage.early_access_signups().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].email, "a@b.co");

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].subject.contains("a@b.co"));
}

#[tokio::test]
async fn test_early_access_invalid_email_is_rejected() {
    let app = app();

    let (status, body) =
        post_json(&app.router, "/api/early-access", json!({ "email": "not-an-email" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Invalid email address"));
    assert!(app.storage.early_access_signups().await.is_empty());
    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn test_early_access_duplicate_is_idempotent() {
    let app = app();

    let (first, _) =
        post_json(&app.router, "/api/early-access", json!({ "email": "a@b.co" })).await;
    let (second, body) =
        post_json(&app.router, "/api/early-access", json!({ "email": "A@B.co" })).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(app.storage.early_access_signups().await.len(), 1);
    // Only the first signup is news to the admin.
    assert_eq!(app.mailer.sent().len(), 1);
}

#[tokio::test]
async fn test_early_access_concurrent_duplicates_store_one_row() {
    let app = app();
    let body = json!({ "email": "race@example.com" });

    let (first, second) = tokio::join!(
        post_json(&app.router, "/api/early-access", body.clone()),
        post_json(&app.router, "/api/early-access", body.clone()),
    );

    assert_eq!(first.0, StatusCode::OK);
    assert_eq!(second.0, StatusCode::OK);
    assert_eq!(app.storage.early_access_signups().await.len(), 1);
}

#[tokio::test]
async fn test_early_access_insert_losing_race_counts_as_joined() {
    let mailer = Arc::new(RecordingMailer::new());
    let router = router_with(Arc::new(RaceLostStorage), mailer.clone());

    let (status, body) =
        post_json(&router, "/api/early-access", json!({ "email": "race@example.com" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "message": "You're already on the early access list." })
    );
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn test_early_access_storage_failure_is_internal_error() {
    let mailer = Arc::new(RecordingMailer::new());
    let router = router_with(Arc::new(UnavailableStorage), mailer.clone());

    let (status, body) =
        post_json(&router, "/api/early-access", json!({ "email": "a@b.co" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], json!("Internal server error"));
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn test_early_access_mail_failure_still_succeeds() {
    let app = app_with_mailer(RecordingMailer::failing());

    let (status, body) =
        post_json(&app.router, "/api/early-access", json!({ "email": "a@b.co" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(app.storage.early_access_signups().await.len(), 1);
}

// --- Investor requests ---

#[tokio::test]
async fn test_investor_request_persists_without_email() {
    let app = app();

    let (status, body) = post_json(&app.router, "/api/investor-request", investor_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let rows = app.storage.investor_requests().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].firm_name, "Acme Ventures");
    assert_eq!(rows[0].investor_types, vec!["VC".to_string(), "Angel".to_string()]);
    assert_eq!(rows[0].check_size.as_deref(), Some("$250k to $1M"));
    assert_eq!(rows[0].stage_focus.as_deref(), Some("Seed"));
    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn test_investor_request_invalid_email_is_rejected() {
    let app = app();
    let mut body = investor_body();
    body["email"] = json!("jane@");

    let (status, body) = post_json(&app.router, "/api/investor-request", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], json!("email"));
    assert!(app.storage.investor_requests().await.is_empty());
}

// --- Request bodies ---

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = app();

    let (status, body) = post_raw(&app.router, "/api/demo-request", "{\"orgName\": ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Invalid request body" }));
    assert!(app.storage.demo_requests().await.is_empty());
}

#[tokio::test]
async fn test_oversized_body_is_payload_too_large() {
    let app = app();
    let email = format!("{}@example.com", "a".repeat(70 * 1024));

    let (status, body) = post_json(&app.router, "/api/early-access", json!({ "email": email })).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body, json!({ "message": "Request body too large" }));
    assert!(app.storage.early_access_signups().await.is_empty());
}

#[tokio::test]
async fn test_wrongly_typed_field_is_rejected() {
    let app = app();

    let (status, body) =
        post_json(&app.router, "/api/early-access", json!({ "email": 42 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Invalid request body"));
}
