use crate::{error::AppError, AppState};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use core_types::{DemoRequestPayload, EarlyAccessPayload, InvestorRequestPayload};
use database::DbError;
use serde::Serialize;
use std::sync::Arc;

const EARLY_ACCESS_JOINED: &str = "You've been added to our early access list.";
const EARLY_ACCESS_ALREADY_JOINED: &str = "You're already on the early access list.";
const DEMO_REQUEST_RECEIVED: &str = "Your demo request has been received.";
const INVESTOR_REQUEST_RECEIVED: &str = "Your investor deck request has been received.";

/// The body of every successful submission.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
}

impl SubmissionResponse {
    fn ok(message: &str) -> Json<Self> {
        Json(Self {
            success: true,
            message: message.to_string(),
        })
    }
}

type SubmissionResult = Result<Json<SubmissionResponse>, AppError>;

/// # POST /api/early-access
/// Joins the waitlist. Submitting an address that is already on the list
/// succeeds without creating a second row. A failed notification email is
/// logged and otherwise ignored.
pub async fn create_early_access(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EarlyAccessPayload>, JsonRejection>,
) -> SubmissionResult {
    let Json(payload) = payload?;
    let signup = payload.validate()?;

    if state
        .storage
        .find_early_access_by_email(&signup.email)
        .await?
        .is_some()
    {
        tracing::info!("Early access email already registered.");
        return Ok(SubmissionResponse::ok(EARLY_ACCESS_ALREADY_JOINED));
    }

    let created = match state.storage.create_early_access_signup(&signup).await {
        Ok(created) => created,
        // A concurrent request inserted the same email after our existence check.
        Err(DbError::Duplicate) => {
            tracing::info!("Early access email registered concurrently.");
            return Ok(SubmissionResponse::ok(EARLY_ACCESS_ALREADY_JOINED));
        }
        Err(e) => return Err(e.into()),
    };
    tracing::info!(signup_id = created.id, "Early access signup persisted.");

    if let Err(e) = state.notifier.send_early_access_email(&created.email).await {
        tracing::warn!(error = %e, signup_id = created.id, "Early access email failed; signup kept.");
    }

    Ok(SubmissionResponse::ok(EARLY_ACCESS_JOINED))
}

/// # POST /api/demo-request
/// Persists the request, then emails the admin. Either failure is a 500;
/// the row is not rolled back when only the email fails.
pub async fn create_demo_request(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DemoRequestPayload>, JsonRejection>,
) -> SubmissionResult {
    let Json(payload) = payload?;
    let request = payload.validate()?;

    let created = state.storage.create_demo_request(&request).await?;
    tracing::info!(request_id = created.id, "Demo request persisted.");

    state.notifier.send_demo_request_email(&created).await?;

    Ok(SubmissionResponse::ok(DEMO_REQUEST_RECEIVED))
}

/// # POST /api/investor-request
/// Persists the request. No email is sent.
pub async fn create_investor_request(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<InvestorRequestPayload>, JsonRejection>,
) -> SubmissionResult {
    let Json(payload) = payload?;
    let request = payload.validate()?;

    let created = state.storage.create_investor_request(&request).await?;
    tracing::info!(request_id = created.id, "Investor request persisted.");

    Ok(SubmissionResponse::ok(INVESTOR_REQUEST_RECEIVED))
}
