use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use core_types::ValidationError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
    #[error("Database error: {0}")]
    Database(#[from] database::DbError),
    #[error("Mail error: {0}")]
    Mail(#[from] mailer::MailerError),
}

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Converts our custom `AppError` into an HTTP response.
///
/// Client mistakes become a 400 with `{message, field?}`, or a 413 for an
/// oversized body. Downstream failures are logged here and reach the client
/// only as a generic 500.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(err) => (StatusCode::BAD_REQUEST, Json(err)).into_response(),
            AppError::InvalidBody(rejection) => {
                tracing::debug!(error = %rejection, "Rejected unreadable request body.");
                let (status, message) = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large")
                } else {
                    (StatusCode::BAD_REQUEST, "Invalid request body")
                };
                (status, Json(json!({ "message": message }))).into_response()
            }
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
                internal_error()
            }
            AppError::Mail(mail_err) => {
                tracing::error!(error = ?mail_err, "Mail error.");
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": INTERNAL_ERROR_MESSAGE })),
    )
        .into_response()
}
