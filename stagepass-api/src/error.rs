use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use stagepass_core::HotelsError;

#[derive(Debug)]
pub enum AppError {
    NotFoundError(String),
    PaymentRequiredError(String),
    // Malformed path parameter; responds with a bare status, no payload
    InvalidId,
    Anyhow(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::PaymentRequiredError(msg) => (StatusCode::PAYMENT_REQUIRED, msg),
            AppError::InvalidId => return StatusCode::BAD_REQUEST.into_response(),
            AppError::Anyhow(err) => {
                tracing::error!("Unhandled error: {}", err);
                (StatusCode::BAD_REQUEST, "Bad Request".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<HotelsError> for AppError {
    fn from(err: HotelsError) -> Self {
        match err {
            HotelsError::NotFound(msg) => AppError::NotFoundError(msg),
            HotelsError::PaymentRequired(msg) => AppError::PaymentRequiredError(msg),
            HotelsError::Repository(err) => AppError::Anyhow(anyhow::anyhow!(err)),
        }
    }
}
