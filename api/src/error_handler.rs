use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bot_notifier::DeliveryError;
use thiserror::Error;

use crate::core::http::response_envelope::ErrorBody;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / routing ---
    /// Request body could not be decoded; carries the decoder's reason.
    #[error("{0}")]
    BadRequest(String),

    /// Relaying to the chat bot failed.
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // 4xx
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,

            // 5xx
            AppError::Delivery(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Bind(_) | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR, // startup-only
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Any JSON extraction failure (syntax, shape, content type) is the caller's fault.
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        AppError::BadRequest(err.body_text())
    }
}
