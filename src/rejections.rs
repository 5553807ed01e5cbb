use std::fmt::Display;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    /// Client-side problem, reported back verbatim.
    Input(String),
    NotFound(&'static str),
    PayloadTooLarge,
    /// Server-side fault; the cause is logged, never sent.
    Internal(&'static str),
}

impl AppError {
    pub fn input(message: impl Into<String>) -> Self {
        AppError::Input(message.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Input(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::Input(message) => message,
            AppError::NotFound(message) => message,
            AppError::PayloadTooLarge => "Uploaded file is too large",
            AppError::Internal(_) => "Internal server error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}

pub trait ResultExt<T> {
    /// Treat the error as a server fault.
    fn reject(self, context: &'static str) -> Result<T, AppError>;

    /// Treat the error as bad client input and report its message.
    fn reject_input(self, context: &'static str) -> Result<T, AppError>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn reject(self, context: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{context}: {e}");
            AppError::Internal(context)
        })
    }

    fn reject_input(self, context: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::debug!("{context}: {e}");
            AppError::Input(e.to_string())
        })
    }
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Not found")
}
