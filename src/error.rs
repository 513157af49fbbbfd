use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// The downstream auth call did not succeed. Carries no downstream detail.
    #[error("Authentication failed")]
    Authentication,

    #[error("Downstream error {status}: {body}")]
    Downstream { status: StatusCode, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Authentication => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Authentication failed" })),
            )
                .into_response(),
            // Downstream status and body are echoed verbatim
            AppError::Downstream { status, body } => (status, body).into_response(),
            AppError::Network(e) => (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": format!("Downstream request failed: {}", e) })),
            )
                .into_response(),
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": other.to_string() })),
            )
                .into_response(),
        }
    }
}

// Implement alias for Result to simplify usage
pub type AppResult<T> = Result<T, AppError>;
