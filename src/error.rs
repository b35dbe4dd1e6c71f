use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Could not extract a keyword from the prompt")]
    EmptyExtraction,

    #[error("{0} is not configured")]
    MissingCredentials(&'static str),

    #[error("Error contacting {service}: {message}")]
    UpstreamUnavailable {
        service: &'static str,
        message: String,
    },

    #[error("Unexpected response from {service}: {message}")]
    MalformedResponse {
        service: &'static str,
        message: String,
    },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn upstream(service: &'static str, message: impl ToString) -> Self {
        AppError::UpstreamUnavailable {
            service,
            message: message.to_string(),
        }
    }

    pub fn malformed(service: &'static str, message: impl ToString) -> Self {
        AppError::MalformedResponse {
            service,
            message: message.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::EmptyExtraction => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::MissingCredentials(_)
            | AppError::UpstreamUnavailable { .. }
            | AppError::MalformedResponse { .. }
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        }

        let body = Json(json!({
            "detail": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
