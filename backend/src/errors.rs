use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::external::completion_provider::ProviderError;
use crate::models::ErrorBody;

pub const UPSTREAM_FAILURE: &str = "Failed to get response from AI";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Upstream error: HTTP {status}")]
    Upstream { status: u16, details: String },
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Not found")]
    NotFound,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Configuration(_) | AppError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    pub fn body(&self) -> ErrorBody {
        match self {
            AppError::Configuration(msg) | AppError::Transport(msg) => ErrorBody {
                error: msg.clone(),
                details: None,
            },
            AppError::Upstream { details, .. } => ErrorBody {
                error: UPSTREAM_FAILURE.to_string(),
                details: Some(details.clone()),
            },
            AppError::NotFound => ErrorBody {
                error: "Not found".to_string(),
                details: None,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

impl From<ProviderError> for AppError {
    fn from(value: ProviderError) -> Self {
        match value {
            ProviderError::Upstream { status, body } => AppError::Upstream { status, details: body },
            ProviderError::Transport(msg) => AppError::Transport(msg),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        AppError::Transport(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_is_mirrored() {
        let err = AppError::from(ProviderError::Upstream { status: 429, body: "rate limited".to_string() });

        assert_eq!(err.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            err.body(),
            ErrorBody {
                error: UPSTREAM_FAILURE.to_string(),
                details: Some("rate limited".to_string()),
            }
        );
    }

    #[test]
    fn test_invalid_upstream_status_becomes_bad_gateway() {
        let err = AppError::Upstream { status: 1000, details: String::new() };
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_local_failures_are_500() {
        assert_eq!(AppError::Configuration("x".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(AppError::Transport("x".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(AppError::Transport("boom".into()).body().error, "boom");
    }
}
