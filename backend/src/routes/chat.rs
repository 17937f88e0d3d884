use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::ChatResponse;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(chat))
}

/// POST /api/chat
///
/// Request body: `{ "messages": [{ "role": "user" | "assistant", "content": "..." }] }`
///
/// Returns `{ "content": "..." }`, or `{ "error": "...", "details"?: "..." }`
/// with the upstream status (or 500 for local failures).
///
/// The body is taken as raw bytes so malformed JSON and oversized bodies
/// surface as the same 500 error shape instead of an extractor rejection.
async fn chat(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let result = match body {
        Ok(body) => {
            info!("POST /api/chat ({} bytes)", body.len());
            state.chat_service.handle(&body).await
        }
        Err(rejection) => {
            info!("POST /api/chat (body rejected)");
            state
                .chat_service
                .ensure_configured()
                .and_then(|_| Err(AppError::Transport(rejection.body_text())))
        }
    };

    let response = result.inspect_err(|e| {
        if matches!(e, AppError::Configuration(_) | AppError::Transport(_)) {
            error!("Chat API error: {}", e);
        }
    })?;

    Ok(Json(response))
}
