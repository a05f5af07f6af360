use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::models::{Message, SessionView};
use crate::chat::session::SubmitRejection;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SubmitRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct SubmitAccepted {
    pub message: Message,
    pub busy: bool,
}

impl From<SubmitRejection> for AppError {
    fn from(rejection: SubmitRejection) -> Self {
        match rejection {
            SubmitRejection::Blank => AppError::Validation(rejection.to_string()),
            SubmitRejection::Busy => AppError::Conflict(rejection.to_string()),
        }
    }
}

/// POST /api/v1/chat/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionView>) {
    let (_, handle) = state.sessions.create().await;
    (StatusCode::CREATED, Json(handle.view().await))
}

/// GET /api/v1/chat/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let handle = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Chat session {id} not found")))?;
    Ok(Json(handle.view().await))
}

/// POST /api/v1/chat/sessions/:id/messages
///
/// Responds as soon as the user message is stored; the bot reply is appended
/// by a background task and shows up on the next GET of the session.
pub async fn handle_submit_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SubmitRequest>,
) -> Result<(StatusCode, Json<SubmitAccepted>), AppError> {
    let handle = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Chat session {id} not found")))?;

    // The reply task is detached; clients poll the session for it.
    let (message, _reply) = handle.submit(state.completions.clone(), &req.text).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(SubmitAccepted {
            message,
            busy: true,
        }),
    ))
}
