//! Axum route handlers for the Mock Interview Chatbot.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::history::ConversationTurn;
use crate::interview::session::SessionHandle;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SessionCreated {
    pub session_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub turns: Vec<ConversationTurn>,
}

#[derive(Debug, Deserialize)]
pub struct TurnRequest {
    pub user_input: String,
}

#[derive(Debug, Serialize)]
pub struct TurnResponse {
    pub reply: String,
    /// Full history after this turn, oldest first.
    pub turns: Vec<ConversationTurn>,
}

/// POST /api/v1/interview/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionCreated>) {
    let session_id = state.sessions.create();
    (StatusCode::CREATED, Json(SessionCreated { session_id }))
}

/// GET /api/v1/interview/sessions/:id
///
/// Shows committed turns only; a turn still waiting on the model is not listed.
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = find_session(&state, session_id)?;
    Ok(Json(SessionView {
        session_id,
        turns: session.turns().await,
    }))
}

/// POST /api/v1/interview/sessions/:id/turns
pub async fn handle_post_turn(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<TurnRequest>,
) -> Result<Json<TurnResponse>, AppError> {
    let session = find_session(&state, session_id)?;
    let (reply, turns) = session
        .submit_turn(
            &state.chain,
            &request.user_input,
            state.config.interview_history_window,
        )
        .await?;

    Ok(Json(TurnResponse { reply, turns }))
}

/// DELETE /api/v1/interview/sessions/:id
pub async fn handle_end_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.end(session_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(session_id))
    }
}

fn find_session(state: &AppState, session_id: Uuid) -> Result<SessionHandle, AppError> {
    state
        .sessions
        .get(session_id)
        .ok_or_else(|| session_not_found(session_id))
}

fn session_not_found(session_id: Uuid) -> AppError {
    AppError::NotFound(format!("Interview session {session_id} not found"))
}
