//! Axum route handlers for the Voice API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::session::VoiceSessionRow;
use crate::speech::analyzer::SpeechMetrics;
use crate::speech::sessions::{insert_session, list_sessions};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Fields are optional so a missing field surfaces as a 400 validation
/// error with a named field, not a generic body-rejection.
#[derive(Debug, Deserialize)]
pub struct AnalyzeVoiceRequest {
    pub transcript: Option<String>,
    pub duration: Option<f64>,
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeVoiceResponse {
    pub success: bool,
    pub session_id: Uuid,
    pub analysis: SpeechMetrics,
}

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/voice/analyze
///
/// Analyzes a finished recording, stores the session, and returns the
/// metrics. An empty transcript is analyzed (the client renders the "no
/// speech" state); a non-positive duration is rejected before analysis.
pub async fn handle_analyze_voice(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeVoiceRequest>,
) -> Result<Json<AnalyzeVoiceResponse>, AppError> {
    let transcript = request
        .transcript
        .ok_or_else(|| AppError::Validation("transcript is required".to_string()))?;
    let duration = request
        .duration
        .ok_or_else(|| AppError::Validation("duration is required".to_string()))?;
    let user_id = request
        .user_id
        .ok_or_else(|| AppError::Validation("user_id is required".to_string()))?;

    if duration <= 0.0 {
        return Err(AppError::Validation(
            "duration must be a positive number of seconds".to_string(),
        ));
    }

    let analysis = state.coach.analyze(&transcript, duration).await?;

    let session_id = insert_session(&state.db, user_id, &transcript, duration, &analysis)
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(AnalyzeVoiceResponse {
        success: true,
        session_id,
        analysis,
    }))
}

/// GET /api/v1/voice/sessions
///
/// Returns the user's stored practice sessions, newest first.
pub async fn handle_list_sessions(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<VoiceSessionRow>>, AppError> {
    let sessions = list_sessions(&state.db, params.user_id)
        .await
        .map_err(AppError::Internal)?;
    Ok(Json(sessions))
}

/// GET /api/v1/voice/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<VoiceSessionRow>, AppError> {
    let session =
        sqlx::query_as::<_, VoiceSessionRow>("SELECT * FROM voice_sessions WHERE id = $1")
            .bind(session_id)
            .fetch_optional(&state.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Voice session {session_id} not found")))?;

    Ok(Json(session))
}
