use anyhow::Result;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::session::VoiceSessionRow;
use crate::speech::analyzer::SpeechMetrics;

/// Persists one analyzed practice session and returns its id.
pub async fn insert_session(
    pool: &PgPool,
    user_id: Uuid,
    transcript: &str,
    duration_seconds: f64,
    analysis: &SpeechMetrics,
) -> Result<Uuid> {
    let session_id = Uuid::new_v4();
    let analysis_json = serde_json::to_value(analysis)?;

    sqlx::query(
        r#"
        INSERT INTO voice_sessions
            (id, user_id, transcript, duration_seconds, analysis)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(session_id)
    .bind(user_id)
    .bind(transcript)
    .bind(duration_seconds)
    .bind(&analysis_json)
    .execute(pool)
    .await?;

    info!("Stored voice session {session_id} for user {user_id}");

    Ok(session_id)
}

/// Returns all stored sessions for a user, newest first.
pub async fn list_sessions(pool: &PgPool, user_id: Uuid) -> Result<Vec<VoiceSessionRow>> {
    Ok(sqlx::query_as::<_, VoiceSessionRow>(
        "SELECT * FROM voice_sessions WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?)
}
