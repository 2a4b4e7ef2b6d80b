use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One stored voice practice session: the raw inputs plus the analysis
/// produced for them at the time of recording.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VoiceSessionRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub transcript: String,
    pub duration_seconds: f64,
    pub analysis: Value,
    pub created_at: DateTime<Utc>,
}
