use std::sync::Arc;

use sqlx::PgPool;

use crate::speech::coach::SpeechCoach;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable speech coach. Default: RuleBasedCoach with the configured
    /// filler lexicon; a model-backed coach slots in here.
    pub coach: Arc<dyn SpeechCoach>,
}
