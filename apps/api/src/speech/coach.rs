//! Speech coach seam: a pluggable analysis/feedback backend.
//!
//! Default: `RuleBasedCoach` (pure-Rust, deterministic, fully testable).
//! A model-backed coach can implement `SpeechCoach` later and be swapped in
//! at startup without touching the endpoint, handler, or caller code.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::speech::analyzer::{analyze_transcript, AnalyzeError, SpeechMetrics};
use crate::speech::lexicon::FillerLexicon;

/// The coach trait. Carried in `AppState` as `Arc<dyn SpeechCoach>`.
#[async_trait]
pub trait SpeechCoach: Send + Sync {
    async fn analyze(
        &self,
        transcript: &str,
        duration_seconds: f64,
    ) -> Result<SpeechMetrics, AppError>;
}

/// Rule-based coach wrapping the pure analyzer with a configured lexicon.
pub struct RuleBasedCoach {
    lexicon: FillerLexicon,
}

impl RuleBasedCoach {
    pub fn new(lexicon: FillerLexicon) -> Self {
        Self { lexicon }
    }
}

#[async_trait]
impl SpeechCoach for RuleBasedCoach {
    async fn analyze(
        &self,
        transcript: &str,
        duration_seconds: f64,
    ) -> Result<SpeechMetrics, AppError> {
        analyze_transcript(transcript, duration_seconds, &self.lexicon).map_err(|e| match e {
            AnalyzeError::InvalidDuration(_) => AppError::Validation(e.to_string()),
        })
    }
}
