//! Coaching remarks derived from speaking-rate and filler metrics.
//!
//! Single source of truth for the pace band and filler threshold. Every
//! caller (HTTP handler, coach backend) goes through these functions, so
//! the thresholds cannot drift between surfaces.

/// Lower bound of the ideal pace band, in words per minute.
pub const IDEAL_WPM_MIN: u32 = 100;
/// Upper bound of the ideal pace band, in words per minute.
pub const IDEAL_WPM_MAX: u32 = 180;
/// Filler percentage above which the filler remark turns corrective.
pub const MAX_FILLER_PERCENTAGE: u32 = 5;

/// Builds the ordered two-entry feedback list: pace remark, then filler
/// remark. Deterministic in its two inputs.
pub fn generate_feedback(words_per_minute: u32, filler_percentage: u32) -> Vec<String> {
    vec![
        pace_remark(words_per_minute).to_string(),
        filler_remark(filler_percentage).to_string(),
    ]
}

/// Feedback pair returned when a recording contains no recognizable speech.
pub fn no_speech_feedback() -> Vec<String> {
    vec![
        "No speech was detected in this recording".to_string(),
        "Check your microphone and record a longer practice run".to_string(),
    ]
}

fn pace_remark(words_per_minute: u32) -> &'static str {
    if words_per_minute < IDEAL_WPM_MIN {
        "Try speaking a bit faster - aim for 120-150 WPM"
    } else if words_per_minute > IDEAL_WPM_MAX {
        "Slow down slightly for better clarity"
    } else {
        "Good speaking pace!"
    }
}

fn filler_remark(filler_percentage: u32) -> &'static str {
    if filler_percentage > MAX_FILLER_PERCENTAGE {
        "Try to reduce filler words - practice pausing instead"
    } else {
        "Great job minimizing filler words!"
    }
}
