//! Speech-metrics analyzer.
//!
//! Maps a transcript and a recording duration to an objective metrics
//! record plus a short list of coaching remarks. Pure computation with no
//! I/O or shared state; identical inputs always yield identical outputs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::speech::feedback::{generate_feedback, no_speech_feedback};
use crate::speech::lexicon::FillerLexicon;

/// Punctuation stripped from token edges before filler matching. Word
/// counting is done on the raw tokens, so stripping never changes
/// `total_words`.
const TOKEN_PUNCTUATION: &[char] = &['.', ',', '!', '?'];

#[derive(Debug, Error, PartialEq)]
pub enum AnalyzeError {
    #[error("recording duration must be positive, got {0}")]
    InvalidDuration(f64),
}

/// Metrics for one analyzed recording. Immutable once produced; callers
/// serialize it as JSON for storage and for the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechMetrics {
    pub words_per_minute: u32,
    pub filler_word_count: u32,
    /// 0-100, rounded to the nearest integer.
    pub filler_percentage: u32,
    pub total_words: u32,
    pub total_sentences: u32,
    pub avg_words_per_sentence: u32,
    /// Inverse of the filler ratio, 0-100.
    pub clarity_score: u32,
    pub duration_seconds: f64,
    /// Ordered remarks: pace first, then fillers.
    pub feedback: Vec<String>,
}

/// Analyzes a transcript against a recording duration.
///
/// A non-positive duration is fatal and checked before anything else. An
/// empty (or whitespace-only) transcript is not an error: it produces an
/// all-zero record with "no speech" feedback, so the caller can render a
/// friendly empty state.
pub fn analyze_transcript(
    transcript: &str,
    duration_seconds: f64,
    lexicon: &FillerLexicon,
) -> Result<SpeechMetrics, AnalyzeError> {
    if duration_seconds <= 0.0 {
        return Err(AnalyzeError::InvalidDuration(duration_seconds));
    }

    let tokens: Vec<&str> = transcript.split_whitespace().collect();
    let total_words = tokens.len() as u32;

    if total_words == 0 {
        return Ok(SpeechMetrics {
            words_per_minute: 0,
            filler_word_count: 0,
            filler_percentage: 0,
            total_words: 0,
            total_sentences: 0,
            avg_words_per_sentence: 0,
            clarity_score: 0,
            duration_seconds,
            feedback: no_speech_feedback(),
        });
    }

    let filler_word_count = tokens
        .iter()
        .filter(|token| lexicon.contains(&clean_token(token)))
        .count() as u32;

    let words_per_minute =
        (f64::from(total_words) / duration_seconds * 60.0).round() as u32;
    let filler_percentage =
        (f64::from(filler_word_count) / f64::from(total_words) * 100.0).round() as u32;
    let clarity_score = ((1.0 - f64::from(filler_word_count) / f64::from(total_words)) * 100.0)
        .round()
        .max(0.0) as u32;

    let total_sentences = count_sentences(transcript);
    let avg_words_per_sentence = if total_sentences > 0 {
        (f64::from(total_words) / f64::from(total_sentences)).round() as u32
    } else {
        0
    };

    Ok(SpeechMetrics {
        words_per_minute,
        filler_word_count,
        filler_percentage,
        total_words,
        total_sentences,
        avg_words_per_sentence,
        clarity_score,
        duration_seconds,
        feedback: generate_feedback(words_per_minute, filler_percentage),
    })
}

/// Strips edge punctuation and lowercases a raw token for lexicon lookup.
fn clean_token(token: &str) -> String {
    token.trim_matches(TOKEN_PUNCTUATION).to_lowercase()
}

/// Counts sentences as non-empty segments between terminator runs.
fn count_sentences(transcript: &str) -> u32 {
    transcript
        .split(['.', '!', '?'])
        .filter(|segment| !segment.trim().is_empty())
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(transcript: &str, duration_seconds: f64) -> Result<SpeechMetrics, AnalyzeError> {
        analyze_transcript(transcript, duration_seconds, &FillerLexicon::default())
    }

    #[test]
    fn test_total_words_counts_raw_whitespace_tokens() {
        let metrics = analyze("one  two\tthree\nfour", 60.0).unwrap();
        assert_eq!(metrics.total_words, 4);
    }

    #[test]
    fn test_slow_pace_with_fillers() {
        let metrics = analyze("This is a test um test uh test", 30.0).unwrap();
        assert_eq!(metrics.total_words, 8);
        assert_eq!(metrics.filler_word_count, 2);
        assert_eq!(metrics.filler_percentage, 25);
        assert_eq!(metrics.words_per_minute, 16);
        assert!(metrics.feedback[0].contains("faster"));
        assert!(metrics.feedback[1].contains("reduce filler words"));
    }

    #[test]
    fn test_normal_pace_without_fillers() {
        let metrics = analyze(
            "I am speaking at a perfectly normal and steady pace today",
            5.0,
        )
        .unwrap();
        assert_eq!(metrics.total_words, 11);
        assert_eq!(metrics.filler_word_count, 0);
        assert_eq!(metrics.filler_percentage, 0);
        assert_eq!(metrics.words_per_minute, 132);
        assert_eq!(metrics.clarity_score, 100);
        assert_eq!(metrics.feedback[0], "Good speaking pace!");
        assert_eq!(metrics.feedback[1], "Great job minimizing filler words!");
    }

    /// Multi-word lexicon entries never match single tokens: "you" and
    /// "know" stay unmatched even though "you know" is in the default set.
    #[test]
    fn test_filler_matching_is_per_token() {
        let metrics = analyze("um uh like you know actually", 2.0).unwrap();
        assert_eq!(metrics.total_words, 6);
        assert_eq!(metrics.filler_word_count, 4);
        assert_eq!(metrics.filler_percentage, 67);
        assert_eq!(metrics.words_per_minute, 180);
        assert_eq!(metrics.feedback[0], "Good speaking pace!");
    }

    #[test]
    fn test_punctuation_and_case_ignored_for_matching() {
        let metrics = analyze("Um, uh. LIKE!", 10.0).unwrap();
        assert_eq!(metrics.total_words, 3);
        assert_eq!(metrics.filler_word_count, 3);
        assert_eq!(metrics.filler_percentage, 100);
        assert_eq!(metrics.clarity_score, 0);
    }

    #[test]
    fn test_empty_transcript_recovers_with_zero_metrics() {
        for transcript in ["", "   \t\n"] {
            let metrics = analyze(transcript, 10.0).unwrap();
            assert_eq!(metrics.total_words, 0);
            assert_eq!(metrics.filler_word_count, 0);
            assert_eq!(metrics.filler_percentage, 0);
            assert_eq!(metrics.words_per_minute, 0);
            assert_eq!(metrics.total_sentences, 0);
            assert_eq!(metrics.avg_words_per_sentence, 0);
            assert_eq!(metrics.clarity_score, 0);
            assert_eq!(metrics.feedback.len(), 2);
            assert!(metrics.feedback[0].contains("No speech"));
        }
    }

    #[test]
    fn test_non_positive_duration_is_fatal() {
        assert_eq!(
            analyze("hello there", 0.0),
            Err(AnalyzeError::InvalidDuration(0.0))
        );
        assert_eq!(
            analyze("hello there", -5.0),
            Err(AnalyzeError::InvalidDuration(-5.0))
        );
        // Fatal even for an empty transcript; duration is checked first.
        assert!(analyze("", 0.0).is_err());
    }

    #[test]
    fn test_wpm_rounds_half_away_from_zero() {
        // 5 words over 120s = 2.5 WPM
        let metrics = analyze("a b c d e", 120.0).unwrap();
        assert_eq!(metrics.words_per_minute, 3);
    }

    #[test]
    fn test_sentence_stats() {
        let metrics = analyze("Hello there. How are you today?", 10.0).unwrap();
        assert_eq!(metrics.total_sentences, 2);
        assert_eq!(metrics.avg_words_per_sentence, 3);
        // No terminator at all still counts as one sentence.
        let metrics = analyze("no punctuation here", 10.0).unwrap();
        assert_eq!(metrics.total_sentences, 1);
    }

    #[test]
    fn test_filler_invariants_hold() {
        let metrics = analyze("so so so basically fine words here", 12.0).unwrap();
        assert!(metrics.filler_word_count <= metrics.total_words);
        assert!(metrics.filler_percentage <= 100);
    }

    #[test]
    fn test_custom_lexicon_changes_only_filler_fields() {
        let custom = FillerLexicon::from_words(["err", "hmm"]);
        let defaulted = analyze("err hmm um fine", 10.0).unwrap();
        let overridden = analyze_transcript("err hmm um fine", 10.0, &custom).unwrap();
        assert_eq!(defaulted.filler_word_count, 1);
        assert_eq!(overridden.filler_word_count, 2);
        assert_eq!(defaulted.total_words, overridden.total_words);
        assert_eq!(defaulted.words_per_minute, overridden.words_per_minute);
    }

    #[test]
    fn test_identical_inputs_yield_identical_metrics() {
        let first = analyze("um a steady practice run today", 14.0).unwrap();
        let second = analyze("um a steady practice run today", 14.0).unwrap();
        assert_eq!(first, second);
    }
}
