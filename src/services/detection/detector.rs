// Detector
// Composes scanning, heuristics, normalization and guidance into one result

use tracing::debug;

use crate::models::{DetectionLevel, DetectionResult};
use crate::services::text_processor::count_words;
use super::heuristics::sentence_length_bonus;
use super::scanner::scan_patterns;
use super::scoring::normalize_score;
use super::suggestions::{generate_suggestions, TOO_SHORT_SUGGESTION};

/// Minimum trimmed length (in characters) worth scoring
pub const MIN_ANALYZABLE_CHARS: usize = 50;

/// Score `text` for AI-style phrasing.
///
/// Never fails: empty or very short input yields a zero score with a single
/// "too short" suggestion.
pub fn detect(text: &str) -> DetectionResult {
    if text.trim().chars().count() < MIN_ANALYZABLE_CHARS {
        return DetectionResult {
            score: 0,
            level: DetectionLevel::Low,
            flagged_sections: vec![],
            suggestions: vec![TOO_SHORT_SUGGESTION.to_string()],
        };
    }

    let scan = scan_patterns(text);
    let bonus = sentence_length_bonus(text);
    let raw_score = scan.raw_score.saturating_add(bonus);
    let word_count = count_words(text);

    let score = normalize_score(raw_score, word_count);
    let level = DetectionLevel::from_score(score);
    let suggestions = generate_suggestions(level, scan.flagged_sections.len());

    debug!(
        pattern_score = scan.raw_score,
        heuristic_bonus = bonus,
        word_count,
        score,
        level = %level,
        rules_hit = scan.rule_hits.len(),
        flagged = scan.flagged_sections.len(),
        "detection.scored"
    );

    DetectionResult {
        score,
        level,
        flagged_sections: scan.flagged_sections,
        suggestions,
    }
}
