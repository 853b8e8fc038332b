// Sentence-Length Heuristics
// Uniform, mid-length sentences are characteristic of generated prose

use crate::services::text_processor::{count_words, split_period_segments};

const MIN_SEGMENTS: usize = 5;
const TYPICAL_AVG_RANGE: (f64, f64) = (20.0, 25.0);
const UNIFORM_VARIANCE_MAX: f64 = 30.0;
const BONUS: u32 = 5;

/// Summary of per-sentence word counts under the period splitter
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceStats {
    pub segment_count: usize,
    pub avg_len: f64,
    /// `None` when too few non-blank sentences to judge uniformity.
    pub variance: Option<f64>,
}

pub fn sentence_stats(text: &str) -> Option<SentenceStats> {
    let segments = split_period_segments(text);
    if segments.len() <= MIN_SEGMENTS {
        return None;
    }

    // Averaged over every segment, blanks included.
    let avg_len = segments.iter().map(|s| count_words(s)).sum::<usize>() as f64
        / segments.len() as f64;

    let lengths: Vec<usize> = segments
        .iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| count_words(s))
        .collect();
    let variance = if lengths.len() > MIN_SEGMENTS {
        Some(
            lengths
                .iter()
                .map(|&l| (l as f64 - avg_len).powi(2))
                .sum::<f64>()
                / lengths.len() as f64,
        )
    } else {
        None
    };

    Some(SentenceStats {
        segment_count: segments.len(),
        avg_len,
        variance,
    })
}

/// Extra raw score from sentence-length statistics (0, 5 or 10)
pub fn sentence_length_bonus(text: &str) -> u32 {
    let Some(stats) = sentence_stats(text) else {
        return 0;
    };

    let mut bonus = 0;
    if stats.avg_len >= TYPICAL_AVG_RANGE.0 && stats.avg_len <= TYPICAL_AVG_RANGE.1 {
        bonus += BONUS;
    }
    if matches!(stats.variance, Some(v) if v < UNIFORM_VARIANCE_MAX) {
        bonus += BONUS;
    }
    bonus
}
