// Score Normalization
// Maps the raw weighted score onto 0..=100 independent of text length

/// Raw points are measured against one point per ten words, with a floor of 10
/// so very short texts cannot blow up the ratio.
const WORDS_PER_POINT: f64 = 0.1;
const MIN_DENOMINATOR: f64 = 10.0;
pub const MAX_SCORE: u8 = 100;

pub fn normalize_score(raw_score: u32, word_count: usize) -> u8 {
    let denominator = (word_count as f64 * WORDS_PER_POINT).max(MIN_DENOMINATOR);
    let scaled = ((raw_score as f64 / denominator) * 100.0).floor();
    scaled.clamp(0.0, MAX_SCORE as f64) as u8
}
