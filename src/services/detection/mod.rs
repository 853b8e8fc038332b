// Detection Module
// AI-style prose detection organized into specialized submodules:
// - patterns: Fixed weighted phrase catalog
// - scanner: Weighted rule hits and flagged excerpts
// - context: Sentence extraction around a matched phrase
// - heuristics: Sentence-length uniformity signals
// - scoring: Length-independent 0-100 normalization
// - suggestions: Level-specific guidance templates
// - detector: The composed pipeline

pub mod patterns;
pub mod scanner;
pub mod context;
pub mod heuristics;
pub mod scoring;
pub mod suggestions;
pub mod detector;

// Re-export commonly used functions
pub use patterns::{pattern_catalog, PatternRule};
pub use scanner::{scan_patterns, PatternScan, RuleHit, MAX_FLAGGED_SECTIONS};
pub use context::{extract_context, MAX_CONTEXT_CHARS};
pub use heuristics::{sentence_length_bonus, sentence_stats, SentenceStats};
pub use scoring::normalize_score;
pub use suggestions::generate_suggestions;
pub use detector::{detect, MIN_ANALYZABLE_CHARS};
