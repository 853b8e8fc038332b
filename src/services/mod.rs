// ScholarAI Core Services

pub mod text_processor;
pub mod config_store;
pub mod detection;
pub mod disclosure;
pub mod file_analysis;

pub use text_processor::*;
pub use config_store::*;
pub use disclosure::*;

// Re-export detection module functions
pub use detection::{
    detect,
    extract_context,
    generate_suggestions,
    normalize_score,
    pattern_catalog,
    scan_patterns,
    sentence_length_bonus,
    PatternRule,
    PatternScan,
};
pub use file_analysis::{analyze_file, AnalysisError};
