// File Analysis Module
// Upload pipeline that feeds extracted document text into the detector:
// - extractor: DOCX / PDF / TXT to plain text
// - structure: Document-shape statistics and improvement hints

pub mod extractor;
pub mod structure;

use thiserror::Error;
use tracing::info;

use crate::models::FileAnalysisResult;
use crate::services::config_store::AnalysisConfig;
use crate::services::detection::detect;

pub use extractor::{detect_format, extract_text};
pub use structure::{analyze_structure, generate_improvement_suggestions};

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Unsupported file format for {file_name}. Supported: .docx, .pdf, .txt")]
    UnsupportedFormat { file_name: String },
    #[error("File is {size} bytes; the limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },
    #[error("Failed to extract text from DOCX: {0}")]
    Docx(String),
    #[error("Failed to extract text from PDF: {0}")]
    Pdf(String),
}

/// Extract, measure and score an uploaded document
pub fn analyze_file(
    bytes: &[u8],
    file_name: &str,
    config: &AnalysisConfig,
) -> Result<FileAnalysisResult, AnalysisError> {
    let size = bytes.len() as u64;
    if size > config.max_file_bytes {
        return Err(AnalysisError::TooLarge {
            size,
            limit: config.max_file_bytes,
        });
    }

    let (text, detected_format) = extract_text(bytes, file_name)?;
    let structure = analyze_structure(&text);
    let ai_detection = detect(&text);
    let improvement_suggestions = generate_improvement_suggestions(&structure, &ai_detection);

    let request_id = uuid::Uuid::new_v4().to_string();
    info!(
        request_id = %request_id,
        file = file_name,
        words = structure.word_count,
        score = ai_detection.score,
        level = %ai_detection.level,
        "file_analysis.done"
    );

    Ok(FileAnalysisResult {
        request_id,
        analyzed_at: chrono::Utc::now().to_rfc3339(),
        word_count: structure.word_count,
        detected_format,
        ai_detection,
        structure_analysis: structure,
        improvement_suggestions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DetectionLevel, DocumentFormat};

    #[test]
    fn test_analyze_txt_file() {
        let body = "ABSTRACT\n\nIt is important to note that we delve into the multifaceted landscape of soil chemistry.";
        let result = analyze_file(body.as_bytes(), "paper.txt", &AnalysisConfig::default()).unwrap();
        assert_eq!(result.detected_format, DocumentFormat::Txt);
        assert_eq!(result.word_count, 16);
        assert_eq!(result.ai_detection.level, DetectionLevel::High);
        assert!(result.structure_analysis.has_abstract);
        assert!(result
            .improvement_suggestions
            .iter()
            .any(|s| s.starts_with("High AI-generated content detected")));
        assert!(uuid::Uuid::parse_str(&result.request_id).is_ok());
    }

    #[test]
    fn test_empty_document_takes_short_circuit() {
        let result = analyze_file(b"", "empty.txt", &AnalysisConfig::default()).unwrap();
        assert_eq!(result.ai_detection.score, 0);
        assert_eq!(result.ai_detection.suggestions, vec!["Text too short for reliable analysis".to_string()]);
    }

    #[test]
    fn test_size_limit() {
        let config = AnalysisConfig { max_file_bytes: 4 };
        let err = analyze_file(b"12345", "a.txt", &config).unwrap_err();
        assert!(matches!(err, AnalysisError::TooLarge { size: 5, limit: 4 }));
    }

    #[test]
    fn test_unsupported_format() {
        let err = analyze_file(b"data", "table.csv", &AnalysisConfig::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::UnsupportedFormat { .. }));
    }
}
