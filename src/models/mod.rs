// ScholarAI Data Models
// Request/response shapes shared by the detector, file analysis and CLI

use serde::{Deserialize, Serialize};
use std::fmt;

// ============ Detection ============

/// Coarse tier derived from the normalized score.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionLevel {
    Low,
    Medium,
    High,
}

impl DetectionLevel {
    /// `< 30` low, `< 60` medium, otherwise high.
    pub fn from_score(score: u8) -> Self {
        if score < 30 {
            Self::Low
        } else if score < 60 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for DetectionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    /// Normalized likelihood, always within 0..=100.
    pub score: u8,
    pub level: DetectionLevel,
    /// At most 10 unique excerpts, in discovery order.
    pub flagged_sections: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectRequest {
    pub text: String,
}

// ============ Disclosure ============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisclosureRequest {
    #[serde(default, alias = "ai_tools_used")]
    pub ai_tools_used: Vec<String>,
    pub purpose: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisclosureResponse {
    pub disclosure_statement: String,
}

// ============ File Analysis ============

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Docx,
    Pdf,
    Txt,
}

impl DocumentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Docx => "docx",
            Self::Pdf => "pdf",
            Self::Txt => "txt",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureAnalysis {
    pub total_lines: usize,
    pub total_paragraphs: usize,
    pub word_count: usize,
    /// All-uppercase short lines, capped at 10.
    pub estimated_sections: Vec<String>,
    /// Words per sentence, rounded to one decimal.
    pub avg_sentence_length: f64,
    pub has_abstract: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAnalysisResult {
    pub request_id: String,
    pub analyzed_at: String,
    pub word_count: usize,
    pub detected_format: DocumentFormat,
    pub ai_detection: DetectionResult,
    pub structure_analysis: StructureAnalysis,
    pub improvement_suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_thresholds() {
        assert_eq!(DetectionLevel::from_score(0), DetectionLevel::Low);
        assert_eq!(DetectionLevel::from_score(29), DetectionLevel::Low);
        assert_eq!(DetectionLevel::from_score(30), DetectionLevel::Medium);
        assert_eq!(DetectionLevel::from_score(59), DetectionLevel::Medium);
        assert_eq!(DetectionLevel::from_score(60), DetectionLevel::High);
        assert_eq!(DetectionLevel::from_score(100), DetectionLevel::High);
    }

    #[test]
    fn test_detection_result_serialization() {
        let result = DetectionResult {
            score: 42,
            level: DetectionLevel::Medium,
            flagged_sections: vec!["Moreover, results vary".to_string()],
            suggestions: vec![],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["level"], "medium");
        assert_eq!(json["score"], 42);
        assert!(json.get("flaggedSections").is_some());
    }

    #[test]
    fn test_disclosure_request_accepts_snake_case_tools() {
        let req: DisclosureRequest =
            serde_json::from_str(r#"{"ai_tools_used": ["ChatGPT"], "purpose": "editing"}"#).unwrap();
        assert_eq!(req.ai_tools_used, vec!["ChatGPT".to_string()]);
    }
}
