// Entry Points
// Validated calls used by request handlers and the CLI

use thiserror::Error;
use tracing::info;

use crate::models::{
    DetectRequest, DetectionResult, DisclosureRequest, DisclosureResponse, FileAnalysisResult,
};
use crate::services::config_store::AppConfig;
use crate::services::detection::detect;
use crate::services::disclosure::generate_disclosure;
use crate::services::file_analysis::{analyze_file, AnalysisError};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("text must contain at least one non-whitespace character")]
    EmptyText,
    #[error("purpose must not be empty")]
    EmptyPurpose,
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

pub fn detect_text(request: &DetectRequest) -> Result<DetectionResult, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::EmptyText);
    }
    let result = detect(&request.text);
    info!(
        chars = request.text.chars().count(),
        score = result.score,
        level = %result.level,
        "detect_text"
    );
    Ok(result)
}

pub fn generate_disclosure_statement(
    request: &DisclosureRequest,
) -> Result<DisclosureResponse, ApiError> {
    let purpose = request.purpose.trim();
    if purpose.is_empty() {
        return Err(ApiError::EmptyPurpose);
    }
    let tools: Vec<&str> = request
        .ai_tools_used
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect();

    Ok(DisclosureResponse {
        disclosure_statement: generate_disclosure(&tools, purpose),
    })
}

pub fn analyze_document(
    file_name: &str,
    bytes: &[u8],
    config: &AppConfig,
) -> Result<FileAnalysisResult, ApiError> {
    Ok(analyze_file(bytes, file_name, &config.analysis)?)
}
