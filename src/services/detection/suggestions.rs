// Suggestion Templates
// Guidance grows more urgent about disclosure and revision with the level

use crate::models::DetectionLevel;

pub const TOO_SHORT_SUGGESTION: &str = "Text too short for reliable analysis";

const LOW_TEMPLATES: &[&str] = &[
    "Text shows low indicators of AI generation. Minimal AI disclosure may be needed.",
    "Consider disclosing any AI tools used for editing, proofreading, or brainstorming.",
];

const MEDIUM_TEMPLATES: &[&str] = &[
    "Text shows moderate indicators of AI generation. Consider reviewing flagged sections.",
    "Recommend including an AI disclosure statement describing how AI tools were used.",
    "Review flagged sections for overly formal or generic language and add personal insights.",
];

const HIGH_TEMPLATES: &[&str] = &[
    "Text shows high indicators of AI generation. Thorough review recommended.",
    "REQUIRED: Include comprehensive AI disclosure statement for journal submission.",
    "Strongly recommend rewriting flagged sections to add original analysis and insights.",
    "Ensure all AI-generated content is properly attributed and meets journal guidelines.",
];

fn templates_for(level: DetectionLevel) -> &'static [&'static str] {
    match level {
        DetectionLevel::Low => LOW_TEMPLATES,
        DetectionLevel::Medium => MEDIUM_TEMPLATES,
        DetectionLevel::High => HIGH_TEMPLATES,
    }
}

pub fn generate_suggestions(level: DetectionLevel, flagged_count: usize) -> Vec<String> {
    let mut suggestions: Vec<String> = templates_for(level)
        .iter()
        .map(|s| s.to_string())
        .collect();

    if flagged_count > 0 {
        suggestions.push(format!(
            "Review {} flagged section(s) for common AI-generated phrases and patterns.",
            flagged_count
        ));
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_counts_per_level() {
        assert_eq!(generate_suggestions(DetectionLevel::Low, 0).len(), 2);
        assert_eq!(generate_suggestions(DetectionLevel::Medium, 0).len(), 3);
        assert_eq!(generate_suggestions(DetectionLevel::High, 0).len(), 4);
    }

    #[test]
    fn test_flagged_count_appended_last() {
        let suggestions = generate_suggestions(DetectionLevel::Medium, 4);
        assert_eq!(suggestions.len(), 4);
        assert_eq!(
            suggestions.last().unwrap(),
            "Review 4 flagged section(s) for common AI-generated phrases and patterns."
        );
    }

    #[test]
    fn test_high_level_requires_disclosure() {
        let suggestions = generate_suggestions(DetectionLevel::High, 0);
        assert!(suggestions[1].starts_with("REQUIRED"));
    }
}
