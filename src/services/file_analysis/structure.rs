// Structure Analysis
// Cheap document-shape statistics and manuscript improvement hints

use crate::models::{DetectionLevel, DetectionResult, StructureAnalysis};
use crate::services::text_processor::{count_words, split_paragraphs, split_sentences_terminal};

const MAX_SECTIONS: usize = 10;
const MAX_HEADING_WORDS: usize = 5;
const ABSTRACT_SCAN_LINES: usize = 20;

/// At least one cased character and no lowercase ones
fn is_all_caps(s: &str) -> bool {
    let mut has_cased = false;
    for c in s.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

pub fn analyze_structure(text: &str) -> StructureAnalysis {
    let lines: Vec<&str> = text.split('\n').collect();

    let estimated_sections: Vec<String> = lines
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty() && is_all_caps(l) && count_words(l) <= MAX_HEADING_WORDS)
        .take(MAX_SECTIONS)
        .map(|l| l.to_string())
        .collect();

    let sentences = split_sentences_terminal(text);
    let avg_sentence_length = if sentences.is_empty() {
        0.0
    } else {
        let avg = sentences.iter().map(|s| count_words(s)).sum::<usize>() as f64
            / sentences.len() as f64;
        (avg * 10.0).round() / 10.0
    };

    let has_abstract = lines
        .iter()
        .take(ABSTRACT_SCAN_LINES)
        .any(|l| l.to_lowercase().contains("abstract"));

    StructureAnalysis {
        total_lines: lines.len(),
        total_paragraphs: split_paragraphs(text).len(),
        word_count: count_words(text),
        estimated_sections,
        avg_sentence_length,
        has_abstract,
    }
}

pub fn generate_improvement_suggestions(
    structure: &StructureAnalysis,
    detection: &DetectionResult,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if structure.word_count < 2000 {
        suggestions.push("Document is relatively short. Consider expanding key sections with more details and examples.".to_string());
    } else if structure.word_count > 10000 {
        suggestions.push("Document is quite long. Consider condensing sections to improve readability.".to_string());
    }

    if structure.avg_sentence_length > 30.0 {
        suggestions.push("Average sentence length is high. Consider breaking complex sentences into simpler ones.".to_string());
    } else if structure.avg_sentence_length < 10.0 {
        suggestions.push("Average sentence length is quite short. Consider combining related ideas for better flow.".to_string());
    }

    if !structure.has_abstract {
        suggestions.push("No abstract detected. Add an abstract summarizing your research.".to_string());
    }

    if structure.estimated_sections.len() < 3 {
        suggestions.push("Few sections detected. Consider organizing content with clear section headings (Introduction, Methodology, Results, etc.).".to_string());
    }

    match detection.level {
        DetectionLevel::High => suggestions.push(
            "High AI-generated content detected. Review and add more original analysis and insights.".to_string(),
        ),
        DetectionLevel::Medium => suggestions.push(
            "Moderate AI-generated content detected. Consider revising flagged sections for authenticity.".to_string(),
        ),
        DetectionLevel::Low => {}
    }

    suggestions.push("Ensure proper citation format matches your target journal (IEEE, APA, etc.).".to_string());
    suggestions.push("Review figures and tables for proper numbering and captions.".to_string());
    suggestions.push("Check that all references are properly cited in the text.".to_string());

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAPER: &str = "TITLE OF WORK\n\nAbstract: We measure things.\n\nINTRODUCTION\n\nSoil matters a great deal to farms. Is it measured well? Rarely!\n\nMETHODS AND DATA\n\nWe dug holes.";

    fn low_detection() -> DetectionResult {
        DetectionResult {
            score: 0,
            level: DetectionLevel::Low,
            flagged_sections: vec![],
            suggestions: vec![],
        }
    }

    #[test]
    fn test_empty_text() {
        let s = analyze_structure("");
        assert_eq!(s.total_lines, 1);
        assert_eq!(s.total_paragraphs, 0);
        assert_eq!(s.word_count, 0);
        assert_eq!(s.avg_sentence_length, 0.0);
        assert!(!s.has_abstract);
    }

    #[test]
    fn test_paper_shape() {
        let s = analyze_structure(PAPER);
        assert_eq!(s.total_lines, 11);
        assert_eq!(s.total_paragraphs, 6);
        assert_eq!(
            s.estimated_sections,
            vec!["TITLE OF WORK", "INTRODUCTION", "METHODS AND DATA"]
        );
        assert!(s.has_abstract);
    }

    #[test]
    fn test_avg_sentence_length_rounded() {
        // 3 + 2 + 1 words over three sentences
        let s = analyze_structure("One two three. Four five! Six?");
        assert_eq!(s.avg_sentence_length, 2.0);
        let s = analyze_structure("One two. Three four five. Six seven.");
        assert_eq!(s.avg_sentence_length, 2.3);
    }

    #[test]
    fn test_all_caps_requires_cased_letters() {
        assert!(is_all_caps("RESULTS 2"));
        assert!(!is_all_caps("2024"));
        assert!(!is_all_caps("Results"));
    }

    #[test]
    fn test_sections_capped_and_long_caps_lines_skipped() {
        let mut text = String::from("THIS HEADING HAS FAR TOO MANY WORDS\n");
        for i in 0..15 {
            text.push_str(&format!("SECTION {}\n", i));
        }
        let s = analyze_structure(&text);
        assert_eq!(s.estimated_sections.len(), MAX_SECTIONS);
        assert_eq!(s.estimated_sections[0], "SECTION 0");
    }

    #[test]
    fn test_suggestions_for_short_unstructured_text() {
        let s = analyze_structure("just a few words here without much structure at all");
        let suggestions = generate_improvement_suggestions(&s, &low_detection());
        assert!(suggestions[0].starts_with("Document is relatively short"));
        assert!(suggestions.iter().any(|x| x.starts_with("No abstract detected")));
        assert!(suggestions.iter().any(|x| x.starts_with("Few sections detected")));
        assert!(!suggestions.iter().any(|x| x.contains("AI-generated content detected")));
        assert_eq!(suggestions.last().unwrap(), "Check that all references are properly cited in the text.");
    }

    #[test]
    fn test_suggestions_follow_detection_level() {
        let s = analyze_structure(PAPER);
        let mut detection = low_detection();
        detection.level = DetectionLevel::High;
        let suggestions = generate_improvement_suggestions(&s, &detection);
        assert!(suggestions.iter().any(|x| x.starts_with("High AI-generated content detected")));
        assert!(!suggestions.iter().any(|x| x.starts_with("No abstract detected")));
    }
}
