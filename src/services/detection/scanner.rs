// Pattern Scanner
// Accumulates weighted rule hits and collects flagged context excerpts

use super::context::extract_context;
use super::patterns::pattern_catalog;

pub const MAX_FLAGGED_SECTIONS: usize = 10;
const CONTEXTS_PER_RULE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit {
    pub rule_id: &'static str,
    pub matches: usize,
    pub weight: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternScan {
    pub raw_score: u32,
    pub flagged_sections: Vec<String>,
    /// Rules with at least one match, in catalog order.
    pub rule_hits: Vec<RuleHit>,
}

pub fn scan_patterns(text: &str) -> PatternScan {
    let mut scan = PatternScan::default();

    for rule in pattern_catalog() {
        let matches = rule.find_matches(text);
        if matches.is_empty() {
            continue;
        }

        scan.raw_score = scan
            .raw_score
            .saturating_add((matches.len() as u32).saturating_mul(rule.weight));
        scan.rule_hits.push(RuleHit {
            rule_id: rule.id,
            matches: matches.len(),
            weight: rule.weight,
        });

        for phrase in matches.iter().take(CONTEXTS_PER_RULE) {
            let context = extract_context(text, phrase);
            if !context.is_empty() && !scan.flagged_sections.contains(&context) {
                scan.flagged_sections.push(context);
            }
        }
    }

    scan.flagged_sections.truncate(MAX_FLAGGED_SECTIONS);
    scan
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_matches() {
        let scan = scan_patterns("The sample was heated to 80 degrees for two hours.");
        assert_eq!(scan, PatternScan::default());
    }

    #[test]
    fn test_weighted_accumulation() {
        // deep_dive (3) twice + stock_transition (1) once
        let text = "We delve into soil. Moreover, we delve into water.";
        let scan = scan_patterns(text);
        assert_eq!(scan.raw_score, 7);
        assert_eq!(scan.rule_hits.len(), 2);
        assert_eq!(scan.rule_hits[0].rule_id, "deep_dive");
        assert_eq!(scan.rule_hits[0].matches, 2);
    }

    #[test]
    fn test_repeated_phrase_contexts_are_deduplicated() {
        // Every match of the same phrase resolves to its first occurrence.
        let text = "We delve into soil. We delve into water. We delve into air.";
        let scan = scan_patterns(text);
        assert_eq!(scan.flagged_sections, vec!["We delve into soil".to_string()]);
    }

    #[test]
    fn test_distinct_phrases_in_one_rule() {
        let text = "Furthermore, prices rose. Moreover, wages fell. Additionally, rents climbed. Consequently, savings shrank.";
        let scan = scan_patterns(text);
        assert_eq!(scan.raw_score, 4);
        // Only the first three matches of a rule are used for context.
        assert_eq!(
            scan.flagged_sections,
            vec![
                "Furthermore, prices rose".to_string(),
                "Moreover, wages fell".to_string(),
                "Additionally, rents climbed".to_string(),
            ]
        );
    }

    #[test]
    fn test_flagged_sections_capped() {
        let phrases = [
            "It is important to note a",
            "In conclusion b",
            "We delve into c",
            "The landscape of d",
            "A multifaceted e",
            "It is crucial f",
            "We foster innovation g",
            "We reshape h",
            "A groundbreaking i",
            "Moreover j",
            "This study aims to k",
            "In the modern era l",
        ];
        let text = phrases.join(". ");
        let scan = scan_patterns(&text);
        assert_eq!(scan.flagged_sections.len(), MAX_FLAGGED_SECTIONS);
        assert_eq!(scan.flagged_sections[0], "It is important to note a");
    }
}
