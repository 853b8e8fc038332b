// Pattern Catalog
// Fixed, ordered phrase rules that correlate with AI-generated prose

use regex::Regex;
use std::sync::OnceLock;

/// A match expression paired with how strongly a hit correlates with AI-style prose.
#[derive(Debug)]
pub struct PatternRule {
    pub id: &'static str,
    pub weight: u32,
    regex: Option<Regex>,
}

impl PatternRule {
    fn new(id: &'static str, expression: &str, weight: u32) -> Self {
        // Blank expressions would match at every position; they never match instead.
        let regex = if expression.trim().is_empty() {
            None
        } else {
            Some(
                Regex::new(&format!("(?i){}", expression))
                    .unwrap_or_else(|e| panic!("pattern rule {id}: {e}")),
            )
        };
        Self { id, weight, regex }
    }

    /// Non-overlapping case-insensitive matches, in text order.
    pub fn find_matches<'t>(&self, text: &'t str) -> Vec<&'t str> {
        match &self.regex {
            Some(re) => re.find_iter(text).map(|m| m.as_str()).collect(),
            None => Vec::new(),
        }
    }
}

// (id, expression, weight)
const RULE_TABLE: &[(&str, &str, u32)] = &[
    // Stock phrases
    ("noteworthy_hedge", r"\b(it is important to note|it should be noted|it is worth noting)\b", 2),
    ("summary_opener", r"\b(in conclusion|in summary|to summarize)\b", 1),
    ("deep_dive", r"\b(delve into|dive deep|explore the nuances)\b", 3),
    ("abstract_domain", r"\b(landscape of|realm of|sphere of)\b", 2),
    ("holistic_filler", r"\b(multifaceted|holistic approach|comprehensive understanding)\b", 2),
    ("urgency_hedge", r"\b(it is crucial|it is essential|it is imperative)\b", 2),
    ("buzz_action", r"\b(navigate the complexities|foster innovation|drive progress)\b", 3),
    ("transformation_verb", r"\b(revolutionize|transform|reshape)\b", 1),
    ("hype_adjective", r"\b(cutting-edge|state-of-the-art|groundbreaking)\b", 1),
    ("stock_transition", r"\b(furthermore|moreover|additionally|consequently)\b", 1),
    // Formulaic structures
    ("aims_statement", r"\bthis (?:paper|study|research|article)\s+(?:aims to|seeks to|attempts to)\b", 2),
    ("era_framing", r"\bin (?:this|the current|today's) (?:digital age|modern era|contemporary world)\b", 3),
    ("cannot_be_overstated", r"\bthe (?:importance|significance|relevance) of .+? cannot be overstated\b", 3),
];

/// The process-wide rule catalog, compiled on first use.
pub fn pattern_catalog() -> &'static [PatternRule] {
    static CATALOG: OnceLock<Vec<PatternRule>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        RULE_TABLE
            .iter()
            .map(|&(id, expression, weight)| PatternRule::new(id, expression, weight))
            .collect()
    })
}
