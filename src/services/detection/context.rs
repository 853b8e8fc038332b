// Context Extraction
// Recovers the period-delimited sentence around a matched phrase

use crate::services::text_processor::truncate_chars;
use regex::RegexBuilder;

pub const MAX_CONTEXT_CHARS: usize = 200;

/// Sentence surrounding the first case-insensitive occurrence of `phrase`.
///
/// Bounds are the nearest `.` before the match and the nearest `.` at or after
/// its end. Returns an empty string when the phrase is absent.
pub fn extract_context(text: &str, phrase: &str) -> String {
    if phrase.is_empty() {
        return String::new();
    }

    let Ok(re) = RegexBuilder::new(&regex::escape(phrase))
        .case_insensitive(true)
        .build()
    else {
        return String::new();
    };
    let Some(m) = re.find(text) else {
        return String::new();
    };

    let sentence_start = text[..m.start()].rfind('.').map(|i| i + 1).unwrap_or(0);
    let sentence_end = text[m.end()..]
        .find('.')
        .map(|i| m.end() + i)
        .unwrap_or(text.len());

    let context = text[sentence_start..sentence_end].trim();
    truncate_chars(context, MAX_CONTEXT_CHARS).to_string()
}
