// Text Processing Service
// Word counting and the naive sentence/paragraph splitters used by scoring

/// Whitespace token count
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Split on every period, keeping empty segments.
///
/// This is the splitter the sentence-length heuristics were tuned against;
/// abbreviations, decimals and `!`/`?` terminators are not recognized.
pub fn split_period_segments(text: &str) -> Vec<&str> {
    text.split('.').collect()
}

/// Sentence splitting that also treats `!` and `?` as terminators
/// Returns trimmed, non-empty sentences.
pub fn split_sentences_terminal(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }

    text.replace(&['!', '?'][..], ".")
        .split('.')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Split on blank-line separators (`"\n\n"`), dropping blank paragraphs
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n").filter(|p| !p.trim().is_empty()).collect()
}

/// Truncate to at most `max_chars` characters without splitting a code point
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Single-line preview for terminal output
pub fn preview(s: &str, max_chars: usize) -> String {
    let mut out = truncate_chars(s, max_chars).to_string();
    if s.chars().count() > max_chars {
        out.push_str("...");
    }
    out.replace('\n', " ")
}
