//! Parsing of free-form LLM output into a list of suggestions.
//!
//! The model is asked for a JSON array of strings but does not always
//! comply. Anything that is not a JSON string array falls back to
//! line-splitting.

/// Maximum number of suggestions kept by the line-split fallback.
pub const MAX_FALLBACK_SUGGESTIONS: usize = 5;

/// Turn raw model output into an ordered list of suggestions.
///
/// 1. A JSON array of strings is returned as-is.
/// 2. Otherwise the text is split on line breaks, blank lines are dropped,
///    and at most [`MAX_FALLBACK_SUGGESTIONS`] lines are kept.
/// 3. If that leaves nothing, the whole raw text is the single suggestion.
#[must_use]
pub fn parse_suggestions(raw: &str) -> Vec<String> {
    if let Ok(list) = serde_json::from_str::<Vec<String>>(raw) {
        return list;
    }

    let lines: Vec<String> = raw
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(MAX_FALLBACK_SUGGESTIONS)
        .map(str::to_string)
        .collect();

    if lines.is_empty() {
        vec![raw.to_string()]
    } else {
        lines
    }
}
