use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static ZERO_WIDTH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\u{200B}\u{200C}\u{200D}\u{FEFF}]").unwrap());

/// Normalizes the visible text of a review element into a single line.
pub fn clean_review_text(raw: &str) -> String {
    let cleaned = ZERO_WIDTH_PATTERN.replace_all(raw, "");
    WHITESPACE_RUN_PATTERN
        .replace_all(&cleaned, " ")
        .trim()
        .to_string()
}
