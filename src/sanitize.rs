use regex::Regex;

lazy_static::lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Trims a single-line value (names, titles) and collapses inner whitespace runs
/// into a single space.
pub fn normalize_line(input: &str) -> String {
    WHITESPACE_RUN.replace_all(input.trim(), " ").into_owned()
}

/// Trims free text. Blank text is treated as absent.
pub fn normalize_text(input: Option<String>) -> Option<String> {
    input
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

pub fn normalize_email(input: &str) -> String {
    input.trim().to_lowercase()
}
