//! Canonical forms of raw survey answers.

/// The token respondents use for "no answer". Compared case-insensitively.
pub const NO_ANSWER: &str = "n/a";

/// Collapses every whitespace run into a single space and trims both ends.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// Trimmed and lowercased. Inner whitespace is kept as is.
pub fn norm(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn is_no_answer(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case(NO_ANSWER)
}

/// The normalized answer, or `None` when it is empty or explicitly not given.
pub fn answered(raw: &str) -> Option<String> {
    let value = normalize(raw);
    if value.is_empty() || is_no_answer(&value) {
        None
    } else {
        Some(value)
    }
}

/// Same as [`answered`], lowercased.
pub fn answered_token(raw: &str) -> Option<String> {
    answered(raw).map(|v| v.to_lowercase())
}

/// Whether the answer, trimmed and lowercased, is exactly the token.
pub fn is_answer(raw: &str, token: &str) -> bool {
    norm(raw) == token
}
