//! Shared string utilities for code generation.

/// Uppercase the first character of a string (e.g., "enabled" -> "Enabled")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Check whether a string is non-empty and made only of ASCII lowercase letters
pub fn is_lower_alpha(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_lowercase())
}

/// Split a comment into lines after trimming surrounding whitespace.
///
/// Both `\n` and `\r\n` end a line.
pub fn split_comment(comment: &str) -> impl Iterator<Item = &str> {
    comment.trim().lines()
}
