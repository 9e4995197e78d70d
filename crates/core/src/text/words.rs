//! Truncation and word splitting.
//!
//! Lengths count Unicode scalar values, not bytes.

/// Suffix appended by [`truncate`] when callers have no preference.
pub const DEFAULT_ELLIPSIS: &str = "...";

/// Shortens `text` to at most `length` characters, ending in `suffix`.
///
/// Text already within `length` is returned unchanged. Otherwise the first
/// `length - suffix_len` characters are kept and `suffix` appended; when the
/// suffix alone is longer than `length`, the result is just the suffix.
///
/// # Example
///
/// ```
/// use tally_core::text::{truncate, DEFAULT_ELLIPSIS};
///
/// assert_eq!(truncate("Hello, world", 8, DEFAULT_ELLIPSIS), "Hello...");
/// ```
#[must_use]
pub fn truncate(text: &str, length: usize, suffix: &str) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }
    let keep = length.saturating_sub(suffix.chars().count());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(suffix);
    out
}

/// Splits `text` on whitespace, dropping empty pieces.
#[must_use]
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
