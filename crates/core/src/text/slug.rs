//! URL slug generation.

use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATORS: Lazy<Regex> = Lazy::new(|| compile(r"[\s_]+"));
static DISALLOWED: Lazy<Regex> = Lazy::new(|| compile(r"[^a-z0-9-]"));
static REPEATED_HYPHENS: Lazy<Regex> = Lazy::new(|| compile(r"-+"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static slug pattern is valid")
}

/// Converts text into a URL-friendly slug.
///
/// Lowercases and trims the input, turns runs of whitespace or underscores
/// into a single `-`, drops anything outside `[a-z0-9-]` (accented letters
/// included), then collapses repeated hyphens.
///
/// # Example
///
/// ```
/// use tally_core::text::slugify;
///
/// assert_eq!(slugify("Hola Mundo!"), "hola-mundo");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let hyphenated = SEPARATORS.replace_all(lowered.trim(), "-");
    let cleaned = DISALLOWED.replace_all(&hyphenated, "");
    REPEATED_HYPHENS.replace_all(&cleaned, "-").into_owned()
}
