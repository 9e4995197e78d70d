//! Small text helpers: URL slugs, truncation, word splitting.

pub mod slug;
pub mod words;

pub use slug::slugify;
pub use words::{split_words, truncate, DEFAULT_ELLIPSIS};
