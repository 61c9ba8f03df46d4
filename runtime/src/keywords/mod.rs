//! Keyword selection and in-place emphasis.

pub mod highlight;
pub mod selector;

pub use highlight::{highlight, MARKER};
pub use selector::{select_keywords, MAX_KEYWORDS, MIN_KEYWORD_CHARS};
