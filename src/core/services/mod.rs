//! Business logic services
//!
//! Pure logic that operates on in-memory text. No filesystem access.
//!
//! - [`classifier`] - Classify a line as body text or page artifact
//! - [`document`] - Clean a whole document's text

pub mod classifier;
pub mod document;

pub use classifier::{DEFAULT_FOOTER_PATTERN, DEFAULT_HEADER_PATTERN, LineClassifier};
pub use document::{CleanedText, clean_text};
