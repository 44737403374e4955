//! In-memory document cleaning
//!
//! Splits text into physical lines, drops the ones the classifier rejects,
//! and joins the rest with `\n`. Reconstruction is join-based: a trailing
//! newline survives only if the final (empty) line does.

use super::LineClassifier;

/// Result of cleaning one document's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedText {
    /// The reconstructed document
    pub text: String,
    /// Number of lines retained
    pub kept: usize,
    /// Number of header/footer lines removed
    pub discarded: usize,
}

/// Clean a whole document held in memory.
///
/// `\r\n` terminators are normalised to `\n` first so the end-anchored
/// footer rule sees the real end of each line.
#[must_use]
pub fn clean_text(classifier: &LineClassifier, text: &str) -> CleanedText {
    let normalized;
    let text = if text.contains("\r\n") {
        normalized = text.replace("\r\n", "\n");
        normalized.as_str()
    } else {
        text
    };

    let mut kept_lines = Vec::new();
    let mut discarded = 0;

    for line in text.split('\n') {
        if classifier.classify(line).is_keep() {
            kept_lines.push(line);
        } else {
            discarded += 1;
        }
    }

    CleanedText {
        kept: kept_lines.len(),
        text: kept_lines.join("\n"),
        discarded,
    }
}
