//! Line classifier - detects running page headers and footers
//!
//! Classification is a pure function of a single line's text. There is no
//! state carried between lines.

use regex::Regex;

use crate::core::models::LineClass;
use crate::error::CleanError;

/// Page header: `Expires`, then a word, then a number, then a trailing `[Page N]`
pub const DEFAULT_HEADER_PATTERN: &str = r"Expires.*?\w+.*?\d+.*\[Page \d+\]$";

/// Page footer: starts with `Internet-Draft`, ends with a four digit year
pub const DEFAULT_FOOTER_PATTERN: &str = r"^Internet-Draft.*\d{4}$";

/// Decides whether a line is a page artifact to be discarded
#[derive(Debug, Clone)]
pub struct LineClassifier {
    header: Regex,
    footer: Regex,
}

impl LineClassifier {
    /// Create a classifier with the standard header and footer patterns
    pub fn new() -> Result<Self, CleanError> {
        Self::with_patterns(DEFAULT_HEADER_PATTERN, DEFAULT_FOOTER_PATTERN)
    }

    /// Create a classifier with custom patterns.
    ///
    /// The header pattern is searched anywhere in the line; anchor it
    /// explicitly if needed. The same goes for the footer pattern.
    pub fn with_patterns(header: &str, footer: &str) -> Result<Self, CleanError> {
        let header = Regex::new(header).map_err(|source| CleanError::InvalidPattern {
            name: "header",
            source,
        })?;
        let footer = Regex::new(footer).map_err(|source| CleanError::InvalidPattern {
            name: "footer",
            source,
        })?;
        Ok(Self { header, footer })
    }

    /// Classify a single line (without its terminator)
    #[must_use]
    pub fn classify(&self, line: &str) -> LineClass {
        if self.is_header(line) || self.is_footer(line) {
            LineClass::Discard
        } else {
            LineClass::Keep
        }
    }

    /// Whether the line is a running page header
    #[must_use]
    pub fn is_header(&self, line: &str) -> bool {
        self.header.is_match(line)
    }

    /// Whether the line is a running page footer
    #[must_use]
    pub fn is_footer(&self, line: &str) -> bool {
        self.footer.is_match(line)
    }
}
