//! Canonical vs. draft dispatch
//!
//! Published RFCs are final text and are copied byte for byte. Everything
//! else is an Internet-Draft whose running headers and footers get stripped.

/// Default file name prefix marking a canonical document
pub const CANONICAL_PREFIX: &str = "rfc";

/// How a document is handled by the tree processor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Final RFC text, copied verbatim
    Canonical,
    /// Draft text, cleaned line by line
    Draft,
}

impl DocumentKind {
    /// Classify a file by its base name.
    ///
    /// The prefix test is case-sensitive: `RFC9999.txt` is a draft.
    #[must_use]
    pub fn from_file_name(file_name: &str, canonical_prefix: &str) -> Self {
        if file_name.starts_with(canonical_prefix) {
            Self::Canonical
        } else {
            Self::Draft
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Canonical => write!(f, "canonical"),
            Self::Draft => write!(f, "draft"),
        }
    }
}
