//! Per-line classification outcome

/// Whether a line survives cleaning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Ordinary body text, blank lines included
    Keep,
    /// Running page header or footer
    Discard,
}

impl LineClass {
    /// Returns true if the line is retained
    #[must_use]
    pub const fn is_keep(self) -> bool {
        matches!(self, Self::Keep)
    }
}

impl std::fmt::Display for LineClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keep => write!(f, "keep"),
            Self::Discard => write!(f, "discard"),
        }
    }
}
