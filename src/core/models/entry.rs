//! A discovered input file and its mirrored output location

use std::path::{Path, PathBuf};

use super::DocumentKind;

/// A `(subdirectory, file name)` pair found under the input root.
///
/// Every entry maps to exactly one output file at the same relative path
/// under the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Name of the first-level subdirectory
    pub subdir: String,
    /// Base name of the file inside `subdir`
    pub file_name: String,
}

impl DirectoryEntry {
    /// Create a new entry
    #[must_use]
    pub fn new(subdir: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            subdir: subdir.into(),
            file_name: file_name.into(),
        }
    }

    /// Path relative to either root (`subdir/file_name`)
    #[must_use]
    pub fn relative_path(&self) -> PathBuf {
        Path::new(&self.subdir).join(&self.file_name)
    }

    /// Location of the source file
    #[must_use]
    pub fn input_path(&self, input_root: &Path) -> PathBuf {
        input_root.join(self.relative_path())
    }

    /// Location of the mirrored output file
    #[must_use]
    pub fn output_path(&self, output_root: &Path) -> PathBuf {
        output_root.join(self.relative_path())
    }

    /// Dispatch decision for this file
    #[must_use]
    pub fn kind(&self, canonical_prefix: &str) -> DocumentKind {
        DocumentKind::from_file_name(&self.file_name, canonical_prefix)
    }
}

impl std::fmt::Display for DirectoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.subdir, self.file_name)
    }
}
