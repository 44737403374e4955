//! Progress reporting port
//!
//! The tree processor announces each file before and after it is handled,
//! and each subdirectory once it is finished. Notifications are for humans;
//! implementations decide where (or whether) they go.

use crate::core::models::{DirectoryEntry, DocumentKind};
use crate::error::CleanError;

/// Receives progress notifications from a processing run
#[cfg_attr(test, mockall::automock)]
pub trait ProgressReporter {
    /// A file is about to be copied or cleaned
    fn file_started(&self, entry: &DirectoryEntry, kind: DocumentKind);

    /// A file was written successfully
    fn file_completed(&self, entry: &DirectoryEntry);

    /// A file was skipped because of an error
    fn file_failed(&self, entry: &DirectoryEntry, error: &CleanError);

    /// Every file in a subdirectory has been handled
    fn directory_completed(&self, subdir: &str);
}

/// Reporter that discards every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn file_started(&self, _entry: &DirectoryEntry, _kind: DocumentKind) {}

    fn file_completed(&self, _entry: &DirectoryEntry) {}

    fn file_failed(&self, _entry: &DirectoryEntry, _error: &CleanError) {}

    fn directory_completed(&self, _subdir: &str) {}
}
