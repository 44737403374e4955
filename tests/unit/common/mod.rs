//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing rfc-clean components.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use rfc_clean::CleanError;
use rfc_clean::core::models::{DirectoryEntry, DocumentKind};
use rfc_clean::core::ports::ProgressReporter;
use tempfile::TempDir;

/// A running header as it appears in a real draft
pub const HEADER: &str =
    "Doe & Roe                 Expires March 25, 2024                 [Page 3]";

/// A running footer as it appears in a real draft
pub const FOOTER: &str =
    "Internet-Draft           Green AI Metrics          October 2023";

/// A temporary input/output pair with a standard layout:
/// ```text
/// in/
/// ├── topicA/
/// │   ├── rfc9999.txt
/// │   └── draft-green-ai-01.txt
/// ├── topicB/
/// │   └── draft-other-00.txt
/// └── stray.txt
/// ```
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    pub fn new() -> Self {
        let tree = Self::empty();

        tree.add_file("topicA/rfc9999.txt", &format!("{FOOTER}\nRFC body\n{HEADER}\n"));
        tree.add_file(
            "topicA/draft-green-ai-01.txt",
            &format!("{HEADER}\n{FOOTER}\nThis document defines metrics.\nSecond body line."),
        );
        tree.add_file("topicB/draft-other-00.txt", "only body\n");
        tree.add_file("stray.txt", &format!("{FOOTER}\n"));

        tree
    }

    /// A tree with no input files yet
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        fs::create_dir_all(dir.path().join("in")).unwrap();
        Self { dir }
    }

    pub fn input(&self) -> PathBuf {
        self.dir.path().join("in")
    }

    pub fn output(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    /// Add a file under the input root
    pub fn add_file(&self, rel: &str, content: &str) {
        self.add_bytes(rel, content.as_bytes());
    }

    /// Add a file with raw bytes under the input root
    pub fn add_bytes(&self, rel: &str, content: &[u8]) {
        let path = self.input().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Read an output file as text
    pub fn read_output(&self, rel: &str) -> String {
        fs::read_to_string(self.output().join(rel)).unwrap()
    }
}

/// A progress event captured by [`RecordingReporter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Started(String, DocumentKind),
    Completed(String),
    Failed(String),
    DirectoryDone(String),
}

/// Reporter that records every notification in order
#[derive(Default)]
pub struct RecordingReporter {
    events: RefCell<Vec<Event>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }
}

impl ProgressReporter for RecordingReporter {
    fn file_started(&self, entry: &DirectoryEntry, kind: DocumentKind) {
        self.events.borrow_mut().push(Event::Started(entry.to_string(), kind));
    }

    fn file_completed(&self, entry: &DirectoryEntry) {
        self.events.borrow_mut().push(Event::Completed(entry.to_string()));
    }

    fn file_failed(&self, entry: &DirectoryEntry, _error: &CleanError) {
        self.events.borrow_mut().push(Event::Failed(entry.to_string()));
    }

    fn directory_completed(&self, subdir: &str) {
        self.events.borrow_mut().push(Event::DirectoryDone(subdir.to_string()));
    }
}
