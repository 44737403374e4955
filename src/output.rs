//! Output formatting for human and JSON modes
//!
//! Progress lines are printed as a run goes; the summary is rendered once at
//! the end. In JSON mode only the summary is written to stdout.

use std::path::PathBuf;

use serde::Serialize;

use crate::core::models::{DirectoryEntry, DocumentKind};
use crate::core::ports::ProgressReporter;
use crate::error::CleanError;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A file or directory that could not be processed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureRecord {
    /// Path relative to the input root
    pub path: PathBuf,
    /// Rendered error
    pub error: String,
}

/// Totals for a processing run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Input root
    pub input_dir: PathBuf,
    /// Output root
    pub output_dir: PathBuf,
    /// Subdirectories visited
    pub directories: usize,
    /// Canonical files copied
    pub copied: usize,
    /// Draft files cleaned
    pub cleaned: usize,
    /// Header and footer lines removed across all drafts
    pub lines_discarded: usize,
    /// Drafts that needed lossy decoding
    pub decode_warnings: usize,
    /// Everything that was skipped
    pub failures: Vec<FailureRecord>,
}

impl RunSummary {
    /// Start an empty summary for a run
    #[must_use]
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Files written successfully
    #[must_use]
    pub const fn processed(&self) -> usize {
        self.copied + self.cleaned
    }

    /// Whether any file or directory was skipped
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Record a skipped path
    pub fn record_failure(&mut self, path: PathBuf, error: &CleanError) {
        self.failures.push(FailureRecord {
            path,
            error: error.to_string(),
        });
    }

    /// Render the summary based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!(
            "\nDone: {} director{}, {} copied, {} cleaned ({} line(s) removed)",
            self.directories,
            if self.directories == 1 { "y" } else { "ies" },
            self.copied,
            self.cleaned,
            self.lines_discarded
        );

        if self.decode_warnings > 0 {
            println!("  {} file(s) contained invalid UTF-8", self.decode_warnings);
        }

        if self.has_failures() {
            println!("\nFailed ({}):", self.failures.len());
            for failure in &self.failures {
                println!("  {}: {}", failure.path.display(), failure.error);
            }
        }
    }

    fn render_json(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("failed to serialize summary: {e}"),
        }
    }
}

/// Prints progress lines to the console
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter {
    mode: OutputMode,
}

impl ConsoleReporter {
    /// Create a reporter for the given output mode
    #[must_use]
    pub const fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    const fn quiet(self) -> bool {
        matches!(self.mode, OutputMode::Json)
    }
}

impl ProgressReporter for ConsoleReporter {
    fn file_started(&self, entry: &DirectoryEntry, kind: DocumentKind) {
        if self.quiet() {
            return;
        }
        match kind {
            DocumentKind::Canonical => {
                println!("Copying most recent RFC file: {}", entry.file_name);
            },
            DocumentKind::Draft => println!("Processing draft file: {}", entry.file_name),
        }
    }

    fn file_completed(&self, entry: &DirectoryEntry) {
        if !self.quiet() {
            println!("Completed {}", entry.file_name);
        }
    }

    fn file_failed(&self, entry: &DirectoryEntry, error: &CleanError) {
        if !self.quiet() {
            eprintln!("Failed {}: {error}", entry.file_name);
        }
    }

    fn directory_completed(&self, subdir: &str) {
        if !self.quiet() {
            println!("Processed all files in {subdir}");
        }
    }
}
