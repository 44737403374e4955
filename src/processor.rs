//! Tree processor - walks an input tree and mirrors it into an output root
//!
//! The expected layout is exactly one level of topic subdirectories, each
//! holding flat `.txt` files:
//!
//! ```text
//! input/                         output/
//! ├── topicA/                    ├── topicA/
//! │   ├── rfc9999.txt   ──copy──▶│   ├── rfc9999.txt
//! │   └── draft-x-01.txt ─clean─▶│   └── draft-x-01.txt
//! └── topicB/                    └── topicB/
//! ```
//!
//! Files directly under the input root and anything nested deeper than one
//! level are ignored. Subdirectories and files are visited in lexicographic
//! order so progress output is reproducible.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//!
//! use rfc_clean::config::CleanConfig;
//! use rfc_clean::core::ports::SilentReporter;
//! use rfc_clean::processor::TreeProcessor;
//!
//! let processor = TreeProcessor::from_config(&CleanConfig::default()).unwrap();
//! let summary = processor
//!     .process_all(Path::new("GreenAI Data"), Path::new("GreenAI Data Cleaned"), &SilentReporter)
//!     .unwrap();
//! println!("{} file(s) written", summary.processed());
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::cleaner::{DocumentCleaner, copy_canonical, ensure_dir, is_same_file};
use crate::config::{CleanConfig, DEFAULT_EXTENSION};
use crate::core::models::{CANONICAL_PREFIX, DirectoryEntry, DocumentKind};
use crate::core::ports::ProgressReporter;
use crate::error::CleanError;
use crate::output::RunSummary;

/// Dispatch and error policy for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOptions {
    /// File name prefix marking canonical RFCs
    pub canonical_prefix: String,
    /// Suffix a file name must end with to be processed (case-sensitive)
    pub extension: String,
    /// Abort on the first failure instead of skipping the file
    pub fail_fast: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            canonical_prefix: CANONICAL_PREFIX.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            fail_fast: false,
        }
    }
}

impl From<&CleanConfig> for ProcessOptions {
    fn from(config: &CleanConfig) -> Self {
        Self {
            canonical_prefix: config.canonical_prefix.clone(),
            extension: config.extension.clone(),
            fail_fast: config.fail_fast,
        }
    }
}

/// Walks topic subdirectories and copies or cleans every document
#[derive(Debug, Clone)]
pub struct TreeProcessor {
    cleaner: DocumentCleaner,
    options: ProcessOptions,
}

impl TreeProcessor {
    /// Create a processor from a cleaner and options
    #[must_use]
    pub const fn new(cleaner: DocumentCleaner, options: ProcessOptions) -> Self {
        Self { cleaner, options }
    }

    /// Create a processor from a loaded configuration
    pub fn from_config(config: &CleanConfig) -> Result<Self, CleanError> {
        let cleaner = DocumentCleaner::new(config.classifier()?);
        Ok(Self::new(cleaner, ProcessOptions::from(config)))
    }

    /// Process every document under `input_root` into `output_root`.
    ///
    /// Per-file failures are reported, recorded in the summary, and skipped
    /// unless `fail_fast` is set. A missing input root, an output root equal to
    /// the input root, or an output root that cannot be created aborts the run.
    pub fn process_all(
        &self,
        input_root: &Path,
        output_root: &Path,
        reporter: &dyn ProgressReporter,
    ) -> Result<RunSummary, CleanError> {
        let metadata =
            fs::metadata(input_root).map_err(|e| CleanError::from_read(input_root, e))?;
        if !metadata.is_dir() {
            return Err(CleanError::NotADirectory(input_root.to_path_buf()));
        }

        if is_same_file(input_root, output_root) {
            return Err(CleanError::SameFile(input_root.to_path_buf()));
        }

        log::info!("Cleaning {} into {}", input_root.display(), output_root.display());
        ensure_dir(output_root)?;

        let mut summary = RunSummary::new(input_root, output_root);
        let skip = fs::canonicalize(output_root).ok();

        for subdir in Self::subdirectories(input_root, skip.as_deref())? {
            summary.directories += 1;
            self.process_subdir(&subdir, input_root, output_root, reporter, &mut summary)?;
        }

        Ok(summary)
    }

    /// Names of the immediate subdirectories of `input_root`, sorted.
    ///
    /// `exclude` is skipped when it resolves to the same directory, so an
    /// output root nested inside the input root is not fed back in. This is
    /// the one exception to mirroring every input subdirectory: that
    /// directory gets no `out/out` counterpart.
    pub fn subdirectories(
        input_root: &Path,
        exclude: Option<&Path>,
    ) -> Result<Vec<String>, CleanError> {
        let mut subdirs = Vec::new();

        for entry in list_dir(input_root)? {
            if !entry.file_type().is_dir() {
                continue;
            }

            let is_excluded = exclude
                .is_some_and(|skip| fs::canonicalize(entry.path()).is_ok_and(|p| p == skip));
            if is_excluded {
                log::debug!("skipping output root {}", entry.path().display());
                continue;
            }

            match entry.file_name().to_str() {
                Some(name) => subdirs.push(name.to_string()),
                None => log::warn!("skipping non-UTF-8 directory name: {}", entry.path().display()),
            }
        }

        Ok(subdirs)
    }

    /// Documents directly inside `input_root/subdir`, sorted by file name.
    ///
    /// Hidden files and anything that is not a regular file are ignored.
    pub fn documents(
        &self,
        input_root: &Path,
        subdir: &str,
    ) -> Result<Vec<DirectoryEntry>, CleanError> {
        let mut documents = Vec::new();

        for entry in list_dir(&input_root.join(subdir))? {
            if !entry.file_type().is_file() {
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                log::warn!("skipping non-UTF-8 file name: {}", entry.path().display());
                continue;
            };

            if name.starts_with('.') || !name.ends_with(self.options.extension.as_str()) {
                continue;
            }

            documents.push(DirectoryEntry::new(subdir, name));
        }

        Ok(documents)
    }

    /// Copy or clean a single document according to its kind
    pub fn process_entry(
        &self,
        entry: &DirectoryEntry,
        input_root: &Path,
        output_root: &Path,
        summary: &mut RunSummary,
    ) -> Result<DocumentKind, CleanError> {
        let input = entry.input_path(input_root);
        let output = entry.output_path(output_root);
        let kind = entry.kind(&self.options.canonical_prefix);

        match kind {
            DocumentKind::Canonical => {
                let bytes = copy_canonical(&input, &output)?;
                log::debug!("{entry}: copied {bytes} byte(s)");
                summary.copied += 1;
            },
            DocumentKind::Draft => {
                let report = self.cleaner.clean_report(&input, &output)?;
                summary.cleaned += 1;
                summary.lines_discarded += report.lines_discarded;
                if report.lossy {
                    summary.decode_warnings += 1;
                }
            },
        }

        Ok(kind)
    }

    fn process_subdir(
        &self,
        subdir: &str,
        input_root: &Path,
        output_root: &Path,
        reporter: &dyn ProgressReporter,
        summary: &mut RunSummary,
    ) -> Result<(), CleanError> {
        // The mirrored directory exists even when no document qualifies.
        if let Err(err) = ensure_dir(&output_root.join(subdir)) {
            return self.skip(PathBuf::from(subdir), err, summary);
        }

        let entries = match self.documents(input_root, subdir) {
            Ok(entries) => entries,
            Err(err) => return self.skip(PathBuf::from(subdir), err, summary),
        };

        for entry in entries {
            reporter.file_started(&entry, entry.kind(&self.options.canonical_prefix));

            match self.process_entry(&entry, input_root, output_root, summary) {
                Ok(_) => reporter.file_completed(&entry),
                Err(err) => {
                    reporter.file_failed(&entry, &err);
                    self.skip(entry.relative_path(), err, summary)?;
                },
            }
        }

        reporter.directory_completed(subdir);
        Ok(())
    }

    fn skip(
        &self,
        path: PathBuf,
        err: CleanError,
        summary: &mut RunSummary,
    ) -> Result<(), CleanError> {
        log::debug!("skipping {}: {err}", path.display());
        if self.options.fail_fast {
            return Err(err);
        }
        summary.record_failure(path, &err);
        Ok(())
    }
}

/// Immediate children of `dir`, sorted by name.
///
/// An unreadable `dir` is an error. A child that cannot be inspected (a
/// dangling symlink, say) is logged and left out.
fn list_dir(dir: &Path) -> Result<Vec<walkdir::DirEntry>, CleanError> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        match entry {
            Ok(entry) => entries.push(entry),
            Err(err) if err.depth() > 0 => log::warn!("skipping unreadable entry: {err}"),
            Err(err) if err.io_error().is_none() => return Err(CleanError::Walk(err)),
            Err(err) => {
                let path = err.path().unwrap_or(dir).to_path_buf();
                let io = err
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
                return Err(CleanError::from_read(&path, io));
            },
        }
    }

    Ok(entries)
}
