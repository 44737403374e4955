//! Document cleaner - file-level cleaning and verbatim copying
//!
//! Reads a draft with permissive decoding, strips page artifacts, and writes
//! the result to a mirrored path. Canonical RFCs go through
//! [`copy_canonical`] instead and are never decoded.
//!
//! # Examples
//!
//! ```no_run
//! use rfc_clean::cleaner::DocumentCleaner;
//! use rfc_clean::core::services::LineClassifier;
//!
//! let cleaner = DocumentCleaner::new(LineClassifier::new().unwrap());
//! let out = cleaner.clean("in/draft-x-00.txt", "out/draft-x-00.txt").unwrap();
//! ```

use std::borrow::Cow;
use std::fs::{self, File, FileTimes, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::services::{LineClassifier, clean_text};
use crate::error::CleanError;

/// Outcome of cleaning one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanReport {
    /// Where the cleaned document was written
    pub output_path: PathBuf,
    /// Lines retained
    pub lines_kept: usize,
    /// Header and footer lines removed
    pub lines_discarded: usize,
    /// Whether invalid byte sequences were replaced while decoding
    pub lossy: bool,
}

/// Cleans draft documents from disk to disk
#[derive(Debug, Clone)]
pub struct DocumentCleaner {
    classifier: LineClassifier,
}

impl DocumentCleaner {
    /// Create a cleaner using the given classifier
    #[must_use]
    pub const fn new(classifier: LineClassifier) -> Self {
        Self { classifier }
    }

    /// Clean `input` into `output`, returning the output path
    pub fn clean(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<PathBuf, CleanError> {
        self.clean_report(input.as_ref(), output.as_ref())
            .map(|report| report.output_path)
    }

    /// Clean `input` into `output`, returning line counts
    pub fn clean_report(&self, input: &Path, output: &Path) -> Result<CleanReport, CleanError> {
        let bytes = fs::read(input).map_err(|e| CleanError::from_read(input, e))?;

        let text = String::from_utf8_lossy(&bytes);
        let lossy = matches!(text, Cow::Owned(_));
        if lossy {
            log::warn!(
                "{}: invalid UTF-8 replaced with U+FFFD",
                input.display()
            );
        }

        let cleaned = clean_text(&self.classifier, &text);
        log::debug!(
            "{}: kept {} line(s), discarded {}",
            input.display(),
            cleaned.kept,
            cleaned.discarded
        );

        ensure_parent_dir(output)?;
        write_file(output, cleaned.text.as_bytes())?;

        Ok(CleanReport {
            output_path: output.to_path_buf(),
            lines_kept: cleaned.kept,
            lines_discarded: cleaned.discarded,
            lossy,
        })
    }
}

/// Copy a canonical document byte for byte.
///
/// Permissions travel with the copy. Access and modification times are
/// carried over when the platform allows it; failures there are ignored.
/// Copying a file onto itself is refused, since opening the destination
/// truncates the source.
pub fn copy_canonical(input: &Path, output: &Path) -> Result<u64, CleanError> {
    let metadata = fs::metadata(input).map_err(|e| CleanError::from_read(input, e))?;

    if is_same_file(input, output) {
        return Err(CleanError::SameFile(input.to_path_buf()));
    }

    ensure_parent_dir(output)?;
    let bytes = fs::copy(input, output).map_err(|e| CleanError::from_write(output, e))?;

    if let Err(err) = copy_times(&metadata, output) {
        log::debug!("{}: could not preserve timestamps: {err}", output.display());
    }

    Ok(bytes)
}

/// Whether both paths exist and resolve to the same location
#[must_use]
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Create `dir` and any missing ancestors. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<(), CleanError> {
    fs::create_dir_all(dir).map_err(|e| CleanError::from_write(dir, e))
}

fn ensure_parent_dir(path: &Path) -> Result<(), CleanError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), CleanError> {
    let mut file = File::create(path).map_err(|e| CleanError::from_write(path, e))?;
    file.write_all(contents)
        .and_then(|()| file.flush())
        .map_err(|e| CleanError::from_write(path, e))
}

fn copy_times(metadata: &fs::Metadata, output: &Path) -> std::io::Result<()> {
    let mut times = FileTimes::new().set_modified(metadata.modified()?);
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    OpenOptions::new().write(true).open(output)?.set_times(times)
}
