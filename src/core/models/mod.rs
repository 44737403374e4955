//! Domain models for rfc-clean
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`LineClass`] - Keep or discard a single line
//! - [`DocumentKind`] - Canonical RFC or draft, decided by file name
//! - [`DirectoryEntry`] - A discovered file and its mirrored output path

mod document_kind;
mod entry;
mod line_class;

pub use document_kind::{CANONICAL_PREFIX, DocumentKind};
pub use entry::DirectoryEntry;
pub use line_class::LineClass;
