//! rfc-clean - batch cleaner for RFC and Internet-Draft text trees
//!
//! Strips running page headers and footers from draft documents and copies
//! published RFCs through untouched, mirroring a one-level topic directory
//! layout into an output root.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cleaner;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod processor;

pub use error::CleanError;
