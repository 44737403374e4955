//! Core domain logic for rfc-clean
//!
//! This module contains pure logic with no I/O dependencies.
//! Observers of a run are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`LineClass`, `DocumentKind`, `DirectoryEntry`)
//! - `services/` - Line classification and in-memory document cleaning
//! - `ports/` - Trait definitions for progress reporting

pub mod models;
pub mod ports;
pub mod services;
