//! Port traits (interfaces) for external collaborators
//!
//! The core never prints. Anything that wants to observe a run implements
//! one of these traits.

mod progress;

pub use progress::{ProgressReporter, SilentReporter};

#[cfg(test)]
pub use progress::MockProgressReporter;
