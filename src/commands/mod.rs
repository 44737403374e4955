//! Command implementations

mod process;

pub use process::process;
