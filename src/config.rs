//! Run configuration
//!
//! Settings come from three layers, highest precedence first: explicit CLI
//! flags, an optional TOML file passed with `--config`, and built-in defaults.
//!
//! ```toml
//! input_dir = "GreenAI Data"
//! output_dir = "GreenAI Data Cleaned"
//! canonical_prefix = "rfc"
//! extension = ".txt"
//! fail_fast = false
//!
//! [patterns]
//! header = 'Expires.*?\w+.*?\d+.*\[Page \d+\]$'
//! footer = '^Internet-Draft.*\d{4}$'
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::models::CANONICAL_PREFIX;
use crate::core::services::{DEFAULT_FOOTER_PATTERN, DEFAULT_HEADER_PATTERN, LineClassifier};
use crate::error::CleanError;

/// Default input root
pub const DEFAULT_INPUT_DIR: &str = "GreenAI Data";

/// Default output root
pub const DEFAULT_OUTPUT_DIR: &str = "GreenAI Data Cleaned";

/// Default document file suffix
pub const DEFAULT_EXTENSION: &str = ".txt";

/// Full configuration for a cleaning run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CleanConfig {
    /// Root containing one level of topic subdirectories
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,
    /// Root the cleaned tree is mirrored into
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// File name prefix marking canonical RFCs
    #[serde(default = "default_canonical_prefix")]
    pub canonical_prefix: String,
    /// Suffix a file name must end with to be processed
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Abort on the first per-file failure
    #[serde(default)]
    pub fail_fast: bool,
    /// Line patterns
    #[serde(default)]
    pub patterns: PatternConfig,
}

/// Header and footer regexes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternConfig {
    /// Page header pattern
    #[serde(default = "default_header")]
    pub header: String,
    /// Page footer pattern
    #[serde(default = "default_footer")]
    pub footer: String,
}

fn default_input_dir() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_DIR)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_canonical_prefix() -> String {
    CANONICAL_PREFIX.to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_header() -> String {
    DEFAULT_HEADER_PATTERN.to_string()
}

fn default_footer() -> String {
    DEFAULT_FOOTER_PATTERN.to_string()
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            canonical_prefix: default_canonical_prefix(),
            extension: default_extension(),
            fail_fast: false,
            patterns: PatternConfig::default(),
        }
    }
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            header: default_header(),
            footer: default_footer(),
        }
    }
}

/// Values given explicitly on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--input_dir`
    pub input_dir: Option<PathBuf>,
    /// `--output_dir`
    pub output_dir: Option<PathBuf>,
    /// `--fail-fast`
    pub fail_fast: bool,
}

impl CleanConfig {
    /// Parse a config from TOML text
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, CleanError> {
        toml::from_str(content).map_err(|e| CleanError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self, CleanError> {
        let content = fs::read_to_string(path).map_err(|e| CleanError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content, path)
    }

    /// Load from an optional file, falling back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, CleanError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Apply command line overrides on top of this config
    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(input_dir) = overrides.input_dir {
            self.input_dir = input_dir;
        }
        if let Some(output_dir) = overrides.output_dir {
            self.output_dir = output_dir;
        }
        if overrides.fail_fast {
            self.fail_fast = true;
        }
        self
    }

    /// Compile the configured patterns
    pub fn classifier(&self) -> Result<LineClassifier, CleanError> {
        LineClassifier::with_patterns(&self.patterns.header, &self.patterns.footer)
    }
}
