//! Tests for configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use rfc_clean::CleanError;
use rfc_clean::config::{CleanConfig, Overrides};
use rfc_clean::core::models::LineClass;
use tempfile::TempDir;

#[test]
fn load_reads_toml_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("rfc-clean.toml");
    fs::write(
        &path,
        r#"
input_dir = "drafts"
output_dir = "clean"
fail_fast = true

[patterns]
footer = '^Internet-Draft\s{2,}.*\s\d{4}$'
"#,
    )
    .unwrap();

    let config = CleanConfig::load(&path).unwrap();
    assert_eq!(config.input_dir, PathBuf::from("drafts"));
    assert_eq!(config.output_dir, PathBuf::from("clean"));
    assert!(config.fail_fast);
    assert_eq!(config.canonical_prefix, "rfc");

    let classifier = config.classifier().unwrap();
    assert_eq!(
        classifier.classify("Internet-Draft references are listed in RFC 2026"),
        LineClass::Keep
    );
    assert_eq!(
        classifier.classify("   Expires March 2024             [Page 3]"),
        LineClass::Discard
    );
}

#[test]
fn load_missing_file_is_config_error() {
    let err = CleanConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
    assert!(matches!(err, CleanError::Config { .. }));
}

#[test]
fn load_or_default_without_path() {
    assert_eq!(CleanConfig::load_or_default(None).unwrap(), CleanConfig::default());
}

#[test]
fn invalid_pattern_surfaces_from_classifier() {
    let config = CleanConfig::from_toml("[patterns]\nheader = '['", Path::new("c.toml")).unwrap();
    assert!(matches!(config.classifier(), Err(CleanError::InvalidPattern { name: "header", .. })));
}

#[test]
fn fail_fast_override_only_turns_on() {
    let config = CleanConfig::from_toml("fail_fast = true", Path::new("c.toml"))
        .unwrap()
        .with_overrides(Overrides::default());
    assert!(config.fail_fast);
}
