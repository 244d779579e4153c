//! Tests for storefront settings loading.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use chess_two::StorefrontSettings;
use tempfile::NamedTempFile;

#[test]
fn test_defaults() {
    let settings = StorefrontSettings::new();
    assert_eq!(*settings.settle_delay_ms(), 300);
    assert_eq!(*settings.drag_threshold(), 6);
    assert_eq!(settings.catalog(), &None);
    assert_eq!(settings.log_file(), &PathBuf::from("chess_two.log"));

    let config = settings.carousel_config();
    assert_eq!(*config.settle_delay(), Duration::from_millis(300));
    assert_eq!(*config.drag_threshold(), 6);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "drag_threshold = 12").expect("Failed to write settings");

    let settings = StorefrontSettings::from_file(file.path()).expect("Settings should load");
    assert_eq!(*settings.drag_threshold(), 12);
    assert_eq!(*settings.settle_delay_ms(), 300);
}

#[test]
fn test_full_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    write!(
        file,
        "settle_delay_ms = 120\ndrag_threshold = 8\ncatalog = \"/tmp/cards.toml\"\nlog_file = \"/tmp/c2.log\"\n"
    )
    .expect("Failed to write settings");

    let settings = StorefrontSettings::from_file(file.path()).expect("Settings should load");
    assert_eq!(*settings.settle_delay_ms(), 120);
    assert_eq!(settings.catalog(), &Some(PathBuf::from("/tmp/cards.toml")));
    assert_eq!(settings.log_file(), &PathBuf::from("/tmp/c2.log"));
    assert_eq!(
        *settings.carousel_config().settle_delay(),
        Duration::from_millis(120)
    );
}

#[test]
fn test_builder_overrides() {
    let settings = StorefrontSettings::new()
        .with_settle_delay_ms(10)
        .with_drag_threshold(3)
        .with_catalog(PathBuf::from("cards.toml"));
    assert_eq!(*settings.settle_delay_ms(), 10);
    assert_eq!(*settings.carousel_config().drag_threshold(), 3);
    assert_eq!(settings.catalog(), &Some(PathBuf::from("cards.toml")));
}

#[test]
fn test_bad_file_rejected() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "settle_delay_ms = \"soon\"").expect("Failed to write settings");
    assert!(StorefrontSettings::from_file(file.path()).is_err());

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    assert!(StorefrontSettings::from_file(dir.path().join("none.toml")).is_err());
}
