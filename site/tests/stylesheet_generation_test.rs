//! Integration tests for the stylesheet generation pipeline: render from
//! the built-in registry, write to disk, and fail loudly when the output
//! location is unusable.

use engine::theme::ThemeRegistry;
use sentinela::css;
use sentinela::error::AppError;
use std::fs;

#[test]
fn generation_to_disk_is_reproducible() {
    let registry = ThemeRegistry::global();
    let dir = tempfile::tempdir().unwrap();

    let first_path = dir.path().join("first.css");
    let second_path = dir.path().join("second.css");

    css::write_stylesheet(&first_path, &css::generate(registry).unwrap()).unwrap();
    css::write_stylesheet(&second_path, &css::generate(registry).unwrap()).unwrap();

    let first = fs::read(&first_path).unwrap();
    let second = fs::read(&second_path).unwrap();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn generated_file_exposes_the_documented_contract() {
    let registry = ThemeRegistry::global();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assets/index.css");

    css::write_stylesheet(&path, &css::generate(registry).unwrap()).unwrap();
    let contents = fs::read_to_string(&path).unwrap();

    // The names presentational components select against.
    for needle in [
        "--background:",
        "--foreground:",
        "--primary:",
        "--primary-foreground:",
        "--destructive-inverted:",
        "--font-size-multiplier: 1;",
        "--line-height-multiplier: 1.6;",
        ".dark {",
        ".high-contrast {",
        ".monochrome {",
        ".skip-link",
        ".emergency-pulse",
        ".dyslexia-friendly",
    ] {
        assert!(contents.contains(needle), "missing '{needle}'");
    }
}

#[test]
fn unusable_output_location_fails_with_an_output_error() {
    let registry = ThemeRegistry::global();
    let dir = tempfile::tempdir().unwrap();

    let blocker = dir.path().join("assets");
    fs::write(&blocker, "file standing where a directory must go").unwrap();

    let result = css::write_stylesheet(
        &blocker.join("index.css"),
        &css::generate(registry).unwrap(),
    );

    match result {
        Err(AppError::Output(msg)) => assert!(msg.contains("index.css")),
        other => panic!("expected an output error, got {other:?}"),
    }
}
