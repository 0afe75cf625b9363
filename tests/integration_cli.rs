//! Integration tests for the `shot-name` binary.

use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::{Command, Output};

fn shot_name(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_shot-name"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run shot-name")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn name_prints_dashed_filename() {
    let output = shot_name(&[
        "name", "screen1", "--model", "iPhone Simulator", "--width", "375", "--height", "667",
        "--language", "en", "--layout", "dashed", "--output", "minimal",
    ]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "en-iOS-4.7-in-portrait-screen1");
}

#[test]
fn name_prints_underscored_filename_for_tablet() {
    let output = shot_name(&[
        "name", "login", "--model", "iPad", "--width", "1024", "--height", "768",
        "--layout", "underscored", "--output", "minimal",
    ]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "iOS-iPad___landscape___login");
}

#[test]
fn name_without_language_uses_placeholder() {
    let output = shot_name(&[
        "name", "x", "--model", "iPhone", "--width", "320", "--height", "480",
        "--layout", "dashed", "--output", "minimal",
    ]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "unknown-iOS-3.5-in-portrait-x");
}

#[test]
fn classify_json_reports_unrecognized_size() {
    let output = shot_name(&[
        "classify", "--model", "iPhone", "--width", "375", "--height", "812", "--output", "json",
    ]);

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["device"], "iOS-3.5-in");
    assert_eq!(json["orientation"], "portrait");
    assert_eq!(json["recognized"], false);
}

#[test]
fn classify_legacy_scheme() {
    let output = shot_name(&[
        "classify", "--model", "iPhone", "--width", "320", "--height", "568",
        "--scheme", "legacy", "--output", "minimal",
    ]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "iphone5 portrait");
}

#[test]
fn table_lists_modern_entries() {
    let output = shot_name(&["table", "--output", "minimal"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(predicate::str::contains("568 iOS-4-in").eval(&text));
    assert!(predicate::str::contains("667 iOS-4.7-in").eval(&text));
    assert!(predicate::str::contains("736 iOS-5.5-in").eval(&text));
    assert!(predicate::str::ends_with("* iOS-3.5-in").eval(&text));
}

#[test]
fn config_file_sets_layout_and_table() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config = temp.child("config.json");
    config
        .write_str(
            r#"{
                "table": {
                    "entries": [{"max_dimension": 812.0, "label": "iOS-5.8-in"}],
                    "phone_fallback": "iOS-other",
                    "tablet_label": "iOS-iPad"
                },
                "layout": {"fields": ["device", "name"], "delimiter": "__"}
            }"#,
        )
        .unwrap();

    let path = config.path().to_str().unwrap();
    let output = shot_name(&[
        "name", "home", "--model", "iPhone", "--width", "375", "--height", "812",
        "--config", path, "--output", "minimal",
    ]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "iOS-5.8-in__home");
}

#[test]
fn missing_config_file_fails() {
    let output = shot_name(&[
        "table", "--config", "/nonexistent/shot-name/config.json",
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(predicate::str::contains("not found").eval(&stderr));
}

#[test]
fn invalid_phone_pattern_in_config_fails() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config = temp.child("config.json");
    config.write_str(r#"{"phone_model_pattern": "iPhone("}"#).unwrap();

    let output = shot_name(&["table", "--config", config.path().to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(predicate::str::contains("iPhone(").eval(&stderr));
}
