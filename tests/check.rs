//! Tests for the `check` command.

use std::fs;
use std::path::PathBuf;

use a11yinspect::commands::check::CheckArgs;
use a11yinspect::commands::check::check;
use a11yinspect::commands::check::check_files;
use a11yinspect::config::Config;
use tempfile::TempDir;

/// A page with an image that has no text alternative.
const MISSING_ALT: &str = r#"{
    "path": "page.jsx",
    "body": [
        {
            "type": "element",
            "name": "img",
            "attributes": [{ "name": "src", "value": "logo.png" }],
            "children": []
        }
    ]
}"#;

/// A page with a purely decorative image, reported only as advice.
const DECORATIVE: &str = r#"{
    "body": [
        {
            "type": "element",
            "name": "img",
            "attributes": [
                { "name": "src", "value": "divider.png" },
                { "name": "role", "value": "presentation" }
            ],
            "children": []
        }
    ]
}"#;

/// Writes a serialized tree into the directory.
fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Creates the arguments for checking the given files.
fn args(files: Vec<PathBuf>) -> CheckArgs {
    CheckArgs {
        files,
        profile: None,
        except: Vec::new(),
        deny_warnings: false,
        no_color: true,
        report_mode: None,
    }
}

#[test]
fn errors_fail_the_check() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "page.json", MISSING_ALT);

    let err = check(args(vec![file]), Config::default()).unwrap_err();
    assert!(err.to_string().starts_with("failing due to"));
}

#[test]
fn excepted_rules_do_not_run() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "page.json", MISSING_ALT);

    let mut args = args(vec![file]);
    let before = check_files(&args, &Config::default()).unwrap();

    args.except = vec![
        "img-element".to_string(),
        "img-element-error".to_string(),
        "img-element-warning".to_string(),
    ];
    let after = check_files(&args, &Config::default()).unwrap();

    // `imgMissingAltNoAria` from the combined and `-error` rules
    assert_eq!(before.errors - after.errors, 2);
    assert_eq!(before.warnings, after.warnings);
}

#[test]
fn profiles_select_rules() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "page.json", MISSING_ALT);

    let mut args = args(vec![file]);
    args.profile = Some("warnings-only".to_string());
    let counts = check_files(&args, &Config::default()).unwrap();
    assert_eq!(counts.errors, 0);

    args.profile = Some("strict".to_string());
    let counts = check_files(&args, &Config::default()).unwrap();
    assert!(counts.errors > 0);
    assert_eq!(counts.warnings, 0);
}

#[test]
fn warnings_fail_only_when_denied() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "page.json", DECORATIVE);

    let mut args = args(vec![file]);
    args.profile = Some("warnings-only".to_string());
    let counts = check_files(&args, &Config::default()).unwrap();
    assert!(counts.warnings > 0);
    assert_eq!(counts.errors, 0);
    assert_eq!(counts.notes, 0);

    assert!(check(args.clone(), Config::default()).is_ok());

    args.deny_warnings = true;
    let err = check(args, Config::default()).unwrap_err();
    assert!(err.to_string().contains("`--deny-warnings` was specified"));
}

#[test]
fn missing_files_are_errors() {
    let dir = TempDir::new().unwrap();
    let err = check(
        args(vec![dir.path().join("missing.json")]),
        Config::default(),
    )
    .unwrap_err();
    assert!(err.to_string().starts_with("failed to read"));
}
