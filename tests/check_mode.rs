//! Integration tests for check mode (--check flag)

use std::path::PathBuf;
use std::process::Command;

fn write_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("shortkey_check_{}.toml", name));
    std::fs::write(&path, content).expect("write temp config");
    path
}

fn run_check(config: &PathBuf, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .arg("run")
        .arg("-q")
        .arg("--")
        .arg("--check")
        // Never fall back to the user's own shortcuts.toml.
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("SHORTKEY_LOG")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

#[test]
fn test_lists_configured_shortcuts() {
    let config = write_config(
        "valid",
        r#"
[[shortcuts]]
name = "Save"
keys = "Ctrl+S"

[[shortcuts]]
name = "Reload"
keys = "Shift+F5"
group = "View"
"#,
    );
    let (stdout, _, code) = run_check(&config, &["--no-defaults", "--platform", "other"]);
    assert_eq!(stdout.trim(), "-\tSave\tCtrl+S\nView\tReload\tShift+F5");
    assert_eq!(code, 0);
    let _ = std::fs::remove_file(&config);
}

#[test]
fn test_defaults_are_listed() {
    let config = write_config("defaults", "");
    let (stdout, _, code) = run_check(&config, &["--platform", "other"]);
    assert!(stdout.contains("-\tSelect All\tCtrl+A"));
    assert!(stdout.contains("Group 1\tCopy\tCtrl+C"));
    assert_eq!(stdout.lines().count(), 12);
    assert_eq!(code, 0);
    let _ = std::fs::remove_file(&config);
}

#[test]
fn test_duplicate_is_reported() {
    let config = write_config(
        "duplicate",
        r#"
[[shortcuts]]
name = "Save"
keys = "Ctrl+S"

[[shortcuts]]
name = "Store"
keys = "Cmd+S"
"#,
    );
    let (stdout, stderr, code) = run_check(&config, &["--no-defaults"]);
    assert_eq!(stdout.trim(), "-\tSave\tCtrl+S");
    assert!(stderr.contains("Warning:"));
    assert!(stderr.contains("already registered"));
    assert_eq!(code, 1);
    let _ = std::fs::remove_file(&config);
}

#[test]
fn test_invalid_keys_are_reported() {
    let config = write_config(
        "invalid",
        r#"
[[shortcuts]]
name = "Broken"
keys = "Ctrl+Nope"
"#,
    );
    let (stdout, stderr, code) = run_check(&config, &["--no-defaults"]);
    assert!(stdout.trim().is_empty());
    assert!(stderr.contains("Invalid keys 'Ctrl+Nope'"));
    assert_eq!(code, 1);
    let _ = std::fs::remove_file(&config);
}

#[test]
fn test_unknown_platform_fails() {
    let config = write_config("bad_platform", "");
    let (_, stderr, code) = run_check(&config, &["--platform", "amiga"]);
    assert!(stderr.contains("Error:"));
    assert_eq!(code, 1);
    let _ = std::fs::remove_file(&config);
}
