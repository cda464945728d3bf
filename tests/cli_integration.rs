/*!
 * End-to-end tests driving the tidyfs binary
 */

use std::fs::{self, File};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::tempdir;

// Run the compiled binary and parse its stdout as the JSON payload
fn run_tidyfs(args: &[&str]) -> (Output, Value) {
    let output = Command::new(env!("CARGO_BIN_EXE_tidyfs"))
        .args(args)
        .output()
        .expect("binary runs");
    let stdout = String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8");
    let payload: Value =
        serde_json::from_str(stdout.trim()).expect("stdout is a single JSON document");
    (output, payload)
}

#[test]
fn organize_emits_category_result() {
    let workspace = tempdir().unwrap();
    File::create(workspace.path().join("notes.txt")).unwrap();
    File::create(workspace.path().join("photo.jpg")).unwrap();
    File::create(workspace.path().join("readme")).unwrap();
    fs::create_dir(workspace.path().join("sub")).unwrap();

    let (output, payload) = run_tidyfs(&["organize", &workspace.path().to_string_lossy()]);
    assert!(output.status.success());

    assert_eq!(payload["result"]["Documents"], serde_json::json!(["notes.txt"]));
    assert_eq!(payload["result"]["Images"], serde_json::json!(["photo.jpg"]));
    assert_eq!(payload["result"]["Others"], serde_json::json!(["readme"]));
    assert_eq!(payload["result"]["Audio"], serde_json::json!([]));
    assert_eq!(payload["result"]["Videos"], serde_json::json!([]));

    let operations = payload["operations"].as_array().expect("operations array");
    assert_eq!(operations.len(), 9);
    assert_eq!(operations[0]["op"], "readdir");
    assert_eq!(operations[0]["id"], 1);

    assert!(workspace.path().join("Images/photo.jpg").exists());
    assert!(workspace.path().join("sub").is_dir());
}

#[test]
fn organize_accepts_a_subpath() {
    let workspace = tempdir().unwrap();
    fs::create_dir(workspace.path().join("inbox")).unwrap();
    File::create(workspace.path().join("inbox/song.mp3")).unwrap();

    let (output, payload) = run_tidyfs(&[
        "organize",
        &workspace.path().to_string_lossy(),
        "inbox",
    ]);
    assert!(output.status.success());

    assert_eq!(payload["result"]["Audio"], serde_json::json!(["song.mp3"]));
    assert!(workspace.path().join("inbox/Audio/song.mp3").exists());
    // Only the subdirectory was touched
    assert!(!workspace.path().join("Audio").exists());
}

#[test]
fn organize_unreadable_target_reports_error() {
    let workspace = tempdir().unwrap();
    let missing = workspace.path().join("nope");

    let (output, payload) = run_tidyfs(&["organize", &missing.to_string_lossy()]);
    assert!(!output.status.success());

    assert_eq!(payload["operations"], serde_json::json!([]));
    assert_eq!(payload["result"], Value::Null);
    assert!(payload["error"].as_str().map_or(false, |s| !s.is_empty()));
}

#[test]
fn populate_creates_directory_and_files() {
    let workspace = tempdir().unwrap();

    let (output, payload) = run_tidyfs(&[
        "populate",
        &workspace.path().to_string_lossy(),
        "Project",
        "a.txt",
        "b.txt",
    ]);
    assert!(output.status.success());

    assert_eq!(payload["result"]["created"], 2);
    assert_eq!(
        payload["result"]["dirPath"],
        workspace.path().join("Project").display().to_string()
    );
    assert_eq!(fs::metadata(workspace.path().join("Project/a.txt")).unwrap().len(), 0);
    assert_eq!(fs::metadata(workspace.path().join("Project/b.txt")).unwrap().len(), 0);

    let operations = payload["operations"].as_array().expect("operations array");
    assert_eq!(operations.len(), 3);
    assert_eq!(operations[0]["op"], "mkdir");
    assert_eq!(operations[1]["op"], "writeFile");
}

#[test]
fn summary_flag_keeps_stdout_parseable() {
    let workspace = tempdir().unwrap();
    File::create(workspace.path().join("notes.txt")).unwrap();

    let (output, payload) = run_tidyfs(&[
        "organize",
        &workspace.path().to_string_lossy(),
        "--summary",
    ]);
    assert!(output.status.success());
    assert!(payload["result"].is_object());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("operations"));
}
