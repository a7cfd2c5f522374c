//! End-to-end extraction tests.
//!
//! Each test builds a real map file in a temp directory, runs the
//! extract command against a temp output root, and checks what landed
//! on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;
use unmap::commands::extract;

fn write_map(dir: &Path, map: serde_json::Value) -> PathBuf {
    let path = dir.join("bundle.js.map");
    fs::write(&path, map.to_string()).expect("write map");
    path
}

#[test]
fn test_extracts_sources_with_content() {
    let dir = tempdir().expect("tempdir");
    let map = write_map(
        dir.path(),
        serde_json::json!({
            "version": 3,
            "sources": ["src/app.js", "lib\\util.js"],
            "sourcesContent": ["console.log(1);", "module.exports = {};"],
        }),
    );
    let out = dir.path().join("out");

    let stats = extract::execute(&map, &out, "_", 255).expect("extract");

    assert_eq!(stats.written, 2);
    assert_eq!(
        fs::read_to_string(out.join("src/app.js")).expect("read"),
        "console.log(1);"
    );
    // Backslash separators are normalized into directories.
    assert_eq!(
        fs::read_to_string(out.join("lib/util.js")).expect("read"),
        "module.exports = {};"
    );
}

#[test]
fn test_skips_entries_without_content() {
    let dir = tempdir().expect("tempdir");
    let map = write_map(
        dir.path(),
        serde_json::json!({
            "sources": ["a.js", "b.js", "c.js"],
            "sourcesContent": ["let a;", null],
        }),
    );
    let out = dir.path().join("out");

    let stats = extract::execute(&map, &out, "_", 255).expect("extract");

    assert_eq!(stats.written, 1);
    assert_eq!(stats.missing_content, 2);
    assert!(out.join("a.js").exists());
    assert!(!out.join("b.js").exists());
}

#[test]
fn test_adversarial_paths_stay_inside_output_root() {
    let dir = tempdir().expect("tempdir");
    let map = write_map(
        dir.path(),
        serde_json::json!({
            "sources": ["../../etc/passwd", "con.js", "a:b*.js"],
            "sourcesContent": ["root:x:0:0", "device", "stars"],
        }),
    );
    let out = dir.path().join("out");

    let stats = extract::execute(&map, &out, "_", 255).expect("extract");

    // "../../etc/passwd" still has a net ".." after sanitization and is
    // refused; the other two are rewritten and written.
    assert_eq!(stats.written, 2);
    assert_eq!(stats.escaping, 1);
    assert!(!dir.path().join("etc/passwd").exists());
    assert_eq!(fs::read_to_string(out.join("_")).expect("read"), "device");
    assert_eq!(
        fs::read_to_string(out.join("a_b_.js")).expect("read"),
        "stars"
    );
}

#[test]
fn test_unusable_name_gets_placeholder() {
    let dir = tempdir().expect("tempdir");
    let map = write_map(
        dir.path(),
        serde_json::json!({
            "sources": [""],
            "sourcesContent": ["content"],
        }),
    );
    let out = dir.path().join("out");

    let stats = extract::execute(&map, &out, "_", 255).expect("extract");

    assert_eq!(stats.written, 1);
    assert_eq!(
        fs::read_to_string(out.join("source-0")).expect("read"),
        "content"
    );
}

#[test]
fn test_colliding_sanitized_names_overwrite() {
    // Deduplication is deliberately out of scope: later entries win.
    let dir = tempdir().expect("tempdir");
    let map = write_map(
        dir.path(),
        serde_json::json!({
            "sources": ["a:b.js", "a*b.js"],
            "sourcesContent": ["one", "two"],
        }),
    );
    let out = dir.path().join("out");

    let stats = extract::execute(&map, &out, "_", 255).expect("extract");

    assert_eq!(stats.written, 2);
    assert_eq!(fs::read_to_string(out.join("a_b.js")).expect("read"), "two");
}

#[test]
fn test_long_names_are_cut_to_the_byte_budget() {
    let dir = tempdir().expect("tempdir");
    let long_name = "a".repeat(300);
    let map = write_map(
        dir.path(),
        serde_json::json!({
            "sources": [long_name],
            "sourcesContent": ["x"],
        }),
    );
    let out = dir.path().join("out");

    let stats = extract::execute(&map, &out, "_", 255).expect("extract");

    assert_eq!(stats.written, 1);
    assert!(out.join("a".repeat(255)).exists());
}

#[test]
fn test_missing_map_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let out = dir.path().join("out");

    let err = extract::execute(Path::new("missing.js.map"), &out, "_", 255).unwrap_err();
    assert!(err.to_string().contains("missing.js.map"));
}
