use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, b"x").expect("write file");
}

/// Lay out a small tree with five files spread across four
/// directories (the root itself, docs, docs/api, and logs).
fn write_sample_tree(root: &Path) {
    touch(&root.join("notes.txt"));
    touch(&root.join("docs/guide.md"));
    touch(&root.join("docs/intro.md"));
    touch(&root.join("docs/api/reference.md"));
    touch(&root.join("logs/app.log"));
}

fn run_index(root: &Path, index_file: &Path) {
    let mut cmd = cargo_bin_cmd!("namegrep");
    cmd.args([
        "index",
        "--path",
        root.to_str().unwrap(),
        "--index-file",
        index_file.to_str().unwrap(),
    ]);

    cmd.assert().success();
}

fn total_filenames(store: &Value) -> usize {
    store["entries"]
        .as_array()
        .expect("entries array")
        .iter()
        .map(|e| e["filenames"].as_array().expect("filenames array").len())
        .sum()
}

#[test]
fn cli_index_writes_store_and_prints_summary() {
    let tmp = tempdir().expect("tempdir");
    let root = tmp.path().join("tree");
    write_sample_tree(&root);
    let index_file = tmp.path().join("file_index.json");

    let mut cmd = cargo_bin_cmd!("namegrep");
    cmd.args([
        "index",
        "--path",
        root.to_str().unwrap(),
        "--index-file",
        index_file.to_str().unwrap(),
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Indexed 5 files across 4 directories into",
        ));

    assert!(index_file.exists(), "store file should exist after indexing");
}

#[test]
fn cli_index_store_holds_meta_and_grouped_entries() {
    let tmp = tempdir().expect("tempdir");
    let root = tmp.path().join("tree");
    write_sample_tree(&root);
    let index_file = tmp.path().join("file_index.json");

    run_index(&root, &index_file);

    let store_file = fs::File::open(&index_file).expect("open store");
    let store: Value = serde_json::from_reader(store_file).expect("parse store");

    assert_eq!(store["meta"]["schema_version"], "1");
    assert_eq!(
        store["meta"]["root_path"],
        Value::String(root.display().to_string())
    );
    assert!(
        store["meta"]["tool_version"].as_str().is_some(),
        "expected tool_version in store meta"
    );
    assert!(
        store["meta"]["generated_at"].as_u64().is_some(),
        "expected generated_at timestamp in store meta"
    );

    let entries = store["entries"].as_array().expect("entries array");
    assert_eq!(entries.len(), 4, "one entry per directory holding files");
    assert_eq!(total_filenames(&store), 5);

    for entry in entries {
        let filenames = entry["filenames"].as_array().expect("filenames array");
        assert!(
            !filenames.is_empty(),
            "every entry should hold at least one filename, got: {entry}"
        );
    }

    let docs_entry = entries
        .iter()
        .find(|e| {
            e["directory"]
                .as_str()
                .map(|d| d.ends_with("docs"))
                .unwrap_or(false)
        })
        .expect("docs entry");
    let mut docs_files: Vec<&str> = docs_entry["filenames"]
        .as_array()
        .expect("filenames array")
        .iter()
        .map(|v| v.as_str().expect("filename string"))
        .collect();
    docs_files.sort_unstable();
    assert_eq!(docs_files, vec!["guide.md", "intro.md"]);
}

#[test]
fn cli_index_applies_include_and_exclude_globs() {
    let tmp = tempdir().expect("tempdir");
    let root = tmp.path().join("tree");
    write_sample_tree(&root);
    let index_file = tmp.path().join("file_index.json");

    let mut cmd = cargo_bin_cmd!("namegrep");
    cmd.args([
        "index",
        "--path",
        root.to_str().unwrap(),
        "--index-file",
        index_file.to_str().unwrap(),
        "--glob",
        "*.md",
        "--exclude",
        "*intro*",
    ]);
    cmd.assert().success();

    let store_file = fs::File::open(&index_file).expect("open store");
    let store: Value = serde_json::from_reader(store_file).expect("parse store");

    assert_eq!(total_filenames(&store), 2, "guide.md and reference.md only");
}

#[test]
fn cli_index_rebuild_replaces_previous_store() {
    let tmp = tempdir().expect("tempdir");
    let root = tmp.path().join("tree");
    write_sample_tree(&root);
    let index_file = tmp.path().join("file_index.json");

    run_index(&root, &index_file);

    fs::remove_file(root.join("notes.txt")).expect("remove file");
    touch(&root.join("docs/changelog.md"));

    run_index(&root, &index_file);

    let store_file = fs::File::open(&index_file).expect("open store");
    let store: Value = serde_json::from_reader(store_file).expect("parse store");

    assert_eq!(total_filenames(&store), 5);

    let all_names: Vec<String> = store["entries"]
        .as_array()
        .expect("entries array")
        .iter()
        .flat_map(|e| {
            e["filenames"]
                .as_array()
                .expect("filenames array")
                .iter()
                .map(|v| v.as_str().expect("filename string").to_string())
                .collect::<Vec<_>>()
        })
        .collect();

    assert!(
        all_names.contains(&"changelog.md".to_string()),
        "new file should be indexed, got: {all_names:?}"
    );
    assert!(
        !all_names.contains(&"notes.txt".to_string()),
        "removed file should be gone after rebuild, got: {all_names:?}"
    );
}

#[test]
fn cli_index_missing_root_produces_empty_store() {
    let tmp = tempdir().expect("tempdir");
    let root = tmp.path().join("nowhere");
    let index_file = tmp.path().join("file_index.json");

    let mut cmd = cargo_bin_cmd!("namegrep");
    cmd.args([
        "index",
        "--path",
        root.to_str().unwrap(),
        "--index-file",
        index_file.to_str().unwrap(),
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Indexed 0 files"));

    let store_file = fs::File::open(&index_file).expect("open store");
    let store: Value = serde_json::from_reader(store_file).expect("parse store");

    assert_eq!(
        store["entries"].as_array().expect("entries array").len(),
        0,
        "store should hold no entries for a missing root"
    );
}

#[test]
fn cli_info_text_output() {
    let tmp = tempdir().expect("tempdir");
    let root = tmp.path().join("tree");
    write_sample_tree(&root);
    let index_file = tmp.path().join("file_index.json");

    run_index(&root, &index_file);

    let mut cmd = cargo_bin_cmd!("namegrep");
    cmd.args([
        "info",
        "--index-file",
        index_file.to_str().unwrap(),
        "--format",
        "text",
    ]);

    let assert = cmd.assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);

    assert!(
        stdout.contains("schema       : 1"),
        "expected schema line in output, got:\n{stdout}"
    );
    assert!(
        stdout.contains("directories  : 4"),
        "expected directory count line in output, got:\n{stdout}"
    );
    assert!(
        stdout.contains("files        : 5"),
        "expected file count line in output, got:\n{stdout}"
    );
}

#[test]
fn cli_info_json_output() {
    let tmp = tempdir().expect("tempdir");
    let root = tmp.path().join("tree");
    write_sample_tree(&root);
    let index_file = tmp.path().join("file_index.json");

    run_index(&root, &index_file);

    let mut cmd = cargo_bin_cmd!("namegrep");
    cmd.args([
        "info",
        "--index-file",
        index_file.to_str().unwrap(),
        "--format",
        "json",
    ]);

    let assert = cmd.assert().success();
    let value: Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid json output");

    assert_eq!(value["directories_indexed"], 4);
    assert_eq!(value["files_indexed"], 5);
    assert_eq!(value["schema_version"], "1");
    assert_eq!(
        value["root_path"],
        Value::String(root.display().to_string())
    );
    assert!(
        value.get("tool_version").and_then(|v| v.as_str()).is_some(),
        "expected tool_version field in info JSON"
    );
    assert!(
        value.get("generated_at").and_then(|v| v.as_str()).is_some(),
        "expected generated_at field in info JSON"
    );
}

#[test]
fn cli_info_fails_when_store_is_absent() {
    let tmp = tempdir().expect("tempdir");
    let index_file = tmp.path().join("absent.json");

    let mut cmd = cargo_bin_cmd!("namegrep");
    cmd.args(["info", "--index-file", index_file.to_str().unwrap()]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no index found"));
}
