use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Contract tests for `trurl prototyping new-notebook`

fn trurl() -> Command {
    let mut cmd = Command::cargo_bin("trurl").unwrap();
    cmd.env_remove("TRURL_CONFIG_PATH").env_remove("RUST_LOG");
    cmd
}

fn project_with(temp_dir: &TempDir, dirs: &[&str]) -> PathBuf {
    let project_dir = temp_dir.path().join("test_project");
    fs::create_dir(&project_dir).unwrap();
    for dir in dirs {
        fs::create_dir(project_dir.join(dir)).unwrap();
    }
    project_dir
}

fn new_notebook(project_dir: &Path, name: &str) -> assert_cmd::assert::Assert {
    trurl()
        .args(["prototyping", "new-notebook"])
        .arg(project_dir)
        .arg(name)
        .assert()
}

#[test]
fn test_new_notebook_success_valid_name() {
    let temp_dir = TempDir::new().unwrap();
    let project_dir = project_with(&temp_dir, &["figures", "data"]);
    let notebook_path = project_dir.join("test_notebook.ipynb");

    new_notebook(&project_dir, "test_notebook")
        .success()
        .stdout(predicate::str::contains(format!(
            "New notebook generated here: {}",
            notebook_path.display()
        )));

    assert!(notebook_path.is_file());
    assert_eq!(fs::metadata(&notebook_path).unwrap().len(), 0);
    assert!(project_dir.join("figures").join("test_notebook").is_dir());
    assert!(project_dir.join("data").join("test_notebook").is_dir());
}

#[test]
fn test_new_notebook_relative_project_dir_reports_absolute_path() {
    let temp_dir = TempDir::new().unwrap();
    project_with(&temp_dir, &["figures", "data"]);
    // The child sees its working directory with symlinks resolved
    let root = fs::canonicalize(temp_dir.path()).unwrap();

    trurl()
        .current_dir(&root)
        .args(["prototyping", "new-notebook", "test_project", "rel"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "New notebook generated here: {}",
            root.join("test_project").join("rel.ipynb").display()
        )));
}

#[test]
fn test_new_notebook_success_with_hyphens_and_underscores() {
    let temp_dir = TempDir::new().unwrap();
    let project_dir = project_with(&temp_dir, &["figures", "data"]);

    new_notebook(&project_dir, "test-notebook_123").success();

    assert!(project_dir.join("test-notebook_123.ipynb").exists());
    assert!(project_dir.join("figures").join("test-notebook_123").exists());
    assert!(project_dir.join("data").join("test-notebook_123").exists());
}

#[test]
fn test_new_notebook_invalid_names() {
    for name in ["test notebook", "test@notebook!", "", "nb.v2"] {
        let temp_dir = TempDir::new().unwrap();
        let project_dir = project_with(&temp_dir, &["figures", "data"]);

        new_notebook(&project_dir, name)
            .failure()
            .code(1)
            .stderr(predicate::str::contains(
                "Notebook names must only contain alphanumeric characters, '_' and '-'.",
            ));

        assert_eq!(fs::read_dir(&project_dir).unwrap().count(), 2);
    }
}

#[test]
fn test_new_notebook_already_exists() {
    let temp_dir = TempDir::new().unwrap();
    let project_dir = project_with(&temp_dir, &["figures", "data"]);
    let existing_notebook = project_dir.join("existing_notebook.ipynb");
    fs::write(&existing_notebook, "").unwrap();

    new_notebook(&project_dir, "existing_notebook")
        .failure()
        .code(1)
        .stderr(predicate::str::contains(format!(
            "Notebook: {} already exists.",
            existing_notebook.display()
        )));

    assert!(!project_dir.join("figures").join("existing_notebook").exists());
}

#[test]
fn test_new_notebook_twice_fails() {
    let temp_dir = TempDir::new().unwrap();
    let project_dir = project_with(&temp_dir, &["figures", "data"]);

    new_notebook(&project_dir, "again").success();
    new_notebook(&project_dir, "again")
        .failure()
        .stderr(predicate::str::contains("already exists."));
}

#[test]
fn test_new_notebook_nonexistent_project_dir() {
    let temp_dir = TempDir::new().unwrap();
    let nonexistent_dir = temp_dir.path().join("nonexistent_project");

    new_notebook(&nonexistent_dir, "test_notebook")
        .failure()
        .code(1)
        .stderr(predicate::str::contains(format!(
            "Project directory does not exist: {}",
            nonexistent_dir.display()
        )));
}

#[test]
fn test_new_notebook_missing_figures_dir_only() {
    let temp_dir = TempDir::new().unwrap();
    let project_dir = project_with(&temp_dir, &["data"]);

    new_notebook(&project_dir, "test_notebook")
        .failure()
        .code(1)
        .stderr(predicate::str::contains(format!(
            "Project figures directory does not exist: {}",
            project_dir.join("figures").display()
        )))
        .stderr(predicate::str::contains(
            "Make sure you're running this command in a valid project directory.",
        ));
}

#[test]
fn test_new_notebook_missing_data_dir_only() {
    let temp_dir = TempDir::new().unwrap();
    let project_dir = project_with(&temp_dir, &["figures"]);

    new_notebook(&project_dir, "test_notebook")
        .failure()
        .code(1)
        .stderr(predicate::str::contains(format!(
            "Project data directory does not exist: {}",
            project_dir.join("data").display()
        )));
}

#[test]
fn test_new_notebook_missing_both_figures_and_data_dirs() {
    let temp_dir = TempDir::new().unwrap();
    let project_dir = project_with(&temp_dir, &[]);

    new_notebook(&project_dir, "test_notebook")
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Project figures and data directories do not exist. Make sure you're running this command in a valid project directory.",
        ));

    assert!(!project_dir.join("test_notebook.ipynb").exists());
}

#[test]
fn test_new_notebook_with_empty_directory_list() {
    let temp_dir = TempDir::new().unwrap();
    let project_dir = project_with(&temp_dir, &[]);
    let manifest = temp_dir.path().join("pyproject.toml");
    fs::write(&manifest, "[tool.trurl]\ndirectories = []\n").unwrap();

    trurl()
        .arg("--config")
        .arg(&manifest)
        .args(["prototyping", "new-notebook"])
        .arg(&project_dir)
        .arg("solo")
        .assert()
        .success();

    assert!(project_dir.join("solo.ipynb").is_file());
    assert_eq!(fs::read_dir(&project_dir).unwrap().count(), 1);
}

#[test]
fn test_new_notebook_with_unreadable_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let project_dir = project_with(&temp_dir, &["figures", "data"]);

    trurl()
        .env("TRURL_CONFIG_PATH", temp_dir.path().join("missing.toml"))
        .args(["prototyping", "new-notebook"])
        .arg(&project_dir)
        .arg("nb")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_prototyping_group_help() {
    trurl()
        .args(["prototyping", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Tools for prototyping in jupyter notebooks.",
        ))
        .stdout(predicate::str::contains("new-project"))
        .stdout(predicate::str::contains("new-notebook"));
}
