use chrono::NaiveDate;
use std::fs;
use tempfile::TempDir;

use trurl::{Clock, FixedClock, RequiredDirectories, ScaffoldEngine, TrurlError};

/// End-to-end scaffolding scenarios driven through the library API

fn clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2025, 7, 19).unwrap())
}

#[test]
fn test_project_then_notebooks() {
    let temp_dir = TempDir::new().unwrap();
    let engine = ScaffoldEngine::default();

    let project = engine
        .create_project(temp_dir.path(), "my_analysis", clock().today())
        .unwrap();
    assert_eq!(project, temp_dir.path().join("2025-07_my_analysis"));

    for name in ["data_exploration", "modelling"] {
        let notebook = engine.create_notebook(&project, name).unwrap();
        assert_eq!(notebook, project.join(format!("{name}.ipynb")));
        assert!(project.join("figures").join(name).is_dir());
        assert!(project.join("data").join(name).is_dir());
    }

    let mut figures: Vec<_> = fs::read_dir(project.join("figures"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    figures.sort();
    assert_eq!(figures, vec!["data_exploration", "modelling"]);
}

#[test]
fn test_same_name_in_different_months_does_not_clash() {
    let temp_dir = TempDir::new().unwrap();
    let engine = ScaffoldEngine::default();
    let august = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();

    engine
        .create_project(temp_dir.path(), "report", clock().today())
        .unwrap();
    engine.create_project(temp_dir.path(), "report", august).unwrap();

    assert!(temp_dir.path().join("2025-07_report").is_dir());
    assert!(temp_dir.path().join("2025-08_report").is_dir());

    let err = engine
        .create_project(temp_dir.path(), "report", august)
        .unwrap_err();
    assert!(matches!(err, TrurlError::AlreadyExists(_)));
}

#[test]
fn test_required_directories_changed_after_project_creation() {
    let temp_dir = TempDir::new().unwrap();
    let project = ScaffoldEngine::default()
        .create_project(temp_dir.path(), "evolving", clock().today())
        .unwrap();

    let stricter = ScaffoldEngine::new(RequiredDirectories::new([
        "figures", "plots", "data", "models",
    ]));
    let err = stricter.create_notebook(&project, "nb").unwrap_err();

    assert!(matches!(err, TrurlError::RequiredDirectoriesMissing(_)));
    assert!(err
        .to_string()
        .starts_with("Project plots and models directories do not exist."));
    assert!(!project.join("nb.ipynb").exists());
}

#[test]
fn test_custom_directories_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let engine = ScaffoldEngine::new(RequiredDirectories::new(["plots", "datasets", "models"]));

    let project = engine
        .create_project(temp_dir.path(), "custom", clock().today())
        .unwrap();
    engine.create_notebook(&project, "train").unwrap();

    for dir in ["plots", "datasets", "models"] {
        assert!(project.join(dir).join("train").is_dir());
    }
    assert!(!project.join("figures").exists());
}

#[test]
fn test_notebook_names_are_validated_before_project_checks() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");

    let err = ScaffoldEngine::default()
        .create_notebook(&missing, "../escape")
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Notebook names must only contain alphanumeric characters, '_' and '-'."
    );
}
