use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::name::ScaffoldName;

/// Subdirectories every project gets unless configuration says otherwise
pub const DEFAULT_DIRECTORIES: [&str; 2] = ["figures", "data"];

/// File extension of notebook placeholders
pub const NOTEBOOK_EXTENSION: &str = "ipynb";

/// Ordered list of subdirectory names a project must contain.
///
/// Order has no effect on what gets created, only on the order in which
/// missing directories are reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequiredDirectories(Vec<String>);

impl RequiredDirectories {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names from this list that are not directories under `project_dir`, in order
    pub fn missing_from(&self, project_dir: &Path) -> Vec<String> {
        self.0
            .iter()
            .filter(|name| !project_dir.join(name).exists())
            .cloned()
            .collect()
    }
}

impl Default for RequiredDirectories {
    fn default() -> Self {
        Self::new(DEFAULT_DIRECTORIES)
    }
}

/// Directory name for a project started on `date`: `YYYY-MM_<name>`
pub fn project_dir_name(date: NaiveDate, name: &ScaffoldName) -> String {
    format!("{:04}-{:02}_{}", date.year(), date.month(), name)
}

/// Location of the placeholder file for `name` inside `project_dir`
pub fn notebook_file_path(project_dir: &Path, name: &ScaffoldName) -> PathBuf {
    project_dir.join(name).with_extension(NOTEBOOK_EXTENSION)
}
