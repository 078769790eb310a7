use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::models::name::{NameKind, ScaffoldName};
use crate::models::project::{notebook_file_path, project_dir_name, RequiredDirectories};
use crate::utils::error::{Result, TrurlError};

/// Creates project trees and notebook placeholders on disk.
///
/// Nothing is rolled back on failure: whatever was created before the
/// failing step stays in place for the caller to inspect or clean up.
#[derive(Debug, Clone)]
pub struct ScaffoldEngine {
    required_dirs: RequiredDirectories,
}

impl ScaffoldEngine {
    pub fn new(required_dirs: RequiredDirectories) -> Self {
        Self { required_dirs }
    }

    pub fn required_dirs(&self) -> &RequiredDirectories {
        &self.required_dirs
    }

    /// Create `parent_dir/YYYY-MM_<name>` with one subdirectory per required directory.
    ///
    /// Fails with `AlreadyExists` rather than merging into an existing directory.
    pub fn create_project(&self, parent_dir: &Path, name: &str, today: NaiveDate) -> Result<PathBuf> {
        let name = ScaffoldName::parse(name, NameKind::Project)?;
        let project_dir = parent_dir.join(project_dir_name(today, &name));

        fs::create_dir(&project_dir).map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => TrurlError::project_exists(&project_dir),
            _ => TrurlError::IoError(e),
        })?;
        debug!(path = %project_dir.display(), "created project directory");

        for dir in self.required_dirs.iter() {
            let path = project_dir.join(dir);
            fs::create_dir(&path)?;
            debug!(path = %path.display(), "created required directory");
        }

        Ok(project_dir)
    }

    /// Create `<name>.ipynb` in `project_dir` plus `<dir>/<name>` for each required directory.
    ///
    /// Returns the absolute path of the placeholder file.
    pub fn create_notebook(&self, project_dir: &Path, name: &str) -> Result<PathBuf> {
        let name = ScaffoldName::parse(name, NameKind::Notebook)?;

        if !project_dir.exists() {
            return Err(TrurlError::ProjectDirectoryMissing(project_dir.to_path_buf()));
        }

        let missing = self.required_dirs.missing_from(project_dir);
        if !missing.is_empty() {
            return Err(TrurlError::required_directories_missing(project_dir, &missing));
        }

        let notebook_path = std::path::absolute(notebook_file_path(project_dir, &name))?;
        if notebook_path.exists() {
            return Err(TrurlError::notebook_exists(&notebook_path));
        }

        // create_new closes the window between the check above and the write
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&notebook_path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => TrurlError::notebook_exists(&notebook_path),
                _ => TrurlError::IoError(e),
            })?;
        debug!(path = %notebook_path.display(), "created notebook placeholder");

        for dir in self.required_dirs.iter() {
            let path = project_dir.join(dir).join(&name);
            fs::create_dir(&path)?;
            debug!(path = %path.display(), "created notebook directory");
        }

        Ok(notebook_path)
    }
}

impl Default for ScaffoldEngine {
    fn default() -> Self {
        Self::new(RequiredDirectories::default())
    }
}
