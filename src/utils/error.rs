// Common error types for trurl

use std::path::PathBuf;
use thiserror::Error;

use crate::models::name::NameKind;

/// Trailer appended to every "required directory missing" message
const VALID_PROJECT_HINT: &str =
    "Make sure you're running this command in a valid project directory.";

#[derive(Debug, Error)]
pub enum TrurlError {
    /// Name failed the allow-list pattern; raised before any I/O
    #[error("{0} names must only contain alphanumeric characters, '_' and '-'.")]
    InvalidName(NameKind),

    /// Target project directory or notebook file is already present
    #[error("{0}")]
    AlreadyExists(String),

    #[error("Project directory does not exist: {}", .0.display())]
    ProjectDirectoryMissing(PathBuf),

    #[error("{0}")]
    RequiredDirectoriesMissing(String),

    #[error(
        "The environment file specified at {} could not be found. \
         Please output your file with `trurl conda-export` and stage it before continuing.",
        .0.display()
    )]
    EnvironmentFileNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Execution error: {0}")]
    ExecutionError(String),

    /// External tool finished with a non-zero status that should become ours
    #[error("{program} exited with status {code}")]
    ExternalExit { program: String, code: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TrurlError {
    /// Project directory already present
    pub fn project_exists(path: &std::path::Path) -> Self {
        Self::AlreadyExists(format!(
            "Project directory already exists: {}",
            path.display()
        ))
    }

    /// Notebook placeholder already present
    pub fn notebook_exists(path: &std::path::Path) -> Self {
        Self::AlreadyExists(format!("Notebook: {} already exists.", path.display()))
    }

    /// Build the user-facing message for required directories absent from a project.
    ///
    /// A single missing directory is reported with its full path; several are
    /// joined with " and " in configuration order, without paths.
    pub fn required_directories_missing(project_dir: &std::path::Path, missing: &[String]) -> Self {
        let message = match missing {
            [single] => format!(
                "Project {single} directory does not exist: {}. {VALID_PROJECT_HINT}",
                project_dir.join(single).display()
            ),
            _ => format!(
                "Project {} directories do not exist. {VALID_PROJECT_HINT}",
                missing.join(" and ")
            ),
        };
        Self::RequiredDirectoriesMissing(message)
    }
}

pub type Result<T> = std::result::Result<T, TrurlError>;

/// Error as presented to the person at the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub message: String,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_trurl_error(err: &TrurlError) -> Self {
        match err {
            // The external tool already reported on its own streams
            TrurlError::ExternalExit { code, .. } => Self {
                message: String::new(),
                exit_code: *code,
            },
            _ => Self {
                message: err.to_string(),
                exit_code: 1,
            },
        }
    }

    pub fn print(&self) {
        if !self.message.is_empty() {
            eprintln!("Error: {}", self.message);
        }
    }
}
