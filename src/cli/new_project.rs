use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

use crate::services::clock::Clock;
use crate::services::scaffold_engine::ScaffoldEngine;
use crate::utils::config::TrurlConfig;
use crate::utils::error::{Result, TrurlError};

/// Create a timestamped project directory for notebook prototyping
#[derive(Debug, Args)]
pub struct NewProjectCommand {
    /// Parent directory the project is created in
    pub directory: PathBuf,

    /// Project name: letters, digits, '_' and '-' only
    pub name: String,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for scaffold commands
#[derive(Debug, Serialize, Deserialize)]
pub struct ScaffoldResponse {
    pub status: String,
    pub path: String,
}

impl ScaffoldResponse {
    pub fn success(path: &std::path::Path) -> Self {
        Self {
            status: "success".to_string(),
            path: path.display().to_string(),
        }
    }

    pub fn print(&self) -> Result<()> {
        let json_output = serde_json::to_string_pretty(self).map_err(|e| {
            TrurlError::ExecutionError(format!("Failed to serialize JSON response: {}", e))
        })?;
        println!("{}", json_output);
        Ok(())
    }
}

impl NewProjectCommand {
    /// Execute the new-project command
    pub fn run(&self, config: &TrurlConfig, clock: &impl Clock) -> Result<()> {
        let engine = ScaffoldEngine::new(config.directories.clone());
        let project_dir = engine.create_project(&self.directory, &self.name, clock.today())?;

        info!(path = %project_dir.display(), "new project generated");

        if self.json {
            ScaffoldResponse::success(&project_dir).print()?;
        } else {
            println!("New project generated here: {}", project_dir.display());
        }

        Ok(())
    }
}
