use clap::Args;
use std::path::PathBuf;
use tracing::info;

use crate::cli::new_project::ScaffoldResponse;
use crate::services::scaffold_engine::ScaffoldEngine;
use crate::utils::config::TrurlConfig;
use crate::utils::error::Result;

/// Create an empty notebook and its per-directory output folders in a project
#[derive(Debug, Args)]
pub struct NewNotebookCommand {
    /// Existing project directory containing every required directory
    pub project_dir: PathBuf,

    /// Notebook name without extension: letters, digits, '_' and '-' only
    pub name: String,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

impl NewNotebookCommand {
    /// Execute the new-notebook command
    pub fn run(&self, config: &TrurlConfig) -> Result<()> {
        let engine = ScaffoldEngine::new(config.directories.clone());
        let notebook_path = engine.create_notebook(&self.project_dir, &self.name)?;

        info!(path = %notebook_path.display(), "new notebook generated");

        if self.json {
            ScaffoldResponse::success(&notebook_path).print()?;
        } else {
            println!("New notebook generated here: {}", notebook_path.display());
        }

        Ok(())
    }
}
