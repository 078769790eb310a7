// CLI module for command-line interface

pub mod conda;
pub mod new_notebook;
pub mod new_project;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crate::services::clock::SystemClock;
use crate::services::process_runner::SystemProcessRunner;
use crate::utils::config::ConfigParser;
use crate::utils::error::Result;

use self::conda::{CondaAction, CondaHandler};
use self::new_notebook::NewNotebookCommand;
use self::new_project::NewProjectCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "trurl")]
#[command(about = "Another tool for traceable and reproducible data science")]
#[command(long_about = r#"trurl keeps data-science work organised and reproducible.

Features:
  • Timestamped project directories with a fixed layout
  • Notebook placeholders with matching output folders
  • Export, update and compare conda environments against a saved file

Examples:
  trurl prototyping new-project . churn-model      Create ./YYYY-MM_churn-model
  trurl prototyping new-notebook ./2025-07_churn-model eda
  trurl conda-export                               Save the environment file
  trurl conda-compare                              Check the environment matches

Environment commands read the manifest named by --config or TRURL_CONFIG_PATH,
which must define tool.trurl.environment-file."#)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML manifest holding the [tool.trurl] table
    #[arg(long, global = true, env = "TRURL_CONFIG_PATH")]
    pub config: Option<PathBuf>,

    /// Increase diagnostic output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Tools for prototyping in jupyter notebooks.")]
    Prototyping {
        #[command(subcommand)]
        command: PrototypingCommands,
    },

    /// Export the conda environment to the manifest's environment file
    #[command(long_about = r#"Export the current conda environment to the environment file.

Runs `<manager> env export --file <environment-file>`, where the manager
defaults to mamba and the file comes from tool.trurl.environment-file."#)]
    CondaExport,

    /// Update the conda environment from the manifest's environment file
    #[command(long_about = r#"Update the current conda environment from the environment file.

Fails if the environment file does not exist yet; run `trurl conda-export`
and stage the file first."#)]
    CondaUpdate,

    /// Compare the conda environment against the manifest's environment file
    #[command(long_about = r#"Compare the current conda environment to the environment file.

Passes if every package in the file is installed in the environment. Packages
installed but not listed in the file are ignored. Exits with the comparison
tool's exit code."#)]
    CondaCompare,

    #[command(about = "Outputs the installed version of trurl.")]
    Version,
}

/// Project and notebook scaffolding commands
#[derive(Subcommand)]
pub enum PrototypingCommands {
    /// Create a new YYYY-MM_<name> project directory with the required subdirectories
    NewProject(NewProjectCommand),

    /// Create a new notebook and its output folders inside an existing project
    NewNotebook(NewNotebookCommand),
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a parsed command line
    pub fn execute(cli: Cli) -> Result<()> {
        let config_path = cli.config.as_deref();
        debug!(config = ?config_path, "dispatching command");

        match cli.command {
            Commands::Prototyping { command } => {
                let config = ConfigParser::load_or_default(config_path)?;
                match command {
                    PrototypingCommands::NewProject(cmd) => cmd.run(&config, &SystemClock),
                    PrototypingCommands::NewNotebook(cmd) => cmd.run(&config),
                }
            }

            Commands::CondaExport => Self::conda(CondaAction::Export, config_path),
            Commands::CondaUpdate => Self::conda(CondaAction::Update, config_path),
            Commands::CondaCompare => Self::conda(CondaAction::Compare, config_path),

            Commands::Version => {
                println!("trurl=={}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }

    fn conda(action: CondaAction, config_path: Option<&std::path::Path>) -> Result<()> {
        let config = ConfigParser::load_required(config_path)?;
        CondaHandler { action }.execute(&config, SystemProcessRunner)
    }
}
