use std::path::{Path, PathBuf};
use tracing::info;

use crate::services::process_runner::{OutputMode, ProcessOutput, ProcessRunner};
use crate::utils::config::TrurlConfig;
use crate::utils::error::{Result, TrurlError};

/// Export, update and compare the active conda environment against a saved file.
///
/// All package-manager work is delegated to external executables through a
/// [`ProcessRunner`]; nothing here understands the environment file format.
#[derive(Debug, Clone)]
pub struct EnvironmentManager<R: ProcessRunner> {
    environment_file: PathBuf,
    manager: String,
    compare_manager: String,
    runner: R,
}

impl<R: ProcessRunner> EnvironmentManager<R> {
    pub fn new(
        environment_file: impl Into<PathBuf>,
        manager: impl Into<String>,
        compare_manager: impl Into<String>,
        runner: R,
    ) -> Self {
        Self {
            environment_file: environment_file.into(),
            manager: manager.into(),
            compare_manager: compare_manager.into(),
            runner,
        }
    }

    /// Build from a loaded manifest; fails if it has no environment file entry
    pub fn from_config(config: &TrurlConfig, runner: R) -> Result<Self> {
        let environment_file = config.require_environment_file()?;
        Ok(Self::new(
            environment_file,
            config.manager.as_str(),
            config.compare_manager.as_str(),
            runner,
        ))
    }

    pub fn environment_file(&self) -> &Path {
        &self.environment_file
    }

    /// Write the current environment to the environment file
    pub fn export(&self) -> Result<()> {
        println!(
            "Outputting conda environment file to {}",
            self.environment_file.display()
        );

        let args = self.file_args("export");
        let output = self.runner.run(&self.manager, &args, OutputMode::Inherit)?;
        self.check_success(&self.manager, &args, &output)?;

        info!(file = %self.environment_file.display(), "exported environment");
        Ok(())
    }

    /// Apply the environment file to the current environment
    pub fn update(&self) -> Result<()> {
        self.ensure_environment_file()?;

        println!(
            "Updating conda environment file with {}",
            self.environment_file.display()
        );

        let args = self.file_args("update");
        let output = self.runner.run(&self.manager, &args, OutputMode::Inherit)?;
        self.check_success(&self.manager, &args, &output)?;

        info!(file = %self.environment_file.display(), "updated environment");
        Ok(())
    }

    /// Diff the current environment against the environment file.
    ///
    /// The comparison tool's exit code is returned untouched; a non-zero code
    /// means the environment does not satisfy the file.
    pub fn compare(&self) -> Result<ProcessOutput> {
        self.ensure_environment_file()?;

        let args = vec![
            "compare".to_string(),
            self.environment_file.to_string_lossy().into_owned(),
        ];
        let output = self
            .runner
            .run(&self.compare_manager, &args, OutputMode::Capture)?;

        if !output.success() {
            info!(
                exit_code = output.exit_code,
                "environment differs from {}",
                self.environment_file.display()
            );
        }
        Ok(output)
    }

    fn ensure_environment_file(&self) -> Result<()> {
        if self.environment_file.exists() {
            Ok(())
        } else {
            Err(TrurlError::EnvironmentFileNotFound(self.environment_file.clone()))
        }
    }

    /// `env <action> --file <environment file>`
    fn file_args(&self, action: &str) -> Vec<String> {
        vec![
            "env".to_string(),
            action.to_string(),
            "--file".to_string(),
            self.environment_file.to_string_lossy().into_owned(),
        ]
    }

    fn check_success(&self, program: &str, args: &[String], output: &ProcessOutput) -> Result<()> {
        if output.success() {
            return Ok(());
        }
        Err(TrurlError::ExecutionError(format!(
            "'{} {}' failed with exit code {}",
            program,
            args.join(" "),
            output.exit_code
        )))
    }
}
