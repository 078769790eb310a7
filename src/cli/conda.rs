use std::io::Write;

use crate::services::environment_manager::EnvironmentManager;
use crate::services::process_runner::ProcessRunner;
use crate::utils::config::TrurlConfig;
use crate::utils::error::{Result, TrurlError};

/// Which environment-file operation to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CondaAction {
    Export,
    Update,
    Compare,
}

/// Handler shared by `conda-export`, `conda-update` and `conda-compare`
pub struct CondaHandler {
    pub action: CondaAction,
}

impl CondaHandler {
    /// Execute the conda command against the manifest's environment file
    pub fn execute<R: ProcessRunner>(&self, config: &TrurlConfig, runner: R) -> Result<()> {
        let manager = EnvironmentManager::from_config(config, runner)?;

        match self.action {
            CondaAction::Export => manager.export(),
            CondaAction::Update => manager.update(),
            CondaAction::Compare => {
                let output = manager.compare()?;

                print!("{}", output.stdout);
                std::io::stdout().flush()?;

                if output.success() {
                    Ok(())
                } else {
                    Err(TrurlError::ExternalExit {
                        program: config.compare_manager.clone(),
                        code: output.exit_code,
                    })
                }
            }
        }
    }
}
