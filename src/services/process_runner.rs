use std::process::{Command, Stdio};
use tracing::debug;

use crate::utils::error::{Result, TrurlError};

/// What to do with the child's stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Child writes straight to our terminal
    Inherit,
    /// Child's stdout is collected into [`ProcessOutput::stdout`]
    Capture,
}

/// Result of running an external program to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, or -1 when the child was killed by a signal
    pub exit_code: i32,
    /// Captured stdout; empty in [`OutputMode::Inherit`]
    pub stdout: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs external programs. The only seam between trurl and package managers.
pub trait ProcessRunner {
    fn run(&self, program: &str, args: &[String], mode: OutputMode) -> Result<ProcessOutput>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &R {
    fn run(&self, program: &str, args: &[String], mode: OutputMode) -> Result<ProcessOutput> {
        (**self).run(program, args, mode)
    }
}

/// Spawns real child processes, blocking until they exit
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, program: &str, args: &[String], mode: OutputMode) -> Result<ProcessOutput> {
        debug!(program, ?args, ?mode, "spawning external command");

        let stdout = match mode {
            OutputMode::Inherit => Stdio::inherit(),
            OutputMode::Capture => Stdio::piped(),
        };

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(stdout)
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| {
                TrurlError::ExecutionError(format!("Failed to run '{}': {}", program, e))
            })?;

        Ok(ProcessOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}
