// Configuration utilities and TOML parsing

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::project::RequiredDirectories;
use crate::utils::error::{Result, TrurlError};

/// Environment variable naming the manifest file
pub const CONFIG_PATH_ENV: &str = "TRURL_CONFIG_PATH";

const DEFAULT_MANAGER: &str = "mamba";
const DEFAULT_COMPARE_MANAGER: &str = "conda";

/// Top level of the manifest; everything trurl reads lives under `[tool.trurl]`
#[derive(Debug, Default, Deserialize)]
struct ManifestToml {
    #[serde(default)]
    tool: ToolTable,
}

#[derive(Debug, Default, Deserialize)]
struct ToolTable {
    #[serde(default)]
    trurl: TrurlToml,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct TrurlToml {
    environment_file: Option<PathBuf>,
    directories: Option<RequiredDirectories>,
    manager: Option<String>,
    compare_manager: Option<String>,
}

/// Resolved configuration for a single invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrurlConfig {
    /// Where `conda-export` writes and `conda-update`/`conda-compare` read
    pub environment_file: Option<PathBuf>,
    /// Subdirectories projects must contain
    pub directories: RequiredDirectories,
    /// Executable used for `env export` / `env update`
    pub manager: String,
    /// Executable used for `compare`
    pub compare_manager: String,
}

impl Default for TrurlConfig {
    fn default() -> Self {
        Self {
            environment_file: None,
            directories: RequiredDirectories::default(),
            manager: DEFAULT_MANAGER.to_string(),
            compare_manager: DEFAULT_COMPARE_MANAGER.to_string(),
        }
    }
}

impl From<TrurlToml> for TrurlConfig {
    fn from(raw: TrurlToml) -> Self {
        let defaults = Self::default();
        Self {
            environment_file: raw.environment_file,
            directories: raw.directories.unwrap_or(defaults.directories),
            manager: raw.manager.unwrap_or(defaults.manager),
            compare_manager: raw.compare_manager.unwrap_or(defaults.compare_manager),
        }
    }
}

impl TrurlConfig {
    /// The environment file location, or a configuration error explaining where it is expected
    pub fn require_environment_file(&self) -> Result<&Path> {
        self.environment_file.as_deref().ok_or_else(|| {
            TrurlError::ConfigError(
                "Missing `tool.trurl.environment-file` in the trurl manifest".to_string(),
            )
        })
    }
}

/// Configuration parsing and validation utilities
pub struct ConfigParser;

impl ConfigParser {
    /// Load configuration for commands that can run on defaults.
    ///
    /// No manifest path means defaults; a configured manifest that cannot be
    /// read or parsed is still an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<TrurlConfig> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(TrurlConfig::default()),
        }
    }

    /// Load configuration for commands that cannot run without a manifest
    pub fn load_required(path: Option<&Path>) -> Result<TrurlConfig> {
        let path = path.ok_or_else(|| {
            TrurlError::ConfigError(format!(
                "No trurl manifest configured. Set {CONFIG_PATH_ENV} or pass --config <path>."
            ))
        })?;
        Self::load(path)
    }

    /// Load and parse the manifest at `path`
    pub fn load(path: &Path) -> Result<TrurlConfig> {
        if !path.exists() {
            return Err(TrurlError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            TrurlError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::parse(&content)
    }

    /// Parse manifest content
    pub fn parse(content: &str) -> Result<TrurlConfig> {
        let manifest: ManifestToml = toml::from_str(content)
            .map_err(|e| TrurlError::ConfigError(format!("Invalid TOML syntax: {}", e)))?;

        let config = TrurlConfig::from(manifest.tool.trurl);
        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &TrurlConfig) -> Result<()> {
        // Directory names end up as single path segments
        for dir in config.directories.iter() {
            if dir.is_empty() || dir.contains(['/', '\\']) || dir == "." || dir == ".." {
                return Err(TrurlError::ConfigError(format!(
                    "Invalid required directory name '{}' in tool.trurl.directories",
                    dir
                )));
            }
        }

        if config.manager.trim().is_empty() || config.compare_manager.trim().is_empty() {
            return Err(TrurlError::ConfigError(
                "Environment manager executables cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
