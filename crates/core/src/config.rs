//! Configuration management for the component analysis helper.
//!
//! This module handles loading and merging configuration from multiple sources:
//! - Built-in defaults
//! - Config file (`.analyze-components.yaml` in the workspace)
//! - Environment variables
//! - Command-line flags
//!
//! With no sources present the workspace is the current directory and previews
//! are cut at 5000 characters.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Config file looked up in the workspace when none is given explicitly.
pub const DEFAULT_CONFIG_FILE: &str = ".analyze-components.yaml";

/// Number of characters `show` prints before the size notice.
pub const DEFAULT_PREVIEW_CHARS: usize = 5000;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory that component filenames are resolved against
    pub workspace: PathBuf,

    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Log filter override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored log output
    pub no_color: bool,

    /// Preview length for `show`, in characters
    pub preview_chars: usize,
}

/// Values supplied on the command line. `None`/`false` means "not given".
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub workspace: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
    pub log_level: Option<String>,
    pub verbose: bool,
    pub no_color: bool,
}

/// Values read from the process environment.
#[derive(Debug, Clone, Default)]
struct EnvLayer {
    workspace: Option<PathBuf>,
    config_file: Option<PathBuf>,
    log_level: Option<String>,
    no_color: bool,
}

impl EnvLayer {
    fn from_process() -> Self {
        Self {
            workspace: std::env::var_os("ANALYZE_WORKSPACE").map(PathBuf::from),
            config_file: std::env::var_os("ANALYZE_CONFIG").map(PathBuf::from),
            log_level: std::env::var("RUST_LOG").ok(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
        }
    }
}

/// Full configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    workspace: Option<WorkspaceConfig>,
    logging: Option<LoggingConfig>,
    preview: Option<PreviewConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WorkspaceConfig {
    path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreviewConfig {
    chars: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workspace: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            config_file: None,
            log_level: None,
            verbose: false,
            no_color: false,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment, config file, and defaults.
    ///
    /// Environment variables:
    /// - `ANALYZE_WORKSPACE`: Directory holding the component files
    /// - `ANALYZE_CONFIG`: Path to config file
    /// - `RUST_LOG`: Log filter
    /// - `NO_COLOR`: Disable colored output
    ///
    /// # Example
    /// ```no_run
    /// use analyze_core::config::AppConfig;
    ///
    /// let config = AppConfig::load().expect("Failed to load config");
    /// println!("Workspace: {:?}", config.workspace);
    /// ```
    pub fn load() -> AppResult<Self> {
        Self::load_with(ConfigOverrides::default())
    }

    /// Load configuration, giving command-line values the last word.
    pub fn load_with(overrides: ConfigOverrides) -> AppResult<Self> {
        Self::load_layered(overrides, EnvLayer::from_process())
    }

    /// Merge defaults, config file, `env`, and `overrides`, in that order.
    fn load_layered(overrides: ConfigOverrides, env: EnvLayer) -> AppResult<Self> {
        let mut config = Self::default();

        // The workspace has to be known first because it holds the default config file
        if let Some(workspace) = overrides
            .workspace
            .clone()
            .or_else(|| env.workspace.clone())
        {
            config.workspace = workspace;
        }

        let explicit_config = overrides
            .config_file
            .clone()
            .or_else(|| env.config_file.clone());

        if !config.workspace.is_dir() {
            return Err(AppError::Config(format!(
                "Workspace directory does not exist: {:?}",
                config.workspace
            )));
        }

        // An explicitly named config file must exist; the default one is optional
        let config_path = match explicit_config {
            Some(path) => {
                if !path.is_file() {
                    return Err(AppError::Config(format!(
                        "Config file not found: {:?}",
                        path
                    )));
                }
                Some(path)
            }
            None => {
                let candidate = config.workspace.join(DEFAULT_CONFIG_FILE);
                candidate.is_file().then_some(candidate)
            }
        };

        if let Some(path) = config_path {
            config = config.merge_yaml(&path)?;
            config.config_file = Some(path);
        }

        // Environment variables override YAML config
        if let Some(workspace) = env.workspace {
            config.workspace = workspace;
        }

        if let Some(level) = env.log_level {
            config.log_level = Some(level);
        }

        if env.no_color {
            config.no_color = true;
        }

        let config = config.with_overrides(overrides);
        config.validate()?;

        Ok(config)
    }

    /// Merge YAML configuration file into this config.
    fn merge_yaml(&self, path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();

        if let Some(path) = config_file.workspace.and_then(|ws| ws.path) {
            result.workspace = PathBuf::from(path);
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        if let Some(chars) = config_file.preview.and_then(|p| p.chars) {
            result.preview_chars = chars;
        }

        Ok(result)
    }

    /// Apply command-line overrides to the configuration.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(workspace) = overrides.workspace {
            self.workspace = workspace;
        }

        if let Some(config_file) = overrides.config_file {
            self.config_file = Some(config_file);
        }

        if let Some(log_level) = overrides.log_level {
            self.log_level = Some(log_level);
        }

        if overrides.verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if overrides.no_color {
            self.no_color = true;
        }

        self
    }

    /// Validate the merged configuration.
    pub fn validate(&self) -> AppResult<()> {
        if self.preview_chars == 0 {
            return Err(AppError::Config(
                "preview.chars must be greater than zero".to_string(),
            ));
        }

        if !self.workspace.is_dir() {
            return Err(AppError::Config(format!(
                "Workspace directory does not exist: {:?}",
                self.workspace
            )));
        }

        Ok(())
    }
}
