//! Top-level dorkscope configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{HistoryConfig, LoggingConfig, OutputConfig, SimulationConfig};
use crate::constants::{OUTPUT_FORMATS, PROJECT_CONFIG_FILE, USER_DIR_NAME};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`DORKSCOPE_*`)
/// 3. Project config (`dorkscope.toml` in the working directory)
/// 4. User config (`~/.dorkscope/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DorkscopeConfig {
    pub history: HistoryConfig,
    pub simulation: SimulationConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub history_dir: Option<String>,
    pub history_capacity: Option<usize>,
    pub no_history: bool,
    pub seed: Option<u64>,
    pub format: Option<String>,
    pub no_color: bool,
}

impl DorkscopeConfig {
    /// Load configuration with layered resolution.
    ///
    /// `explicit` replaces the project file lookup when the caller names a
    /// config file directly; a missing explicit file is an error.
    pub fn load(
        root: &Path,
        explicit: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(e) => {
                        ::tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        match explicit {
            Some(path) => Self::merge_toml_file(&mut config, path)?,
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &DorkscopeConfig) -> Result<(), ConfigError> {
        if let Some(capacity) = config.history.capacity {
            if capacity == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "history.capacity".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(ref key) = config.history.key {
            if key.trim().is_empty() || key.contains(['/', '\\']) {
                return Err(ConfigError::ValidationFailed {
                    field: "history.key".to_string(),
                    message: "must be a non-empty name without path separators".to_string(),
                });
            }
        }
        if let Some(ref format) = config.output.format {
            if !OUTPUT_FORMATS.contains(&format.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "output.format".to_string(),
                    message: format!("expected one of {OUTPUT_FORMATS:?}, got {format:?}"),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.dorkscope/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        user_dir().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut DorkscopeConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: DorkscopeConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut DorkscopeConfig, other: &DorkscopeConfig) {
        // History
        if other.history.storage_dir.is_some() {
            base.history.storage_dir = other.history.storage_dir.clone();
        }
        if other.history.key.is_some() {
            base.history.key = other.history.key.clone();
        }
        if other.history.capacity.is_some() {
            base.history.capacity = other.history.capacity;
        }
        if other.history.persist.is_some() {
            base.history.persist = other.history.persist;
        }

        // Simulation
        if other.simulation.seed.is_some() {
            base.simulation.seed = other.simulation.seed;
        }

        // Output
        if other.output.format.is_some() {
            base.output.format = other.output.format.clone();
        }
        if other.output.color.is_some() {
            base.output.color = other.output.color;
        }

        // Logging
        if other.logging.filter.is_some() {
            base.logging.filter = other.logging.filter.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `DORKSCOPE_HISTORY_CAPACITY`, `DORKSCOPE_SEED`, etc.
    fn apply_env_overrides(config: &mut DorkscopeConfig) {
        if let Ok(val) = std::env::var("DORKSCOPE_HISTORY_DIR") {
            config.history.storage_dir = Some(val);
        }
        if let Ok(val) = std::env::var("DORKSCOPE_HISTORY_KEY") {
            config.history.key = Some(val);
        }
        if let Ok(val) = std::env::var("DORKSCOPE_HISTORY_CAPACITY") {
            if let Ok(v) = val.parse::<usize>() {
                config.history.capacity = Some(v);
            }
        }
        if let Ok(val) = std::env::var("DORKSCOPE_HISTORY_PERSIST") {
            if let Ok(v) = val.parse::<bool>() {
                config.history.persist = Some(v);
            }
        }
        if let Ok(val) = std::env::var("DORKSCOPE_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.simulation.seed = Some(v);
            }
        }
        if let Ok(val) = std::env::var("DORKSCOPE_FORMAT") {
            config.output.format = Some(val);
        }
        if let Ok(val) = std::env::var("DORKSCOPE_COLOR") {
            if let Ok(v) = val.parse::<bool>() {
                config.output.color = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut DorkscopeConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.history_dir {
            config.history.storage_dir = Some(v.clone());
        }
        if let Some(v) = cli.history_capacity {
            config.history.capacity = Some(v);
        }
        if cli.no_history {
            config.history.persist = Some(false);
        }
        if let Some(v) = cli.seed {
            config.simulation.seed = Some(v);
        }
        if let Some(ref v) = cli.format {
            config.output.format = Some(v.clone());
        }
        if cli.no_color {
            config.output.color = Some(false);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level directory: `~/.dorkscope/`.
pub(crate) fn user_dir() -> Option<PathBuf> {
    home_dir().map(|h| h.join(USER_DIR_NAME))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
