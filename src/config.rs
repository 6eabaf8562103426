//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/trove/trove.toml`
//! 3. Local config: `<dir>/.trove.toml`
//! 4. Environment variables: `TROVE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::ItemFilter;

/// Values inserted into the demonstration tree when none are given.
pub const DEFAULT_BST_VALUES: [i64; 9] = [8, 3, 10, 1, 6, 14, 4, 7, 13];

/// Unified configuration for trove.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Chest inventory file; the built-in chest is used when unset
    pub chest_file: Option<PathBuf>,
    /// Filter applied by `chest` when no `--filter` is given
    pub default_filter: ItemFilter,
    /// Values inserted by `bst` when none are given
    pub bst_values: Vec<i64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            chest_file: None,
            default_filter: ItemFilter::Any,
            bst_values: DEFAULT_BST_VALUES.to_vec(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub chest_file: Option<PathBuf>,
    pub default_filter: Option<ItemFilter>,
    pub bst_values: Option<Vec<i64>>,
}

/// Get the XDG config directory for trove.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "trove").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("trove.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".trove.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand `~`, `$VAR` and `${VAR}` in a path string.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

impl RawSettings {
    /// Resolve a relative `chest_file` against the directory of the config
    /// file it was read from.
    fn anchor_paths(mut self, config_path: &Path) -> Self {
        if let Some(path) = self.chest_file.take() {
            let expanded = expand_path(&path);
            self.chest_file = Some(match config_path.parent() {
                Some(base) if expanded.is_relative() => base.join(expanded),
                _ => expanded,
            });
        }
        self
    }
}

impl Settings {
    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            chest_file: overlay
                .chest_file
                .clone()
                .or_else(|| self.chest_file.clone()),
            default_filter: overlay.default_filter.unwrap_or(self.default_filter),
            bst_values: overlay
                .bst_values
                .clone()
                .unwrap_or_else(|| self.bst_values.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.trove.toml`
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/trove/trove.toml`
    /// 3. Local config: `<local_dir>/.trove.toml`
    /// 4. Environment variables: `TROVE_*` prefix
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let global = global_config_path();
        Self::load_from(global.as_deref(), local_dir)
    }

    /// Same as [`Settings::load`] with an explicit global config path.
    pub fn load_from(
        global_path: Option<&Path>,
        local_dir: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_path {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                let raw = load_raw_settings(global_path)?.anchor_paths(global_path);
                current = current.merge_with(&raw);
            }
        }

        // 3. Local config
        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("load: local config {}", local_path.display());
                let raw = load_raw_settings(&local_path)?.anchor_paths(&local_path);
                current = current.merge_with(&raw);
            }
        }

        // 4. Environment variables (explicit override)
        Self::apply_env_overrides(current)
    }

    /// Apply TROVE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(Environment::with_prefix("TROVE").prefix_separator("_"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("chest_file") {
            settings.chest_file = Some(expand_path(Path::new(&val)));
        }
        if let Ok(val) = config.get_string("default_filter") {
            settings.default_filter = val.parse().map_err(|e| ApplicationError::Config {
                message: format!("TROVE_DEFAULT_FILTER: {}", e),
            })?;
        }
        if let Ok(val) = config.get_string("bst_values") {
            settings.bst_values = parse_value_list(&val).map_err(|e| ApplicationError::Config {
                message: format!("TROVE_BST_VALUES: {}", e),
            })?;
        }

        Ok(settings)
    }

    /// Render as TOML (for `config show`).
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}

/// Parse a comma separated list of integers, e.g. `8, 3,10`.
pub fn parse_value_list(s: &str) -> Result<Vec<i64>, std::num::ParseIntError> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect()
}

/// Convert config crate errors to ApplicationError.
fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
