//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Seed used when none is configured, so repeated runs show the same people.
pub const DEFAULT_SEED: u64 = 42;

/// Number of generated contacts when none is configured.
pub const DEFAULT_USER_COUNT: usize = 24;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/chatpane/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Fixture JSON to load instead of generating data.
    #[serde(default)]
    pub fixture_path: Option<PathBuf>,

    /// Seed for generated fixtures.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Number of generated contacts.
    #[serde(default)]
    pub user_count: Option<usize>,

    /// Show the search panel on wide terminals.
    #[serde(default)]
    pub show_search_panel: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Fixture JSON; `None` means generate.
    pub fixture_path: Option<PathBuf>,
    /// Generator seed.
    pub seed: u64,
    /// Generated contact count.
    pub user_count: usize,
    /// Search panel visibility on wide terminals.
    pub show_search_panel: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            fixture_path: None,
            seed: DEFAULT_SEED,
            user_count: DEFAULT_USER_COUNT,
            show_search_panel: true,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/chatpane/chatpane.log` on Unix-like systems,
/// or the platform equivalent elsewhere. Falls back to the current
/// directory when no state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("chatpane").join("chatpane.log")
    } else {
        PathBuf::from("chatpane.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/chatpane/config.toml` on Unix, appropriate path on other platforms.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("chatpane").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CHATPANE_CONFIG` environment variable
/// 3. Default path `~/.config/chatpane/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("CHATPANE_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CHATPANE_SEED`: generator seed; unparsable values are ignored
/// - `CHATPANE_FIXTURES`: fixture JSON path
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var("CHATPANE_SEED") {
        match raw.trim().parse::<u64>() {
            Ok(seed) => config.seed = seed,
            Err(e) => warn!(value = %raw, error = %e, "Ignoring invalid CHATPANE_SEED"),
        }
    }

    if let Ok(path) = std::env::var("CHATPANE_FIXTURES") {
        if !path.is_empty() {
            config.fixture_path = Some(PathBuf::from(path));
        }
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        fixture_path: config.fixture_path.or(defaults.fixture_path),
        seed: config.seed.unwrap_or(defaults.seed),
        user_count: config.user_count.unwrap_or(defaults.user_count),
        show_search_panel: config
            .show_search_panel
            .unwrap_or(defaults.show_search_panel),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    fixture_override: Option<PathBuf>,
    seed_override: Option<u64>,
    user_count_override: Option<usize>,
) -> ResolvedConfig {
    if let Some(path) = fixture_override {
        config.fixture_path = Some(path);
    }

    if let Some(seed) = seed_override {
        config.seed = seed;
    }

    if let Some(count) = user_count_override {
        config.user_count = count;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
