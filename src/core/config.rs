//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.glowlist/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! Nothing about the todo list itself is ever written to disk.
//!
//! Loading and resolving happen before the file logger exists, so log lines
//! raised here are collected in [`Notices`] and replayed by `main` afterwards.

use clap::ValueEnum;
use log::Level;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::LogLevel;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GlowlistConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub title: Option<String>,
    pub placeholder: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<LogLevel>,
    pub file: Option<String>,
}

/// Values given on the command line (None = flag not passed).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub title: Option<String>,
    pub log_level: Option<LogLevel>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TITLE: &str = "Todo List";
pub const DEFAULT_PLACEHOLDER: &str = "Enter a new todo";
pub const DEFAULT_LOG_FILE: &str = "glowlist.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub title: String,
    pub placeholder: String,
    pub log_level: LogLevel,
    pub log_file: PathBuf,
}

// ============================================================================
// Deferred Log Lines
// ============================================================================

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Notices(Vec<(Level, String)>);

impl Notices {
    fn push(&mut self, level: Level, message: impl Into<String>) {
        self.0.push((level, message.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (Level, &str)> {
        self.0.iter().map(|(level, message)| (*level, message.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Emit every collected line through the installed logger.
    pub fn replay(self) {
        for (level, message) in self.0 {
            log::log!(level, "{}", message);
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.glowlist/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".glowlist").join("config.toml"))
}

/// Load config from `~/.glowlist/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `GlowlistConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(notices: &mut Notices) -> Result<GlowlistConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            notices.push(Level::Warn, "Could not determine home directory, using default config");
            return Ok(GlowlistConfig::default());
        }
    };

    if !path.exists() {
        notices.push(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        );
        generate_default_config(&path, notices);
        return Ok(GlowlistConfig::default());
    }

    load_config_from(&path, notices)
}

/// Load config from an explicit path. A missing file is an error here.
pub fn load_config_from(path: &Path, notices: &mut Notices) -> Result<GlowlistConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: GlowlistConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    notices.push(Level::Info, format!("Loaded config from {}", path.display()));
    notices.push(Level::Debug, format!("Config: {:?}", config));
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Glowlist Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# title = "Todo List"                # Or set GLOWLIST_TITLE, or --title
# placeholder = "Enter a new todo"

# [logging]
# level = "debug"                    # "off", "error", "warn", "info", "debug", "trace"
# file = "glowlist.log"              # Or set GLOWLIST_LOG_FILE
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path, notices: &mut Notices) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            notices.push(Level::Warn, format!("Failed to create config directory: {e}"));
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        notices.push(Level::Warn, format!("Failed to write default config: {e}"));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &GlowlistConfig, cli: &CliOverrides, notices: &mut Notices) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok(), notices)
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &GlowlistConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
    notices: &mut Notices,
) -> ResolvedConfig {
    // Title: CLI → env → config → default
    let title = cli
        .title
        .clone()
        .or_else(|| env("GLOWLIST_TITLE"))
        .or_else(|| config.general.title.clone())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let placeholder = config
        .general
        .placeholder
        .clone()
        .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string());

    // Log level: CLI → env → config → default
    let env_level = env("GLOWLIST_LOG_LEVEL").and_then(|raw| {
        LogLevel::from_str(raw.trim(), true)
            .inspect_err(|_| {
                notices.push(Level::Warn, format!("Ignoring unknown GLOWLIST_LOG_LEVEL value {raw:?}"))
            })
            .ok()
    });
    let log_level = cli
        .log_level
        .or(env_level)
        .or(config.logging.level)
        .unwrap_or_default();

    // Log file: env → config → default
    let log_file = env("GLOWLIST_LOG_FILE")
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    ResolvedConfig {
        title,
        placeholder,
        log_level,
        log_file: PathBuf::from(log_file),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = GlowlistConfig::default();
        assert!(config.general.title.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(
            &GlowlistConfig::default(),
            &CliOverrides::default(),
            no_env,
            &mut Notices::default(),
        );
        assert_eq!(resolved.title, DEFAULT_TITLE);
        assert_eq!(resolved.placeholder, DEFAULT_PLACEHOLDER);
        assert_eq!(resolved.log_level, LogLevel::Debug);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = GlowlistConfig {
            general: GeneralConfig {
                title: Some("Groceries".to_string()),
                placeholder: Some("What do we need?".to_string()),
            },
            logging: LoggingConfig {
                level: Some(LogLevel::Warn),
                file: Some("/tmp/glow.log".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env, &mut Notices::default());
        assert_eq!(resolved.title, "Groceries");
        assert_eq!(resolved.placeholder, "What do we need?");
        assert_eq!(resolved.log_level, LogLevel::Warn);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/glow.log"));
    }

    #[test]
    fn test_env_overrides_config() {
        let config = GlowlistConfig {
            general: GeneralConfig {
                title: Some("From file".to_string()),
                ..Default::default()
            },
            logging: LoggingConfig {
                level: Some(LogLevel::Warn),
                file: Some("file.log".to_string()),
            },
        };
        let env: HashMap<&str, &str> = HashMap::from([
            ("GLOWLIST_TITLE", "From env"),
            ("GLOWLIST_LOG_LEVEL", "TRACE"),
            ("GLOWLIST_LOG_FILE", "env.log"),
        ]);
        let resolved = resolve_with_env(
            &config,
            &CliOverrides::default(),
            |key| env.get(key).map(|v| v.to_string()),
            &mut Notices::default(),
        );
        assert_eq!(resolved.title, "From env");
        assert_eq!(resolved.log_level, LogLevel::Trace);
        assert_eq!(resolved.log_file, PathBuf::from("env.log"));
    }

    #[test]
    fn test_unknown_env_log_level_is_ignored() {
        let config = GlowlistConfig {
            logging: LoggingConfig {
                level: Some(LogLevel::Error),
                file: None,
            },
            ..Default::default()
        };
        let mut notices = Notices::default();
        let resolved = resolve_with_env(
            &config,
            &CliOverrides::default(),
            |key| (key == "GLOWLIST_LOG_LEVEL").then(|| "loud".to_string()),
            &mut notices,
        );
        assert_eq!(resolved.log_level, LogLevel::Error);

        let warnings: Vec<(Level, &str)> = notices.iter().collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].0, Level::Warn);
        assert!(warnings[0].1.contains("\"loud\""));
    }

    #[test]
    fn test_cli_wins_over_env_and_config() {
        let config = GlowlistConfig {
            general: GeneralConfig {
                title: Some("From file".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            title: Some("From CLI".to_string()),
            log_level: Some(LogLevel::Off),
        };
        let env = |key: &str| match key {
            "GLOWLIST_TITLE" => Some("From env".to_string()),
            "GLOWLIST_LOG_LEVEL" => Some("info".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, &cli, env, &mut Notices::default());
        assert_eq!(resolved.title, "From CLI");
        assert_eq!(resolved.log_level, LogLevel::Off);
    }

    #[test]
    fn test_toml_parses_all_sections() {
        let toml_str = r#"
[general]
title = "Work"
placeholder = "Next task"

[logging]
level = "info"
file = "work.log"
"#;
        let config: GlowlistConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.title.as_deref(), Some("Work"));
        assert_eq!(config.general.placeholder.as_deref(), Some("Next task"));
        assert_eq!(config.logging.level, Some(LogLevel::Info));
        assert_eq!(config.logging.file.as_deref(), Some("work.log"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[logging]
level = "error"
"#;
        let config: GlowlistConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.logging.level, Some(LogLevel::Error));
        assert!(config.general.title.is_none());
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_bad_log_level_is_parse_error() {
        let result: Result<GlowlistConfig, _> = toml::from_str("[logging]\nlevel = \"loud\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_generated_default_is_valid_and_empty() {
        let config: GlowlistConfig = toml::from_str(DEFAULT_CONFIG_CONTENT).unwrap();
        assert!(config.general.title.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_load_config_from_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("glowlist-definitely-missing.toml");
        let err = load_config_from(&path, &mut Notices::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("config I/O error"));
    }

    #[test]
    fn test_load_config_from_malformed_file_is_parse_error() {
        let path = std::env::temp_dir().join(format!("glowlist-bad-{}.toml", std::process::id()));
        fs::write(&path, "[general\ntitle = ").unwrap();
        let err = load_config_from(&path, &mut Notices::default()).unwrap_err();
        let _ = fs::remove_file(&path);
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_valid_env_resolves_without_notices() {
        let mut notices = Notices::default();
        resolve_with_env(
            &GlowlistConfig::default(),
            &CliOverrides::default(),
            |key| (key == "GLOWLIST_LOG_LEVEL").then(|| "info".to_string()),
            &mut notices,
        );
        assert!(notices.is_empty());
    }

    #[test]
    fn test_load_config_from_records_source() {
        let path = std::env::temp_dir().join(format!("glowlist-ok-{}.toml", std::process::id()));
        fs::write(&path, "[general]\ntitle = \"Chores\"\n").unwrap();
        let mut notices = Notices::default();
        let config = load_config_from(&path, &mut notices).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(config.general.title.as_deref(), Some("Chores"));
        assert!(
            notices
                .iter()
                .any(|(level, message)| level == Level::Info && message.starts_with("Loaded config from"))
        );
    }

    #[test]
    fn test_generate_default_config_failure_is_recorded() {
        // A regular file where the config directory should be
        let blocker = std::env::temp_dir().join(format!("glowlist-blocker-{}", std::process::id()));
        fs::write(&blocker, "").unwrap();
        let mut notices = Notices::default();

        generate_default_config(&blocker.join("config.toml"), &mut notices);
        let _ = fs::remove_file(&blocker);

        let warnings: Vec<(Level, &str)> = notices.iter().collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].0, Level::Warn);
        assert!(warnings[0].1.starts_with("Failed to create config directory"));
    }
}
