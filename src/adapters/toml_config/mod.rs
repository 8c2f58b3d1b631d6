// TOML config adapter - Layered settings from defaults, file and environment

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::errors::*;

/// Config files looked up when no explicit path is given, first match wins
pub const DEFAULT_CONFIG_PATHS: &[&str] = &["remux.toml", "config/remux.toml"];

const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        match raw.trim().to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(DomainError::ConfigFail(format!(
                "Invalid log format: {}. Valid formats: text, json",
                other
            ))),
        }
    }
}

/// Resolved application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Remuxer binary used for both probing and muxing
    pub remuxer: String,
    pub languages: Vec<String>,
    pub log_level: String,
    pub log_format: LogFormat,
    pub skip_unsupported: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            remuxer: "mkvmerge".to_string(),
            languages: Vec::new(),
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            skip_unsupported: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    remux: Settings,
}

/// Split a comma-separated language list, dropping blank entries
pub fn parse_languages(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// TOML configuration adapter
#[derive(Debug, Clone, Default)]
pub struct TomlConfigAdapter {
    settings: Settings,
    config_file_path: Option<PathBuf>,
}

impl TomlConfigAdapter {
    /// Create adapter holding the default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from `explicit`, or from the first default path that exists
    ///
    /// An explicit path that does not exist is an error; missing default
    /// files are not.
    pub fn load(explicit: Option<&Path>) -> Result<Self, DomainError> {
        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(DomainError::ConfigFail(format!(
                    "Config file does not exist: {}",
                    path.display()
                )));
            }
            Some(path) => Some(path.to_path_buf()),
            None => DEFAULT_CONFIG_PATHS
                .iter()
                .map(PathBuf::from)
                .find(|candidate| candidate.exists()),
        };

        let Some(path) = path else {
            debug!("No config file found, using defaults");
            return Ok(Self::new());
        };

        info!("Loading configuration from: {}", path.display());
        let content = std::fs::read_to_string(&path)
            .map_err(|e| DomainError::ConfigFail(format!("Failed to read config file: {}", e)))?;

        Ok(Self {
            settings: Self::deserialize_config(&content)?,
            config_file_path: Some(path),
        })
    }

    /// Parse a TOML document with a `[remux]` table
    pub fn deserialize_config(toml_content: &str) -> Result<Settings, DomainError> {
        let parsed: ConfigFile = toml::from_str(toml_content)
            .map_err(|e| DomainError::ConfigFail(format!("Failed to parse TOML config: {}", e)))?;
        Ok(parsed.remux)
    }

    /// Apply `REMUX_*` environment overrides from the process environment
    pub fn apply_env(self) -> Result<Self, DomainError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply `REMUX_*` overrides using the given variable lookup
    pub fn apply_env_from<F>(mut self, lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut env_overrides = 0;

        if let Some(value) = lookup("REMUX_REMUXER") {
            self.settings.remuxer = value;
            env_overrides += 1;
        }
        if let Some(value) = lookup("REMUX_LANGUAGES") {
            self.settings.languages = parse_languages(&value);
            env_overrides += 1;
        }
        if let Some(value) = lookup("REMUX_LOG_LEVEL") {
            self.settings.log_level = value.trim().to_lowercase();
            env_overrides += 1;
        }
        if let Some(value) = lookup("REMUX_LOG_FORMAT") {
            self.settings.log_format = LogFormat::parse(&value)?;
            env_overrides += 1;
        }
        if let Some(value) = lookup("REMUX_SKIP_UNSUPPORTED") {
            self.settings.skip_unsupported = value.trim().parse().map_err(|e| {
                DomainError::ConfigFail(format!(
                    "Invalid boolean value for REMUX_SKIP_UNSUPPORTED: {}",
                    e
                ))
            })?;
            env_overrides += 1;
        }

        if env_overrides > 0 {
            debug!("Applied {} environment variable overrides", env_overrides);
        }
        Ok(self)
    }

    /// Validate the resolved settings
    pub fn validate(&self) -> Result<(), DomainError> {
        if !VALID_LOG_LEVELS.contains(&self.settings.log_level.as_str()) {
            return Err(DomainError::ConfigFail(format!(
                "Invalid log level: {}. Valid levels: {}",
                self.settings.log_level,
                VALID_LOG_LEVELS.join(", ")
            )));
        }
        if self.settings.remuxer.trim().is_empty() {
            return Err(DomainError::ConfigFail(
                "Remuxer binary name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn into_settings(self) -> Settings {
        self.settings
    }

    pub fn config_file_path(&self) -> Option<&Path> {
        self.config_file_path.as_deref()
    }
}
