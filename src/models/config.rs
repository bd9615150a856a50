use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "lazyclock.toml";

/// Configuration loaded from lazyclock.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub clockify: ClockifyConfig,
    #[serde(default)]
    pub time: TimeConfig,
}

/// Gemini API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default)]
    pub api_key: String,
    /// Model name to use
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL up to and including the API version
    #[serde(default = "default_gemini_url")]
    pub base_url: String,
    /// Timeout in seconds for API requests
    #[serde(default = "default_gemini_timeout")]
    pub timeout_seconds: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_gemini_url(),
            timeout_seconds: default_gemini_timeout(),
        }
    }
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_gemini_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_gemini_timeout() -> u64 {
    120
}

/// Clockify API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockifyConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub workspace_id: String,
    #[serde(default)]
    pub user_id: String,
    /// Only list projects belonging to this client
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default = "default_clockify_url")]
    pub base_url: String,
    #[serde(default = "default_clockify_timeout")]
    pub timeout_seconds: u64,
}

impl Default for ClockifyConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            workspace_id: String::new(),
            user_id: String::new(),
            client_id: None,
            base_url: default_clockify_url(),
            timeout_seconds: default_clockify_timeout(),
        }
    }
}

fn default_clockify_url() -> String {
    "https://api.clockify.me/api/v1".to_string()
}

fn default_clockify_timeout() -> u64 {
    60
}

/// Local time configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeConfig {
    /// Offset of local wall-clock time from UTC, in minutes (UTC-3 is -180)
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: default_utc_offset_minutes(),
        }
    }
}

fn default_utc_offset_minutes() -> i32 {
    -180
}

/// Values supplied on the command line or through the environment
///
/// Anything set here wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub gemini_api_key: Option<String>,
    pub model: Option<String>,
    pub clockify_api_key: Option<String>,
    pub workspace_id: Option<String>,
    pub user_id: Option<String>,
    pub client_id: Option<String>,
    pub utc_offset_minutes: Option<i32>,
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))
    }

    /// Try to load config from lazyclock.toml in the given directory
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge CLI/environment overrides into the config
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(key) = overrides.gemini_api_key {
            self.gemini.api_key = key;
        }
        if let Some(model) = overrides.model {
            self.gemini.model = model;
        }
        if let Some(key) = overrides.clockify_api_key {
            self.clockify.api_key = key;
        }
        if let Some(workspace) = overrides.workspace_id {
            self.clockify.workspace_id = workspace;
        }
        if let Some(user) = overrides.user_id {
            self.clockify.user_id = user;
        }
        if let Some(client) = overrides.client_id {
            self.clockify.client_id = Some(client);
        }
        if let Some(offset) = overrides.utc_offset_minutes {
            self.time.utc_offset_minutes = offset;
        }
        self
    }

    /// Check that the secrets and identifiers needed to talk to both APIs are set
    pub fn require_credentials(&self) -> Result<(), ConfigError> {
        let required = [
            ("gemini.api_key", &self.gemini.api_key),
            ("clockify.api_key", &self.clockify.api_key),
            ("clockify.workspace_id", &self.clockify.workspace_id),
            ("clockify.user_id", &self.clockify.user_id),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingValue(name));
            }
        }
        self.time.check()
    }

    /// Same as [`Config::require_credentials`] but only for the tracking service
    pub fn require_clockify(&self) -> Result<(), ConfigError> {
        if self.clockify.api_key.trim().is_empty() {
            return Err(ConfigError::MissingValue("clockify.api_key"));
        }
        if self.clockify.workspace_id.trim().is_empty() {
            return Err(ConfigError::MissingValue("clockify.workspace_id"));
        }
        Ok(())
    }
}

impl TimeConfig {
    /// Local offset as a chrono offset, must stay strictly within one day
    pub fn offset(&self) -> Result<FixedOffset, ConfigError> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(ConfigError::InvalidOffset(self.utc_offset_minutes))
    }

    pub fn check(&self) -> Result<(), ConfigError> {
        self.offset().map(|_| ())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(PathBuf, toml::de::Error),
    #[error("Missing required setting '{0}' (set it in lazyclock.toml or via the matching flag/env var)")]
    MissingValue(&'static str),
    #[error("UTC offset of {0} minutes is out of range (must be within +/-1439)")]
    InvalidOffset(i32),
}
