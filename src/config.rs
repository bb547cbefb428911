//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub banner: BannerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Lojas backend connection
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL for the backend (e.g., "http://localhost:8484")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:8484".to_string()
}

fn default_request_timeout() -> u64 {
    10_000
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: default_request_timeout(),
        }
    }
}

/// Status banner timing
#[derive(Debug, Clone, Deserialize)]
pub struct BannerConfig {
    /// How long a banner stays fully visible
    #[serde(default = "default_visible_ms")]
    pub visible_ms: u64,

    /// Fade-out duration; must match the page's CSS opacity transition
    #[serde(default = "default_fade_ms")]
    pub fade_ms: u64,
}

fn default_visible_ms() -> u64 {
    3000
}

fn default_fade_ms() -> u64 {
    300
}

impl BannerConfig {
    pub fn visible(&self) -> Duration {
        Duration::from_millis(self.visible_ms)
    }

    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            visible_ms: default_visible_ms(),
            fade_ms: default_fade_ms(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("lojas-view").join("config.toml")),
            Some(PathBuf::from("/etc/lojas-view/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Backend overrides
        if let Ok(url) = std::env::var("LOJAS_BACKEND_URL") {
            self.backend.base_url = url;
        }
        if let Ok(timeout) = std::env::var("LOJAS_REQUEST_TIMEOUT_MS") {
            if let Ok(ms) = timeout.parse() {
                self.backend.request_timeout_ms = ms;
            }
        }

        // Banner overrides
        if let Ok(visible) = std::env::var("LOJAS_BANNER_VISIBLE_MS") {
            if let Ok(ms) = visible.parse() {
                self.banner.visible_ms = ms;
            }
        }
        if let Ok(fade) = std::env::var("LOJAS_BANNER_FADE_MS") {
            if let Ok(ms) = fade.parse() {
                self.banner.fade_ms = ms;
            }
        }

        // Logging overrides
        if let Ok(level) = std::env::var("LOJAS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("LOJAS_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# lojas-view Configuration
#
# Environment variables override these settings:
# - LOJAS_BACKEND_URL
# - LOJAS_REQUEST_TIMEOUT_MS
# - LOJAS_BANNER_VISIBLE_MS
# - LOJAS_BANNER_FADE_MS
# - LOJAS_LOG_LEVEL
# - LOJAS_LOG_FORMAT

[backend]
# Lojas backend base URL
base_url = "http://localhost:8484"

# Request timeout in milliseconds
request_timeout_ms = 10000

[banner]
# How long a status banner stays visible (ms)
visible_ms = 3000

# Fade-out duration, matching the page's CSS transition (ms)
fade_ms = 300

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
