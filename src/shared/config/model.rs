use serde::Deserialize;
use std::env;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub http_addr: String,
    /// Keep HTTP/1.1 connections open between requests
    pub keep_alive: bool,
    /// Cap on concurrently served connections (0 = unlimited)
    pub max_connections: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: "0.0.0.0:3100".to_string(),
            keep_alive: false,
            max_connections: 0,
        }
    }
}

impl ServerConfig {
    pub fn connection_limit(&self) -> Option<usize> {
        match self.max_connections {
            0 => None,
            n => Some(n),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            stdout_level: "info".to_string(),
            file_level: "debug".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Serve the browser view at `/`
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

pub const CONFIG_ENV: &str = "LIQUID_CATALOG_CONFIG";
const ENV_PREFIX: &str = "LIQUID_CATALOG";

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var(CONFIG_ENV).unwrap_or_else(|_| "config".to_string());
    load_settings_from(&config_path)
}

/// Loads `path` (extension optional) and applies `LIQUID_CATALOG__SECTION__KEY`
/// environment overrides. A missing file falls back to defaults.
pub fn load_settings_from(path: &str) -> Result<Settings, config::ConfigError> {
    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
