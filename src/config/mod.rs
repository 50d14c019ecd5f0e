//! Configuration management for the roast service
//!
//! YAML file, then `ROAST_*`/`GEMINI_*` environment overrides, then validation.

pub mod models;

pub use models::*;

use crate::core::providers::GeminiConfig;
use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::{debug, info};

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/roast.yaml";

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Gemini client settings
    #[serde(default)]
    pub gemini: GeminiConfig,
    /// Upload storage settings
    #[serde(default)]
    pub upload: UploadConfig,
    /// Prompt settings
    #[serde(default)]
    pub roast: RoastConfig,
    /// Banned-term settings
    #[serde(default)]
    pub moderation: ModerationConfig,
    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse a YAML configuration file; missing fields take defaults
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml(&content)
    }

    /// Parse YAML configuration text
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load the file if it exists, apply environment overrides, and validate
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if tokio::fs::try_exists(path).await.unwrap_or(false) {
            Self::from_file(path).await?
        } else {
            info!(
                "Configuration file {:?} not found, using defaults and environment",
                path
            );
            Self::default()
        };

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay process environment variables
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_with(|key| env::var(key).ok())
    }

    /// Overlay variables resolved through `lookup`
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.gemini.apply_overrides(&lookup);

        if let Some(host) = lookup("ROAST_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("ROAST_PORT") {
            self.server.port = parse_var("ROAST_PORT", &port)?;
        }
        if let Some(dir) = lookup("ROAST_UPLOAD_DIR") {
            self.upload.dir = dir.into();
        }
        if let Some(max_mb) = lookup("ROAST_MAX_FILE_MB") {
            self.upload.max_file_mb = parse_var("ROAST_MAX_FILE_MB", &max_mb)?;
        }
        if let Some(level) = lookup("ROAST_LOG_LEVEL") {
            self.logging.level = level.parse().map_err(GatewayError::Config)?;
        }
        if let Some(json) = lookup("ROAST_LOG_JSON") {
            self.logging.json = matches!(
                json.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        debug!("Environment overrides applied");
        Ok(())
    }

    /// Apply command line bind overrides and validate the result
    pub fn apply_cli(&mut self, host: Option<String>, port: Option<u16>) -> Result<()> {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        self.validate()
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| GatewayError::Config(format!("Server config error: {}", e)))?;

        self.upload
            .validate()
            .map_err(|e| GatewayError::Config(format!("Upload config error: {}", e)))?;

        self.gemini.validate().map_err(GatewayError::Config)?;

        debug!("Configuration validation completed");
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| GatewayError::Config(format!("Invalid value for {}: {:?}", name, value)))
}
