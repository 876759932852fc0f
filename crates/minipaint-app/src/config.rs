//! Application configuration.

use crate::error::{AppError, AppResult};
use minipaint_core::{CanvasConfig, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "MINIPAINT_CONFIG";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Open as a borderless fullscreen window.
    pub fullscreen: bool,
    /// Canvas settings, in logical pixels.
    pub canvas: CanvasConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "MiniPaint".to_string(),
            width: 1280,
            height: 800,
            fullscreen: false,
            canvas: CanvasConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::from)?;
        config.canvas.validate()?;
        Ok(config)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| AppError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the file named by `MINIPAINT_CONFIG`, or use defaults when unset.
    pub fn from_env() -> AppResult<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}
