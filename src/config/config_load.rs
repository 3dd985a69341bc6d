// src/config/config_load.rs
//
// loading to config.toml

use serde::Deserialize;
use std::fs;

use super::config_types::{CanvasConfig, OscConfig, RenderConfig, StyleConfig, WindowConfig};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub window: WindowConfig,
    pub canvas: CanvasConfig,
    pub rendering: RenderConfig,
    pub style: StyleConfig,
    pub osc: OscConfig,
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_working_dir()
    }

    pub fn parse(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config = toml::from_str(content)?;
        config.check()?;
        Ok(config)
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).ok()?;
            match Self::parse(&content) {
                Ok(config) => Some(config),
                Err(e) => {
                    log::warn!("ignoring {}: {}", config_path.display(), e);
                    None
                }
            }
        } else {
            None
        }
    }

    fn load_from_working_dir() -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string("config.toml")?;
        Self::parse(&content)
    }

    fn check(&self) -> Result<(), String> {
        if !(self.canvas.size.is_finite() && self.canvas.size > 0.0) {
            return Err(format!("canvas.size must be positive, got {}", self.canvas.size));
        }
        if self.rendering.arc_resolution < 3 {
            return Err("rendering.arc_resolution must be at least 3".to_string());
        }
        if self.rendering.gradient_resolution == 0 {
            return Err("rendering.gradient_resolution must be at least 1".to_string());
        }
        Ok(())
    }
}
