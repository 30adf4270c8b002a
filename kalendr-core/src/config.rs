//! Global kalendr configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{KalendrError, KalendrResult};

static DEFAULT_API_URL: &str = "http://localhost:8000";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Global configuration at ~/.config/kalendr/config.toml
///
/// The events API endpoint is a deployment detail, so the only knob is
/// its base URL.
#[derive(Deserialize, Clone)]
pub struct KalendrConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for KalendrConfig {
    fn default() -> Self {
        KalendrConfig {
            api_url: default_api_url(),
        }
    }
}

impl KalendrConfig {
    pub fn config_path() -> KalendrResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| KalendrError::Config("Could not determine config directory".into()))?
            .join("kalendr");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file. On first run the file does not exist yet;
    /// a commented default is written so the user has something to edit.
    pub fn load() -> KalendrResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    fn load_from(path: &Path) -> KalendrResult<Self> {
        if !path.exists() {
            Self::create_default_config(path)?;
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| KalendrError::Config(format!("Could not read config file: {e}")))?;

        toml::from_str(&content).map_err(|e| KalendrError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    fn create_default_config(path: &Path) -> KalendrResult<()> {
        let contents = format!(
            "\
# kalendr configuration

# Base URL of the events API:
# api_url = \"{}\"
",
            DEFAULT_API_URL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                KalendrError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| KalendrError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
