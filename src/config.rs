use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::dates::DisplayLocale;
use crate::error::{AppError, Result};
use crate::store::{DEFAULT_PLACEHOLDER_IMAGE, DEFAULT_READ_TIME};
use crate::views::DEFAULT_NEWS_CATEGORIES;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub locale: DisplayLocale,

    #[serde(default = "default_read_time")]
    pub read_time: String,

    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,

    #[serde(default = "default_news_categories")]
    pub news_categories: Vec<String>,

    pub seed_path: Option<String>,

    #[serde(default = "default_log_path")]
    pub log_path: String,
}

fn default_read_time() -> String {
    DEFAULT_READ_TIME.to_string()
}

fn default_placeholder_image() -> String {
    DEFAULT_PLACEHOLDER_IMAGE.to_string()
}

fn default_news_categories() -> Vec<String> {
    DEFAULT_NEWS_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

fn default_log_path() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("newsdesk")
        .join("newsdesk.log")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: DisplayLocale::default(),
            read_time: default_read_time(),
            placeholder_image: default_placeholder_image(),
            news_categories: default_news_categories(),
            seed_path: None,
            log_path: default_log_path(),
        }
    }
}

impl Config {
    /// Parse config from a TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a TOML string
    pub fn to_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_str(&content)?
        } else {
            let config = Config::default();
            config.save()?;
            config
        };

        // Environment variables override config file values
        if let Ok(path) = std::env::var("NEWSDESK_SEED") {
            config.seed_path = Some(path);
        }

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, self.to_string()?)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("newsdesk")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        url::Url::parse(&self.placeholder_image).map_err(|e| {
            AppError::Config(format!(
                "placeholder_image {:?} is not a valid URL: {}",
                self.placeholder_image, e
            ))
        })?;

        if self.read_time.trim().is_empty() {
            return Err(AppError::Config("read_time must not be empty".to_string()));
        }

        Ok(())
    }
}
