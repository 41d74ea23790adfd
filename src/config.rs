//! Configuration for an adapter session

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Point, Viewport};

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Buffer width in columns
    pub columns: u16,
    /// Buffer height in rows
    pub rows: u16,
    /// Visible region; the whole buffer when absent
    pub viewport: Option<ViewportConfig>,
    /// Initial window title
    pub title: String,
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: 80,
            rows: 24,
            viewport: None,
            title: String::new(),
            log_filter: "warn".to_string(),
        }
    }
}

/// Viewport placement inside the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportConfig {
    pub left: u16,
    pub top: u16,
    pub width: u16,
    pub height: u16,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check that the buffer is non-empty and the viewport fits inside it
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ConfigError::Invalid(format!(
                "buffer size {}x{} must be non-zero",
                self.columns, self.rows
            )));
        }
        if let Some(view) = &self.viewport {
            let right = u32::from(view.left) + u32::from(view.width);
            let bottom = u32::from(view.top) + u32::from(view.height);
            if view.width == 0
                || view.height == 0
                || right > u32::from(self.columns)
                || bottom > u32::from(self.rows)
            {
                return Err(ConfigError::Invalid(format!(
                    "viewport {}x{} at ({}, {}) does not fit a {}x{} buffer",
                    view.width, view.height, view.left, view.top, self.columns, self.rows
                )));
            }
        }
        Ok(())
    }

    /// The configured viewport, or one covering the whole buffer
    pub fn viewport(&self) -> Viewport {
        match &self.viewport {
            Some(view) => Viewport::new(
                Point::new(i32::from(view.left), i32::from(view.top)),
                view.width,
                view.height,
            ),
            None => Viewport::new(Point::ORIGIN, self.columns, self.rows),
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!((config.columns, config.rows), (80, 24));
        assert!(config.validate().is_ok());
        assert_eq!(config.viewport(), Viewport::new(Point::ORIGIN, 80, 24));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"rows": 40}"#).unwrap();
        assert_eq!(config.columns, 80);
        assert_eq!(config.rows, 40);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_viewport_from_config() {
        let config = Config {
            rows: 100,
            viewport: Some(ViewportConfig {
                left: 0,
                top: 76,
                width: 80,
                height: 24,
            }),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.viewport().origin(), Point::new(0, 76));
        assert_eq!(config.viewport().bottom_exclusive(), 100);
    }

    #[test]
    fn test_viewport_must_fit() {
        let config = Config {
            viewport: Some(ViewportConfig {
                left: 10,
                top: 0,
                width: 80,
                height: 24,
            }),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_size_rejected() {
        let config = Config {
            columns: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("adapter.json");
        let config = Config {
            title: "session".to_string(),
            ..Default::default()
        };
        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Json(_))));
    }
}
