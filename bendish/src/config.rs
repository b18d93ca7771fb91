//! Layout configuration and theme colors.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::primitives::Color;

/// Default nesting limit for an arrangement pass.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Theme defaults used when a node does not override its background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Fill for box nodes that inherit their background.
    pub box_background: Color,
    /// Divider color.
    pub separator: Color,
    /// Text color for property labels.
    pub text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            box_background: Color::rgb8(77, 77, 77),
            separator: Color::rgb8(30, 30, 30),
            text: Color::rgb8(230, 230, 230),
        }
    }
}

/// Configuration for an arrangement pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Trees nested deeper than this fail with `MaxDepthExceeded`.
    pub max_depth: usize,

    /// Width of separator lines in pixels.
    pub separator_thickness: f32,

    pub theme: Theme,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            separator_thickness: 1.0,
            theme: Theme::default(),
        }
    }
}

impl LayoutConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_fields_use_defaults() {
        let config = LayoutConfig::from_json_str(r#"{ "max_depth": 8 }"#).unwrap();
        assert_eq!(config.max_depth, 8);
        assert_eq!(config.separator_thickness, 1.0);
        assert_eq!(config.theme, Theme::default());
    }

    #[test]
    fn theme_colors_are_overridable() {
        let json = r#"{ "theme": { "separator": { "r": 1.0, "g": 0.0, "b": 0.0, "a": 1.0 } } }"#;
        let config = LayoutConfig::from_json_str(json).unwrap();
        assert_eq!(config.theme.separator, Color::rgba(1.0, 0.0, 0.0, 1.0));
        assert_eq!(config.theme.box_background, Theme::default().box_background);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "separator_thickness": 2.5 }}"#).unwrap();
        let config = LayoutConfig::load(file.path()).unwrap();
        assert_eq!(config.separator_thickness, 2.5);
    }

    #[test]
    fn load_reports_errors() {
        assert!(matches!(
            LayoutConfig::load("/nonexistent/bendish.json"),
            Err(ConfigError::Io(_))
        ));
        assert!(matches!(
            LayoutConfig::from_json_str("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
