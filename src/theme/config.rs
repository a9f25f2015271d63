//! Loading themes from YAML and JSON files.
//!
//! A theme file names a base preset and lists only the tokens it changes:
//!
//! ```yaml
//! id: brand
//! algorithm: dark
//! token:
//!   colorPrimaryHover: "#9254de"
//! components:
//!   select:
//!     zIndexDropdown: 2050
//! ```
//!
//! Token keys use the camelCase design names. Unknown keys are rejected so a
//! misspelled token fails loudly instead of silently keeping its default.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::adaptive::ColorMode;
use super::theme::Theme;
use crate::style::StyleError;
use crate::token::{ComponentTokens, DesignToken};

const DEFAULT_THEME_ID: &str = "custom";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
    id: Option<String>,
    #[serde(default)]
    algorithm: ColorMode,
    #[serde(default)]
    token: Map<String, Value>,
    #[serde(default)]
    components: ComponentTokens,
}

impl ThemeFile {
    fn into_theme(self, fallback_id: &str) -> Result<Theme, StyleError> {
        let preset = match self.algorithm {
            ColorMode::Light => DesignToken::light(),
            ColorMode::Dark => DesignToken::dark(),
        };

        let mut merged =
            serde_json::to_value(preset).map_err(|e| StyleError::Config(e.to_string()))?;
        if let Value::Object(fields) = &mut merged {
            fields.extend(self.token);
        }
        let token: DesignToken =
            serde_json::from_value(merged).map_err(|e| StyleError::Config(e.to_string()))?;

        let theme = Theme::from_token(self.id.as_deref().unwrap_or(fallback_id), token)
            .with_components(self.components);
        theme.validate()?;
        Ok(theme)
    }
}

impl Theme {
    /// Parses a theme from YAML.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tokenstyle::Theme;
    ///
    /// let theme = Theme::from_yaml("id: compact\ntoken:\n  controlHeight: 28\n").unwrap();
    /// assert_eq!(theme.id(), "compact");
    /// assert_eq!(theme.token().control_height, 28.0);
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, StyleError> {
        let file: ThemeFile =
            serde_yaml::from_str(source).map_err(|e| StyleError::Config(e.to_string()))?;
        file.into_theme(DEFAULT_THEME_ID)
    }

    /// Parses a theme from JSON.
    pub fn from_json(source: &str) -> Result<Self, StyleError> {
        let file: ThemeFile =
            serde_json::from_str(source).map_err(|e| StyleError::Config(e.to_string()))?;
        file.into_theme(DEFAULT_THEME_ID)
    }

    /// Reads a theme file, choosing the format by extension.
    ///
    /// Files without an `id` take their file stem as the theme id.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let source = std::fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let file: ThemeFile = match extension.as_str() {
            "yaml" | "yml" => {
                serde_yaml::from_str(&source).map_err(|e| StyleError::Config(e.to_string()))?
            }
            "json" => {
                serde_json::from_str(&source).map_err(|e| StyleError::Config(e.to_string()))?
            }
            other => return Err(StyleError::UnsupportedFormat(other.to_string())),
        };

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(DEFAULT_THEME_ID);
        file.into_theme(stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_overrides_merge_over_light() {
        let theme = Theme::from_yaml(
            r##"
id: brand
token:
  colorPrimaryHover: "#9254de"
  controlHeightLG: 44
"##,
        )
        .unwrap();

        assert_eq!(theme.token().color_primary_hover, "#9254de");
        assert_eq!(theme.token().control_height_lg, 44.0);
        assert_eq!(theme.token().color_border, DesignToken::light().color_border);
    }

    #[test]
    fn test_dark_algorithm_selects_dark_preset() {
        let theme = Theme::from_yaml("algorithm: dark\n").unwrap();
        assert_eq!(theme.id(), DEFAULT_THEME_ID);
        assert_eq!(theme.token(), &DesignToken::dark());
    }

    #[test]
    fn test_components_section() {
        let theme = Theme::from_json(
            r#"{"id": "tall", "components": {"select": {"zIndexDropdown": 2050}}}"#,
        )
        .unwrap();
        assert_eq!(theme.components().select.z_index_dropdown, Some(2050.0));
    }

    #[test]
    fn test_unknown_token_rejected() {
        let err = Theme::from_yaml("token:\n  colourPrimary: red\n").unwrap_err();
        assert!(matches!(err, StyleError::Config(_)));
    }

    #[test]
    fn test_unknown_top_level_key_rejected() {
        assert!(Theme::from_yaml("palette: warm\n").is_err());
    }

    #[test]
    fn test_invalid_value_rejected() {
        let err = Theme::from_yaml("token:\n  controlHeight: -4\n").unwrap_err();
        assert!(matches!(err, StyleError::InvalidToken { .. }));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let err = Theme::from_json(r#"{"token": {"fontSize": "large"}}"#).unwrap_err();
        assert!(matches!(err, StyleError::Config(_)));
    }
}
