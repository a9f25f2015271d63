//! The shared design token record.

use serde::{Deserialize, Serialize};

use crate::style::StyleError;

/// Named design values shared by every component style.
///
/// Field names serialize in camelCase (`colorPrimaryHover`, `controlHeightLG`)
/// so theme files read like the token tables designers already use.
/// Tokens are read-only inputs: builders derive everything else from them.
///
/// # Example
///
/// ```rust
/// use tokenstyle::DesignToken;
///
/// let token = DesignToken {
///     control_height: 36.0,
///     ..DesignToken::light()
/// };
/// assert!(token.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct DesignToken {
    // Brand and status colors
    pub color_primary: String,
    pub color_primary_hover: String,
    pub color_primary_outline: String,
    pub color_error: String,
    pub color_error_hover: String,
    pub color_error_outline: String,
    pub color_warning: String,
    pub color_warning_hover: String,
    pub color_warning_outline: String,

    // Neutral colors
    pub color_text: String,
    pub color_text_secondary: String,
    pub color_text_disabled: String,
    pub color_placeholder: String,
    pub color_border: String,
    pub color_split: String,
    pub color_bg_component: String,
    pub color_bg_component_disabled: String,
    pub color_bg_elevated: String,
    pub control_item_bg_hover: String,
    pub control_item_bg_active: String,

    // Typography
    pub font_family: String,
    pub font_size: f64,
    #[serde(rename = "fontSizeSM")]
    pub font_size_sm: f64,
    pub font_size_icon: f64,
    pub line_height: f64,

    // Controls
    pub control_line_width: f64,
    pub control_line_type: String,
    pub control_outline_width: f64,
    pub control_radius: f64,
    pub radius_base: f64,
    pub control_height: f64,
    #[serde(rename = "controlHeightLG")]
    pub control_height_lg: f64,
    #[serde(rename = "controlHeightSM")]
    pub control_height_sm: f64,
    #[serde(rename = "controlHeightXS")]
    pub control_height_xs: f64,
    pub control_padding_horizontal: f64,

    // Spacing
    #[serde(rename = "paddingXXS")]
    pub padding_xxs: f64,
    #[serde(rename = "paddingXS")]
    pub padding_xs: f64,
    #[serde(rename = "paddingSM")]
    pub padding_sm: f64,
    pub padding: f64,
    #[serde(rename = "marginXS")]
    pub margin_xs: f64,
    #[serde(rename = "marginSM")]
    pub margin_sm: f64,
    pub margin: f64,

    // Motion
    pub motion_duration_mid: String,
    pub motion_duration_slow: String,
    pub motion_ease_in_out: String,
    pub motion_ease_out_quint: String,
    pub motion_ease_in_quint: String,

    // Elevation
    pub z_index_popup: f64,
    pub box_shadow_secondary: String,
}

impl DesignToken {
    /// The default light token set.
    pub fn light() -> Self {
        Self {
            color_primary: "#1890ff".into(),
            color_primary_hover: "#40a9ff".into(),
            color_primary_outline: "rgba(24, 144, 255, 0.2)".into(),
            color_error: "#ff4d4f".into(),
            color_error_hover: "#ff7875".into(),
            color_error_outline: "rgba(255, 77, 79, 0.2)".into(),
            color_warning: "#faad14".into(),
            color_warning_hover: "#ffc53d".into(),
            color_warning_outline: "rgba(250, 173, 20, 0.2)".into(),

            color_text: "rgba(0, 0, 0, 0.85)".into(),
            color_text_secondary: "rgba(0, 0, 0, 0.45)".into(),
            color_text_disabled: "rgba(0, 0, 0, 0.25)".into(),
            color_placeholder: "#bfbfbf".into(),
            color_border: "#d9d9d9".into(),
            color_split: "rgba(0, 0, 0, 0.06)".into(),
            color_bg_component: "#ffffff".into(),
            color_bg_component_disabled: "#f5f5f5".into(),
            color_bg_elevated: "#ffffff".into(),
            control_item_bg_hover: "#f5f5f5".into(),
            control_item_bg_active: "#e6f7ff".into(),

            font_family: "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, \
                          'Helvetica Neue', Arial, 'Noto Sans', sans-serif"
                .into(),
            font_size: 14.0,
            font_size_sm: 12.0,
            font_size_icon: 12.0,
            line_height: 1.5715,

            control_line_width: 1.0,
            control_line_type: "solid".into(),
            control_outline_width: 2.0,
            control_radius: 2.0,
            radius_base: 2.0,
            control_height: 32.0,
            control_height_lg: 40.0,
            control_height_sm: 24.0,
            control_height_xs: 16.0,
            control_padding_horizontal: 12.0,

            padding_xxs: 4.0,
            padding_xs: 8.0,
            padding_sm: 12.0,
            padding: 16.0,
            margin_xs: 8.0,
            margin_sm: 12.0,
            margin: 16.0,

            motion_duration_mid: "0.2s".into(),
            motion_duration_slow: "0.3s".into(),
            motion_ease_in_out: "cubic-bezier(0.645, 0.045, 0.355, 1)".into(),
            motion_ease_out_quint: "cubic-bezier(0.23, 1, 0.32, 1)".into(),
            motion_ease_in_quint: "cubic-bezier(0.755, 0.05, 0.855, 0.06)".into(),

            z_index_popup: 1000.0,
            box_shadow_secondary: "0 3px 6px -4px rgba(0, 0, 0, 0.12), \
                                   0 6px 16px 0 rgba(0, 0, 0, 0.08), \
                                   0 9px 28px 8px rgba(0, 0, 0, 0.05)"
                .into(),
        }
    }

    /// The default dark token set.
    pub fn dark() -> Self {
        Self {
            color_primary: "#177ddc".into(),
            color_primary_hover: "#3c9ae8".into(),
            color_primary_outline: "rgba(23, 125, 220, 0.2)".into(),
            color_error: "#d32029".into(),
            color_error_hover: "#e84749".into(),
            color_error_outline: "rgba(211, 32, 41, 0.2)".into(),
            color_warning: "#d89614".into(),
            color_warning_hover: "#e8b339".into(),
            color_warning_outline: "rgba(216, 150, 20, 0.2)".into(),

            color_text: "rgba(255, 255, 255, 0.85)".into(),
            color_text_secondary: "rgba(255, 255, 255, 0.45)".into(),
            color_text_disabled: "rgba(255, 255, 255, 0.3)".into(),
            color_placeholder: "rgba(255, 255, 255, 0.3)".into(),
            color_border: "#434343".into(),
            color_split: "rgba(255, 255, 255, 0.12)".into(),
            color_bg_component: "#141414".into(),
            color_bg_component_disabled: "rgba(255, 255, 255, 0.08)".into(),
            color_bg_elevated: "#1f1f1f".into(),
            control_item_bg_hover: "rgba(255, 255, 255, 0.08)".into(),
            control_item_bg_active: "#111b26".into(),

            box_shadow_secondary: "0 3px 6px -4px rgba(0, 0, 0, 0.48), \
                                   0 6px 16px 0 rgba(0, 0, 0, 0.32), \
                                   0 9px 28px 8px rgba(0, 0, 0, 0.2)"
                .into(),
            ..Self::light()
        }
    }

    /// Checks that every token holds a value the builders can use.
    ///
    /// Sizes must be finite and positive (line widths may be zero), and color,
    /// typography and motion strings must be non-empty.
    pub fn validate(&self) -> Result<(), StyleError> {
        let positive = [
            ("fontSize", self.font_size),
            ("fontSizeSM", self.font_size_sm),
            ("fontSizeIcon", self.font_size_icon),
            ("lineHeight", self.line_height),
            ("controlHeight", self.control_height),
            ("controlHeightLG", self.control_height_lg),
            ("controlHeightSM", self.control_height_sm),
            ("controlHeightXS", self.control_height_xs),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(StyleError::invalid_token(field, "must be a positive number"));
            }
        }

        let non_negative = [
            ("controlLineWidth", self.control_line_width),
            ("controlOutlineWidth", self.control_outline_width),
            ("controlRadius", self.control_radius),
            ("radiusBase", self.radius_base),
            ("controlPaddingHorizontal", self.control_padding_horizontal),
            ("paddingXXS", self.padding_xxs),
            ("paddingXS", self.padding_xs),
            ("paddingSM", self.padding_sm),
            ("padding", self.padding),
            ("marginXS", self.margin_xs),
            ("marginSM", self.margin_sm),
            ("margin", self.margin),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(StyleError::invalid_token(field, "must not be negative"));
            }
        }

        if !self.z_index_popup.is_finite() {
            return Err(StyleError::invalid_token("zIndexPopup", "must be finite"));
        }

        let strings = [
            ("colorPrimary", &self.color_primary),
            ("colorPrimaryHover", &self.color_primary_hover),
            ("colorPrimaryOutline", &self.color_primary_outline),
            ("colorError", &self.color_error),
            ("colorErrorHover", &self.color_error_hover),
            ("colorErrorOutline", &self.color_error_outline),
            ("colorWarning", &self.color_warning),
            ("colorWarningHover", &self.color_warning_hover),
            ("colorWarningOutline", &self.color_warning_outline),
            ("colorText", &self.color_text),
            ("colorTextSecondary", &self.color_text_secondary),
            ("colorTextDisabled", &self.color_text_disabled),
            ("colorPlaceholder", &self.color_placeholder),
            ("colorBorder", &self.color_border),
            ("colorSplit", &self.color_split),
            ("colorBgComponent", &self.color_bg_component),
            ("colorBgComponentDisabled", &self.color_bg_component_disabled),
            ("colorBgElevated", &self.color_bg_elevated),
            ("controlItemBgHover", &self.control_item_bg_hover),
            ("controlItemBgActive", &self.control_item_bg_active),
            ("fontFamily", &self.font_family),
            ("controlLineType", &self.control_line_type),
            ("motionDurationMid", &self.motion_duration_mid),
            ("motionDurationSlow", &self.motion_duration_slow),
            ("motionEaseInOut", &self.motion_ease_in_out),
            ("motionEaseOutQuint", &self.motion_ease_out_quint),
            ("motionEaseInQuint", &self.motion_ease_in_quint),
        ];
        for (field, value) in strings {
            if value.trim().is_empty() {
                return Err(StyleError::invalid_token(field, "must not be empty"));
            }
        }

        Ok(())
    }
}

impl Default for DesignToken {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert!(DesignToken::light().validate().is_ok());
        assert!(DesignToken::dark().validate().is_ok());
    }

    #[test]
    fn test_dark_shares_layout_with_light() {
        let light = DesignToken::light();
        let dark = DesignToken::dark();
        assert_eq!(light.control_height, dark.control_height);
        assert_ne!(light.color_bg_component, dark.color_bg_component);
    }

    #[test]
    fn test_validate_rejects_non_positive_height() {
        let token = DesignToken {
            control_height_sm: 0.0,
            ..DesignToken::light()
        };
        let err = token.validate().unwrap_err();
        assert!(err.to_string().contains("controlHeightSM"));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let token = DesignToken {
            padding: f64::NAN,
            ..DesignToken::light()
        };
        assert!(token.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_color() {
        let token = DesignToken {
            color_border: "  ".into(),
            ..DesignToken::light()
        };
        let err = token.validate().unwrap_err();
        assert!(err.to_string().contains("colorBorder"));
    }

    #[test]
    fn test_serde_uses_design_names() {
        let json = serde_json::to_value(DesignToken::light()).unwrap();
        assert_eq!(json["controlHeightLG"], 40.0);
        assert_eq!(json["paddingXXS"], 4.0);
        assert_eq!(json["colorPrimaryHover"], "#40a9ff");
    }

    #[test]
    fn test_partial_deserialize_fills_defaults() {
        let token: DesignToken = serde_json::from_str(r#"{"controlHeight": 36}"#).unwrap();
        assert_eq!(token.control_height, 36.0);
        assert_eq!(token.font_size, 14.0);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<DesignToken, _> = serde_json::from_str(r#"{"colourPrimary": "red"}"#);
        assert!(result.is_err());
    }
}
