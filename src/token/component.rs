//! Per-component token overrides.

use serde::{Deserialize, Serialize};

use crate::style::StyleError;

/// Overrides applied on top of the derived Select token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SelectOverrides {
    /// Replaces the derived dropdown stacking order (`zIndexPopup + 50`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index_dropdown: Option<f64>,
}

/// Overrides for the skeleton placeholder constants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SkeletonOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skeleton_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skeleton_to_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_size_base: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_font_size_base: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skeleton_title_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skeleton_block_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skeleton_paragraph_li_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skeleton_paragraph_margin_top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
}

/// Component-specific overrides carried by a theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComponentTokens {
    pub select: SelectOverrides,
    pub skeleton: SkeletonOverrides,
}

impl ComponentTokens {
    pub fn validate(&self) -> Result<(), StyleError> {
        if let Some(z) = self.select.z_index_dropdown {
            if !z.is_finite() {
                return Err(StyleError::invalid_token(
                    "select.zIndexDropdown",
                    "must be finite",
                ));
            }
        }

        let sk = &self.skeleton;
        let sizes = [
            ("skeleton.imageSizeBase", sk.image_size_base),
            ("skeleton.imageFontSizeBase", sk.image_font_size_base),
            ("skeleton.skeletonTitleHeight", sk.skeleton_title_height),
            ("skeleton.skeletonParagraphLiHeight", sk.skeleton_paragraph_li_height),
        ];
        for (field, value) in sizes {
            if let Some(v) = value {
                if !v.is_finite() || v <= 0.0 {
                    return Err(StyleError::invalid_token(field, "must be a positive number"));
                }
            }
        }

        let lengths = [
            ("skeleton.skeletonBlockRadius", sk.skeleton_block_radius),
            ("skeleton.skeletonParagraphMarginTop", sk.skeleton_paragraph_margin_top),
            ("skeleton.borderRadius", sk.border_radius),
        ];
        for (field, value) in lengths {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(StyleError::invalid_token(field, "must not be negative"));
                }
            }
        }

        let colors = [
            ("skeleton.skeletonColor", &sk.skeleton_color),
            ("skeleton.skeletonToColor", &sk.skeleton_to_color),
        ];
        for (field, value) in colors {
            if value.as_deref().is_some_and(|c| c.trim().is_empty()) {
                return Err(StyleError::invalid_token(field, "must not be empty"));
            }
        }

        Ok(())
    }
}
