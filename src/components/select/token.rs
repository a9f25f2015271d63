//! Select component token.

use std::ops::Deref;

use crate::token::{ComponentTokens, DesignToken};

/// Stacking offset of the dropdown above ordinary popups.
const DROPDOWN_Z_INDEX_OFFSET: f64 = 50.0;

/// Design tokens extended with the Select's derived values.
///
/// Dereferences to the underlying [`DesignToken`], so builders read shared
/// tokens (`token.color_border`) and derived ones (`token.select_cls`) alike.
#[derive(Debug, Clone)]
pub struct SelectToken<'a> {
    design: &'a DesignToken,
    /// Library-wide class prefix, e.g. `ant`.
    pub root_prefix_cls: String,
    /// Library-wide class selector, e.g. `.ant`.
    pub ant_cls: String,
    /// Component class selector, e.g. `.ant-select`.
    pub select_cls: String,
    /// Icon class prefix, e.g. `anticon`.
    pub icon_prefix_cls: String,
    pub input_padding_horizontal_base: f64,
    pub z_index_dropdown: f64,
}

impl<'a> SelectToken<'a> {
    pub fn new(
        design: &'a DesignToken,
        components: &ComponentTokens,
        root_prefix_cls: &str,
        prefix_cls: &str,
        icon_prefix_cls: &str,
    ) -> Self {
        Self {
            design,
            root_prefix_cls: root_prefix_cls.to_string(),
            ant_cls: format!(".{}", root_prefix_cls),
            select_cls: format!(".{}", prefix_cls),
            icon_prefix_cls: icon_prefix_cls.to_string(),
            input_padding_horizontal_base: design.control_padding_horizontal - 1.0,
            z_index_dropdown: components
                .select
                .z_index_dropdown
                .unwrap_or(design.z_index_popup + DROPDOWN_Z_INDEX_OFFSET),
        }
    }
}

impl Deref for SelectToken<'_> {
    type Target = DesignToken;

    fn deref(&self) -> &DesignToken {
        self.design
    }
}
