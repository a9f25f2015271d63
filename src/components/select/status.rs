//! Focus and hover colors for the default, error and warning states.

use super::token::SelectToken;
use crate::style::CssObject;

/// Colors and widths a status variant is parameterized by.
#[derive(Debug, Clone, Copy)]
pub struct StatusColors<'a> {
    pub select_cls: &'a str,
    pub border_hover_color: &'a str,
    pub outline_color: &'a str,
    pub control_outline_width: f64,
    pub control_line_width: f64,
}

impl<'a> StatusColors<'a> {
    pub fn new(token: &'a SelectToken<'_>, border_hover_color: &'a str, outline_color: &'a str) -> Self {
        Self {
            select_cls: &token.select_cls,
            border_hover_color,
            outline_color,
            control_outline_width: token.control_outline_width,
            control_line_width: token.control_line_width,
        }
    }
}

/// Builds the focus and hover rules for one status under `root_select_cls`.
///
/// With `overwrite_default_border` the selector border takes the hover color
/// even at rest, which is how error and warning states stay visible.
///
/// # Example
///
/// ```rust
/// use tokenstyle::components::select::{gen_status_style, StatusColors};
///
/// let colors = StatusColors {
///     select_cls: ".ant-select",
///     border_hover_color: "#ff7875",
///     outline_color: "rgba(255, 77, 79, 0.2)",
///     control_outline_width: 2.0,
///     control_line_width: 1.0,
/// };
/// let style = gen_status_style(".ant-select-status-error", &colors, true);
/// let enabled = style
///     .object_at(&[
///         ".ant-select-status-error",
///         "&:not(.ant-select-disabled):not(.ant-select-customize-input)",
///     ])
///     .unwrap();
/// assert!(enabled.contains_key(".ant-select-selector"));
/// ```
pub fn gen_status_style(
    root_select_cls: &str,
    colors: &StatusColors<'_>,
    overwrite_default_border: bool,
) -> CssObject {
    let select_cls = colors.select_cls;
    let line_width_important = format!("{}px !important", colors.control_line_width);

    let mut enabled = CssObject::new();
    if overwrite_default_border {
        enabled = enabled.add(
            format!("{}-selector", select_cls),
            CssObject::new().add("border-color", colors.border_hover_color),
        );
    }

    let enabled = enabled
        .add(
            format!("{sel}-focused& {sel}-selector", sel = select_cls),
            CssObject::new()
                .add("border-color", colors.border_hover_color)
                .add(
                    "box-shadow",
                    format!(
                        "0 0 0 {}px {}",
                        colors.control_outline_width, colors.outline_color
                    ),
                )
                .add("border-inline-end-width", line_width_important.as_str())
                .add("outline", 0),
        )
        .add(
            format!("&:hover {}-selector", select_cls),
            CssObject::new()
                .add("border-color", colors.border_hover_color)
                .add("border-inline-end-width", line_width_important),
        );

    CssObject::new().add(
        root_select_cls,
        CssObject::new().add(
            format!(
                "&:not({sel}-disabled):not({sel}-customize-input)",
                sel = select_cls
            ),
            enabled,
        ),
    )
}

/// The default, error and warning status variants, in that order.
pub fn gen_status_styles(token: &SelectToken<'_>) -> Vec<CssObject> {
    let select_cls = &token.select_cls;

    vec![
        gen_status_style(
            select_cls,
            &StatusColors::new(token, &token.color_primary_hover, &token.color_primary_outline),
            false,
        ),
        gen_status_style(
            &format!("{}-status-error", select_cls),
            &StatusColors::new(token, &token.color_error_hover, &token.color_error_outline),
            true,
        ),
        gen_status_style(
            &format!("{}-status-warning", select_cls),
            &StatusColors::new(token, &token.color_warning_hover, &token.color_warning_outline),
            true,
        ),
    ]
}
