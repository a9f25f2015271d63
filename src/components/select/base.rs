//! Select root, selector box, arrow and clear icon.

use super::token::SelectToken;
use crate::style::{reset_component, reset_icon, CssObject};

/// Gap between stacked arrow children (suffix icon and loading spinner).
const ARROW_CHILD_GAP: f64 = 8.0;

fn gen_selector_style(token: &SelectToken<'_>) -> CssObject {
    let select_cls = &token.select_cls;

    CssObject::new()
        .add("position", "relative")
        .add("background-color", &token.color_bg_component)
        .add(
            "border",
            format!(
                "{}px {} {}",
                token.control_line_width, token.control_line_type, token.color_border
            ),
        )
        .add("border-radius", token.control_radius)
        .add(
            "transition",
            format!(
                "all {} {}",
                token.motion_duration_slow, token.motion_ease_in_out
            ),
        )
        .add("input", CssObject::new().add("cursor", "pointer"))
        .add(
            format!("{}-show-search&", select_cls),
            CssObject::new()
                .add("cursor", "text")
                .add("input", CssObject::new().add("cursor", "auto")),
        )
        .add(
            format!("{}-disabled&", select_cls),
            CssObject::new()
                .add("color", &token.color_text_disabled)
                .add("background", &token.color_bg_component_disabled)
                .add("cursor", "not-allowed")
                .add(
                    format!("{}-multiple&", select_cls),
                    CssObject::new().add("background", &token.color_bg_component_disabled),
                )
                .add("input", CssObject::new().add("cursor", "not-allowed")),
        )
}

/// Strips native chrome from the search input inside the selector.
fn gen_search_input_without_border_style(token: &SelectToken<'_>) -> CssObject {
    CssObject::new().add(
        format!("{}-selection-search-input", token.select_cls),
        CssObject::new()
            .add("margin", 0)
            .add("padding", 0)
            .add("background", "transparent")
            .add("border", "none")
            .add("outline", "none")
            .add("appearance", "none")
            .add(
                "&::-webkit-search-cancel-button",
                CssObject::new()
                    .add("display", "none")
                    .add("-webkit-appearance", "none"),
            ),
    )
}

fn gen_arrow_style(token: &SelectToken<'_>) -> CssObject {
    let select_cls = &token.select_cls;

    reset_icon()
        .add("position", "absolute")
        .add("top", "50%")
        .add("inset-inline-start", "auto")
        .add("inset-inline-end", token.input_padding_horizontal_base)
        .add("height", token.font_size_icon)
        .add("margin-top", -token.font_size_icon / 2.0)
        .add("color", &token.color_text_disabled)
        .add("font-size", token.font_size_icon)
        .add("line-height", 1)
        .add("text-align", "center")
        .add("pointer-events", "none")
        .add("display", "flex")
        .add("align-items", "center")
        .add(
            format!(".{}", token.icon_prefix_cls),
            CssObject::new()
                .add("vertical-align", "top")
                .add(
                    "transition",
                    format!("transform {}", token.motion_duration_slow),
                )
                .add("> svg", CssObject::new().add("vertical-align", "top"))
                .add(
                    format!("&:not({}-suffix)", select_cls),
                    CssObject::new().add("pointer-events", "auto"),
                ),
        )
        .add(
            format!("{}-disabled &", select_cls),
            CssObject::new().add("cursor", "not-allowed"),
        )
        .add(
            "> *:not(:last-child)",
            CssObject::new().add("margin-inline-end", ARROW_CHILD_GAP),
        )
}

fn gen_clear_style(token: &SelectToken<'_>) -> CssObject {
    CssObject::new()
        .add("position", "absolute")
        .add("top", "50%")
        .add("inset-inline-start", "auto")
        .add("inset-inline-end", token.input_padding_horizontal_base)
        .add("z-index", 1)
        .add("display", "inline-block")
        .add("width", token.font_size_icon)
        .add("height", token.font_size_icon)
        .add("margin-top", -token.font_size_icon / 2.0)
        .add("color", &token.color_text_disabled)
        .add("font-size", token.font_size_icon)
        .add("font-style", "normal")
        .add("line-height", 1)
        .add("text-align", "center")
        .add("text-transform", "none")
        .add("background", &token.color_bg_component)
        .add("cursor", "pointer")
        .add("opacity", 0)
        .add(
            "transition",
            format!(
                "color {slow} ease, opacity {slow} ease",
                slow = token.motion_duration_slow
            ),
        )
        .add("text-rendering", "auto")
        .add("&:before", CssObject::new().add("display", "block"))
        .add(
            "&:hover",
            CssObject::new().add("color", &token.color_text_secondary),
        )
}

/// Root layout, selector box, selection text, arrow, clear icon and feedback spacing.
pub fn gen_base_style(token: &SelectToken<'_>) -> CssObject {
    let select_cls = &token.select_cls;

    let root = reset_component(token)
        .add("position", "relative")
        .add("display", "inline-block")
        .add("cursor", "pointer")
        .add(
            format!("&:not(&-customize-input) {}-selector", select_cls),
            gen_selector_style(token).extend(gen_search_input_without_border_style(token)),
        )
        .add(
            format!("{}-selection-item", select_cls),
            CssObject::new()
                .add("flex", 1)
                .add("overflow", "hidden")
                .add("font-weight", "normal")
                .add("white-space", "nowrap")
                .add("text-overflow", "ellipsis"),
        )
        .add(
            format!("{}-selection-placeholder", select_cls),
            CssObject::new()
                .add("flex", 1)
                .add("overflow", "hidden")
                .add("color", &token.color_placeholder)
                .add("white-space", "nowrap")
                .add("text-overflow", "ellipsis")
                .add("pointer-events", "none"),
        )
        .add(format!("{}-arrow", select_cls), gen_arrow_style(token))
        .add(format!("{}-clear", select_cls), gen_clear_style(token))
        .add(
            "&:hover",
            CssObject::new().add(
                format!("{}-clear", select_cls),
                CssObject::new().add("opacity", 1),
            ),
        );

    CssObject::new().add(select_cls.as_str(), root).add(
        format!("{}-has-feedback", select_cls),
        CssObject::new().add(
            format!("{}-clear", select_cls),
            CssObject::new().add(
                "inset-inline-end",
                token.input_padding_horizontal_base + token.font_size + token.padding_xxs,
            ),
        ),
    )
}

/// Borderless and in-form-item modifiers on the root.
pub fn gen_modifier_style(token: &SelectToken<'_>) -> CssObject {
    let select_cls = &token.select_cls;

    CssObject::new().add(
        select_cls.as_str(),
        CssObject::new()
            .add(
                format!("&-borderless {}-selector", select_cls),
                CssObject::new()
                    .add("background-color", "transparent !important")
                    .add("border-color", "transparent !important")
                    .add("box-shadow", "none !important"),
            )
            .add("&&-in-form-item", CssObject::new().add("width", "100%")),
    )
}

/// Right-to-left direction for the root.
pub fn gen_rtl_style(token: &SelectToken<'_>) -> CssObject {
    CssObject::new().add(
        format!("{}-rtl", token.select_cls),
        CssObject::new().add("direction", "rtl"),
    )
}
