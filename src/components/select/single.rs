//! Single-value selection mode.

use super::token::SelectToken;
use crate::style::CssObject;

/// Sizing rules for one control size; `size_suffix` is `""`, `"-sm"` or `"-lg"`.
fn gen_size_style(
    token: &SelectToken<'_>,
    size_suffix: &str,
    height: f64,
    padding_horizontal: f64,
) -> CssObject {
    let select_cls = &token.select_cls;
    let inner_height = height - token.control_line_width * 2.0;
    let root = if size_suffix.is_empty() {
        format!("{}-single", select_cls)
    } else {
        format!("{sel}-single{sel}{suffix}", sel = select_cls, suffix = size_suffix)
    };

    CssObject::new().add(
        root,
        CssObject::new().add(
            format!("&:not({}-customize-input) {}-selector", select_cls, select_cls),
            CssObject::new()
                .add("width", "100%")
                .add("height", height)
                .add("padding", format!("0 {}px", padding_horizontal))
                .add(
                    format!("{}-selection-search", select_cls),
                    CssObject::new()
                        .add("inset-inline-start", padding_horizontal)
                        .add("inset-inline-end", padding_horizontal),
                )
                .add(
                    format!("{}-selection-search-input", select_cls),
                    CssObject::new().add("height", inner_height),
                )
                .add(
                    format!(
                        "{sel}-selection-item, {sel}-selection-placeholder",
                        sel = select_cls
                    ),
                    CssObject::new().add("line-height", format!("{}px", inner_height)),
                ),
        ),
    )
}

/// Layout shared by every size of the single-value selector.
fn gen_single_layout(token: &SelectToken<'_>) -> CssObject {
    let select_cls = &token.select_cls;

    CssObject::new().add(
        format!("{}-single", select_cls),
        CssObject::new()
            .add(
                format!("{}-selector", select_cls),
                CssObject::new()
                    .add("display", "flex")
                    .add(
                        format!("{}-selection-search", select_cls),
                        CssObject::new()
                            .add("position", "absolute")
                            .add("top", 0)
                            .add("bottom", 0)
                            .add("&-input", CssObject::new().add("width", "100%")),
                    )
                    .add(
                        format!(
                            "{sel}-selection-item, {sel}-selection-placeholder",
                            sel = select_cls
                        ),
                        CssObject::new().add("padding", 0).add(
                            "transition",
                            format!("all {}", token.motion_duration_slow),
                        ),
                    )
                    .add(
                        format!("{}-selection-item", select_cls),
                        CssObject::new()
                            .add("position", "relative")
                            .add("user-select", "none"),
                    )
                    .add(
                        format!("{}-selection-placeholder", select_cls),
                        CssObject::new()
                            .add("transition", "none")
                            .add("pointer-events", "none"),
                    ),
            )
            .add(
                format!(
                    "&{sel}-show-arrow {sel}-selection-item, &{sel}-show-arrow {sel}-selection-placeholder",
                    sel = select_cls
                ),
                CssObject::new().add("padding-inline-end", token.font_size_icon * 1.5),
            ),
    )
}

/// Single-value layout plus the default, small and large sizes.
pub fn gen_single_style(token: &SelectToken<'_>) -> Vec<CssObject> {
    vec![
        gen_single_layout(token),
        gen_size_style(
            token,
            "",
            token.control_height,
            token.input_padding_horizontal_base,
        ),
        gen_size_style(
            token,
            "-sm",
            token.control_height_sm,
            token.padding_xs - token.control_line_width,
        ),
        gen_size_style(
            token,
            "-lg",
            token.control_height_lg,
            token.input_padding_horizontal_base,
        ),
    ]
}
