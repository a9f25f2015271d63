//! Multiple-value (tag) selection mode.

use super::token::SelectToken;
use crate::style::{reset_icon, CssObject};

/// Vertical margin around each tag inside the selector.
const TAG_MARGIN_BLOCK: f64 = 2.0;
const TAG_REMOVE_FONT_SIZE: f64 = 10.0;

pub fn gen_multiple_style(token: &SelectToken<'_>) -> CssObject {
    let select_cls = &token.select_cls;
    let tag_height = token.control_height - token.padding_xxs * 2.0;
    let selector_padding_block =
        (token.control_height - tag_height) / 2.0 - token.control_line_width - TAG_MARGIN_BLOCK / 2.0;

    let item = CssObject::new()
        .add("position", "relative")
        .add("display", "flex")
        .add("flex", "none")
        .add("box-sizing", "border-box")
        .add("max-width", "100%")
        .add("height", tag_height)
        .add("margin-top", TAG_MARGIN_BLOCK)
        .add("margin-bottom", TAG_MARGIN_BLOCK)
        .add("margin-inline-end", token.padding_xxs)
        .add("padding-inline-start", token.padding_xs)
        .add("padding-inline-end", token.padding_xxs)
        .add(
            "line-height",
            format!("{}px", tag_height - token.control_line_width * 2.0),
        )
        .add("background", &token.color_bg_component_disabled)
        .add(
            "border",
            format!(
                "{}px {} {}",
                token.control_line_width, token.control_line_type, token.color_split
            ),
        )
        .add("border-radius", token.control_radius)
        .add("cursor", "default")
        .add(
            "transition",
            format!(
                "font-size {slow}, line-height {slow}, height {slow}",
                slow = token.motion_duration_slow
            ),
        )
        .add("user-select", "none")
        .add(
            "&-content",
            CssObject::new()
                .add("display", "inline-block")
                .add("margin-inline-end", token.padding_xxs / 2.0)
                .add("overflow", "hidden")
                .add("white-space", "pre")
                .add("text-overflow", "ellipsis"),
        )
        .add(
            "&-remove",
            reset_icon()
                .add("color", &token.color_text_secondary)
                .add("font-weight", "bold")
                .add("font-size", TAG_REMOVE_FONT_SIZE)
                .add("line-height", "inherit")
                .add("cursor", "pointer")
                .add(
                    format!("> .{}", token.icon_prefix_cls),
                    CssObject::new().add("vertical-align", "-0.2em"),
                )
                .add("&:hover", CssObject::new().add("color", &token.color_text)),
        );

    CssObject::new().add(
        format!("{}-multiple", select_cls),
        CssObject::new()
            .add(
                format!("{}-selector", select_cls),
                CssObject::new()
                    .add("display", "flex")
                    .add("flex-wrap", "wrap")
                    .add("align-items", "center")
                    .add(
                        "padding",
                        format!("{}px {}px", selector_padding_block, token.padding_xxs),
                    )
                    .add(
                        format!("{}-selection-search", select_cls),
                        CssObject::new()
                            .add("position", "relative")
                            .add("max-width", "100%")
                            .add("margin-inline-start", token.padding_xxs),
                    ),
            )
            .add(format!("{}-selection-item", select_cls), item)
            .add(
                format!("&{sel}-disabled {sel}-selection-item", sel = select_cls),
                CssObject::new()
                    .add("color", &token.color_text_disabled)
                    .add("cursor", "not-allowed"),
            ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::CssValue;
    use crate::token::{ComponentTokens, DesignToken};

    #[test]
    fn test_tag_height_fits_control() {
        let design = DesignToken::light();
        let token = SelectToken::new(
            &design,
            &ComponentTokens::default(),
            "ant",
            "ant-select",
            "anticon",
        );
        let style = gen_multiple_style(&token);
        let item = style
            .object_at(&[".ant-select-multiple", ".ant-select-selection-item"])
            .unwrap();

        assert_eq!(
            item.get_value("height").and_then(CssValue::as_number),
            Some(24.0)
        );
        assert!(item.object_at(&["&-remove", "> .anticon"]).is_some());

        let selector = style
            .object_at(&[".ant-select-multiple", ".ant-select-selector"])
            .unwrap();
        assert_eq!(
            selector.get_value("padding").and_then(CssValue::as_str),
            Some("2px 4px")
        );
    }
}
