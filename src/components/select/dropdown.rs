//! Dropdown popup and its options.

use super::token::SelectToken;
use crate::style::{reset_component, CssObject, Keyframes};
use crate::util::round_px;

const OPTION_SELECTED_FONT_WEIGHT: i32 = 600;

fn slide_up_in() -> Keyframes {
    Keyframes::new(
        "slide-up-in",
        CssObject::new()
            .add(
                "0%",
                CssObject::new()
                    .add("transform", "scaleY(0.8)")
                    .add("transform-origin", "0% 0%")
                    .add("opacity", 0),
            )
            .add(
                "100%",
                CssObject::new()
                    .add("transform", "scaleY(1)")
                    .add("transform-origin", "0% 0%")
                    .add("opacity", 1),
            ),
    )
}

fn slide_up_out() -> Keyframes {
    Keyframes::new(
        "slide-up-out",
        CssObject::new()
            .add(
                "0%",
                CssObject::new()
                    .add("transform", "scaleY(1)")
                    .add("transform-origin", "0% 0%")
                    .add("opacity", 1),
            )
            .add(
                "100%",
                CssObject::new()
                    .add("transform", "scaleY(0.8)")
                    .add("transform-origin", "0% 0%")
                    .add("opacity", 0),
            ),
    )
}

fn gen_item_style(token: &SelectToken<'_>) -> CssObject {
    let padding_block = round_px((token.control_height - token.font_size * token.line_height) / 2.0);

    CssObject::new()
        .add("position", "relative")
        .add("display", "block")
        .add("min-height", token.control_height)
        .add(
            "padding",
            format!("{}px {}px", padding_block, token.control_padding_horizontal),
        )
        .add("color", &token.color_text)
        .add("font-weight", "normal")
        .add("font-size", token.font_size)
        .add("line-height", token.line_height)
}

fn gen_option_style(token: &SelectToken<'_>) -> CssObject {
    let select_cls = &token.select_cls;

    CssObject::new()
        .add("display", "flex")
        .add(
            "&-content",
            CssObject::new()
                .add("flex", "auto")
                .add("overflow", "hidden")
                .add("white-space", "nowrap")
                .add("text-overflow", "ellipsis"),
        )
        .add("&-state", CssObject::new().add("flex", "none"))
        .add(
            format!("&-active:not({}-item-option-disabled)", select_cls),
            CssObject::new().add("background-color", &token.control_item_bg_hover),
        )
        .add(
            format!("&-selected:not({}-item-option-disabled)", select_cls),
            CssObject::new()
                .add("color", &token.color_text)
                .add("font-weight", OPTION_SELECTED_FONT_WEIGHT)
                .add("background-color", &token.control_item_bg_active)
                .add(
                    format!("{}-item-option-state", select_cls),
                    CssObject::new().add("color", &token.color_primary),
                ),
        )
        .add(
            "&-disabled",
            CssObject::new()
                .add("color", &token.color_text_disabled)
                .add("cursor", "not-allowed")
                .add(
                    format!("&{}-item-option-selected", select_cls),
                    CssObject::new().add("background-color", &token.color_bg_component_disabled),
                ),
        )
        .add(
            "&-grouped",
            CssObject::new().add(
                "padding-inline-start",
                token.control_padding_horizontal * 2.0,
            ),
        )
}

/// Popup container, open/close animation and option list.
pub fn gen_dropdown_style(token: &SelectToken<'_>, hash_id: &str) -> CssObject {
    let select_cls = &token.select_cls;
    let ant_cls = &token.ant_cls;
    let slide_in = slide_up_in();
    let slide_out = slide_up_out();

    let dropdown = reset_component(token)
        .add("position", "absolute")
        .add("top", -9999)
        .add("z-index", token.z_index_dropdown)
        .add("box-sizing", "border-box")
        .add("padding", format!("{}px 0", token.padding_xxs))
        .add("overflow", "hidden")
        .add("font-size", token.font_size)
        .add("font-variant", "initial")
        .add("background-color", &token.color_bg_elevated)
        .add("border-radius", token.control_radius)
        .add("outline", "none")
        .add("box-shadow", &token.box_shadow_secondary)
        .add(
            format!(
                "&{ant}-slide-up-enter{ant}-slide-up-enter-active&-placement-bottomLeft, \
                 &{ant}-slide-up-appear{ant}-slide-up-appear-active&-placement-bottomLeft",
                ant = ant_cls
            ),
            CssObject::new()
                .add("animation-name", slide_in.name_with_hash(hash_id))
                .add(
                    "animation-duration",
                    token.motion_duration_mid.as_str(),
                )
                .add(
                    "animation-timing-function",
                    token.motion_ease_out_quint.as_str(),
                )
                .add(slide_in.name(), slide_in.clone()),
        )
        .add(
            format!(
                "&{ant}-slide-up-leave{ant}-slide-up-leave-active&-placement-bottomLeft",
                ant = ant_cls
            ),
            CssObject::new()
                .add("animation-name", slide_out.name_with_hash(hash_id))
                .add(
                    "animation-duration",
                    token.motion_duration_mid.as_str(),
                )
                .add(
                    "animation-timing-function",
                    token.motion_ease_in_quint.as_str(),
                )
                .add(slide_out.name(), slide_out.clone()),
        )
        .add("&-hidden", CssObject::new().add("display", "none"))
        .add(
            "&-empty",
            CssObject::new().add("color", &token.color_text_disabled),
        )
        .add(
            format!("{}-item-empty", select_cls),
            gen_item_style(token).add("color", &token.color_text_disabled),
        )
        .add(
            format!("{}-item", select_cls),
            gen_item_style(token)
                .add("cursor", "pointer")
                .add(
                    "transition",
                    format!("background {} ease", token.motion_duration_slow),
                )
                .add(
                    "&-group",
                    CssObject::new()
                        .add("color", &token.color_text_secondary)
                        .add("font-size", token.font_size_sm)
                        .add("cursor", "default"),
                )
                .add("&-option", gen_option_style(token)),
        )
        .add("&-rtl", CssObject::new().add("direction", "rtl"));

    CssObject::new().add(format!("{}-dropdown", select_cls), dropdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{to_css, CssValue};
    use crate::token::{ComponentTokens, DesignToken};

    fn token(design: &DesignToken) -> SelectToken<'_> {
        SelectToken::new(
            design,
            &ComponentTokens::default(),
            "ant",
            "ant-select",
            "anticon",
        )
    }

    #[test]
    fn test_dropdown_uses_derived_z_index() {
        let design = DesignToken::light();
        let style = gen_dropdown_style(&token(&design), "css-1");
        let dropdown = style.get_object(".ant-select-dropdown").unwrap();
        assert_eq!(
            dropdown.get_value("z-index").and_then(CssValue::as_number),
            Some(1050.0)
        );
    }

    #[test]
    fn test_item_padding_is_rounded() {
        let design = DesignToken::light();
        let style = gen_dropdown_style(&token(&design), "");
        let item = style
            .object_at(&[".ant-select-dropdown", ".ant-select-item"])
            .unwrap();
        assert_eq!(
            item.get_value("padding").and_then(CssValue::as_str),
            Some("5px 12px")
        );
    }

    #[test]
    fn test_option_states_resolve() {
        let design = DesignToken::light();
        let css = to_css(&[gen_dropdown_style(&token(&design), "")], "");
        assert!(css.contains(
            ".ant-select-dropdown .ant-select-item-option-active:not(.ant-select-item-option-disabled){"
        ));
        assert!(css.contains(".ant-select-dropdown-hidden{display:none;}"));
    }

    #[test]
    fn test_animation_names_are_hashed() {
        let design = DesignToken::light();
        let css = to_css(&[gen_dropdown_style(&token(&design), "css-1")], "css-1");
        assert!(css.contains("animation-name:css-1-slide-up-in;"));
        assert!(css.contains("@keyframes css-1-slide-up-in{"));
        assert!(css.contains("@keyframes css-1-slide-up-out{"));
    }
}
