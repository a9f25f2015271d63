//! Integration tests for the Select style builders and registration.

use tokenstyle::components::select::{
    gen_select_style, gen_status_style, use_select_style, SelectToken, StatusColors,
};
use tokenstyle::{
    to_css, ComponentTokens, CssValue, DesignToken, SelectOverrides, StyleRegistry, Theme,
    ThemeChoice,
};

fn default_token(design: &DesignToken) -> SelectToken<'_> {
    SelectToken::new(
        design,
        &ComponentTokens::default(),
        "ant",
        "ant-select",
        "anticon",
    )
}

#[test]
fn test_builder_is_pure() {
    let design = DesignToken::light();
    let first = gen_select_style(&default_token(&design), "css-1");
    let second = gen_select_style(&default_token(&design), "css-1");
    assert_eq!(first, second);

    let dark = DesignToken::dark();
    assert_ne!(first, gen_select_style(&default_token(&dark), "css-1"));
}

#[test]
fn test_rule_order() {
    let design = DesignToken::light();
    let styles = gen_select_style(&default_token(&design), "");

    // modifiers, base, single layout + 3 sizes, multiple, dropdown, rtl, 3 statuses
    assert_eq!(styles.len(), 12);
    assert!(styles[1].contains_key(".ant-select"));
    assert!(styles[6].contains_key(".ant-select-multiple"));
    assert!(styles[7].contains_key(".ant-select-dropdown"));
    assert!(styles[11].contains_key(".ant-select-status-warning"));
}

#[test]
fn test_status_overwrite_toggles_border() {
    let colors = StatusColors {
        select_cls: ".x-select",
        border_hover_color: "#faad14",
        outline_color: "rgba(250, 173, 20, 0.2)",
        control_outline_width: 2.0,
        control_line_width: 1.0,
    };
    let enabled = "&:not(.x-select-disabled):not(.x-select-customize-input)";

    let on = gen_status_style(".x-select-status-warning", &colors, true);
    let off = gen_status_style(".x-select-status-warning", &colors, false);

    let border = |style: &tokenstyle::CssObject| {
        style
            .object_at(&[".x-select-status-warning", enabled, ".x-select-selector"])
            .and_then(|o| o.get_value("border-color"))
            .and_then(CssValue::as_str)
            .map(str::to_string)
    };
    assert_eq!(border(&on).as_deref(), Some("#faad14"));
    assert_eq!(border(&off), None);
}

#[test]
fn test_stylesheet_is_scoped() {
    let registry = StyleRegistry::default();
    let theme = Theme::new("scoped");
    let style = use_select_style(
        &registry,
        ThemeChoice::Theme(&theme),
        "ant",
        "ant-select",
        "anticon",
    )
    .unwrap();
    let css = style.style.css();
    let scope = format!(".{}", style.hash_id);

    assert!(css.contains(&format!("{}.ant-select{{", scope)));
    assert!(css.contains(&format!("{}.ant-select-borderless", scope)));
    assert!(css.contains(&format!("@keyframes {}-slide-up-in{{", style.hash_id)));
    assert!(css.contains("border:1px solid #d9d9d9;"));
}

#[test]
fn test_z_index_override_reaches_css() {
    let theme = Theme::new("stacked").with_select(SelectOverrides {
        z_index_dropdown: Some(2050.0),
    });
    let design = theme.token().clone();
    let token = SelectToken::new(
        &design,
        theme.components(),
        "ant",
        "ant-select",
        "anticon",
    );
    let css = to_css(&gen_select_style(&token, ""), "");

    assert!(css.contains("z-index:2050;"));
}

#[test]
fn test_custom_prefixes() {
    let design = DesignToken::light();
    let token = SelectToken::new(
        &design,
        &ComponentTokens::default(),
        "my",
        "my-picker",
        "myicon",
    );
    let css = to_css(&gen_select_style(&token, ""), "");

    assert!(css.contains(".my-picker-selector"));
    assert!(css.contains(".my-slide-up-enter"));
    assert!(css.contains("> .myicon"));
    assert!(!css.contains("ant-select"));
}

#[test]
fn test_registration_is_memoized_per_prefix() {
    let registry = StyleRegistry::default();
    let theme = Theme::default();
    let choice = ThemeChoice::Theme(&theme);

    let first = use_select_style(&registry, choice, "ant", "ant-select", "anticon").unwrap();
    let again = use_select_style(&registry, choice, "ant", "ant-select", "anticon").unwrap();
    let other = use_select_style(&registry, choice, "ant", "ant-picker", "anticon").unwrap();

    assert_eq!(first.style.content_hash(), again.style.content_hash());
    assert_eq!(first.style.key(), again.style.key());
    assert_ne!(first.style.key(), other.style.key());
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.with_sink(|sink| sink.len()), 2);
}
