//! Integration tests for the Skeleton style builder.

use proptest::prelude::*;
use tokenstyle::components::skeleton::{
    gen_avatar_size, gen_button_size, gen_input_size, gen_skeleton_style, use_skeleton_style,
    SkeletonToken,
};
use tokenstyle::{
    to_css, ComponentTokens, CssObject, CssValue, DesignToken, SkeletonOverrides, StyleRegistry,
    Theme, ThemeChoice,
};

fn width_and_height(style: &CssObject) -> (f64, f64) {
    let number = |key| style.get_value(key).and_then(CssValue::as_number).unwrap();
    (number("width"), number("height"))
}

#[test]
fn test_builder_is_pure() {
    let design = DesignToken::light();
    let components = ComponentTokens::default();
    let token = SkeletonToken::new(&design, &components, "ant-skeleton");

    assert_eq!(
        gen_skeleton_style(&token, "css-1"),
        gen_skeleton_style(&token, "css-1")
    );
}

#[test]
fn test_active_shimmer_reaches_every_shape() {
    let design = DesignToken::light();
    let token = SkeletonToken::new(&design, &ComponentTokens::default(), "ant-skeleton");
    let css = to_css(&[gen_skeleton_style(&token, "css-1")], "css-1");
    let animation = "animation:css-1-ant-skeleton-loading 1.4s ease infinite;";

    let shimmering: Vec<&str> = css
        .lines()
        .filter(|rule| rule.contains(animation))
        .collect();

    for shape in [
        ".ant-skeleton-content .ant-skeleton-title,",
        ".ant-skeleton-content .ant-skeleton-paragraph > li{",
        ".ant-skeleton-avatar{",
        ".ant-skeleton-button{",
        ".ant-skeleton-input{",
        ".ant-skeleton-image{",
    ] {
        assert!(
            shimmering.iter().any(|rule| {
                rule.starts_with(".css-1.ant-skeleton.ant-skeleton-active") && rule.contains(shape)
            }),
            "missing shimmer on {shape}"
        );
    }
}

#[test]
fn test_shortened_last_line_needs_three_items() {
    let design = DesignToken::light();
    let token = SkeletonToken::new(&design, &ComponentTokens::default(), "ant-skeleton");
    let css = to_css(&[gen_skeleton_style(&token, "")], "");

    assert!(css.contains(
        ".ant-skeleton .ant-skeleton-content .ant-skeleton-paragraph> li:last-child:not(:first-child):not(:nth-child(2)){width:61%;}"
    ));
}

#[test]
fn test_overrides_change_colors() {
    let theme = Theme::new("soft").with_skeleton(SkeletonOverrides {
        skeleton_color: Some("rgba(0,0,0,0.06)".into()),
        ..Default::default()
    });
    let registry = StyleRegistry::default();
    let style = use_skeleton_style(&registry, ThemeChoice::Theme(&theme), "ant-skeleton").unwrap();

    assert!(style.style.css().contains("background:rgba(0,0,0,0.06);"));
    assert!(!style.style.css().contains("rgba(190,190,190,0.2)"));
}

#[test]
fn test_custom_prefix_names_keyframes() {
    let registry = StyleRegistry::default();
    let theme = Theme::default();
    let style = use_skeleton_style(&registry, ThemeChoice::Theme(&theme), "app-loading").unwrap();

    assert!(style
        .style
        .css()
        .contains(&format!("@keyframes {}-app-loading-loading{{", style.hash_id)));
}

proptest! {
    #[test]
    fn test_size_helpers_strictly_increase(
        base in 1.0f64..200.0,
        small_step in 0.5f64..40.0,
        large_step in 0.5f64..40.0,
    ) {
        let sizes = [base, base + small_step, base + small_step + large_step];

        for helper in [gen_avatar_size, gen_button_size, gen_input_size] {
            let dims: Vec<(f64, f64)> = sizes
                .iter()
                .map(|&size| width_and_height(&helper(size)))
                .collect();

            prop_assert!(dims.windows(2).all(|w| w[0].0 < w[1].0 && w[0].1 < w[1].1));
        }
    }

    #[test]
    fn test_size_helpers_keep_aspect(size in 1.0f64..500.0) {
        prop_assert_eq!(width_and_height(&gen_avatar_size(size)), (size, size));
        prop_assert_eq!(width_and_height(&gen_button_size(size)), (size * 2.0, size));
        prop_assert_eq!(width_and_height(&gen_input_size(size)), (size * 5.0, size));
    }
}
