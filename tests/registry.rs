//! Integration tests for memoized registration.

use std::cell::Cell;

use serial_test::serial;
use tokenstyle::components::select::use_select_style;
use tokenstyle::components::skeleton::use_skeleton_style;
use tokenstyle::{
    set_theme_detector, AdaptiveTheme, ColorMode, CssObject, DesignToken, StyleInfo,
    StyleRegistry, StyleSink, Theme, ThemeChoice,
};

/// Sink recording every injected key.
#[derive(Debug, Default)]
struct RecordingSink {
    keys: Vec<String>,
}

impl StyleSink for RecordingSink {
    fn inject(&mut self, key: &str, _css: &str) {
        self.keys.push(key.to_string());
    }
}

#[test]
fn test_builder_runs_once_per_key() {
    let registry = StyleRegistry::new(RecordingSink::default());
    let theme = Theme::default();
    let hash_id = theme.hash_id();
    let info = StyleInfo {
        theme: &theme,
        hash_id: &hash_id,
        path: &["demo"],
    };
    let calls = Cell::new(0);

    for _ in 0..3 {
        registry.register(info, || {
            calls.set(calls.get() + 1);
            vec![CssObject::new().add(".demo", CssObject::new().add("margin", 4))]
        });
    }

    assert_eq!(calls.get(), 1);
    assert_eq!(registry.with_sink(|sink| sink.keys.len()), 1);
}

#[test]
fn test_themes_register_separately() {
    let registry = StyleRegistry::new(RecordingSink::default());
    let light = Theme::new("light");
    let dark = Theme::dark("dark");

    let a = use_skeleton_style(&registry, ThemeChoice::Theme(&light), "ant-skeleton").unwrap();
    let b = use_skeleton_style(&registry, ThemeChoice::Theme(&dark), "ant-skeleton").unwrap();

    assert_ne!(a.hash_id, b.hash_id);
    assert_ne!(a.style.key(), b.style.key());
    let injected = registry.with_sink(|sink| sink.keys.clone());
    assert_eq!(injected, vec![a.style.key(), b.style.key()]);
}

#[test]
fn test_changed_tokens_under_same_id_register_separately() {
    let registry = StyleRegistry::default();
    let base = Theme::new("brand");
    let tweaked = Theme::new("brand").with_token(DesignToken {
        color_primary_hover: "#9254de".into(),
        ..DesignToken::light()
    });

    let a = use_select_style(&registry, (&base).into(), "ant", "ant-select", "anticon").unwrap();
    let b = use_select_style(&registry, (&tweaked).into(), "ant", "ant-select", "anticon").unwrap();

    assert_ne!(a.style.content_hash(), b.style.content_hash());
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_invalid_theme_propagates_error() {
    let registry = StyleRegistry::default();
    let broken = Theme::new("broken").with_token(DesignToken {
        control_height: 0.0,
        ..DesignToken::light()
    });

    let err = use_select_style(&registry, (&broken).into(), "ant", "ant-select", "anticon")
        .unwrap_err();

    assert!(err.to_string().contains("controlHeight"));
    assert!(registry.is_empty());
}

#[test]
fn test_clear_forces_reinjection() {
    let registry = StyleRegistry::new(RecordingSink::default());
    let theme = Theme::default();

    use_skeleton_style(&registry, (&theme).into(), "ant-skeleton").unwrap();
    registry.clear();
    use_skeleton_style(&registry, (&theme).into(), "ant-skeleton").unwrap();

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.with_sink(|sink| sink.keys.len()), 2);
}

#[test]
#[serial]
fn test_global_registry_is_shared() {
    let theme = Theme::new("global-shared");
    let first = use_skeleton_style(StyleRegistry::global(), (&theme).into(), "g-skeleton").unwrap();
    let second =
        use_skeleton_style(StyleRegistry::global(), (&theme).into(), "g-skeleton").unwrap();

    assert!(std::sync::Arc::ptr_eq(&first.style, &second.style));
    assert!(StyleRegistry::global().contains(first.style.key()));
}

#[test]
#[serial]
fn test_adaptive_theme_follows_detector() {
    let adaptive = AdaptiveTheme::new(Theme::new("day"), Theme::dark("night"));
    let registry = StyleRegistry::default();

    set_theme_detector(|| ColorMode::Dark);
    let dark = use_skeleton_style(&registry, ThemeChoice::Adaptive(&adaptive), "ant-skeleton")
        .unwrap();

    set_theme_detector(|| ColorMode::Light);
    let light = use_skeleton_style(&registry, ThemeChoice::Adaptive(&adaptive), "ant-skeleton")
        .unwrap();

    assert_eq!(dark.hash_id, adaptive.for_mode(ColorMode::Dark).hash_id());
    assert_eq!(light.hash_id, adaptive.for_mode(ColorMode::Light).hash_id());
    assert_eq!(registry.len(), 2);
}
