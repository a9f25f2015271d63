//! Themeable, scoped component styles generated from design tokens.
//!
//! Component styles are described as nested rule trees ([`CssObject`]) built by
//! pure functions of a token record. A registry serializes each tree to CSS
//! once per theme and component, scoping selectors with a hash class derived
//! from the theme's tokens.
//!
//! # Modules
//!
//! - [`style`]: Rule trees, keyframes, resets and CSS serialization
//! - [`token`]: The design token record and per-component overrides
//! - [`theme`]: Themes, light/dark pairs and YAML/JSON theme files
//! - [`registry`]: Memoized registration and style sinks
//! - [`components`]: Select and Skeleton builders
//!
//! # Example
//!
//! ```rust
//! use tokenstyle::components::select::use_select_style;
//! use tokenstyle::components::skeleton::use_skeleton_style;
//! use tokenstyle::{StyleRegistry, Theme, ThemeChoice};
//!
//! let registry = StyleRegistry::default();
//! let theme = Theme::dark("night");
//! let choice = ThemeChoice::Theme(&theme);
//!
//! let select = use_select_style(&registry, choice, "ant", "ant-select", "anticon").unwrap();
//! let skeleton = use_skeleton_style(&registry, choice, "ant-skeleton").unwrap();
//!
//! // Both components share the theme's hash class
//! assert_eq!(select.hash_id, skeleton.hash_id);
//! assert_eq!(registry.len(), 2);
//!
//! // The sink received one stylesheet per registration
//! let sheet = registry.with_sink(|sink| sink.stylesheet());
//! assert!(sheet.contains(&format!(".{}.ant-select", select.hash_id)));
//! ```

pub mod components;
pub mod registry;
pub mod style;
pub mod theme;
pub mod token;
mod util;

pub use registry::{
    ComponentStyle, MemorySink, RegisteredStyle, StyleInfo, StyleRegistry, StyleSink,
};
pub use style::{
    is_unitless, reset_component, reset_icon, to_css, CssObject, CssValue, Keyframes,
    StyleError, StyleNode,
};
pub use theme::{
    set_theme_detector, use_token, AdaptiveTheme, ColorMode, ResolvedTheme, Theme, ThemeChoice,
};
pub use token::{token_hash, ComponentTokens, DesignToken, SelectOverrides, SkeletonOverrides};
pub use util::hex_digest;
