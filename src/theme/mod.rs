//! Theme system for selecting the token set styles are generated from.
//!
//! This module provides:
//!
//! - [`Theme`]: A named token set with fluent builder API and file loading
//! - [`AdaptiveTheme`]: Light/dark theme pairs with OS detection
//! - [`ThemeChoice`]: Reference type for selecting themes at registration time
//! - [`ColorMode`]: Light or dark color mode enum
//! - [`use_token`]: Resolves a choice into validated tokens and a hash id

mod adaptive;
mod choice;
mod config;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{set_theme_detector, AdaptiveTheme, ColorMode};
pub use choice::{use_token, ResolvedTheme, ThemeChoice};
pub use theme::Theme;
