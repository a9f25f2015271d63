//! Select (dropdown picker) styles.
//!
//! [`gen_select_style`] assembles the full rule list from its parts:
//!
//! | Part | Rules |
//! |------|-------|
//! | modifiers | borderless, in-form-item |
//! | base | selector box, search input, selection text, arrow, clear, feedback |
//! | single | single-value layout and sizes |
//! | multiple | tag layout |
//! | dropdown | popup, animation, options |
//! | rtl | direction |
//! | status | default, error and warning focus/hover colors |
//!
//! [`use_select_style`] registers the result once per theme and prefixes.

mod base;
mod dropdown;
mod multiple;
mod single;
mod status;
mod token;

pub use base::{gen_base_style, gen_modifier_style, gen_rtl_style};
pub use dropdown::gen_dropdown_style;
pub use multiple::gen_multiple_style;
pub use single::gen_single_style;
pub use status::{gen_status_style, gen_status_styles, StatusColors};
pub use token::SelectToken;

use crate::registry::{ComponentStyle, StyleInfo, StyleRegistry, StyleSink};
use crate::style::{CssObject, StyleError};
use crate::theme::{use_token, ThemeChoice};

/// Builds every Select rule for `token`, in cascade order.
pub fn gen_select_style(token: &SelectToken<'_>, hash_id: &str) -> Vec<CssObject> {
    let mut styles = vec![gen_modifier_style(token), gen_base_style(token)];
    styles.extend(gen_single_style(token));
    styles.push(gen_multiple_style(token));
    styles.push(gen_dropdown_style(token, hash_id));
    styles.push(gen_rtl_style(token));
    styles.extend(gen_status_styles(token));
    styles
}

/// Registers Select styles for a theme and returns the hash class to apply.
///
/// The builder runs only the first time a given theme and set of prefixes is
/// seen by `registry`; later calls return the cached entry.
///
/// # Errors
///
/// Returns an error if the theme's tokens are invalid.
///
/// # Example
///
/// ```rust
/// use tokenstyle::components::select::use_select_style;
/// use tokenstyle::{StyleRegistry, Theme, ThemeChoice};
///
/// let registry = StyleRegistry::default();
/// let theme = Theme::default();
///
/// let style = use_select_style(
///     &registry,
///     ThemeChoice::Theme(&theme),
///     "ant",
///     "ant-select",
///     "anticon",
/// )
/// .unwrap();
///
/// assert_eq!(style.hash_id, theme.hash_id());
/// assert!(style.style.css().contains(".ant-select-arrow"));
/// ```
pub fn use_select_style<S: StyleSink>(
    registry: &StyleRegistry<S>,
    theme: ThemeChoice<'_>,
    root_prefix_cls: &str,
    prefix_cls: &str,
    icon_prefix_cls: &str,
) -> Result<ComponentStyle, StyleError> {
    let resolved = use_token(theme)?;
    let path = [prefix_cls, root_prefix_cls, icon_prefix_cls];
    let info = StyleInfo {
        theme: &resolved.theme,
        hash_id: &resolved.hash_id,
        path: &path,
    };

    let style = registry.register(info, || {
        let select_token = SelectToken::new(
            resolved.theme.token(),
            resolved.theme.components(),
            root_prefix_cls,
            prefix_cls,
            icon_prefix_cls,
        );
        gen_select_style(&select_token, &resolved.hash_id)
    });

    Ok(ComponentStyle {
        hash_id: resolved.hash_id,
        style,
    })
}
