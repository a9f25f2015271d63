//! Theme selection and token lookup.

use super::adaptive::AdaptiveTheme;
use super::theme::Theme;
use crate::style::StyleError;
use crate::token::DesignToken;

/// Either a fixed theme or a light/dark pair picked at lookup time.
#[derive(Debug, Clone, Copy)]
pub enum ThemeChoice<'a> {
    Theme(&'a Theme),
    Adaptive(&'a AdaptiveTheme),
}

impl ThemeChoice<'_> {
    fn resolve(&self) -> Theme {
        match self {
            ThemeChoice::Theme(theme) => (*theme).clone(),
            ThemeChoice::Adaptive(adaptive) => adaptive.resolve(),
        }
    }
}

impl<'a> From<&'a Theme> for ThemeChoice<'a> {
    fn from(theme: &'a Theme) -> Self {
        ThemeChoice::Theme(theme)
    }
}

impl<'a> From<&'a AdaptiveTheme> for ThemeChoice<'a> {
    fn from(adaptive: &'a AdaptiveTheme) -> Self {
        ThemeChoice::Adaptive(adaptive)
    }
}

/// A validated theme together with the hash class scoping its rules.
#[derive(Debug, Clone)]
pub struct ResolvedTheme {
    pub theme: Theme,
    pub hash_id: String,
}

impl ResolvedTheme {
    pub fn token(&self) -> &DesignToken {
        self.theme.token()
    }
}

/// Looks up the concrete theme, tokens and hash id for a theme choice.
///
/// Adaptive themes are resolved through the active color-mode detector. The
/// resolved tokens are validated; a malformed token set is the only way
/// style registration can fail.
///
/// # Example
///
/// ```rust
/// use tokenstyle::{use_token, Theme, ThemeChoice};
///
/// let theme = Theme::new("docs");
/// let resolved = use_token(ThemeChoice::Theme(&theme)).unwrap();
/// assert_eq!(resolved.hash_id, theme.hash_id());
/// ```
pub fn use_token(choice: ThemeChoice<'_>) -> Result<ResolvedTheme, StyleError> {
    let theme = choice.resolve();
    theme.validate()?;
    let hash_id = theme.hash_id();
    Ok(ResolvedTheme { theme, hash_id })
}
