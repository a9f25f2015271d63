//! Theme struct pairing an identity with a token set.

use serde::Serialize;

use crate::style::StyleError;
use crate::token::{ComponentTokens, DesignToken, SelectOverrides, SkeletonOverrides};
use crate::util::digest_json;

/// A named design token set used when generating component styles.
///
/// The id identifies the theme in the style cache; the tokens and component
/// overrides determine the generated rules and the hash class that scopes
/// them.
///
/// # Example
///
/// ```rust
/// use tokenstyle::{DesignToken, SelectOverrides, Theme};
///
/// let theme = Theme::new("brand")
///     .with_token(DesignToken {
///         color_primary_hover: "#9254de".into(),
///         ..DesignToken::light()
///     })
///     .with_select(SelectOverrides {
///         z_index_dropdown: Some(2000.0),
///     });
///
/// assert_eq!(theme.id(), "brand");
/// assert!(theme.hash_id().starts_with("css-"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    id: String,
    token: DesignToken,
    components: ComponentTokens,
}

impl Theme {
    /// Creates a theme using the light token preset.
    pub fn new(id: impl Into<String>) -> Self {
        Self::from_token(id, DesignToken::light())
    }

    /// Creates a theme using the dark token preset.
    pub fn dark(id: impl Into<String>) -> Self {
        Self::from_token(id, DesignToken::dark())
    }

    /// Creates a theme from an existing token set.
    pub fn from_token(id: impl Into<String>, token: DesignToken) -> Self {
        Self {
            id: id.into(),
            token,
            components: ComponentTokens::default(),
        }
    }

    /// Replaces the token set, returning an updated theme for chaining.
    pub fn with_token(mut self, token: DesignToken) -> Self {
        self.token = token;
        self
    }

    /// Replaces every component override.
    pub fn with_components(mut self, components: ComponentTokens) -> Self {
        self.components = components;
        self
    }

    pub fn with_select(mut self, overrides: SelectOverrides) -> Self {
        self.components.select = overrides;
        self
    }

    pub fn with_skeleton(mut self, overrides: SkeletonOverrides) -> Self {
        self.components.skeleton = overrides;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn token(&self) -> &DesignToken {
        &self.token
    }

    pub fn components(&self) -> &ComponentTokens {
        &self.components
    }

    /// Returns a digest of the tokens and overrides (the id is not included).
    pub fn fingerprint(&self) -> String {
        digest_json(&(&self.token, &self.components))
    }

    /// Returns the class name scoping rules generated for this theme.
    pub fn hash_id(&self) -> String {
        format!("css-{}", &self.fingerprint()[..8])
    }

    /// Validates the tokens and component overrides.
    ///
    /// This is called automatically before styles are registered, but can be
    /// called explicitly for early error detection.
    pub fn validate(&self) -> Result<(), StyleError> {
        self.token.validate()?;
        self.components.validate()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("default")
    }
}
