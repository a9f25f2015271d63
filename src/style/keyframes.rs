//! Named keyframe animations.

use serde::Serialize;

use super::object::CssObject;

/// A named `@keyframes` animation.
///
/// Keyframes are placed in a rule tree next to the declarations that use them;
/// the serializer emits each distinct animation once. When a theme hash id is
/// in effect the emitted name is prefixed with it, so animations from
/// different themes never collide.
///
/// # Example
///
/// ```rust
/// use tokenstyle::{CssObject, Keyframes};
///
/// let fade = Keyframes::new(
///     "fade",
///     CssObject::new()
///         .add("0%", CssObject::new().add("opacity", 0))
///         .add("100%", CssObject::new().add("opacity", 1)),
/// );
/// assert_eq!(fade.name_with_hash("css-1a2b3c4d"), "css-1a2b3c4d-fade");
/// assert_eq!(fade.name_with_hash(""), "fade");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keyframes {
    name: String,
    frames: CssObject,
}

impl Keyframes {
    pub fn new(name: impl Into<String>, frames: CssObject) -> Self {
        Self {
            name: name.into(),
            frames,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Frame selectors (`0%`, `100%`, ...) mapped to their declarations.
    pub fn frames(&self) -> &CssObject {
        &self.frames
    }

    /// Returns the animation name scoped by `hash_id`.
    pub fn name_with_hash(&self, hash_id: &str) -> String {
        if hash_id.is_empty() {
            self.name.clone()
        } else {
            format!("{}-{}", hash_id, self.name)
        }
    }
}
