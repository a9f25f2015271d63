//! Design tokens consumed by the component style builders.
//!
//! - [`DesignToken`]: The shared, themeable token record with light and dark presets
//! - [`ComponentTokens`]: Per-component overrides ([`SelectOverrides`], [`SkeletonOverrides`])
//! - [`token_hash`]: A stable digest identifying a token set

mod component;
mod design;

pub use component::{ComponentTokens, SelectOverrides, SkeletonOverrides};
pub use design::DesignToken;

use crate::util::digest_json;

/// Returns a stable hex digest of `token`.
///
/// Equal token sets always hash equally; any changed value yields a different
/// digest.
pub fn token_hash(token: &DesignToken) -> String {
    digest_json(token)
}
