//! Component style builders.
//!
//! Each component pairs a token type deriving its class selectors and sizes
//! from the shared [`DesignToken`](crate::DesignToken), pure `gen_*` builders
//! producing [`CssObject`](crate::CssObject) trees, and a `use_*_style` entry
//! point that registers the result with a [`StyleRegistry`](crate::StyleRegistry).

pub mod select;
pub mod skeleton;
