//! Style rule trees and their supporting primitives.
//!
//! This module provides:
//!
//! - [`CssObject`]: An ordered, nested mapping of selectors and declarations
//! - [`CssValue`] / [`StyleNode`]: Leaves and nodes of that tree
//! - [`Keyframes`]: Named animations referenced from declarations
//! - [`reset_component`] / [`reset_icon`]: Shared reset fragments
//! - [`to_css`]: Flattening of trees into stylesheet text
//! - [`StyleError`]: Errors from theme and token resolution

mod error;
mod keyframes;
mod object;
mod reset;
mod serialize;
mod value;

pub use error::StyleError;
pub use keyframes::Keyframes;
pub use object::CssObject;
pub use reset::{reset_component, reset_icon};
pub use serialize::to_css;
pub use value::{is_unitless, CssValue, StyleNode};
