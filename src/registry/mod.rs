//! Style registration and caching.
//!
//! - [`StyleRegistry`]: Compute-or-fetch cache of generated stylesheets
//! - [`StyleSink`]: Destination receiving each stylesheet once
//! - [`MemorySink`]: In-memory sink used by the global registry
//! - [`ComponentStyle`]: What a component registration hands back

mod cache;
mod sink;

use std::sync::Arc;

pub use cache::{RegisteredStyle, StyleInfo, StyleRegistry};
pub use sink::{MemorySink, StyleSink};

/// Result of registering a component's styles.
///
/// `hash_id` is the class to attach to the component's root element; `style`
/// is the shared cache entry holding the rule trees, the stylesheet and its
/// content hash.
#[derive(Debug, Clone)]
pub struct ComponentStyle {
    pub hash_id: String,
    pub style: Arc<RegisteredStyle>,
}
