//! Memoized style registration.
//!
//! This module provides [`StyleRegistry`], which turns style builders into
//! stylesheets at most once per theme and component.
//!
//! # Design
//!
//! Registration is a single compute-or-fetch step:
//!
//! 1. **Lookup**: A cache key is derived from the theme id, the theme
//!    fingerprint (tokens plus component overrides) and the component path
//! 2. **Build**: On a miss the builder runs, its trees are serialized, and the
//!    resulting CSS is injected into the registry's [`StyleSink`]
//!
//! A hit returns the cached [`RegisteredStyle`] without calling the builder, so
//! re-registering the same component under the same theme is idempotent.
//!
//! # Cache Keys
//!
//! | Part | Example | Changes when |
//! |------|---------|--------------|
//! | Theme id | `default` | a different theme is selected |
//! | Fingerprint | `3f5a...` | any token or override changes |
//! | Path | `ant-select` | a different component or prefix is styled |
//!
//! # Thread Safety
//!
//! Entries and the sink live behind one mutex, which is held while a builder
//! runs. Builders are pure and never re-enter the registry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;
use tracing::{debug, info};

use super::sink::{MemorySink, StyleSink};
use crate::style::{to_css, CssObject};
use crate::theme::Theme;
use crate::util::hex_digest;

/// Number of hex characters kept from the CSS digest.
const CONTENT_HASH_LEN: usize = 16;

static GLOBAL_REGISTRY: Lazy<StyleRegistry> = Lazy::new(StyleRegistry::default);

/// Identifies what is being registered.
#[derive(Debug, Clone, Copy)]
pub struct StyleInfo<'a> {
    /// The resolved theme the builder reads its tokens from.
    pub theme: &'a Theme,
    /// Hash class scoping the generated selectors.
    pub hash_id: &'a str,
    /// Component identity, usually its class-name prefixes.
    pub path: &'a [&'a str],
}

impl StyleInfo<'_> {
    /// Returns the cache key for this registration.
    pub fn cache_key(&self) -> String {
        format!(
            "{}|{}|{}",
            self.theme.id(),
            self.theme.fingerprint(),
            self.path.join("|")
        )
    }
}

/// A registered stylesheet and the trees it was generated from.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredStyle {
    key: String,
    hash_id: String,
    trees: Vec<CssObject>,
    css: String,
    content_hash: String,
}

impl RegisteredStyle {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn hash_id(&self) -> &str {
        &self.hash_id
    }

    /// The style rule trees returned by the builder.
    pub fn trees(&self) -> &[CssObject] {
        &self.trees
    }

    /// The serialized, hash-scoped stylesheet.
    pub fn css(&self) -> &str {
        &self.css
    }

    /// Digest of [`css`](Self::css); equal content always yields the same hash.
    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }
}

/// Registry caching generated styles by theme and component.
///
/// # Example
///
/// ```rust
/// use tokenstyle::{CssObject, MemorySink, StyleInfo, StyleRegistry, Theme};
///
/// let registry = StyleRegistry::new(MemorySink::new());
/// let theme = Theme::default();
/// let hash_id = theme.hash_id();
/// let info = StyleInfo { theme: &theme, hash_id: &hash_id, path: &["demo"] };
///
/// let first = registry.register(info, || {
///     vec![CssObject::new().add(".demo", CssObject::new().add("color", "red"))]
/// });
/// let again = registry.register(info, || unreachable!("cached"));
///
/// assert_eq!(first.content_hash(), again.content_hash());
/// assert_eq!(registry.with_sink(|sink| sink.len()), 1);
/// ```
#[derive(Debug)]
pub struct StyleRegistry<S: StyleSink = MemorySink> {
    inner: Mutex<Inner<S>>,
}

#[derive(Debug)]
struct Inner<S> {
    entries: HashMap<String, Arc<RegisteredStyle>>,
    sink: S,
}

impl<S: StyleSink> StyleRegistry<S> {
    /// Creates an empty registry writing into `sink`.
    pub fn new(sink: S) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                sink,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<S>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the cached style for `info`, building and injecting it on first use.
    pub fn register<F>(&self, info: StyleInfo<'_>, build: F) -> Arc<RegisteredStyle>
    where
        F: FnOnce() -> Vec<CssObject>,
    {
        let key = info.cache_key();
        let mut inner = self.lock();

        if let Some(existing) = inner.entries.get(&key) {
            debug!(key = %key, "style cache hit");
            return Arc::clone(existing);
        }

        let trees = build();
        let css = to_css(&trees, info.hash_id);
        let mut content_hash = hex_digest(css.as_bytes());
        content_hash.truncate(CONTENT_HASH_LEN);

        inner.sink.inject(&key, &css);
        info!(
            theme = info.theme.id(),
            path = %info.path.join("/"),
            content_hash = %content_hash,
            rules = trees.len(),
            "registered component style"
        );

        let style = Arc::new(RegisteredStyle {
            key: key.clone(),
            hash_id: info.hash_id.to_string(),
            trees,
            css,
            content_hash,
        });
        inner.entries.insert(key, Arc::clone(&style));
        style
    }

    /// Returns a previously registered style by cache key.
    pub fn get(&self, key: &str) -> Option<Arc<RegisteredStyle>> {
        self.lock().entries.get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().entries.contains_key(key)
    }

    /// Number of registered (theme, component) entries.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Forgets every cached entry; the next registration rebuilds and re-injects.
    pub fn clear(&self) {
        self.lock().entries.clear();
    }

    /// Runs `f` with shared access to the sink.
    pub fn with_sink<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.lock().sink)
    }

    /// Runs `f` with exclusive access to the sink.
    pub fn with_sink_mut<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.lock().sink)
    }
}

impl StyleRegistry<MemorySink> {
    /// The process-wide registry backed by an in-memory sink.
    pub fn global() -> &'static StyleRegistry {
        &GLOBAL_REGISTRY
    }
}

impl Default for StyleRegistry<MemorySink> {
    fn default() -> Self {
        Self::new(MemorySink::new())
    }
}
