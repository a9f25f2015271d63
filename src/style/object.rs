//! Ordered, nested CSS object used as the style rule tree.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::value::{CssValue, StyleNode};

/// An insertion-ordered mapping from keys to [`StyleNode`]s.
///
/// A key is either a CSS property (kebab-case) holding a value, or a selector
/// holding a nested object. Nested selectors may reference their parent with
/// `&`; keys without `&` are treated as descendants of the parent.
///
/// Adding a key that already exists replaces its value but keeps its original
/// position, matching object-spread semantics.
///
/// # Example
///
/// ```rust
/// use tokenstyle::CssObject;
///
/// let rule = CssObject::new()
///     .add("position", "relative")
///     .add("height", 32)
///     .add("&:hover", CssObject::new().add("opacity", 1));
///
/// assert_eq!(rule.len(), 3);
/// assert!(rule.get_object("&:hover").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CssObject {
    entries: Vec<(String, StyleNode)>,
}

impl CssObject {
    /// Creates an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, returning the updated object for chaining.
    pub fn add<K: Into<String>, V: Into<StyleNode>>(mut self, key: K, value: V) -> Self {
        self.insert(key.into(), value.into());
        self
    }

    /// Merges every entry of `other` into this object, later values winning.
    pub fn extend(mut self, other: CssObject) -> Self {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
        self
    }

    fn insert(&mut self, key: String, value: StyleNode) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the node stored under `key`.
    pub fn get(&self, key: &str) -> Option<&StyleNode> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    /// Returns the declaration value stored under `key`.
    pub fn get_value(&self, key: &str) -> Option<&CssValue> {
        self.get(key).and_then(StyleNode::as_value)
    }

    /// Returns the nested object stored under `key`.
    pub fn get_object(&self, key: &str) -> Option<&CssObject> {
        self.get(key).and_then(StyleNode::as_object)
    }

    /// Walks nested objects along `path`.
    pub fn object_at(&self, path: &[&str]) -> Option<&CssObject> {
        path.iter()
            .try_fold(self, |current, key| current.get_object(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleNode)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for CssObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
