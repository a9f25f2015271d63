//! Destinations for generated stylesheets.

/// Receives each generated stylesheet once, at first registration.
///
/// The registry calls [`inject`](Self::inject) exactly once per cache key, so
/// implementations can append without deduplicating.
pub trait StyleSink: Send {
    /// Stores the stylesheet `css` generated for cache entry `key`.
    fn inject(&mut self, key: &str, css: &str);
}

/// An in-memory sink keeping sheets in injection order.
///
/// # Example
///
/// ```rust
/// use tokenstyle::{MemorySink, StyleSink};
///
/// let mut sink = MemorySink::new();
/// sink.inject("a", ".a{color:red;}");
/// sink.inject("b", ".b{color:blue;}");
/// assert_eq!(sink.stylesheet(), ".a{color:red;}\n.b{color:blue;}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    sheets: Vec<(String, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Injected `(key, css)` pairs, oldest first.
    pub fn sheets(&self) -> &[(String, String)] {
        &self.sheets
    }

    /// Concatenates every injected sheet into one stylesheet.
    pub fn stylesheet(&self) -> String {
        self.sheets
            .iter()
            .map(|(_, css)| css.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn clear(&mut self) {
        self.sheets.clear();
    }
}

impl StyleSink for MemorySink {
    fn inject(&mut self, key: &str, css: &str) {
        self.sheets.push((key.to_string(), css.to_string()));
    }
}
