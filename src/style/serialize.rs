//! Flattens style rule trees into stylesheet text.
//!
//! Nested objects are resolved against their parent selector:
//!
//! - a child key containing `&` has every `&` replaced by the parent selector
//!   (`&:hover`, `&-borderless .x`, `.x-focused&`);
//! - any other child key becomes a descendant (`parent child`);
//! - comma-separated lists on either side expand to every combination.
//!
//! Top-level selectors receive the theme hash class on their first compound
//! selector, so `.ant-select .ant-select-arrow` becomes
//! `.css-1a2b3c4d.ant-select .ant-select-arrow`.
//!
//! Declarations of a block are emitted before the rules nested inside it, and
//! each keyframe animation is emitted once under its hashed name.

use std::collections::HashSet;

use tracing::warn;

use super::keyframes::Keyframes;
use super::object::CssObject;
use super::value::StyleNode;

/// Serializes `trees` into CSS, scoping top-level selectors with `hash_id`.
///
/// Pass an empty `hash_id` to emit unscoped selectors.
///
/// # Example
///
/// ```rust
/// use tokenstyle::{to_css, CssObject};
///
/// let tree = CssObject::new().add(
///     ".btn",
///     CssObject::new()
///         .add("height", 32)
///         .add("&:hover", CssObject::new().add("opacity", 1)),
/// );
///
/// let css = to_css(&[tree], "css-abc");
/// assert_eq!(css, ".css-abc.btn{height:32px;}\n.css-abc.btn:hover{opacity:1;}");
/// ```
pub fn to_css(trees: &[CssObject], hash_id: &str) -> String {
    let mut writer = CssWriter {
        hash_id,
        rules: Vec::new(),
        keyframes: HashSet::new(),
    };

    for tree in trees {
        for (key, node) in tree.iter() {
            match node {
                StyleNode::Object(obj) => {
                    let selector = inject_selector_hash(key, hash_id);
                    writer.block(&selector, obj);
                }
                StyleNode::Keyframes(frames) => writer.keyframes(frames),
                StyleNode::Value(_) => {
                    warn!(property = key, "ignoring top-level declaration without a selector");
                }
            }
        }
    }

    writer.rules.join("\n")
}

struct CssWriter<'a> {
    hash_id: &'a str,
    rules: Vec<String>,
    keyframes: HashSet<String>,
}

impl CssWriter<'_> {
    fn block(&mut self, selector: &str, obj: &CssObject) {
        let mut declarations = String::new();
        let mut nested = Vec::new();

        for (key, node) in obj.iter() {
            match node {
                StyleNode::Value(value) => {
                    declarations.push_str(&format!("{}:{};", key, value.to_css(key)));
                }
                StyleNode::Object(child) => nested.push((join_selector(selector, key), child)),
                StyleNode::Keyframes(frames) => self.keyframes(frames),
            }
        }

        if !declarations.is_empty() {
            self.rules.push(format!("{}{{{}}}", selector, declarations));
        }
        for (child_selector, child) in nested {
            self.block(&child_selector, child);
        }
    }

    fn keyframes(&mut self, frames: &Keyframes) {
        let name = frames.name_with_hash(self.hash_id);
        if !self.keyframes.insert(name.clone()) {
            return;
        }

        let mut body = String::new();
        for (step, node) in frames.frames().iter() {
            if let StyleNode::Object(obj) = node {
                body.push_str(step);
                body.push('{');
                for (property, value) in obj.iter() {
                    if let StyleNode::Value(value) = value {
                        body.push_str(&format!("{}:{};", property, value.to_css(property)));
                    }
                }
                body.push('}');
            }
        }
        self.rules.push(format!("@keyframes {}{{{}}}", name, body));
    }
}

/// Splits a selector list on top-level commas, ignoring commas inside parentheses.
fn split_selector_list(selector: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in selector.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(selector[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(selector[start..].trim());
    parts.retain(|p| !p.is_empty());
    parts
}

/// Resolves a nested key against its parent selector.
pub(crate) fn join_selector(parent: &str, child: &str) -> String {
    let parents = split_selector_list(parent);
    let children = split_selector_list(child);

    let mut joined = Vec::with_capacity(parents.len() * children.len());
    for p in &parents {
        for c in &children {
            if c.contains('&') {
                joined.push(c.replace('&', p));
            } else {
                joined.push(format!("{} {}", p, c));
            }
        }
    }
    joined.join(",")
}

/// Adds the `.{hash_id}` class to the first compound selector of each list item.
pub(crate) fn inject_selector_hash(selector: &str, hash_id: &str) -> String {
    if hash_id.is_empty() {
        return selector.to_string();
    }

    split_selector_list(selector)
        .into_iter()
        .map(|part| {
            let mut paths = part.split_whitespace();
            let first = paths.next().unwrap_or_default();
            let element_len = first
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(first.len());
            let (element, rest) = first.split_at(element_len);

            let mut scoped = format!("{}.{}{}", element, hash_id, rest);
            for path in paths {
                scoped.push(' ');
                scoped.push_str(path);
            }
            scoped
        })
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_descendant() {
        assert_eq!(join_selector(".a", ".b"), ".a .b");
        assert_eq!(join_selector(".a", "> li"), ".a > li");
    }

    #[test]
    fn test_join_ampersand_replaces_every_occurrence() {
        assert_eq!(
            join_selector(".sel", "&:not(&-customize-input) .sel-selector"),
            ".sel:not(.sel-customize-input) .sel-selector"
        );
        assert_eq!(join_selector(".sel", "&&-in-form-item"), ".sel.sel-in-form-item");
        assert_eq!(join_selector(".x .y", ".x-focused&"), ".x-focused.x .y");
    }

    #[test]
    fn test_join_cross_product() {
        assert_eq!(
            join_selector(".a, .b", ".c, &:hover"),
            ".a .c,.a:hover,.b .c,.b:hover"
        );
    }

    #[test]
    fn test_split_ignores_commas_in_parentheses() {
        assert_eq!(
            split_selector_list(":is(.a, .b) li, .c"),
            vec![":is(.a, .b) li", ".c"]
        );
    }

    #[test]
    fn test_inject_hash_class() {
        assert_eq!(
            inject_selector_hash(".ant-select", "css-1"),
            ".css-1.ant-select"
        );
        assert_eq!(
            inject_selector_hash(".a .b, li.c", "css-1"),
            ".css-1.a .b,li.css-1.c"
        );
        assert_eq!(inject_selector_hash(".a", ""), ".a");
    }

    #[test]
    fn test_declarations_before_nested_rules() {
        let tree = CssObject::new().add(
            ".a",
            CssObject::new()
                .add(".b", CssObject::new().add("color", "red"))
                .add("width", "100%"),
        );
        assert_eq!(to_css(&[tree], ""), ".a{width:100%;}\n.a .b{color:red;}");
    }

    #[test]
    fn test_empty_blocks_are_skipped() {
        let tree = CssObject::new().add(
            ".a",
            CssObject::new().add(".b", CssObject::new().add("color", "red")),
        );
        assert_eq!(to_css(&[tree], ""), ".a .b{color:red;}");
    }

    #[test]
    fn test_keyframes_emitted_once_with_hash() {
        let frames = Keyframes::new(
            "pulse",
            CssObject::new()
                .add("0%", CssObject::new().add("opacity", 0))
                .add("100%", CssObject::new().add("opacity", 1)),
        );
        let tree = CssObject::new()
            .add(".a", CssObject::new().add("pulse", frames.clone()))
            .add(".b", CssObject::new().add("pulse", frames));

        let css = to_css(&[tree], "css-9");
        assert_eq!(css.matches("@keyframes").count(), 1);
        assert!(css.contains("@keyframes css-9-pulse{0%{opacity:0;}100%{opacity:1;}}"));
    }

    #[test]
    fn test_top_level_value_is_ignored() {
        let tree = CssObject::new()
            .add("color", "red")
            .add(".a", CssObject::new().add("color", "blue"));
        assert_eq!(to_css(&[tree], ""), ".a{color:blue;}");
    }
}
