//! Leaf values and nodes of a style rule tree.

use serde::{Serialize, Serializer};

use super::keyframes::Keyframes;
use super::object::CssObject;

/// CSS properties whose numeric values are emitted without a `px` unit.
const UNITLESS_PROPERTIES: &[&str] = &[
    "animation-iteration-count",
    "border-image-outset",
    "border-image-slice",
    "border-image-width",
    "column-count",
    "columns",
    "fill-opacity",
    "flex",
    "flex-grow",
    "flex-shrink",
    "flood-opacity",
    "font-weight",
    "grid-column",
    "grid-column-end",
    "grid-column-start",
    "grid-row",
    "grid-row-end",
    "grid-row-start",
    "line-clamp",
    "line-height",
    "opacity",
    "order",
    "orphans",
    "stop-opacity",
    "stroke-dasharray",
    "stroke-dashoffset",
    "stroke-miterlimit",
    "stroke-opacity",
    "stroke-width",
    "tab-size",
    "widows",
    "z-index",
    "zoom",
];

/// Returns true if numbers assigned to `property` carry no unit.
pub fn is_unitless(property: &str) -> bool {
    UNITLESS_PROPERTIES.contains(&property)
}

/// A single CSS declaration value.
#[derive(Debug, Clone, PartialEq)]
pub enum CssValue {
    /// A number; rendered in pixels unless the property is unitless or the value is zero.
    Number(f64),
    /// A literal string, rendered verbatim.
    Str(String),
}

impl CssValue {
    /// Renders the value as it appears after `property:` in a stylesheet.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tokenstyle::CssValue;
    ///
    /// assert_eq!(CssValue::Number(12.0).to_css("height"), "12px");
    /// assert_eq!(CssValue::Number(1.0).to_css("line-height"), "1");
    /// assert_eq!(CssValue::Number(0.0).to_css("margin"), "0");
    /// ```
    pub fn to_css(&self, property: &str) -> String {
        match self {
            CssValue::Number(n) if *n != 0.0 && !is_unitless(property) => format!("{}px", n),
            CssValue::Number(n) => n.to_string(),
            CssValue::Str(s) => s.clone(),
        }
    }

    /// Returns the numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CssValue::Number(n) => Some(*n),
            CssValue::Str(_) => None,
        }
    }

    /// Returns the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CssValue::Str(s) => Some(s),
            CssValue::Number(_) => None,
        }
    }
}

impl Serialize for CssValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CssValue::Number(n) => serializer.serialize_f64(*n),
            CssValue::Str(s) => serializer.serialize_str(s),
        }
    }
}

/// A node in a style rule tree.
///
/// Keys mapping to [`StyleNode::Value`] are declarations, keys mapping to
/// [`StyleNode::Object`] are nested selectors, and [`StyleNode::Keyframes`]
/// entries register an animation alongside the rule that uses it.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleNode {
    Value(CssValue),
    Object(CssObject),
    Keyframes(Keyframes),
}

impl StyleNode {
    pub fn as_value(&self) -> Option<&CssValue> {
        match self {
            StyleNode::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&CssObject> {
        match self {
            StyleNode::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_keyframes(&self) -> Option<&Keyframes> {
        match self {
            StyleNode::Keyframes(k) => Some(k),
            _ => None,
        }
    }
}

impl Serialize for StyleNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StyleNode::Value(v) => v.serialize(serializer),
            StyleNode::Object(o) => o.serialize(serializer),
            StyleNode::Keyframes(k) => k.serialize(serializer),
        }
    }
}

impl From<CssValue> for StyleNode {
    fn from(value: CssValue) -> Self {
        StyleNode::Value(value)
    }
}

impl From<&str> for StyleNode {
    fn from(value: &str) -> Self {
        StyleNode::Value(CssValue::Str(value.to_string()))
    }
}

impl From<String> for StyleNode {
    fn from(value: String) -> Self {
        StyleNode::Value(CssValue::Str(value))
    }
}

impl From<&String> for StyleNode {
    fn from(value: &String) -> Self {
        StyleNode::Value(CssValue::Str(value.clone()))
    }
}

impl From<f64> for StyleNode {
    fn from(value: f64) -> Self {
        StyleNode::Value(CssValue::Number(value))
    }
}

impl From<i32> for StyleNode {
    fn from(value: i32) -> Self {
        StyleNode::Value(CssValue::Number(f64::from(value)))
    }
}

impl From<CssObject> for StyleNode {
    fn from(value: CssObject) -> Self {
        StyleNode::Object(value)
    }
}

impl From<Keyframes> for StyleNode {
    fn from(value: Keyframes) -> Self {
        StyleNode::Keyframes(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_gets_px() {
        assert_eq!(CssValue::Number(32.0).to_css("height"), "32px");
        assert_eq!(CssValue::Number(-6.0).to_css("margin-top"), "-6px");
        assert_eq!(CssValue::Number(2.5).to_css("width"), "2.5px");
    }

    #[test]
    fn test_unitless_number() {
        assert_eq!(CssValue::Number(1000.0).to_css("z-index"), "1000");
        assert_eq!(CssValue::Number(0.5).to_css("opacity"), "0.5");
        assert_eq!(CssValue::Number(1.5715).to_css("line-height"), "1.5715");
    }

    #[test]
    fn test_zero_has_no_unit() {
        assert_eq!(CssValue::Number(0.0).to_css("padding"), "0");
    }

    #[test]
    fn test_string_verbatim() {
        let value = CssValue::Str("1px solid #d9d9d9".into());
        assert_eq!(value.to_css("border"), "1px solid #d9d9d9");
        assert_eq!(value.as_str(), Some("1px solid #d9d9d9"));
        assert_eq!(value.as_number(), None);
    }

    #[test]
    fn test_node_conversions() {
        assert_eq!(StyleNode::from(4), StyleNode::Value(CssValue::Number(4.0)));
        assert_eq!(
            StyleNode::from("auto"),
            StyleNode::Value(CssValue::Str("auto".into()))
        );
        assert!(StyleNode::from(CssObject::new()).as_object().is_some());
    }
}
