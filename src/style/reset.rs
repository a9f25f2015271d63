//! Shared reset fragments spread into component rules.

use super::object::CssObject;
use crate::token::DesignToken;

/// Baseline box, typography and list reset for a component root.
pub fn reset_component(token: &DesignToken) -> CssObject {
    CssObject::new()
        .add("box-sizing", "border-box")
        .add("margin", 0)
        .add("padding", 0)
        .add("color", &token.color_text)
        .add("font-size", token.font_size)
        .add("line-height", token.line_height)
        .add("list-style", "none")
        .add("font-family", &token.font_family)
}

/// Normalizes an icon container so glyphs align with surrounding text.
pub fn reset_icon() -> CssObject {
    CssObject::new()
        .add("display", "inline-flex")
        .add("align-items", "center")
        .add("color", "inherit")
        .add("font-style", "normal")
        .add("line-height", 0)
        .add("text-align", "center")
        .add("text-transform", "none")
        .add("vertical-align", "-0.125em")
        .add("text-rendering", "optimizeLegibility")
        .add("-webkit-font-smoothing", "antialiased")
        .add("-moz-osx-font-smoothing", "grayscale")
        .add("> *", CssObject::new().add("line-height", 1))
        .add("svg", CssObject::new().add("display", "inline-block"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::CssValue;

    #[test]
    fn test_reset_component_uses_token() {
        let token = DesignToken::light();
        let reset = reset_component(&token);
        assert_eq!(
            reset.get_value("font-size").and_then(CssValue::as_number),
            Some(token.font_size)
        );
        assert_eq!(
            reset.get_value("color").and_then(CssValue::as_str),
            Some(token.color_text.as_str())
        );
    }

    #[test]
    fn test_reset_icon_nests_children() {
        let reset = reset_icon();
        assert!(reset.get_object("> *").is_some());
        assert!(reset.get_object("svg").is_some());
    }
}
