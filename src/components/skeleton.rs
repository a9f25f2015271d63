//! Skeleton loading placeholder styles.
//!
//! A skeleton renders grey blocks where content will appear: an avatar and a
//! title/paragraph layout, or standalone button, avatar, input and image
//! elements. The `-active` modifier adds a looping shimmer gradient to every
//! placeholder shape at once.

use std::ops::Deref;

use crate::registry::{ComponentStyle, StyleInfo, StyleRegistry, StyleSink};
use crate::style::{CssObject, Keyframes, StyleError};
use crate::theme::{use_token, ThemeChoice};
use crate::token::{ComponentTokens, DesignToken};

const SKELETON_COLOR: &str = "rgba(190,190,190,0.2)";
const SKELETON_TO_COLOR: &str = "rgba(129,129,129,.24)";
const IMAGE_SIZE_BASE: f64 = 48.0;
const IMAGE_FONT_SIZE_BASE: f64 = 24.0;
const TITLE_HEIGHT: f64 = 16.0;
const BLOCK_RADIUS: f64 = 4.0;
const PARAGRAPH_LI_HEIGHT: f64 = 16.0;
const PARAGRAPH_MARGIN_TOP: f64 = 28.0;
const ROUND_BORDER_RADIUS: f64 = 100.0;

const IMAGE_PATH_FILL: &str = "#bfbfbf";
const LAST_LINE_WIDTH: &str = "61%";
const SHIMMER_TIMING: &str = "1.4s ease infinite";

/// Design tokens extended with the Skeleton's class selectors and constants.
#[derive(Debug, Clone)]
pub struct SkeletonToken<'a> {
    design: &'a DesignToken,
    pub prefix_cls: String,
    pub skeleton_cls: String,
    pub skeleton_avatar_cls: String,
    pub skeleton_title_cls: String,
    pub skeleton_paragraph_cls: String,
    pub skeleton_button_cls: String,
    pub skeleton_input_cls: String,
    pub skeleton_image_cls: String,
    pub skeleton_color: String,
    pub skeleton_to_color: String,
    pub image_size_base: f64,
    pub image_font_size_base: f64,
    pub skeleton_title_height: f64,
    pub skeleton_block_radius: f64,
    pub skeleton_paragraph_li_height: f64,
    pub skeleton_paragraph_margin_top: f64,
    pub border_radius: f64,
}

impl<'a> SkeletonToken<'a> {
    pub fn new(design: &'a DesignToken, components: &ComponentTokens, prefix_cls: &str) -> Self {
        let overrides = &components.skeleton;
        let skeleton_cls = format!(".{}", prefix_cls);

        Self {
            design,
            prefix_cls: prefix_cls.to_string(),
            skeleton_avatar_cls: format!("{}-avatar", skeleton_cls),
            skeleton_title_cls: format!("{}-title", skeleton_cls),
            skeleton_paragraph_cls: format!("{}-paragraph", skeleton_cls),
            skeleton_button_cls: format!("{}-button", skeleton_cls),
            skeleton_input_cls: format!("{}-input", skeleton_cls),
            skeleton_image_cls: format!("{}-image", skeleton_cls),
            skeleton_cls,
            skeleton_color: overrides
                .skeleton_color
                .clone()
                .unwrap_or_else(|| SKELETON_COLOR.to_string()),
            skeleton_to_color: overrides
                .skeleton_to_color
                .clone()
                .unwrap_or_else(|| SKELETON_TO_COLOR.to_string()),
            image_size_base: overrides.image_size_base.unwrap_or(IMAGE_SIZE_BASE),
            image_font_size_base: overrides
                .image_font_size_base
                .unwrap_or(IMAGE_FONT_SIZE_BASE),
            skeleton_title_height: overrides.skeleton_title_height.unwrap_or(TITLE_HEIGHT),
            skeleton_block_radius: overrides.skeleton_block_radius.unwrap_or(BLOCK_RADIUS),
            skeleton_paragraph_li_height: overrides
                .skeleton_paragraph_li_height
                .unwrap_or(PARAGRAPH_LI_HEIGHT),
            skeleton_paragraph_margin_top: overrides
                .skeleton_paragraph_margin_top
                .unwrap_or(PARAGRAPH_MARGIN_TOP),
            border_radius: overrides.border_radius.unwrap_or(ROUND_BORDER_RADIUS),
        }
    }

    /// The shimmer animation, named after the component prefix.
    pub fn loading_keyframes(&self) -> Keyframes {
        Keyframes::new(
            format!("{}-loading", self.prefix_cls),
            CssObject::new()
                .add("0%", CssObject::new().add("background-position", "100% 50%"))
                .add("100%", CssObject::new().add("background-position", "0 50%")),
        )
    }
}

impl Deref for SkeletonToken<'_> {
    type Target = DesignToken;

    fn deref(&self) -> &DesignToken {
        self.design
    }
}

fn gen_common_size(size: f64) -> CssObject {
    CssObject::new()
        .add("height", size)
        .add("line-height", format!("{}px", size))
}

/// Square placeholder of `size`; also used for images.
pub fn gen_avatar_size(size: f64) -> CssObject {
    CssObject::new().add("width", size).extend(gen_common_size(size))
}

/// Button placeholder, twice as wide as it is tall.
pub fn gen_button_size(size: f64) -> CssObject {
    CssObject::new()
        .add("width", size * 2.0)
        .add("min-width", size * 2.0)
        .extend(gen_common_size(size))
}

/// Input placeholder, five times as wide as it is tall.
pub fn gen_input_size(size: f64) -> CssObject {
    CssObject::new()
        .add("width", size * 5.0)
        .add("min-width", size * 5.0)
        .extend(gen_common_size(size))
}

fn gen_shimmer(token: &SkeletonToken<'_>, hash_id: &str) -> CssObject {
    let loading = token.loading_keyframes();

    CssObject::new()
        .add(
            "background",
            format!(
                "linear-gradient(90deg, {from} 25%, {to} 37%, {from} 63%)",
                from = token.skeleton_color,
                to = token.skeleton_to_color
            ),
        )
        .add("background-size", "400% 100%")
        .add(
            "animation",
            format!("{} {}", loading.name_with_hash(hash_id), SHIMMER_TIMING),
        )
        .add(loading.name(), loading.clone())
}

fn gen_placeholder_block(token: &SkeletonToken<'_>) -> CssObject {
    CssObject::new()
        .add("display", "inline-block")
        .add("vertical-align", "top")
        .add("background", token.skeleton_color.as_str())
}

fn gen_element_avatar(token: &SkeletonToken<'_>) -> CssObject {
    let avatar = &token.skeleton_avatar_cls;

    CssObject::new()
        .add(
            avatar.as_str(),
            gen_placeholder_block(token).extend(gen_avatar_size(token.control_height)),
        )
        .add(
            format!("{avatar}{avatar}-circle", avatar = avatar),
            CssObject::new().add("border-radius", "50%"),
        )
        .add(
            format!("{avatar}{avatar}-lg", avatar = avatar),
            gen_avatar_size(token.control_height_lg),
        )
        .add(
            format!("{avatar}{avatar}-sm", avatar = avatar),
            gen_avatar_size(token.control_height_sm),
        )
}

fn gen_element_input(token: &SkeletonToken<'_>) -> CssObject {
    let input = &token.skeleton_input_cls;

    CssObject::new()
        .add(
            input.as_str(),
            gen_placeholder_block(token).extend(gen_input_size(token.control_height)),
        )
        .add(
            format!("{}-lg", input),
            gen_input_size(token.control_height_lg),
        )
        .add(
            format!("{}-sm", input),
            gen_input_size(token.control_height_sm),
        )
}

fn gen_element_image(token: &SkeletonToken<'_>) -> CssObject {
    let image = &token.skeleton_image_cls;
    let base = token.image_size_base;

    let root = CssObject::new()
        .add("display", "flex")
        .add("align-items", "center")
        .add("justify-content", "center")
        .add("vertical-align", "top")
        .add("background", token.skeleton_color.as_str())
        .extend(gen_avatar_size(base * 2.0))
        .add(
            format!("{}-path", image),
            CssObject::new().add("fill", IMAGE_PATH_FILL),
        )
        .add(
            format!("{}-svg", image),
            gen_avatar_size(base)
                .add("max-width", base * 4.0)
                .add("max-height", base * 4.0),
        )
        .add(
            format!("{image}-svg{image}-svg-circle", image = image),
            CssObject::new().add("border-radius", "50%"),
        );

    CssObject::new().add(image.as_str(), root).add(
        format!("{image}{image}-circle", image = image),
        CssObject::new().add("border-radius", "50%"),
    )
}

/// Circle and round shape modifiers for one button size.
fn gen_button_shape(token: &SkeletonToken<'_>, size: f64, button_cls: &str) -> CssObject {
    let button = &token.skeleton_button_cls;

    CssObject::new()
        .add(
            format!("{}{}-circle", button_cls, button),
            CssObject::new()
                .add("width", size)
                .add("min-width", size)
                .add("border-radius", "50%"),
        )
        .add(
            format!("{}{}-round", button_cls, button),
            CssObject::new().add("border-radius", size),
        )
}

fn gen_element_button(token: &SkeletonToken<'_>) -> CssObject {
    let button = &token.skeleton_button_cls;
    let lg = format!("{}-lg", button);
    let sm = format!("{}-sm", button);

    CssObject::new()
        .add(
            button.as_str(),
            gen_placeholder_block(token)
                .add("border-radius", token.radius_base)
                .extend(gen_button_size(token.control_height)),
        )
        .extend(gen_button_shape(token, token.control_height, button))
        .add(lg.as_str(), gen_button_size(token.control_height_lg))
        .extend(gen_button_shape(token, token.control_height_lg, &lg))
        .add(sm.as_str(), gen_button_size(token.control_height_sm))
        .extend(gen_button_shape(token, token.control_height_sm, &sm))
}

fn gen_header(token: &SkeletonToken<'_>) -> CssObject {
    let avatar = &token.skeleton_avatar_cls;

    CssObject::new()
        .add("display", "table-cell")
        .add("padding-inline-end", token.padding)
        .add("vertical-align", "top")
        .add(
            avatar.as_str(),
            gen_placeholder_block(token).extend(gen_avatar_size(token.control_height)),
        )
        .add(
            format!("{}-circle", avatar),
            CssObject::new().add("border-radius", "50%"),
        )
        .add(
            format!("{}-lg", avatar),
            gen_avatar_size(token.control_height_lg),
        )
        .add(
            format!("{}-sm", avatar),
            gen_avatar_size(token.control_height_sm),
        )
}

fn gen_content(token: &SkeletonToken<'_>) -> CssObject {
    let title = &token.skeleton_title_cls;
    let paragraph = &token.skeleton_paragraph_cls;

    CssObject::new()
        .add("display", "table-cell")
        .add("width", "100%")
        .add("vertical-align", "top")
        .add(
            title.as_str(),
            CssObject::new()
                .add("width", "100%")
                .add("height", token.skeleton_title_height)
                .add("margin-block-start", token.margin)
                .add("background", token.skeleton_color.as_str())
                .add("border-radius", token.skeleton_block_radius)
                .add(
                    format!("+ {}", paragraph),
                    CssObject::new().add("margin-block-start", token.control_height_sm),
                ),
        )
        .add(
            paragraph.as_str(),
            CssObject::new().add("padding", 0).add(
                "> li",
                CssObject::new()
                    .add("width", "100%")
                    .add("height", token.skeleton_paragraph_li_height)
                    .add("list-style", "none")
                    .add("background", token.skeleton_color.as_str())
                    .add("border-radius", token.skeleton_block_radius)
                    .add(
                        "+ li",
                        CssObject::new().add("margin-block-start", token.control_height_xs),
                    ),
            ),
        )
        .add(
            format!(
                "{}> li:last-child:not(:first-child):not(:nth-child(2))",
                paragraph
            ),
            CssObject::new().add("width", LAST_LINE_WIDTH),
        )
}

/// Builds the complete Skeleton rule tree.
pub fn gen_skeleton_style(token: &SkeletonToken<'_>, hash_id: &str) -> CssObject {
    let sk = &token.skeleton_cls;
    let title = &token.skeleton_title_cls;
    let paragraph = &token.skeleton_paragraph_cls;
    let shimmer = gen_shimmer(token, hash_id);

    let layout = CssObject::new()
        .add("display", "table")
        .add("width", "100%")
        .add(format!("{}-header", sk), gen_header(token))
        .add(format!("{}-content", sk), gen_content(token))
        .add(
            format!("{sk}-round {sk}-content", sk = sk),
            CssObject::new().add(
                format!("{title}, {title} > li", title = title),
                CssObject::new().add("border-radius", token.border_radius),
            ),
        );

    let with_avatar = CssObject::new().add(
        title.as_str(),
        CssObject::new()
            .add("margin-block-start", token.margin_sm)
            .add(
                format!("+ {}", paragraph),
                CssObject::new().add("margin-block-start", token.skeleton_paragraph_margin_top),
            ),
    );

    let element = CssObject::new()
        .add("display", "inline-block")
        .add("width", "auto")
        .extend(gen_element_button(token))
        .extend(gen_element_avatar(token))
        .extend(gen_element_input(token))
        .extend(gen_element_image(token));

    let block = CssObject::new()
        .add("width", "100%")
        .add(
            token.skeleton_button_cls.as_str(),
            CssObject::new().add("width", "100%"),
        )
        .add(
            token.skeleton_input_cls.as_str(),
            CssObject::new().add("width", "100%"),
        );

    let active = CssObject::new()
        .add(
            format!("{}-content", sk),
            CssObject::new().add(
                format!("{}, {} > li", title, paragraph),
                shimmer.clone(),
            ),
        )
        .add(token.skeleton_avatar_cls.as_str(), shimmer.clone())
        .add(token.skeleton_button_cls.as_str(), shimmer.clone())
        .add(token.skeleton_input_cls.as_str(), shimmer.clone())
        .add(token.skeleton_image_cls.as_str(), shimmer);

    CssObject::new()
        .add(sk.as_str(), layout)
        .add(format!("{sk}-with-avatar {sk}-content", sk = sk), with_avatar)
        .add(format!("{sk}{sk}-element", sk = sk), element)
        .add(format!("{sk}{sk}-block", sk = sk), block)
        .add(format!("{sk}{sk}-active", sk = sk), active)
}

/// Registers Skeleton styles for a theme and returns the hash class to apply.
///
/// # Errors
///
/// Returns an error if the theme's tokens are invalid.
///
/// # Example
///
/// ```rust
/// use tokenstyle::components::skeleton::use_skeleton_style;
/// use tokenstyle::{StyleRegistry, Theme, ThemeChoice};
///
/// let registry = StyleRegistry::default();
/// let theme = Theme::default();
///
/// let style = use_skeleton_style(&registry, ThemeChoice::Theme(&theme), "ant-skeleton").unwrap();
/// let css = style.style.css();
///
/// assert!(css.contains("@keyframes"));
/// assert!(css.contains("ant-skeleton-loading"));
/// ```
pub fn use_skeleton_style<S: StyleSink>(
    registry: &StyleRegistry<S>,
    theme: ThemeChoice<'_>,
    prefix_cls: &str,
) -> Result<ComponentStyle, StyleError> {
    let resolved = use_token(theme)?;
    let path = [prefix_cls];
    let info = StyleInfo {
        theme: &resolved.theme,
        hash_id: &resolved.hash_id,
        path: &path,
    };

    let style = registry.register(info, || {
        let token = SkeletonToken::new(
            resolved.theme.token(),
            resolved.theme.components(),
            prefix_cls,
        );
        vec![gen_skeleton_style(&token, &resolved.hash_id)]
    });

    Ok(ComponentStyle {
        hash_id: resolved.hash_id,
        style,
    })
}
