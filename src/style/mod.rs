//! Style inputs for the generated stylesheet.
//!
//! This module provides:
//!
//! - [`Scale`]: the uniform scale factor and host size
//! - [`Palette`]: the six device colors after priority resolution
//! - [`InlineStyle`]: custom property overrides from the `style` attribute
//! - [`StyleContext`]: everything the stylesheet template needs
//!
//! The stylesheet text itself lives in the render module's templates.

mod inline;
mod palette;
mod scale;

pub use inline::InlineStyle;
pub use palette::{resolve_color, ColorKey, ColorOrigin, Palette};
pub use scale::Scale;

use serde::Serialize;

use crate::advisory::Advisory;
use crate::config::{Attributes, DeviceType};
use crate::theme::ColorMode;
use crate::util::css_number;

/// Padding value meaning "no inset".
pub const NO_PADDING: &str = "0";

/// Inset applied around one media slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inset {
    /// The raw padding length, e.g. `12px`.
    pub padding: String,
    /// Twice the padding, as a CSS expression, or `0` if unpadded.
    pub double: String,
}

impl Inset {
    pub fn new(padding: &str) -> Self {
        let double = if padding == NO_PADDING {
            NO_PADDING.to_string()
        } else {
            format!("calc({} * 2)", padding)
        };
        Self {
            padding: padding.to_string(),
            double,
        }
    }
}

/// Viewport rule for embedded pages on one device.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IframeRule {
    pub device: DeviceType,
    pub width: String,
    pub height: String,
    pub scale: String,
}

impl IframeRule {
    fn for_device(device: DeviceType) -> Self {
        let frame = device.iframe_viewport();
        Self {
            device,
            width: css_number(frame.viewport.width),
            height: css_number(frame.viewport.height),
            scale: css_number(frame.scale),
        }
    }
}

/// Values substituted into the stylesheet template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleContext {
    pub theme: ColorMode,
    pub scale: String,
    pub host_width: String,
    pub host_height: String,
    pub palette: Palette,
    pub main: Inset,
    pub hover: Inset,
    /// object-fit keywords, `none` when unset.
    pub fit: String,
    pub hover_fit: String,
    pub iframes: Vec<IframeRule>,
}

impl StyleContext {
    /// Builds the stylesheet inputs from attributes and the resolved theme.
    pub fn from_attributes(attrs: &Attributes, theme: ColorMode) -> (Self, Vec<Advisory>) {
        let padding = attrs.get_or("padding", NO_PADDING);
        let hover_padding = attrs.get_or("hover-padding", padding);
        let scale = Scale::from_attributes(attrs);
        let (palette, advisories) = Palette::resolve(attrs, theme);

        let context = StyleContext {
            theme,
            scale: css_number(scale.factor),
            host_width: css_number(scale.width),
            host_height: css_number(scale.height),
            palette,
            main: Inset::new(padding),
            hover: Inset::new(hover_padding),
            fit: attrs.get_or("fit", "none").to_string(),
            hover_fit: attrs.get_or("hover-fit", "none").to_string(),
            iframes: DeviceType::ALL.into_iter().map(IframeRule::for_device).collect(),
        };
        (context, advisories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset_unpadded() {
        let inset = Inset::new("0");
        assert_eq!(inset.double, "0");
    }

    #[test]
    fn test_inset_doubles_padding() {
        let inset = Inset::new("1.5rem");
        assert_eq!(inset.padding, "1.5rem");
        assert_eq!(inset.double, "calc(1.5rem * 2)");
    }

    #[test]
    fn test_hover_padding_defaults_to_main() {
        let attrs = Attributes::new().with("padding", "8px");
        let (ctx, _) = StyleContext::from_attributes(&attrs, ColorMode::Light);
        assert_eq!(ctx.hover.padding, "8px");

        let attrs = attrs.with("hover-padding", "2px");
        let (ctx, _) = StyleContext::from_attributes(&attrs, ColorMode::Light);
        assert_eq!(ctx.main.padding, "8px");
        assert_eq!(ctx.hover.padding, "2px");
    }

    #[test]
    fn test_scale_and_host_size() {
        let attrs = Attributes::new().with("type", "phone").with("height", "504");
        let (ctx, _) = StyleContext::from_attributes(&attrs, ColorMode::Dark);
        assert_eq!(ctx.scale, "2");
        assert_eq!(ctx.host_width, "252");
        assert_eq!(ctx.host_height, "504");
    }

    #[test]
    fn test_iframe_rules_cover_every_device() {
        let (ctx, _) = StyleContext::from_attributes(&Attributes::new(), ColorMode::Light);
        assert_eq!(ctx.iframes.len(), 3);
        assert_eq!(ctx.iframes[1].device, DeviceType::Phone);
        assert_eq!(ctx.iframes[1].width, "375");
        assert_eq!(ctx.iframes[1].scale, "0.29333");
    }

    #[test]
    fn test_fit_defaults_to_none() {
        let (ctx, _) = StyleContext::from_attributes(&Attributes::new(), ColorMode::Light);
        assert_eq!(ctx.fit, "none");
        assert_eq!(ctx.hover_fit, "none");
    }
}
