//! Device color resolution.
//!
//! Each color is looked up in this order, first hit wins:
//!
//! 1. the CSS custom property `--<name>` in the inline `style` attribute
//! 2. the attribute `<name>`
//! 3. the deprecated attribute aliasing `<name>`, with an advisory
//! 4. the default for the resolved color mode

use serde::Serialize;

use super::inline::InlineStyle;
use crate::advisory::Advisory;
use crate::config::{aliases, Attributes};
use crate::theme::ColorMode;

/// One of the themable device colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKey {
    Bezel,
    Camera,
    Keyboard,
    KeyboardGradient,
    Shadow,
    ScreenBackground,
}

impl ColorKey {
    pub const ALL: [ColorKey; 6] = [
        ColorKey::Bezel,
        ColorKey::Camera,
        ColorKey::Keyboard,
        ColorKey::KeyboardGradient,
        ColorKey::Shadow,
        ColorKey::ScreenBackground,
    ];

    /// Attribute name, also the custom property name without `--`.
    pub fn attribute(&self) -> &'static str {
        match self {
            ColorKey::Bezel => "bezel-color",
            ColorKey::Camera => "camera-color",
            ColorKey::Keyboard => "keyboard-color",
            ColorKey::KeyboardGradient => "keyboard-gradient",
            ColorKey::Shadow => "shadow-color",
            ColorKey::ScreenBackground => "screen-background",
        }
    }

    pub fn custom_property(&self) -> String {
        format!("--{}", self.attribute())
    }

    pub fn deprecated_attribute(&self) -> Option<&'static str> {
        aliases::deprecated_name_for(self.attribute())
    }

    pub fn default_for(&self, mode: ColorMode) -> &'static str {
        match (self, mode) {
            (ColorKey::Bezel, ColorMode::Light) => "#1f2937",
            (ColorKey::Bezel, ColorMode::Dark) => "#6b7280",
            (ColorKey::Camera, ColorMode::Light) => "#111827",
            (ColorKey::Camera, ColorMode::Dark) => "#4b5563",
            (ColorKey::Keyboard, ColorMode::Light) => "#374151",
            (ColorKey::Keyboard, ColorMode::Dark) => "#9ca3af",
            (ColorKey::KeyboardGradient, ColorMode::Light) => "#1f2937",
            (ColorKey::KeyboardGradient, ColorMode::Dark) => "#6b7280",
            (ColorKey::Shadow, ColorMode::Light) => "rgba(0, 0, 0, 0.6)",
            (ColorKey::Shadow, ColorMode::Dark) => "rgba(0, 0, 0, 0.4)",
            (ColorKey::ScreenBackground, _) => "transparent",
        }
    }
}

/// Where a resolved color came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorOrigin {
    CustomProperty,
    Attribute,
    Deprecated(&'static str),
    ThemeDefault,
}

/// Resolves a single color.
///
/// The deprecated alias is consulted only when neither the custom property
/// nor the current attribute is set.
pub fn resolve_color(
    key: ColorKey,
    attrs: &Attributes,
    inline: &InlineStyle,
    mode: ColorMode,
) -> (String, ColorOrigin) {
    if let Some(value) = inline.get(&key.custom_property()) {
        return (value.to_string(), ColorOrigin::CustomProperty);
    }
    if let Some(value) = attrs.get(key.attribute()) {
        return (value.to_string(), ColorOrigin::Attribute);
    }
    if let Some(deprecated) = key.deprecated_attribute() {
        if let Some(value) = attrs.get(deprecated) {
            return (value.to_string(), ColorOrigin::Deprecated(deprecated));
        }
    }
    (key.default_for(mode).to_string(), ColorOrigin::ThemeDefault)
}

/// The six device colors, as emitted into the stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub bezel_color: String,
    pub camera_color: String,
    pub keyboard_color: String,
    pub keyboard_gradient: String,
    pub shadow_color: String,
    pub screen_background: String,
}

impl Palette {
    /// Resolves every color, returning one advisory per deprecated name used.
    ///
    /// # Example
    ///
    /// ```rust
    /// use device_mockup::{Advisory, Attributes, ColorMode, Palette};
    ///
    /// let attrs = Attributes::new().with("frame-color", "#111");
    /// let (palette, advisories) = Palette::resolve(&attrs, ColorMode::Light);
    /// assert_eq!(palette.bezel_color, "#111");
    /// assert_eq!(
    ///     advisories,
    ///     vec![Advisory::DeprecatedAttribute { used: "frame-color", replacement: "bezel-color" }]
    /// );
    /// ```
    pub fn resolve(attrs: &Attributes, mode: ColorMode) -> (Self, Vec<Advisory>) {
        let inline = attrs
            .get("style")
            .map(InlineStyle::parse)
            .unwrap_or_default();

        let mut advisories = Vec::new();
        let mut pick = |key: ColorKey| {
            let (value, origin) = resolve_color(key, attrs, &inline, mode);
            if let ColorOrigin::Deprecated(used) = origin {
                advisories.push(Advisory::DeprecatedAttribute {
                    used,
                    replacement: key.attribute(),
                });
            }
            value
        };

        let palette = Palette {
            bezel_color: pick(ColorKey::Bezel),
            camera_color: pick(ColorKey::Camera),
            keyboard_color: pick(ColorKey::Keyboard),
            keyboard_gradient: pick(ColorKey::KeyboardGradient),
            shadow_color: pick(ColorKey::Shadow),
            screen_background: pick(ColorKey::ScreenBackground),
        };
        (palette, advisories)
    }
}
