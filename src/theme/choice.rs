//! Theme selection from the `theme` attribute.

use serde::Serialize;

use super::source::ThemeSource;

/// The resolved color mode a mockup is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn from_is_dark(is_dark: bool) -> Self {
        if is_dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ColorMode::Dark)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

/// The theme a mockup asks for.
///
/// Fixed modes are used verbatim. [`ThemeMode::Auto`] follows the system
/// preference reported by a [`ThemeSource`], and is the only mode that
/// subscribes to preference changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Auto,
    Light,
    Dark,
}

impl ThemeMode {
    /// Parses the `theme` attribute.
    ///
    /// Missing and `auto` select [`ThemeMode::Auto`]. Unrecognized values
    /// are a fixed theme that is never dark, so they behave as light.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            None | Some("auto") => ThemeMode::Auto,
            Some("dark") => ThemeMode::Dark,
            Some(_) => ThemeMode::Light,
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, ThemeMode::Auto)
    }

    /// Resolves to a concrete color mode.
    ///
    /// # Example
    ///
    /// ```rust
    /// use device_mockup::{ColorMode, ManualThemeSource, ThemeMode};
    ///
    /// let system = ManualThemeSource::new(true);
    /// assert_eq!(ThemeMode::Auto.resolve(&system), ColorMode::Dark);
    /// assert_eq!(ThemeMode::Light.resolve(&system), ColorMode::Light);
    /// ```
    pub fn resolve(&self, source: &dyn ThemeSource) -> ColorMode {
        match self {
            ThemeMode::Light => ColorMode::Light,
            ThemeMode::Dark => ColorMode::Dark,
            ThemeMode::Auto => ColorMode::from_is_dark(source.is_dark()),
        }
    }
}
