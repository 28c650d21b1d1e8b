//! The attribute store.
//!
//! A mockup is configured exclusively through string attributes, the same
//! way a markup element is. [`Attributes`] is that flat map. An attribute is
//! considered *present* only when its value is non-empty, so setting an
//! attribute to `""` is equivalent to removing it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Attribute names that trigger a re-render when they change.
///
/// The deprecated color names at the end are still observed so that old
/// markup keeps working.
pub const OBSERVED_ATTRIBUTES: &[&str] = &[
    "type",
    "src",
    "fallback",
    "fallback-2",
    "hover-src",
    "hover-fallback",
    "hover-fallback-2",
    "alt",
    "theme",
    "padding",
    "hover-padding",
    "fit",
    "hover-fit",
    "href",
    "target",
    "mode",
    "bezel-color",
    "camera-color",
    "keyboard-color",
    "keyboard-gradient",
    "shadow-color",
    "screen-background",
    "width",
    "height",
    "style",
    // Deprecated
    "frame-color",
    "frame-dark",
    "base-color",
    "base-dark",
    "screen-bg",
];

/// Returns true if changes to `name` should trigger a render.
pub fn is_observed(name: &str) -> bool {
    OBSERVED_ATTRIBUTES.contains(&name)
}

/// A flat attribute map configuring one mockup.
///
/// # Example
///
/// ```rust
/// use device_mockup::Attributes;
///
/// let attrs = Attributes::new()
///     .with("type", "phone")
///     .with("src", "shot.webp")
///     .with("alt", "");
///
/// assert_eq!(attrs.get("type"), Some("phone"));
/// // Empty values count as absent
/// assert_eq!(attrs.get("alt"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    values: BTreeMap<String, String>,
}

impl Attributes {
    /// Creates an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, returning the updated map for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets an attribute, returning the previous raw value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(name.into(), value.into())
    }

    /// Removes an attribute, returning its raw value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    /// Returns the value of a present (non-empty) attribute.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Returns the value of an attribute or `default` when absent.
    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    /// Returns true if the attribute is present and non-empty.
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the raw stored value, including empty strings.
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Iterates over all stored attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of stored attributes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no attributes are stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Collects the present values of `names`, in order, skipping absent ones.
    pub(crate) fn collect_present(&self, names: &[&str]) -> Vec<String> {
        names
            .iter()
            .filter_map(|name| self.get(name))
            .map(str::to_string)
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.set(k, v);
        }
        attrs
    }
}

impl<K, V> Extend<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_is_absent() {
        let attrs = Attributes::new().with("src", "");
        assert_eq!(attrs.get("src"), None);
        assert!(!attrs.has("src"));
        assert_eq!(attrs.raw("src"), Some(""));
    }

    #[test]
    fn test_get_or_default() {
        let attrs = Attributes::new().with("padding", "");
        assert_eq!(attrs.get_or("padding", "0"), "0");
        assert_eq!(attrs.get_or("type", "laptop"), "laptop");
    }

    #[test]
    fn test_set_returns_previous() {
        let mut attrs = Attributes::new();
        assert_eq!(attrs.set("type", "phone"), None);
        assert_eq!(attrs.set("type", "tablet"), Some("phone".to_string()));
    }

    #[test]
    fn test_collect_present_skips_gaps() {
        let attrs = Attributes::new()
            .with("src", "a.webp")
            .with("fallback-2", "a.png");
        assert_eq!(
            attrs.collect_present(&["src", "fallback", "fallback-2"]),
            vec!["a.webp".to_string(), "a.png".to_string()]
        );
    }

    #[test]
    fn test_from_iterator() {
        let attrs: Attributes = [("type", "phone"), ("src", "x.png")].into_iter().collect();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("src"), Some("x.png"));
    }

    #[test]
    fn test_deserialize_from_json_object() {
        let attrs: Attributes =
            serde_json::from_str(r#"{"type": "tablet", "src": "a.mp4"}"#).unwrap();
        assert_eq!(attrs.get("type"), Some("tablet"));
        assert_eq!(attrs.get("src"), Some("a.mp4"));
    }

    #[test]
    fn test_observed_attributes() {
        assert!(is_observed("hover-fallback-2"));
        assert!(is_observed("screen-bg"));
        assert!(is_observed("style"));
        assert!(!is_observed("data-id"));
    }
}
