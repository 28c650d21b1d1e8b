//! Media source resolution.
//!
//! Each mockup has a main slot and an optional hover slot. A slot is fed by
//! up to three URLs (`src`, `fallback`, `fallback-2` and their `hover-`
//! counterparts). The first URL decides what kind of element is produced:
//!
//! - **Video**: every URL becomes a `<source>` with a MIME type derived from
//!   its extension, in the order given.
//! - **Image**: the last URL is the plain `<img>` every browser understands;
//!   the others become typed `<source>` candidates in reverse order, so the
//!   most modern format ends up closest to the image. Candidates with an
//!   unknown image type are dropped.

pub mod mime;

use serde::Serialize;

use crate::config::Attributes;

/// Attribute names feeding the main slot, in priority order.
pub const MAIN_SOURCE_ATTRIBUTES: [&str; 3] = ["src", "fallback", "fallback-2"];

/// Attribute names feeding the hover slot, in priority order.
pub const HOVER_SOURCE_ATTRIBUTES: [&str; 3] = ["hover-src", "hover-fallback", "hover-fallback-2"];

/// Which slot a media element fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotRole {
    Main,
    Hover,
}

impl SlotRole {
    /// Attribute names feeding this slot.
    pub fn source_attributes(&self) -> &'static [&'static str; 3] {
        match self {
            SlotRole::Main => &MAIN_SOURCE_ATTRIBUTES,
            SlotRole::Hover => &HOVER_SOURCE_ATTRIBUTES,
        }
    }
}

/// A URL with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceCandidate {
    pub url: String,
    pub mime: &'static str,
}

/// The element a slot resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MediaGroup {
    Video {
        sources: Vec<SourceCandidate>,
    },
    Image {
        /// Typed candidates, most preferred first.
        fallbacks: Vec<SourceCandidate>,
        /// The unconditional `<img>` source.
        base: String,
    },
}

impl MediaGroup {
    /// Builds a group from an ordered source list.
    ///
    /// Returns `None` if the list is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use device_mockup::media::MediaGroup;
    ///
    /// let sources = vec!["shot.avif".to_string(), "shot.webp".to_string(), "shot.png".to_string()];
    /// let MediaGroup::Image { fallbacks, base } = MediaGroup::from_sources(&sources).unwrap() else {
    ///     panic!("expected an image group");
    /// };
    /// let urls: Vec<_> = fallbacks.iter().map(|c| c.url.as_str()).collect();
    /// assert_eq!(urls, ["shot.webp", "shot.avif"]);
    /// assert_eq!(base, "shot.png");
    /// ```
    pub fn from_sources(sources: &[String]) -> Option<Self> {
        let (primary, _) = sources.split_first()?;

        if mime::is_video(primary) {
            let sources = sources
                .iter()
                .map(|url| SourceCandidate {
                    url: url.clone(),
                    mime: mime::video_mime_type(url),
                })
                .collect();
            return Some(MediaGroup::Video { sources });
        }

        let (base, rest) = sources.split_last()?;
        let fallbacks = rest
            .iter()
            .rev()
            .filter_map(|url| {
                mime::image_mime_type(url).map(|mime| SourceCandidate {
                    url: url.clone(),
                    mime,
                })
            })
            .collect();
        Some(MediaGroup::Image {
            fallbacks,
            base: base.clone(),
        })
    }

    pub fn is_video(&self) -> bool {
        matches!(self, MediaGroup::Video { .. })
    }
}

/// A fully resolved media slot, ready for the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaSlot {
    pub role: SlotRole,
    pub media: MediaGroup,
    pub alt: String,
    /// Padding inset applies (padding other than `0`).
    pub padded: bool,
    /// An explicit object-fit applies.
    pub fitted: bool,
}

/// Options for one slot that come from outside its source list.
#[derive(Debug, Clone, Copy)]
pub struct SlotOptions<'a> {
    pub alt: &'a str,
    pub padding: &'a str,
    pub fit: Option<&'a str>,
}

/// Reads the present source URLs for a slot, in priority order.
pub fn sources_for(attrs: &Attributes, role: SlotRole) -> Vec<String> {
    attrs.collect_present(role.source_attributes())
}

/// Resolves a slot from the attributes.
///
/// Returns `None` when the slot has no sources; the caller decides whether
/// that is fatal.
pub fn resolve_slot(attrs: &Attributes, role: SlotRole, options: SlotOptions<'_>) -> Option<MediaSlot> {
    let sources = sources_for(attrs, role);
    let media = MediaGroup::from_sources(&sources)?;
    Some(MediaSlot {
        role,
        media,
        alt: options.alt.to_string(),
        padded: options.padding != "0",
        fitted: options.fit.is_some(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    const NO_OPTIONS: SlotOptions<'static> = SlotOptions {
        alt: "",
        padding: "0",
        fit: None,
    };

    #[test]
    fn test_empty_sources() {
        assert_eq!(MediaGroup::from_sources(&[]), None);
    }

    #[test]
    fn test_video_group_keeps_order_and_types() {
        let group = MediaGroup::from_sources(&urls(&["a.webm", "a.mp4", "a.flv"])).unwrap();
        assert_eq!(
            group,
            MediaGroup::Video {
                sources: vec![
                    SourceCandidate {
                        url: "a.webm".into(),
                        mime: "video/webm"
                    },
                    SourceCandidate {
                        url: "a.mp4".into(),
                        mime: "video/mp4"
                    },
                    SourceCandidate {
                        url: "a.flv".into(),
                        mime: "video/mp4"
                    },
                ]
            }
        );
    }

    #[test]
    fn test_single_image_has_no_fallbacks() {
        let group = MediaGroup::from_sources(&urls(&["a.png"])).unwrap();
        assert_eq!(
            group,
            MediaGroup::Image {
                fallbacks: vec![],
                base: "a.png".into()
            }
        );
    }

    #[test]
    fn test_image_fallbacks_reversed_and_filtered() {
        let group = MediaGroup::from_sources(&urls(&["a.avif", "a.tiff", "a.jpg"])).unwrap();
        match group {
            MediaGroup::Image { fallbacks, base } => {
                assert_eq!(fallbacks.len(), 1);
                assert_eq!(fallbacks[0].mime, "image/avif");
                assert_eq!(base, "a.jpg");
            }
            other => panic!("expected image group, got {:?}", other),
        }
    }

    #[test]
    fn test_primary_decides_kind() {
        // A video fallback does not turn an image group into a video
        let group = MediaGroup::from_sources(&urls(&["a.png", "a.mp4"])).unwrap();
        assert!(!group.is_video());
    }

    #[test]
    fn test_sources_for_skips_missing() {
        let attrs = Attributes::new()
            .with("hover-src", "")
            .with("hover-fallback", "h.webp")
            .with("hover-fallback-2", "h.png");
        assert_eq!(
            sources_for(&attrs, SlotRole::Hover),
            urls(&["h.webp", "h.png"])
        );
        assert!(sources_for(&attrs, SlotRole::Main).is_empty());
    }

    #[test]
    fn test_resolve_slot_flags() {
        let attrs = Attributes::new().with("src", "a.png");
        let slot = resolve_slot(
            &attrs,
            SlotRole::Main,
            SlotOptions {
                alt: "Screenshot",
                padding: "10px",
                fit: Some("cover"),
            },
        )
        .unwrap();
        assert!(slot.padded);
        assert!(slot.fitted);
        assert_eq!(slot.alt, "Screenshot");

        let plain = resolve_slot(&attrs, SlotRole::Main, NO_OPTIONS).unwrap();
        assert!(!plain.padded);
        assert!(!plain.fitted);
    }

    #[test]
    fn test_resolve_slot_without_sources() {
        assert_eq!(
            resolve_slot(&Attributes::new(), SlotRole::Hover, NO_OPTIONS),
            None
        );
    }
}
