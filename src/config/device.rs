//! Device types, render modes and their fixed geometry.

use serde::Serialize;

/// Width and height of a silhouette or viewport, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Fixed viewport used when a live page is embedded in iframe mode.
///
/// The page is laid out at `viewport` size and shrunk by `scale` so that it
/// fits the device screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IframeViewport {
    pub viewport: Dimensions,
    pub scale: f64,
}

/// The device silhouette drawn around the media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    #[default]
    Laptop,
    Phone,
    Tablet,
}

impl DeviceType {
    pub const ALL: [DeviceType; 3] = [DeviceType::Laptop, DeviceType::Phone, DeviceType::Tablet];

    /// Parses the `type` attribute. Missing or unknown values mean laptop.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("phone") => DeviceType::Phone,
            Some("tablet") => DeviceType::Tablet,
            _ => DeviceType::Laptop,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Laptop => "laptop",
            DeviceType::Phone => "phone",
            DeviceType::Tablet => "tablet",
        }
    }

    /// Outer size of the unscaled silhouette.
    ///
    /// For the laptop this is the width of the base, which is wider than the
    /// lid, and the combined height of lid and base.
    pub fn base_dimensions(&self) -> Dimensions {
        match self {
            DeviceType::Laptop => Dimensions::new(238.0, 154.0),
            DeviceType::Phone => Dimensions::new(126.0, 252.0),
            DeviceType::Tablet => Dimensions::new(182.0, 238.0),
        }
    }

    pub fn iframe_viewport(&self) -> IframeViewport {
        match self {
            DeviceType::Laptop => IframeViewport {
                viewport: Dimensions::new(1280.0, 800.0),
                scale: 0.165625,
            },
            DeviceType::Phone => IframeViewport {
                viewport: Dimensions::new(375.0, 812.0),
                scale: 0.29333,
            },
            DeviceType::Tablet => IframeViewport {
                viewport: Dimensions::new(768.0, 1024.0),
                scale: 0.21615,
            },
        }
    }
}

/// How the screen content is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Image or video media.
    #[default]
    Normal,
    /// A live page embedded from `href`.
    Iframe,
}

impl RenderMode {
    /// Parses the `mode` attribute. Anything but `iframe` is normal.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("iframe") => RenderMode::Iframe,
            _ => RenderMode::Normal,
        }
    }
}
