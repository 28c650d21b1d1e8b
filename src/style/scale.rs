//! Scale and host dimension calculation.
//!
//! Every silhouette is drawn at a fixed base size and scaled uniformly. An
//! explicit `width` (or, failing that, `height`) attribute picks the factor
//! that makes the silhouette that large; otherwise the factor is 1.

use crate::config::{Attributes, DeviceType};
use crate::util::parse_length;

/// Uniform scale applied to a silhouette, with the resulting host size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    /// Dimensionless factor relative to the base silhouette.
    pub factor: f64,
    /// Host width in pixels after scaling.
    pub width: f64,
    /// Host height in pixels after scaling.
    pub height: f64,
}

impl Scale {
    /// Computes the scale for `device` from optional width and height values.
    ///
    /// Width takes precedence when both are given. Values may carry a `px`
    /// suffix. Malformed values produce a `NaN` factor.
    ///
    /// # Example
    ///
    /// ```rust
    /// use device_mockup::{DeviceType, Scale};
    ///
    /// let scale = Scale::compute(DeviceType::Laptop, Some("476px"), None);
    /// assert_eq!(scale.factor, 2.0);
    /// assert_eq!(scale.height, 308.0);
    ///
    /// let scale = Scale::compute(DeviceType::Phone, None, Some("504"));
    /// assert_eq!(scale.factor, 2.0);
    /// ```
    pub fn compute(device: DeviceType, width: Option<&str>, height: Option<&str>) -> Self {
        let base = device.base_dimensions();
        let factor = match (width, height) {
            (Some(w), _) => parse_length(w) / base.width,
            (None, Some(h)) => parse_length(h) / base.height,
            (None, None) => 1.0,
        };
        Self {
            factor,
            width: base.width * factor,
            height: base.height * factor,
        }
    }

    /// Computes the scale from the `type`, `width` and `height` attributes.
    pub fn from_attributes(attrs: &Attributes) -> Self {
        let device = DeviceType::from_attr(attrs.get("type"));
        Self::compute(device, attrs.get("width"), attrs.get("height"))
    }
}
