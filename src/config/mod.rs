//! Mockup configuration.
//!
//! This module provides:
//!
//! - [`Attributes`]: the flat attribute map every render reads from
//! - [`DeviceType`] and [`RenderMode`]: parsed forms of `type` and `mode`
//! - the deprecated attribute alias table
//!
//! There is no separate configuration file format: the attributes *are* the
//! configuration, re-read on every render.

pub mod aliases;
mod attributes;
mod device;

pub use aliases::{Alias, DEPRECATED_ALIASES};
pub use attributes::{is_observed, Attributes, OBSERVED_ATTRIBUTES};
pub use device::{DeviceType, Dimensions, IframeViewport, RenderMode};
