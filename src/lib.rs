//! Attribute-driven device mockups.
//!
//! `device-mockup` renders a laptop, phone or tablet silhouette around an
//! image, a video or an embedded web page. Everything is configured through
//! string attributes, the way an HTML custom element is:
//!
//! ```rust
//! use device_mockup::{render, Attributes, ColorMode};
//!
//! let attrs = Attributes::new()
//!     .with("type", "phone")
//!     .with("src", "screenshot.webp")
//!     .with("hover-src", "screenshot-2.webp")
//!     .with("alt", "Settings screen")
//!     .with("width", "252");
//!
//! let outcome = render(&attrs, ColorMode::Light).unwrap();
//! let html = outcome.rendered.unwrap().html();
//! assert!(html.contains(r#"<div class="phone-frame">"#));
//! assert!(html.contains("--device-scale: 2;"));
//! ```
//!
//! # Crate layout
//!
//! - [`config`]: attribute storage, device types, deprecated aliases
//! - [`media`]: source lists, MIME detection, media slots
//! - [`style`]: scale, color palette, inline custom properties
//! - [`theme`]: color modes and system preference sources
//! - [`render`]: the template-backed renderer
//! - [`DeviceMockup`]: the stateful component with mount/configure/unmount
//!
//! # Themes
//!
//! The `theme` attribute selects `light`, `dark` or `auto`. In auto mode a
//! mounted [`DeviceMockup`] subscribes to its [`ThemeSource`] and re-renders
//! when the preference flips. [`SystemThemeSource`] reads the OS setting;
//! [`ManualThemeSource`] is driven by the host.
//!
//! # Advisories
//!
//! Non-fatal problems (no media, deprecated attribute names) are reported as
//! [`Advisory`] values and logged through `tracing` at warn level under the
//! `device_mockup` target. Only template failures are errors.

mod advisory;
mod component;
pub mod config;
mod error;
pub mod media;
pub mod render;
pub mod style;
pub mod theme;
mod util;

pub use advisory::Advisory;
pub use component::{DeviceMockup, RenderStatus};
pub use error::MockupError;
pub use util::{extension_of, parse_length};

pub use config::{Attributes, DeviceType, RenderMode};
pub use render::{render, MockupRenderer, RenderOutcome, Rendered};
pub use style::{InlineStyle, Palette, Scale};
pub use theme::{ColorMode, ManualThemeSource, Subscription, SystemThemeSource, ThemeMode, ThemeSource};
