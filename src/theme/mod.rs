//! Theme resolution.
//!
//! This module provides:
//!
//! - [`ThemeMode`]: the requested theme (`auto`, `light`, `dark`)
//! - [`ColorMode`]: the resolved light or dark mode
//! - [`ThemeSource`]: the injected system preference signal
//! - [`SystemThemeSource`]: OS-backed source, refreshed by the host
//! - [`ManualThemeSource`]: host-driven source, handy in tests
//! - [`Subscription`]: RAII handle for preference-change listeners

mod adaptive;
mod choice;
mod source;

pub use adaptive::{SystemThemeSource, ThemeDetector};
pub use choice::{ColorMode, ThemeMode};
pub use source::{ChangeCallback, ManualThemeSource, Subscription, ThemeSource};
