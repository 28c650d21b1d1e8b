//! Theme source backed by the operating system preference.

use std::cell::Cell;
use std::fmt;

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

use super::choice::ColorMode;
use super::source::{ChangeCallback, Listeners, Subscription, ThemeSource};

/// Function used to read the current system color mode.
pub type ThemeDetector = fn() -> ColorMode;

/// A [`ThemeSource`] reading the OS light/dark setting.
///
/// The OS signal is polled rather than pushed: call [`refresh`] when the
/// host learns that settings may have changed (a focus event, a timer, a
/// platform notification). Subscribers are notified only when the detected
/// mode differs from the last one observed.
///
/// [`refresh`]: SystemThemeSource::refresh
pub struct SystemThemeSource {
    detector: ThemeDetector,
    last: Cell<ColorMode>,
    listeners: Listeners,
}

impl SystemThemeSource {
    /// Creates a source using OS detection.
    pub fn new() -> Self {
        Self::with_detector(os_theme_detector)
    }

    /// Creates a source with a custom detector.
    ///
    /// This is useful for testing or when you want to force a specific color mode.
    pub fn with_detector(detector: ThemeDetector) -> Self {
        Self {
            detector,
            last: Cell::new(detector()),
            listeners: Listeners::default(),
        }
    }

    /// Re-reads the system preference and notifies subscribers on a flip.
    ///
    /// Returns true if the preference changed.
    pub fn refresh(&self) -> bool {
        let current = (self.detector)();
        let previous = self.last.replace(current);
        if previous == current {
            return false;
        }
        tracing::debug!(
            target: "device_mockup",
            from = previous.as_str(),
            to = current.as_str(),
            "system color scheme changed"
        );
        self.listeners.notify();
        true
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for SystemThemeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeSource for SystemThemeSource {
    fn is_dark(&self) -> bool {
        (self.detector)().is_dark()
    }

    fn on_change(&self, callback: ChangeCallback) -> Subscription {
        self.listeners.subscribe(callback)
    }
}

impl fmt::Debug for SystemThemeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemThemeSource")
            .field("last", &self.last.get())
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}

fn os_theme_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}
