//! The mockup component and its lifecycle.
//!
//! [`DeviceMockup`] owns the attributes, the resolved theme, the current
//! output and, while mounted in auto theme mode, a subscription to the
//! system preference. Three triggers run the full render pipeline
//! synchronously:
//!
//! 1. [`DeviceMockup::mount`]
//! 2. [`DeviceMockup::configure`] or [`DeviceMockup::remove_attribute`]
//!    changing an observed attribute, mounted or not
//! 3. a preference flip reported by the [`ThemeSource`] (mounted, auto
//!    mode only)
//!
//! Mounting only governs the subscription. There is no caching or diffing:
//! each render replaces the output.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::advisory::Advisory;
use crate::config::{is_observed, Attributes};
use crate::error::MockupError;
use crate::render::{MockupRenderer, Rendered};
use crate::theme::{ChangeCallback, ColorMode, Subscription, SystemThemeSource, ThemeMode, ThemeSource};

/// What a lifecycle call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    /// The output was replaced.
    Rendered,
    /// Rendering was skipped for lack of media; the previous output stays.
    Skipped,
    /// No observed attribute changed, nothing was rendered.
    Unchanged,
}

struct MockupState {
    attrs: Attributes,
    renderer: MockupRenderer,
    source: Rc<dyn ThemeSource>,
    theme: ColorMode,
    mounted: bool,
    subscription: Option<Subscription>,
    output: Option<Rendered>,
    advisories: Vec<Advisory>,
    warned: HashSet<&'static str>,
    render_count: usize,
}

impl MockupState {
    fn theme_mode(&self) -> ThemeMode {
        ThemeMode::from_attr(self.attrs.get("theme"))
    }

    fn resolve_theme(&mut self) {
        self.theme = self.theme_mode().resolve(self.source.as_ref());
    }

    fn render(&mut self) -> Result<RenderStatus, MockupError> {
        self.render_count += 1;
        let outcome = self.renderer.render(&self.attrs, self.theme)?;
        for advisory in outcome.advisories {
            self.record(advisory);
        }
        match outcome.rendered {
            Some(rendered) => {
                self.output = Some(rendered);
                Ok(RenderStatus::Rendered)
            }
            None => Ok(RenderStatus::Skipped),
        }
    }

    /// Logs and stores an advisory. Each deprecated name is reported once.
    fn record(&mut self, advisory: Advisory) {
        if let Advisory::DeprecatedAttribute { used, .. } = &advisory {
            if !self.warned.insert(*used) {
                return;
            }
        }
        advisory.emit();
        self.advisories.push(advisory);
    }

    fn on_preference_change(&mut self) -> Result<RenderStatus, MockupError> {
        if !self.mounted || !self.theme_mode().is_auto() {
            return Ok(RenderStatus::Unchanged);
        }
        self.resolve_theme();
        tracing::debug!(
            target: "device_mockup",
            theme = self.theme.as_str(),
            "system preference changed"
        );
        self.render()
    }
}

/// A device mockup bound to a theme source.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use device_mockup::{Attributes, ColorMode, DeviceMockup, ManualThemeSource, RenderStatus};
///
/// let system = Rc::new(ManualThemeSource::new(false));
/// let mockup = DeviceMockup::new(system.clone()).unwrap();
///
/// let attrs = Attributes::new().with("type", "tablet").with("src", "ui.png");
/// assert_eq!(mockup.mount(attrs).unwrap(), RenderStatus::Rendered);
/// assert_eq!(mockup.theme(), ColorMode::Light);
///
/// // Auto theme follows the system preference
/// system.set_dark(true);
/// assert_eq!(mockup.theme(), ColorMode::Dark);
/// assert_eq!(mockup.render_count(), 2);
///
/// mockup.unmount();
/// assert_eq!(system.subscriber_count(), 0);
/// ```
pub struct DeviceMockup {
    state: Rc<RefCell<MockupState>>,
}

impl DeviceMockup {
    /// Creates an unmounted mockup reading the preference from `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in templates fail to compile.
    pub fn new(source: Rc<dyn ThemeSource>) -> Result<Self, MockupError> {
        let state = MockupState {
            attrs: Attributes::new(),
            renderer: MockupRenderer::new()?,
            source,
            theme: ColorMode::Light,
            mounted: false,
            subscription: None,
            output: None,
            advisories: Vec::new(),
            warned: HashSet::new(),
            render_count: 0,
        };
        Ok(Self {
            state: Rc::new(RefCell::new(state)),
        })
    }

    /// Creates an unmounted mockup following the OS preference.
    pub fn with_system_theme() -> Result<Self, MockupError> {
        Self::new(Rc::new(SystemThemeSource::new()))
    }

    /// Attaches the mockup with `attrs` as its full configuration.
    ///
    /// Resolves the theme, subscribes to preference changes in auto mode and
    /// renders. Mounting an already mounted mockup replaces its attributes
    /// and keeps the single existing subscription.
    pub fn mount(&self, attrs: Attributes) -> Result<RenderStatus, MockupError> {
        {
            let mut state = self.state.borrow_mut();
            state.attrs = attrs;
            state.mounted = true;
            state.resolve_theme();
        }
        self.sync_subscription();
        tracing::debug!(target: "device_mockup", "mounted");
        self.state.borrow_mut().render()
    }

    /// Detaches the mockup and releases its preference subscription.
    ///
    /// The last output is kept.
    pub fn unmount(&self) {
        let subscription = {
            let mut state = self.state.borrow_mut();
            state.mounted = false;
            state.subscription.take()
        };
        // Released outside the borrow: cancelling touches the source only
        drop(subscription);
        tracing::debug!(target: "device_mockup", "unmounted");
    }

    /// Applies attribute changes.
    ///
    /// Values equal to the stored ones are ignored. If any observed attribute
    /// changed, renders once for the whole batch, mounted or not.
    pub fn configure(&self, changes: Attributes) -> Result<RenderStatus, MockupError> {
        let mut observed_changed = false;
        let mut theme_changed = false;
        {
            let mut state = self.state.borrow_mut();
            for (name, value) in changes.iter() {
                if state.attrs.raw(name) == Some(value) {
                    continue;
                }
                state.attrs.set(name, value);
                observed_changed |= is_observed(name);
                theme_changed |= name == "theme";
            }
        }
        self.after_change(observed_changed, theme_changed)
    }

    /// Removes one attribute, re-rendering if it was observed and present.
    pub fn remove_attribute(&self, name: &str) -> Result<RenderStatus, MockupError> {
        let removed = self.state.borrow_mut().attrs.remove(name).is_some();
        self.after_change(removed && is_observed(name), removed && name == "theme")
    }

    fn after_change(&self, observed_changed: bool, theme_changed: bool) -> Result<RenderStatus, MockupError> {
        if !observed_changed {
            return Ok(RenderStatus::Unchanged);
        }
        // Unmounted mockups hold no subscription, so the preference is read afresh
        self.state.borrow_mut().resolve_theme();
        if theme_changed {
            self.sync_subscription();
        }
        self.state.borrow_mut().render()
    }

    /// Holds a subscription exactly when mounted in auto theme mode.
    fn sync_subscription(&self) {
        let (wanted, held, source) = {
            let state = self.state.borrow();
            (
                state.mounted && state.theme_mode().is_auto(),
                state.subscription.is_some(),
                Rc::clone(&state.source),
            )
        };

        if wanted && !held {
            let subscription = source.on_change(preference_listener(Rc::downgrade(&self.state)));
            self.state.borrow_mut().subscription = Some(subscription);
        } else if !wanted && held {
            let subscription = self.state.borrow_mut().subscription.take();
            drop(subscription);
        }
    }

    /// Returns the current output, if any render has succeeded.
    pub fn output(&self) -> Option<Rendered> {
        self.state.borrow().output.clone()
    }

    /// Returns the current output as one HTML fragment.
    pub fn html(&self) -> Option<String> {
        self.state.borrow().output.as_ref().map(Rendered::html)
    }

    /// The resolved color mode.
    pub fn theme(&self) -> ColorMode {
        self.state.borrow().theme
    }

    /// A copy of the stored attributes.
    pub fn attributes(&self) -> Attributes {
        self.state.borrow().attrs.clone()
    }

    /// Every advisory recorded so far, oldest first.
    pub fn advisories(&self) -> Vec<Advisory> {
        self.state.borrow().advisories.clone()
    }

    /// Number of render passes run, including skipped ones.
    pub fn render_count(&self) -> usize {
        self.state.borrow().render_count
    }

    pub fn is_mounted(&self) -> bool {
        self.state.borrow().mounted
    }

    /// True while a preference subscription is held.
    pub fn is_subscribed(&self) -> bool {
        self.state.borrow().subscription.is_some()
    }
}

impl fmt::Debug for DeviceMockup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("DeviceMockup")
            .field("attrs", &state.attrs)
            .field("theme", &state.theme)
            .field("mounted", &state.mounted)
            .field("subscribed", &state.subscription.is_some())
            .field("render_count", &state.render_count)
            .finish()
    }
}

/// Builds the callback run on preference flips.
///
/// The callback holds only a weak reference, so a dropped mockup is never
/// kept alive by its source.
fn preference_listener(state: Weak<RefCell<MockupState>>) -> ChangeCallback {
    Rc::new(move || {
        let Some(state) = state.upgrade() else {
            return;
        };
        let Ok(mut state) = state.try_borrow_mut() else {
            tracing::debug!(target: "device_mockup", "preference change during render ignored");
            return;
        };
        if let Err(err) = state.on_preference_change() {
            tracing::error!(target: "device_mockup", error = %err, "re-render after preference change failed");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ManualThemeSource;

    fn mockup(dark: bool) -> (Rc<ManualThemeSource>, DeviceMockup) {
        let source = Rc::new(ManualThemeSource::new(dark));
        let mockup = DeviceMockup::new(source.clone()).unwrap();
        (source, mockup)
    }

    fn image() -> Attributes {
        Attributes::new().with("src", "a.png")
    }

    #[test]
    fn test_mount_renders_and_subscribes_in_auto_mode() {
        let (source, mockup) = mockup(false);
        assert_eq!(mockup.mount(image()).unwrap(), RenderStatus::Rendered);
        assert!(mockup.is_mounted());
        assert!(mockup.is_subscribed());
        assert_eq!(source.subscriber_count(), 1);
        assert!(mockup.output().is_some());
    }

    #[test]
    fn test_fixed_theme_does_not_subscribe() {
        let (source, mockup) = mockup(true);
        mockup.mount(image().with("theme", "light")).unwrap();
        assert_eq!(mockup.theme(), ColorMode::Light);
        assert_eq!(source.subscriber_count(), 0);
    }

    #[test]
    fn test_configure_before_mount_renders_without_subscribing() {
        let (source, mockup) = mockup(true);
        assert_eq!(mockup.configure(image()).unwrap(), RenderStatus::Rendered);
        assert_eq!(mockup.render_count(), 1);
        assert!(mockup.output().is_some());
        assert_eq!(mockup.theme(), ColorMode::Dark);
        assert!(!mockup.is_mounted());
        assert_eq!(source.subscriber_count(), 0);
    }

    #[test]
    fn test_unmounted_render_reads_current_preference() {
        let (source, mockup) = mockup(false);
        mockup.configure(image()).unwrap();
        source.set_dark(true);
        // No subscription, so the flip alone does not render
        assert_eq!(mockup.render_count(), 1);
        mockup.configure(Attributes::new().with("type", "phone")).unwrap();
        assert_eq!(mockup.theme(), ColorMode::Dark);
    }

    #[test]
    fn test_remove_attribute_while_unmounted_renders() {
        let (_source, mockup) = mockup(false);
        mockup.configure(image().with("type", "phone")).unwrap();
        assert_eq!(mockup.remove_attribute("type").unwrap(), RenderStatus::Rendered);
        assert!(mockup.html().unwrap().contains("laptop-frame"));
    }

    #[test]
    fn test_configure_same_value_is_unchanged() {
        let (_source, mockup) = mockup(false);
        mockup.mount(image()).unwrap();
        assert_eq!(mockup.configure(image()).unwrap(), RenderStatus::Unchanged);
        assert_eq!(mockup.render_count(), 1);
    }

    #[test]
    fn test_unobserved_attribute_is_stored_without_render() {
        let (_source, mockup) = mockup(false);
        mockup.mount(image()).unwrap();
        let status = mockup
            .configure(Attributes::new().with("data-id", "7"))
            .unwrap();
        assert_eq!(status, RenderStatus::Unchanged);
        assert_eq!(mockup.attributes().get("data-id"), Some("7"));
        assert_eq!(mockup.render_count(), 1);
    }

    #[test]
    fn test_batch_configure_renders_once() {
        let (_source, mockup) = mockup(false);
        mockup.mount(image()).unwrap();
        mockup
            .configure(Attributes::new().with("type", "phone").with("padding", "4px"))
            .unwrap();
        assert_eq!(mockup.render_count(), 2);
        assert!(mockup.output().unwrap().markup.contains("phone-frame"));
    }

    #[test]
    fn test_skipped_render_keeps_previous_output() {
        let (_source, mockup) = mockup(false);
        mockup.mount(image()).unwrap();
        let before = mockup.output();
        assert_eq!(mockup.remove_attribute("src").unwrap(), RenderStatus::Skipped);
        assert_eq!(mockup.output(), before);
        assert_eq!(mockup.advisories(), vec![Advisory::NoMediaSources]);
    }

    #[test]
    fn test_remove_missing_attribute_is_unchanged() {
        let (_source, mockup) = mockup(false);
        mockup.mount(image()).unwrap();
        assert_eq!(mockup.remove_attribute("href").unwrap(), RenderStatus::Unchanged);
    }

    #[test]
    fn test_theme_attribute_toggles_subscription() {
        let (source, mockup) = mockup(false);
        mockup.mount(image()).unwrap();
        assert_eq!(source.subscriber_count(), 1);

        mockup.configure(Attributes::new().with("theme", "dark")).unwrap();
        assert_eq!(mockup.theme(), ColorMode::Dark);
        assert_eq!(source.subscriber_count(), 0);

        mockup.configure(Attributes::new().with("theme", "auto")).unwrap();
        assert_eq!(mockup.theme(), ColorMode::Light);
        assert_eq!(source.subscriber_count(), 1);
    }

    #[test]
    fn test_unmount_stops_following_preference() {
        let (source, mockup) = mockup(false);
        mockup.mount(image()).unwrap();
        mockup.unmount();
        source.set_dark(true);
        assert_eq!(mockup.theme(), ColorMode::Light);
        assert_eq!(mockup.render_count(), 1);
    }

    #[test]
    fn test_drop_releases_subscription() {
        let (source, mockup) = mockup(false);
        mockup.mount(image()).unwrap();
        drop(mockup);
        assert_eq!(source.subscriber_count(), 0);
        source.set_dark(true);
    }

    #[test]
    fn test_deprecated_advisory_once_per_name() {
        let (_source, mockup) = mockup(false);
        mockup.mount(image().with("frame-color", "#111")).unwrap();
        mockup.configure(Attributes::new().with("padding", "2px")).unwrap();
        mockup.configure(Attributes::new().with("base-color", "#222")).unwrap();
        assert_eq!(
            mockup.advisories(),
            vec![
                Advisory::DeprecatedAttribute {
                    used: "frame-color",
                    replacement: "bezel-color"
                },
                Advisory::DeprecatedAttribute {
                    used: "base-color",
                    replacement: "keyboard-color"
                },
            ]
        );
    }
}
