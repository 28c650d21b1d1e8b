//! Injected system preference signal.
//!
//! A mockup in auto theme mode needs two things from its host: the current
//! dark-mode preference, and a notification when it changes. Both are
//! provided through [`ThemeSource`] so that hosts can wire any signal they
//! have, and tests can drive flips deterministically with
//! [`ManualThemeSource`].

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Callback invoked when the preference changes.
pub type ChangeCallback = Rc<dyn Fn()>;

/// A source for the system light/dark preference.
pub trait ThemeSource {
    /// Returns true if the system currently prefers a dark color scheme.
    fn is_dark(&self) -> bool;

    /// Registers `callback` to run whenever the preference flips.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// cancelled or dropped.
    fn on_change(&self, callback: ChangeCallback) -> Subscription;
}

/// Handle to a registered change listener.
///
/// Dropping the handle unsubscribes, so a listener can never outlive the
/// owner of its subscription.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Creates a subscription that runs `cancel` exactly once when released.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Creates a subscription with nothing to release.
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    /// Unsubscribes now.
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[derive(Default)]
struct ListenerSet {
    next_id: u64,
    entries: Vec<(u64, ChangeCallback)>,
}

/// Listener bookkeeping shared by the provided sources.
#[derive(Clone, Default)]
pub(crate) struct Listeners {
    set: Rc<RefCell<ListenerSet>>,
}

impl Listeners {
    pub(crate) fn subscribe(&self, callback: ChangeCallback) -> Subscription {
        let id = {
            let mut set = self.set.borrow_mut();
            let id = set.next_id;
            set.next_id += 1;
            set.entries.push((id, callback));
            id
        };

        let weak: Weak<RefCell<ListenerSet>> = Rc::downgrade(&self.set);
        Subscription::new(move || {
            if let Some(set) = weak.upgrade() {
                set.borrow_mut().entries.retain(|(entry, _)| *entry != id);
            }
        })
    }

    /// Runs every listener registered at the time of the call.
    ///
    /// Listeners may subscribe or unsubscribe while being notified. One
    /// cancelled by an earlier listener in the same pass is not run.
    pub(crate) fn notify(&self) {
        let snapshot: Vec<(u64, ChangeCallback)> = self
            .set
            .borrow()
            .entries
            .iter()
            .map(|(id, callback)| (*id, Rc::clone(callback)))
            .collect();
        for (id, callback) in snapshot {
            if self.is_live(id) {
                callback();
            }
        }
    }

    fn is_live(&self, id: u64) -> bool {
        self.set.borrow().entries.iter().any(|(entry, _)| *entry == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.set.borrow().entries.len()
    }
}

/// A preference signal driven by the host.
///
/// Useful when the host already observes the preference itself (a webview
/// bridge, a settings toggle), and in tests.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use device_mockup::{ManualThemeSource, ThemeSource};
///
/// let source = ManualThemeSource::new(false);
/// let flips = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&flips);
/// let subscription = source.on_change(Rc::new(move || counter.set(counter.get() + 1)));
///
/// source.set_dark(true);
/// source.set_dark(true); // unchanged, no notification
/// assert_eq!(flips.get(), 1);
///
/// drop(subscription);
/// assert_eq!(source.subscriber_count(), 0);
/// ```
#[derive(Default)]
pub struct ManualThemeSource {
    dark: Cell<bool>,
    listeners: Listeners,
}

impl ManualThemeSource {
    pub fn new(dark: bool) -> Self {
        Self {
            dark: Cell::new(dark),
            listeners: Listeners::default(),
        }
    }

    /// Updates the preference, notifying listeners if it changed.
    pub fn set_dark(&self, dark: bool) {
        if self.dark.replace(dark) != dark {
            self.listeners.notify();
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl ThemeSource for ManualThemeSource {
    fn is_dark(&self) -> bool {
        self.dark.get()
    }

    fn on_change(&self, callback: ChangeCallback) -> Subscription {
        self.listeners.subscribe(callback)
    }
}

impl fmt::Debug for ManualThemeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualThemeSource")
            .field("dark", &self.dark.get())
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}
