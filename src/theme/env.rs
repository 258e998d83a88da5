//! Environment capabilities the theme controller depends on.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser provides all three (cookie, `matchMedia`, `<html>`); see
//! `util::cookie` and `util::dark_mode`. Tests and non-browser hosts use
//! `theme::memory`. A controller without a `ThemeEnv` is running in a
//! non-interactive context such as a server render.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use super::{ResolvedTheme, ThemeConfig, ThemeError};

/// Durable key-value storage with expiry.
pub trait PreferenceStore {
    /// Read `key`. Absence and storage failure both read as `None`.
    fn load(&self, key: &str) -> Option<String>;

    /// Write `key` so it survives reloads for at least `lifetime`.
    fn save(&self, key: &str, value: &str, lifetime: Duration) -> Result<(), ThemeError>;
}

/// OS-level "prefers dark" signal.
pub trait ColorSchemeSource {
    /// Current signal, or `None` if the platform does not expose one.
    fn prefers_dark(&self) -> Option<bool>;

    /// Call `on_change` after every OS scheme change until the returned
    /// watch is cancelled. `None` if change events are unsupported.
    fn watch(&self, on_change: Box<dyn Fn()>) -> Option<SchemeWatch>;
}

/// Document surface carrying the theme marker.
pub trait ThemeSurface {
    fn apply(&self, resolved: ResolvedTheme, config: &ThemeConfig);
}

/// Cancellation handle for a [`ColorSchemeSource::watch`] registration.
///
/// Dropping the handle cancels the registration, same as [`SchemeWatch::cancel`].
#[must_use = "dropping a SchemeWatch unregisters the OS listener immediately"]
pub struct SchemeWatch {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl SchemeWatch {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for SchemeWatch {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl fmt::Debug for SchemeWatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemeWatch").field("active", &self.cancel.is_some()).finish()
    }
}

/// The capabilities of an interactive context.
#[derive(Clone)]
pub struct ThemeEnv {
    pub storage: Rc<dyn PreferenceStore>,
    pub scheme: Rc<dyn ColorSchemeSource>,
    pub surface: Rc<dyn ThemeSurface>,
}

impl ThemeEnv {
    pub fn new(
        storage: impl PreferenceStore + 'static,
        scheme: impl ColorSchemeSource + 'static,
        surface: impl ThemeSurface + 'static,
    ) -> Self {
        Self { storage: Rc::new(storage), scheme: Rc::new(scheme), surface: Rc::new(surface) }
    }
}

impl fmt::Debug for ThemeEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeEnv").finish_non_exhaustive()
    }
}
