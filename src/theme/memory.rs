//! In-memory environment for tests and non-browser hosts.
//!
//! Each type is a cheap handle over shared state, so a test can keep one
//! clone to drive or inspect while the controller owns another.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use super::env::{ColorSchemeSource, PreferenceStore, SchemeWatch, ThemeSurface};
use super::{ResolvedTheme, ThemeConfig, ThemeError};

// =============================================================
// MemoryStore
// =============================================================

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, (String, Duration)>>>,
    read_only: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, like a browser with cookies blocked.
    #[must_use]
    pub fn read_only() -> Self {
        Self { read_only: true, ..Self::default() }
    }

    /// Seed `key` with `value` without going through `save`.
    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), (value.to_owned(), Duration::ZERO));
    }

    #[must_use]
    pub fn lifetime_of(&self, key: &str) -> Option<Duration> {
        self.entries.borrow().get(key).map(|(_, lifetime)| *lifetime)
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).map(|(value, _)| value.clone())
    }

    fn save(&self, key: &str, value: &str, lifetime: Duration) -> Result<(), ThemeError> {
        if self.read_only {
            return Err(ThemeError::StorageUnavailable("read-only store".into()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), (value.to_owned(), lifetime));
        Ok(())
    }
}

// =============================================================
// ManualScheme
// =============================================================

#[derive(Default)]
struct SchemeState {
    prefers_dark: Option<bool>,
    watchable: bool,
    next_id: u64,
    watchers: Vec<(u64, Rc<dyn Fn()>)>,
}

/// OS signal driven by hand.
#[derive(Clone)]
pub struct ManualScheme {
    state: Rc<RefCell<SchemeState>>,
}

impl ManualScheme {
    #[must_use]
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            state: Rc::new(RefCell::new(SchemeState {
                prefers_dark: Some(prefers_dark),
                watchable: true,
                ..SchemeState::default()
            })),
        }
    }

    /// A platform with no color-scheme media query at all.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { state: Rc::new(RefCell::new(SchemeState::default())) }
    }

    /// Change the signal and fire every registered watcher.
    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        let watchers = {
            let mut state = self.state.borrow_mut();
            state.prefers_dark = Some(prefers_dark);
            state.watchers.iter().map(|(_, w)| Rc::clone(w)).collect::<Vec<_>>()
        };
        for watcher in watchers {
            watcher();
        }
    }

    #[must_use]
    pub fn watcher_count(&self) -> usize {
        self.state.borrow().watchers.len()
    }
}

impl std::fmt::Debug for ManualScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ManualScheme")
            .field("prefers_dark", &state.prefers_dark)
            .field("watchers", &state.watchers.len())
            .finish()
    }
}

impl ColorSchemeSource for ManualScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.state.borrow().prefers_dark
    }

    fn watch(&self, on_change: Box<dyn Fn()>) -> Option<SchemeWatch> {
        let id = {
            let mut state = self.state.borrow_mut();
            if !state.watchable {
                return None;
            }
            let id = state.next_id;
            state.next_id += 1;
            state.watchers.push((id, Rc::from(on_change)));
            id
        };
        let weak = Rc::downgrade(&self.state);
        Some(SchemeWatch::new(move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().watchers.retain(|(wid, _)| *wid != id);
            }
        }))
    }
}

// =============================================================
// RecordingSurface
// =============================================================

/// Document stand-in that remembers every application.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    applied: Rc<RefCell<Vec<ResolvedTheme>>>,
    marker: Rc<RefCell<Option<String>>>,
    transition: Rc<RefCell<Option<(String, String)>>>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Class currently present on the root element, if any.
    #[must_use]
    pub fn marker(&self) -> Option<String> {
        self.marker.borrow().clone()
    }

    #[must_use]
    pub fn has_dark_marker(&self) -> bool {
        self.marker.borrow().is_some()
    }

    /// `(property, value)` of the transition custom property.
    #[must_use]
    pub fn transition(&self) -> Option<(String, String)> {
        self.transition.borrow().clone()
    }

    #[must_use]
    pub fn applied(&self) -> Vec<ResolvedTheme> {
        self.applied.borrow().clone()
    }
}

impl ThemeSurface for RecordingSurface {
    fn apply(&self, resolved: ResolvedTheme, config: &ThemeConfig) {
        self.applied.borrow_mut().push(resolved);
        *self.marker.borrow_mut() = resolved.is_dark().then(|| config.dark_class.clone());
        *self.transition.borrow_mut() =
            Some((config.transition_property.clone(), config.transition_duration.clone()));
    }
}
