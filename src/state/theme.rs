//! Leptos binding for the theme controller.
//!
//! DESIGN
//! ======
//! Components read a `RwSignal<ThemeState>` from context and never touch the
//! controller's stores directly. `ThemeBinding` mirrors the stores into that
//! signal and owns the OS listener, so one `teardown()` releases everything
//! the app root set up.
//!
//! The server renders `ThemeState::default()`. Connecting must wait until
//! hydration has finished, otherwise hydrated attributes keep the server
//! values while the signal already holds the stored preference.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;

use crate::theme::{ResolvedTheme, Subscription, ThemeController, ThemeListener, ThemePreference};

/// Controller handle provided via context. `ThemeController` is `!Send`, so
/// it lives in local storage.
pub type ThemeHandle = StoredValue<ThemeController, LocalStorage>;

/// Snapshot of the controller's two published values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub preference: ThemePreference,
    pub resolved: ResolvedTheme,
}

impl ThemeState {
    /// Glyph for the toggle button, keyed on the stated preference.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self.preference {
            ThemePreference::Light => "☀",
            ThemePreference::Dark => "☾",
            ThemePreference::System => "◐",
        }
    }

    #[must_use]
    pub fn title(&self) -> String {
        match self.preference {
            ThemePreference::System => format!("Theme: system ({})", self.resolved),
            pref => format!("Theme: {pref}"),
        }
    }
}

pub struct ThemeBinding {
    listener: Option<ThemeListener>,
    subscriptions: Vec<Subscription>,
}

impl ThemeBinding {
    /// Mirror `controller` into `state`, then initialize the controller.
    pub fn connect(controller: &ThemeController, state: RwSignal<ThemeState>) -> Self {
        let subscriptions = vec![
            controller
                .preference()
                .subscribe(move |pref| state.update(|s| s.preference = *pref)),
            controller
                .resolved()
                .subscribe(move |resolved| state.update(|s| s.resolved = *resolved)),
        ];
        let listener = controller.initialize();
        Self { listener, subscriptions }
    }

    /// Connect into `slot` unless a binding is already there. Returns
    /// whether a new binding was made.
    pub fn attach(
        slot: &mut Option<ThemeBinding>,
        controller: &ThemeController,
        state: RwSignal<ThemeState>,
    ) -> bool {
        if slot.is_some() {
            return false;
        }
        *slot = Some(Self::connect(controller, state));
        true
    }

    #[must_use]
    pub fn is_watching(&self) -> bool {
        self.listener.as_ref().is_some_and(ThemeListener::is_watching)
    }

    pub fn teardown(self) {
        if let Some(listener) = self.listener {
            listener.cancel();
        }
        for sub in self.subscriptions {
            sub.unsubscribe();
        }
    }
}

impl std::fmt::Debug for ThemeBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeBinding")
            .field("listener", &self.listener)
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}
