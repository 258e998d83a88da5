//! Theme preference controller.
//!
//! The single authority over the stored preference and the document's theme
//! marker. Every operation degrades to a default instead of failing: without
//! a `ThemeEnv` (server render) reads return `System`/`Light` and writes are
//! no-ops, so callers never need to guard.
//!
//! ORDERING
//! ========
//! `set_theme` persists before it publishes. A reload can therefore never
//! observe a preference that was shown but not stored.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::fmt;
use std::rc::Rc;

use super::env::{SchemeWatch, ThemeEnv};
use super::store::Store;
use super::{ResolvedTheme, ThemeConfig, ThemePreference, resolve};

#[derive(Clone, Debug)]
pub struct ThemeController {
    env: Option<ThemeEnv>,
    config: Rc<ThemeConfig>,
    preference: Store<ThemePreference>,
    resolved: Store<ResolvedTheme>,
}

impl ThemeController {
    /// Controller for an interactive context.
    pub fn new(env: ThemeEnv, config: ThemeConfig) -> Self {
        Self::with_env(Some(env), config)
    }

    /// Controller for a context with no document (server render).
    pub fn detached(config: ThemeConfig) -> Self {
        Self::with_env(None, config)
    }

    pub fn with_env(env: Option<ThemeEnv>, config: ThemeConfig) -> Self {
        Self {
            env,
            config: Rc::new(config),
            preference: Store::new(ThemePreference::System),
            resolved: Store::new(ResolvedTheme::Light),
        }
    }

    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.env.is_some()
    }

    /// Observable stated preference.
    #[must_use]
    pub fn preference(&self) -> &Store<ThemePreference> {
        &self.preference
    }

    /// Observable applied theme.
    #[must_use]
    pub fn resolved(&self) -> &Store<ResolvedTheme> {
        &self.resolved
    }

    /// Preference from durable storage; `System` if absent or invalid.
    #[must_use]
    pub fn stored_preference(&self) -> ThemePreference {
        let Some(env) = &self.env else {
            return ThemePreference::System;
        };
        let raw = env.storage.load(&self.config.cookie_name);
        let pref = ThemePreference::from_stored(raw.as_deref());
        if let Some(raw) = raw.as_deref()
            && raw != pref.as_str()
        {
            log::debug!("ignoring stored theme: {raw:?}");
        }
        pref
    }

    /// Concrete theme for `pref` given the current OS signal. `System`
    /// resolves to `Light` when no signal is available.
    #[must_use]
    pub fn resolve(&self, pref: ThemePreference) -> ResolvedTheme {
        resolve_with(self.env.as_ref(), pref)
    }

    /// Write `resolved` to the document surface.
    pub fn apply(&self, resolved: ResolvedTheme) {
        if let Some(env) = &self.env {
            env.surface.apply(resolved, &self.config);
        }
    }

    /// Load, resolve, publish, and apply the stored preference, then follow
    /// OS scheme changes while the preference is `System`.
    ///
    /// Returns `None` without doing anything in a non-interactive context.
    /// The returned listener must be cancelled when the hosting view unmounts.
    pub fn initialize(&self) -> Option<ThemeListener> {
        let env = self.env.as_ref()?;

        let stored = self.stored_preference();
        let resolved = resolve_with(Some(env), stored);
        self.preference.set(stored);
        self.resolved.set(resolved);
        env.surface.apply(resolved, &self.config);
        log::debug!("theme initialized: preference={stored} resolved={resolved}");

        let preference = self.preference.clone();
        let resolved_store = self.resolved.clone();
        let handler_env = env.clone();
        let config = Rc::clone(&self.config);
        let on_change = move || {
            if preference.get() != ThemePreference::System {
                return;
            }
            let next = resolve_with(Some(&handler_env), ThemePreference::System);
            resolved_store.set(next);
            handler_env.surface.apply(next, &config);
            log::debug!("system color scheme changed: resolved={next}");
        };

        let watch = env.scheme.watch(Box::new(on_change));
        if watch.is_none() {
            log::debug!("color scheme change events unavailable");
        }
        Some(ThemeListener { watch })
    }

    /// Persist `pref`, then publish it and its resolved theme, then apply.
    pub fn set_theme(&self, pref: ThemePreference) {
        let Some(env) = &self.env else {
            return;
        };

        if let Err(err) = env
            .storage
            .save(&self.config.cookie_name, pref.as_str(), self.config.cookie_lifetime())
        {
            log::warn!("theme preference not persisted: {err}");
        }
        self.preference.set(pref);

        let resolved = resolve_with(Some(env), pref);
        self.resolved.set(resolved);
        env.surface.apply(resolved, &self.config);
        log::info!("theme set: preference={pref} resolved={resolved}");
    }

    /// Advance light → dark → system → light.
    pub fn toggle_theme(&self) {
        self.set_theme(self.preference.get().next());
    }
}

fn resolve_with(env: Option<&ThemeEnv>, pref: ThemePreference) -> ResolvedTheme {
    let prefers_dark = pref == ThemePreference::System
        && env.and_then(|env| env.scheme.prefers_dark()).unwrap_or(false);
    resolve(pref, prefers_dark)
}

/// Teardown handle for the OS scheme subscription made by
/// [`ThemeController::initialize`]. Dropping it also unregisters.
#[must_use = "dropping the listener stops following OS scheme changes"]
pub struct ThemeListener {
    watch: Option<SchemeWatch>,
}

impl ThemeListener {
    #[must_use]
    pub fn is_watching(&self) -> bool {
        self.watch.is_some()
    }

    pub fn cancel(self) {
        if let Some(watch) = self.watch {
            watch.cancel();
        }
    }
}

impl fmt::Debug for ThemeListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeListener").field("watching", &self.is_watching()).finish()
    }
}
