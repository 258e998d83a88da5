#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::theme::{ThemeController, ThemePreference};

#[test]
fn browser_env_is_none_in_non_hydrate_tests() {
    assert!(browser_env(&ThemeConfig::default()).is_none());
}

#[test]
fn media_query_reports_no_signal() {
    let scheme = MediaQueryScheme::new("(prefers-color-scheme: dark)");
    assert_eq!(scheme.prefers_dark(), None);
    assert!(scheme.watch(Box::new(|| {})).is_none());
}

#[test]
fn document_surface_apply_is_noop_but_callable() {
    let surface = DocumentSurface::new();
    let config = ThemeConfig::default();
    surface.apply(ResolvedTheme::Dark, &config);
    surface.apply(ResolvedTheme::Light, &config);
}

#[test]
fn browser_controller_degrades_to_detached() {
    let config = ThemeConfig::default();
    let controller = ThemeController::with_env(browser_env(&config), config);
    assert!(!controller.is_interactive());
    assert!(controller.initialize().is_none());
    assert_eq!(controller.stored_preference(), ThemePreference::System);
}
