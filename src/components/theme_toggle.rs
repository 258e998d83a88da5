//! Single-button theme control cycling light, dark, and system.

use leptos::prelude::*;

use crate::state::theme::{ThemeHandle, ThemeState};
use crate::theme::ThemeController;

/// Theme toggle button.
///
/// Each click advances the stated preference one step through
/// light → dark → system. The glyph shows the stated preference, the title
/// also names the resolved theme when following the system.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let controller = expect_context::<ThemeHandle>();

    view! {
        <button
            class="btn theme-toggle"
            data-testid="theme-toggle"
            on:click=move |_| controller.with_value(ThemeController::toggle_theme)
            title=move || theme.get().title()
            aria-label=move || theme.get().title()
        >
            {move || theme.get().icon()}
        </button>
    }
}
