//! Root application component and theme wiring.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};

use crate::components::theme_toggle::ThemeToggle;
use crate::state::theme::{ThemeBinding, ThemeHandle, ThemeState};
use crate::theme::{ThemeConfig, ThemeController};
use crate::util::dark_mode::browser_env;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the page's single `ThemeController`. On the server the controller
/// has no environment and stays inert; in the browser, once hydrated, it
/// reads the cookie, applies the theme, and follows OS scheme changes until
/// unmount.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ThemeConfig::default();
    let controller = ThemeController::with_env(browser_env(&config), config);
    let theme = RwSignal::new(ThemeState::default());

    let handle: ThemeHandle = StoredValue::new_local(controller);
    let binding = StoredValue::new_local(None::<ThemeBinding>);

    // Effects run only in the browser, after hydration.
    Effect::new(move || {
        handle.with_value(|controller| {
            binding.update_value(|slot| {
                ThemeBinding::attach(slot, controller, theme);
            });
        });
    });
    on_cleanup(move || {
        binding.update_value(|b| {
            if let Some(b) = b.take() {
                b.teardown();
            }
        });
    });

    provide_context(theme);
    provide_context(handle);

    view! {
        <Title text="Portfolio"/>

        <header class="site-header" data-testid="navigation">
            <a href="#hero" class="site-header__brand">"Portfolio"</a>
            <span class="site-header__spacer"></span>
            <ThemeToggle/>
        </header>
        <main id="hero" class="site-main"></main>
    }
}
