//! Browser side of the theme: the `<html>` marker and the OS scheme query.
//!
//! `DocumentSurface` toggles the dark class on `<html>` and sets the
//! transition custom property. `MediaQueryScheme` reads and watches
//! `(prefers-color-scheme: dark)`. Both need a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Off-browser builds compile the same types as inert shells so SSR paths
//! stay deterministic. `browser_env` returns `None` there, which the
//! controller treats as a non-interactive context.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

use crate::theme::{ColorSchemeSource, ResolvedTheme, SchemeWatch, ThemeConfig, ThemeEnv, ThemeSurface};
#[cfg(feature = "hydrate")]
use crate::util::cookie::CookieStore;

/// Assemble the browser environment, or `None` without a window and document.
pub fn browser_env(config: &ThemeConfig) -> Option<ThemeEnv> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        window.document()?;
        Some(ThemeEnv::new(
            CookieStore::new(),
            MediaQueryScheme::new(&config.media_query),
            DocumentSurface::new(),
        ))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        None
    }
}

/// The root `<html>` element as a [`ThemeSurface`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentSurface;

impl DocumentSurface {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ThemeSurface for DocumentSurface {
    fn apply(&self, resolved: ResolvedTheme, config: &ThemeConfig) {
        #[cfg(feature = "hydrate")]
        {
            let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                return;
            };

            let class_list = root.class_list();
            let toggled = if resolved.is_dark() {
                class_list.add_1(&config.dark_class)
            } else {
                class_list.remove_1(&config.dark_class)
            };
            if let Err(e) = toggled {
                log::warn!("theme class not applied: {e:?}");
            }

            if let Some(el) = root.dyn_ref::<web_sys::HtmlElement>() {
                if let Err(e) = el
                    .style()
                    .set_property(&config.transition_property, &config.transition_duration)
                {
                    log::warn!("theme transition not applied: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (resolved, config);
        }
    }
}

/// `matchMedia` color-scheme query as a [`ColorSchemeSource`].
#[derive(Clone, Debug, Default)]
pub struct MediaQueryScheme {
    #[cfg(feature = "hydrate")]
    list: Option<web_sys::MediaQueryList>,
}

impl MediaQueryScheme {
    #[must_use]
    pub fn new(query: &str) -> Self {
        #[cfg(feature = "hydrate")]
        {
            let list = web_sys::window().and_then(|w| w.match_media(query).ok().flatten());
            if list.is_none() {
                log::debug!("matchMedia unavailable for {query}");
            }
            Self { list }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = query;
            Self {}
        }
    }
}

impl ColorSchemeSource for MediaQueryScheme {
    fn prefers_dark(&self) -> Option<bool> {
        #[cfg(feature = "hydrate")]
        {
            self.list.as_ref().map(web_sys::MediaQueryList::matches)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn watch(&self, on_change: Box<dyn Fn()>) -> Option<SchemeWatch> {
        #[cfg(feature = "hydrate")]
        {
            let list = self.list.clone()?;
            let cb = Closure::wrap(Box::new(move |_event: web_sys::MediaQueryListEvent| {
                on_change();
            }) as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);

            if let Err(e) = list.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref()) {
                log::warn!("color scheme listener not registered: {e:?}");
                return None;
            }

            Some(SchemeWatch::new(move || {
                if let Err(e) = list.remove_event_listener_with_callback("change", cb.as_ref().unchecked_ref()) {
                    log::warn!("color scheme listener not removed: {e:?}");
                }
                drop(cb);
            }))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = on_change;
            None
        }
    }
}
