//! Cookie-backed preference storage.
//!
//! Parsing and formatting are plain string functions so they can be tested
//! off-browser; `CookieStore` is the hydrate-only glue over
//! `document.cookie`.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use std::time::Duration;

use crate::theme::{PreferenceStore, ThemeError};

/// Value of the first `name=value` entry in a `document.cookie` string.
#[must_use]
pub fn find_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .map(str::trim_start)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
}

/// Build a site-wide, lax, expiring cookie assignment.
#[must_use]
pub fn format_cookie(name: &str, value: &str, expires_utc: &str) -> String {
    format!("{name}={value}; expires={expires_utc}; path=/; SameSite=Lax")
}

/// `document.cookie` as a [`PreferenceStore`].
#[derive(Clone, Debug, Default)]
pub struct CookieStore;

impl CookieStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "hydrate")]
fn html_document() -> Result<web_sys::HtmlDocument, ThemeError> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
    let document = window.document().ok_or(ThemeError::NoDocument)?;
    document
        .dyn_into::<web_sys::HtmlDocument>()
        .map_err(|_| ThemeError::NoDocument)
}

#[cfg(feature = "hydrate")]
fn expiry_utc(lifetime: Duration) -> String {
    #[allow(clippy::cast_precision_loss)]
    let expires_ms = js_sys::Date::now() + lifetime.as_millis() as f64;
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(expires_ms));
    String::from(date.to_utc_string())
}

impl PreferenceStore for CookieStore {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let header = match html_document().and_then(|doc| {
                doc.cookie().map_err(|e| ThemeError::StorageUnavailable(format!("{e:?}")))
            }) {
                Ok(header) => header,
                Err(err) => {
                    log::debug!("cookie read skipped: {err}");
                    return None;
                }
            };
            find_cookie(&header, key).map(str::to_owned)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&self, key: &str, value: &str, lifetime: Duration) -> Result<(), ThemeError> {
        #[cfg(feature = "hydrate")]
        {
            let doc = html_document()?;
            let cookie = format_cookie(key, value, &expiry_utc(lifetime));
            doc.set_cookie(&cookie)
                .map_err(|e| ThemeError::StorageUnavailable(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value, lifetime);
            Err(ThemeError::NoWindow)
        }
    }
}
