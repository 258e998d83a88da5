//! Error type for theme environment adapters.
//!
//! None of these escape the controller: every variant is logged and mapped
//! to the default preference or resolved theme.

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// A stored value was not one of `light`, `dark`, `system`.
    #[error("invalid theme preference: {0:?}")]
    InvalidPreference(String),

    /// No `window` global (server render or worker).
    #[error("window unavailable")]
    NoWindow,

    /// No `document` on the window.
    #[error("document unavailable")]
    NoDocument,

    /// Durable storage refused the read or write.
    #[error("preference storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
}
