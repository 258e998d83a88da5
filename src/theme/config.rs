//! Theme configuration with production defaults.

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_COOKIE_NAME: &str = "theme-preference";
pub const DEFAULT_COOKIE_LIFETIME_DAYS: u64 = 365;
pub const DEFAULT_DARK_CLASS: &str = "dark";
pub const DEFAULT_TRANSITION_PROPERTY: &str = "--theme-transition-duration";
pub const DEFAULT_TRANSITION_DURATION: &str = "400ms";
pub const DEFAULT_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";

const SECS_PER_DAY: u64 = 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Durable storage key holding `light|dark|system`.
    pub cookie_name: String,
    pub cookie_lifetime_days: u64,
    /// Class present on the root element iff the resolved theme is dark.
    pub dark_class: String,
    pub transition_property: String,
    pub transition_duration: String,
    pub media_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_owned(),
            cookie_lifetime_days: DEFAULT_COOKIE_LIFETIME_DAYS,
            dark_class: DEFAULT_DARK_CLASS.to_owned(),
            transition_property: DEFAULT_TRANSITION_PROPERTY.to_owned(),
            transition_duration: DEFAULT_TRANSITION_DURATION.to_owned(),
            media_query: DEFAULT_MEDIA_QUERY.to_owned(),
        }
    }
}

impl ThemeConfig {
    #[must_use]
    pub fn cookie_lifetime(&self) -> Duration {
        Duration::from_secs(self.cookie_lifetime_days.saturating_mul(SECS_PER_DAY))
    }

    /// Build a config from a JSON object, keeping defaults for absent keys.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
