//! Portfolio content model and derived views.
//!
//! The content itself is static data supplied by the host; this module only
//! types it and derives the two views the page needs: hero copy rewritten
//! for the current job, and the active navigation entry.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod types;

pub use types::*;

const HERO_TITLE_SUFFIX: &str = "with Leadership Experience";

impl PortfolioData {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Copy of `self` with hero copy taken from the current position.
    ///
    /// Returns an unchanged copy when no position is flagged current.
    #[must_use]
    pub fn with_current_job(&self) -> Self {
        let mut data = self.clone();
        if let Some(current) = self.experience.current_position() {
            data.hero.title = format!("{} {HERO_TITLE_SUFFIX}", current.title);
            data.hero.subtitle.clone_from(&current.title);
        }
        data
    }

    /// Mark the navigation entry for `section` (without `#`) active.
    pub fn set_active_section(&mut self, section: &str) {
        self.navigation.set_active_section(section);
    }
}

impl Experience {
    /// First position flagged `is_current`.
    #[must_use]
    pub fn current_position(&self) -> Option<&Position> {
        self.positions.iter().find(|p| p.is_current)
    }
}

impl Navigation {
    /// Activate exactly the items whose anchor is `#{section}`.
    pub fn set_active_section(&mut self, section: &str) {
        let anchor = format!("#{section}");
        for item in &mut self.menu_items {
            item.is_active = item.anchor == anchor;
        }
    }

    #[must_use]
    pub fn active_item(&self) -> Option<&NavigationItem> {
        self.menu_items.iter().find(|item| item.is_active)
    }

    #[must_use]
    pub fn sorted_items(&self) -> Vec<&NavigationItem> {
        let mut items = self.menu_items.iter().collect::<Vec<_>>();
        items.sort_by_key(|item| item.order);
        items
    }
}

impl Skills {
    #[must_use]
    pub fn sorted_categories(&self) -> Vec<&SkillCategory> {
        let mut categories = self.categories.iter().collect::<Vec<_>>();
        categories.sort_by_key(|c| c.display_order);
        categories
    }
}
