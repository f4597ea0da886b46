//! Theme controller: applies the saved preference once, then flips and
//! persists it on every toggle.
//!
//! The controller only talks to a [`ThemeSurface`] and a [`PreferenceStore`],
//! so the page wiring lives in `mount` and tests run against in-memory fakes.

use crate::config::ThemeConfig;
use crate::storage::PreferenceStore;
use crate::surface::ThemeSurface;
use crate::theme::{Glyph, Theme};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

pub struct ThemeController<S, P> {
    surface: S,
    store: P,
    config: ThemeConfig,
}

impl<S: ThemeSurface, P: PreferenceStore> ThemeController<S, P> {
    pub fn new(surface: S, store: P, config: ThemeConfig) -> Self {
        Self {
            surface,
            store,
            config,
        }
    }

    /// Apply the stored preference. Only an exact "dark" changes the page;
    /// nothing is written back.
    pub fn init(&self) -> Theme {
        let theme = load_theme(&self.store, &self.config);

        if theme.is_dark() {
            self.surface.add_dark_class();
            self.surface.replace_glyph(Glyph::Sun, Glyph::Moon);
        }

        log::debug!("theme init: applied {}", theme.as_str());
        theme
    }

    /// Flip the page theme, swap the glyph, and persist the result.
    pub fn toggle(&self) -> Theme {
        let theme = Theme::from_dark(self.surface.toggle_dark_class());
        let glyph = theme.glyph();

        self.surface.replace_glyph(glyph.other(), glyph);
        save_theme(&self.store, &self.config, theme);
        theme
    }

    pub fn current(&self) -> Theme {
        Theme::from_dark(self.surface.has_dark_class())
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }
}

/// Read the preference under the configured key; only an exact "dark" is dark.
pub fn load_theme<P: PreferenceStore + ?Sized>(store: &P, config: &ThemeConfig) -> Theme {
    Theme::from_stored(store.load(&config.storage_key).as_deref())
}

/// Persist `theme` as "dark" or "light" under the configured key.
pub fn save_theme<P: PreferenceStore + ?Sized>(store: &P, config: &ThemeConfig, theme: Theme) {
    store.save(&config.storage_key, theme.as_str());
    log::info!("theme switched to {}", theme.as_str());
}
