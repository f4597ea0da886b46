use std::rc::Rc;

use leptos::prelude::*;

use crate::config::ThemeConfig;
use crate::storage::PreferenceStore;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// The two page appearances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a stored preference.
    /// - "dark" → dark
    /// - anything else, including a missing value → light
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph shown on the toggle while this theme is active.
    pub fn glyph(&self) -> Glyph {
        match self {
            Theme::Light => Glyph::Sun,
            Theme::Dark => Glyph::Moon,
        }
    }
}

/// Indicator icon glyph. Sun and moon are mutually exclusive class tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Sun,
    Moon,
}

impl Glyph {
    pub fn other(&self) -> Self {
        match self {
            Glyph::Sun => Glyph::Moon,
            Glyph::Moon => Glyph::Sun,
        }
    }

    pub fn class_token<'a>(&self, config: &'a ThemeConfig) -> &'a str {
        match self {
            Glyph::Sun => &config.sun_class,
            Glyph::Moon => &config.moon_class,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<Theme>,
    pub set_theme: WriteSignal<Theme>,
    pub config: StoredValue<ThemeConfig>,
    pub store: StoredValue<Rc<dyn PreferenceStore>, LocalStorage>,
}

/// Apply the theme by adding or removing the dark class on `<body>`.
pub fn apply_theme(theme: Theme, config: &ThemeConfig) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        log::debug!("no document body, theme {} not applied", theme.as_str());
        return;
    };

    let classes = body.class_list();
    let result = if theme.is_dark() {
        classes.add_1(&config.dark_class)
    } else {
        classes.remove_1(&config.dark_class)
    };
    if let Err(e) = result {
        log::warn!("failed to apply {} theme: {:?}", theme.as_str(), e);
    }
}
