use std::rc::Rc;

use leptos::prelude::*;

use crate::config::ThemeConfig;
use crate::controller::{load_theme, save_theme};
use crate::storage::{BrowserStorage, PreferenceStore};
use crate::theme::{apply_theme, Theme, ThemeContext};

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

impl ThemeContext {
    /// Seed the theme signal from `store`.
    pub fn new(store: Rc<dyn PreferenceStore>, config: ThemeConfig) -> Self {
        let (theme, set_theme) = signal(load_theme(store.as_ref(), &config));
        Self {
            theme,
            set_theme,
            config: StoredValue::new(config),
            store: StoredValue::new_local(store),
        }
    }

    /// Flip the theme and persist it.
    pub fn toggle(&self) -> Theme {
        let next = self.theme.get_untracked().toggled();
        self.set_theme.set(next);
        let config = self.config.get_value();
        self.store
            .with_value(|store| save_theme(store.as_ref(), &config, next));
        next
    }

    /// Icon classes for the current theme.
    pub fn icon_class(&self) -> String {
        let glyph = self.theme.get().glyph();
        self.config
            .with_value(|config| format!("fa-solid {}", glyph.class_token(config)))
    }
}

/// Provides [`ThemeContext`] to `children`, seeded from the saved preference.
/// Without a `store`, the preference lives in `localStorage`.
#[component]
pub fn ThemeProvider(
    #[prop(optional)] config: Option<ThemeConfig>,
    #[prop(optional)] store: Option<Rc<dyn PreferenceStore>>,
    children: Children,
) -> impl IntoView {
    let store = store.unwrap_or_else(|| Rc::new(BrowserStorage::new()));
    let ctx = ThemeContext::new(store, config.unwrap_or_default());
    provide_context(ctx);

    // Apply theme to DOM whenever the signal changes
    Effect::new(move |_| {
        let t = ctx.theme.get();
        ctx.config.with_value(|c| apply_theme(t, c));
    });

    children()
}

/// Toggle button whose icon follows the current theme.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();

    let label = move || {
        if ctx.theme.get().is_dark() {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        }
    };

    view! {
        <button
            id=ctx.config.with_value(|c| c.toggle_id.clone())
            class="theme-toggle"
            type="button"
            aria-label=label
            title=label
            on:click=move |_| {
                ctx.toggle();
            }
        >
            <i class=move || ctx.icon_class()></i>
        </button>
    }
}
