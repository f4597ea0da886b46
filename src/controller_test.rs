use std::cell::RefCell;
use std::collections::BTreeSet;

use super::*;
use crate::storage::MemoryStore;

/// Class lists for `<body>` and the icon, with `classList` semantics.
struct FakeSurface {
    config: ThemeConfig,
    body: RefCell<BTreeSet<String>>,
    icon: RefCell<BTreeSet<String>>,
}

impl FakeSurface {
    /// Markup default: light page, sun icon.
    fn new() -> Self {
        Self::with_icon(&["fa-solid", "fa-sun"])
    }

    fn with_icon(classes: &[&str]) -> Self {
        Self {
            config: ThemeConfig::default(),
            body: RefCell::new(BTreeSet::new()),
            icon: RefCell::new(classes.iter().map(|c| c.to_string()).collect()),
        }
    }

    fn body_is_dark(&self) -> bool {
        self.body.borrow().contains("dark-mode")
    }

    fn icon_has(&self, token: &str) -> bool {
        self.icon.borrow().contains(token)
    }

    fn snapshot(&self) -> (BTreeSet<String>, BTreeSet<String>) {
        (self.body.borrow().clone(), self.icon.borrow().clone())
    }
}

impl ThemeSurface for FakeSurface {
    fn add_dark_class(&self) {
        self.body.borrow_mut().insert(self.config.dark_class.clone());
    }

    fn toggle_dark_class(&self) -> bool {
        let mut body = self.body.borrow_mut();
        if body.remove(&self.config.dark_class) {
            false
        } else {
            body.insert(self.config.dark_class.clone());
            true
        }
    }

    fn has_dark_class(&self) -> bool {
        self.body_is_dark()
    }

    fn replace_glyph(&self, from: Glyph, to: Glyph) {
        let mut icon = self.icon.borrow_mut();
        if icon.remove(from.class_token(&self.config)) {
            icon.insert(to.class_token(&self.config).to_string());
        }
    }
}

fn controller<'a>(
    surface: &'a FakeSurface,
    store: &'a MemoryStore,
) -> ThemeController<&'a FakeSurface, &'a MemoryStore> {
    ThemeController::new(surface, store, ThemeConfig::default())
}

// =============================================================
// init
// =============================================================

#[test]
fn init_with_stored_dark_applies_dark_and_moon() {
    let surface = FakeSurface::new();
    let store = MemoryStore::with_entry("theme", "dark");

    let theme = controller(&surface, &store).init();

    assert_eq!(theme, Theme::Dark);
    assert!(surface.body_is_dark());
    assert!(surface.icon_has("fa-moon"));
    assert!(!surface.icon_has("fa-sun"));
}

#[test]
fn init_without_preference_leaves_page_and_storage_alone() {
    let surface = FakeSurface::new();
    let store = MemoryStore::new();
    let before = surface.snapshot();

    let theme = controller(&surface, &store).init();

    assert_eq!(theme, Theme::Light);
    assert_eq!(surface.snapshot(), before);
    assert!(surface.icon_has("fa-sun"));
    assert!(store.is_empty());
}

#[test]
fn init_treats_unexpected_values_as_light() {
    for value in ["light", "Dark", "true", "", "corrupted"] {
        let surface = FakeSurface::new();
        let store = MemoryStore::with_entry("theme", value);

        let theme = controller(&surface, &store).init();

        assert_eq!(theme, Theme::Light, "value {:?}", value);
        assert!(!surface.body_is_dark());
        assert!(surface.icon_has("fa-sun"));
        assert_eq!(store.load("theme").as_deref(), Some(value));
    }
}

#[test]
fn init_without_sun_token_still_applies_dark_class() {
    let surface = FakeSurface::with_icon(&["fa-solid"]);
    let store = MemoryStore::with_entry("theme", "dark");

    controller(&surface, &store).init();

    assert!(surface.body_is_dark());
    assert!(!surface.icon_has("fa-moon"));
}

#[test]
fn init_reads_configured_key() {
    let surface = FakeSurface::new();
    let store = MemoryStore::with_entry("site-theme", "dark");
    let config = ThemeConfig {
        storage_key: "site-theme".to_string(),
        ..ThemeConfig::default()
    };

    let theme = ThemeController::new(&surface, &store, config).init();

    assert_eq!(theme, Theme::Dark);
    assert!(surface.body_is_dark());
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_from_light_goes_dark_and_persists() {
    let surface = FakeSurface::new();
    let store = MemoryStore::new();
    let ctl = controller(&surface, &store);

    assert_eq!(ctl.toggle(), Theme::Dark);

    assert!(surface.body_is_dark());
    assert!(surface.icon_has("fa-moon"));
    assert_eq!(store.load("theme").as_deref(), Some("dark"));
}

#[test]
fn toggle_from_dark_goes_light_and_persists() {
    let surface = FakeSurface::new();
    let store = MemoryStore::with_entry("theme", "dark");
    let ctl = controller(&surface, &store);
    ctl.init();

    assert_eq!(ctl.toggle(), Theme::Light);

    assert!(!surface.body_is_dark());
    assert!(surface.icon_has("fa-sun"));
    assert!(!surface.icon_has("fa-moon"));
    assert_eq!(store.load("theme").as_deref(), Some("light"));
}

#[test]
fn double_toggle_restores_visual_state() {
    for stored in [None, Some("dark")] {
        let surface = FakeSurface::new();
        let store = match stored {
            Some(v) => MemoryStore::with_entry("theme", v),
            None => MemoryStore::new(),
        };
        let ctl = controller(&surface, &store);
        ctl.init();
        let before = surface.snapshot();

        ctl.toggle();
        ctl.toggle();

        assert_eq!(surface.snapshot(), before, "stored {:?}", stored);
    }
}

#[test]
fn glyph_and_class_stay_consistent_across_toggles() {
    let surface = FakeSurface::new();
    let store = MemoryStore::new();
    let ctl = controller(&surface, &store);
    ctl.init();

    for _ in 0..7 {
        let theme = ctl.toggle();
        assert_eq!(surface.body_is_dark(), surface.icon_has("fa-moon"));
        assert_eq!(surface.icon_has("fa-sun"), !surface.icon_has("fa-moon"));
        assert_eq!(ctl.current(), theme);
        assert_eq!(store.load("theme").as_deref(), Some(theme.as_str()));
    }
}

#[test]
fn stored_dark_then_click_scenario() {
    let surface = FakeSurface::new();
    let store = MemoryStore::with_entry("theme", "dark");
    let ctl = controller(&surface, &store);

    ctl.init();
    assert!(surface.body_is_dark());
    assert!(surface.icon_has("fa-moon"));

    ctl.toggle();
    assert!(!surface.body_is_dark());
    assert!(surface.icon_has("fa-sun"));
    assert_eq!(store.load("theme").as_deref(), Some("light"));
}

#[test]
fn current_reflects_body_class() {
    let surface = FakeSurface::new();
    let store = MemoryStore::new();
    let ctl = controller(&surface, &store);
    assert_eq!(ctl.current(), Theme::Light);

    surface.add_dark_class();
    assert_eq!(ctl.current(), Theme::Dark);
    assert_eq!(ctl.config().dark_class, "dark-mode");
}
