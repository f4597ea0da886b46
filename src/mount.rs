use std::cell::RefCell;
use std::collections::HashSet;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::error::ThemeError;
use crate::logging;
use crate::storage::BrowserStorage;
use crate::surface::PageSurface;
use crate::theme::Theme;

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

const CONFIG_ATTRIBUTE: &str = "data-theme-config";

thread_local! {
    // Toggle ids with a live click listener.
    static ATTACHED: RefCell<HashSet<String>> = RefCell::new(HashSet::new());
}

/// Bind the controller to the host page's toggle markup.
///
/// Applies the stored preference, then registers a click listener that lives
/// for the rest of the page.
///
/// # Errors
///
/// Fails without registering anything when the config is invalid, the toggle
/// or its icon is missing, or a listener is already attached to this toggle
/// (a second one would undo every click).
pub fn attach(config: ThemeConfig) -> Result<Theme, ThemeError> {
    config.validate()?;
    ensure_unattached(&config.toggle_id)?;

    let document = document()?;
    let body = document.body().ok_or(ThemeError::MissingBody)?;

    let toggle = document
        .get_element_by_id(&config.toggle_id)
        .ok_or_else(|| ThemeError::ToggleNotFound(config.toggle_id.clone()))?;

    let config = match toggle.get_attribute(CONFIG_ATTRIBUTE) {
        Some(json) => config.merge_json(&json)?,
        None => config,
    };

    let icon = find_icon(&toggle, &config.icon_selector)?;

    let storage = BrowserStorage::new();
    if !storage.is_available() {
        log::info!("localStorage unavailable, theme changes will not persist");
    }

    let toggle_id = config.toggle_id.clone();
    let surface = PageSurface::new(body, icon, config.clone());
    let controller = ThemeController::new(surface, storage, config);
    let theme = controller.init();

    let on_click = Closure::<dyn FnMut()>::new(move || {
        controller.toggle();
    });
    toggle
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(ThemeError::dom)?;
    // The listener is never removed.
    on_click.forget();
    mark_attached(toggle_id);

    log::debug!("theme toggle attached, initial theme {}", theme.as_str());
    Ok(theme)
}

fn ensure_unattached(toggle_id: &str) -> Result<(), ThemeError> {
    if ATTACHED.with(|ids| ids.borrow().contains(toggle_id)) {
        return Err(ThemeError::AlreadyAttached(toggle_id.to_string()));
    }
    Ok(())
}

fn mark_attached(toggle_id: String) {
    ATTACHED.with(|ids| ids.borrow_mut().insert(toggle_id));
}

fn document() -> Result<Document, ThemeError> {
    web_sys::window()
        .ok_or(ThemeError::NoWindow)?
        .document()
        .ok_or(ThemeError::NoDocument)
}

fn find_icon(toggle: &Element, selector: &str) -> Result<Element, ThemeError> {
    toggle
        .query_selector(selector)
        .map_err(ThemeError::dom)?
        .ok_or_else(|| ThemeError::IconNotFound(selector.to_string()))
}

/// Entry point for the stock page: default config, console logging.
///
/// Use either this or [`attach_with`] on a page, not both; the second call on
/// the same toggle fails with [`ThemeError::AlreadyAttached`].
#[wasm_bindgen]
pub fn run() -> Result<(), JsValue> {
    let config = ThemeConfig::default();
    logging::init(config.level());
    attach(config)?;
    Ok(())
}

/// Attach with a partial config object from JS, e.g.
/// `attach_with({ storageKey: "site-theme", darkClass: "night" })`.
///
/// The logger is installed by the first call only, so `logLevel` has no
/// effect after [`run`] or an earlier `attach_with`.
#[wasm_bindgen]
pub fn attach_with(config: JsValue) -> Result<(), JsValue> {
    let config: ThemeConfig = if config.is_undefined() || config.is_null() {
        ThemeConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| ThemeError::InvalidConfig(e.to_string()))?
    };
    config.validate()?;
    logging::init(config.level());
    attach(config)?;
    Ok(())
}
