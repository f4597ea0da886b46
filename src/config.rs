//! Names the controller depends on: storage key, element lookup, and class tokens.
//!
//! Defaults match the stock page markup. Hosts can override any subset through
//! a JS object passed to `attach_with` or a `data-theme-config` JSON attribute
//! on the toggle element.

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_TOGGLE_ID: &str = "theme-toggle";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    pub toggle_id: String,
    /// CSS selector for the icon, resolved inside the toggle element.
    pub icon_selector: String,
    pub storage_key: String,
    /// Class on `<body>` that selects dark styling.
    pub dark_class: String,
    pub sun_class: String,
    pub moon_class: String,
    pub log_level: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            toggle_id: DEFAULT_TOGGLE_ID.to_string(),
            icon_selector: "i".to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            dark_class: "dark-mode".to_string(),
            sun_class: "fa-sun".to_string(),
            moon_class: "fa-moon".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ThemeConfig {
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ThemeError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Layer overrides from a markup attribute on top of `self`.
    /// The toggle id is kept, since the attribute lives on that element.
    pub fn merge_json(&self, json: &str) -> Result<Self, ThemeError> {
        let mut value =
            serde_json::to_value(self).map_err(|e| ThemeError::InvalidConfig(e.to_string()))?;
        let overrides: serde_json::Value =
            serde_json::from_str(json).map_err(|e| ThemeError::InvalidConfig(e.to_string()))?;
        let serde_json::Value::Object(overrides) = overrides else {
            return Err(ThemeError::InvalidConfig(
                "expected a JSON object".to_string(),
            ));
        };
        if let serde_json::Value::Object(base) = &mut value {
            for (k, v) in overrides {
                if k != "toggleId" {
                    base.insert(k, v);
                }
            }
        }
        let merged: Self =
            serde_json::from_value(value).map_err(|e| ThemeError::InvalidConfig(e.to_string()))?;
        merged.validate()?;
        Ok(merged)
    }

    /// Reject names the DOM would throw on. `classList` only accepts a single
    /// non-empty token, and the two glyphs must differ for the swap to show.
    pub fn validate(&self) -> Result<(), ThemeError> {
        for (field, value) in [("toggleId", &self.toggle_id), ("storageKey", &self.storage_key)] {
            if value.is_empty() {
                return Err(ThemeError::InvalidConfig(format!("{} is empty", field)));
            }
        }
        for (field, token) in [
            ("darkClass", &self.dark_class),
            ("sunClass", &self.sun_class),
            ("moonClass", &self.moon_class),
        ] {
            if token.is_empty() {
                return Err(ThemeError::InvalidConfig(format!("{} is empty", field)));
            }
            if token.chars().any(char::is_whitespace) {
                return Err(ThemeError::InvalidConfig(format!(
                    "{} '{}' is not a single class token",
                    field, token
                )));
            }
        }
        if self.sun_class == self.moon_class {
            return Err(ThemeError::InvalidConfig(format!(
                "sunClass and moonClass are both '{}'",
                self.sun_class
            )));
        }
        Ok(())
    }

    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
