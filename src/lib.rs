//! Light/dark theme toggle for web pages.
//!
//! On load the saved preference from `localStorage` is applied to `<body>` and
//! the toggle's icon; each click flips the theme and saves it again. Pages that
//! already carry the toggle markup use [`mount::attach`] (or the `run` /
//! `attach_with` wasm exports). Leptos apps can render the control themselves
//! with [`components::ThemeProvider`] and [`components::ThemeToggle`].

pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod mount;
pub mod storage;
pub mod surface;
pub mod theme;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use error::ThemeError;
pub use mount::{attach, attach_with, run};
pub use theme::{Glyph, Theme};
