use web_sys::{Element, HtmlElement};

use crate::config::ThemeConfig;
use crate::theme::Glyph;

/// The visible half of the theme: a class on the page root and a glyph on the
/// toggle's icon.
pub trait ThemeSurface {
    fn add_dark_class(&self);
    /// Flip the dark class and return whether it is now present.
    fn toggle_dark_class(&self) -> bool;
    fn has_dark_class(&self) -> bool;
    /// Swap `from` for `to` on the icon. No-op when `from` is absent.
    fn replace_glyph(&self, from: Glyph, to: Glyph);
}

pub struct PageSurface {
    body: HtmlElement,
    icon: Element,
    config: ThemeConfig,
}

impl PageSurface {
    pub fn new(body: HtmlElement, icon: Element, config: ThemeConfig) -> Self {
        Self { body, icon, config }
    }
}

impl ThemeSurface for PageSurface {
    fn add_dark_class(&self) {
        if let Err(e) = self.body.class_list().add_1(&self.config.dark_class) {
            log::warn!("failed to add '{}': {:?}", self.config.dark_class, e);
        }
    }

    fn toggle_dark_class(&self) -> bool {
        match self.body.class_list().toggle(&self.config.dark_class) {
            Ok(on) => on,
            Err(e) => {
                log::warn!("failed to toggle '{}': {:?}", self.config.dark_class, e);
                self.has_dark_class()
            }
        }
    }

    fn has_dark_class(&self) -> bool {
        self.body.class_list().contains(&self.config.dark_class)
    }

    fn replace_glyph(&self, from: Glyph, to: Glyph) {
        let from = from.class_token(&self.config);
        let to = to.class_token(&self.config);
        match self.icon.class_list().replace(from, to) {
            Ok(true) => {}
            Ok(false) => log::debug!("icon has no '{}', glyph left as is", from),
            Err(e) => log::warn!("failed to replace '{}' with '{}': {:?}", from, to, e),
        }
    }
}

impl<T: ThemeSurface + ?Sized> ThemeSurface for &T {
    fn add_dark_class(&self) {
        (**self).add_dark_class()
    }

    fn toggle_dark_class(&self) -> bool {
        (**self).toggle_dark_class()
    }

    fn has_dark_class(&self) -> bool {
        (**self).has_dark_class()
    }

    fn replace_glyph(&self, from: Glyph, to: Glyph) {
        (**self).replace_glyph(from, to)
    }
}
