//! Light/dark theme.
//!
//! The preference lives in the key-value store under `theme`. The controller
//! is the single owner of the current value; every toggle persists first and
//! then re-renders, so the stored and displayed themes never disagree.
//!
//! Toggle buttons are matched by delegation on the document, so buttons that
//! arrive later with a loaded fragment work without rebinding. They only need
//! their icon re-rendered once inserted.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Parse a stored value. Anything but `light`/`dark` is the default.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// How the document renders this theme.
    #[must_use]
    pub fn view(self) -> ThemeView {
        match self {
            Self::Light => {
                ThemeView { data_theme: "light", light_class: true, icon_add: "fa-moon", icon_remove: "fa-sun" }
            }
            Self::Dark => {
                ThemeView { data_theme: "dark", light_class: false, icon_add: "fa-sun", icon_remove: "fa-moon" }
            }
        }
    }
}

/// Document writes for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeView {
    /// `data-theme` on `<html>`.
    pub data_theme: &'static str,
    /// `light-theme` class on `<body>`.
    pub light_class: bool,
    /// Icon class every toggle button shows (the theme a click switches to).
    pub icon_add: &'static str,
    pub icon_remove: &'static str,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeController {
    theme: Theme,
}

impl ThemeController {
    /// Read the persisted theme once.
    #[must_use]
    pub fn init(store: &dyn KeyValueStore) -> Self {
        let theme = Theme::parse(store.get(consts::THEME_KEY).as_deref());
        log::debug!("theme initialized: {}", theme.as_str());
        Self { theme }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip and persist. A rejected write is logged; the flip still applies
    /// for the rest of the session.
    pub fn toggle(&mut self, store: &mut dyn KeyValueStore) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(err) = store.set(consts::THEME_KEY, self.theme.as_str()) {
            log::warn!("theme not persisted: {err}");
        }
        self.theme
    }
}

#[cfg(feature = "hydrate")]
pub use browser::ThemeUi;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{Theme, ThemeController};
    use crate::consts;
    use crate::dom;
    use crate::storage::KeyValueStore;

    /// Document-level theme binding.
    #[derive(Clone)]
    pub struct ThemeUi {
        controller: Rc<RefCell<ThemeController>>,
        store: Rc<RefCell<Box<dyn KeyValueStore>>>,
    }

    impl ThemeUi {
        /// Apply the persisted theme and start listening for toggle clicks.
        pub fn install(store: Rc<RefCell<Box<dyn KeyValueStore>>>) -> Self {
            let controller = ThemeController::init(store.borrow().as_ref());
            let ui = Self { controller: Rc::new(RefCell::new(controller)), store };
            ui.render();

            if let Some(document) = dom::document() {
                let on_click = ui.clone();
                dom::on(&document, "click", move |event| {
                    let hit = dom::event_element(&event)
                        .and_then(|el| dom::closest(&el, consts::THEME_TOGGLE_SELECTOR));
                    if hit.is_some() {
                        on_click.toggle();
                    }
                });
            }
            ui
        }

        pub fn toggle(&self) -> Theme {
            let theme = {
                let mut store = self.store.borrow_mut();
                self.controller.borrow_mut().toggle(store.as_mut())
            };
            log::info!("theme switched to {}", theme.as_str());
            self.render();
            theme
        }

        /// Mirror the current theme onto the document and every toggle
        /// button present right now.
        pub fn render(&self) {
            let view = self.controller.borrow().theme().view();
            if let Some(root) = dom::html_root() {
                dom::set_attr(&root, "data-theme", view.data_theme);
            }
            if let Some(body) = dom::body() {
                dom::set_class(&body, "light-theme", view.light_class);
            }
            for button in dom::query_all(consts::THEME_TOGGLE_SELECTOR) {
                let Some(icon) = dom::query_all_in(&button, "i").into_iter().next() else {
                    continue;
                };
                dom::remove_class(&icon, view.icon_remove);
                dom::add_class(&icon, view.icon_add);
            }
        }
    }
}
