//! Mobile navigation menu.
//!
//! The controller owns the open/closed state; the DOM mirrors it. Both the
//! menu and its toggle button carry the `active` class exactly when the menu
//! is open, and page scroll is locked for as long as it stays open.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Open/closed state of one menu instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// The only inputs that move the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTrigger {
    /// Toggle button clicked: flips the state.
    Toggle,
    /// A nav link was clicked: forces closed.
    LinkClick,
    /// Escape pressed: closes an open menu, otherwise nothing.
    Escape,
}

/// What the DOM should look like for a menu state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuView {
    /// `active` class on the menu and on the toggle button.
    pub active: bool,
    /// Inline `overflow` for `<body>`; empty restores the stylesheet value.
    pub body_overflow: &'static str,
    /// Whether the toggle button is displayed.
    pub toggle_visible: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MenuController {
    state: MenuState,
    has_links: bool,
}

impl MenuController {
    /// A closed menu. `has_links` is whether the menu contains any nav link;
    /// a menu without links hides its toggle.
    #[must_use]
    pub fn new(has_links: bool) -> Self {
        Self { state: MenuState::Closed, has_links }
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Apply a trigger. Returns the new state if it changed.
    pub fn handle(&mut self, trigger: MenuTrigger) -> Option<MenuState> {
        let next = match (trigger, self.state) {
            (MenuTrigger::Toggle, MenuState::Closed) => MenuState::Open,
            (MenuTrigger::Toggle | MenuTrigger::LinkClick | MenuTrigger::Escape, MenuState::Open) => {
                MenuState::Closed
            }
            (MenuTrigger::LinkClick | MenuTrigger::Escape, MenuState::Closed) => return None,
        };
        self.state = next;
        Some(next)
    }

    #[must_use]
    pub fn view(&self) -> MenuView {
        let open = self.is_open();
        MenuView { active: open, body_overflow: if open { "hidden" } else { "" }, toggle_visible: self.has_links }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::MenuUi;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::Element;

    use super::{MenuController, MenuTrigger};
    use crate::consts;
    use crate::dom;

    /// Browser binding for the mobile menu.
    #[derive(Clone, Default)]
    pub struct MenuUi {
        controller: Rc<RefCell<MenuController>>,
    }

    impl MenuUi {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Bind the toggle button and nav links found under `root`. When the
        /// toggle/menu pair lives under `root` this is a new menu instance and
        /// starts closed.
        pub fn bind(&self, root: &Element) {
            let toggle = dom::by_id(consts::NAV_TOGGLE_ID).filter(|el| root.contains(Some(el)));
            let menu = dom::by_id(consts::NAV_MENU_ID).filter(|el| root.contains(Some(el)));

            if let (Some(toggle), Some(menu)) = (toggle, menu) {
                let has_links = !dom::query_all_in(&menu, consts::NAV_LINK_SELECTOR).is_empty();
                *self.controller.borrow_mut() = MenuController::new(has_links);
                self.render();

                let ui = self.clone();
                dom::on(&toggle, "click", move |_| ui.handle(MenuTrigger::Toggle));
            }

            for link in dom::query_subtree(root, consts::NAV_LINK_SELECTOR) {
                let ui = self.clone();
                dom::on(&link, "click", move |_| ui.handle(MenuTrigger::LinkClick));
            }
        }

        /// Feed a trigger; re-render only on change.
        pub fn handle(&self, trigger: MenuTrigger) {
            let changed = self.controller.borrow_mut().handle(trigger);
            if let Some(state) = changed {
                log::debug!("menu {state:?} via {trigger:?}");
                self.render();
            }
        }

        fn render(&self) {
            let view = self.controller.borrow().view();
            if let Some(menu) = dom::by_id(consts::NAV_MENU_ID) {
                dom::set_class(&menu, "active", view.active);
            }
            if let Some(toggle) = dom::by_id(consts::NAV_TOGGLE_ID) {
                dom::set_class(&toggle, "active", view.active);
                dom::set_style(&toggle, "display", if view.toggle_visible { "" } else { "none" });
            }
            if let Some(body) = dom::body() {
                dom::set_style(&body, "overflow", view.body_overflow);
            }
        }
    }
}
