//! Scroll-derived UI state.
//!
//! DESIGN
//! ======
//! Scroll events only mark a frame as pending ([`FrameGate`]); the recompute
//! runs once per rendered frame and reads the scroll offset at that moment,
//! so N events inside one frame cost one pass and the pass always sees the
//! latest offset. Navbar style, back-to-top visibility and parallax offsets
//! are pure functions of that single offset.
//!
//! Scroll-spy and in-page anchor scrolling sit here as well since they share
//! the navbar geometry.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::ScrollConfig;
use crate::schedule::FrameGate;

/// Two-state navbar appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarState {
    Top,
    Scrolled,
}

impl NavbarState {
    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Top => "rgba(12, 12, 12, 0.9)",
            Self::Scrolled => "rgba(12, 12, 12, 0.95)",
        }
    }

    #[must_use]
    pub fn box_shadow(self) -> &'static str {
        match self {
            Self::Top => "none",
            Self::Scrolled => "0 10px 30px rgba(0, 0, 0, 0.3)",
        }
    }
}

/// Outputs of one recompute pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub navbar: NavbarState,
    pub back_to_top_visible: bool,
}

/// Frame-coalesced scroll state machine.
#[derive(Debug, Clone)]
pub struct ScrollCoordinator {
    config: ScrollConfig,
    gate: FrameGate,
}

impl ScrollCoordinator {
    #[must_use]
    pub fn new(config: ScrollConfig) -> Self {
        Self { config, gate: FrameGate::new() }
    }

    /// Record a scroll event. Returns whether a frame must be requested.
    pub fn on_scroll(&mut self) -> bool {
        self.gate.request()
    }

    /// Run the pass for a granted frame. `None` for a frame nobody asked for.
    pub fn on_frame(&mut self, scroll_y: f64) -> Option<ScrollSnapshot> {
        if !self.gate.begin_pass() {
            return None;
        }
        Some(self.compute(scroll_y))
    }

    /// Run a pass immediately, dropping any pending frame. Used at startup
    /// and when the browser refuses to schedule a frame.
    pub fn force(&mut self, scroll_y: f64) -> ScrollSnapshot {
        self.gate.cancel();
        self.compute(scroll_y)
    }

    /// Derived state for `scroll_y`. Thresholds are strict, no hysteresis.
    #[must_use]
    pub fn compute(&self, scroll_y: f64) -> ScrollSnapshot {
        let navbar = if scroll_y > self.config.navbar_scrolled_px { NavbarState::Scrolled } else { NavbarState::Top };
        ScrollSnapshot { scroll_y, navbar, back_to_top_visible: scroll_y > self.config.back_to_top_px }
    }

    /// Vertical offset of the `index`-th parallax element:
    /// `-(scroll_y * (base + step * index))`.
    #[must_use]
    pub fn parallax_offset(&self, index: usize, scroll_y: f64) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let speed = self.config.parallax_base_speed + self.config.parallax_speed_step * index as f64;
        // Adding zero turns -0.0 into 0.0 so the top of the page renders "0px".
        -(scroll_y * speed) + 0.0
    }
}

/// CSS transform for a parallax offset.
#[must_use]
pub fn parallax_transform(offset: f64) -> String {
    format!("translate3d(0, {offset}px, 0)")
}

/// Which section's nav link is highlighted.
#[derive(Debug, Default, Clone)]
pub struct ScrollSpy {
    active: Option<String>,
}

impl ScrollSpy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A section with `id` entered the spy band. Returns whether the active
    /// section changed.
    pub fn on_section_visible(&mut self, id: &str) -> bool {
        if id.is_empty() || self.active.as_deref() == Some(id) {
            return false;
        }
        self.active = Some(id.to_owned());
        true
    }

    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }
}

/// Selector of the nav link pointing at section `id`.
#[must_use]
pub fn section_link_selector(id: &str) -> String {
    format!(".nav-link[href=\"#{id}\"]")
}

/// Element id targeted by an in-page anchor `href`.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts a section's top just below the fixed navbar.
#[must_use]
pub fn scroll_target_top(offset_top: f64, navbar_height: f64) -> f64 {
    offset_top - navbar_height
}

#[cfg(feature = "hydrate")]
pub use browser::ScrollUi;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Element, HtmlElement};

    use super::{ScrollCoordinator, ScrollSnapshot, ScrollSpy};
    use crate::config::Config;
    use crate::consts;
    use crate::dom;
    use crate::observer::{ObserveMode, ViewportObserver};

    const SECTION_SELECTOR: &str = "section[id]";
    const SPY_LINK_SELECTOR: &str = ".nav-link[href^=\"#\"]";
    const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

    /// Scroll listener, scroll-spy observer and anchor handlers.
    #[derive(Clone)]
    pub struct ScrollUi {
        coordinator: Rc<RefCell<ScrollCoordinator>>,
        spy: Rc<RefCell<ScrollSpy>>,
        sections: ViewportObserver,
    }

    impl ScrollUi {
        /// Bind the window scroll listener and observe sections.
        pub fn install(config: &Config) -> Self {
            let coordinator = Rc::new(RefCell::new(ScrollCoordinator::new(config.scroll)));
            let spy = Rc::new(RefCell::new(ScrollSpy::new()));

            if let Some(window) = dom::window() {
                let on_scroll = Rc::clone(&coordinator);
                dom::on_passive(&window, "scroll", move |_| schedule(&on_scroll));
            }

            let spy_for_observer = Rc::clone(&spy);
            let sections = ViewportObserver::new(&config.observers.scroll_spy, ObserveMode::Repeat, move |section| {
                let id = section.id();
                if spy_for_observer.borrow_mut().on_section_visible(&id) {
                    highlight(&id);
                }
            });
            sections.observe_all(SECTION_SELECTOR);

            let ui = Self { coordinator, spy, sections };
            ui.refresh();
            ui
        }

        /// Spy on sections that arrived with a spliced fragment.
        pub fn observe_sections(&self, root: &Element) {
            self.sections.observe_subtree(root, SECTION_SELECTOR);
        }

        /// Re-apply scroll state and the spy highlight to whatever is in the
        /// document now. Runs after every splice since a fragment may carry
        /// the navbar, the back-to-top button or parallax elements.
        pub fn refresh(&self) {
            let snapshot = self.coordinator.borrow_mut().force(dom::scroll_y());
            apply(&self.coordinator.borrow(), &snapshot);
            if let Some(id) = self.spy.borrow().active() {
                highlight(id);
            }
        }

        /// Bind smooth scrolling for in-page anchors inside `root`.
        pub fn bind_anchors(root: &Element) {
            for anchor in dom::query_subtree(root, ANCHOR_SELECTOR) {
                let target = anchor.clone();
                dom::on(&anchor, "click", move |event| {
                    event.prevent_default();
                    if let Some(href) = target.get_attribute("href")
                        && let Some(id) = super::anchor_target(&href)
                    {
                        scroll_to_section(id);
                    }
                });
            }
        }

        /// Bind the back-to-top button if it lives inside `root`.
        pub fn bind_back_to_top(root: &Element) {
            let Some(button) = dom::by_id(consts::BACK_TO_TOP_ID) else {
                return;
            };
            if !root.contains(Some(&button)) {
                return;
            }
            dom::on(&button, "click", |_| dom::smooth_scroll_to(0.0));
        }
    }

    fn schedule(coordinator: &Rc<RefCell<ScrollCoordinator>>) {
        if !coordinator.borrow_mut().on_scroll() {
            return;
        }
        let for_frame = Rc::clone(coordinator);
        let scheduled = dom::request_frame(move |_| {
            let snapshot = for_frame.borrow_mut().on_frame(dom::scroll_y());
            if let Some(snapshot) = snapshot {
                apply(&for_frame.borrow(), &snapshot);
            }
        });
        if !scheduled {
            let snapshot = coordinator.borrow_mut().force(dom::scroll_y());
            apply(&coordinator.borrow(), &snapshot);
        }
    }

    fn apply(coordinator: &ScrollCoordinator, snapshot: &ScrollSnapshot) {
        if let Some(navbar) = dom::query(consts::NAVBAR_SELECTOR) {
            dom::set_style(&navbar, "background", snapshot.navbar.background());
            dom::set_style(&navbar, "box-shadow", snapshot.navbar.box_shadow());
        }
        if let Some(button) = dom::by_id(consts::BACK_TO_TOP_ID) {
            dom::set_class(&button, "show", snapshot.back_to_top_visible);
        }
        if let Some(root) = dom::html_root() {
            dom::set_style(&root, "--scroll-y", &format!("{}px", snapshot.scroll_y));
        }
        for (index, el) in dom::query_all(consts::PARALLAX_SELECTOR).iter().enumerate() {
            let offset = coordinator.parallax_offset(index, snapshot.scroll_y);
            dom::set_style(el, "transform", &super::parallax_transform(offset));
        }
    }

    fn highlight(id: &str) {
        for link in dom::query_all(SPY_LINK_SELECTOR) {
            dom::remove_class(&link, "active");
        }
        if let Some(link) = dom::query(&super::section_link_selector(id)) {
            dom::add_class(&link, "active");
        }
    }

    fn scroll_to_section(id: &str) {
        let Some(target) = dom::by_id(id) else {
            return;
        };
        let Some(target) = target.dyn_ref::<HtmlElement>() else {
            return;
        };
        let navbar_height = dom::query(consts::NAVBAR_SELECTOR)
            .and_then(|nav| nav.dyn_ref::<HtmlElement>().map(HtmlElement::offset_height))
            .unwrap_or(0);
        let top = super::scroll_target_top(f64::from(target.offset_top()), f64::from(navbar_height));
        dom::smooth_scroll_to(top);
    }
}
