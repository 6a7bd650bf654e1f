//! Pointer effects: click ripples and hover styling.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

/// Viewport-relative box of the clicked element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A circular ripple positioned inside its host element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// Ripple covering the host's larger side, centered on the click.
    #[must_use]
    pub fn at(bounds: Bounds, client_x: f64, client_y: f64) -> Self {
        let size = bounds.width.max(bounds.height);
        Self {
            size,
            left: client_x - bounds.left - size / 2.0,
            top: client_y - bounds.top - size / 2.0,
        }
    }

    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "position: absolute; border-radius: 50%; transform: scale(0); \
             animation: ripple 0.6s linear; background-color: rgba(255, 255, 255, 0.5); \
             width: {size}px; height: {size}px; left: {left}px; top: {top}px; pointer-events: none;",
            size = self.size,
            left = self.left,
            top = self.top,
        )
    }
}

/// Transform applied to a hovered tech button.
pub const TECH_BUTTON_HOVER_TRANSFORM: &str = "translateY(-8px) scale(1.02)";

/// Text color applied to a hovered nav link.
pub const NAV_LINK_HOVER_COLOR: &str = "var(--primary-color)";

#[cfg(feature = "hydrate")]
pub use browser::bind;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{Element, MouseEvent};

    use super::{Bounds, NAV_LINK_HOVER_COLOR, Ripple, TECH_BUTTON_HOVER_TRANSFORM};
    use crate::consts;
    use crate::dom;

    const TECH_BUTTON_SELECTOR: &str = ".tech-button";
    const SOCIAL_LINK_SELECTOR: &str = ".footer__social-link";

    /// Bind hover and ripple effects on matching elements under `root`.
    pub fn bind(root: &Element) {
        for button in dom::query_subtree(root, TECH_BUTTON_SELECTOR) {
            let hovered = button.clone();
            dom::on(&button, "mouseenter", move |_| {
                dom::set_style(&hovered, "transform", TECH_BUTTON_HOVER_TRANSFORM);
                dom::add_class(&hovered, "animate-glow");
            });
            let left = button.clone();
            dom::on(&button, "mouseleave", move |_| {
                dom::set_style(&left, "transform", "");
                dom::remove_class(&left, "animate-glow");
            });
            let clicked = button.clone();
            dom::on(&button, "click", move |event| ripple(&event, &clicked));
        }

        for link in dom::query_subtree(root, consts::NAV_LINK_SELECTOR) {
            let hovered = link.clone();
            dom::on(&link, "mouseenter", move |_| dom::set_style(&hovered, "color", NAV_LINK_HOVER_COLOR));
            let left = link.clone();
            dom::on(&link, "mouseleave", move |_| dom::set_style(&left, "color", ""));
        }

        for link in dom::query_subtree(root, SOCIAL_LINK_SELECTOR) {
            let clicked = link.clone();
            dom::on(&link, "click", move |event| {
                if clicked.has_attribute("target") {
                    ripple(&event, &clicked);
                }
            });
        }
    }

    fn ripple(event: &web_sys::Event, host: &Element) {
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let Some(document) = dom::document() else {
            return;
        };
        let Some(span) = dom::report(document.create_element("span"), "createElement") else {
            return;
        };
        let rect = host.get_bounding_client_rect();
        let bounds = Bounds { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() };
        let ripple = Ripple::at(bounds, f64::from(mouse.client_x()), f64::from(mouse.client_y()));

        dom::set_attr(&span, "style", &ripple.style());
        dom::set_style(host, "position", "relative");
        dom::set_style(host, "overflow", "hidden");
        if dom::report(host.append_child(&span), "appendChild").is_some() {
            dom::after(consts::RIPPLE_MS, move || span.remove());
        }
    }
}
