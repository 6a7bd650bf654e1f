//! Thin `web-sys` helpers shared by the browser glue.
//!
//! Every helper tolerates a missing window/document/element: DOM calls that
//! reject are logged at debug level and otherwise ignored, since a failed
//! class or style write never warrants aborting the feature.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, Node, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn body() -> Option<HtmlElement> {
    document().and_then(|d| d.body())
}

pub fn html_root() -> Option<Element> {
    document().and_then(|d| d.document_element())
}

pub fn by_id(id: &str) -> Option<Element> {
    document().and_then(|d| d.get_element_by_id(id))
}

/// First element matching `selector`, or `None` (invalid selectors included).
pub fn query(selector: &str) -> Option<Element> {
    let doc = document()?;
    match doc.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::debug!("query_selector({selector}) failed: {err:?}");
            None
        }
    }
}

/// All elements in the document matching `selector`, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(doc) = document() else {
        return Vec::new();
    };
    match doc.query_selector_all(selector) {
        Ok(list) => (0..list.length()).filter_map(|i| list.get(i)).filter_map(as_element).collect(),
        Err(err) => {
            log::debug!("query_selector_all({selector}) failed: {err:?}");
            Vec::new()
        }
    }
}

/// All descendants of `root` matching `selector`.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => (0..list.length()).filter_map(|i| list.get(i)).filter_map(as_element).collect(),
        Err(err) => {
            log::debug!("query_selector_all({selector}) failed: {err:?}");
            Vec::new()
        }
    }
}

/// `root` itself (when it matches) followed by its matching descendants.
pub fn query_subtree(root: &Element, selector: &str) -> Vec<Element> {
    let mut found = Vec::new();
    if matches(root, selector) {
        found.push(root.clone());
    }
    found.extend(query_all_in(root, selector));
    found
}

pub fn matches(el: &Element, selector: &str) -> bool {
    el.matches(selector).unwrap_or(false)
}

pub fn closest(el: &Element, selector: &str) -> Option<Element> {
    match el.closest(selector) {
        Ok(found) => found,
        Err(_) => None,
    }
}

fn as_element(node: Node) -> Option<Element> {
    match node.dyn_into::<Element>() {
        Ok(el) => Some(el),
        Err(_) => None,
    }
}

/// The element an event was dispatched to.
pub fn event_element(event: &Event) -> Option<Element> {
    let target = event.target()?;
    match target.dyn_into::<Element>() {
        Ok(el) => Some(el),
        Err(_) => None,
    }
}

/// Log a rejected DOM call at debug level.
pub fn report<T>(result: Result<T, JsValue>, what: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!("{what} failed: {err:?}");
            None
        }
    }
}

pub fn add_class(el: &Element, class: &str) {
    report(el.class_list().add_1(class), "classList.add");
}

pub fn remove_class(el: &Element, class: &str) {
    report(el.class_list().remove_1(class), "classList.remove");
}

pub fn set_class(el: &Element, class: &str, present: bool) {
    report(el.class_list().toggle_with_force(class, present), "classList.toggle");
}

pub fn set_attr(el: &Element, name: &str, value: &str) {
    report(el.set_attribute(name, value), "setAttribute");
}

/// Set an inline style property; empty `value` clears it.
pub fn set_style(el: &Element, property: &str, value: &str) {
    let Some(html) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = html.style();
    if value.is_empty() {
        report(style.remove_property(property), "style.removeProperty");
    } else {
        report(style.set_property(property, value), "style.setProperty");
    }
}

/// Attach a listener for the lifetime of the page.
pub fn on<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if report(target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()), "addEventListener").is_some()
    {
        cb.forget();
    }
}

/// Attach a passive listener (never calls `preventDefault`).
pub fn on_passive<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let added = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &options,
    );
    if report(added, "addEventListener").is_some() {
        cb.forget();
    }
}

/// Run `f` once after `ms` milliseconds.
pub fn after<F>(ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(ms, f).forget();
}

/// Run `f` on the next animation frame. Returns `false` when the browser
/// refused to schedule it.
pub fn request_frame<F>(f: F) -> bool
where
    F: FnOnce(f64) + 'static,
{
    let Some(window) = window() else {
        return false;
    };
    let cb = Closure::once_into_js(move |ts: f64| f(ts));
    report(window.request_animation_frame(cb.unchecked_ref()), "requestAnimationFrame").is_some()
}

/// High-resolution timestamp in milliseconds.
pub fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map_or_else(js_sys::Date::now, |p| p.now())
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| report(w.scroll_y(), "scrollY")).unwrap_or(0.0)
}

/// Smooth-scroll the window to `top`.
pub fn smooth_scroll_to(top: f64) {
    let Some(window) = window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Whether `window` exposes the global constructor `name`.
pub fn has_global(name: &str) -> bool {
    let Some(window) = window() else {
        return false;
    };
    js_sys::Reflect::has(&window, &JsValue::from_str(name)).unwrap_or(false)
}

pub fn media_matches(query: &str) -> bool {
    let Some(window) = window() else {
        return false;
    };
    match window.match_media(query) {
        Ok(Some(list)) => list.matches(),
        _ => false,
    }
}
