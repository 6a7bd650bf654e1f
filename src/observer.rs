//! Viewport visibility detection.
//!
//! A [`ViewportObserver`] turns `IntersectionObserver` entries into "element
//! became visible" callbacks. In [`ObserveMode::OneShot`] an element is
//! unobserved as soon as it fires, so it fires at most once; in
//! [`ObserveMode::Repeat`] it stays subscribed and fires on every entry into
//! the viewport. Without `IntersectionObserver` every observed element is
//! reported visible immediately, exactly once.

#[cfg(test)]
#[path = "observer_test.rs"]
mod observer_test;

/// Subscription lifetime for observed elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserveMode {
    /// Fire once, then unobserve.
    OneShot,
    /// Fire on every transition into view.
    Repeat,
}

/// What to do with one intersection entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    /// Invoke the visibility callback.
    pub fire: bool,
    /// Stop observing the element.
    pub release: bool,
}

impl ObserveMode {
    /// Decide how to handle an entry reporting `is_intersecting`.
    #[must_use]
    pub fn deliver(self, is_intersecting: bool) -> Delivery {
        match (self, is_intersecting) {
            (_, false) => Delivery { fire: false, release: false },
            (Self::OneShot, true) => Delivery { fire: true, release: true },
            (Self::Repeat, true) => Delivery { fire: true, release: false },
        }
    }

    /// Delivery used when the browser has no `IntersectionObserver`: the
    /// element counts as visible now and is never revisited.
    #[must_use]
    pub fn fallback(self) -> Delivery {
        Delivery { fire: true, release: true }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::ViewportObserver;

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::ObserveMode;
    use crate::config::ObserverOptions;
    use crate::dom;

    type Handler = Rc<dyn Fn(&Element)>;

    /// Visibility subscription shared by every element it observes.
    #[derive(Clone)]
    pub struct ViewportObserver {
        inner: Option<IntersectionObserver>,
        mode: ObserveMode,
        on_visible: Handler,
    }

    impl ViewportObserver {
        /// Create an observer; `on_visible` runs for each element entering view.
        pub fn new<F>(options: &ObserverOptions, mode: ObserveMode, on_visible: F) -> Self
        where
            F: Fn(&Element) + 'static,
        {
            let on_visible: Handler = Rc::new(on_visible);
            let inner = if dom::has_global("IntersectionObserver") {
                build(options, mode, Rc::clone(&on_visible))
            } else {
                log::debug!("IntersectionObserver unavailable; treating elements as visible");
                None
            };
            Self { inner, mode, on_visible }
        }

        pub fn observe(&self, el: &Element) {
            match &self.inner {
                Some(observer) => observer.observe(el),
                None => {
                    if self.mode.fallback().fire {
                        (self.on_visible)(el);
                    }
                }
            }
        }

        /// Observe every element in the document matching `selector`.
        pub fn observe_all(&self, selector: &str) {
            for el in dom::query_all(selector) {
                self.observe(&el);
            }
        }

        /// Observe `root` and its descendants matching `selector`.
        pub fn observe_subtree(&self, root: &Element, selector: &str) {
            for el in dom::query_subtree(root, selector) {
                self.observe(&el);
            }
        }
    }

    fn build(options: &ObserverOptions, mode: ObserveMode, on_visible: Handler) -> Option<IntersectionObserver> {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let delivery = mode.deliver(entry.is_intersecting());
                let target = entry.target();
                if delivery.release {
                    observer.unobserve(&target);
                }
                if delivery.fire {
                    on_visible(&target);
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);
        let observer = dom::report(
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init),
            "new IntersectionObserver",
        )?;
        callback.forget();
        Some(observer)
    }
}
