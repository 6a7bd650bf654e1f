//! Deferred image loading for `img[data-src]`.

#[cfg(test)]
#[path = "lazy_test.rs"]
mod lazy_test;

/// Selector for images waiting on a real `src`.
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

/// The URL to load for an image's `data-src`, if it names one.
#[must_use]
pub fn deferred_source(data_src: Option<&str>) -> Option<&str> {
    data_src.map(str::trim).filter(|src| !src.is_empty())
}

#[cfg(feature = "hydrate")]
pub use browser::LazyImages;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{Element, HtmlImageElement};

    use super::{LAZY_IMAGE_SELECTOR, deferred_source};
    use crate::config::Config;
    use crate::dom;
    use crate::observer::{ObserveMode, ViewportObserver};

    #[derive(Clone)]
    pub struct LazyImages {
        observer: ViewportObserver,
    }

    impl LazyImages {
        pub fn new(config: &Config) -> Self {
            Self { observer: ViewportObserver::new(&config.observers.lazy_image, ObserveMode::OneShot, load) }
        }

        pub fn observe_subtree(&self, root: &Element) {
            self.observer.observe_subtree(root, LAZY_IMAGE_SELECTOR);
        }
    }

    fn load(el: &Element) {
        let Some(img) = el.dyn_ref::<HtmlImageElement>() else {
            return;
        };
        let data_src = img.get_attribute("data-src");
        if let Some(src) = deferred_source(data_src.as_deref()) {
            img.set_src(src);
        }
        dom::remove_class(el, "lazy");
    }
}
