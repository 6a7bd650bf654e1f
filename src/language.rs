//! Page language selection.
//!
//! Resolution order: the stored `language` value, then the first two letters
//! of the browser language, then [`consts::FALLBACK_LANGUAGE`]. The result is
//! written to `<html lang>` and stored back.

#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

use crate::consts;
use crate::storage::KeyValueStore;

/// Pick the page language from a stored value and the browser's language
/// tag (e.g. `en-US`).
#[must_use]
pub fn resolve_language(saved: Option<&str>, browser: Option<&str>) -> String {
    if let Some(saved) = saved.map(str::trim).filter(|s| !s.is_empty()) {
        return saved.to_owned();
    }
    if let Some(tag) = browser {
        let prefix: String = tag.trim().chars().take(2).collect();
        if !prefix.is_empty() {
            return prefix;
        }
    }
    consts::FALLBACK_LANGUAGE.to_owned()
}

/// Resolve against `store` and persist the outcome.
pub fn select(store: &mut dyn KeyValueStore, browser: Option<&str>) -> String {
    let language = resolve_language(store.get(consts::LANGUAGE_KEY).as_deref(), browser);
    if let Err(err) = store.set(consts::LANGUAGE_KEY, &language) {
        log::warn!("language not persisted: {err}");
    }
    language
}

/// Select the language and apply it to `<html lang>`.
#[cfg(feature = "hydrate")]
pub fn apply(store: &mut dyn KeyValueStore) -> String {
    let browser = crate::dom::window().and_then(|w| w.navigator().language());
    let language = select(store, browser.as_deref());
    if let Some(root) = crate::dom::html_root() {
        crate::dom::set_attr(&root, "lang", &language);
    }
    log::debug!("language set to {language}");
    language
}
