//! Startup orchestration and wasm exports.
//!
//! SYSTEM CONTEXT
//! ==============
//! `start` runs once when the module is instantiated:
//!
//! 1. show the loading overlay
//! 2. basics: `--vh`, theme, language, accessibility hooks
//! 3. bind scroll, menu, reveal, lazy images, effects and keyboard handlers
//!    on the static document
//! 4. load fragments concurrently, rebinding each spliced subtree
//! 5. hide the overlay and dispatch `app:initialized`
//!
//! A startup error surfaces as an error notification; the overlay is hidden
//! either way.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// Keyboard input the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Tab: show focus outlines.
    KeyboardNavigation,
    /// Escape: close the mobile menu.
    CloseMenu,
    /// Ctrl+/: show the shortcut help.
    ShowShortcuts,
}

/// Map a `keydown` to its action, if any.
#[must_use]
pub fn key_action(key: &str, ctrl: bool) -> Option<KeyAction> {
    match key {
        "Tab" => Some(KeyAction::KeyboardNavigation),
        "Escape" => Some(KeyAction::CloseMenu),
        "/" if ctrl => Some(KeyAction::ShowShortcuts),
        _ => None,
    }
}

/// Value of the `--vh` custom property for a viewport `inner_height`.
#[must_use]
pub fn viewport_unit(inner_height: f64) -> String {
    format!("{}px", inner_height * 0.01)
}

pub const SHORTCUTS_MESSAGE: &str = "鍵盤快捷鍵：Escape-關閉彈出視窗, Ctrl+/-顯示幫助";
pub const STARTUP_FAILED_MESSAGE: &str = "應用程式載入失敗，請重新整理頁面";
pub const SKIP_LINK_TEXT: &str = "跳過導航";
pub const MAIN_CONTENT_ID: &str = "main-content";

#[cfg(feature = "hydrate")]
pub use browser::{copy_to_clipboard, device_info, show_notification, start};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{CustomEvent, Element, KeyboardEvent};

    use super::{KeyAction, MAIN_CONTENT_ID, SHORTCUTS_MESSAGE, SKIP_LINK_TEXT, STARTUP_FAILED_MESSAGE};
    use crate::config::Config;
    use crate::consts;
    use crate::device;
    use crate::dom;
    use crate::effects;
    use crate::error::FolioError;
    use crate::language;
    use crate::lazy::LazyImages;
    use crate::loader::{self, DomHost, Fragment, HttpFragmentSource};
    use crate::menu::{MenuTrigger, MenuUi};
    use crate::notify::{self, NotificationKind};
    use crate::reveal::{AnimationGuard, RevealAnimator};
    use crate::schedule::Debouncer;
    use crate::scroll::ScrollUi;
    use crate::storage::{self, KeyValueStore};
    use crate::theme::ThemeUi;

    /// Every installed controller, cloneable into callbacks.
    #[derive(Clone)]
    struct App {
        config: Rc<Config>,
        theme: ThemeUi,
        menu: MenuUi,
        scroll: ScrollUi,
        reveal: RevealAnimator,
        lazy: LazyImages,
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&JsValue::from_str(&format!("logger already set: {err}")));
        }
        let config = Config::load();
        log::set_max_level(config.log_level().to_level_filter());

        show_overlay();
        match App::install(config) {
            Ok(app) => wasm_bindgen_futures::spawn_local(async move {
                app.load_fragments().await;
                if let Err(err) = app.complete() {
                    fail(&err);
                }
            }),
            Err(err) => fail(&err),
        }
    }

    fn fail(err: &FolioError) {
        log::error!("startup failed: {err}");
        notify::show(STARTUP_FAILED_MESSAGE, NotificationKind::Error);
        hide_overlay();
    }

    impl App {
        fn install(config: Config) -> Result<Self, FolioError> {
            let root = dom::html_root().ok_or_else(|| FolioError::Dom("no document element".to_owned()))?;

            install_viewport_height();
            let store: Rc<RefCell<Box<dyn KeyValueStore>>> = Rc::new(RefCell::new(storage::browser_store()));
            let theme = ThemeUi::install(Rc::clone(&store));
            language::apply(store.borrow_mut().as_mut());
            install_accessibility()?;

            let guard = Rc::new(RefCell::new(AnimationGuard::new()));
            let app = Self {
                theme,
                menu: MenuUi::new(),
                scroll: ScrollUi::install(&config),
                reveal: RevealAnimator::new(&config, guard),
                lazy: LazyImages::new(&config),
                config: Rc::new(config),
            };
            app.reveal.observe_document();
            app.bind(&root);
            app.install_keyboard();
            log::info!("static document bound");
            Ok(app)
        }

        /// Handlers that die with their subtree; run for the static page and
        /// again for every spliced fragment.
        fn bind(&self, root: &Element) {
            self.menu.bind(root);
            self.lazy.observe_subtree(root);
            effects::bind(root);
            ScrollUi::bind_anchors(root);
            ScrollUi::bind_back_to_top(root);
        }

        fn rebind(&self, fragment: Fragment, root: &Element) {
            self.bind(root);
            self.reveal.observe_subtree(root);
            self.scroll.observe_sections(root);
            self.scroll.refresh();
            self.theme.render();
            log::debug!("{} handlers rebound", fragment.name());
        }

        async fn load_fragments(&self) {
            let source = HttpFragmentSource;
            let app = self.clone();
            let mut host = DomHost::new(move |fragment, root: &Element| app.rebind(fragment, root));
            let report = loader::load_all(&source, &mut host, &self.config.fragments).await;
            if !report.is_complete() {
                log::warn!("{} of {} fragments failed", report.failed.len(), Fragment::ALL.len());
            }
        }

        fn complete(&self) -> Result<(), FolioError> {
            hide_overlay();
            let document = dom::document().ok_or_else(|| FolioError::Dom("no document".to_owned()))?;
            let event = CustomEvent::new(consts::INITIALIZED_EVENT)?;
            document.dispatch_event(&event)?;
            log::info!("initialized");
            Ok(())
        }

        fn install_keyboard(&self) {
            let Some(document) = dom::document() else {
                return;
            };
            let menu = self.menu.clone();
            dom::on(&document, "keydown", move |event| {
                let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                match super::key_action(&key.key(), key.ctrl_key()) {
                    Some(KeyAction::KeyboardNavigation) => {
                        if let Some(body) = dom::body() {
                            dom::add_class(&body, "using-keyboard");
                        }
                    }
                    Some(KeyAction::CloseMenu) => menu.handle(MenuTrigger::Escape),
                    Some(KeyAction::ShowShortcuts) => {
                        event.prevent_default();
                        notify::show(SHORTCUTS_MESSAGE, NotificationKind::Info);
                    }
                    None => {}
                }
            });
            dom::on(&document, "mousedown", |_| {
                if let Some(body) = dom::body() {
                    dom::remove_class(&body, "using-keyboard");
                }
            });
        }
    }

    fn show_overlay() {
        if let Some(overlay) = dom::by_id(consts::LOADING_OVERLAY_ID) {
            dom::set_style(&overlay, "display", "flex");
            dom::add_class(&overlay, "show");
        }
    }

    fn hide_overlay() {
        let Some(overlay) = dom::by_id(consts::LOADING_OVERLAY_ID) else {
            page_loaded();
            return;
        };
        dom::add_class(&overlay, "fade-out");
        dom::remove_class(&overlay, "show");
        dom::after(consts::OVERLAY_FADE_MS, move || {
            dom::set_style(&overlay, "display", "none");
            page_loaded();
        });
    }

    fn page_loaded() {
        if let Some(body) = dom::body() {
            dom::add_class(&body, "loaded");
        }
        dom::after(consts::MAIN_SEQUENCE_DELAY_MS, || {
            if let Some(grid) = dom::query(".tech-grid") {
                dom::add_class(&grid, "animate-fadeIn");
            }
        });
    }

    fn install_viewport_height() {
        update_viewport_height();
        let Some(window) = dom::window() else {
            return;
        };
        let debouncer = Rc::new(RefCell::new(Debouncer::new()));
        dom::on_passive(&window, "resize", move |_| {
            let ticket = debouncer.borrow_mut().schedule();
            let pending = Rc::clone(&debouncer);
            dom::after(consts::RESIZE_DEBOUNCE_MS, move || {
                if pending.borrow().is_current(ticket) {
                    update_viewport_height();
                }
            });
        });
    }

    fn update_viewport_height() {
        let Some(height) = dom::window().and_then(|w| dom::report(w.inner_height(), "innerHeight")) else {
            return;
        };
        let Some(height) = height.as_f64() else {
            return;
        };
        if let Some(root) = dom::html_root() {
            dom::set_style(&root, "--vh", &super::viewport_unit(height));
        }
    }

    fn install_accessibility() -> Result<(), FolioError> {
        if dom::media_matches("(prefers-reduced-motion: reduce)")
            && let Some(root) = dom::html_root()
        {
            dom::add_class(&root, "reduce-motion");
        }

        let document = dom::document().ok_or_else(|| FolioError::Dom("no document".to_owned()))?;
        let body = dom::body().ok_or_else(|| FolioError::Dom("no body".to_owned()))?;
        let skip = document.create_element("a")?;
        dom::set_attr(&skip, "href", &format!("#{MAIN_CONTENT_ID}"));
        skip.set_class_name("skip-link");
        skip.set_text_content(Some(SKIP_LINK_TEXT));
        body.insert_before(&skip, body.first_child().as_ref())?;

        if let Some(main) = dom::query("main").or_else(|| dom::query(".main-content"))
            && main.id().is_empty()
        {
            main.set_id(MAIN_CONTENT_ID);
        }
        Ok(())
    }

    /// Copy `text` to the clipboard. Resolves to whether it succeeded.
    #[wasm_bindgen]
    pub async fn copy_to_clipboard(text: String) -> bool {
        device::copy_to_clipboard(&text).await
    }

    /// Device and browser classification as JSON.
    ///
    /// # Errors
    ///
    /// Rejects when the report cannot be serialized.
    #[wasm_bindgen]
    pub fn device_info() -> Result<String, JsValue> {
        serde_json::to_string(&device::current_report()).map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Show a notification; `kind` is `success`, `error`, `warning` or `info`.
    #[wasm_bindgen]
    pub fn show_notification(message: &str, kind: &str) {
        notify::show(message, NotificationKind::parse(kind));
    }
}
