//! Device/browser sniffing and clipboard access.
//!
//! Classification is a plain substring scan over the user agent. Browser
//! checks run in a fixed order (Chrome, Firefox, Safari, Edge), so Chromium
//! derivatives report as Chrome.

#[cfg(test)]
#[path = "device_test.rs"]
mod device_test;

use serde::Serialize;

const MOBILE_TOKENS: [&str; 8] =
    ["android", "webos", "iphone", "ipad", "ipod", "blackberry", "iemobile", "opera mini"];
const TABLET_TOKENS: [&str; 5] = ["ipad", "android", "silk", "kindle", "playbook"];

const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub is_mobile: bool,
    pub is_tablet: bool,
    pub is_desktop: bool,
    pub user_agent: String,
    pub platform: String,
    pub language: String,
}

impl DeviceInfo {
    #[must_use]
    pub fn classify(user_agent: &str, platform: &str, language: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        let is_mobile = MOBILE_TOKENS.iter().any(|t| ua.contains(t));
        let is_tablet = TABLET_TOKENS.iter().any(|t| ua.contains(t)) && !ua.contains("mobile");
        Self {
            is_mobile,
            is_tablet,
            is_desktop: !is_mobile && !is_tablet,
            user_agent: user_agent.to_owned(),
            platform: platform.to_owned(),
            language: language.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserInfo {
    pub name: String,
    pub version: String,
    pub user_agent: String,
}

impl BrowserInfo {
    #[must_use]
    pub fn detect(user_agent: &str) -> Self {
        let (name, version_marker) = if user_agent.contains("Chrome") {
            ("Chrome", "Chrome/")
        } else if user_agent.contains("Firefox") {
            ("Firefox", "Firefox/")
        } else if user_agent.contains("Safari") {
            ("Safari", "Version/")
        } else if user_agent.contains("Edge") {
            ("Edge", "Edge/")
        } else {
            (UNKNOWN, "")
        };
        let version = if version_marker.is_empty() {
            UNKNOWN.to_owned()
        } else {
            major_version(user_agent, version_marker).unwrap_or_else(|| UNKNOWN.to_owned())
        };
        Self { name: name.to_owned(), version, user_agent: user_agent.to_owned() }
    }
}

/// Digits immediately following `marker`.
fn major_version(user_agent: &str, marker: &str) -> Option<String> {
    let start = user_agent.find(marker)? + marker.len();
    let digits: String = user_agent[start..].chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() { None } else { Some(digits) }
}

/// Payload of the `device_info` export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceReport {
    pub device: DeviceInfo,
    pub browser: BrowserInfo,
}

impl DeviceReport {
    #[must_use]
    pub fn new(user_agent: &str, platform: &str, language: &str) -> Self {
        Self { device: DeviceInfo::classify(user_agent, platform, language), browser: BrowserInfo::detect(user_agent) }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{copy_to_clipboard, current_report};

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{HtmlDocument, HtmlTextAreaElement};

    use super::DeviceReport;
    use crate::dom;
    use crate::error::FolioError;

    /// Report for the running browser.
    pub fn current_report() -> DeviceReport {
        let Some(window) = dom::window() else {
            return DeviceReport::new("", "", "");
        };
        let navigator = window.navigator();
        let user_agent = dom::report(navigator.user_agent(), "navigator.userAgent").unwrap_or_default();
        let platform = dom::report(navigator.platform(), "navigator.platform").unwrap_or_default();
        let language = navigator.language().unwrap_or_default();
        DeviceReport::new(&user_agent, &platform, &language)
    }

    /// Copy `text`; `false` when every strategy failed.
    pub async fn copy_to_clipboard(text: &str) -> bool {
        match write_clipboard(text).await {
            Ok(()) => true,
            Err(err) => {
                log::error!("copy failed: {err}");
                false
            }
        }
    }

    async fn write_clipboard(text: &str) -> Result<(), FolioError> {
        let window = dom::window().ok_or_else(|| FolioError::Dom("no window".to_owned()))?;
        let navigator = window.navigator();
        let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
        if window.is_secure_context() && !clipboard.is_undefined() && !clipboard.is_null() {
            let write = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?
                .dyn_into::<js_sys::Function>()?;
            let promise = write.call1(&clipboard, &JsValue::from_str(text))?.dyn_into::<js_sys::Promise>()?;
            JsFuture::from(promise).await?;
            return Ok(());
        }
        copy_with_textarea(text)
    }

    fn copy_with_textarea(text: &str) -> Result<(), FolioError> {
        let document = dom::document().ok_or_else(|| FolioError::Dom("no document".to_owned()))?;
        let body = dom::body().ok_or_else(|| FolioError::Dom("no body".to_owned()))?;
        let area = document.create_element("textarea")?.dyn_into::<HtmlTextAreaElement>().map_err(JsValue::from)?;
        area.set_value(text);
        dom::set_attr(&area, "style", "position: fixed; left: -999999px; top: -999999px;");
        body.append_child(&area)?;
        area.focus()?;
        area.select();
        let copied = document.dyn_into::<HtmlDocument>().map_err(JsValue::from)?.exec_command("copy");
        area.remove();
        if copied? { Ok(()) } else { Err(FolioError::Dom("execCommand(copy) was refused".to_owned())) }
    }
}
