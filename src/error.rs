//! Crate error type.
//!
//! ERROR HANDLING
//! ==============
//! Missing DOM hooks are not errors: features without their elements are
//! skipped. Errors cover network fetches, fragment splicing, browser calls
//! that reject, and malformed configuration.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsValue;

/// Error returned by fallible `folio` operations.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("failed to fetch {path}: {message}")]
    Fetch { path: String, message: String },
    /// The server answered with a non-success status.
    #[error("HTTP error! status: {status} ({path})")]
    HttpStatus { path: String, status: u16 },
    /// The element a fragment should replace is not in the document.
    #[error("placeholder {selector} not found")]
    MissingPlaceholder { selector: &'static str },
    /// The fragment body had no root element to splice in.
    #[error("fragment {path} has no root element")]
    EmptyFragment { path: String },
    /// A browser API call rejected.
    #[error("browser call failed: {0}")]
    Dom(String),
    /// Inline configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    /// A persisted value could not be written.
    #[error("storage write failed for {key}")]
    Storage { key: String },
}

#[cfg(feature = "hydrate")]
impl From<JsValue> for FolioError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
