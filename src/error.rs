//! Error types for the browser layer.
//!
//! User-facing validation failures live in `state::contact_form`; the enum here
//! covers DOM and configuration failures that controllers log and skip.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::config::ConfigError;

/// Failure while wiring a controller to the page.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// `window` is not available (not running in a browser).
    #[error("browser window is unavailable")]
    NoWindow,

    /// `window.document` is not available.
    #[error("document is unavailable")]
    NoDocument,

    /// The document has no `<body>` to mount into.
    #[error("document has no <body>")]
    NoBody,

    /// A DOM or JS call returned an exception.
    #[error("DOM call failed: {0}")]
    Dom(String),

    /// The page-provided configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
