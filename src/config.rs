//! Page-level configuration: element ids, selectors, storage key and timings.
//!
//! Every field has a default matching the stock site markup, so a page only
//! needs to embed `<script type="application/json" id="site-config">` when it
//! deviates. Missing keys fall back to their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Id of the optional `<script type="application/json">` carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

// ── Timings ─────────────────────────────────────────────────────

/// Vertical offset past which the scroll-to-top button shows.
pub const SCROLL_THRESHOLD_PX: f64 = 300.0;
/// How long a notification stays before its exit animation starts.
pub const NOTIFICATION_DISPLAY_MS: u32 = 3000;
/// Duration of the notification exit animation.
pub const NOTIFICATION_EXIT_MS: u32 = 300;
/// Lifetime of a ripple element.
pub const RIPPLE_MS: u32 = 600;
/// Delay before the theme toggle feedback transform is cleared.
pub const ICON_FEEDBACK_MS: u32 = 300;
/// Delay between init and the first reveal registration.
pub const REVEAL_DELAY_MS: u32 = 100;
/// Fraction of an element that must intersect before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Root margin for the reveal observer; pulls the bottom edge up by 50px.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Configuration failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The embedded JSON could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value parsed but is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Ids of the three contact form fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormFieldIds {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Default for FormFieldIds {
    fn default() -> Self {
        Self { name: "nombre".into(), email: "email".into(), message: "mensaje".into() }
    }
}

/// Fixed visual feedback timings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Timings {
    pub scroll_threshold_px: f64,
    pub notification_display_ms: u32,
    pub notification_exit_ms: u32,
    pub ripple_ms: u32,
    pub icon_feedback_ms: u32,
    pub reveal_delay_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            scroll_threshold_px: SCROLL_THRESHOLD_PX,
            notification_display_ms: NOTIFICATION_DISPLAY_MS,
            notification_exit_ms: NOTIFICATION_EXIT_MS,
            ripple_ms: RIPPLE_MS,
            icon_feedback_ms: ICON_FEEDBACK_MS,
            reveal_delay_ms: REVEAL_DELAY_MS,
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_root_margin: REVEAL_ROOT_MARGIN.into(),
        }
    }
}

/// Everything the controllers need to find their elements.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub theme_toggle_id: String,
    pub theme_icon_id: String,
    /// `localStorage` key holding `"light"` or `"dark"`.
    pub theme_storage_key: String,
    pub scroll_top_id: String,
    pub nav_link_selector: String,
    /// Page name assumed when the location path ends in `/`.
    pub home_page: String,
    pub reveal_selector: String,
    pub ripple_selector: String,
    pub form_selector: String,
    pub form_fields: FormFieldIds,
    pub timings: Timings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_toggle_id: "themeToggle".into(),
            theme_icon_id: "themeIcon".into(),
            theme_storage_key: "theme".into(),
            scroll_top_id: "scrollTop".into(),
            nav_link_selector: "nav ul li a".into(),
            home_page: "index.html".into(),
            reveal_selector: "section, article, .feature-card, .contact-card".into(),
            ripple_selector: "button, .btn".into(),
            form_selector: "form".into(),
            form_fields: FormFieldIds::default(),
            timings: Timings::default(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON override document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the controllers cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.timings;
        if !(0.0..=1.0).contains(&t.reveal_threshold) {
            return Err(ConfigError::Invalid(format!(
                "revealThreshold must be within 0..=1, got {}",
                t.reveal_threshold
            )));
        }
        if t.notification_display_ms == 0 {
            return Err(ConfigError::Invalid("notificationDisplayMs must be positive".into()));
        }
        if !t.scroll_threshold_px.is_finite() {
            return Err(ConfigError::Invalid("scrollThresholdPx must be finite".into()));
        }
        let ids = [
            ("themeStorageKey", &self.theme_storage_key),
            ("homePage", &self.home_page),
            ("formFields.name", &self.form_fields.name),
            ("formFields.email", &self.form_fields.email),
            ("formFields.message", &self.form_fields.message),
        ];
        if let Some((field, _)) = ids.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!("{field} must not be empty")));
        }
        Ok(())
    }
}
