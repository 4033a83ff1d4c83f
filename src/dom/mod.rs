//! Browser controllers binding page elements to the `state` modules.
//!
//! ARCHITECTURE
//! ============
//! Each controller finds its elements, attaches listeners for the page
//! lifetime and returns. A missing element disables that controller only;
//! a failing DOM call is logged and the remaining controllers still run.

pub mod contact_form;
pub mod nav;
pub mod notify;
pub mod reveal;
pub mod ripple;
pub mod scroll_top;
pub mod theme;

use std::fmt::Debug;

use web_sys::Document;

use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::error::SiteError;
use crate::util::dom::window;
use crate::util::keyframes;

/// Wire every enhancement into the current page.
pub fn init() -> Result<(), SiteError> {
    let window = window()?;
    let document = window.document().ok_or(SiteError::NoDocument)?;
    let config = load_config(&document);

    report("keyframes", keyframes::inject(&document));
    report("theme", theme::install(&document, &config));
    report("scroll-to-top", scroll_top::install(&window, &document, &config));
    report("active nav", nav::mark_active(&window, &document, &config));
    match notify::Notifier::new(&document, &config.timings) {
        Ok(notifier) => {
            report("contact form", contact_form::install(&document, &config, notifier.clone()));
            report("escape shortcut", notify::install_escape(&document, notifier));
        }
        Err(err) => log::warn!("notifications unavailable: {err}"),
    }
    report("ripple", ripple::install(&document, &config));
    reveal::schedule(&document, &config);

    log::info!("site enhancements loaded");
    Ok(())
}

fn report<T: Debug>(feature: &str, result: Result<T, SiteError>) {
    match result {
        Ok(value) => log::debug!("{feature} ready: {value:?}"),
        Err(err) => log::warn!("{feature} setup failed: {err}"),
    }
}

/// Overrides from `<script type="application/json" id="site-config">`.
fn load_config(document: &Document) -> SiteConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            SiteConfig::default()
        }
    }
}
