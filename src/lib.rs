//! # site-enhance
//!
//! Leptos + WASM behavior layer for a static, server-rendered website.
//! Loaded next to the HTML, it wires up the theme toggle, scroll-to-top
//! button, active navigation marking, entry animations, contact form
//! validation, notifications and button ripples.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Pure, host-testable logic for every feature |
//! | [`components`] | Leptos views for notifications and ripples |
//! | `dom` | Browser controllers (`hydrate` feature only) |
//! | [`util`] | Storage, keyframes and `web-sys` helpers |
//! | [`config`] | Element ids, selectors and timings |
//! | [`error`] | Browser-layer error type |

pub mod components;
pub mod config;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod error;
pub mod state;
pub mod util;

/// WASM entry point: install logging, then initialize once the DOM is parsed.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use web_sys::Event;

    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger not installed: {err}");
    }

    match util::dom::document() {
        Ok(document) if document.ready_state() == "loading" => {
            if let Err(err) = util::dom::listen(&document, "DOMContentLoaded", |_: Event| boot()) {
                log::warn!("could not defer initialization: {err}");
            }
        }
        Ok(_) => boot(),
        Err(err) => log::warn!("not running in a browser: {err}"),
    }
}

#[cfg(feature = "hydrate")]
fn boot() {
    if let Err(err) = dom::init() {
        log::warn!("initialization failed: {err}");
    }
}
