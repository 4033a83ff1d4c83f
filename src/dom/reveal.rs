//! Deferred, one-shot entry animations driven by an `IntersectionObserver`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::state::reveal::{
    HIDDEN_OPACITY, HIDDEN_TRANSFORM, REVEAL_KEY_ATTRIBUTE, REVEAL_TRANSITION, REVEALED_OPACITY, REVEALED_TRANSFORM,
    RevealKey, RevealTracker,
};
use crate::util::dom::query_all;

/// Start observing after the configured delay so blocks still being laid
/// out are not animated.
pub fn schedule(document: &Document, config: &SiteConfig) {
    let delay_ms = config.timings.reveal_delay_ms;
    let document = document.clone();
    let config = config.clone();
    Timeout::new(delay_ms, move || match install(&document, &config) {
        Ok(count) => log::debug!("observing {count} block(s) for reveal"),
        Err(err) => log::warn!("reveal setup failed: {err}"),
    })
    .forget();
}

/// Hide every matching block and observe it. Returns the number observed.
pub fn install(document: &Document, config: &SiteConfig) -> Result<usize, SiteError> {
    let blocks = query_all(document, &config.reveal_selector)?;
    if blocks.is_empty() {
        return Ok(0);
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new()));
    let on_entries = {
        let tracker = Rc::clone(&tracker);
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(key) = reveal_key(&target) else {
                    continue;
                };
                if tracker.borrow_mut().on_intersection(key, entry.is_intersecting()) {
                    if let Err(err) = show(&target) {
                        log::warn!("reveal failed: {err}");
                    }
                    observer.unobserve(&target);
                }
            }
        })
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.timings.reveal_threshold));
    options.set_root_margin(&config.timings.reveal_root_margin);
    let observer = IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &options)?;
    on_entries.forget();

    let mut observed = 0;
    let mut next_key: RevealKey = 0;
    for block in &blocks {
        let Some(html) = block.dyn_ref::<HtmlElement>() else {
            continue;
        };
        let key = next_key;
        next_key = next_key.wrapping_add(1);
        tracker.borrow_mut().register(key);
        block.set_attribute(REVEAL_KEY_ATTRIBUTE, &key.to_string())?;
        hide(html)?;
        observer.observe(block);
        observed += 1;
    }
    Ok(observed)
}

fn reveal_key(element: &Element) -> Option<RevealKey> {
    element.get_attribute(REVEAL_KEY_ATTRIBUTE)?.parse().ok()
}

fn hide(block: &HtmlElement) -> Result<(), SiteError> {
    let style = block.style();
    style.set_property("opacity", HIDDEN_OPACITY)?;
    style.set_property("transform", HIDDEN_TRANSFORM)?;
    style.set_property("transition", REVEAL_TRANSITION)?;
    Ok(())
}

fn show(target: &Element) -> Result<(), SiteError> {
    let Some(block) = target.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    let style = block.style();
    style.set_property("opacity", REVEALED_OPACITY)?;
    style.set_property("transform", REVEALED_TRANSFORM)?;
    Ok(())
}
