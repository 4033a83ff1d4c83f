//! Click ripples on buttons.

use gloo_timers::callback::Timeout;
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::components::ripple::RippleDot;
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::state::ripple::{RIPPLE_HOST_OVERFLOW, RIPPLE_HOST_POSITION, Ripple};
use crate::util::dom::{listen, query_all};

/// Bind ripples to every matching control. Returns how many were bound.
pub fn install(document: &Document, config: &SiteConfig) -> Result<usize, SiteError> {
    let lifetime_ms = config.timings.ripple_ms;
    let mut bound = 0;
    for control in query_all(document, &config.ripple_selector)? {
        let Some(host) = control.dyn_ref::<HtmlElement>().cloned() else {
            continue;
        };
        let target = host.clone();
        listen(&host, "click", move |ev: MouseEvent| spawn(&target, &ev, lifetime_ms))?;
        bound += 1;
    }
    Ok(bound)
}

fn spawn(host: &HtmlElement, ev: &MouseEvent, lifetime_ms: u32) {
    let rect = host.get_bounding_client_rect();
    let ripple = Ripple::from_click(f64::from(ev.client_x()), f64::from(ev.client_y()), rect.left(), rect.top());

    let style = host.style();
    let clipped = style
        .set_property("position", RIPPLE_HOST_POSITION)
        .and_then(|()| style.set_property("overflow", RIPPLE_HOST_OVERFLOW));
    if let Err(err) = clipped {
        log::debug!("ripple host styling failed: {err:?}");
    }

    let view = mount_to(host.clone(), move || view! { <RippleDot ripple=ripple/> });
    Timeout::new(lifetime_ms, move || drop(view)).forget();
}
