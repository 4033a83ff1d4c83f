//! Scroll-to-top button wiring.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::state::scroll_top::{ScrollTopState, VISIBLE_CLASS};
use crate::util::dom::{element_by_id, listen};

pub fn install(window: &Window, document: &Document, config: &SiteConfig) -> Result<(), SiteError> {
    let Some(button) = element_by_id::<HtmlElement>(document, &config.scroll_top_id) else {
        log::debug!("no #{} element; scroll-to-top disabled", config.scroll_top_id);
        return Ok(());
    };

    let state = Rc::new(RefCell::new(ScrollTopState::new(config.timings.scroll_threshold_px)));
    let win = window.clone();
    let target = button.clone();
    listen(window, "scroll", move |_: Event| {
        let offset = match win.scroll_y() {
            Ok(offset) => offset,
            Err(err) => {
                log::debug!("scroll offset unavailable: {err:?}");
                return;
            }
        };
        let mut state = state.borrow_mut();
        if state.update(offset) {
            if let Err(err) = target.class_list().toggle_with_force(VISIBLE_CLASS, state.visible) {
                log::warn!("scroll-to-top class update failed: {err:?}");
            }
        }
    })?;

    let win = window.clone();
    listen(&button, "click", move |_: Event| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    })
}
