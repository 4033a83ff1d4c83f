//! Theme toggle wiring.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element, Event, HtmlElement};

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::state::theme::{THEME_ATTRIBUTE, Theme, ThemeState};
use crate::util::dom::{element_by_id, listen};
use crate::util::storage::{LocalStorage, system_prefers_dark};

/// Transform played on the toggle control after each click.
const FEEDBACK_TRANSFORM: &str = "scale(1.2) rotate(360deg)";

/// Apply the startup theme and bind the toggle control.
pub fn install(document: &Document, config: &SiteConfig) -> Result<(), SiteError> {
    let root = document.document_element().ok_or(SiteError::NoDocument)?;
    let icon = document.get_element_by_id(&config.theme_icon_id);

    let mut state = ThemeState::new(LocalStorage, config.theme_storage_key.clone(), system_prefers_dark());
    if let Some(theme) = state.resolved() {
        apply(&root, icon.as_ref(), theme)?;
    }
    state.subscribe(move |theme| {
        if let Err(err) = apply(&root, icon.as_ref(), theme) {
            log::warn!("applying theme {} failed: {err}", theme.as_str());
        }
    });

    let Some(toggle) = element_by_id::<HtmlElement>(document, &config.theme_toggle_id) else {
        log::debug!("no #{} element; theme toggle disabled", config.theme_toggle_id);
        return Ok(());
    };

    let state = Rc::new(RefCell::new(state));
    let feedback_ms = config.timings.icon_feedback_ms;
    let control = toggle.clone();
    listen(&toggle, "click", move |_: Event| {
        let theme = state.borrow_mut().toggle();
        log::debug!("theme switched to {}", theme.as_str());
        play_feedback(&control, feedback_ms);
    })
}

fn apply(root: &Element, icon: Option<&Element>, theme: Theme) -> Result<(), SiteError> {
    root.set_attribute(THEME_ATTRIBUTE, theme.as_str())?;
    if let Some(icon) = icon {
        let swap = theme.icon_classes();
        let classes = icon.class_list();
        classes.remove_1(swap.hide)?;
        classes.add_1(swap.show)?;
    }
    Ok(())
}

fn play_feedback(control: &HtmlElement, reset_ms: u32) {
    if let Err(err) = control.style().set_property("transform", FEEDBACK_TRANSFORM) {
        log::debug!("toggle feedback skipped: {err:?}");
        return;
    }
    let control = control.clone();
    Timeout::new(reset_ms, move || {
        if let Err(err) = control.style().remove_property("transform") {
            log::debug!("toggle feedback reset failed: {err:?}");
        }
    })
    .forget();
}
