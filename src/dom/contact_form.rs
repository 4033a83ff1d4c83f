//! Contact form submit interception.

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::config::{FormFieldIds, SiteConfig};
use crate::dom::notify::Notifier;
use crate::error::SiteError;
use crate::state::contact_form::{ContactFields, submission_outcome};
use crate::util::dom::listen;

pub fn install(document: &Document, config: &SiteConfig, notifier: Notifier) -> Result<(), SiteError> {
    let form = document
        .query_selector(&config.form_selector)?
        .and_then(|el| el.dyn_ref::<HtmlFormElement>().cloned());
    let Some(form) = form else {
        log::debug!("no {} element; contact validation disabled", config.form_selector);
        return Ok(());
    };

    let doc = document.clone();
    let ids = config.form_fields.clone();
    let target = form.clone();
    listen(&form, "submit", move |ev: Event| {
        ev.prevent_default();
        let fields = read_fields(&doc, &ids);
        let outcome = submission_outcome(&fields);
        notifier.show(outcome.message, outcome.kind);
        if outcome.reset {
            target.reset();
        }
    })
}

fn read_fields(document: &Document, ids: &FormFieldIds) -> ContactFields {
    let name = field_value(document, &ids.name);
    let email = field_value(document, &ids.email);
    let message = field_value(document, &ids.message);
    ContactFields::from_raw(name.as_deref(), email.as_deref(), message.as_deref())
}

/// Value of an `<input>` or `<textarea>`; anything else reads as missing.
fn field_value(document: &Document, id: &str) -> Option<String> {
    let element = document.get_element_by_id(id)?;
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    element.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value)
}
