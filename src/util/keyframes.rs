//! Keyframes used by notifications and ripples, injected once at startup.

#[cfg(test)]
#[path = "keyframes_test.rs"]
mod keyframes_test;

/// Id of the injected `<style>` element; guards against double injection.
pub const KEYFRAMES_STYLE_ID: &str = "site-enhance-keyframes";

pub const KEYFRAMES_CSS: &str = "\
@keyframes slideIn {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOut {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(100%); opacity: 0; }
}
@keyframes ripple {
    to { transform: scale(4); opacity: 0; }
}
";

/// Append the keyframes `<style>` to `<head>` unless already present.
#[cfg(feature = "hydrate")]
pub fn inject(document: &web_sys::Document) -> Result<(), crate::error::SiteError> {
    if document.get_element_by_id(KEYFRAMES_STYLE_ID).is_some() {
        return Ok(());
    }
    let Some(head) = document.head() else {
        log::debug!("no <head>; skipping keyframes");
        return Ok(());
    };
    let style = document.create_element("style")?;
    style.set_id(KEYFRAMES_STYLE_ID);
    style.set_text_content(Some(KEYFRAMES_CSS));
    head.append_child(&style)?;
    Ok(())
}
