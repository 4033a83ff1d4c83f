//! One-shot active navigation marking.

use web_sys::{Document, Window};

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::state::nav::{ACTIVE_CLASS, current_page, remark};
use crate::util::dom::query_all;

/// Mark the navigation link(s) for the current page. Returns how many were
/// marked.
pub fn mark_active(window: &Window, document: &Document, config: &SiteConfig) -> Result<usize, SiteError> {
    let pathname = window.location().pathname()?;
    let current = current_page(&pathname, &config.home_page);
    let links = query_all(document, &config.nav_link_selector)?;
    let hrefs: Vec<Option<String>> = links.iter().map(|link| link.get_attribute("href")).collect();

    let mut marks: Vec<bool> = links.iter().map(|link| link.class_list().contains(ACTIVE_CLASS)).collect();
    let marked = remark(&mut marks, current, &hrefs);
    for (link, active) in links.iter().zip(marks) {
        link.class_list().toggle_with_force(ACTIVE_CLASS, active)?;
    }
    log::debug!("active nav: {current} matched {marked} of {} link(s)", links.len());
    Ok(marked)
}
