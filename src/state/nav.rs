//! Active navigation link matching.
//!
//! Matching compares only the last path segment of the current location and
//! of each link target. Query strings, fragments and trailing slashes are
//! left as-is, and every matching link is marked.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Class carried by the link(s) for the current page.
pub const ACTIVE_CLASS: &str = "active";

/// Text after the final `/`, or the whole input when there is none.
#[must_use]
pub fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Page identifier for a location path; `home` when the path ends in `/`.
#[must_use]
pub fn current_page<'a>(pathname: &'a str, home: &'a str) -> &'a str {
    match last_segment(pathname) {
        "" => home,
        page => page,
    }
}

/// For each link target, whether it points at `current`.
///
/// A link without an `href` never matches.
#[must_use]
pub fn active_flags(current: &str, hrefs: &[Option<String>]) -> Vec<bool> {
    hrefs
        .iter()
        .map(|href| href.as_deref().is_some_and(|href| last_segment(href) == current))
        .collect()
}

/// Rewrite existing `marks` in place: stale marks are cleared and matching
/// links are marked. Returns how many are marked afterwards.
///
/// `marks` and `hrefs` pair up by position; extra entries on either side are
/// left alone.
pub fn remark(marks: &mut [bool], current: &str, hrefs: &[Option<String>]) -> usize {
    for (mark, active) in marks.iter_mut().zip(active_flags(current, hrefs)) {
        *mark = active;
    }
    marks.iter().filter(|mark| **mark).count()
}
