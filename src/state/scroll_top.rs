//! Scroll-to-top button visibility.

#[cfg(test)]
#[path = "scroll_top_test.rs"]
mod scroll_top_test;

/// Class toggled on the button while it should be shown.
pub const VISIBLE_CLASS: &str = "visible";

/// Plain `offset > threshold`; no hysteresis, so the button may flicker at
/// the boundary.
#[must_use]
pub fn is_visible(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Last known visibility of the button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTopState {
    pub threshold: f64,
    pub visible: bool,
}

impl ScrollTopState {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold, visible: false }
    }

    /// Record a new scroll offset. Returns `true` when visibility changed.
    pub fn update(&mut self, offset: f64) -> bool {
        let next = is_visible(offset, self.threshold);
        let changed = next != self.visible;
        self.visible = next;
        changed
    }
}
