//! Click ripple geometry.

#[cfg(test)]
#[path = "ripple_test.rs"]
mod ripple_test;

/// Ripple circle diameter; large enough to cover a typical button once scaled.
pub const RIPPLE_DIAMETER_PX: f64 = 100.0;

/// Click position relative to the control's bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub x: f64,
    pub y: f64,
}

impl Ripple {
    /// Offset of a click at (`client_x`, `client_y`) inside a box whose top-left
    /// corner is at (`rect_left`, `rect_top`).
    #[must_use]
    pub fn from_click(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Self {
        Self { x: client_x - rect_left, y: client_y - rect_top }
    }

    /// Inline style centring the circle on the click point.
    #[must_use]
    pub fn style(&self) -> String {
        let half = RIPPLE_DIAMETER_PX / 2.0;
        format!(
            "position: absolute; background: rgba(255, 255, 255, 0.3); border-radius: 50%; \
             transform: scale(0); animation: ripple 0.6s linear; left: {}px; top: {}px; \
             width: {RIPPLE_DIAMETER_PX}px; height: {RIPPLE_DIAMETER_PX}px; \
             margin-left: -{half}px; margin-top: -{half}px; pointer-events: none;",
            self.x, self.y
        )
    }
}

/// Style the host control needs so the ripple is clipped to it.
pub const RIPPLE_HOST_POSITION: &str = "relative";
pub const RIPPLE_HOST_OVERFLOW: &str = "hidden";
