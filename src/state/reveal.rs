//! One-shot entry animation tracking.
//!
//! Each observed block moves `Pending -> Revealed` on its first intersecting
//! notification and never moves back, so leaving and re-entering the viewport
//! does not replay the animation.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashMap;

/// Data attribute holding the tracker key on each observed element.
pub const REVEAL_KEY_ATTRIBUTE: &str = "data-reveal-key";

pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(20px)";
pub const REVEALED_OPACITY: &str = "1";
pub const REVEALED_TRANSFORM: &str = "translateY(0)";
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// Identity of an observed element.
pub type RevealKey = u32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

/// Reveal state per observed element.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    states: HashMap<RevealKey, RevealState>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `key`. New keys start `Pending`; a key already known keeps its
    /// state, so `Revealed` is never reset.
    pub fn register(&mut self, key: RevealKey) {
        self.states.entry(key).or_default();
    }

    #[must_use]
    pub fn state(&self, key: RevealKey) -> Option<RevealState> {
        self.states.get(&key).copied()
    }

    /// Feed one observer entry. Returns `true` only for the transition into
    /// `Revealed`; unknown keys are ignored.
    pub fn on_intersection(&mut self, key: RevealKey, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        match self.states.get_mut(&key) {
            Some(state) if *state == RevealState::Pending => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    /// Number of elements still waiting for their first intersection.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.states.values().filter(|s| **s == RevealState::Pending).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
