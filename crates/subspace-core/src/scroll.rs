//! Scroll-driven header style state
//!
//! The header switches to its compact/frosted style once the page has been
//! scrolled past a fixed offset. There is no hysteresis: every scroll event
//! re-evaluates the latest offset against the threshold.

use serde::{Deserialize, Serialize};

/// Vertical offset (CSS pixels) past which the header is considered scrolled
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

/// Returns true when `offset` is strictly past `threshold`
pub fn is_past_threshold(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Header scroll state owned by one mounted navbar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    is_scrolled: bool,
    threshold: f64,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::with_threshold(SCROLL_THRESHOLD_PX)
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            is_scrolled: false,
            threshold,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Record a scroll event. Returns true if the scrolled flag changed.
    pub fn observe(&mut self, offset: f64) -> bool {
        let scrolled = is_past_threshold(offset, self.threshold);
        let changed = scrolled != self.is_scrolled;
        self.is_scrolled = scrolled;
        changed
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_not_scrolled() {
        let state = ScrollState::default();
        assert!(!state.is_scrolled());
        assert_eq!(state.threshold(), SCROLL_THRESHOLD_PX);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(!is_past_threshold(0.0, SCROLL_THRESHOLD_PX));
        assert!(!is_past_threshold(10.0, SCROLL_THRESHOLD_PX));
        assert!(is_past_threshold(10.5, SCROLL_THRESHOLD_PX));
        assert!(is_past_threshold(11.0, SCROLL_THRESHOLD_PX));
    }

    #[test]
    fn test_observe_matches_offset_for_many_values() {
        let mut state = ScrollState::new();
        for offset in [0.0, 3.0, 10.0, 10.01, 250.0, 9.99, 11.0, 0.0, 10.0] {
            state.observe(offset);
            assert_eq!(state.is_scrolled(), offset > 10.0, "offset {}", offset);
        }
    }

    #[test]
    fn test_observe_only_latest_offset_matters() {
        let mut a = ScrollState::new();
        a.observe(500.0);
        a.observe(2.0);

        let mut b = ScrollState::new();
        b.observe(2.0);

        assert_eq!(a, b);
    }

    #[test]
    fn test_observe_reports_changes() {
        let mut state = ScrollState::new();
        assert!(!state.observe(5.0));
        assert!(state.observe(20.0));
        assert!(!state.observe(40.0));
        assert!(state.observe(10.0));
    }

    #[test]
    fn test_custom_threshold() {
        let mut state = ScrollState::with_threshold(64.0);
        state.observe(30.0);
        assert!(!state.is_scrolled());
        state.observe(65.0);
        assert!(state.is_scrolled());
    }
}
