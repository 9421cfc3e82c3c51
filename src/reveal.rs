//! Fire-once reveal bookkeeping for gallery items.

use serde::Deserialize;

/// Intersection parameters for the reveal trigger.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    /// Fraction of the item that must be visible.
    pub threshold: f64,
    /// Extra distance past the viewport's bottom edge the item must clear.
    pub bottom_margin_px: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: 50.0,
        }
    }
}

impl RevealOptions {
    /// CSS root margin shrinking the viewport from the bottom.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }
}

/// Style applied to an item once revealed. The hidden style comes from the
/// page stylesheet and is never set here.
pub const REVEALED_STYLE: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

/// One flag per gallery item discovered at mount time.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(items: usize) -> Self {
        Self {
            revealed: vec![false; items],
        }
    }

    /// Record an intersection report for `index`.
    ///
    /// Returns `true` only for the first intersecting report of an item.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        match self.revealed.get_mut(index) {
            Some(flag) if intersecting && !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_root_margin_matches_bottom_offset() {
        assert_eq!(RevealOptions::default().root_margin(), "0px 0px -50px 0px");
        let opts = RevealOptions {
            threshold: 0.25,
            bottom_margin_px: 12.5,
        };
        assert_eq!(opts.root_margin(), "0px 0px -12.5px 0px");
    }

    #[test]
    fn reveal_fires_once_and_sticks() {
        let mut tracker = RevealTracker::new(3);
        assert!(!tracker.observe(1, false));
        assert!(tracker.observe(1, true));
        assert!(!tracker.observe(1, true));
        // leaving the viewport does not un-reveal
        assert!(!tracker.observe(1, false));
        assert!(tracker.is_revealed(1));
        assert_eq!(tracker.revealed_count(), 1);
    }

    #[test]
    fn never_intersecting_items_stay_hidden() {
        let mut tracker = RevealTracker::new(2);
        tracker.observe(0, true);
        assert!(!tracker.is_revealed(1));
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut tracker = RevealTracker::new(1);
        assert!(!tracker.observe(5, true));
        assert!(!tracker.is_revealed(5));
        assert_eq!(tracker.revealed_count(), 0);
    }
}
