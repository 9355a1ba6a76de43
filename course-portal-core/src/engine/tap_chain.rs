//! Triple tap detection
//!
//! Taps (touch or mouse clicks) chain while each follows the previous one
//! within [`TAP_WINDOW`]; the third tap of a chain fires and starts a new chain.

use std::time::{Duration, Instant};

/// Maximum gap between two taps of one chain.
pub const TAP_WINDOW: Duration = Duration::from_millis(500);

/// Taps needed to fire.
pub const TAPS_TO_OPEN: u32 = 3;

#[derive(Debug, Default, Clone)]
pub struct TapChain {
    last_tap: Option<Instant>,
    count: u32,
}

impl TapChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a tap at `at`. Returns `true` when this tap completes a chain.
    pub fn register(&mut self, at: Instant) -> bool {
        let chained = self.last_tap.is_some_and(|last| {
            let gap = at.saturating_duration_since(last);
            !gap.is_zero() && gap < TAP_WINDOW
        });
        self.last_tap = Some(at);

        if !chained {
            self.count = 1;
            return false;
        }

        self.count += 1;
        if self.count >= TAPS_TO_OPEN {
            self.count = 0;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.last_tap = None;
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taps(offsets_ms: &[u64]) -> Vec<bool> {
        let start = Instant::now();
        let mut chain = TapChain::new();
        offsets_ms
            .iter()
            .map(|ms| chain.register(start + Duration::from_millis(*ms)))
            .collect()
    }

    #[test]
    fn three_quick_taps_fire() {
        assert_eq!(taps(&[0, 200, 350]), vec![false, false, true]);
    }

    #[test]
    fn long_gap_restarts_chain() {
        assert_eq!(taps(&[0, 700, 900]), vec![false, false, false]);
    }

    #[test]
    fn chain_continues_after_restart() {
        assert_eq!(taps(&[0, 700, 900, 1100]), vec![false, false, false, true]);
    }

    #[test]
    fn firing_resets_the_chain() {
        // after firing, the next tap within the window counts as the first of a new chain
        assert_eq!(
            taps(&[0, 100, 200, 300, 400, 500]),
            vec![false, false, true, false, false, true]
        );
    }

    #[test]
    fn gap_of_exactly_window_does_not_chain() {
        assert_eq!(taps(&[0, 500, 1000]), vec![false, false, false]);
    }

    #[test]
    fn simultaneous_taps_do_not_chain() {
        assert_eq!(taps(&[0, 0, 0]), vec![false, false, false]);
    }
}
