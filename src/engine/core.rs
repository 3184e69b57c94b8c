//! Engine Core - Rotation state machine
//!
//! The single source of truth for one carousel: slot count, visible window,
//! current page, pause flag and the epoch token that fences out stale timer
//! fires. Plain data, no threads, no signals - the ticker and the public
//! handle live above this and drive it under a lock.
//!
//! Every mutating operation that changes what "the next automatic advance"
//! should do bumps the epoch. A timer fire carries the epoch it was armed
//! with and is rejected if the engine has moved on since.
//!
//! # API
//!
//! - `EngineCore::new` - Construct with slot count, window size, interval
//! - `advance` / `retreat` / `go_to` - Manual navigation (epoch bump)
//! - `pause` / `resume` - Hover hold (epoch bump)
//! - `recompute_layout` - New window size, page reset (epoch bump)
//! - `auto_tick` - Timer-driven advance, fenced by epoch
//! - `phase` / `page_count` / `can_rotate` - Derived state

use std::time::Duration;

use crate::layout::page_count;
use crate::types::Phase;

// =============================================================================
// ENGINE CORE
// =============================================================================

/// Rotation state for one carousel.
#[derive(Debug)]
pub struct EngineCore {
    /// Total slots in the cycle. Fixed for the engine's lifetime.
    slot_count: usize,
    /// Slots exposed per page. At least 1.
    visible: usize,
    /// Current page, always within `0..page_count()` when pages exist.
    page: usize,
    /// Hover hold. Navigation still works while paused.
    paused: bool,
    /// Auto-advance cadence. `None` disables rotation entirely.
    interval: Option<Duration>,
    /// Timer fence. Bumped by every operation that restarts or cancels
    /// the cadence; a fire armed under an older value is ignored.
    epoch: u64,
}

impl EngineCore {
    /// Create an engine at page 0, unpaused.
    pub fn new(slot_count: usize, visible: usize, interval: Option<Duration>) -> Self {
        Self {
            slot_count,
            visible: visible.max(1),
            page: 0,
            paused: false,
            interval,
            epoch: 0,
        }
    }

    // =========================================================================
    // DERIVED STATE
    // =========================================================================

    /// Total slots in the cycle.
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Slots exposed per page.
    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Current page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// First slot of the current page.
    pub fn current_index(&self) -> usize {
        self.page.saturating_mul(self.visible)
    }

    /// Whether the hover hold is active.
    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Auto-advance cadence, if rotation is configured.
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Current timer fence value.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Pages needed for the current window size.
    pub fn page_count(&self) -> usize {
        page_count(self.slot_count, self.visible)
    }

    /// Whether automatic rotation applies: a cadence is configured and
    /// there is more than one page to rotate through.
    pub fn can_rotate(&self) -> bool {
        self.interval.is_some() && self.page_count() > 1
    }

    /// Lifecycle phase derived from content and eligibility.
    pub fn phase(&self) -> Phase {
        if self.slot_count == 0 {
            Phase::Inert
        } else if self.can_rotate() {
            Phase::Rotating
        } else {
            Phase::Static
        }
    }

    // =========================================================================
    // NAVIGATION
    // =========================================================================

    /// Step forward one page, wrapping past the last. Restarts the cadence.
    pub fn advance(&mut self) {
        self.bump_epoch();
        let pages = self.page_count();
        if pages > 1 {
            self.page = (self.page + 1) % pages;
        }
    }

    /// Step back one page, wrapping before the first. Restarts the cadence.
    pub fn retreat(&mut self) {
        self.bump_epoch();
        let pages = self.page_count();
        if pages > 1 {
            self.page = (self.page + pages - 1) % pages;
        }
    }

    /// Jump straight to `page`, clamped to the last page. Restarts the
    /// cadence even when the page does not change.
    pub fn go_to(&mut self, page: usize) {
        self.bump_epoch();
        let pages = self.page_count();
        if pages > 0 {
            self.page = page.min(pages - 1);
        }
    }

    // =========================================================================
    // HOLD AND LAYOUT
    // =========================================================================

    /// Engage the hover hold and cancel any in-flight fire. Idempotent.
    pub fn pause(&mut self) {
        self.bump_epoch();
        self.paused = true;
    }

    /// Release the hover hold. The caller re-arms the timer, so the next
    /// fire lands a full interval from now. Idempotent.
    pub fn resume(&mut self) {
        self.bump_epoch();
        self.paused = false;
    }

    /// Adopt a new window size and snap back to the first page. The reset
    /// happens even when the size is unchanged, so a burst of layout
    /// passes always lands in a consistent spot.
    pub fn recompute_layout(&mut self, visible: usize) {
        self.bump_epoch();
        self.visible = visible.max(1);
        self.page = 0;
    }

    // =========================================================================
    // TIMER PROTOCOL
    // =========================================================================

    /// Invalidate every fire armed before this call.
    pub fn bump_epoch(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// A timer fire armed under `epoch`. Advances one page and reports
    /// `true` when the fire is still current and rotation still applies;
    /// `false` tells the timer loop to stop.
    pub fn auto_tick(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch || self.paused || !self.can_rotate() {
            return false;
        }
        let pages = self.page_count();
        self.page = (self.page + 1) % pages;
        true
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(5000);

    fn rotating(slot_count: usize, visible: usize) -> EngineCore {
        EngineCore::new(slot_count, visible, Some(TICK))
    }

    #[test]
    fn test_phase_by_content() {
        assert_eq!(rotating(0, 1).phase(), Phase::Inert);
        assert_eq!(rotating(1, 1).phase(), Phase::Static);
        assert_eq!(rotating(3, 4).phase(), Phase::Static); // window covers all
        assert_eq!(rotating(5, 1).phase(), Phase::Rotating);
        assert_eq!(
            EngineCore::new(5, 1, None).phase(),
            Phase::Static // no cadence configured
        );
    }

    #[test]
    fn test_auto_tick_cycles_forward() {
        let mut core = rotating(5, 1);
        let epoch = core.epoch();
        for expected in [1, 2, 3, 4, 0, 1] {
            assert!(core.auto_tick(epoch));
            assert_eq!(core.page(), expected);
        }
    }

    #[test]
    fn test_auto_tick_wraps_partial_final_page() {
        // 7 slots, 4 per view: two pages, second only partly filled.
        let mut core = rotating(7, 4);
        assert_eq!(core.page_count(), 2);
        let epoch = core.epoch();
        assert!(core.auto_tick(epoch));
        assert_eq!(core.page(), 1);
        assert_eq!(core.current_index(), 4);
        assert!(core.auto_tick(epoch));
        assert_eq!(core.page(), 0);
    }

    #[test]
    fn test_stale_fire_rejected() {
        let mut core = rotating(5, 1);
        let armed = core.epoch();
        core.go_to(2); // user beat the timer
        assert!(!core.auto_tick(armed));
        assert_eq!(core.page(), 2);
    }

    #[test]
    fn test_pause_blocks_and_invalidates() {
        let mut core = rotating(5, 1);
        let armed = core.epoch();
        core.pause();
        // Both the stale fire and a hypothetical current-epoch fire stop.
        assert!(!core.auto_tick(armed));
        assert!(!core.auto_tick(core.epoch()));
        assert_eq!(core.page(), 0);

        core.resume();
        assert!(!core.paused());
        let epoch = core.epoch();
        assert!(core.auto_tick(epoch));
        assert_eq!(core.page(), 1);
    }

    #[test]
    fn test_pause_resume_idempotent() {
        let mut core = rotating(5, 1);
        core.pause();
        core.pause();
        assert!(core.paused());
        core.resume();
        core.resume();
        assert!(!core.paused());
    }

    #[test]
    fn test_navigation_while_paused() {
        let mut core = rotating(5, 1);
        core.pause();
        core.advance();
        assert_eq!(core.page(), 1);
        core.retreat();
        assert_eq!(core.page(), 0);
        assert!(core.paused());
    }

    #[test]
    fn test_advance_retreat_wrap() {
        let mut core = rotating(3, 1);
        core.retreat();
        assert_eq!(core.page(), 2);
        core.advance();
        assert_eq!(core.page(), 0);
        core.advance();
        core.advance();
        assert_eq!(core.page(), 2);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut core = rotating(5, 1);
        for _ in 0..5 {
            core.advance();
        }
        assert_eq!(core.page(), 0);
        for _ in 0..5 {
            core.retreat();
        }
        assert_eq!(core.page(), 0);

        // Page units: ceil(7 / 4) = 2 advances per cycle.
        let mut deck = rotating(7, 4);
        for _ in 0..deck.page_count() {
            deck.advance();
        }
        assert_eq!(deck.page(), 0);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut core = rotating(5, 1);
        core.go_to(3);
        assert_eq!(core.page(), 3);
        core.go_to(99);
        assert_eq!(core.page(), 4);
    }

    #[test]
    fn test_go_to_same_page_still_restarts() {
        let mut core = rotating(5, 1);
        core.go_to(2);
        let before = core.epoch();
        core.go_to(2);
        assert_ne!(core.epoch(), before);
        assert_eq!(core.page(), 2);
    }

    #[test]
    fn test_single_page_never_moves() {
        for mut core in [rotating(1, 1), rotating(3, 4), rotating(0, 1)] {
            let epoch = core.epoch();
            assert!(!core.auto_tick(epoch));
            core.advance();
            core.retreat();
            assert_eq!(core.page(), 0);
        }
    }

    #[test]
    fn test_recompute_resets_page() {
        let mut core = rotating(8, 4);
        core.advance();
        assert_eq!(core.page(), 1);

        core.recompute_layout(2);
        assert_eq!(core.page(), 0);
        assert_eq!(core.page_count(), 4);
    }

    #[test]
    fn test_recompute_same_size_still_resets() {
        let mut core = rotating(8, 4);
        core.go_to(1);
        core.recompute_layout(4);
        assert_eq!(core.page(), 0);
    }

    #[test]
    fn test_recompute_can_change_eligibility() {
        let mut core = rotating(3, 1);
        assert!(core.can_rotate());
        core.recompute_layout(4);
        assert!(!core.can_rotate());
        assert_eq!(core.phase(), Phase::Static);

        core.recompute_layout(1);
        assert!(core.can_rotate());
        assert_eq!(core.phase(), Phase::Rotating);
    }

    #[test]
    fn test_every_mutation_fences_timers() {
        let mut core = rotating(5, 1);
        let mut armed = core.epoch();
        for op in 0..5 {
            match op {
                0 => core.advance(),
                1 => core.retreat(),
                2 => core.go_to(1),
                3 => core.pause(),
                _ => {
                    core.resume();
                    core.recompute_layout(1);
                }
            }
            assert!(!core.auto_tick(armed));
            armed = core.epoch();
        }
    }
}
