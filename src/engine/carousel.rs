//! Carousel - Public rotation handle
//!
//! Owns one engine core behind its lock, the cadence ticker that drives it
//! and a page signal for the reactive layer. All methods take `&self`; the
//! handle lives on the UI thread and is shared by cloning into handlers
//! behind `Rc`.
//!
//! The page signal mirrors the core. Timer fires land on the ticker thread,
//! which cannot touch signals, so the mirror refreshes whenever the owner
//! thread touches the handle (`page`, `sync`, any navigation). Frame loops
//! that render from the signal call `sync` once per frame.
//!
//! # API
//!
//! - `Carousel::slide_show` - One slot per page, default cadence
//! - `Carousel::windowed` - Responsive window with measured offsets
//! - `Carousel::new` - Full control via `CarouselOptions`
//! - `next` / `prev` / `go_to` - Navigation, cadence restarts
//! - `pause` / `resume` - Hover hold
//! - `recompute_layout` - Re-sample the window source, reset to page 0
//! - `offset` - Where the view should put the slot strip
//! - `page` / `sync` / `page_signal` - Current page, signal mirror
//!
//! # Example
//!
//! ```ignore
//! use carousel::engine::Carousel;
//!
//! let hero = Carousel::slide_show(5);
//! hero.pause();           // pointer entered the container
//! hero.go_to(2);          // dot selected
//! hero.resume();          // pointer left, fresh interval
//! let page = hero.page();
//! ```

use std::cell::RefCell;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use spark_signals::{Signal, signal};

use crate::layout::{Measurements, strip_offset, window_range};
use crate::types::Offset;

use super::core::EngineCore;
use super::ticker::Ticker;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Cadence used when options leave the interval untouched.
pub const DEFAULT_AUTO_ADVANCE: Duration = Duration::from_millis(5000);

// =============================================================================
// OPTIONS
// =============================================================================

/// How `Carousel::offset` reports strip placement.
pub enum OffsetModel {
    /// Report the leading slot of the current page. Fits slide shows where
    /// the view toggles slot visibility instead of translating a strip.
    ActiveSlot,
    /// Report a translation computed from view measurements. The closure is
    /// re-sampled on every read so the offset tracks live geometry; keep it
    /// cheap.
    Window(Box<dyn Fn() -> Measurements>),
}

/// Construction options for [`Carousel::new`].
pub struct CarouselOptions {
    /// Total slots in the cycle.
    pub slot_count: usize,
    /// Auto-advance cadence. `None` builds a manual-only carousel.
    pub interval: Option<Duration>,
    /// Window-size source, sampled at construction and on every
    /// `recompute_layout`.
    pub window: Box<dyn Fn() -> usize>,
    /// Strip placement model.
    pub offset: OffsetModel,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            slot_count: 0,
            interval: Some(DEFAULT_AUTO_ADVANCE),
            window: Box::new(|| 1),
            offset: OffsetModel::ActiveSlot,
        }
    }
}

// =============================================================================
// CAROUSEL
// =============================================================================

/// Handle to one rotating carousel.
pub struct Carousel {
    core: Arc<Mutex<EngineCore>>,
    ticker: RefCell<Ticker>,
    /// Owner-thread mirror of the core's page, refreshed by `sync`.
    page_signal: Signal<usize>,
    window: Box<dyn Fn() -> usize>,
    offset: OffsetModel,
}

impl Carousel {
    /// Build a carousel from options and arm the cadence when eligible.
    pub fn new(options: CarouselOptions) -> Self {
        let CarouselOptions {
            slot_count,
            interval,
            window,
            offset,
        } = options;

        let visible = (window)().max(1);
        let carousel = Self {
            core: Arc::new(Mutex::new(EngineCore::new(slot_count, visible, interval))),
            ticker: RefCell::new(Ticker::new()),
            page_signal: signal(0),
            window,
            offset,
        };
        carousel.arm();
        carousel
    }

    /// One slot per page at the default cadence, slot index offsets.
    pub fn slide_show(slot_count: usize) -> Self {
        Self::new(CarouselOptions {
            slot_count,
            ..Default::default()
        })
    }

    /// Responsive window with translated-strip offsets. `window` yields the
    /// current window size, `measure` the current view geometry.
    pub fn windowed(
        slot_count: usize,
        window: impl Fn() -> usize + 'static,
        measure: impl Fn() -> Measurements + 'static,
    ) -> Self {
        Self::new(CarouselOptions {
            slot_count,
            window: Box::new(window),
            offset: OffsetModel::Window(Box::new(measure)),
            ..Default::default()
        })
    }

    fn with_core<T>(&self, f: impl FnOnce(&mut EngineCore) -> T) -> Option<T> {
        self.core.lock().ok().map(|mut guard| f(&mut guard))
    }

    fn arm(&self) {
        self.ticker.borrow_mut().arm(&self.core);
    }

    // =========================================================================
    // NAVIGATION
    // =========================================================================

    /// Step forward one page and restart the cadence.
    pub fn next(&self) {
        self.with_core(|core| core.advance());
        self.sync();
        self.arm();
    }

    /// Step back one page and restart the cadence.
    pub fn prev(&self) {
        self.with_core(|core| core.retreat());
        self.sync();
        self.arm();
    }

    /// Jump to `page` (clamped to the last page) and restart the cadence.
    pub fn go_to(&self, page: usize) {
        self.with_core(|core| core.go_to(page));
        self.sync();
        self.arm();
    }

    // =========================================================================
    // HOLD AND LAYOUT
    // =========================================================================

    /// Hold rotation in place. The page keeps rendering and navigation
    /// still works. Idempotent.
    pub fn pause(&self) {
        self.with_core(|core| core.pause());
        self.ticker.borrow_mut().disarm();
    }

    /// Release the hold. The next automatic advance lands a full interval
    /// from now. Idempotent.
    pub fn resume(&self) {
        self.with_core(|core| core.resume());
        self.arm();
    }

    /// Re-sample the window source, snap to page 0 and re-evaluate whether
    /// rotation applies. The view calls this after its geometry settles,
    /// typically behind a debounce.
    pub fn recompute_layout(&self) {
        let visible = (self.window)().max(1);
        self.with_core(|core| core.recompute_layout(visible));
        self.sync();
        self.arm();
    }

    /// Stop the cadence. Navigation, `resume` or `recompute_layout` arm it
    /// again; dropping the handle stops it for good.
    pub fn stop(&self) {
        self.with_core(|core| core.bump_epoch());
        self.ticker.borrow_mut().disarm();
    }

    // =========================================================================
    // READS
    // =========================================================================

    /// Refresh the page signal from the core and return the current page.
    pub fn sync(&self) -> usize {
        let page = self.with_core(|core| core.page()).unwrap_or(0);
        if self.page_signal.get() != page {
            self.page_signal.set(page);
        }
        page
    }

    /// Current page. Refreshes the signal mirror as a side effect.
    pub fn page(&self) -> usize {
        self.sync()
    }

    /// Signal mirroring the current page, for deriveds and effects.
    pub fn page_signal(&self) -> Signal<usize> {
        self.page_signal.clone()
    }

    /// Where the view should place the slot strip for the current page.
    pub fn offset(&self) -> Offset {
        let Some((slot_count, page, visible)) =
            self.with_core(|core| (core.slot_count(), core.page(), core.visible()))
        else {
            return Offset::None;
        };
        if slot_count == 0 {
            return Offset::None;
        }
        match &self.offset {
            OffsetModel::ActiveSlot => {
                Offset::ActiveSlot(page.saturating_mul(visible).min(slot_count - 1))
            }
            OffsetModel::Window(measure) => {
                Offset::Translate(strip_offset(page, visible, &measure()))
            }
        }
    }

    /// Total slots in the cycle.
    pub fn len(&self) -> usize {
        self.with_core(|core| core.slot_count()).unwrap_or(0)
    }

    /// Whether the carousel has no slots at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pages at the current window size.
    pub fn page_count(&self) -> usize {
        self.with_core(|core| core.page_count()).unwrap_or(0)
    }

    /// Slots exposed per page.
    pub fn visible(&self) -> usize {
        self.with_core(|core| core.visible()).unwrap_or(1)
    }

    /// First slot of the current page.
    pub fn current_index(&self) -> usize {
        self.with_core(|core| core.current_index()).unwrap_or(0)
    }

    /// The slots the current page exposes.
    pub fn window(&self) -> std::ops::Range<usize> {
        self.with_core(|core| window_range(core.page(), core.visible(), core.slot_count()))
            .unwrap_or(0..0)
    }

    /// Whether `slot` is on the current page. Views highlight active slots
    /// and dots from this.
    pub fn is_active(&self, slot: usize) -> bool {
        self.window().contains(&slot)
    }

    /// Lifecycle phase derived from content and eligibility.
    pub fn phase(&self) -> crate::types::Phase {
        self.with_core(|core| core.phase())
            .unwrap_or(crate::types::Phase::Inert)
    }

    /// Whether the hover hold is engaged.
    pub fn paused(&self) -> bool {
        self.with_core(|core| core.paused()).unwrap_or(false)
    }

    /// Whether a cadence loop is currently live.
    pub fn is_rotating(&self) -> bool {
        self.ticker.borrow().is_armed()
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        self.ticker.borrow_mut().disarm();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Phase;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::thread;
    use std::time::Instant;

    fn manual(slot_count: usize) -> Carousel {
        Carousel::new(CarouselOptions {
            slot_count,
            interval: None,
            ..Default::default()
        })
    }

    fn wait_until(mut cond: impl FnMut() -> bool, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if cond() {
                return true;
            }
            thread::sleep(Duration::from_millis(5));
        }
        cond()
    }

    #[test]
    fn test_slide_show_starts_rotating() {
        let hero = Carousel::slide_show(5);
        assert_eq!(hero.phase(), Phase::Rotating);
        assert_eq!(hero.page(), 0);
        assert_eq!(hero.page_count(), 5);
        assert_eq!(hero.offset(), Offset::ActiveSlot(0));
        assert!(hero.is_rotating());
        hero.stop();
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let empty = Carousel::slide_show(0);
        assert_eq!(empty.phase(), Phase::Inert);
        assert_eq!(empty.offset(), Offset::None);
        assert!(!empty.is_rotating());

        empty.next();
        empty.prev();
        empty.go_to(3);
        assert_eq!(empty.page(), 0);
    }

    #[test]
    fn test_single_slot_is_static() {
        let single = Carousel::slide_show(1);
        assert_eq!(single.phase(), Phase::Static);
        assert!(!single.is_rotating());
        assert_eq!(single.offset(), Offset::ActiveSlot(0));

        single.next();
        assert_eq!(single.page(), 0);
    }

    #[test]
    fn test_manual_navigation() {
        let cards = manual(5);
        cards.next();
        cards.next();
        assert_eq!(cards.page(), 2);
        cards.prev();
        assert_eq!(cards.page(), 1);
        cards.go_to(4);
        assert_eq!(cards.page(), 4);
        cards.next();
        assert_eq!(cards.page(), 0); // wrapped
        cards.go_to(99);
        assert_eq!(cards.page(), 4); // clamped
    }

    #[test]
    fn test_active_window_tracks_page() {
        let deck = Carousel::new(CarouselOptions {
            slot_count: 7,
            interval: None,
            window: Box::new(|| 4),
            ..Default::default()
        });
        assert_eq!(deck.window(), 0..4);
        assert!(deck.is_active(0));
        assert!(!deck.is_active(4));

        deck.next();
        // The final page holds only three slots.
        assert_eq!(deck.window(), 4..7);
        assert!(deck.is_active(6));
        assert!(!deck.is_active(3));
        assert!(!deck.is_active(7));
    }

    #[test]
    fn test_page_signal_mirrors_navigation() {
        let cards = manual(5);
        let page = cards.page_signal();
        assert_eq!(page.get(), 0);
        cards.next();
        assert_eq!(page.get(), 1);
        cards.go_to(3);
        assert_eq!(page.get(), 3);
    }

    #[test]
    fn test_offset_models() {
        let m = Measurements::new(296.0, 16.0, 1280.0, 32.0);
        let wide = Carousel::new(CarouselOptions {
            slot_count: 8,
            interval: None,
            window: Box::new(|| 4),
            offset: OffsetModel::Window(Box::new(move || m)),
        });
        assert_eq!(wide.offset(), Offset::Translate(0.0));
        wide.next();
        assert_eq!(wide.offset(), Offset::Translate(-1184.0));

        let narrow_m = Measurements::new(296.0, 16.0, 375.0, 32.0);
        let narrow = Carousel::new(CarouselOptions {
            slot_count: 8,
            interval: None,
            window: Box::new(|| 1),
            offset: OffsetModel::Window(Box::new(move || narrow_m)),
        });
        narrow.go_to(2);
        let shim = (375.0 - 296.0) / 2.0 - 32.0;
        assert_eq!(narrow.offset(), Offset::Translate(-624.0 + shim));
    }

    #[test]
    fn test_recompute_resamples_window() {
        let width = Rc::new(Cell::new(4usize));
        let source = Rc::clone(&width);
        let cards = Carousel::new(CarouselOptions {
            slot_count: 8,
            interval: None,
            window: Box::new(move || source.get()),
            ..Default::default()
        });
        assert_eq!(cards.page_count(), 2);
        cards.next();
        assert_eq!(cards.page(), 1);

        width.set(2);
        cards.recompute_layout();
        assert_eq!(cards.page(), 0);
        assert_eq!(cards.visible(), 2);
        assert_eq!(cards.page_count(), 4);
    }

    #[test]
    fn test_pause_holds_resume_releases() {
        let hero = Carousel::new(CarouselOptions {
            slot_count: 5,
            interval: Some(Duration::from_millis(25)),
            ..Default::default()
        });
        hero.pause();
        assert!(hero.paused());
        assert!(!hero.is_rotating());

        thread::sleep(Duration::from_millis(80));
        assert_eq!(hero.page(), 0);

        hero.resume();
        assert!(wait_until(|| hero.page() >= 1, Duration::from_millis(500)));
        hero.stop();
    }

    #[test]
    fn test_navigation_restarts_cadence() {
        let hero = Carousel::new(CarouselOptions {
            slot_count: 5,
            interval: Some(Duration::from_millis(80)),
            ..Default::default()
        });
        thread::sleep(Duration::from_millis(50));
        hero.go_to(2);
        // The original fire (due at 80ms) was fenced out; the fresh one is
        // a full interval away, so shortly after the jump nothing moved.
        thread::sleep(Duration::from_millis(50));
        assert_eq!(hero.page(), 2);

        assert!(wait_until(|| hero.page() == 3, Duration::from_millis(500)));
        hero.stop();
    }

    #[test]
    fn test_stop_freezes() {
        let hero = Carousel::new(CarouselOptions {
            slot_count: 5,
            interval: Some(Duration::from_millis(25)),
            ..Default::default()
        });
        hero.stop();
        thread::sleep(Duration::from_millis(80));
        assert_eq!(hero.page(), 0);
        assert!(!hero.is_rotating());
    }

    #[test]
    fn test_recompute_disarms_when_window_covers_all() {
        let width = Rc::new(Cell::new(1usize));
        let source = Rc::clone(&width);
        let cards = Carousel::new(CarouselOptions {
            slot_count: 3,
            interval: Some(Duration::from_millis(25)),
            window: Box::new(move || source.get()),
            ..Default::default()
        });
        assert!(cards.is_rotating());

        width.set(4);
        cards.recompute_layout();
        assert_eq!(cards.phase(), Phase::Static);
        assert!(!cards.is_rotating());

        width.set(1);
        cards.recompute_layout();
        assert_eq!(cards.phase(), Phase::Rotating);
        assert!(wait_until(|| cards.page() >= 1, Duration::from_millis(500)));
        cards.stop();
    }
}
