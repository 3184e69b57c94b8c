//! Layout Module - Visible-window sizing and strip offsets
//!
//! Pure arithmetic shared by every carousel: how many slots fit one view,
//! how slots group into pages, and where the slot strip sits for a given
//! page. Nothing here owns state - measurements and viewport width are
//! supplied by the caller, typically re-sampled on each layout pass.
//!
//! # API
//!
//! - `page_count` - Pages needed for N slots at window size V
//! - `window_range` - Which slots a page exposes
//! - `Breakpoints` - Viewport width to window-size policy
//! - `Measurements` + `strip_offset` - Translation of the slot strip

// =============================================================================
// PAGE ARITHMETIC
// =============================================================================

/// Number of pages needed to show `slot_count` slots, `visible` at a time.
///
/// Zero slots means zero pages. A window larger than the content still
/// yields one page. `visible` is clamped to at least 1.
pub fn page_count(slot_count: usize, visible: usize) -> usize {
    if slot_count == 0 {
        return 0;
    }
    let visible = visible.max(1);
    slot_count.div_ceil(visible)
}

/// The slots exposed by `page` at window size `visible`.
///
/// The final page may expose fewer than `visible` slots; the range never
/// reaches past the last slot. Out-of-range pages yield an empty range.
pub fn window_range(page: usize, visible: usize, slot_count: usize) -> std::ops::Range<usize> {
    let visible = visible.max(1);
    let start = page.saturating_mul(visible).min(slot_count);
    let end = start.saturating_add(visible).min(slot_count);
    start..end
}

// =============================================================================
// BREAKPOINTS
// =============================================================================

/// Viewport-width policy for the visible-window size.
///
/// An ascending table of `(max_width, visible)` steps plus a default for
/// anything wider. Mirrors the usual "1 on narrow, 2 on medium, 4 on wide"
/// card-carousel policy:
///
/// ```ignore
/// use carousel::layout::Breakpoints;
///
/// let policy = Breakpoints::new(4).up_to(768, 1).up_to(1024, 2);
/// assert_eq!(policy.window_for(600), 1);
/// assert_eq!(policy.window_for(1024), 2);
/// assert_eq!(policy.window_for(1440), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Breakpoints {
    /// Ascending (max_width, visible) steps.
    steps: Vec<(u16, usize)>,
    /// Window size for widths above every step.
    default_visible: usize,
}

impl Breakpoints {
    /// Create a policy that always yields `default_visible` (clamped to 1).
    pub fn new(default_visible: usize) -> Self {
        Self {
            steps: Vec::new(),
            default_visible: default_visible.max(1),
        }
    }

    /// Add a step: widths up to and including `max_width` get `visible`.
    ///
    /// Re-adding the same `max_width` replaces the earlier step.
    pub fn up_to(mut self, max_width: u16, visible: usize) -> Self {
        let visible = visible.max(1);
        if let Some(step) = self.steps.iter_mut().find(|(w, _)| *w == max_width) {
            step.1 = visible;
        } else {
            self.steps.push((max_width, visible));
            self.steps.sort_by_key(|(w, _)| *w);
        }
        self
    }

    /// Window size for the given viewport width.
    pub fn window_for(&self, width: u16) -> usize {
        for &(max_width, visible) in &self.steps {
            if width <= max_width {
                return visible;
            }
        }
        self.default_visible
    }
}

// =============================================================================
// STRIP OFFSETS
// =============================================================================

/// View-supplied measurements for a windowed carousel, in whatever linear
/// unit the view renders (pixels, terminal columns).
///
/// `item_extent` is the full extent of one slot as the view measures it,
/// inter-slot gap included; `gap` is the bare gap on top of that (the
/// centered form spaces pages by `item_extent + gap`). `container_extent`
/// is the visible viewport of the strip and `edge_padding` the container's
/// leading padding swallowed by the centering shift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub item_extent: f32,
    pub gap: f32,
    pub container_extent: f32,
    pub edge_padding: f32,
}

impl Measurements {
    /// Create a measurement set.
    pub const fn new(item_extent: f32, gap: f32, container_extent: f32, edge_padding: f32) -> Self {
        Self {
            item_extent,
            gap,
            container_extent,
            edge_padding,
        }
    }
}

/// Strip offset for a multi-column window: each page shifts the strip by a
/// full window of slots.
pub fn paged_offset(page: usize, visible: usize, m: &Measurements) -> f32 {
    -(page as f32 * m.item_extent * visible as f32)
}

/// Strip offset for a single-column window: one slot per page, centered in
/// the container with the leading edge padding compensated away.
pub fn centered_offset(page: usize, m: &Measurements) -> f32 {
    -(page as f32 * (m.item_extent + m.gap)) + (m.container_extent - m.item_extent) / 2.0
        - m.edge_padding
}

/// Strip offset for the given page: centered when the window narrows to a
/// single slot, paged otherwise.
pub fn strip_offset(page: usize, visible: usize, m: &Measurements) -> f32 {
    if visible <= 1 {
        centered_offset(page, m)
    } else {
        paged_offset(page, visible, m)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 4), 0);
        assert_eq!(page_count(1, 1), 1);
        assert_eq!(page_count(5, 1), 5);
        assert_eq!(page_count(7, 4), 2);
        assert_eq!(page_count(8, 4), 2);
        assert_eq!(page_count(9, 4), 3);
        assert_eq!(page_count(3, 4), 1); // window wider than content
        assert_eq!(page_count(10, 2), 5);
    }

    #[test]
    fn test_page_count_clamps_window() {
        // A zero window behaves as a window of one.
        assert_eq!(page_count(5, 0), 5);
    }

    #[test]
    fn test_window_range_full_pages() {
        assert_eq!(window_range(0, 4, 8), 0..4);
        assert_eq!(window_range(1, 4, 8), 4..8);
    }

    #[test]
    fn test_window_range_partial_final_page() {
        // 7 slots, 4 per view: second page shows only slots 4..7.
        assert_eq!(window_range(1, 4, 7), 4..7);
        assert_eq!(window_range(1, 4, 7).len(), 3);
    }

    #[test]
    fn test_window_range_out_of_range_is_empty() {
        assert!(window_range(5, 4, 7).is_empty());
        assert!(window_range(0, 4, 0).is_empty());
    }

    #[test]
    fn test_breakpoints_policy() {
        let policy = Breakpoints::new(4).up_to(768, 1).up_to(1024, 2);

        assert_eq!(policy.window_for(320), 1);
        assert_eq!(policy.window_for(768), 1); // boundary inclusive
        assert_eq!(policy.window_for(769), 2);
        assert_eq!(policy.window_for(1024), 2);
        assert_eq!(policy.window_for(1025), 4);
        assert_eq!(policy.window_for(1920), 4);
    }

    #[test]
    fn test_breakpoints_insertion_order_irrelevant() {
        let policy = Breakpoints::new(3).up_to(1024, 2).up_to(768, 1);
        assert_eq!(policy.window_for(500), 1);
        assert_eq!(policy.window_for(900), 2);
        assert_eq!(policy.window_for(1100), 3);
    }

    #[test]
    fn test_breakpoints_replace_step() {
        let policy = Breakpoints::new(4).up_to(768, 1).up_to(768, 2);
        assert_eq!(policy.window_for(700), 2);
    }

    #[test]
    fn test_breakpoints_clamp_to_one() {
        let policy = Breakpoints::new(0).up_to(768, 0);
        assert_eq!(policy.window_for(100), 1);
        assert_eq!(policy.window_for(2000), 1);
    }

    #[test]
    fn test_paged_offset() {
        // 296-unit cards (gap folded in), 4 per view.
        let m = Measurements::new(296.0, 16.0, 1280.0, 32.0);
        assert_eq!(paged_offset(0, 4, &m), 0.0);
        assert_eq!(paged_offset(1, 4, &m), -1184.0);
        assert_eq!(paged_offset(2, 4, &m), -2368.0);
    }

    #[test]
    fn test_centered_offset() {
        // Narrow container: card centered, leading padding compensated.
        let m = Measurements::new(296.0, 16.0, 375.0, 32.0);
        let shim = (375.0 - 296.0) / 2.0 - 32.0; // 7.5
        assert_eq!(centered_offset(0, &m), shim);
        assert_eq!(centered_offset(1, &m), -312.0 + shim);
        assert_eq!(centered_offset(2, &m), -624.0 + shim);
    }

    #[test]
    fn test_strip_offset_selects_form() {
        let m = Measurements::new(296.0, 16.0, 375.0, 32.0);
        assert_eq!(strip_offset(2, 1, &m), centered_offset(2, &m));
        assert_eq!(strip_offset(2, 4, &m), paged_offset(2, 4, &m));
        // Degenerate zero window behaves as one.
        assert_eq!(strip_offset(1, 0, &m), centered_offset(1, &m));
    }
}
