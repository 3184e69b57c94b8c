//! Core types for carousel.
//!
//! These types define the contract between the rotation engine, the layout
//! math and whatever view layer renders the result: which lifecycle state an
//! engine is in, and what the view has to draw for the current position.

// =============================================================================
// Phase
// =============================================================================

/// Lifecycle state of a rotation engine.
///
/// Derived from the slot count, the sampled visible window and the
/// auto-advance configuration. `Inert` is terminal for the lifetime of an
/// instance; `Static` and `Rotating` can swap only through
/// `recompute_layout()` when the window size crosses the slot count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No slots at all. Every operation is a no-op and no ticker ever starts.
    Inert,
    /// Content exists but auto-advance is not eligible: either no interval is
    /// configured, or everything already fits in one window.
    Static,
    /// More content than fits one window and an interval is configured.
    /// The ticker is armed unless the engine is paused.
    Rotating,
}

impl Phase {
    /// Check whether this phase allows an auto-advance ticker.
    #[inline]
    pub const fn can_rotate(&self) -> bool {
        matches!(self, Phase::Rotating)
    }

    /// Check whether the engine holds any content.
    #[inline]
    pub const fn has_content(&self) -> bool {
        !matches!(self, Phase::Inert)
    }
}

// =============================================================================
// Offset
// =============================================================================

/// What the view layer renders for the current engine position.
///
/// Slide shows (window of 1) toggle per-slot visibility, so they get the
/// active slot index. Windowed carousels translate a slot strip, so they get
/// a linear offset in whatever measurement units the caller supplied.
/// An empty engine yields `None`, a defined sentinel rather than an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    /// No content. Render nothing.
    None,
    /// Active slot index for single-slot slide shows.
    ActiveSlot(usize),
    /// Linear strip offset for windowed carousels, in caller units.
    /// Grows negative as later pages come into view.
    Translate(f32),
}

impl Offset {
    /// Check whether there is anything to render.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Offset::None)
    }

    /// The active slot, if this is a slide-show offset.
    #[inline]
    pub const fn active_slot(&self) -> Option<usize> {
        match self {
            Offset::ActiveSlot(slot) => Some(*slot),
            _ => None,
        }
    }

    /// The translation distance, if this is a windowed offset.
    #[inline]
    pub const fn translation(&self) -> Option<f32> {
        match self {
            Offset::Translate(units) => Some(*units),
            _ => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_can_rotate() {
        assert!(!Phase::Inert.can_rotate());
        assert!(!Phase::Static.can_rotate());
        assert!(Phase::Rotating.can_rotate());
    }

    #[test]
    fn test_phase_has_content() {
        assert!(!Phase::Inert.has_content());
        assert!(Phase::Static.has_content());
        assert!(Phase::Rotating.has_content());
    }

    #[test]
    fn test_offset_accessors() {
        assert!(Offset::None.is_none());
        assert_eq!(Offset::None.active_slot(), None);
        assert_eq!(Offset::None.translation(), None);

        let slide = Offset::ActiveSlot(3);
        assert!(!slide.is_none());
        assert_eq!(slide.active_slot(), Some(3));
        assert_eq!(slide.translation(), None);

        let strip = Offset::Translate(-312.0);
        assert!(!strip.is_none());
        assert_eq!(strip.active_slot(), None);
        assert_eq!(strip.translation(), Some(-312.0));
    }
}
