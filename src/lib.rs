//! # carousel
//!
//! Reactive carousel and rotation engine for terminal UIs.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! A carousel is a circular pager: N slots, a visible window of V slots,
//! pages of ceil(N / V). The engine core is plain data behind a lock. A
//! cadence thread sleeps one interval at a time and fires epoch-fenced
//! advances into the core; any user action bumps the epoch, so a fire that
//! raced it is rejected instead of double-stepping. The owner-thread handle
//! mirrors the current page into a signal for deriveds and effects.
//!
//! ```text
//! terminal events → controls dispatch → Carousel handle → EngineCore
//!                                                    ↑
//!                                     auto_tick (cadence thread)
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (Phase, Offset)
//! - [`layout`] - Page arithmetic, breakpoints, strip offsets
//! - [`engine`] - Engine core, cadence ticker, Carousel handle
//! - [`probe`] - Slot image discovery with format fallback
//! - [`debounce`] - Trailing-edge debouncer for bursty events
//! - [`state`] - Input bridge and control bindings

pub mod debounce;
pub mod engine;
pub mod layout;
pub mod probe;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use engine::{
    Carousel, CarouselOptions, DEFAULT_AUTO_ADVANCE, EngineCore, OffsetModel, Ticker,
};

pub use layout::{
    Breakpoints, Measurements, centered_offset, page_count, paged_offset, strip_offset,
    window_range,
};

pub use probe::{IMAGE_FORMATS, SlotImage, probe_numbered, probe_slots, resolve_image};

pub use debounce::Debouncer;

pub use state::{
    // Input
    ControlEvent, convert_event, convert_key_event, convert_mouse_event, disable_mouse,
    enable_mouse, poll_control, read_control, route_control,
    // Controls
    ControlHandlers, ControlRegions, RESIZE_SETTLE, Rect, bind,
    cleanup as cleanup_controls, dispatch as dispatch_control, hovered_binding, poll_layout,
    pointer_x, pointer_y, reset_control_state, set_regions, set_resize_settle,
};
