//! Controls Module - Control state and binding registry
//!
//! Rect-based hit regions and a handler registry binding screen areas to
//! carousel intents. Does NOT own stdin (that is the input module).
//!
//! A binding covers one carousel on screen: its container (hover in and
//! out of it drives pause/resume), optional prev/next regions and one
//! region per dot. Pointer events hit test against the regions; key and
//! scroll intents route to the hovered binding, falling back to the first
//! one bound. Resize events are debounced here, so a drag storm collapses
//! into one relayout per binding after the terminal settles.
//!
//! # API
//!
//! - `bind(regions, handlers)` - Register a carousel's controls
//! - `set_regions` - Replace a binding's regions after relayout
//! - `dispatch(event)` - Route a control event
//! - `poll_layout` - Run the debounced relayout when due
//! - `hovered_binding` / `pointer_x` / `pointer_y` - Reactive state
//! - `cleanup` / `reset_control_state` - Teardown
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use carousel::state::controls::{self, ControlHandlers, ControlRegions, Rect};
//!
//! let regions = ControlRegions::new(Rect::new(0, 0, 80, 12))
//!     .with_prev(Rect::new(0, 5, 3, 3))
//!     .with_next(Rect::new(77, 5, 3, 3));
//! let (id, cleanup) = controls::bind(regions, ControlHandlers {
//!     on_next: Some(Rc::new(|| { /* carousel.next() */ })),
//!     ..Default::default()
//! });
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use spark_signals::{Signal, signal};

use crate::debounce::Debouncer;

use super::input::ControlEvent;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Quiet period before a resize burst triggers relayout.
pub const RESIZE_SETTLE: Duration = Duration::from_millis(250);

// =============================================================================
// TYPES
// =============================================================================

/// A screen-cell rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    /// Create a rect from its top-left corner and size.
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the cell at (x, y) falls inside this rect.
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.height
    }
}

/// Hit regions for one carousel on screen.
#[derive(Debug, Clone, Default)]
pub struct ControlRegions {
    /// The whole carousel area. Hover in and out of it fires enter/leave.
    pub container: Rect,
    /// Previous-page button, if the carousel shows one.
    pub prev: Option<Rect>,
    /// Next-page button, if the carousel shows one.
    pub next: Option<Rect>,
    /// One region per page dot, in page order.
    pub dots: Vec<Rect>,
}

impl ControlRegions {
    /// Regions with just a container.
    pub fn new(container: Rect) -> Self {
        Self {
            container,
            ..Default::default()
        }
    }

    /// Add a previous-page region.
    pub fn with_prev(mut self, rect: Rect) -> Self {
        self.prev = Some(rect);
        self
    }

    /// Add a next-page region.
    pub fn with_next(mut self, rect: Rect) -> Self {
        self.next = Some(rect);
        self
    }

    /// Add dot regions, one per page.
    pub fn with_dots(mut self, dots: Vec<Rect>) -> Self {
        self.dots = dots;
        self
    }
}

// =============================================================================
// HANDLER TYPES
// =============================================================================

/// Handlers for one binding.
///
/// Uses Rc<dyn Fn> so the same carousel handle can back several handlers
/// (pause on enter, resume on leave, navigation on the buttons).
#[derive(Default)]
pub struct ControlHandlers {
    pub on_next: Option<Rc<dyn Fn()>>,
    pub on_prev: Option<Rc<dyn Fn()>>,
    pub on_select: Option<Rc<dyn Fn(usize)>>,
    pub on_pointer_enter: Option<Rc<dyn Fn()>>,
    pub on_pointer_leave: Option<Rc<dyn Fn()>>,
    pub on_layout: Option<Rc<dyn Fn(u16, u16)>>,
}

// =============================================================================
// BINDING REGISTRY
// =============================================================================

struct Binding {
    regions: ControlRegions,
    handlers: ControlHandlers,
}

struct ControlRegistry {
    /// Bindings in bind order; hit tests probe them front to back.
    bindings: Vec<(usize, Binding)>,
    next_id: usize,
}

impl ControlRegistry {
    fn new() -> Self {
        Self {
            bindings: Vec::new(),
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

thread_local! {
    static REGISTRY: RefCell<ControlRegistry> = RefCell::new(ControlRegistry::new());
}

// =============================================================================
// REACTIVE STATE
// =============================================================================

thread_local! {
    static POINTER_X: Signal<u16> = signal(0);
    static POINTER_Y: Signal<u16> = signal(0);
    static HOVERED: Signal<Option<usize>> = signal(None);
}

/// Current pointer column.
pub fn pointer_x() -> u16 {
    POINTER_X.with(|s| s.get())
}

/// Current pointer row.
pub fn pointer_y() -> u16 {
    POINTER_Y.with(|s| s.get())
}

/// The binding currently under the pointer.
pub fn hovered_binding() -> Option<usize> {
    HOVERED.with(|s| s.get())
}

// =============================================================================
// RESIZE DEBOUNCE
// =============================================================================

thread_local! {
    static PENDING_RESIZE: Cell<Option<(u16, u16)>> = const { Cell::new(None) };
    static RESIZE: RefCell<Debouncer> = RefCell::new(Debouncer::new(RESIZE_SETTLE, flush_resize));
}

fn flush_resize() {
    let Some((width, height)) = PENDING_RESIZE.with(Cell::take) else {
        return;
    };
    // Collect handlers first so a relayout callback can touch the registry.
    let handlers: Vec<Rc<dyn Fn(u16, u16)>> = REGISTRY.with(|reg| {
        reg.borrow()
            .bindings
            .iter()
            .filter_map(|(_, binding)| binding.handlers.on_layout.clone())
            .collect()
    });
    for handler in handlers {
        handler(width, height);
    }
}

/// Run the debounced relayout if the resize burst has settled.
/// Call every iteration of the owner loop. Returns true when it fired.
pub fn poll_layout() -> bool {
    RESIZE.with(|d| d.borrow_mut().poll())
}

/// Replace the resize quiet period. Pending deadlines are dropped.
pub fn set_resize_settle(delay: Duration) {
    PENDING_RESIZE.with(|c| c.set(None));
    RESIZE.with(|d| *d.borrow_mut() = Debouncer::new(delay, flush_resize));
}

// =============================================================================
// PUBLIC API - REGISTRATION
// =============================================================================

/// Register a carousel's controls. Returns the binding id and a cleanup
/// function that removes the binding.
pub fn bind(regions: ControlRegions, handlers: ControlHandlers) -> (usize, impl FnOnce()) {
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.bindings.push((id, Binding { regions, handlers }));
        id
    });

    (id, move || {
        REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            reg.bindings.retain(|(binding_id, _)| *binding_id != id);
        });
        if hovered_binding() == Some(id) {
            HOVERED.with(|s| s.set(None));
        }
    })
}

/// Replace a binding's hit regions, typically after relayout moved or
/// re-counted its controls.
pub fn set_regions(id: usize, regions: ControlRegions) {
    REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        if let Some((_, binding)) = reg.bindings.iter_mut().find(|(b, _)| *b == id) {
            binding.regions = regions;
        }
    });
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Route a control event to the bound carousels.
/// Returns true if any binding consumed the event.
pub fn dispatch(event: ControlEvent) -> bool {
    match event {
        ControlEvent::PointerMoved(x, y) => dispatch_move(x, y),
        ControlEvent::PointerPressed(x, y) => dispatch_press(x, y),
        ControlEvent::NextPage => dispatch_intent(Intent::Next),
        ControlEvent::PrevPage => dispatch_intent(Intent::Prev),
        ControlEvent::SelectPage(page) => dispatch_intent(Intent::Select(page)),
        ControlEvent::Resized(width, height) => {
            PENDING_RESIZE.with(|c| c.set(Some((width, height))));
            RESIZE.with(|d| d.borrow_mut().call());
            true
        }
        ControlEvent::Quit | ControlEvent::None => false,
    }
}

enum Intent {
    Next,
    Prev,
    Select(usize),
}

fn binding_at(x: u16, y: u16) -> Option<usize> {
    REGISTRY.with(|reg| {
        reg.borrow()
            .bindings
            .iter()
            .find(|(_, binding)| binding.regions.container.contains(x, y))
            .map(|(id, _)| *id)
    })
}

fn enter_leave_handlers(id: usize) -> (Option<Rc<dyn Fn()>>, Option<Rc<dyn Fn()>>) {
    REGISTRY.with(|reg| {
        let reg = reg.borrow();
        reg.bindings
            .iter()
            .find(|(binding_id, _)| *binding_id == id)
            .map(|(_, binding)| {
                (
                    binding.handlers.on_pointer_enter.clone(),
                    binding.handlers.on_pointer_leave.clone(),
                )
            })
            .unwrap_or((None, None))
    })
}

fn dispatch_move(x: u16, y: u16) -> bool {
    POINTER_X.with(|s| s.set(x));
    POINTER_Y.with(|s| s.set(y));

    let hit = binding_at(x, y);
    let prev = hovered_binding();
    if hit != prev {
        // Fire leave on the old binding, enter on the new, outside the
        // registry borrow so handlers may rebind.
        if let Some(prev_id) = prev {
            let (_, on_leave) = enter_leave_handlers(prev_id);
            if let Some(on_leave) = on_leave {
                on_leave();
            }
        }
        if let Some(id) = hit {
            let (on_enter, _) = enter_leave_handlers(id);
            if let Some(on_enter) = on_enter {
                on_enter();
            }
        }
        HOVERED.with(|s| s.set(hit));
    }
    hit.is_some()
}

enum Press {
    Prev(Rc<dyn Fn()>),
    Next(Rc<dyn Fn()>),
    Select(Rc<dyn Fn(usize)>, usize),
}

fn dispatch_press(x: u16, y: u16) -> bool {
    let press = REGISTRY.with(|reg| {
        let reg = reg.borrow();
        for (_, binding) in &reg.bindings {
            let regions = &binding.regions;
            let handlers = &binding.handlers;
            if regions.prev.is_some_and(|r| r.contains(x, y)) {
                return handlers.on_prev.clone().map(Press::Prev);
            }
            if regions.next.is_some_and(|r| r.contains(x, y)) {
                return handlers.on_next.clone().map(Press::Next);
            }
            for (page, dot) in regions.dots.iter().enumerate() {
                if dot.contains(x, y) {
                    return handlers
                        .on_select
                        .clone()
                        .map(|handler| Press::Select(handler, page));
                }
            }
        }
        None
    });

    match press {
        Some(Press::Prev(handler)) => {
            handler();
            true
        }
        Some(Press::Next(handler)) => {
            handler();
            true
        }
        Some(Press::Select(handler, page)) => {
            handler(page);
            true
        }
        None => false,
    }
}

fn dispatch_intent(intent: Intent) -> bool {
    // Hovered binding first, otherwise the first one bound.
    let target = hovered_binding().or_else(|| {
        REGISTRY.with(|reg| reg.borrow().bindings.first().map(|(id, _)| *id))
    });
    let Some(target) = target else {
        return false;
    };

    let handler = REGISTRY.with(|reg| {
        let reg = reg.borrow();
        let binding = reg
            .bindings
            .iter()
            .find(|(id, _)| *id == target)
            .map(|(_, binding)| binding)?;
        match intent {
            Intent::Next => binding.handlers.on_next.clone().map(Press::Next),
            Intent::Prev => binding.handlers.on_prev.clone().map(Press::Prev),
            Intent::Select(page) => binding
                .handlers
                .on_select
                .clone()
                .map(|handler| Press::Select(handler, page)),
        }
    });

    match handler {
        Some(Press::Next(handler)) | Some(Press::Prev(handler)) => {
            handler();
            true
        }
        Some(Press::Select(handler, page)) => {
            handler(page);
            true
        }
        None => false,
    }
}

// =============================================================================
// CLEANUP
// =============================================================================

/// Clear all bindings and pointer state.
pub fn cleanup() {
    REGISTRY.with(|reg| reg.borrow_mut().bindings.clear());
    POINTER_X.with(|s| s.set(0));
    POINTER_Y.with(|s| s.set(0));
    HOVERED.with(|s| s.set(None));
    PENDING_RESIZE.with(|c| c.set(None));
    RESIZE.with(|d| d.borrow_mut().cancel());
}

/// Reset control state (for testing)
pub fn reset_control_state() {
    cleanup();
    REGISTRY.with(|reg| reg.borrow_mut().next_id = 0);
    set_resize_settle(RESIZE_SETTLE);
}

// =============================================================================
// TESTS
// =============================================================================
