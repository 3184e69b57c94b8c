//! Input Module - Event conversion and polling
//!
//! Bridges crossterm's event system with the control layer. Terminal
//! events collapse into the handful of intents a carousel understands:
//! page navigation, pointer position, a press, a resize or quit.
//!
//! # API
//!
//! - `convert_key_event` - Convert crossterm KeyEvent to a ControlEvent
//! - `convert_mouse_event` - Convert crossterm MouseEvent to a ControlEvent
//! - `poll_control` - Non-blocking event check with timeout
//! - `read_control` - Blocking event read
//! - `route_control` - Dispatch an event to the bound controls
//! - `enable_mouse` / `disable_mouse` - Control mouse capture
//!
//! # Example
//!
//! ```ignore
//! use carousel::state::input::{poll_control, route_control, ControlEvent};
//! use std::time::Duration;
//!
//! loop {
//!     if let Ok(Some(event)) = poll_control(Duration::from_millis(16)) {
//!         if event == ControlEvent::Quit {
//!             break;
//!         }
//!         route_control(event);
//!     }
//! }
//! ```

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent,
    KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers,
    MouseButton as CrosstermMouseButton, MouseEvent as CrosstermMouseEvent, MouseEventKind,
    poll, read,
};
use crossterm::execute;
use std::io::stdout;
use std::time::Duration;

// =============================================================================
// CONTROL EVENT ENUM
// =============================================================================

/// The intents a carousel's controls understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// Step forward one page.
    NextPage,
    /// Step back one page.
    PrevPage,
    /// Jump to a specific page (dot press, digit key).
    SelectPage(usize),
    /// Pointer moved to this cell (hover tracking).
    PointerMoved(u16, u16),
    /// Primary button pressed at this cell.
    PointerPressed(u16, u16),
    /// Terminal resized (new width, height).
    Resized(u16, u16),
    /// User asked to leave.
    Quit,
    /// No event or unhandled event type.
    None,
}

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert a crossterm KeyEvent to a ControlEvent.
///
/// Arrows page, digits jump (1 is the first page), `q`, Escape and Ctrl+C
/// quit. Key releases are ignored.
pub fn convert_key_event(event: CrosstermKeyEvent) -> ControlEvent {
    if event.kind == KeyEventKind::Release {
        return ControlEvent::None;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return ControlEvent::Quit;
    }

    match event.code {
        KeyCode::Right => ControlEvent::NextPage,
        KeyCode::Left => ControlEvent::PrevPage,
        KeyCode::Esc => ControlEvent::Quit,
        KeyCode::Char('q') => ControlEvent::Quit,
        KeyCode::Char(c) => match c.to_digit(10) {
            Some(digit) if digit >= 1 => ControlEvent::SelectPage(digit as usize - 1),
            _ => ControlEvent::None,
        },
        _ => ControlEvent::None,
    }
}

// =============================================================================
// MOUSE EVENT CONVERSION
// =============================================================================

/// Convert a crossterm MouseEvent to a ControlEvent.
///
/// Movement and drags report position for hover tracking, a left press
/// reports its cell for hit testing, and the scroll wheel pages.
pub fn convert_mouse_event(event: CrosstermMouseEvent) -> ControlEvent {
    match event.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            ControlEvent::PointerMoved(event.column, event.row)
        }
        MouseEventKind::Down(CrosstermMouseButton::Left) => {
            ControlEvent::PointerPressed(event.column, event.row)
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => ControlEvent::NextPage,
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => ControlEvent::PrevPage,
        _ => ControlEvent::None,
    }
}

/// Convert any crossterm event.
pub fn convert_event(event: CrosstermEvent) -> ControlEvent {
    match event {
        CrosstermEvent::Key(key) => convert_key_event(key),
        CrosstermEvent::Mouse(mouse) => convert_mouse_event(mouse),
        CrosstermEvent::Resize(w, h) => ControlEvent::Resized(w, h),
        _ => ControlEvent::None,
    }
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for an event with timeout.
/// Returns None if no event within timeout.
pub fn poll_control(timeout: Duration) -> std::io::Result<Option<ControlEvent>> {
    if poll(timeout)? {
        Ok(Some(read_control()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_control() -> std::io::Result<ControlEvent> {
    Ok(convert_event(read()?))
}

// =============================================================================
// EVENT ROUTING
// =============================================================================

/// Route an event to the bound controls.
/// Returns true if any binding consumed the event.
pub fn route_control(event: ControlEvent) -> bool {
    super::controls::dispatch(event)
}

// =============================================================================
// MOUSE CAPTURE
// =============================================================================

/// Enable mouse capture.
pub fn enable_mouse() -> std::io::Result<()> {
    execute!(stdout(), EnableMouseCapture)
}

/// Disable mouse capture.
pub fn disable_mouse() -> std::io::Result<()> {
    execute!(stdout(), DisableMouseCapture)
}

// =============================================================================
// TESTS
// =============================================================================
