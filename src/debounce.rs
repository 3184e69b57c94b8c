//! Debounce - Trailing-edge delay for bursty events
//!
//! Viewport resizes arrive in bursts, one per frame while the user drags.
//! Relayout on every one would thrash, so the action runs once, a fixed
//! delay after the burst goes quiet. Each `call` pushes the deadline out;
//! `poll` fires the action when a deadline has passed. Polling happens on
//! the owner thread (the same loop that reads input events), so the action
//! may hold `Rc` handles without any thread hop.
//!
//! # API
//!
//! - `Debouncer::new` - Wrap an action with a quiet-period delay
//! - `call` - Record an event, pushing the deadline out
//! - `poll` - Run the action once the quiet period has elapsed
//! - `cancel` / `is_pending` - Drop or inspect a pending deadline
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use carousel::debounce::Debouncer;
//!
//! let mut relayout = Debouncer::new(Duration::from_millis(250), || {
//!     // re-measure and recompute here
//! });
//! relayout.call();       // resize event
//! relayout.call();       // another one, deadline pushed out
//!
//! // inside the owner loop, once per iteration:
//! relayout.poll();       // fires once, 250ms after the last call
//! ```

use std::time::{Duration, Instant};

// =============================================================================
// DEBOUNCER
// =============================================================================

/// Trailing-edge debouncer around a boxed action.
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
    action: Box<dyn FnMut()>,
}

impl Debouncer {
    /// Wrap `action` so it runs `delay` after the last `call`.
    pub fn new(delay: Duration, action: impl FnMut() + 'static) -> Self {
        Self {
            delay,
            deadline: None,
            action: Box::new(action),
        }
    }

    /// Record an event. The pending deadline, if any, moves out to a full
    /// delay from now.
    pub fn call(&mut self) {
        self.deadline = Some(Instant::now() + self.delay);
    }

    /// Run the action if the quiet period has elapsed. Returns whether the
    /// action ran. Call this every iteration of the owner loop.
    pub fn poll(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                (self.action)();
                true
            }
            _ => false,
        }
    }

    /// Drop the pending deadline without running the action.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a call is waiting for its quiet period.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The configured quiet period.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

// =============================================================================
// TESTS
// =============================================================================
