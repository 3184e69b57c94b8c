//! Ticker - Auto-advance cadence thread
//!
//! One background loop per armed carousel. The loop sleeps a full interval,
//! then delivers a fire to the engine core under its lock. Two independent
//! stops keep every path race-free:
//!
//! - A shared `running` flag, flipped by `disarm` and checked after each
//!   sleep. Flipping it never blocks; the thread exits on its next wake.
//! - The epoch captured when the loop was armed. The core rejects a fire
//!   whose epoch is stale, and the loop exits the moment that happens, so
//!   a fire racing a user action can never move the page twice.
//!
//! Loops are never joined. A disarmed thread finishes its sleep, sees the
//! flag down and returns.
//!
//! # API
//!
//! - `Ticker::arm` - Start the cadence for the core's current epoch
//! - `Ticker::disarm` - Flag the loop down
//! - `Ticker::is_armed` - Whether a cadence loop is live

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use super::core::EngineCore;

// =============================================================================
// TICKER
// =============================================================================

/// Handle to at most one live cadence loop.
#[derive(Debug, Default)]
pub struct Ticker {
    /// Stop flag shared with the current loop, if one was armed.
    running: Option<Arc<AtomicBool>>,
}

impl Ticker {
    /// Create a ticker with no loop armed.
    pub fn new() -> Self {
        Self { running: None }
    }

    /// Arm the cadence for the engine's current epoch.
    ///
    /// Any previous loop is flagged down first. Nothing is spawned when the
    /// core is paused, has no cadence configured or has a single page; the
    /// caller re-arms after whatever operation changes that.
    pub fn arm(&mut self, core: &Arc<Mutex<EngineCore>>) {
        self.disarm();

        let Ok(guard) = core.lock() else {
            return;
        };
        if guard.paused() || !guard.can_rotate() {
            return;
        }
        let Some(interval) = guard.interval() else {
            return;
        };
        let epoch = guard.epoch();
        drop(guard);

        let running = Arc::new(AtomicBool::new(true));
        self.running = Some(Arc::clone(&running));
        let core = Arc::clone(core);

        thread::spawn(move || {
            loop {
                thread::sleep(interval);
                if !running.load(Ordering::SeqCst) {
                    break;
                }
                let Ok(mut guard) = core.lock() else {
                    break;
                };
                // Stale epoch, pause or lost eligibility all end the loop.
                if !guard.auto_tick(epoch) {
                    break;
                }
            }
            running.store(false, Ordering::SeqCst);
        });
    }

    /// Flag the current loop down. The thread exits on its next wake; no
    /// join, so this never blocks the caller.
    pub fn disarm(&mut self) {
        if let Some(running) = self.running.take() {
            running.store(false, Ordering::SeqCst);
        }
    }

    /// Whether an armed loop is still live.
    pub fn is_armed(&self) -> bool {
        self.running
            .as_ref()
            .is_some_and(|running| running.load(Ordering::SeqCst))
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.disarm();
    }
}

// =============================================================================
// TESTS
// =============================================================================
