//! Periodic tick source.
//!
//! A thin layer over a hardware compare-match timer. It has no state machine
//! of its own; it is here because it shares the critical-section discipline
//! with the button subsystem: programming the period and unmasking the
//! interrupt are compound register updates that must not interleave with
//! other interrupt arming.

use core::cell::Cell;

use critical_section::Mutex;

use crate::types::{Status, TickCallback};

/// Canonical tick period in milliseconds.
pub const TICK_PERIOD_MS: u32 = 1;

/// Trait for abstracting the periodic hardware timer.
pub trait TickTimer {
    /// Programs the compare-match period.
    fn program(&self, period_ms: u32) -> Status;

    /// Unmasks the compare-match interrupt.
    fn unmask(&self) -> Status;
}

/// Periodic timer interrupt driving a single system-wide tick callback.
///
/// The callback is bound only when the application declares time-dependent
/// behavior; without one the timer still fires and [`handle_tick`] is a
/// no-op.
///
/// [`handle_tick`]: TickSource::handle_tick
pub struct TickSource<T: TickTimer> {
    timer: T,
    tick: Mutex<Cell<Option<TickCallback>>>,
}

impl<T: TickTimer> TickSource<T> {
    /// Creates a tick source with no callback bound.
    pub const fn new(timer: T) -> Self {
        Self {
            timer,
            tick: Mutex::new(Cell::new(None)),
        }
    }

    /// Returns the timer capability.
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Programs the timer for the fixed [`TICK_PERIOD_MS`] period.
    pub fn connect(&self) -> Status {
        critical_section::with(|_cs| self.timer.program(TICK_PERIOD_MS))
    }

    /// Unmasks the timer's compare-match interrupt.
    pub fn enable_interrupts(&self) -> Status {
        critical_section::with(|_cs| self.timer.unmask())
    }

    /// Binds the system tick callback, replacing any previous one.
    pub fn bind(&self, callback: TickCallback) {
        critical_section::with(|cs| self.tick.borrow(cs).set(Some(callback)));
    }

    /// Interrupt-context entry point, invoked on each timer period.
    ///
    /// Runs the bound callback, or nothing when no callback is bound.
    pub fn handle_tick(&self) {
        let callback = critical_section::with(|cs| self.tick.borrow(cs).get());
        if let Some(callback) = callback {
            callback();
        }
    }
}
