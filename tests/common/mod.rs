//! Shared fake hardware for button-events integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::RefCell;

use button_events::{
    EdgeMode, InterruptController, Pin, PinLevel, PinMode, PortControl, Status, TickTimer,
};
use critical_section::Mutex;

/// Highest logical pin number the fakes model.
pub const MAX_PINS: usize = 16;

fn idx(pin: Pin) -> usize {
    let idx = pin.number() as usize;
    assert!(idx < MAX_PINS, "test pin {idx} out of range");
    idx
}

// ============================================================================
// Mock Port
// ============================================================================

struct PortState {
    modes: [Option<PinMode>; MAX_PINS],
    levels: [PinLevel; MAX_PINS],
    /// Per-pin scripted read sequences, consumed before the steady level.
    scripts: [heapless::Deque<PinLevel, 8>; MAX_PINS],
    /// First 16 `configure` calls; later ones only bump the counter.
    configure_log: heapless::Vec<(Pin, PinMode), 16>,
    configure_calls: u32,
    /// First 16 `write` calls; later ones only bump the counter.
    write_log: heapless::Vec<(Pin, PinLevel), 16>,
    write_calls: u32,
}

/// Fake digital I/O port with settable levels and scripted reads.
///
/// Guarded by a `critical_section::Mutex` so it can be shared with a thread
/// standing in for interrupt context.
pub struct MockPort {
    state: Mutex<RefCell<PortState>>,
}

impl MockPort {
    /// Creates a port with every pin unconfigured and reading high
    /// (the idle level of a pulled-up button line).
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RefCell::new(PortState {
                modes: [None; MAX_PINS],
                levels: [PinLevel::High; MAX_PINS],
                scripts: core::array::from_fn(|_| heapless::Deque::new()),
                configure_log: heapless::Vec::new(),
                configure_calls: 0,
                write_log: heapless::Vec::new(),
                write_calls: 0,
            })),
        }
    }

    /// Sets the steady level a pin reads once its script is exhausted.
    pub fn set_level(&self, pin: Pin, level: PinLevel) {
        critical_section::with(|cs| {
            self.state.borrow_ref_mut(cs).levels[idx(pin)] = level;
        });
    }

    /// Queues levels to be returned by the next reads of a pin, in order.
    pub fn script_reads(&self, pin: Pin, levels: &[PinLevel]) {
        critical_section::with(|cs| {
            let mut state = self.state.borrow_ref_mut(cs);
            for &level in levels {
                state.scripts[idx(pin)]
                    .push_back(level)
                    .expect("read script full");
            }
        });
    }

    /// Current mode of a pin, if it was ever configured.
    pub fn mode(&self, pin: Pin) -> Option<PinMode> {
        critical_section::with(|cs| self.state.borrow_ref(cs).modes[idx(pin)])
    }

    /// The first `configure` calls, in order; see [`MockPort::configure_calls`]
    /// for the total.
    pub fn configure_log(&self) -> heapless::Vec<(Pin, PinMode), 16> {
        critical_section::with(|cs| self.state.borrow_ref(cs).configure_log.clone())
    }

    /// Total number of `configure` calls.
    pub fn configure_calls(&self) -> u32 {
        critical_section::with(|cs| self.state.borrow_ref(cs).configure_calls)
    }

    /// The first `write` calls, in order; see [`MockPort::write_calls`] for
    /// the total.
    pub fn write_log(&self) -> heapless::Vec<(Pin, PinLevel), 16> {
        critical_section::with(|cs| self.state.borrow_ref(cs).write_log.clone())
    }

    /// Total number of `write` calls.
    pub fn write_calls(&self) -> u32 {
        critical_section::with(|cs| self.state.borrow_ref(cs).write_calls)
    }
}

impl PortControl for MockPort {
    fn configure(&self, pin: Pin, mode: PinMode) -> Status {
        critical_section::with(|cs| {
            let mut state = self.state.borrow_ref_mut(cs);
            state.modes[idx(pin)] = Some(mode);
            state.configure_calls += 1;
            let _ = state.configure_log.push((pin, mode));
        });
        Ok(())
    }

    fn read(&self, pin: Pin) -> PinLevel {
        critical_section::with(|cs| {
            let mut state = self.state.borrow_ref_mut(cs);
            match state.scripts[idx(pin)].pop_front() {
                Some(level) => level,
                None => state.levels[idx(pin)],
            }
        })
    }

    fn write(&self, pin: Pin, level: PinLevel) -> Status {
        critical_section::with(|cs| {
            let mut state = self.state.borrow_ref_mut(cs);
            state.levels[idx(pin)] = level;
            state.write_calls += 1;
            let _ = state.write_log.push((pin, level));
        });
        Ok(())
    }
}

// ============================================================================
// Mock Interrupt Controller
// ============================================================================

#[derive(Default)]
struct ControllerState {
    /// First 16 `attach` calls; later ones only bump the counter, so tests
    /// that re-arm in a tight loop cannot overflow the log.
    attachments: heapless::Vec<(Pin, EdgeMode), 16>,
    attach_calls: u32,
}

/// Fake interrupt controller that records arming calls.
pub struct MockController {
    state: Mutex<RefCell<ControllerState>>,
}

impl MockController {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RefCell::new(ControllerState::default())),
        }
    }

    /// The first `attach` calls, in order; see [`MockController::attach_calls`]
    /// for the total.
    pub fn attachments(&self) -> heapless::Vec<(Pin, EdgeMode), 16> {
        critical_section::with(|cs| self.state.borrow_ref(cs).attachments.clone())
    }

    /// Total number of `attach` calls.
    pub fn attach_calls(&self) -> u32 {
        critical_section::with(|cs| self.state.borrow_ref(cs).attach_calls)
    }
}

impl InterruptController for MockController {
    fn attach(&self, pin: Pin, mode: EdgeMode) -> Status {
        critical_section::with(|cs| {
            let mut state = self.state.borrow_ref_mut(cs);
            state.attach_calls += 1;
            let _ = state.attachments.push((pin, mode));
        });
        Ok(())
    }
}

// ============================================================================
// Mock Tick Timer
// ============================================================================

#[derive(Default)]
struct TimerState {
    programmed: Option<u32>,
    program_calls: u32,
    unmasked: bool,
}

/// Fake compare-match timer recording the programmed period and mask state.
pub struct MockTimer {
    state: Mutex<RefCell<TimerState>>,
}

impl MockTimer {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RefCell::new(TimerState::default())),
        }
    }

    /// Last programmed period in milliseconds, if any.
    pub fn programmed(&self) -> Option<u32> {
        critical_section::with(|cs| self.state.borrow_ref(cs).programmed)
    }

    pub fn program_calls(&self) -> u32 {
        critical_section::with(|cs| self.state.borrow_ref(cs).program_calls)
    }

    /// Whether the compare-match interrupt has been unmasked.
    pub fn unmasked(&self) -> bool {
        critical_section::with(|cs| self.state.borrow_ref(cs).unmasked)
    }
}

impl TickTimer for MockTimer {
    fn program(&self, period_ms: u32) -> Status {
        critical_section::with(|cs| {
            let mut state = self.state.borrow_ref_mut(cs);
            state.programmed = Some(period_ms);
            state.program_calls += 1;
        });
        Ok(())
    }

    fn unmask(&self) -> Status {
        critical_section::with(|cs| {
            self.state.borrow_ref_mut(cs).unmasked = true;
        });
        Ok(())
    }
}
