//! Interrupt-driven button event dispatch.
//!
//! Provides [`ButtonService`], which owns the public button contract
//! (`connect`, `enable`, `state`) and the edge classification run from
//! interrupt context ([`ButtonService::handle_edge`]). Callback slots live in
//! a [`ButtonRegistry`] the service borrows, so the registry can sit in a
//! `static` and outlive everything, while the state stays owned rather than
//! scattered across global function pointers.
//!
//! # Concurrency
//!
//! A single core runs two execution contexts: main-line code and interrupt
//! handlers. The only state shared between them is the callback slots.
//! [`ButtonService::enable`] writes a slot and arms the hardware source
//! inside one critical section, slot write first, so by the time the source
//! can fire the callback is fully visible. The edge handler reads the slot
//! inside a critical section of its own. Either context therefore observes
//! the pre-update or the post-update callback, never a torn value. Critical
//! sections stay minimal because they hold off all interrupt-driven work,
//! including the tick source.
//!
//! # No debouncing
//!
//! The raw electrical signal is deliberately not filtered in time. The edge
//! handler samples the pin twice back to back and classifies only steady
//! reads; a bouncing read simply drops the event. Downstream code may rely on
//! immediate callback delivery, so do not add temporal filtering here.

use core::cell::Cell;

use critical_section::Mutex;

use crate::interrupt::InterruptController;
use crate::port::PortControl;
use crate::types::{CHANNEL_COUNT, Channel, EdgeCallback, EdgeMode, Pin, PinLevel, PinMode, Status};

/// Payload passed to every [`EdgeCallback`].
///
/// The observed hardware variants disagree on the payload value, so this
/// crate standardizes on a fixed sentinel instead of propagating the
/// inconsistency.
pub const EDGE_PAYLOAD: bool = true;

type Slot = Mutex<Cell<Option<EdgeCallback>>>;

/// Callback slots for one physical button.
///
/// Created empty; the slots are mutated only through
/// [`ButtonService::enable`]. At most one pressed and one released callback
/// are registered at a time; enabling a (channel, edge) pair again replaces
/// the previous callback.
pub struct ButtonChannel {
    pressed: Slot,
    released: Slot,
}

impl ButtonChannel {
    /// Creates a channel with both slots empty.
    pub const fn new() -> Self {
        Self {
            pressed: Mutex::new(Cell::new(None)),
            released: Mutex::new(Cell::new(None)),
        }
    }

    fn slot(&self, on_press: bool) -> &Slot {
        if on_press { &self.pressed } else { &self.released }
    }
}

impl Default for ButtonChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed table of per-channel callback slots.
///
/// Const-constructible so it can live in a `static` for the life of the
/// device:
///
/// ```
/// use button_events::ButtonRegistry;
///
/// static BUTTONS: ButtonRegistry = ButtonRegistry::new();
/// ```
pub struct ButtonRegistry {
    channels: [ButtonChannel; CHANNEL_COUNT],
}

impl ButtonRegistry {
    /// Creates a registry with every slot empty.
    pub const fn new() -> Self {
        Self {
            channels: [ButtonChannel::new(), ButtonChannel::new()],
        }
    }

    fn channel(&self, channel: Channel) -> Option<&ButtonChannel> {
        channel.index().map(|idx| &self.channels[idx])
    }
}

impl Default for ButtonRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Map from button channels to the logical pins they are wired to.
///
/// The default matches the reference board: channel 1 on pin 2, channel 2 on
/// pin 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonPins {
    pins: [Pin; CHANNEL_COUNT],
}

impl ButtonPins {
    /// Creates a pin map, first entry for [`CHANNEL_1`](crate::CHANNEL_1).
    pub const fn new(pins: [Pin; CHANNEL_COUNT]) -> Self {
        Self { pins }
    }

    fn pin(&self, channel: Channel) -> Option<Pin> {
        channel.index().map(|idx| self.pins[idx])
    }
}

impl Default for ButtonPins {
    fn default() -> Self {
        Self::new([Pin::new(2), Pin::new(3)])
    }
}

/// Registry of button channels and the public button contract.
///
/// Borrows the port and the callback registry (both are shared with interrupt
/// context) and owns the interrupt controller capability.
///
/// # Type Parameters
/// * `'a` - Lifetime of the borrowed port and registry
/// * `P` - Port control implementation type
/// * `C` - Interrupt controller implementation type
pub struct ButtonService<'a, P: PortControl, C: InterruptController> {
    port: &'a P,
    ctrl: C,
    pins: ButtonPins,
    registry: &'a ButtonRegistry,
}

impl<'a, P: PortControl, C: InterruptController> ButtonService<'a, P, C> {
    /// Creates a service with the default channel-to-pin map.
    pub fn new(port: &'a P, ctrl: C, registry: &'a ButtonRegistry) -> Self {
        Self::with_pins(port, ctrl, registry, ButtonPins::default())
    }

    /// Creates a service with a custom channel-to-pin map.
    pub fn with_pins(
        port: &'a P,
        ctrl: C,
        registry: &'a ButtonRegistry,
        pins: ButtonPins,
    ) -> Self {
        Self {
            port,
            ctrl,
            pins,
            registry,
        }
    }

    /// Returns the interrupt controller capability.
    pub fn controller(&self) -> &C {
        &self.ctrl
    }

    /// Configures both button pins as inputs with pull-up bias.
    ///
    /// Idempotent; safe to call multiple times. Has no failure path in the
    /// current design.
    pub fn connect(&self) -> Status {
        for pin in self.pins.pins {
            self.port.configure(pin, PinMode::InputPullUp)?;
        }
        Ok(())
    }

    /// Registers a callback for one edge of a channel and arms its interrupt.
    ///
    /// `on_press` selects the pressed (`true`) or released (`false`) slot.
    /// The most recent call for a given (channel, edge) pair replaces the
    /// prior callback. The slot write and the either-edge arming happen
    /// inside a single critical section, write first, so the interrupt source
    /// can never fire before the callback is fully visible.
    ///
    /// # Quirk
    ///
    /// An unknown channel silently returns success without mutating any slot
    /// or touching the hardware, matching the long-observed driver contract.
    /// The channel then never fires a callback and polls as
    /// [`PinLevel::Undefined`].
    pub fn enable(&self, channel: Channel, callback: EdgeCallback, on_press: bool) -> Status {
        let (Some(slots), Some(pin)) = (self.registry.channel(channel), self.pins.pin(channel))
        else {
            return Ok(());
        };

        critical_section::with(|cs| {
            slots.slot(on_press).borrow(cs).set(Some(callback));
            self.ctrl.attach(pin, EdgeMode::AnyEdge)
        })
    }

    /// Samples the current raw level of a channel's input pin.
    ///
    /// A direct hardware read: no debouncing, no edge logic. Usable at any
    /// time from main-line code. Unknown channels yield
    /// [`PinLevel::Undefined`].
    pub fn state(&self, channel: Channel) -> PinLevel {
        match self.pins.pin(channel) {
            Some(pin) => self.port.read(pin),
            None => PinLevel::Undefined,
        }
    }

    /// Classifies an edge on a channel and dispatches the matching callback.
    ///
    /// This is the interrupt-context entry point; platform glue binds the
    /// channel's hardware vector to a call of this method. The pin is sampled
    /// twice in immediate succession; the interrupt already fired on a
    /// transition, so a settled signal reads the same level both times:
    ///
    /// * both samples low: the channel's pressed callback runs, if set
    /// * both samples high: the channel's released callback runs, if set
    /// * anything else is a transitional read and no callback runs
    ///
    /// An empty slot is a silent no-op, so an edge nobody enabled goes
    /// unreported rather than crashing the handler. Unknown channels are
    /// ignored.
    pub fn handle_edge(&self, channel: Channel) {
        let (Some(slots), Some(pin)) = (self.registry.channel(channel), self.pins.pin(channel))
        else {
            return;
        };

        let before = self.port.read(pin);
        let after = self.port.read(pin);

        let callback = match (before, after) {
            (PinLevel::Low, PinLevel::Low) => {
                critical_section::with(|cs| slots.pressed.borrow(cs).get())
            }
            (PinLevel::High, PinLevel::High) => {
                critical_section::with(|cs| slots.released.borrow(cs).get())
            }
            _ => None,
        };

        if let Some(callback) = callback {
            callback(EDGE_PAYLOAD);
        }
    }
}
