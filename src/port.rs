//! Port control abstraction for digital pins.

use crate::types::{Pin, PinLevel, PinMode, Status};

/// Trait for abstracting the digital I/O port of a microcontroller.
///
/// Implement this for your target to map logical [`Pin`] identifiers to the
/// physical direction, input and output registers. Every driver in this crate
/// reaches the hardware exclusively through this boundary, which is what makes
/// the crate testable on the host with a scripted fake port.
///
/// Methods take `&self` because the port is reachable from both the main
/// execution context and interrupt handlers: [`ButtonService::state`] polls a
/// pin from main-line code while the edge handler samples the same pin from
/// interrupt context. Implementations must therefore use interior mutability;
/// memory-mapped registers satisfy this naturally.
///
/// [`ButtonService::state`]: crate::ButtonService::state
pub trait PortControl {
    /// Configures the direction and bias of a pin.
    fn configure(&self, pin: Pin, mode: PinMode) -> Status;

    /// Samples the current level of a pin.
    ///
    /// Must return [`PinLevel::Low`] or [`PinLevel::High`] for any pin the
    /// board wires up; [`PinLevel::Undefined`] is reserved for the channel
    /// layer above.
    fn read(&self, pin: Pin) -> PinLevel;

    /// Drives a pin to the given level.
    ///
    /// Only meaningful for pins configured as [`PinMode::Output`].
    fn write(&self, pin: Pin, level: PinLevel) -> Status;
}
