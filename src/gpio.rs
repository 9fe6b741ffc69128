//! Raw GPIO driver.
//!
//! Stateless set/clear/read passthrough over [`PortControl`]. Nothing here
//! is interrupt-driven; every operation is a single register access.

use crate::port::PortControl;
use crate::types::{Pin, PinLevel, PinMode, Status};

/// Raw digital I/O on arbitrary logical pins.
pub struct Gpio<'a, P: PortControl> {
    port: &'a P,
}

impl<'a, P: PortControl> Gpio<'a, P> {
    /// Creates a GPIO driver over a port.
    pub fn new(port: &'a P) -> Self {
        Self { port }
    }

    /// Configures a pin's direction and bias.
    pub fn connect(&self, pin: Pin, mode: PinMode) -> Status {
        self.port.configure(pin, mode)
    }

    /// Drives a pin to logic 1.
    pub fn set(&self, pin: Pin) -> Status {
        self.port.write(pin, PinLevel::High)
    }

    /// Drives a pin to logic 0.
    pub fn unset(&self, pin: Pin) -> Status {
        self.port.write(pin, PinLevel::Low)
    }

    /// Reads a pin; `false` for a low level, `true` otherwise.
    pub fn read(&self, pin: Pin) -> bool {
        self.port.read(pin) != PinLevel::Low
    }
}
