//! On-board LED driver.
//!
//! Stateless register writes over [`PortControl`], with the per-color pin
//! assignment of the reference board kept in one lookup instead of repeated
//! per-pin case blocks.

use crate::port::PortControl;
use crate::types::{Pin, PinLevel, PinMode, Status};

/// On-board LED colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedColor {
    Yellow,
    Orange,
    Red,
}

impl LedColor {
    /// Logical pin the color is wired to on the reference board.
    pub const fn pin(self) -> Pin {
        match self {
            LedColor::Yellow => Pin::new(4),
            LedColor::Orange => Pin::new(5),
            LedColor::Red => Pin::new(6),
        }
    }
}

/// Driver for the three on-board LEDs.
pub struct Led<'a, P: PortControl> {
    port: &'a P,
}

impl<'a, P: PortControl> Led<'a, P> {
    /// Creates an LED driver over a port.
    pub fn new(port: &'a P) -> Self {
        Self { port }
    }

    /// Connects the LED bank. Nothing to configure up front; always succeeds.
    pub fn connect(&self) -> Status {
        Ok(())
    }

    /// Configures a color's pin as an output.
    pub fn enable(&self, color: LedColor) -> Status {
        self.port.configure(color.pin(), PinMode::Output)
    }

    /// Switches a color on or off.
    pub fn switch(&self, color: LedColor, on: bool) -> Status {
        let level = if on { PinLevel::High } else { PinLevel::Low };
        self.port.write(color.pin(), level)
    }
}
