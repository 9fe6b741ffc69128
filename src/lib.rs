#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`PortControl`**: Trait to implement for your digital I/O registers
//! - **`InterruptController`**: Trait to implement for your edge-interrupt sources
//! - **`TickTimer`**: Trait to implement for your periodic hardware timer
//! - **`ButtonService`**: Button registration, edge classification and state polling
//! - **`ButtonRegistry`**: Static-friendly home of the per-channel callback slots
//! - **`TickSource`**: 1 ms periodic interrupt driving one system tick callback
//! - **`Gpio`** / **`Led`**: Stateless raw pin and LED drivers
//!
//! Callback slots are shared between main-line code and interrupt handlers;
//! every slot access runs inside a `critical-section` critical section, which
//! is the crate's rendition of the classic global interrupt disable/enable
//! bracket.

pub mod button;
pub mod gpio;
pub mod interrupt;
pub mod led;
pub mod port;
pub mod tick;
pub mod types;

pub use button::{ButtonChannel, ButtonPins, ButtonRegistry, ButtonService, EDGE_PAYLOAD};
pub use gpio::Gpio;
pub use interrupt::InterruptController;
pub use led::{Led, LedColor};
pub use port::PortControl;
pub use tick::{TICK_PERIOD_MS, TickSource, TickTimer};
pub use types::{
    CHANNEL_COUNT, Channel, EdgeCallback, EdgeMode, Error, Pin, PinLevel, PinMode, Status,
    TickCallback,
};

/// First button channel.
pub const CHANNEL_1: Channel = Channel::new(0);

/// Second button channel.
pub const CHANNEL_2: Channel = Channel::new(1);
