//! Core types shared by every driver in the crate.

/// Logic level of a digital pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinLevel {
    /// Logic 0.
    Low,

    /// Logic 1.
    High,

    /// Level of an unrecognized channel.
    ///
    /// Returned by [`ButtonService::state`](crate::ButtonService::state) when
    /// the channel identifier is unknown. Never a valid logic level; callers
    /// must not treat it as one.
    Undefined,
}

impl PinLevel {
    /// Returns `true` for [`PinLevel::High`].
    #[inline]
    pub fn is_high(self) -> bool {
        self == PinLevel::High
    }

    /// Returns `true` for [`PinLevel::Low`].
    #[inline]
    pub fn is_low(self) -> bool {
        self == PinLevel::Low
    }
}

impl From<bool> for PinLevel {
    fn from(high: bool) -> Self {
        if high { PinLevel::High } else { PinLevel::Low }
    }
}

/// Logical pin identifier.
///
/// The mapping from a logical pin to a physical register and bit lives
/// entirely behind the [`PortControl`](crate::PortControl) implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pin(u8);

impl Pin {
    /// Creates a pin identifier.
    #[inline]
    pub const fn new(number: u8) -> Self {
        Pin(number)
    }

    /// Returns the logical pin number.
    #[inline]
    pub const fn number(self) -> u8 {
        self.0
    }
}

/// Direction and bias configuration of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Input, high impedance.
    Input,

    /// Input with the internal pull-up resistor raised.
    InputPullUp,

    /// Push-pull output.
    Output,
}

/// Edge selection for an interrupt source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeMode {
    /// Trigger on a low-to-high transition.
    Rising,

    /// Trigger on a high-to-low transition.
    Falling,

    /// Trigger on any logic transition.
    ///
    /// The button subsystem always arms this mode so a single source reports
    /// both pressed and released edges.
    AnyEdge,
}

/// Identifier of one physical button input.
///
/// Callers must use the named constants [`CHANNEL_1`](crate::CHANNEL_1) and
/// [`CHANNEL_2`](crate::CHANNEL_2). Out-of-range values are representable so
/// the drivers can reproduce the unknown-channel contract: such a channel
/// reads as [`PinLevel::Undefined`] and never fires a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Channel(u32);

/// Number of button channels per board.
pub const CHANNEL_COUNT: usize = 2;

impl Channel {
    /// Creates a channel identifier from a raw value.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Channel(raw)
    }

    /// Returns the raw channel value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Registry index of the channel, or `None` for an unknown identifier.
    ///
    /// Compares before narrowing: on 16-bit targets a `u32 as usize` cast
    /// truncates, which would alias high identifiers onto real channels.
    #[inline]
    pub(crate) fn index(self) -> Option<usize> {
        if self.0 < CHANNEL_COUNT as u32 {
            Some(self.0 as usize)
        } else {
            None
        }
    }
}

/// Result of a driver operation.
///
/// Every entry point in this crate returns a `Status`, but no operation
/// currently produces an error: register writes are assumed to succeed on
/// embedded targets and invalid input is swallowed (see
/// [`ButtonService::enable`](crate::ButtonService::enable)). The error channel
/// exists so failure variants can be added without breaking callers.
pub type Status = Result<(), Error>;

/// Driver error kinds.
///
/// Reserved for forward compatibility; no current operation returns one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// Channel identifier outside the known set.
    UnknownChannel,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::UnknownChannel => write!(f, "unknown button channel"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Callback invoked from interrupt context when a button edge is classified.
///
/// The payload is a fixed sentinel: the dispatcher always passes `true`.
pub type EdgeCallback = fn(bool);

/// Callback invoked from interrupt context on each timer period.
pub type TickCallback = fn();
