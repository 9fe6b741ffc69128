//! Interrupt controller abstraction.
//!
//! Classic register-level drivers bracket every arming sequence with a global
//! interrupt disable/enable pair. In this crate that global mask is expressed
//! with the `critical-section` crate: compound updates run inside
//! [`critical_section::with`], so the controller trait only needs to cover
//! the per-source arming operation.

use crate::types::{EdgeMode, Pin, Status};

/// Trait for abstracting edge-triggered interrupt sources.
///
/// Implement this for your target to bind a pin's hardware interrupt line to
/// the edge-select and mask registers. Like [`PortControl`](crate::PortControl),
/// methods take `&self` so the capability can be shared with interrupt
/// context; implementations use interior mutability.
pub trait InterruptController {
    /// Arms the edge-triggered interrupt source for a pin.
    ///
    /// Once armed, a source stays armed indefinitely; no detach operation
    /// exists. Re-attaching an already armed source is a harmless
    /// reconfiguration and must be tolerated.
    fn attach(&self, pin: Pin, mode: EdgeMode) -> Status;
}
