// src/ports/esc.rs

//! Electronic speed controller port.

use crate::ports::Number;

/// Capability interface for one motor's speed controller.
///
/// `arm` is the only operation in the core with an explicit failure signal.
pub trait Esc<T: Number> {
    /// Arms the channel. Returns `true` on success.
    fn arm(&mut self) -> bool;

    /// Disarms the channel. Always effective from the caller's point of
    /// view; no failure is reported.
    fn disarm(&mut self);

    /// Writes one normalized duty value. Values outside the expected range
    /// are passed through uninterpreted; clamping is the caller's
    /// responsibility.
    fn write(&mut self, duty: T);
}
