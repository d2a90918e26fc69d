// src/ports/radio.rs

//! Radio receiver port.

use crate::ports::Number;

/// One decoded pilot command sample.
///
/// Only `thrust` is consumed by the core's actuation step; the auxiliary
/// bias and yaw fields are carried through for higher-level controllers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RcFrame<T> {
    /// Normalized collective thrust command, nominally `0..=1`.
    pub thrust: T,
    /// Forward/backward trim bias.
    pub bias_fb: T,
    /// Left/right trim bias.
    pub bias_lr: T,
    /// Commanded yaw input.
    pub yaw: T,
}

/// Capability interface for the radio receiver.
///
/// `read` is total; link-loss detection and failsafe behavior belong to the
/// adapter or a supervisory layer, not to this core.
pub trait Radio<T: Number> {
    /// Returns one fresh command frame. Synchronous, always succeeds.
    fn read(&mut self) -> RcFrame<T>;
}
