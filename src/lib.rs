// src/lib.rs

//! # Complementary-Filter Flight Core
//!
//! This crate provides a `no_std`, no-alloc control core for a small
//! quadrotor flight controller. It fuses inertial sensor readings into an
//! attitude estimate with a complementary filter, reads pilot commands, and
//! drives motor outputs, once per externally clocked control tick. Concrete
//! hardware access (sensors, radio receiver, ESCs, telemetry transport,
//! storage) sits behind narrow port traits implemented outside this crate.

#![no_std]
#![deny(missing_docs)]

pub mod estimator;
pub mod flight_core;
pub mod motor;
pub mod ports;

#[doc(inline)]
pub use estimator::*;
#[doc(inline)]
pub use flight_core::*;
#[doc(inline)]
pub use motor::*;

#[cfg(test)]
mod test_utils;
