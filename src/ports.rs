// src/ports.rs

//! # Port Interfaces
//!
//! This module specifies the capability boundaries the flight core depends
//! on: inertial sensing, pilot command intake, telemetry output, motor
//! actuation, and key-value storage. Each port is a minimal synchronous
//! trait implemented by hardware adapters or test doubles outside this
//! crate. Port calls are assumed non-blocking relative to the tick budget;
//! an implementation that blocks stalls the entire control loop.

use num_traits::Float;

/// Custom trait to encapsulate base number requirements.
///
/// The estimator needs `atan2`, so the scalar type is bound to
/// [`num_traits::Float`]; any float-like type with trigonometry works.
pub trait Number: Float {}

impl<T: Float> Number for T {}

pub mod esc;
pub use esc::*;
pub mod imu;
pub use imu::*;
pub mod radio;
pub use radio::*;
pub mod store;
pub use store::*;
pub mod telemetry;
pub use telemetry::*;
