// src/estimator.rs

//! # Complementary-Filter Attitude Estimator
//!
//! This module converts raw inertial samples and elapsed time into a 3-axis
//! attitude estimate. Pitch and roll each blend a gyro-integrated prediction
//! (trusted at high frequency) with an accelerometer-derived correction
//! (trusted at low frequency) via a fixed weighted average. Yaw has no
//! absolute reference without a magnetometer, so it is pure gyro
//! integration and drifts unboundedly over time.
//!
//! The accelerometer correction assumes near-static or low-acceleration
//! flight, where the accelerometer reads the gravity direction; no
//! compensation for sustained linear acceleration is performed.

use crate::ports::{ImuSample, Number};

/// Default complementary blend weight applied to the gyro prediction.
const DEFAULT_ALPHA: f32 = 0.98;

/// Current orientation estimate in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Attitude<T> {
    /// Rotation about the lateral axis.
    pub pitch: T,
    /// Rotation about the longitudinal axis.
    pub roll: T,
    /// Rotation about the vertical axis. Gyro-only, drifts over time.
    pub yaw: T,
}

/// Configuration for the estimator's filter settings.
#[derive(Clone, Copy)]
pub struct EstimatorConfig<T: Number> {
    /// Complementary blend weight for the gyro prediction; the
    /// accelerometer correction receives `1 - alpha`.
    pub alpha: T,
}

impl<T: Number> EstimatorConfig<T> {
    /// Creates a configuration with the default blend weight of 0.98.
    pub fn new() -> Self {
        Self {
            alpha: T::from(DEFAULT_ALPHA).unwrap_or_else(T::one),
        }
    }
}

/// Struct representing the complementary-filter attitude estimator.
///
/// The held [`Attitude`] is the only state carried across ticks; it starts
/// at zero and is mutated exclusively by [`update`](Estimator::update) and
/// [`reset`](Estimator::reset).
pub struct Estimator<T: Number> {
    att: Attitude<T>,
    alpha: T,
}

impl<T: Number> Estimator<T> {
    /// Creates a new estimator using the provided configuration.
    pub fn with_config(config: EstimatorConfig<T>) -> Self {
        Estimator {
            att: Attitude {
                pitch: T::zero(),
                roll: T::zero(),
                yaw: T::zero(),
            },
            alpha: config.alpha,
        }
    }

    /// Creates a new estimator with default settings.
    pub fn new() -> Self {
        Self::with_config(EstimatorConfig::new())
    }

    /// Zeroes the held attitude. No side effects, no failure mode.
    pub fn reset(&mut self) {
        self.att.pitch = T::zero();
        self.att.roll = T::zero();
        self.att.yaw = T::zero();
    }

    /// Returns the last computed attitude without mutation.
    pub fn attitude(&self) -> Attitude<T> {
        self.att
    }

    /// Consumes one inertial sample and the elapsed time since the previous
    /// call, returning the updated attitude. Repeated calls integrate over
    /// time.
    ///
    /// - Accelerometer-derived pitch is `atan2(ay, az)`, roll is
    ///   `atan2(-ax, az)`; a degenerate `az = 0` follows standard `atan2`
    ///   semantics (±π/2) rather than raising a fault.
    /// - `dt` is a non-negative, caller-supplied duration.
    pub fn update(&mut self, sample: ImuSample<T>, dt: T) -> Attitude<T> {
        let one = T::one();
        let pitch_acc = sample.ay.atan2(sample.az);
        let roll_acc = (-sample.ax).atan2(sample.az);

        self.att.pitch =
            self.alpha * (self.att.pitch + sample.gx * dt) + (one - self.alpha) * pitch_acc;
        self.att.roll =
            self.alpha * (self.att.roll + sample.gy * dt) + (one - self.alpha) * roll_acc;
        // Integrate gyro for yaw; no absolute reference is available.
        self.att.yaw = self.att.yaw + sample.gz * dt;
        self.att
    }
}
