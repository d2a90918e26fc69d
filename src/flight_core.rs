// src/flight_core.rs

//! # Flight Core Orchestrator
//!
//! This module owns the attitude estimator and the four motor adapters and
//! sequences one control tick at a time: sensing, estimation, telemetry
//! emission, command intake, and actuation. It is single-threaded and
//! externally clocked; the caller drives [`FlightCore::update`] from a
//! fixed-period loop, and the core performs no internal scheduling, spawns
//! no tasks, and holds no locks.
//!
//! The core is a two-state machine: it starts disarmed, arming gates
//! whether throttle commands are forwarded to the motors, and
//! [`FlightCore::disarm`] is the only way to stop actuation, taking effect
//! from the next tick.

use crate::estimator::Estimator;
use crate::motor::Motor;
use crate::ports::{Esc, Imu, Number, Radio, TelemetryFrame, TelemetryOut};

/// Number of motors, fixed at construction. The design does not support a
/// dynamic motor count.
pub const MOTOR_COUNT: usize = 4;

/// Struct representing the flight core orchestrator.
///
/// Owns its ports for the process lifetime; compose concrete port
/// implementations once at startup and keep the core alive thereafter.
pub struct FlightCore<T, I, R, O, E>
where
    T: Number,
    I: Imu<T>,
    R: Radio<T>,
    O: TelemetryOut<T>,
    E: Esc<T>,
{
    imu: I,
    radio: R,
    telemetry: O,
    motors: [Motor<T, E>; MOTOR_COUNT],
    estimator: Estimator<T>,
    armed: bool,
}

impl<T, I, R, O, E> FlightCore<T, I, R, O, E>
where
    T: Number,
    I: Imu<T>,
    R: Radio<T>,
    O: TelemetryOut<T>,
    E: Esc<T>,
{
    /// Creates a disarmed flight core wired to its ports, binding one motor
    /// per ESC.
    ///
    /// Example Usage
    /// ```
    /// use flight_core::FlightCore;
    /// use flight_core::ports::{Esc, Imu, ImuSample, Radio, RcFrame, TelemetryFrame, TelemetryOut};
    ///
    /// struct DummyImu;
    /// impl Imu<f32> for DummyImu {
    ///     fn begin(&mut self) {}
    ///     fn read(&mut self) -> ImuSample<f32> {
    ///         ImuSample { az: 1.0, ..ImuSample::default() }
    ///     }
    /// }
    ///
    /// struct DummyRadio;
    /// impl Radio<f32> for DummyRadio {
    ///     fn read(&mut self) -> RcFrame<f32> {
    ///         RcFrame { thrust: 0.5, ..RcFrame::default() }
    ///     }
    /// }
    ///
    /// struct DummyTelemetry;
    /// impl TelemetryOut<f32> for DummyTelemetry {
    ///     fn write(&mut self, _frame: TelemetryFrame<f32>) {}
    /// }
    ///
    /// struct DummyEsc;
    /// impl Esc<f32> for DummyEsc {
    ///     fn arm(&mut self) -> bool { true }
    ///     fn disarm(&mut self) {}
    ///     fn write(&mut self, _duty: f32) {}
    /// }
    ///
    /// let mut core = FlightCore::new(
    ///     DummyImu,
    ///     DummyRadio,
    ///     DummyTelemetry,
    ///     [DummyEsc, DummyEsc, DummyEsc, DummyEsc],
    /// );
    /// core.init();
    /// assert!(core.arm());
    /// core.update(0.01);
    /// ```
    pub fn new(imu: I, radio: R, telemetry: O, escs: [E; MOTOR_COUNT]) -> Self {
        FlightCore {
            imu,
            radio,
            telemetry,
            motors: escs.map(Motor::new),
            estimator: Estimator::new(),
            armed: false,
        }
    }

    /// Initializes the IMU and resets the estimator. Leaves the armed flag
    /// untouched; not guarded against repeated calls.
    pub fn init(&mut self) {
        self.imu.begin();
        self.estimator.reset();
    }

    /// Attempts to arm every motor and returns whether all four succeeded.
    ///
    /// Every channel gets its arm attempt even if an earlier one fails; the
    /// armed flag becomes the AND of the four results. On partial failure
    /// the core stays disarmed but motors that did arm are not rolled back
    /// at the hardware level; call [`disarm`](FlightCore::disarm) to return
    /// them to a known state.
    pub fn arm(&mut self) -> bool {
        let mut ok = true;
        for motor in self.motors.iter_mut() {
            ok &= motor.arm();
        }
        self.armed = ok;
        ok
    }

    /// Unconditionally disarms all four motors and clears the armed flag.
    /// Always succeeds; takes effect from the next tick.
    pub fn disarm(&mut self) {
        for motor in self.motors.iter_mut() {
            motor.disarm();
        }
        self.armed = false;
    }

    /// Returns the flight-readiness flag.
    pub fn armed(&self) -> bool {
        self.armed
    }

    /// Runs one control tick. Fixed sequence, no branching on failure:
    ///
    /// 1. Read one IMU sample.
    /// 2. Feed it and `dt` to the estimator.
    /// 3. Emit a telemetry frame from the attitude (battery voltage stays
    ///    zero; an external collaborator populates it).
    /// 4. Read one radio command frame.
    /// 5. If armed, broadcast the frame's thrust identically to all four
    ///    motors. While disarmed, the motors receive no throttle write.
    ///
    /// The broadcast applies no differential mixing; attitude stabilization
    /// belongs to a higher-level controller.
    pub fn update(&mut self, dt: T) {
        let sample = self.imu.read();
        let att = self.estimator.update(sample, dt);

        self.telemetry.write(TelemetryFrame {
            pitch: att.pitch,
            roll: att.roll,
            yaw: att.yaw,
            batt_v: T::zero(),
        });

        let rc = self.radio.read();
        if self.armed {
            for motor in self.motors.iter_mut() {
                motor.set_throttle(rc.thrust);
            }
        }
    }
}
