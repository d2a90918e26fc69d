// src/motor.rs

//! # Motor Abstraction
//!
//! A thin adapter binding a normalized throttle command to exactly one ESC
//! capability. The adapter holds no state beyond the binding itself; it is
//! constructed once at startup and never reassigned.

use core::marker::PhantomData;

use crate::ports::{Esc, Number};

/// One actuation channel, bound to exactly one [`Esc`] at construction.
pub struct Motor<T: Number, E: Esc<T>> {
    esc: E,
    _number: PhantomData<fn(T)>,
}

impl<T: Number, E: Esc<T>> Motor<T, E> {
    /// Binds a motor to its speed controller.
    pub fn new(esc: E) -> Self {
        Motor {
            esc,
            _number: PhantomData,
        }
    }

    /// Delegates to the ESC's arm operation and returns its result. No
    /// retry is attempted.
    pub fn arm(&mut self) -> bool {
        self.esc.arm()
    }

    /// Delegates to the ESC's disarm operation. Treated as always
    /// effective.
    pub fn disarm(&mut self) {
        self.esc.disarm()
    }

    /// Forwards a normalized duty value directly to the ESC. No clamping,
    /// no rate-limiting, no mixing; out-of-range values pass through
    /// uninterpreted.
    pub fn set_throttle(&mut self, duty: T) {
        self.esc.write(duty)
    }
}
