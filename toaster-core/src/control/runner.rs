//! Host control loop
//!
//! Owns the sensor, the controller and the clock. The host calls
//! [`ControlLoop::tick`] as often as it likes (every display frame, every
//! scheduler tick); a sensor transaction only happens on the first tick
//! after each whole-second boundary.
//!
//! Every sensor read blocks for the converter settle budget
//! ([`ToasterConfig::read_duration_us`](crate::config::ToasterConfig::read_duration_us),
//! 2.5 ms with default timing). That is the latency floor of every sample.

use toaster_hal::Clock;

use crate::traits::{Actuator, Sample, TemperatureSensor};

use super::gate::SampleGate;
use super::intent::{Intent, Status};
use super::toast::ToastController;

/// Single-threaded control loop
pub struct ControlLoop<S, A, C> {
    sensor: S,
    controller: ToastController<A>,
    gate: SampleGate,
    clock: C,
}

impl<S, A, C> ControlLoop<S, A, C>
where
    S: TemperatureSensor,
    A: Actuator,
    C: Clock,
{
    /// Create a new control loop
    ///
    /// The first sample is taken at the next whole-second boundary.
    pub fn new(sensor: S, controller: ToastController<A>, clock: C) -> Self {
        let gate = SampleGate::new(clock.now_ms());
        Self {
            sensor,
            controller,
            gate,
            clock,
        }
    }

    /// Run one loop iteration
    ///
    /// Returns the sample if one was taken on this tick.
    pub fn tick(&mut self) -> Option<Sample> {
        let now_ms = self.clock.now_ms();
        if !self.gate.poll(now_ms) {
            return None;
        }

        let sample = self.sensor.read();
        self.controller.on_sample(sample, now_ms);
        Some(sample)
    }

    /// Forward an operator intent, timestamped with the loop clock
    pub fn handle(&mut self, intent: Intent) {
        let now_ms = self.clock.now_ms();
        self.controller.handle(intent, now_ms);
    }

    /// Snapshot for the presentation layer
    pub fn status(&self) -> Status {
        self.controller.status(self.clock.now_ms())
    }

    /// Get access to the controller
    pub fn controller(&self) -> &ToastController<A> {
        &self.controller
    }

    /// Get access to the sensor
    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    /// Get access to the clock
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
