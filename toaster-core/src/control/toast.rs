//! Toast controller
//!
//! Consumes samples and wall-clock time, holds the threshold, and drives
//! the carriage actuator. Side effects happen only on phase changes, which
//! keeps each crossing to a single "neutral" command.

use crate::config::ToasterConfig;
use crate::state::{Event, Phase};
use crate::traits::{Actuator, Sample, ServoPosition};

use super::intent::{Intent, Status};
use super::session::ToastSession;
use super::threshold::ThresholdInput;

/// Threshold-triggered toast controller
pub struct ToastController<A> {
    actuator: A,
    phase: Phase,
    threshold: ThresholdInput,
    session: ToastSession,
    current: Option<Sample>,
}

impl<A: Actuator> ToastController<A> {
    /// Create a new controller in the idle phase
    ///
    /// The actuator is not commanded here; drivers park themselves when
    /// constructed.
    pub fn new(config: &ToasterConfig, actuator: A) -> Self {
        Self {
            actuator,
            phase: Phase::Idle,
            threshold: ThresholdInput::new(config.bounds, config.initial_threshold),
            session: ToastSession::new(),
            current: None,
        }
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Authoritative threshold (°C)
    pub fn threshold(&self) -> i16 {
        self.threshold.value()
    }

    /// Threshold input state
    pub fn threshold_input(&self) -> &ThresholdInput {
        &self.threshold
    }

    /// Latest sample (°C)
    pub fn current_temperature(&self) -> Option<i16> {
        self.current.map(|s| s.celsius)
    }

    /// Current session
    pub fn session(&self) -> &ToastSession {
        &self.session
    }

    /// Toasting duration in whole seconds
    pub fn elapsed_seconds(&self, now_ms: u64) -> u32 {
        self.session.elapsed_seconds(now_ms)
    }

    /// Get access to the underlying actuator
    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    /// Snapshot for the presentation layer
    pub fn status(&self, now_ms: u64) -> Status {
        Status {
            current_temperature: self.current_temperature(),
            elapsed_seconds: self.elapsed_seconds(now_ms),
            phase: self.phase,
            threshold: self.threshold.value(),
            slider: self.threshold.slider(),
            text: self.threshold.text(),
        }
    }

    /// Start toasting
    ///
    /// Returns true if the controller left the idle phase.
    pub fn start(&mut self, now_ms: u64) -> bool {
        self.apply(Event::Start, now_ms)
    }

    /// Reset a finished session
    ///
    /// Returns true if the controller returned to idle. The threshold is
    /// kept.
    pub fn reset(&mut self, now_ms: u64) -> bool {
        self.apply(Event::Reset, now_ms)
    }

    /// Commit a threshold value
    ///
    /// Ignored once done. Returns the authoritative value after the call.
    pub fn set_threshold(&mut self, value: i16) -> i16 {
        if self.phase.accepts_threshold() {
            self.threshold.commit(value)
        } else {
            self.threshold.resync();
            self.threshold.value()
        }
    }

    /// Feed a fresh sample
    ///
    /// While active, a sample at or above the threshold finishes the
    /// session. Returns the phase after the sample.
    pub fn on_sample(&mut self, sample: Sample, now_ms: u64) -> Phase {
        self.current = Some(sample);

        if self.phase.compares_samples() && sample.celsius >= self.threshold.value() {
            self.apply(Event::ThresholdReached, now_ms);
        }

        self.phase
    }

    /// Process an operator intent
    pub fn handle(&mut self, intent: Intent, now_ms: u64) {
        if intent.is_threshold_input() && !self.phase.accepts_threshold() {
            self.threshold.resync();
            return;
        }

        match intent {
            Intent::SetThreshold(value) => {
                self.threshold.commit(value);
            }
            Intent::SliderMoved(value) => self.threshold.move_slider(value),
            Intent::SliderReleased => {
                self.threshold.commit_slider();
            }
            Intent::TextEdited(value) => self.threshold.edit_text(value),
            Intent::TextCommitted => {
                self.threshold.commit_text();
            }
            Intent::Start => {
                self.start(now_ms);
            }
            Intent::Reset => {
                self.reset(now_ms);
            }
        }
    }

    /// Run an event through the state machine and perform the side
    /// effects of the resulting transition
    fn apply(&mut self, event: Event, now_ms: u64) -> bool {
        let from = self.phase;
        let to = from.transition(event);
        if from == to {
            return false;
        }

        match (from, to) {
            (Phase::Idle, Phase::Active) => {
                self.session.start(now_ms);
                self.actuator.set_position(servo_position(to));
            }
            (Phase::Active, Phase::Done) => {
                let _elapsed = self.session.finish(now_ms);
                self.actuator.set_position(servo_position(to));
                #[cfg(feature = "defmt")]
                defmt::info!(
                    "Threshold {}°C reached after {}s",
                    self.threshold.value(),
                    _elapsed
                );
            }
            (Phase::Done, Phase::Idle) => {
                self.session.clear();
            }
            _ => {}
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("Phase {} -> {} on {}", from, to, event);

        self.phase = to;
        true
    }
}

/// Carriage position held in a phase
fn servo_position(phase: Phase) -> ServoPosition {
    if phase.is_engaged() {
        ServoPosition::Engaged
    } else {
        ServoPosition::Neutral
    }
}
