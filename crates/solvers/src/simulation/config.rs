use uom::si::{f64::Time, time::second};

/// Configuration for a [`Simulation`](super::Simulation) run.
///
/// Fields are plain values so that an invalid configuration can be built and
/// then rejected by [`Simulation::run`](super::Simulation::run) without
/// touching the entity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Config {
    /// Total simulated time.
    pub duration: f64,
    /// Fixed step size.
    pub step: f64,
    /// Write a status line before the first step and after every step.
    pub verbose: bool,
    /// Stop with an error as soon as any state component becomes `NaN` or infinite.
    pub halt_on_non_finite: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration: 1.0,
            step: 0.01,
            verbose: false,
            halt_on_non_finite: false,
        }
    }
}

impl Config {
    /// Creates a quiet configuration with the given duration and step size.
    #[must_use]
    pub fn new(duration: f64, step: f64) -> Self {
        Self {
            duration,
            step,
            ..Self::default()
        }
    }

    /// Creates a configuration from dimensioned times, stored in seconds.
    #[must_use]
    pub fn from_time(duration: Time, step: Time) -> Self {
        Self::new(duration.get::<second>(), step.get::<second>())
    }

    #[must_use]
    pub fn with_verbose(self, verbose: bool) -> Self {
        Self { verbose, ..self }
    }

    #[must_use]
    pub fn with_halt_on_non_finite(self, halt_on_non_finite: bool) -> Self {
        Self {
            halt_on_non_finite,
            ..self
        }
    }

    /// Validates that the step is positive and shorter than the duration.
    ///
    /// A step equal to or longer than the duration would finish in at most
    /// one step and is rejected.
    ///
    /// # Errors
    ///
    /// Returns the reason the configuration is invalid.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.step.is_finite() {
            return Err("step must be finite");
        }
        if !self.duration.is_finite() {
            return Err("duration must be finite");
        }
        if self.step <= 0.0 {
            return Err("step must be positive");
        }
        if self.step >= self.duration {
            return Err("step must be less than duration");
        }
        Ok(())
    }
}
