//! A fixed-step simulation driver.
//!
//! A [`Simulation`] owns a single [`DynamicEntity`] and advances it with the
//! [`midpoint`] integrator until the elapsed time reaches the configured
//! duration:
//!
//! ```text
//! while elapsed < duration {
//!     midpoint::step(entity, step)
//!     elapsed += step
//! }
//! ```
//!
//! The step size is never shrunk, so the last step may overshoot the duration
//! by up to one step. Elapsed time is accumulated by repeated addition.
//!
//! # Example
//!
//! ```
//! use pensim_entities::ConstantVelocityParticle;
//! use pensim_solvers::{Config, Simulation};
//!
//! let particle = ConstantVelocityParticle::new(0.0, 2.0);
//! let mut sim = Simulation::new(Config::new(1.0, 0.25), particle);
//!
//! assert!(sim.run());
//! assert_eq!(sim.output().0, [2.0, 2.0]);
//! ```
//!
//! [`midpoint`]: crate::transient::midpoint

mod config;
mod error;
mod event;
mod solution;
mod status;

pub use config::Config;
pub use error::Error;
pub use event::{Action, Event};
pub use solution::{Phase, Solution, Status};
pub use status::StatusWriter;

use std::io::{self, Write};

use pensim_core::{DynamicEntity, Observer, StateVector};

use crate::transient::midpoint;

/// Drives one entity through a fixed-step run.
#[derive(Debug, Clone)]
pub struct Simulation<E, const N: usize> {
    config: Config,
    entity: E,
    phase: Phase,
    elapsed: f64,
    steps: usize,
}

impl<E, const N: usize> Simulation<E, N>
where
    E: DynamicEntity<N>,
{
    /// Creates a simulation that takes ownership of `entity`.
    pub fn new(config: Config, entity: E) -> Self {
        Self {
            config,
            entity,
            phase: Phase::NotStarted,
            elapsed: 0.0,
            steps: 0,
        }
    }

    /// Runs the simulation, writing status lines to stdout when verbose.
    ///
    /// Returns `false` without touching the entity if the config is invalid.
    pub fn run(&mut self) -> bool {
        self.run_with_sink(io::stdout())
    }

    /// Runs the simulation, writing status lines to `sink` when verbose.
    ///
    /// Returns `false` without touching the entity if the config is invalid.
    pub fn run_with_sink<W: Write>(&mut self, sink: W) -> bool {
        let result = if self.config.verbose {
            self.run_observed(StatusWriter::new(sink))
        } else {
            self.run_observed(())
        };

        match result {
            Ok(_) => true,
            Err(error) => {
                tracing::warn!(%error, "simulation failed");
                false
            }
        }
    }

    /// Runs the simulation and reports every step to `observer`.
    ///
    /// The observer sees step 0 before any integration and then each step in
    /// turn, and may return [`Action::StopEarly`] to end the run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] before any state change if the config
    /// fails validation, or [`Error::NonFiniteState`] if
    /// [`Config::halt_on_non_finite`] is set and a step produces a `NaN` or
    /// infinite component.
    pub fn run_observed<Obs>(&mut self, mut observer: Obs) -> Result<Solution, Error>
    where
        Obs: Observer<Event<E, N>, Action>,
    {
        if let Err(reason) = self.config.validate() {
            self.phase = Phase::Failed;
            return Err(Error::InvalidConfig { reason });
        }

        let Config {
            duration,
            step: dt,
            halt_on_non_finite,
            ..
        } = self.config;

        self.phase = Phase::Running;
        self.elapsed = 0.0;
        self.steps = 0;

        if let Some(Action::StopEarly) = observer.observe(&self.event()) {
            return Ok(self.stop());
        }

        while self.elapsed < duration {
            midpoint::step(&mut self.entity, dt);
            self.elapsed += dt;
            self.steps += 1;

            tracing::trace!(step = self.steps, elapsed = self.elapsed, "advanced");

            if halt_on_non_finite && !self.entity.state().is_finite() {
                self.phase = Phase::Failed;
                return Err(Error::NonFiniteState {
                    step: self.steps,
                    elapsed: self.elapsed,
                });
            }

            if let Some(Action::StopEarly) = observer.observe(&self.event()) {
                return Ok(self.stop());
            }
        }

        self.phase = Phase::Completed;
        tracing::debug!(steps = self.steps, elapsed = self.elapsed, "simulation complete");

        Ok(Solution {
            status: Status::Complete,
            steps: self.steps,
            elapsed: self.elapsed,
        })
    }

    /// Returns a copy of the entity's current state.
    #[must_use]
    pub fn output(&self) -> StateVector<N> {
        *self.entity.state()
    }

    /// Returns the owned entity.
    pub fn entity(&self) -> &E {
        &self.entity
    }

    /// Consumes the simulation and returns the entity.
    pub fn into_entity(self) -> E {
        self.entity
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Simulated time elapsed in the most recent run.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of steps taken in the most recent run.
    pub fn steps(&self) -> usize {
        self.steps
    }

    fn event(&self) -> Event<E, N> {
        Event {
            step: self.steps,
            elapsed: self.elapsed,
            entity: self.entity,
        }
    }

    fn stop(&mut self) -> Solution {
        self.phase = Phase::Stopped;
        tracing::debug!(steps = self.steps, elapsed = self.elapsed, "simulation stopped early");

        Solution {
            status: Status::StoppedByObserver,
            steps: self.steps,
            elapsed: self.elapsed,
        }
    }
}
