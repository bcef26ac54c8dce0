//! Shared fixtures for the pensim integration tests.

use pensim_core::{StateVector, compare::Verdict};
use pensim_entities::{PrincipalInertia, SpinningBody};
use pensim_solvers::{Config, Simulation};

/// Duration of every pen scenario, in seconds.
pub const PEN_DURATION: f64 = 2.04;

/// Step size of every pen scenario, in seconds.
pub const PEN_STEP: f64 = 0.01;

/// Absolute tolerance used when comparing pen states.
pub const PEN_TOLERANCE: f64 = 0.01;

/// A cylinder-like pen: two equal transverse moments and a small axial one.
#[must_use]
pub fn cylinder() -> PrincipalInertia {
    PrincipalInertia::new([10.0, 10.0, 1.0]).expect("cylinder inertia is positive")
}

/// A pen launched from the origin with zero orientation.
#[must_use]
pub fn launched_pen(velocity: [f64; 3], angular_velocity: [f64; 3]) -> SpinningBody {
    SpinningBody::from_parts([0.0; 3], [0.0; 3], velocity, angular_velocity, cylinder())
}

/// Runs a pen scenario to completion and returns the finished simulation.
///
/// # Panics
///
/// Panics if the run is rejected.
#[must_use]
pub fn run_pen(pen: SpinningBody) -> Simulation<SpinningBody, 12> {
    let mut sim = Simulation::new(Config::new(PEN_DURATION, PEN_STEP), pen);
    assert!(sim.run(), "pen scenario should run");
    sim
}

/// Compares a finished pen against `expected` and returns the verdict.
#[must_use]
pub fn pen_verdict(
    name: &str,
    sim: &Simulation<SpinningBody, 12>,
    expected: [f64; 12],
) -> Verdict {
    Verdict::compare(
        name,
        &sim.output(),
        &StateVector::new(expected),
        PEN_TOLERANCE,
    )
}
