//! Compares forward Euler and midpoint steps on a harmonic oscillator.
//!
//! Both integrators run for one period at several step sizes; the error
//! against the exact solution shrinks linearly for Euler and quadratically
//! for midpoint.
//!
//! Run with:
//!   cargo run -p pensim-demos --example integrator_comparison

use std::f64::consts::PI;

use pensim_core::DynamicEntity;
use pensim_entities::HarmonicOscillator;
use pensim_solvers::transient::{euler, midpoint};

fn main() {
    pensim_demos::init_tracing();

    let k_over_m: f64 = 4.0;
    let period = 2.0 * PI / k_over_m.sqrt();

    for steps in [50_usize, 100, 200, 400] {
        let dt = period / steps as f64;

        let mut by_euler = HarmonicOscillator::new(1.0, 0.0, k_over_m);
        let mut by_midpoint = by_euler;
        for _ in 0..steps {
            euler::step(&mut by_euler, dt);
            midpoint::step(&mut by_midpoint, dt);
        }

        // After one period the exact state is back at [1, 0].
        let euler_error = (by_euler.state()[0] - 1.0).abs();
        let midpoint_error = (by_midpoint.state()[0] - 1.0).abs();

        tracing::info!(
            steps,
            dt,
            euler_error,
            midpoint_error,
            euler_energy = by_euler.specific_energy(),
            midpoint_energy = by_midpoint.specific_energy(),
            "one period"
        );
    }
}
