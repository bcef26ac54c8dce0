//! Tosses a spinning pen into the air and prints its state at every step.
//!
//! Run with:
//!   cargo run -p pensim-demos --example spinning_pen

use pensim_entities::{PrincipalInertia, SpinningBody};
use pensim_solvers::{Config, Simulation};

fn main() {
    pensim_demos::init_tracing();

    // Cylinder in body coordinates.
    let inertia = match PrincipalInertia::new([10.0, 10.0, 1.0]) {
        Ok(inertia) => inertia,
        Err(error) => {
            tracing::error!(%error, "invalid inertia");
            return;
        }
    };

    let pen = SpinningBody::from_parts(
        [2.0, 3.0, 4.0],
        [0.5, 0.6, 0.7],
        [5.0, 5.0, 10.0],
        [10.0, 10.0, 10.0],
        inertia,
    );

    let config = Config::new(2.04, 0.01).with_verbose(true);
    let mut sim = Simulation::new(config, pen);

    if sim.run() {
        let pen = sim.entity();
        tracing::info!(
            steps = sim.steps(),
            elapsed = sim.elapsed(),
            rotational_energy = pen.rotational_energy(),
            "pen landed"
        );
    } else {
        tracing::error!("simulation failed");
    }
}
