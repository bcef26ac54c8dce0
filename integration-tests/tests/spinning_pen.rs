use approx::assert_relative_eq;
use integration_tests::{PEN_DURATION, launched_pen, pen_verdict, run_pen};
use pensim_core::DynamicEntity;
use pensim_solvers::simulation::Phase;

#[test]
fn no_spin_returns_to_launch_height() {
    let sim = run_pen(launched_pen([10.0, 10.0, 10.0], [0.0; 3]));

    #[rustfmt::skip]
    let expected = [
        20.4, 20.4, 0.0,
        0.0, 0.0, 0.0,
        10.0, 10.0, -10.0,
        0.0, 0.0, 0.0,
    ];

    let verdict = pen_verdict("No Spin States Equal", &sim, expected);
    assert!(verdict.passed, "{verdict}: {}", sim.output());
    assert_eq!(sim.phase(), Phase::Completed);
    assert_eq!(sim.steps(), 204);
}

#[test]
fn spin_about_symmetry_axis_is_steady() {
    let sim = run_pen(launched_pen([10.0, 10.0, 10.0], [0.0, 0.0, 10.0]));

    #[rustfmt::skip]
    let expected = [
        20.4, 20.4, 0.0,
        0.0, 0.0, 20.4,
        10.0, 10.0, -10.0,
        0.0, 0.0, 10.0,
    ];

    let verdict = pen_verdict("Z Spin States Equal", &sim, expected);
    assert!(verdict.passed, "{verdict}: {}", sim.output());
}

#[test]
fn flat_spin_is_steady() {
    let sim = run_pen(launched_pen([10.0, 10.0, 10.0], [10.0, 0.0, 0.0]));

    #[rustfmt::skip]
    let expected = [
        20.4, 20.4, 0.0,
        20.4, 0.0, 0.0,
        10.0, 10.0, -10.0,
        10.0, 0.0, 0.0,
    ];

    let verdict = pen_verdict("Flat States Equal", &sim, expected);
    assert!(verdict.passed, "{verdict}: {}", sim.output());
}

#[test]
fn torque_free_precession_exchanges_spin_between_axes() {
    let pen = launched_pen([10.0, 10.0, 10.0], [10.0, 0.0, 10.0]);
    let initial_energy = pen.rotational_energy();

    let sim = run_pen(pen);
    let landed = sim.entity();
    let [w1, w2, w3] = landed.angular_velocity();

    assert!(sim.output()[10] != 0.0);
    assert!(w2.abs() > 1.0, "phi_dot was {w2}");

    // Equal transverse moments keep the axial spin fixed and the transverse
    // magnitude constant up to integration error.
    assert_relative_eq!(w3, 10.0, epsilon = 1e-9);
    assert_relative_eq!(w1.hypot(w2), 10.0, max_relative = 1e-2);
    assert_relative_eq!(landed.rotational_energy(), initial_energy, max_relative = 1e-2);
}

#[test]
fn elapsed_time_covers_duration() {
    let sim = run_pen(launched_pen([0.0; 3], [0.0; 3]));

    assert!(sim.elapsed() >= PEN_DURATION);
    assert!(sim.elapsed() < PEN_DURATION + 0.01);
}

#[test]
fn report_is_idempotent() {
    let sim = run_pen(launched_pen([10.0, 10.0, 10.0], [10.0, 0.0, 10.0]));
    let pen = sim.entity();

    assert_eq!(pen.report(), pen.report());
}
