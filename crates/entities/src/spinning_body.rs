//! A crude spinning rigid body, such as a pen tossed into the air.
//!
//! The centre of mass follows a ballistic trajectory under gravity and the
//! rotation follows Euler's equations for a torque-free body with a diagonal
//! inertia tensor in its principal-axis frame.
//!
//! Orientation is stored as three Tait–Bryan angles whose rates are taken to be
//! the body angular velocity components directly. This is exact only when the
//! angles stay small or the spin stays about a single axis; the general
//! angle-rate transform is not applied.

use std::array;

use pensim_core::{DynamicEntity, StateVector};

use crate::Error;

/// Gravitational acceleration applied to the vertical velocity, in m/s².
pub const GRAVITY: f64 = 9.8;

const POSITION: usize = 0;
const ORIENTATION: usize = 3;
const VELOCITY: usize = 6;
const ANGULAR_VELOCITY: usize = 9;

/// Diagonal inertia tensor expressed in the principal-axis frame.
///
/// Every component is strictly positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[f64; 3]", into = "[f64; 3]")
)]
pub struct PrincipalInertia([f64; 3]);

impl PrincipalInertia {
    /// Creates an inertia tensor from its three principal moments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonPositiveInertia`] if any moment is zero, negative,
    /// or not finite.
    pub fn new(moments: [f64; 3]) -> Result<Self, Error> {
        for (axis, &value) in moments.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::NonPositiveInertia { axis, value });
            }
        }
        Ok(Self(moments))
    }

    /// Returns the principal moments `[I1, I2, I3]`.
    #[must_use]
    pub const fn moments(&self) -> [f64; 3] {
        self.0
    }
}

impl TryFrom<[f64; 3]> for PrincipalInertia {
    type Error = Error;

    fn try_from(moments: [f64; 3]) -> Result<Self, Self::Error> {
        Self::new(moments)
    }
}

impl From<PrincipalInertia> for [f64; 3] {
    fn from(inertia: PrincipalInertia) -> Self {
        inertia.0
    }
}

/// A rigid body spinning freely while falling under gravity.
///
/// State layout:
///
/// | index | meaning                                   |
/// |-------|-------------------------------------------|
/// | 0..3  | centre of mass `x, y, z`                  |
/// | 3..6  | orientation `theta, phi, psi`             |
/// | 6..9  | linear velocity `vx, vy, vz`              |
/// | 9..12 | angular velocity about the principal axes |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinningBody {
    state: StateVector<12>,
    inertia: PrincipalInertia,
}

impl SpinningBody {
    /// Creates a body from a full state vector and its inertia.
    #[must_use]
    pub const fn new(state: StateVector<12>, inertia: PrincipalInertia) -> Self {
        Self { state, inertia }
    }

    /// Creates a body from grouped position, orientation, and velocities.
    #[must_use]
    pub fn from_parts(
        position: [f64; 3],
        orientation: [f64; 3],
        velocity: [f64; 3],
        angular_velocity: [f64; 3],
        inertia: PrincipalInertia,
    ) -> Self {
        let groups = [position, orientation, velocity, angular_velocity];
        let state = array::from_fn(|i| groups[i / 3][i % 3]);
        Self::new(StateVector::new(state), inertia)
    }

    #[must_use]
    pub const fn inertia(&self) -> PrincipalInertia {
        self.inertia
    }

    #[must_use]
    pub fn position(&self) -> [f64; 3] {
        self.group(POSITION)
    }

    #[must_use]
    pub fn orientation(&self) -> [f64; 3] {
        self.group(ORIENTATION)
    }

    #[must_use]
    pub fn velocity(&self) -> [f64; 3] {
        self.group(VELOCITY)
    }

    #[must_use]
    pub fn angular_velocity(&self) -> [f64; 3] {
        self.group(ANGULAR_VELOCITY)
    }

    /// Returns the body-frame angular momentum `I·ω`.
    #[must_use]
    pub fn angular_momentum(&self) -> [f64; 3] {
        let moments = self.inertia.moments();
        let omega = self.angular_velocity();
        array::from_fn(|i| moments[i] * omega[i])
    }

    /// Returns the rotational kinetic energy `½ Σ Iᵢ ωᵢ²`.
    #[must_use]
    pub fn rotational_energy(&self) -> f64 {
        let moments = self.inertia.moments();
        let omega = self.angular_velocity();
        0.5 * moments
            .iter()
            .zip(omega)
            .map(|(i, w)| i * w * w)
            .sum::<f64>()
    }

    fn group(&self, start: usize) -> [f64; 3] {
        array::from_fn(|i| self.state[start + i])
    }
}

impl DynamicEntity<12> for SpinningBody {
    fn state(&self) -> &StateVector<12> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut StateVector<12> {
        &mut self.state
    }

    fn derivatives(&self) -> StateVector<12> {
        let s = &self.state;
        let [i1, i2, i3] = self.inertia.moments();
        let [w1, w2, w3] = self.angular_velocity();

        let mut derivs = StateVector::zeros();

        // Position and orientation rates are the linear and angular velocities.
        for i in 0..6 {
            derivs[i] = s[i + VELOCITY];
        }

        derivs[VELOCITY] = 0.0;
        derivs[VELOCITY + 1] = 0.0;
        derivs[VELOCITY + 2] = -GRAVITY;

        // Euler's equations, torque free.
        derivs[ANGULAR_VELOCITY] = w2 * w3 * (i2 - i3) / i1;
        derivs[ANGULAR_VELOCITY + 1] = w3 * w1 * (i3 - i1) / i2;
        derivs[ANGULAR_VELOCITY + 2] = w1 * w2 * (i1 - i2) / i3;

        derivs
    }

    fn report(&self) -> String {
        let s = &self.state;
        format!(
            "CSP: x = {:.6}, y = {:.6}, z = {:.6}, \
             theta = {:.6}, phi = {:.6}, psi = {:.6}, \
             vel_x = {:.6}, vel_y = {:.6}, vel_z = {:.6}, \
             theta_dot = {:.6}, phi_dot = {:.6}, psi_dot = {:.6}",
            s[0], s[1], s[2], s[3], s[4], s[5], s[6], s[7], s[8], s[9], s[10], s[11],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn cylinder() -> PrincipalInertia {
        PrincipalInertia::new([10.0, 10.0, 1.0]).unwrap()
    }

    #[test]
    fn rejects_non_positive_inertia() {
        assert_eq!(
            PrincipalInertia::new([1.0, 0.0, 1.0]),
            Err(Error::NonPositiveInertia {
                axis: 1,
                value: 0.0
            })
        );
        assert!(matches!(
            PrincipalInertia::new([1.0, 1.0, -2.0]),
            Err(Error::NonPositiveInertia { axis: 2, .. })
        ));
        assert!(PrincipalInertia::new([f64::NAN, 1.0, 1.0]).is_err());
        assert!(PrincipalInertia::new([f64::INFINITY, 1.0, 1.0]).is_err());
    }

    #[test]
    fn from_parts_lays_out_state() {
        let body = SpinningBody::from_parts(
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
            [10.0, 11.0, 12.0],
            cylinder(),
        );

        let expected: [f64; 12] = array::from_fn(|i| (i + 1) as f64);
        assert_eq!(body.state().0, expected);
        assert_eq!(body.orientation(), [4.0, 5.0, 6.0]);
        assert_eq!(body.angular_velocity(), [10.0, 11.0, 12.0]);
    }

    #[test]
    fn ballistic_derivatives() {
        let body = SpinningBody::from_parts(
            [0.0; 3],
            [0.0; 3],
            [10.0, 10.0, 10.0],
            [0.0; 3],
            cylinder(),
        );

        let derivs = body.derivatives();

        assert_eq!(
            derivs.0,
            [
                10.0, 10.0, 10.0, 0.0, 0.0, 0.0, 0.0, 0.0, -GRAVITY, 0.0, 0.0, 0.0
            ]
        );
    }

    #[test]
    fn euler_equations_couple_transverse_axes() {
        let body = SpinningBody::from_parts(
            [0.0; 3],
            [0.0; 3],
            [0.0; 3],
            [10.0, 0.0, 10.0],
            cylinder(),
        );

        let derivs = body.derivatives();

        // Orientation rates mirror the angular velocity.
        assert_eq!(&derivs.0[3..6], &[10.0, 0.0, 10.0]);
        assert_relative_eq!(derivs[9], 0.0);
        assert_relative_eq!(derivs[10], 10.0 * 10.0 * (1.0 - 10.0) / 10.0);
        assert_relative_eq!(derivs[11], 0.0);
    }

    #[test]
    fn spin_about_single_axis_is_steady() {
        let body = SpinningBody::from_parts(
            [0.0; 3],
            [0.0; 3],
            [0.0; 3],
            [0.0, 0.0, 10.0],
            cylinder(),
        );

        let derivs = body.derivatives();

        assert_eq!(&derivs.0[9..12], &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn conserved_quantities() {
        let body = SpinningBody::from_parts(
            [0.0; 3],
            [0.0; 3],
            [0.0; 3],
            [1.0, 2.0, 3.0],
            PrincipalInertia::new([1.0, 2.0, 3.0]).unwrap(),
        );

        assert_eq!(body.angular_momentum(), [1.0, 4.0, 9.0]);
        assert_relative_eq!(body.rotational_energy(), 0.5 * (1.0 + 8.0 + 27.0));
    }

    #[test]
    fn report_lists_every_component() {
        let body = SpinningBody::from_parts(
            [0.0; 3],
            [0.0; 3],
            [10.0, 10.0, 10.0],
            [0.0, 0.0, 10.0],
            cylinder(),
        );

        let report = body.report();

        assert_eq!(report, body.report());
        assert!(report.starts_with("CSP: x = 0.000000"));
        assert!(report.contains("vel_z = 10.000000"));
        assert!(report.ends_with("psi_dot = 10.000000"));
        assert_eq!(report.matches(" = ").count(), 12);
    }
}
