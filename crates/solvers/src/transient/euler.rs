//! Forward Euler step.
//!
//! ```text
//! state_{n+1} = state_n + dt * derivative(state_n)
//! ```
//!
//! Local truncation error is `O(dt²)`. This is mainly a building block for
//! [`midpoint`](super::midpoint).

use pensim_core::DynamicEntity;

/// Advances `entity` in place by one forward Euler step of size `dt`.
///
/// Derivatives are evaluated once, at the start of the step.
pub fn step<E, const N: usize>(entity: &mut E, dt: f64)
where
    E: DynamicEntity<N>,
{
    let derivs = entity.derivatives();
    entity.advance(&derivs, dt);
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use pensim_core::{StateVector, compare::float_equals};
    use pensim_entities::{ConstantVelocityParticle, HarmonicOscillator};

    #[test]
    fn constant_velocity_is_exact() {
        let mut particle = ConstantVelocityParticle::new(0.0, 1.0);

        step(&mut particle, 0.1);

        assert!(float_equals(
            particle.state(),
            &StateVector::new([0.1, 1.0]),
            1.0e-6
        ));
    }

    #[test]
    fn uses_derivative_at_start_of_step() {
        let mut spring = HarmonicOscillator::new(1.0, 0.0, 4.0);

        step(&mut spring, 0.5);

        // Velocity was zero at the start, so displacement is unchanged.
        assert_relative_eq!(spring.state()[0], 1.0);
        assert_relative_eq!(spring.state()[1], -2.0);
    }

    #[test]
    fn first_order_convergence() {
        let error = |n: usize| {
            let dt = 1.0 / n as f64;
            let mut spring = HarmonicOscillator::new(1.0, 0.0, 1.0);
            for _ in 0..n {
                step(&mut spring, dt);
            }
            (spring.state()[0] - 1.0_f64.cos()).abs()
        };

        let ratio = error(100) / error(200);

        assert!((1.8..2.2).contains(&ratio), "ratio was {ratio}");
    }
}
