//! Midpoint (second-order Runge–Kutta) step.
//!
//! ```text
//! mid          = state_n + (dt / 2) * derivative(state_n)
//! state_{n+1}  = state_n + dt * derivative(mid)
//! ```
//!
//! The half step is taken on a copy of the entity, so the original is touched
//! exactly once. Local truncation error is `O(dt³)`.

use pensim_core::DynamicEntity;

use super::euler;

/// Advances `entity` in place by one midpoint step of size `dt`.
pub fn step<E, const N: usize>(entity: &mut E, dt: f64)
where
    E: DynamicEntity<N>,
{
    let mut mid = *entity;
    euler::step(&mut mid, 0.5 * dt);

    let mid_derivs = mid.derivatives();
    entity.advance(&mid_derivs, dt);
}
