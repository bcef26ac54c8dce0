use crate::{StateVector, StepIntegrable};

/// A dynamical entity with an `N`-component state vector.
///
/// An entity exposes its state, computes the time derivative of that state,
/// and renders a human-readable report of it.
/// Integrators are generic over this trait, so derivative evaluation is
/// statically dispatched.
///
/// Entities must be `Copy`: the midpoint integrator evaluates derivatives on a
/// duplicated, half-advanced entity and never shares state with the original.
pub trait DynamicEntity<const N: usize>: Copy {
    /// Returns the current state.
    fn state(&self) -> &StateVector<N>;

    /// Returns mutable access to the current state.
    ///
    /// Integrators normally go through [`DynamicEntity::advance`] instead.
    fn state_mut(&mut self) -> &mut StateVector<N>;

    /// Computes the time derivative of every state component.
    ///
    /// Depends only on the current state and fixed parameters.
    fn derivatives(&self) -> StateVector<N>;

    /// Renders every state component as text for status output.
    fn report(&self) -> String;

    /// Advances the state in place: `state[i] += dt * derivative[i]`.
    fn advance(&mut self, derivative: &StateVector<N>, dt: f64) {
        let next = self.state().step(derivative, dt);
        *self.state_mut() = next;
    }
}
