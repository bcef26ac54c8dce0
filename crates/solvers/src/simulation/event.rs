use pensim_core::{DynamicEntity, StateVector};

/// Control actions supported by the simulation driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run early and keep the state reached so far.
    StopEarly,
}

/// Event emitted by the simulation driver.
///
/// Step 0 is the initial state before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone, Copy)]
pub struct Event<E, const N: usize> {
    /// The step number (0 for initial, 1..N for integration steps).
    pub step: usize,

    /// Simulated time elapsed when the event was emitted.
    pub elapsed: f64,

    /// Copy of the entity at this step.
    pub entity: E,
}

impl<E, const N: usize> Event<E, N>
where
    E: DynamicEntity<N>,
{
    #[must_use]
    pub fn state(&self) -> &StateVector<N> {
        self.entity.state()
    }
}
