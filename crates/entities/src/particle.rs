use pensim_core::{DynamicEntity, StateVector};

/// A particle moving with constant velocity.
///
/// State is `[position, velocity]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantVelocityParticle {
    state: StateVector<2>,
}

impl ConstantVelocityParticle {
    /// Creates a particle at `position` moving with `velocity`.
    #[must_use]
    pub const fn new(position: f64, velocity: f64) -> Self {
        Self {
            state: StateVector::new([position, velocity]),
        }
    }

    #[must_use]
    pub fn position(&self) -> f64 {
        self.state[0]
    }

    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.state[1]
    }
}

impl From<[f64; 2]> for ConstantVelocityParticle {
    fn from([position, velocity]: [f64; 2]) -> Self {
        Self::new(position, velocity)
    }
}

impl DynamicEntity<2> for ConstantVelocityParticle {
    fn state(&self) -> &StateVector<2> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut StateVector<2> {
        &mut self.state
    }

    fn derivatives(&self) -> StateVector<2> {
        StateVector::new([self.state[1], 0.0])
    }

    fn report(&self) -> String {
        format!("CVP: x = {:.6}, vel_x = {:.6}", self.state[0], self.state[1])
    }
}
