use pensim_core::{DynamicEntity, StateVector};

/// A simple harmonic oscillator.
///
/// State is `[displacement, velocity]` and the acceleration is
/// `-(k/m) * displacement`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonicOscillator {
    state: StateVector<2>,
    k_over_m: f64,
}

impl HarmonicOscillator {
    /// Creates an oscillator from an initial state and a spring-to-mass ratio.
    #[must_use]
    pub const fn new(displacement: f64, velocity: f64, k_over_m: f64) -> Self {
        Self {
            state: StateVector::new([displacement, velocity]),
            k_over_m,
        }
    }

    /// Returns the spring-to-mass ratio `k/m`.
    #[must_use]
    pub const fn k_over_m(&self) -> f64 {
        self.k_over_m
    }

    /// Returns the angular frequency `sqrt(k/m)`.
    #[must_use]
    pub fn angular_frequency(&self) -> f64 {
        self.k_over_m.sqrt()
    }

    /// Returns the specific mechanical energy `(v² + (k/m)·x²) / 2`.
    #[must_use]
    pub fn specific_energy(&self) -> f64 {
        let [x, v] = self.state.0;
        0.5 * (v * v + self.k_over_m * x * x)
    }
}

impl DynamicEntity<2> for HarmonicOscillator {
    fn state(&self) -> &StateVector<2> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut StateVector<2> {
        &mut self.state
    }

    fn derivatives(&self) -> StateVector<2> {
        StateVector::new([self.state[1], -self.k_over_m * self.state[0]])
    }

    fn report(&self) -> String {
        format!("SHO: x = {:.6}, vel_x = {:.6}", self.state[0], self.state[1])
    }
}
