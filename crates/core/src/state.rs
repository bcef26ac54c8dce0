use std::{
    fmt,
    ops::{Index, IndexMut},
};

use crate::StepIntegrable;

/// A fixed-length vector of state components.
///
/// The length `N` is part of the type, so a state can never change size over
/// the lifetime of the entity that owns it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector<const N: usize>(pub [f64; N]);

impl<const N: usize> StateVector<N> {
    /// Creates a state vector from its components.
    #[must_use]
    pub const fn new(components: [f64; N]) -> Self {
        Self(components)
    }

    /// Creates a state vector with every component set to zero.
    #[must_use]
    pub const fn zeros() -> Self {
        Self([0.0; N])
    }

    /// Returns the number of components.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` if the vector has no components.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the components as an array reference.
    #[must_use]
    pub const fn as_array(&self) -> &[f64; N] {
        &self.0
    }

    /// Returns an iterator over the components.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    /// Returns `true` if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|x| x.is_finite())
    }
}

impl<const N: usize> Default for StateVector<N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const N: usize> From<[f64; N]> for StateVector<N> {
    fn from(components: [f64; N]) -> Self {
        Self(components)
    }
}

impl<const N: usize> From<StateVector<N>> for [f64; N] {
    fn from(state: StateVector<N>) -> Self {
        state.0
    }
}

impl<const N: usize> Index<usize> for StateVector<N> {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl<const N: usize> IndexMut<usize> for StateVector<N> {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.0[index]
    }
}

impl<'a, const N: usize> IntoIterator for &'a StateVector<N> {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Steps each component: `state[i] + delta * derivative[i]`.
impl<const N: usize> StepIntegrable<f64> for StateVector<N> {
    type Derivative = StateVector<N>;

    fn step(&self, derivative: &Self::Derivative, delta: f64) -> Self {
        let mut next = *self;
        for (x, dx) in next.0.iter_mut().zip(derivative.iter()) {
            *x += delta * dx;
        }
        next
    }
}

/// Renders components as `[a, b, ...]` with six decimal places.
impl<const N: usize> fmt::Display for StateVector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{x:.6}")?;
        }
        f.write_str("]")
    }
}
