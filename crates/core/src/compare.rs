//! Element-wise float comparison and pass/fail verdicts.
//!
//! These helpers are the oracle for simulation scenarios: two state vectors
//! match when every pair of components differs by at most `epsilon`.

use std::fmt;

use crate::StateVector;

/// Returns `true` if `|actual[i] - expected[i]| <= epsilon` for every `i`.
///
/// A `NaN` component never matches.
#[must_use]
pub fn float_equals<const N: usize>(
    actual: &StateVector<N>,
    expected: &StateVector<N>,
    epsilon: f64,
) -> bool {
    actual
        .iter()
        .zip(expected.iter())
        .all(|(a, b)| (a - b).abs() <= epsilon)
}

/// The outcome of a named scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub name: String,
    pub passed: bool,
}

impl Verdict {
    /// Creates a verdict for the named scenario.
    pub fn new(name: impl Into<String>, passed: bool) -> Self {
        Self {
            name: name.into(),
            passed,
        }
    }

    /// Compares two states and records the result under `name`.
    pub fn compare<const N: usize>(
        name: impl Into<String>,
        actual: &StateVector<N>,
        expected: &StateVector<N>,
        epsilon: f64,
    ) -> Self {
        Self::new(name, float_equals(actual, expected, epsilon))
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed {
            write!(f, "Test {}......passed.", self.name)
        } else {
            write!(f, "Test {}.....FAILED!", self.name)
        }
    }
}
