use thiserror::Error;

/// Errors that can occur when constructing an entity.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error("inertia about axis {axis} must be positive and finite, got {value}")]
    NonPositiveInertia { axis: usize, value: f64 },
}
