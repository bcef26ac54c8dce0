//! Core traits and types for pensim.
//!
//! This crate defines the shared abstractions that entities and solvers build on:
//!
//! - [`StateVector`] — a fixed-length vector of state components
//! - [`StepIntegrable`] — a type that can be stepped by `derivative * delta`
//! - [`DynamicEntity`] — a state vector with a derivative and a text report
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`compare`] — element-wise float comparison used as a test oracle

pub mod compare;

mod entity;
mod observer;
mod state;
mod step;

pub use entity::DynamicEntity;
pub use observer::Observer;
pub use state::StateVector;
pub use step::{DerivativeOf, StepIntegrable};
