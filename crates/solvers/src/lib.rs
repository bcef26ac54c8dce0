//! Fixed-step integrators and a simulation driver.
//!
//! - [`transient`] — stateless stepping functions (forward Euler, midpoint)
//! - [`simulation`] — a driver that owns an entity and advances it to a target time

pub mod simulation;
pub mod transient;

pub use simulation::{Config, Simulation};
