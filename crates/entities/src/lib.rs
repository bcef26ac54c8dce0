//! Dynamical entities that plug into pensim integrators.
//!
//! Each entity implements [`DynamicEntity`](pensim_core::DynamicEntity) over a
//! fixed-length state vector:
//!
//! - [`ConstantVelocityParticle`] — `[position, velocity]`, no acceleration
//! - [`HarmonicOscillator`] — `[displacement, velocity]` with a fixed `k/m`
//! - [`SpinningBody`] — a rigid body under gravity with torque-free rotation

mod error;
mod oscillator;
mod particle;
mod spinning_body;

pub use error::Error;
pub use oscillator::HarmonicOscillator;
pub use particle::ConstantVelocityParticle;
pub use spinning_body::{GRAVITY, PrincipalInertia, SpinningBody};
