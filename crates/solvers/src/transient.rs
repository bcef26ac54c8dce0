//! Fixed-step explicit integrators.
//!
//! Each integrator advances a [`DynamicEntity`] in place by a single step.
//! None of them adapt the step size or estimate error.
//!
//! - [`euler`] — first order, one derivative evaluation per step
//! - [`midpoint`] — second order, two derivative evaluations per step
//!
//! [`DynamicEntity`]: pensim_core::DynamicEntity

pub mod euler;
pub mod midpoint;
