use thiserror::Error;

/// Errors that can occur while running a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("non-finite state after step {step} at t = {elapsed}")]
    NonFiniteState { step: usize, elapsed: f64 },
}
