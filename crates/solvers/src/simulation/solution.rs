/// Indicates how a run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Elapsed time reached the configured duration.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// Summary of a successful run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// How the run terminated.
    pub status: Status,

    /// Number of integration steps taken.
    pub steps: usize,

    /// Simulated time elapsed, which may overshoot the duration by up to one step.
    pub elapsed: f64,
}

/// Lifecycle of a [`Simulation`](super::Simulation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    NotStarted,
    Running,
    Completed,
    Stopped,
    Failed,
}
