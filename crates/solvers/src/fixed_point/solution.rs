use rootwise_core::Snapshot;

/// Indicates how the fixed-point iteration terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The estimate and its image are within tolerance.
    Converged,

    /// Iteration ended because the estimate or its image is not finite.
    NotFinite,

    /// Reached the configured iteration cap without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a fixed-point iteration.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution<I, O> {
    /// How the solver terminated.
    pub status: Status,

    /// Final estimate `u`.
    pub x: f64,

    /// Image `g(u)` of the final estimate.
    pub image: f64,

    /// Number of updates performed.
    pub iters: usize,

    /// Snapshot at the final estimate.
    pub snapshot: Snapshot<I, O>,
}
