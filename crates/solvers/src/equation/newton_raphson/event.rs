use std::fmt;

use rootwise_core::Snapshot;

/// Event emitted by the Newton-Raphson solver after each update.
///
/// Iterations are 1-based. No event is emitted for the initial estimate.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// Iteration counter.
    pub iter: usize,

    /// The new estimate.
    pub x: f64,

    /// The estimate the update started from.
    pub previous_x: f64,

    /// Function value at the new estimate.
    pub y: f64,

    /// Slope estimate used for the update.
    pub slope: f64,

    /// Model input and output at the new estimate.
    pub snapshot: &'a Snapshot<I, O>,
}

impl<I, O> Event<'_, I, O> {
    /// Returns the signed size of the update.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.x - self.previous_x
    }
}

impl<I, O> fmt::Display for Event<'_, I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "iter={} x={} y={}", self.iter, self.x, self.y)
    }
}
