use std::fmt;

use rootwise_core::Snapshot;

/// Event emitted by the fixed-point solver once per pass.
///
/// Pass 0 reports the initial estimate. Pass `k` reports the estimate after
/// `k` updates.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// Number of updates performed so far.
    pub iter: usize,

    /// Current estimate `u`.
    pub x: f64,

    /// Image `g(u)` of the current estimate.
    pub image: f64,

    /// Model input and output at the current estimate.
    pub snapshot: &'a Snapshot<I, O>,
}

impl<I, O> Event<'_, I, O> {
    /// Returns `u - g(u)`, which vanishes at a fixed point.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.x - self.image
    }
}

impl<I, O> fmt::Display for Event<'_, I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "iter={} u={} f_u={}", self.iter, self.x, self.image)
    }
}
