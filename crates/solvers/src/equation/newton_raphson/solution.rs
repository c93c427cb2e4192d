use rootwise_core::Snapshot;

/// Indicates which stopping condition ended the solve.
///
/// Conditions are checked in a fixed order each pass: function value, then
/// (after the update) step size. The iteration budget applies only when
/// neither fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopCode {
    /// Ran out of iterations before either tolerance was met.
    MaxIterationsExceeded,

    /// `|f(x)| <= y_tol` at the start of a pass.
    FunctionValueBelowTolerance,

    /// The last update moved the estimate by less than `root_tol`.
    StepBelowTolerance,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl StopCode {
    /// Returns the numeric stop condition code.
    ///
    /// `1` for an exhausted budget, `2` for a small function value and `3`
    /// for a small step. Observer stops have no numeric code.
    #[must_use]
    pub fn code(self) -> Option<u8> {
        match self {
            Self::MaxIterationsExceeded => Some(1),
            Self::FunctionValueBelowTolerance => Some(2),
            Self::StepBelowTolerance => Some(3),
            Self::StoppedByObserver => None,
        }
    }

    /// Returns true if a tolerance was met.
    #[must_use]
    pub fn is_converged(self) -> bool {
        matches!(
            self,
            Self::FunctionValueBelowTolerance | Self::StepBelowTolerance
        )
    }
}

/// The result of a Newton-Raphson solve.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution<I, O> {
    /// Number of Newton updates performed.
    pub iters: usize,

    /// Final estimate of the root.
    pub root: f64,

    /// Function value at `root`.
    pub y_value: f64,

    /// Why the solver stopped.
    pub stop_code: StopCode,

    /// Snapshot at `root`.
    pub snapshot: Snapshot<I, O>,
}
