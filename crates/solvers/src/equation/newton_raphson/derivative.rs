//! Forward-difference slope estimation.

/// Estimates `f'(x)` as `(f(x + step) - f(x)) / step`.
///
/// `fx` is the already-known value of `f(x)`, so only the forward sample is
/// evaluated. Failures from `f` are returned unchanged.
///
/// ```
/// use rootwise_solvers::equation::newton_raphson::forward_difference;
///
/// let slope = forward_difference(|x| Ok::<_, ()>(x * x), 3.0, 9.0, 1e-6).unwrap();
/// assert!((slope - 6.0).abs() < 1e-5);
/// ```
///
/// # Errors
///
/// Returns the error produced by `f` at `x + step`.
pub fn forward_difference<F, E>(mut f: F, x: f64, fx: f64, step: f64) -> Result<f64, E>
where
    F: FnMut(f64) -> Result<f64, E>,
{
    let forward = f(x + step)?;
    Ok((forward - fx) / step)
}

/// How an estimated slope is compared against the zero-slope floor.
///
/// A slope that fails the check stops the solve, since dividing by it would
/// send the next estimate far from the current one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlopeCheck {
    /// Accept only `slope > zero_slope`.
    ///
    /// Every negative slope is rejected, so only increasing functions can be
    /// solved with this check.
    #[default]
    Positive,

    /// Accept only `|slope| > zero_slope`.
    Magnitude,
}

impl SlopeCheck {
    /// Returns true if the slope clears the floor. NaN never does.
    #[must_use]
    pub fn accepts(self, slope: f64, zero_slope: f64) -> bool {
        match self {
            Self::Positive => slope > zero_slope,
            Self::Magnitude => slope.abs() > zero_slope,
        }
    }
}
