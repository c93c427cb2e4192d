use std::convert::Infallible;

/// Defines a fixed-point problem to be solved.
///
/// A fixed-point problem maps the current estimate `u` to a model input,
/// then extracts the image `g(u)` from the model input and output.
/// Solvers search for `u` such that `u = g(u)`.
pub trait FixedPointProblem {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps the current estimate into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: f64) -> Result<Self::Input, Self::Error>;

    /// Extracts the image of the estimate from model input/output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the image cannot be computed.
    fn image(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;
}

/// Fixed-point problem whose image is the model output itself.
///
/// Solving this problem finds `u` such that `g(u) = u` for an
/// `f64 -> f64` model `g`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Direct;

impl FixedPointProblem for Direct {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(x)
    }

    fn image(&self, _input: &f64, output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}
