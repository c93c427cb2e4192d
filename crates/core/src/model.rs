use std::{convert::Infallible, marker::PhantomData};

/// A callable model that maps a typed input to a typed output.
///
/// Models must be deterministic, always producing the same result for a given
/// input. Solvers rely on this to make repeated solves bit-identical.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type to represent domain-specific failures.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A captured input/output pair from a model call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a new snapshot from input and output values.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

/// A model backed by a plain real-valued function.
///
/// The wrapped function is treated as total, so the model never fails.
///
/// ```
/// use rootwise_core::{Function, Model};
///
/// let square = Function::new(|x: f64| x * x);
/// assert_eq!(square.call(&3.0), Ok(9.0));
/// ```
pub struct Function<F> {
    function: F,
    _marker: PhantomData<fn(f64) -> f64>,
}

impl<F> Function<F>
where
    F: Fn(f64) -> f64,
{
    /// Wraps a function as a model.
    pub const fn new(function: F) -> Self {
        Self {
            function,
            _marker: PhantomData,
        }
    }
}

impl<F> Model for Function<F>
where
    F: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Self::Error> {
        Ok((self.function)(*input))
    }
}

impl<F> From<F> for Function<F>
where
    F: Fn(f64) -> f64,
{
    fn from(function: F) -> Self {
        Function::new(function)
    }
}
