use rootwise_core::{FixedPointProblem, Model, Snapshot};

use super::Error;

/// An estimate paired with its image under the iteration function.
#[derive(Debug, Clone)]
pub(super) struct Evaluation<I, O> {
    pub(super) x: f64,
    pub(super) image: f64,
    pub(super) snapshot: Snapshot<I, O>,
}

impl<I, O> Evaluation<I, O> {
    /// Returns true while `|u - g(u)|` is at least `tolerance`.
    ///
    /// A NaN difference is never at least `tolerance`, so it ends iteration.
    pub(super) fn is_outside(&self, tolerance: f64) -> bool {
        (self.x - self.image).abs() >= tolerance
    }

    pub(super) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.image.is_finite()
    }
}

/// Maps `x` to model input, calls the model, then extracts the image.
pub(super) fn evaluate<M, P>(
    model: &M,
    problem: &P,
    x: f64,
) -> Result<Evaluation<M::Input, M::Output>, Error>
where
    M: Model,
    P: FixedPointProblem<Input = M::Input, Output = M::Output>,
{
    let input = problem.input(x).map_err(Error::problem)?;
    let output = model.call(&input).map_err(Error::model)?;
    let image = problem.image(&input, &output).map_err(Error::problem)?;

    Ok(Evaluation {
        x,
        image,
        snapshot: Snapshot::new(input, output),
    })
}
