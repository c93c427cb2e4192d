//! Newton-Raphson root finding for scalar equations.
//!
//! # Algorithm
//!
//! Starting from an initial estimate, each pass replaces `x` with
//! `x - f(x) / f'(x)`, where `f'(x)` is a forward-difference estimate
//! (see [`forward_difference`]). The slope must clear a zero-slope floor
//! according to the configured [`SlopeCheck`]; otherwise the solve fails with
//! [`Error::NonConvergentDerivative`] rather than dividing by a vanishing slope.
//!
//! # Stopping
//!
//! Each pass checks, in order:
//!
//! 1. `|f(x)| <= y_tol` before updating → [`StopCode::FunctionValueBelowTolerance`].
//!    This also fires on the initial estimate without spending an iteration.
//! 2. `|x_new - x| < root_tol` after updating → [`StopCode::StepBelowTolerance`].
//!
//! If `max_iters` passes complete without either firing, the result carries
//! [`StopCode::MaxIterationsExceeded`]. The function value produced by the
//! final pass is not re-checked.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] after each update, carrying the iteration,
//! the new estimate and its function value. Observers can return
//! [`Action::StopEarly`] to halt with [`StopCode::StoppedByObserver`].

mod action;
mod config;
mod derivative;
mod error;
mod event;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use derivative::{SlopeCheck, forward_difference};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, StopCode};

use rootwise_core::{EquationProblem, Model, Observer};

use crate::equation::{Evaluation, evaluate};

/// Finds a root of the equation using Newton-Raphson iteration.
///
/// See the [module docs](self) for the stopping rules and observer events.
///
/// # Errors
///
/// Returns an error if a slope estimate fails the zero-slope check, or if the
/// model or problem fails during evaluation.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    initial_estimate: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let mut current = evaluate(model, problem, initial_estimate)?;
    let mut iters = 0;

    let stop_code = 'search: {
        for iter in 1..=config.max_iters() {
            if current.residual.abs() <= config.y_tol() {
                break 'search StopCode::FunctionValueBelowTolerance;
            }

            let previous = current;
            let slope = slope_at(model, problem, &previous, config)?;
            current = evaluate(model, problem, previous.x - previous.residual / slope)?;
            iters = iter;

            let event = Event {
                iter,
                x: current.x,
                previous_x: previous.x,
                y: current.residual,
                slope,
                snapshot: &current.snapshot,
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                break 'search StopCode::StoppedByObserver;
            }

            if (current.x - previous.x).abs() < config.root_tol() {
                break 'search StopCode::StepBelowTolerance;
            }
        }

        // An empty budget still reports an initial estimate within y_tol.
        if config.max_iters() == 0 && current.residual.abs() <= config.y_tol() {
            StopCode::FunctionValueBelowTolerance
        } else {
            StopCode::MaxIterationsExceeded
        }
    };

    Ok(Solution {
        iters,
        root: current.x,
        y_value: current.residual,
        stop_code,
        snapshot: current.snapshot,
    })
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// Returns an error if a slope estimate fails the zero-slope check, or if the
/// model or problem fails during evaluation.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    initial_estimate: f64,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, initial_estimate, config, ())
}

/// Estimates the slope at an evaluated point and checks it against the floor.
fn slope_at<M, P>(
    model: &M,
    problem: &P,
    at: &Evaluation<M::Input, M::Output>,
    config: &Config,
) -> Result<f64, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    let slope = forward_difference(
        |x| evaluate(model, problem, x).map(|eval| eval.residual),
        at.x,
        at.residual,
        config.step(),
    )?;

    if config.slope_check().accepts(slope, config.zero_slope()) {
        Ok(slope)
    } else {
        Err(Error::NonConvergentDerivative {
            x: at.x,
            slope,
            zero_slope: config.zero_slope(),
        })
    }
}
